//! Processing order of the requirement set.

use petgraph::graph::NodeIndex;
use rand::seq::SliceRandom;
use rand::Rng;

/// Sorts nodes ascending by direct-dependency count.
///
/// The sort is stable: courses with equal counts keep their input order.
pub fn order_by_dependency_count(
    nodes: impl IntoIterator<Item = NodeIndex>,
    num_children: &[usize],
) -> Vec<NodeIndex> {
    let mut order: Vec<NodeIndex> = nodes.into_iter().collect();
    order.sort_by_key(|n| num_children[n.index()]);
    order
}

/// Shuffles each run of equal dependency counts in place.
///
/// `order` must already be sorted by `num_children`; the runs stay in place,
/// only their members move.
pub fn shuffle_ties<R: Rng + ?Sized>(order: &mut [NodeIndex], num_children: &[usize], rng: &mut R) {
    let mut start = 0;
    while start < order.len() {
        let count = num_children[order[start].index()];
        let end = order[start..]
            .iter()
            .position(|n| num_children[n.index()] != count)
            .map_or(order.len(), |offset| start + offset);
        order[start..end].shuffle(rng);
        start = end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn nodes(n: usize) -> Vec<NodeIndex> {
        (0..n).map(NodeIndex::new).collect()
    }

    #[test]
    fn ties_keep_input_order() {
        let counts = [2, 0, 1, 0, 2];
        let order = order_by_dependency_count(nodes(5), &counts);
        let indices: Vec<usize> = order.iter().map(|n| n.index()).collect();
        assert_eq!(indices, [1, 3, 2, 0, 4]);
    }

    #[test]
    fn shuffle_keeps_runs_sorted() {
        let counts = [0, 0, 0, 0, 1, 1, 1, 3];
        let mut order = order_by_dependency_count(nodes(8), &counts);
        let mut rng = StdRng::seed_from_u64(7);
        shuffle_ties(&mut order, &counts, &mut rng);

        let sorted: Vec<usize> = order.iter().map(|n| counts[n.index()]).collect();
        assert_eq!(sorted, [0, 0, 0, 0, 1, 1, 1, 3]);

        let mut members: Vec<usize> = order[..4].iter().map(|n| n.index()).collect();
        members.sort();
        assert_eq!(members, [0, 1, 2, 3]);
        assert_eq!(order[7].index(), 7);
    }

    #[test]
    fn shuffle_is_reproducible_for_a_seed() {
        let counts = [0; 10];
        let mut a = nodes(10);
        let mut b = nodes(10);
        shuffle_ties(&mut a, &counts, &mut StdRng::seed_from_u64(42));
        shuffle_ties(&mut b, &counts, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
