//! Dependency graph over a requirement set.
//!
//! Edges run from a dependency to the course that needs it:
//!
//! ```text
//!   CMPE 16 ──pre──▶ CMPE 17 ──pre──▶ CMPE 18
//!      └─────────────pre────────────────▲
//! ```
//!
//! [`roots`](RequirementGraph::roots) are courses with no dependency inside
//! the requirement set and seed the planner; [`leaves`](RequirementGraph::leaves)
//! are courses nothing in the set depends on. Leaf dependencies outside the
//! requirement set get no node: they must come from the completed set or
//! courses already in the plan.
//!
//! The graph is owned by one planning run and never stored on [`Course`].

use super::super::error::GraphError;
use super::ordering::{order_by_dependency_count, shuffle_ties};
use crate::constraints::{ConstraintError, ThresholdConstraint};
use crate::course::{Course, CourseKey};
use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::Direction;
use rand::Rng;
use std::collections::HashMap;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which requirement tree an edge comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RequirementKind {
    Prerequisite,
    Corequisite,
}

impl fmt::Display for RequirementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Prerequisite => write!(f, "prerequisite"),
            Self::Corequisite => write!(f, "corequisite"),
        }
    }
}

/// Requirement set wired into a DAG, plus the processing order.
///
/// # Invariants
///
/// - Every course key appears on exactly one node
/// - The graph is acyclic; [`build`](Self::build) rejects cycles
/// - At most one edge per (dependency, dependent) pair
/// - `order` is a permutation of all nodes, ascending by direct-dependency count
#[derive(Debug, Clone)]
pub struct RequirementGraph<'a> {
    graph: DiGraph<&'a Course, RequirementKind>,
    node_by_key: HashMap<CourseKey, NodeIndex>,
    num_children: Vec<usize>,
    order: Vec<NodeIndex>,
    rank: Vec<usize>,
}

impl<'a> RequirementGraph<'a> {
    /// Builds the graph for `requirements`.
    ///
    /// # Errors
    ///
    /// - `DuplicateRequirement` if a course key is listed twice
    /// - `ThresholdExceedsCandidates` if any requirement tree asks for more
    ///   candidates than it lists
    /// - `Cycle` if the direct dependencies form a cycle
    pub fn build(requirements: &'a [Course]) -> Result<Self, GraphError> {
        let mut graph = DiGraph::with_capacity(requirements.len(), 0);
        let mut node_by_key = HashMap::with_capacity(requirements.len());
        let mut num_children = Vec::with_capacity(requirements.len());

        for course in requirements {
            validate_tree(course, course.pre_reqs(), RequirementKind::Prerequisite)?;
            validate_tree(course, course.co_reqs(), RequirementKind::Corequisite)?;

            if node_by_key.contains_key(course.key()) {
                return Err(GraphError::DuplicateRequirement(course.key().clone()));
            }
            let node = graph.add_node(course);
            node_by_key.insert(course.key().clone(), node);
            num_children.push(course.pre_reqs().courses().len() + course.co_reqs().courses().len());
        }

        let order = order_by_dependency_count(graph.node_indices(), &num_children);

        for &dependent in &order {
            let course = graph[dependent];
            let edges = course
                .pre_reqs()
                .courses()
                .iter()
                .map(|k| (k, RequirementKind::Prerequisite))
                .chain(
                    course
                        .co_reqs()
                        .courses()
                        .iter()
                        .map(|k| (k, RequirementKind::Corequisite)),
                );
            for (dep_key, kind) in edges {
                if let Some(&dependency) = node_by_key.get(dep_key) {
                    if graph.find_edge(dependency, dependent).is_none() {
                        graph.add_edge(dependency, dependent, kind);
                    }
                }
            }
        }

        check_acyclic(&graph)?;

        let rank = rank_of(&order);
        Ok(Self {
            graph,
            node_by_key,
            num_children,
            order,
            rank,
        })
    }

    pub fn len(&self) -> usize {
        self.graph.node_count()
    }

    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    pub fn dependency_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn course(&self, node: NodeIndex) -> &'a Course {
        self.graph[node]
    }

    pub fn node_of(&self, key: &CourseKey) -> Option<NodeIndex> {
        self.node_by_key.get(key).copied()
    }

    /// Direct leaf dependencies of the course, counted with repeats and
    /// including those outside the requirement set.
    pub fn num_children(&self, node: NodeIndex) -> usize {
        self.num_children[node.index()]
    }

    /// Number of distinct courses in the set that depend on this one.
    pub fn num_parents(&self, node: NodeIndex) -> usize {
        self.graph
            .neighbors_directed(node, Direction::Outgoing)
            .count()
    }

    /// Processing order: ascending dependency count, ties in input order
    /// unless [`shuffle_ties`](Self::shuffle_ties) was applied.
    pub fn order(&self) -> &[NodeIndex] {
        &self.order
    }

    /// Courses in the set that depend on `node`, in processing order.
    pub fn dependents(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.sorted_neighbors(node, Direction::Outgoing)
    }

    /// Courses in the set that `node` depends on, in processing order.
    pub fn dependencies(&self, node: NodeIndex) -> Vec<NodeIndex> {
        self.sorted_neighbors(node, Direction::Incoming)
    }

    /// Courses without dependencies inside the set, in processing order.
    pub fn roots(&self) -> Vec<NodeIndex> {
        self.order
            .iter()
            .copied()
            .filter(|&n| {
                self.graph
                    .neighbors_directed(n, Direction::Incoming)
                    .next()
                    .is_none()
            })
            .collect()
    }

    /// Courses nothing in the set depends on, in processing order.
    pub fn leaves(&self) -> Vec<NodeIndex> {
        self.order
            .iter()
            .copied()
            .filter(|&n| self.num_parents(n) == 0)
            .collect()
    }

    /// Randomly permutes courses with equal dependency counts.
    pub fn shuffle_ties<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        shuffle_ties(&mut self.order, &self.num_children, rng);
        self.rank = rank_of(&self.order);
    }

    fn sorted_neighbors(&self, node: NodeIndex, direction: Direction) -> Vec<NodeIndex> {
        let mut nodes: Vec<NodeIndex> = self.graph.neighbors_directed(node, direction).collect();
        nodes.sort_by_key(|n| self.rank[n.index()]);
        nodes
    }
}

fn validate_tree(
    course: &Course,
    tree: &ThresholdConstraint,
    kind: RequirementKind,
) -> Result<(), GraphError> {
    tree.validate().map_err(|e| match e {
        ConstraintError::ThresholdExceedsCandidates {
            required,
            candidates,
        } => GraphError::ThresholdExceedsCandidates {
            course: course.key().clone(),
            kind,
            required,
            candidates,
        },
    })
}

/// Rejects strongly connected components of more than one node, and
/// courses that depend on themselves.
fn check_acyclic(graph: &DiGraph<&Course, RequirementKind>) -> Result<(), GraphError> {
    for component in tarjan_scc(graph) {
        let cyclic = component.len() > 1
            || component
                .first()
                .is_some_and(|&n| graph.find_edge(n, n).is_some());
        if cyclic {
            let mut keys: Vec<CourseKey> = component.iter().map(|&n| graph[n].key().clone()).collect();
            keys.sort();
            return Err(GraphError::Cycle(keys));
        }
    }
    Ok(())
}

fn rank_of(order: &[NodeIndex]) -> Vec<usize> {
    let mut rank = vec![0; order.len()];
    for (position, node) in order.iter().enumerate() {
        rank[node.index()] = position;
    }
    rank
}
