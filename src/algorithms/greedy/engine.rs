//! One planning attempt: the quarter-by-quarter placement loop.

use super::graph::RequirementGraph;
use crate::algorithms::error::{BlockingReason, InfeasibleCause, PlanningError, UnplacedCourse};
use crate::config::PlannerConfig;
use crate::course::{Course, Season};
use crate::eligibility::{self, Ineligibility};
use crate::plan::CoursePlan;
use petgraph::graph::NodeIndex;
use std::collections::{HashMap, HashSet};
use tracing::{debug, trace};

/// Mutable state of a single attempt. Owns its plan; shares nothing with
/// other attempts except the read-only graph.
struct Attempt<'g, 'a> {
    graph: &'g RequirementGraph<'a>,
    plan: CoursePlan,
    pending: HashSet<NodeIndex>,
    /// Lecture -> its concurrent course, when that course is itself pending.
    bundle: HashMap<NodeIndex, NodeIndex>,
    /// Inverse of `bundle`. Bundled courses are only placed with their lecture.
    bundled_with: HashMap<NodeIndex, NodeIndex>,
    /// Pending courses that must be placed before a node is stacked.
    blockers: Vec<Vec<NodeIndex>>,
    /// Nodes waiting on each node, in processing order.
    waiters: Vec<Vec<NodeIndex>>,
    unresolved: Vec<usize>,
    stack: Vec<NodeIndex>,
    last_failure: HashMap<NodeIndex, Ineligibility>,
    iterations: usize,
}

/// Runs one attempt over `plan`, returning the filled plan.
///
/// Courses already completed or present in `plan` count as placed.
pub(crate) fn run(
    graph: &RequirementGraph<'_>,
    plan: CoursePlan,
    config: &PlannerConfig,
) -> Result<CoursePlan, PlanningError> {
    Attempt::new(graph, plan).fill(config)
}

impl<'g, 'a> Attempt<'g, 'a> {
    fn new(graph: &'g RequirementGraph<'a>, plan: CoursePlan) -> Self {
        let pending: HashSet<NodeIndex> = graph
            .order()
            .iter()
            .copied()
            .filter(|&n| {
                let key = graph.course(n).key();
                !plan.is_completed(key) && !plan.contains(key)
            })
            .collect();

        let mut bundle = HashMap::new();
        let mut bundled_with = HashMap::new();
        for &node in graph.order() {
            let Some(lab) = graph
                .course(node)
                .concurrent()
                .and_then(|c| graph.node_of(c.key()))
            else {
                continue;
            };
            let free = lab != node
                && pending.contains(&node)
                && pending.contains(&lab)
                && !bundle.contains_key(&lab)
                && !bundled_with.contains_key(&lab)
                && !bundled_with.contains_key(&node);
            if free {
                bundle.insert(node, lab);
                bundled_with.insert(lab, node);
            }
        }

        // A lecture also waits on whatever its bundled course needs.
        let mut blockers = vec![Vec::new(); graph.len()];
        let mut waiters = vec![Vec::new(); graph.len()];
        for &node in graph.order() {
            if !pending.contains(&node) {
                continue;
            }
            let mut needs = graph.dependencies(node);
            if let Some(&lab) = bundle.get(&node) {
                needs.extend(graph.dependencies(lab));
            }
            let mut seen = HashSet::new();
            needs.retain(|d| {
                pending.contains(d)
                    && *d != node
                    && bundle.get(&node) != Some(d)
                    && seen.insert(*d)
            });
            for &d in &needs {
                waiters[d.index()].push(node);
            }
            blockers[node.index()] = needs;
        }
        let unresolved: Vec<usize> = blockers.iter().map(Vec::len).collect();

        let stack = graph
            .order()
            .iter()
            .copied()
            .filter(|n| {
                pending.contains(n) && unresolved[n.index()] == 0 && !bundled_with.contains_key(n)
            })
            .collect();

        Self {
            graph,
            plan,
            pending,
            bundle,
            bundled_with,
            blockers,
            waiters,
            unresolved,
            stack,
            last_failure: HashMap::new(),
            iterations: 0,
        }
    }

    fn fill(mut self, config: &PlannerConfig) -> Result<CoursePlan, PlanningError> {
        let limit = config.quarter_limit(self.plan.num_quarters());
        let mut quarter = 0;

        while !self.pending.is_empty() {
            if quarter >= limit {
                return Err(self.infeasible(InfeasibleCause::QuartersExhausted { quarters: limit }));
            }
            if quarter >= self.plan.num_quarters() {
                let season = self
                    .plan
                    .quarters()
                    .last()
                    .map_or(Season::Fall, |q| q.season().next());
                self.plan.push_quarter(season);
                debug!(quarter, %season, "extended plan");
            }

            let (placed, deferred) = self.fill_quarter(quarter, config)?;
            debug!(
                quarter,
                placed,
                deferred = deferred.len(),
                pending = self.pending.len(),
                "quarter filled"
            );

            if placed == 0 && !self.pending.is_empty() && !self.can_progress_later(&deferred, quarter) {
                return Err(self.infeasible(InfeasibleCause::Stuck { quarter }));
            }

            // Deferred courses are retried next quarter in the order they were popped.
            self.stack = deferred.into_iter().rev().collect();
            quarter += 1;
        }

        Ok(self.plan)
    }

    /// Pops ready courses until the stack is empty. Returns the number of
    /// courses placed and the courses deferred to a later quarter.
    fn fill_quarter(
        &mut self,
        quarter: usize,
        config: &PlannerConfig,
    ) -> Result<(usize, Vec<NodeIndex>), PlanningError> {
        let mut placed = 0;
        let mut deferred = Vec::new();

        while let Some(node) = self.stack.pop() {
            if !self.pending.contains(&node) {
                continue;
            }
            self.iterations += 1;
            if self.iterations > config.max_iterations {
                return Err(self.infeasible(InfeasibleCause::IterationLimit {
                    iterations: config.max_iterations,
                }));
            }

            let course = self.graph.course(node);
            let outcome = eligibility::evaluate(course, &self.plan, quarter)
                .and_then(|eligible| self.check_bundled(node, quarter).map(|()| eligible));
            match outcome {
                Ok(eligible) => {
                    self.plan.place(quarter, course.clone())?;
                    self.mark_placed(node);
                    placed += 1;
                    if eligible.implied_concurrent.is_some() {
                        placed += self.place_concurrent(course, quarter)?;
                    }
                }
                Err(reason) => {
                    self.last_failure.insert(node, reason);
                    deferred.push(node);
                }
            }
        }

        Ok((placed, deferred))
    }

    /// Runs the eligibility check for the pending concurrent course bundled
    /// with `node`, as if it were placed into `quarter` on its own.
    fn check_bundled(&mut self, node: NodeIndex, quarter: usize) -> Result<(), Ineligibility> {
        let Some(&lab) = self.bundle.get(&node) else {
            return Ok(());
        };
        if !self.pending.contains(&lab) {
            return Ok(());
        }
        let concurrent = self.graph.course(lab);
        match eligibility::evaluate(concurrent, &self.plan, quarter) {
            Ok(_) => Ok(()),
            Err(reason) => {
                self.last_failure.insert(lab, reason.clone());
                Err(Ineligibility::ConcurrentIneligible {
                    course: self.graph.course(node).key().clone(),
                    concurrent: concurrent.key().clone(),
                    reason: Box::new(reason),
                })
            }
        }
    }

    /// Inserts the concurrent course of `course` into the same quarter unless
    /// it is already completed or placed. Prefers the requirement-set version
    /// of the course when there is one.
    fn place_concurrent(&mut self, course: &Course, quarter: usize) -> Result<usize, PlanningError> {
        let Some(concurrent) = course.concurrent() else {
            return Ok(0);
        };
        let key = concurrent.key();
        if self.plan.is_completed(key) || self.plan.contains(key) {
            trace!(course = %course.key(), concurrent = %key, "concurrent course already present");
            return Ok(0);
        }

        let node = self.graph.node_of(key);
        let concurrent = node.map_or(concurrent, |n| self.graph.course(n));
        self.plan.place(quarter, concurrent.clone())?;
        if let Some(n) = node {
            self.last_failure.remove(&n);
            self.mark_placed(n);
        }
        trace!(course = %course.key(), concurrent = %key, quarter, "placed concurrent course");
        Ok(1)
    }

    /// Removes `node` from the pending set and stacks every waiting course
    /// whose last blocker this was. Bundled courses are never stacked.
    fn mark_placed(&mut self, node: NodeIndex) {
        if !self.pending.remove(&node) {
            return;
        }
        let waiters = std::mem::take(&mut self.waiters[node.index()]);
        for waiter in waiters {
            if !self.pending.contains(&waiter) {
                continue;
            }
            let count = &mut self.unresolved[waiter.index()];
            *count = count.saturating_sub(1);
            if *count == 0 && !self.bundled_with.contains_key(&waiter) {
                self.stack.push(waiter);
            }
        }
    }

    /// Whether a later quarter could place something this quarter could not.
    fn can_progress_later(&self, deferred: &[NodeIndex], quarter: usize) -> bool {
        let populated_ahead = self
            .plan
            .quarters()
            .iter()
            .skip(quarter)
            .any(|q| !q.is_empty());

        deferred.iter().any(|node| {
            self.last_failure
                .get(node)
                .is_some_and(|reason| self.may_pass_later(self.graph.course(*node), reason, populated_ahead))
        })
    }

    /// Nothing was placed, so requirement checks only change if this or a
    /// later quarter already held courses. Offerings change with the season;
    /// a unit overflow may fit in an emptier quarter.
    fn may_pass_later(&self, course: &Course, reason: &Ineligibility, populated_ahead: bool) -> bool {
        match reason {
            Ineligibility::OfferingMismatch { .. } => !course.seasons_offered().is_empty(),
            Ineligibility::UnitCapExceeded { .. } => course.load() <= self.plan.max_units(),
            Ineligibility::PrerequisiteUnmet(_) | Ineligibility::CorequisiteUnmet(_) => populated_ahead,
            Ineligibility::ConcurrentIneligible {
                concurrent, reason, ..
            } => self
                .graph
                .node_of(concurrent)
                .is_some_and(|n| self.may_pass_later(self.graph.course(n), reason, populated_ahead)),
            Ineligibility::DuplicatePlacement(_)
            | Ineligibility::ConcurrentConflict { .. }
            | Ineligibility::NoSuchQuarter { .. } => false,
        }
    }

    fn infeasible(&self, cause: InfeasibleCause) -> PlanningError {
        let unplaced: Vec<UnplacedCourse> = self
            .graph
            .order()
            .iter()
            .filter(|n| self.pending.contains(*n))
            .map(|&node| {
                let reason = if let Some(failure) = self.last_failure.get(&node) {
                    BlockingReason::Ineligible(failure.clone())
                } else if let Some(&lecture) = self.bundled_with.get(&node) {
                    BlockingReason::AwaitingDependencies(vec![self.graph.course(lecture).key().clone()])
                } else if self.unresolved[node.index()] > 0 {
                    BlockingReason::AwaitingDependencies(
                        self.blockers[node.index()]
                            .iter()
                            .filter(|d| self.pending.contains(*d))
                            .map(|&d| self.graph.course(d).key().clone())
                            .collect(),
                    )
                } else {
                    BlockingReason::NoRemainingQuarter
                };
                UnplacedCourse {
                    course: self.graph.course(node).key().clone(),
                    reason,
                }
            })
            .collect();

        debug!(%cause, unplaced = unplaced.len(), "planning attempt failed");
        PlanningError::SchedulingInfeasible { cause, unplaced }
    }
}
