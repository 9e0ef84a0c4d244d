//! Branch-and-bound search engine.
//!
//! # Algorithm
//!
//! 1. Validate the cost matrix (reject non-square input before any work)
//! 2. Precompute per-row minima and their suffix sums ([`CompletionBound`])
//! 3. Depth-first search over partial assignments, one worker per level,
//!    tasks tried in ascending index:
//!    a. Commit the next worker to a free task
//!    b. Compute `LB = accumulated + tail[stage]`
//!    c. If an incumbent exists and `LB ≥ incumbent.cost`, retract and
//!    try the next task (the bound never overstates any completion, so
//!    nothing cheaper than the incumbent is lost)
//!    d. Otherwise recurse; on a complete assignment, replace the
//!    incumbent when strictly cheaper
//! 4. Return the incumbent — the optimum, since only provably
//!    not-better branches were discarded
//!
//! # Reference
//!
//! Little, Murty, Sweeney & Karel (1963). "An Algorithm for the Traveling
//! Salesman Problem", *Operations Research* 11(6) — the classic
//! branch-and-bound scheme with admissible lower-bound pruning.

use log::debug;

use crate::bound::CompletionBound;
use crate::config::SolveConfig;
use crate::error::SolveError;
use crate::matrix::CostMatrix;
use crate::partial::PartialAssignment;

/// Result of a successful solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Optimal assignment: `assignment[worker] = task`. A bijection of
    /// `[0, n)`; empty for the 0×0 matrix.
    pub assignment: Vec<usize>,
    /// Total cost of the assignment.
    pub total_cost: f64,
    /// Nodes expanded during the search (tree nodes entered, root included).
    pub nodes_explored: u64,
    /// Candidate branches discarded by the lower bound.
    pub nodes_pruned: u64,
}

/// Exact assignment-problem solver.
///
/// Deterministic: for a fixed matrix the visited-state sequence, the
/// returned assignment, and the statistics are always the same. When several
/// assignments tie for the minimum cost, the first one reached under
/// ascending-task depth-first order is returned (the incumbent is only
/// replaced by strict improvement).
///
/// `solve` is a pure function of its inputs; no state is carried between
/// calls.
///
/// # Examples
///
/// ```
/// use exact_assign::{CostMatrix, Solver};
///
/// let matrix = CostMatrix::new(vec![vec![4.0, 1.0], vec![2.0, 3.0]]);
/// let solution = Solver::solve(&matrix).unwrap();
/// assert_eq!(solution.assignment, vec![1, 0]);
/// assert_eq!(solution.total_cost, 3.0);
/// ```
pub struct Solver;

impl Solver {
    /// Solves with default configuration (no cancellation).
    pub fn solve(matrix: &CostMatrix) -> Result<Solution, SolveError> {
        Self::solve_with(matrix, &SolveConfig::default())
    }

    /// Solves with the given configuration.
    ///
    /// Returns [`SolveError::InvalidMatrix`] for a non-square matrix and
    /// [`SolveError::Cancelled`] if the config's token fires mid-search.
    pub fn solve_with(matrix: &CostMatrix, config: &SolveConfig) -> Result<Solution, SolveError> {
        matrix.validate()?;

        let mut search = Search {
            matrix,
            bound: CompletionBound::new(matrix),
            state: PartialAssignment::new(matrix.size()),
            incumbent: None,
            config,
            nodes_explored: 0,
            nodes_pruned: 0,
        };
        search.expand()?;

        // A finite tree over a valid matrix always yields an incumbent
        // (the 0×0 matrix yields the empty assignment at the root).
        let incumbent = search
            .incumbent
            .take()
            .unwrap_or_else(|| Incumbent { tasks: Vec::new(), cost: 0.0 });

        debug!(
            "search done: cost={} explored={} pruned={}",
            incumbent.cost, search.nodes_explored, search.nodes_pruned
        );

        Ok(Solution {
            assignment: incumbent.tasks,
            total_cost: incumbent.cost,
            nodes_explored: search.nodes_explored,
            nodes_pruned: search.nodes_pruned,
        })
    }
}

struct Incumbent {
    tasks: Vec<usize>,
    cost: f64,
}

struct Search<'a> {
    matrix: &'a CostMatrix,
    bound: CompletionBound,
    state: PartialAssignment,
    incumbent: Option<Incumbent>,
    config: &'a SolveConfig,
    nodes_explored: u64,
    nodes_pruned: u64,
}

impl Search<'_> {
    fn expand(&mut self) -> Result<(), SolveError> {
        if let Some(token) = &self.config.cancel {
            if token.is_cancelled() {
                return Err(SolveError::Cancelled);
            }
        }
        self.nodes_explored += 1;

        if self.state.is_complete() {
            let better = match &self.incumbent {
                Some(inc) => self.state.cost() < inc.cost,
                None => true,
            };
            if better {
                debug!(
                    "new incumbent: cost={} at node {}",
                    self.state.cost(),
                    self.nodes_explored
                );
                self.incumbent = Some(Incumbent {
                    tasks: self.state.tasks().to_vec(),
                    cost: self.state.cost(),
                });
            }
            return Ok(());
        }

        for task in 0..self.matrix.size() {
            if self.state.is_used(task) {
                continue;
            }
            self.state.extend(self.matrix, task);

            let lb = self.bound.lower_bound(self.state.cost(), self.state.stage());
            let prune = self
                .incumbent
                .as_ref()
                .is_some_and(|inc| lb >= inc.cost);

            if prune {
                self.nodes_pruned += 1;
            } else {
                let descended = self.expand();
                if descended.is_err() {
                    self.state.retract();
                    return descended;
                }
            }
            self.state.retract();
        }
        Ok(())
    }
}
