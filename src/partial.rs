//! Mutable partial-assignment search state.

use crate::matrix::CostMatrix;

/// A prefix of a worker→task permutation under construction.
///
/// Workers `0..stage()` are committed; `assign[i]` for `i >= stage()` is a
/// placeholder and never read. The accumulated cost is carried incrementally
/// alongside the buffer, with an undo stack of prior totals so that
/// [`retract`](Self::retract) restores the exact previous value (adding and
/// then subtracting the same `f64` is not an identity).
///
/// Two invariants hold at all times between method calls:
///
/// - every committed task index is in `[0, n)`;
/// - no task appears twice among the committed entries.
///
/// A complete state (`stage() == n`) is therefore a bijection: n distinct
/// values in `[0, n)`.
#[derive(Debug, Clone)]
pub struct PartialAssignment {
    assign: Vec<usize>,
    used: Vec<bool>,
    stage: usize,
    cost: f64,
    prior_costs: Vec<f64>,
}

impl PartialAssignment {
    /// Creates the empty state for an n-worker problem (stage 0, cost 0).
    pub fn new(n: usize) -> Self {
        Self {
            assign: vec![0; n],
            used: vec![false; n],
            stage: 0,
            cost: 0.0,
            prior_costs: Vec::with_capacity(n),
        }
    }

    /// Number of workers committed so far.
    pub fn stage(&self) -> usize {
        self.stage
    }

    /// Problem size n.
    pub fn size(&self) -> usize {
        self.assign.len()
    }

    /// Whether every worker has been assigned.
    pub fn is_complete(&self) -> bool {
        self.stage == self.assign.len()
    }

    /// Accumulated cost of the committed prefix.
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// The committed prefix: `tasks()[i]` is worker i's task, for `i < stage()`.
    pub fn tasks(&self) -> &[usize] {
        &self.assign[..self.stage]
    }

    /// Whether `task` is already taken by a committed worker.
    pub fn is_used(&self, task: usize) -> bool {
        self.used[task]
    }

    /// Commits the next worker to `task` and accumulates its cost.
    ///
    /// `task` must be in range and unused; the state must not be complete.
    /// Violations panic in debug builds.
    pub fn extend(&mut self, matrix: &CostMatrix, task: usize) {
        debug_assert!(self.stage < self.assign.len());
        debug_assert!(task < self.used.len());
        debug_assert!(!self.used[task], "task {task} already assigned");

        self.prior_costs.push(self.cost);
        self.assign[self.stage] = task;
        self.used[task] = true;
        self.cost += matrix.cost(self.stage, task);
        self.stage += 1;
    }

    /// Undoes the most recent [`extend`](Self::extend).
    pub fn retract(&mut self) {
        debug_assert!(self.stage > 0);

        self.stage -= 1;
        self.used[self.assign[self.stage]] = false;
        // Restore the saved total rather than subtracting the cell back out.
        self.cost = self.prior_costs.pop().unwrap_or(0.0);
    }

    /// Executable form of the state invariants: committed entries in range
    /// and pairwise distinct, `used` consistent with the prefix, and the
    /// accumulated cost equal to the sum over the prefix.
    pub fn invariants_hold(&self, matrix: &CostMatrix) -> bool {
        let n = self.assign.len();
        if self.stage > n || matrix.size() != n {
            return false;
        }
        let mut seen = vec![false; n];
        let mut total = 0.0;
        for (worker, &task) in self.assign[..self.stage].iter().enumerate() {
            if task >= n || seen[task] {
                return false;
            }
            seen[task] = true;
            total += matrix.cost(worker, task);
        }
        if seen != self.used {
            return false;
        }
        // Totals are built along the same commit order, so this comparison
        // is exact, not epsilon-based.
        total == self.cost
    }

    /// Whether this is a complete, valid bijection of `[0, n)`.
    pub fn is_complete_bijection(&self, matrix: &CostMatrix) -> bool {
        self.is_complete() && self.invariants_hold(matrix)
    }

    /// Consumes the state, returning the committed prefix.
    pub fn into_tasks(mut self) -> Vec<usize> {
        self.assign.truncate(self.stage);
        self.assign
    }
}
