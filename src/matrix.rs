//! Cost matrix for the assignment problem.

use crate::error::SolveError;

/// An n×n matrix of assignment costs.
///
/// `cost(worker, task)` is the cost of giving `task` to `worker`. Costs may
/// be any real values; nothing in the solver relies on non-negativity.
///
/// The matrix is built without validation so callers can assemble it freely
/// (e.g. row by row from parsed input). [`CostMatrix::validate`] checks
/// squareness and is invoked by the solver before any search work; an
/// invalid matrix never enters the search tree.
///
/// # Examples
///
/// ```
/// use exact_assign::CostMatrix;
///
/// let m = CostMatrix::new(vec![vec![4.0, 1.0], vec![2.0, 3.0]]);
/// assert!(m.is_valid());
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.cost(0, 1), 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CostMatrix {
    rows: Vec<Vec<f64>>,
}

impl CostMatrix {
    /// Creates a matrix from its rows. No validation is performed here.
    pub fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Number of workers (= number of tasks). The empty matrix has size 0.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Cost of assigning `task` to `worker`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn cost(&self, worker: usize, task: usize) -> f64 {
        self.rows[worker][task]
    }

    /// The cost row for one worker.
    pub fn row(&self, worker: usize) -> &[f64] {
        &self.rows[worker]
    }

    /// Checks that every row has exactly `size()` entries.
    ///
    /// The empty matrix is valid; its unique assignment is the empty one.
    pub fn validate(&self) -> Result<(), SolveError> {
        let n = self.rows.len();
        for (row, r) in self.rows.iter().enumerate() {
            if r.len() != n {
                return Err(SolveError::InvalidMatrix {
                    row,
                    expected: n,
                    got: r.len(),
                });
            }
        }
        Ok(())
    }

    /// Whether [`validate`](Self::validate) succeeds.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Minimum cost in `worker`'s row, regardless of task availability.
    ///
    /// This is the per-worker lower-bound contribution: the true minimum
    /// over *available* tasks can only be ≥ this value. Returns `None` for
    /// an empty row or an out-of-range index.
    pub fn row_min(&self, worker: usize) -> Option<f64> {
        self.rows
            .get(worker)?
            .iter()
            .copied()
            .reduce(f64::min)
    }
}
