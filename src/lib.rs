//! Exact solver for the linear assignment problem.
//!
//! Given an n×n cost matrix `times[worker][task]`, finds a bijection
//! worker→task minimizing total cost by depth-first branch-and-bound with
//! admissible lower-bound pruning, instead of enumerating all n!
//! permutations.
//!
//! # Key Components
//!
//! - **[`CostMatrix`]**: immutable n×n real cost matrix, validated for
//!   squareness before any search.
//! - **[`PartialAssignment`]**: mutable search state — a committed prefix
//!   of a permutation with incremental cost and exact-undo backtracking.
//! - **[`CompletionBound`]**: precomputed per-row minima and suffix sums;
//!   an admissible lower bound on the cost of any completion.
//! - **[`Solver`]**: the branch-and-bound engine; returns the optimal
//!   assignment with search statistics, or a typed error for invalid input
//!   and cancellation.
//!
//! # Guarantees
//!
//! Every returned assignment is a bijection of `[0, n)`, its cost is ≤ the
//! cost of every other bijection, and pruning only discards branches whose
//! lower bound already matches or exceeds the incumbent. The bound never
//! overstates the cost of any completion, so the optimum is never lost. For
//! a fixed matrix the search is fully deterministic (ascending task order at
//! every level); ties go to the first optimum found.
//!
//! # Examples
//!
//! ```
//! use exact_assign::{CostMatrix, Solver};
//!
//! let matrix = CostMatrix::new(vec![
//!     vec![9.0, 2.0, 7.0],
//!     vec![6.0, 4.0, 3.0],
//!     vec![5.0, 8.0, 1.0],
//! ]);
//! let solution = Solver::solve(&matrix).unwrap();
//! assert_eq!(solution.assignment, vec![1, 0, 2]);
//! assert_eq!(solution.total_cost, 9.0);
//! ```

pub mod bound;
pub mod config;
pub mod error;
pub mod matrix;
pub mod partial;
pub mod search;

pub use bound::CompletionBound;
pub use config::{CancelToken, SolveConfig};
pub use error::{Result, SolveError};
pub use matrix::CostMatrix;
pub use partial::PartialAssignment;
pub use search::{Solution, Solver};
