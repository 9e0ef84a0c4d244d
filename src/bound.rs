//! Admissible lower bounds on completion cost.

use crate::matrix::CostMatrix;

/// Precomputed per-row minima and their suffix sums.
///
/// For a partial assignment at stage k with accumulated cost C, any
/// completion must still pay, for each remaining worker r in `[k, n)`, at
/// least the minimum of row r — the minimum over *available* tasks can only
/// be ≥ the minimum over all tasks. Summing those relaxed minima gives
///
/// ```text
/// LB(C, k) = C + Σ_{r=k}^{n-1} min(times[r])
/// ```
///
/// which never exceeds the true cost of any completion, so pruning on
/// `LB ≥ incumbent` can never discard a branch containing the optimum.
/// Computed once per solve; lookups are O(1).
#[derive(Debug, Clone)]
pub struct CompletionBound {
    row_minima: Vec<f64>,
    /// `tail[k]` = sum of row minima for workers `k..n`; `tail[n] == 0`.
    tail: Vec<f64>,
}

impl CompletionBound {
    /// Builds the bound tables for a validated square matrix.
    pub fn new(matrix: &CostMatrix) -> Self {
        let n = matrix.size();
        let row_minima: Vec<f64> = (0..n)
            .map(|r| matrix.row_min(r).unwrap_or(0.0))
            .collect();

        let mut tail = vec![0.0; n + 1];
        for k in (0..n).rev() {
            tail[k] = row_minima[k] + tail[k + 1];
        }

        Self { row_minima, tail }
    }

    /// Minimum cost worker `row` can incur under any completion.
    pub fn row_min(&self, row: usize) -> f64 {
        self.row_minima[row]
    }

    /// Lower bound on the total cost of any completion of a partial
    /// assignment with accumulated cost `accumulated` at stage `stage`.
    pub fn lower_bound(&self, accumulated: f64, stage: usize) -> f64 {
        accumulated + self.tail[stage]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::partial::PartialAssignment;

    fn matrix_3x3() -> CostMatrix {
        CostMatrix::new(vec![
            vec![9.0, 2.0, 7.0],
            vec![6.0, 4.0, 3.0],
            vec![5.0, 8.0, 1.0],
        ])
    }

    /// All complete assignments extending the given prefix, by DFS.
    fn completions(matrix: &CostMatrix, prefix: &[usize]) -> Vec<(Vec<usize>, f64)> {
        fn go(
            matrix: &CostMatrix,
            state: &mut PartialAssignment,
            out: &mut Vec<(Vec<usize>, f64)>,
        ) {
            if state.is_complete() {
                out.push((state.tasks().to_vec(), state.cost()));
                return;
            }
            for task in 0..matrix.size() {
                if state.is_used(task) {
                    continue;
                }
                state.extend(matrix, task);
                go(matrix, state, out);
                state.retract();
            }
        }

        let mut state = PartialAssignment::new(matrix.size());
        for &task in prefix {
            state.extend(matrix, task);
        }
        let mut out = Vec::new();
        go(matrix, &mut state, &mut out);
        out
    }

    #[test]
    fn test_tail_sums() {
        let bound = CompletionBound::new(&matrix_3x3());
        // Row minima: 2, 3, 1.
        assert_eq!(bound.row_min(0), 2.0);
        assert_eq!(bound.lower_bound(0.0, 0), 6.0);
        assert_eq!(bound.lower_bound(0.0, 1), 4.0);
        assert_eq!(bound.lower_bound(0.0, 2), 1.0);
        assert_eq!(bound.lower_bound(0.0, 3), 0.0);
    }

    #[test]
    fn test_bound_adds_accumulated_cost() {
        let bound = CompletionBound::new(&matrix_3x3());
        assert_eq!(bound.lower_bound(10.0, 2), 11.0);
    }

    #[test]
    fn test_empty_matrix() {
        let bound = CompletionBound::new(&CostMatrix::new(vec![]));
        assert_eq!(bound.lower_bound(0.0, 0), 0.0);
    }

    /// Admissibility: for every prefix, LB never exceeds the cost of any
    /// completion. Exhaustive over all prefixes of a fixed 3×3 matrix.
    #[test]
    fn test_bound_never_overstates_any_completion() {
        let m = matrix_3x3();
        let bound = CompletionBound::new(&m);

        let prefixes: Vec<Vec<usize>> = {
            let mut all = vec![vec![]];
            for (p, _) in completions(&m, &[]) {
                for len in 1..=p.len() {
                    all.push(p[..len].to_vec());
                }
            }
            all
        };

        for prefix in prefixes {
            let mut state = PartialAssignment::new(m.size());
            for &t in &prefix {
                state.extend(&m, t);
            }
            let lb = bound.lower_bound(state.cost(), state.stage());
            for (tasks, total) in completions(&m, &prefix) {
                assert!(
                    lb <= total + 1e-9,
                    "bound {lb} overstates completion {tasks:?} with cost {total}"
                );
            }
        }
    }

    /// The uniform-minimum form from the correctness argument: any value
    /// that lower-bounds a whole row also satisfies
    /// `total(s) ≥ total(ps) + (n - k) * min` for every completion s,
    /// when it lower-bounds every remaining row.
    #[test]
    fn test_uniform_row_min_bound() {
        let m = matrix_3x3();
        let bound = CompletionBound::new(&m);
        let global_min = (0..m.size())
            .map(|r| bound.row_min(r))
            .reduce(f64::min)
            .unwrap();

        let mut state = PartialAssignment::new(m.size());
        state.extend(&m, 1);
        let remaining = (m.size() - state.stage()) as f64;

        for (_, total) in completions(&m, &[1]) {
            assert!(total >= state.cost() + remaining * global_min);
        }
    }

    #[test]
    fn test_bound_with_negative_costs() {
        let m = CostMatrix::new(vec![vec![-4.0, 1.0], vec![2.0, -3.0]]);
        let bound = CompletionBound::new(&m);
        assert_eq!(bound.lower_bound(0.0, 0), -7.0);
        for (_, total) in completions(&m, &[]) {
            assert!(bound.lower_bound(0.0, 0) <= total);
        }
    }
}
