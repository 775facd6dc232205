// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! The non-recursive greedy comparator: drives a single-direction
//! search to completion while snapshotting `V` at every step, then
//! replays the snapshots to reconstruct the edit script.

use tracing::instrument;

use crate::combine::{prepend_snake, push_snake};
use crate::error::DiffError;
use crate::provider;
use crate::results::Results;
use crate::snake::Snake;
use crate::vector::KLineVector;

/// Searches forward from `(0, 0)` to `(N, M)`, then reconstructs the
/// script by replaying the snapshots backward from the far corner.
#[instrument(skip_all, fields(n = source.len(), m = dest.len()))]
pub fn solve_forward<T: PartialEq>(
    source: &[T],
    dest: &[T],
    combine: bool,
) -> Result<Results, DiffError> {
    let n = source.len();
    let m = dest.len();
    if n == 0 && m == 0 {
        return Ok(Results::partial_forward(Vec::new(), Vec::new()));
    }

    let max_size = n + m;
    let mut v = KLineVector::new(true, n, m, max_size);
    v.init_stub(n, m);

    let mut vs: Vec<KLineVector> = Vec::new();
    let mut d = 0usize;
    loop {
        match provider::forward(source, n, dest, m, &mut v, d) {
            Ok(_) => {
                if let Ok(copy) = v.create_copy(d, true, 0) {
                    vs.push(copy);
                }
                break;
            }
            Err(DiffError::SearchExhausted { .. }) => {
                if let Ok(copy) = v.create_copy(d, true, 0) {
                    vs.push(copy);
                }
                if d >= max_size {
                    return Err(DiffError::SearchExhausted { d_max: max_size });
                }
                d += 1;
            }
            Err(other) => return Err(other),
        }
    }

    let snakes = reconstruct_trace(&vs, n, m, (n, m), (0, 0), source, dest, combine, true)?;
    Ok(Results::partial_forward(snakes, vs))
}

/// Searches in reverse from `(N, M)` to `(0, 0)`, then reconstructs
/// the script by replaying the snapshots forward from the origin.
#[instrument(skip_all, fields(n = source.len(), m = dest.len()))]
pub fn solve_reverse<T: PartialEq>(
    source: &[T],
    dest: &[T],
    combine: bool,
) -> Result<Results, DiffError> {
    let n = source.len();
    let m = dest.len();
    if n == 0 && m == 0 {
        return Ok(Results::partial_reverse(Vec::new(), Vec::new()));
    }

    let max_size = n + m;
    let delta = n as isize - m as isize;
    let mut v = KLineVector::new(false, n, m, max_size);
    v.init_stub(n, m);

    let mut vs: Vec<KLineVector> = Vec::new();
    let mut d = 0usize;
    loop {
        match provider::reverse(source, n, dest, m, &mut v, d) {
            Ok(_) => {
                if let Ok(copy) = v.create_copy(d, false, delta) {
                    vs.push(copy);
                }
                break;
            }
            Err(DiffError::SearchExhausted { .. }) => {
                if let Ok(copy) = v.create_copy(d, false, delta) {
                    vs.push(copy);
                }
                if d >= max_size {
                    return Err(DiffError::SearchExhausted { d_max: max_size });
                }
                d += 1;
            }
            Err(other) => return Err(other),
        }
    }

    let snakes = reconstruct_trace(&vs, n, m, (0, 0), (n, m), source, dest, combine, false)?;
    Ok(Results::partial_reverse(snakes, vs))
}

/// Walks the snapshot list from its last entry backward, re-deriving
/// each step's snake against the historical `V` it was computed from
/// (a k-line's neighbors are untouched since the previous `d`, so
/// replaying `Snake::calculate` against the snapshot reproduces the
/// exact original step). Stops once `p` reaches `terminal_p`.
#[allow(clippy::too_many_arguments)]
fn reconstruct_trace<T: PartialEq>(
    vs: &[KLineVector],
    n: usize,
    m: usize,
    start_p: (usize, usize),
    terminal_p: (usize, usize),
    source: &[T],
    dest: &[T],
    combine: bool,
    prepend: bool,
) -> Result<Vec<Snake>, DiffError> {
    let mut snakes: Vec<Snake> = Vec::new();
    let mut p = start_p;
    let mut d = vs.len();
    while p != terminal_p && d > 0 {
        d -= 1;
        let k = p.0 as isize - p.1 as isize;
        let snapshot = &vs[d];
        let x_end = snapshot.get(k);
        let y_end = x_end - k;
        if x_end != p.0 as isize || y_end != p.1 as isize {
            return Err(DiffError::TraceMismatch {
                d,
                k,
                expected: p,
                actual: (
                    x_end.try_into().unwrap_or(0),
                    y_end.try_into().unwrap_or(0),
                ),
            });
        }

        let mut working = snapshot.clone();
        let snake = Snake::calculate(&mut working, k, d, source, 0, n, dest, 0, m);
        if snake.end_point() != p {
            return Err(DiffError::TraceMismatch {
                d,
                k,
                expected: p,
                actual: snake.end_point(),
            });
        }
        p = snake.start_point();

        if prepend {
            prepend_snake(&mut snakes, snake, combine);
        } else {
            push_snake(&mut snakes, snake, combine);
        }
    }
    Ok(snakes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn solve_forward_round_trips() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 9, 3, 4, 8, 5];
        let results = solve_forward(&a, &b, true).unwrap();
        let rebuilt = crate::apply::reconstruct(&a, &b, &results);
        assert_eq!(rebuilt, b);
    }

    #[test]
    fn solve_reverse_round_trips() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 9, 3, 4, 8, 5];
        let results = solve_reverse(&a, &b, true).unwrap();
        let rebuilt = crate::apply::reconstruct(&a, &b, &results);
        assert_eq!(rebuilt, b);
    }

    #[test]
    fn solve_forward_handles_empty_inputs() {
        let results = solve_forward::<i32>(&[], &[], true).unwrap();
        assert!(results.snakes().is_empty());
    }
}
