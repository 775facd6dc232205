// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! The LCS snake provider: standalone forward/reverse one-`d`-step
//! searches, and the combined `middle` search used by the
//! divide-and-conquer comparator.

use tracing::{instrument, trace};

use crate::error::DiffError;
use crate::snake::{Snake, SnakePair};
use crate::vector::KLineVector;

/// Advances every k-line at search depth `d` for a forward search
/// over the whole rectangle `(0, N) x (0, M)`. Returns the
/// terminating snake once some k-line reaches `(N, M)`; otherwise
/// signals that the caller should retry at `d + 1`.
#[instrument(skip(source, dest, v), fields(d))]
pub fn forward<T: PartialEq>(
    source: &[T],
    n: usize,
    dest: &[T],
    m: usize,
    v: &mut KLineVector,
    d: usize,
) -> Result<Snake, DiffError> {
    let d_i = d as isize;
    let mut k = -d_i;
    while k <= d_i {
        let snake = Snake::calculate(v, k, d, source, 0, n, dest, 0, m);
        if snake.x_end() >= n && snake.y_end() >= m {
            trace!(d, k, "forward search reached the far corner");
            return Ok(snake);
        }
        k += 2;
    }
    Err(DiffError::SearchExhausted { d_max: d })
}

/// Symmetric to [`forward`]: advances every k-line at depth `d` for a
/// reverse search over `(0, N) x (0, M)`, terminating when some
/// k-line reaches the origin.
#[instrument(skip(source, dest, v), fields(d))]
pub fn reverse<T: PartialEq>(
    source: &[T],
    n: usize,
    dest: &[T],
    m: usize,
    v: &mut KLineVector,
    d: usize,
) -> Result<Snake, DiffError> {
    let delta = v.delta();
    let d_i = d as isize;
    let mut k = -d_i + delta;
    while k <= d_i + delta {
        let snake = Snake::calculate(v, k, d, source, 0, n, dest, 0, m);
        if snake.x_end() == 0 && snake.y_end() == 0 {
            trace!(d, k, "reverse search reached the origin");
            return Ok(snake);
        }
        k += 2;
    }
    Err(DiffError::SearchExhausted { d_max: d })
}

/// Runs interleaved forward/reverse searches over the sub-rectangle
/// `[a0, a0+N) x [b0, b0+M)`, each up to `(N+M+1)/2` steps, looking
/// for the middle snake: the point where the two frontiers overlap.
/// Optionally records a `V` snapshot after every step, for callers
/// that need to replay the trace (the top-level recursive call only).
#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, fields(a0, n, b0, m))]
pub fn middle<T: PartialEq>(
    source: &[T],
    a0: usize,
    n: usize,
    dest: &[T],
    b0: usize,
    m: usize,
    v_forward: &mut KLineVector,
    v_reverse: &mut KLineVector,
    mut forward_vs: Option<&mut Vec<KLineVector>>,
    mut reverse_vs: Option<&mut Vec<KLineVector>>,
) -> Result<SnakePair, DiffError> {
    let max_size = (n + m + 1) / 2;
    let delta = n as isize - m as isize;
    let delta_is_even = delta % 2 == 0;

    v_forward.init_stub(n, m);
    v_reverse.init_stub(n, m);

    for d in 0..=max_size {
        let d_i = d as isize;

        let mut k = -d_i;
        while k <= d_i {
            let snake = Snake::calculate(v_forward, k, d, source, a0, n, dest, b0, m);
            let lo = delta - (d_i - 1);
            let hi = delta + (d_i - 1);
            if !delta_is_even
                && k >= lo
                && k <= hi
                && v_forward.get(k) >= v_reverse.get(k)
            {
                let mut result_snake = snake;
                result_snake.d = Some(d);
                if let Some(vs) = forward_vs.as_deref_mut() {
                    if let Ok(copy) = v_forward.create_copy(d, true, 0) {
                        vs.push(copy);
                    }
                }
                trace!(d, k, "middle snake found on forward pass");
                return Ok(SnakePair {
                    d: 2 * d - 1,
                    forward: Some(result_snake),
                    reverse: None,
                });
            }
            k += 2;
        }
        if let Some(vs) = forward_vs.as_deref_mut() {
            if let Ok(copy) = v_forward.create_copy(d, true, 0) {
                vs.push(copy);
            }
        }

        let mut k = -d_i + delta;
        while k <= d_i + delta {
            let snake = Snake::calculate(v_reverse, k, d, source, a0, n, dest, b0, m);
            if delta_is_even
                && k >= -d_i
                && k <= d_i
                && v_reverse.get(k) <= v_forward.get(k)
            {
                let mut result_snake = snake;
                result_snake.d = Some(d);
                if let Some(vs) = reverse_vs.as_deref_mut() {
                    if let Ok(copy) = v_reverse.create_copy(d, false, delta) {
                        vs.push(copy);
                    }
                }
                trace!(d, k, "middle snake found on reverse pass");
                return Ok(SnakePair {
                    d: 2 * d,
                    forward: None,
                    reverse: Some(result_snake),
                });
            }
            k += 2;
        }
        if let Some(vs) = reverse_vs.as_deref_mut() {
            if let Ok(copy) = v_reverse.create_copy(d, false, delta) {
                vs.push(copy);
            }
        }
    }

    Err(DiffError::SearchExhausted { d_max: max_size })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn forward_finds_full_path_for_identical_slices() {
        let a = [1, 2, 3];
        let b = [1, 2, 3];
        let mut v = KLineVector::new(true, 3, 3, 6);
        v.init_stub(3, 3);
        let snake = forward(&a, 3, &b, 3, &mut v, 0).unwrap();
        assert_eq!(snake.diagonal_length, 3);
    }

    #[test]
    fn middle_finds_overlap_for_single_substitution() {
        let a = [1, 2, 3, 4];
        let b = [1, 9, 3, 4];
        let mut vf = KLineVector::new(true, 4, 4, 4);
        let mut vr = KLineVector::new(false, 4, 4, 4);
        let pair = middle(&a, 0, 4, &b, 0, 4, &mut vf, &mut vr, None, None).unwrap();
        assert_eq!(pair.d, 2);
    }
}
