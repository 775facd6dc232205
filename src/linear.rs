// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! The linear-space recursive divide-and-conquer comparator.

use tracing::{debug, instrument};

use crate::combine::push_snake;
use crate::config::Config;
use crate::error::DiffError;
use crate::provider;
use crate::results::Results;
use crate::snake::Snake;
use crate::vector::KLineVector;

/// Compares `source` against `dest`, returning the edit script plus
/// the top-level search's `V` snapshots.
pub fn compare<T: PartialEq>(source: &[T], dest: &[T], config: Config) -> Result<Results, DiffError> {
    let n = source.len();
    let m = dest.len();
    let max_size = (n + m) / 2 + 1;

    let mut v_forward = KLineVector::new(true, n, m, max_size);
    let mut v_reverse = KLineVector::new(false, n, m, max_size);
    let mut snakes = Vec::new();
    let mut forward_vs = Vec::new();
    let mut reverse_vs = Vec::new();

    compare_rect(
        0,
        &mut snakes,
        Some(&mut forward_vs),
        Some(&mut reverse_vs),
        source,
        0,
        n,
        dest,
        0,
        m,
        &mut v_forward,
        &mut v_reverse,
        config,
    )?;

    Ok(Results::full(snakes, forward_vs, reverse_vs))
}

#[allow(clippy::too_many_arguments)]
#[instrument(skip_all, fields(depth, a0, n, b0, m))]
fn compare_rect<T: PartialEq>(
    depth: usize,
    snakes: &mut Vec<Snake>,
    forward_vs: Option<&mut Vec<KLineVector>>,
    reverse_vs: Option<&mut Vec<KLineVector>>,
    source: &[T],
    a0: usize,
    n: usize,
    dest: &[T],
    b0: usize,
    m: usize,
    v_forward: &mut KLineVector,
    v_reverse: &mut KLineVector,
    config: Config,
) -> Result<(), DiffError> {
    if n == 0 && m == 0 {
        return Ok(());
    }
    if m == 0 {
        push_snake(
            snakes,
            Snake::full(true, 0, a0, b0, n, 0, 0),
            config.combine_snakes,
        );
        return Ok(());
    }
    if n == 0 {
        push_snake(
            snakes,
            Snake::full(true, 0, a0, b0, 0, m, 0),
            config.combine_snakes,
        );
        return Ok(());
    }

    let pair = provider::middle(
        source, a0, n, dest, b0, m, v_forward, v_reverse, forward_vs, reverse_vs,
    )?;

    let mut forward_snake = pair.forward;
    let mut reverse_snake = pair.reverse;
    if depth == 0 {
        if let Some(s) = forward_snake.as_mut() {
            s.is_middle = true;
        }
        if let Some(s) = reverse_snake.as_mut() {
            s.is_middle = true;
        }
    }

    debug!(depth, d = pair.d, "middle snake found");

    if pair.d > 1 {
        let (x, y) = forward_snake
            .map(|s| s.start_point())
            .unwrap_or_else(|| reverse_snake.unwrap().end_point());
        compare_rect(
            depth + 1,
            snakes,
            None,
            None,
            source,
            a0,
            x - a0,
            dest,
            b0,
            y - b0,
            v_forward,
            v_reverse,
            config,
        )?;

        if let Some(s) = forward_snake {
            push_snake(snakes, s, config.combine_snakes);
        }
        if let Some(s) = reverse_snake {
            push_snake(snakes, s, config.combine_snakes);
        }

        let (u, w) = reverse_snake
            .map(|s| s.start_point())
            .unwrap_or_else(|| forward_snake.unwrap().end_point());
        compare_rect(
            depth + 1,
            snakes,
            None,
            None,
            source,
            u,
            a0 + n - u,
            dest,
            w,
            b0 + m - w,
            v_forward,
            v_reverse,
            config,
        )?;
    } else {
        if let Some(s) = forward_snake {
            if s.x_start > a0 {
                let x_gap = s.x_start - a0;
                let y_gap = s.y_start - b0;
                if x_gap != y_gap {
                    return Err(DiffError::MissedDiagonal {
                        label: "forward",
                        x_gap,
                        y_gap,
                    });
                }
                push_snake(
                    snakes,
                    Snake::full(true, 0, a0, b0, 0, 0, x_gap),
                    config.combine_snakes,
                );
            }
            push_snake(snakes, s, config.combine_snakes);
        }
        if let Some(s) = reverse_snake {
            push_snake(snakes, s, config.combine_snakes);
            if s.x_start < a0 + n {
                let x_gap = (a0 + n) - s.x_start;
                let y_gap = (b0 + m) - s.y_start;
                if x_gap != y_gap {
                    return Err(DiffError::MissedDiagonal {
                        label: "reverse",
                        x_gap,
                        y_gap,
                    });
                }
                push_snake(
                    snakes,
                    Snake::full(true, 0, s.x_start, s.y_start, 0, 0, x_gap),
                    config.combine_snakes,
                );
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roundtrip(a: &[i32], b: &[i32]) {
        let results = compare(a, b, Config::default()).unwrap();
        let rebuilt = crate::apply::reconstruct(a, b, &results);
        assert_eq!(rebuilt, b);
    }

    #[test]
    fn empty_vs_empty() {
        roundtrip(&[], &[]);
    }

    #[test]
    fn empty_vs_nonempty() {
        roundtrip(&[], &[1, 2, 3]);
        roundtrip(&[1, 2, 3], &[]);
    }

    #[test]
    fn identical_slices_are_all_diagonal() {
        let a = [1, 2, 3, 4, 5];
        let results = compare(&a, &a, Config::default()).unwrap();
        assert_eq!(results.distance(), 0);
        roundtrip(&a, &a);
    }

    #[test]
    fn single_insert_and_delete() {
        roundtrip(&[1, 2, 3], &[1, 2, 9, 3]);
        roundtrip(&[1, 2, 9, 3], &[1, 2, 3]);
    }

    #[test]
    fn abcabba_cbabac_matches_classic_example() {
        // The running example from Myers' paper.
        let a = ['a', 'b', 'c', 'a', 'b', 'b', 'a'];
        let b = ['c', 'b', 'a', 'b', 'a', 'c'];
        let results = compare(&a, &b, Config::default()).unwrap();
        assert_eq!(results.distance(), 5);
        roundtrip_chars(&a, &b);
    }

    fn roundtrip_chars(a: &[char], b: &[char]) {
        let results = compare(a, b, Config::default()).unwrap();
        let rebuilt = crate::apply::reconstruct(a, b, &results);
        assert_eq!(rebuilt, b);
    }

    #[test]
    fn longer_integer_sequence() {
        let a: Vec<i32> = (0..120).collect();
        let mut b = a.clone();
        b.remove(60);
        b.insert(60, 999);
        roundtrip(&a, &b);
    }

    #[test]
    fn combine_snakes_can_be_disabled() {
        let a = [1, 2, 3];
        let b = [1, 9, 2, 3];
        let combined = compare(&a, &b, Config::default()).unwrap();
        let uncombined = compare(
            &a,
            &b,
            Config {
                combine_snakes: false,
                ..Config::default()
            },
        )
        .unwrap();
        assert!(uncombined.snakes().len() >= combined.snakes().len());
    }
}
