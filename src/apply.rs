// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Reconstructs `dest` from `source` and a [`Results`], for checking
//! the round-trip law.

use crate::results::Results;

/// Concatenates, per snake, the inserted slice of `dest` and the
/// diagonal slice of `source` — in that order for a forward snake,
/// reversed for a reverse snake. Deleted slices contribute nothing:
/// they only ever consume `source`.
pub fn reconstruct<T: Clone>(source: &[T], dest: &[T], results: &Results) -> Vec<T> {
    let mut out = Vec::new();
    for snake in results.snakes() {
        if snake.is_forward {
            if snake.inserted > 0 {
                out.extend_from_slice(&dest[snake.y_start..snake.y_mid()]);
            }
            if snake.diagonal_length > 0 {
                out.extend_from_slice(&source[snake.x_mid()..snake.x_end()]);
            }
        } else {
            if snake.diagonal_length > 0 {
                out.extend_from_slice(&source[snake.x_end()..snake.x_mid()]);
            }
            if snake.inserted > 0 {
                out.extend_from_slice(&dest[snake.y_mid()..snake.y_start]);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::diff;
    use pretty_assertions::assert_eq;

    #[test]
    fn reconstructs_dest_exactly() {
        let a = vec!["a", "b", "c", "d"];
        let b = vec!["a", "x", "c", "d", "y"];
        let results = diff(&a, &b).unwrap();
        assert_eq!(reconstruct(&a, &b, &results), b);
    }
}
