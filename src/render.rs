// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Turns a [`Results`] into a human-readable `+`/`-`/`=` transcript.

use std::fmt::Display;

use crate::results::Results;

/// One logical line of a rendered transcript: a contiguous run of
/// deleted, inserted, or unchanged elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a, T> {
    Deleted(&'a [T]),
    Inserted(&'a [T]),
    Context(&'a [T]),
}

/// Classifies every snake in `results` into its deletion, insertion,
/// and context slices, in left-to-right reading order.
pub fn lines<'a, T>(source: &'a [T], dest: &'a [T], results: &Results) -> Vec<Line<'a, T>> {
    let mut out = Vec::new();
    for snake in results.snakes() {
        if snake.is_forward {
            if snake.deleted > 0 {
                out.push(Line::Deleted(&source[snake.x_start..snake.x_mid()]));
            }
            if snake.inserted > 0 {
                out.push(Line::Inserted(&dest[snake.y_start..snake.y_mid()]));
            }
            if snake.diagonal_length > 0 {
                out.push(Line::Context(&source[snake.x_mid()..snake.x_end()]));
            }
        } else {
            if snake.diagonal_length > 0 {
                out.push(Line::Context(&source[snake.x_end()..snake.x_mid()]));
            }
            if snake.deleted > 0 {
                out.push(Line::Deleted(&source[snake.x_mid()..snake.x_start]));
            }
            if snake.inserted > 0 {
                out.push(Line::Inserted(&dest[snake.y_mid()..snake.y_start]));
            }
        }
    }
    out
}

/// Renders `results` as a unified-diff-style transcript, one source
/// line per element, prefixed with `-`, `+`, or `=`.
pub fn unified<T: Display>(source: &[T], dest: &[T], results: &Results) -> String {
    let mut out = String::new();
    for line in lines(source, dest, results) {
        match line {
            Line::Deleted(items) => {
                for item in items {
                    out.push('-');
                    out.push_str(&item.to_string());
                    out.push('\n');
                }
            }
            Line::Inserted(items) => {
                for item in items {
                    out.push('+');
                    out.push_str(&item.to_string());
                    out.push('\n');
                }
            }
            Line::Context(items) => {
                for item in items {
                    out.push('=');
                    out.push_str(&item.to_string());
                    out.push('\n');
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::diff;

    #[test]
    fn renders_a_single_substitution() {
        let a = [1, 2, 3];
        let b = [1, 9, 3];
        let results = diff(&a, &b).unwrap();
        let text = unified(&a, &b, &results);
        assert!(text.contains("-2\n"));
        assert!(text.contains("+9\n"));
        assert!(text.contains("=1\n"));
        assert!(text.contains("=3\n"));
    }
}
