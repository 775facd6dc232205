// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Shared combine-or-append glue used by both comparators.

use crate::snake::Snake;

/// Appends `candidate` to `snakes`, merging it into the current tail
/// first when `combine` is set and the merge is legal.
pub(crate) fn push_snake(snakes: &mut Vec<Snake>, candidate: Snake, combine: bool) {
    if combine {
        if let Some(tail) = snakes.last_mut() {
            if tail.append(&candidate) {
                return;
            }
        }
    }
    snakes.push(candidate);
}

/// Prepends `candidate` to `snakes`, merging it into the current head
/// first when `combine` is set and the merge is legal.
pub(crate) fn prepend_snake(snakes: &mut Vec<Snake>, candidate: Snake, combine: bool) {
    if combine {
        if let Some(&head) = snakes.first() {
            let mut merged = candidate;
            if merged.append(&head) {
                snakes[0] = merged;
                return;
            }
        }
    }
    snakes.insert(0, candidate);
}
