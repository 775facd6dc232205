// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Error taxonomy for the diff engine.

use thiserror::Error;

/// Everything that can go wrong inside the engine. Most variants
/// indicate a broken invariant (a bug in this crate, not bad input —
/// the comparators accept any two slices) and are not expected to
/// surface from a correct call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("k-line {k} is out of bounds for a vector of length {len}")]
    OutOfBounds { k: isize, len: usize },

    #[error("cannot snapshot V at d={d} (max_size={max_size}): capacity exceeded")]
    SnapshotOverCapacity { d: usize, max_size: usize },

    #[error("search exhausted at d={d_max} without finding a terminating snake")]
    SearchExhausted { d_max: usize },

    #[error(
        "trace reconstruction mismatch at d={d}, k={k}: expected endpoint {expected:?}, found {actual:?}"
    )]
    TraceMismatch {
        d: usize,
        k: isize,
        expected: (usize, usize),
        actual: (usize, usize),
    },

    #[error("missed {label} diagonal: x-gap {x_gap} does not match y-gap {y_gap}")]
    MissedDiagonal {
        label: &'static str,
        x_gap: usize,
        y_gap: usize,
    },
}
