// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Runtime configuration for the `compare` factory.

/// Which comparator `diff_with` dispatches to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// The linear-space recursive divide-and-conquer comparator.
    #[default]
    Linear,
    /// The non-recursive snapshot-and-replay comparator.
    Greedy,
}

/// Which end the greedy comparator searches from. Ignored by the
/// linear comparator. See `spec.md` §4.6: the greedy comparator walks
/// backward from `(N, M)` (`Forward`) or forward from `(0, 0)`
/// (`Reverse`) depending on which pass filled the snapshot array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GreedyDirection {
    #[default]
    Forward,
    Reverse,
}

/// Knobs accepted by [`crate::compare::diff_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub algorithm: Algorithm,
    /// Whether adjacent same-axis snakes are merged into one before
    /// being returned. Defaults to `true` (canonical minimal output).
    pub combine_snakes: bool,
    /// Which pass the greedy comparator runs. Ignored when
    /// `algorithm` is `Algorithm::Linear`.
    pub greedy_direction: GreedyDirection,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            combine_snakes: true,
            greedy_direction: GreedyDirection::default(),
        }
    }
}
