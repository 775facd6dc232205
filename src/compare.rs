// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! Thin entry points dispatching to one of the two comparators.

use crate::config::{Algorithm, Config, GreedyDirection};
use crate::error::DiffError;
use crate::greedy;
use crate::linear;
use crate::results::Results;

/// Compares `a` against `b` using the default configuration (the
/// linear comparator, with snake-combining enabled).
pub fn diff<T: PartialEq>(a: &[T], b: &[T]) -> Result<Results, DiffError> {
    diff_with(a, b, Config::default())
}

/// Compares `a` against `b` using the comparator and options named in
/// `config`.
pub fn diff_with<T: PartialEq>(a: &[T], b: &[T], config: Config) -> Result<Results, DiffError> {
    match config.algorithm {
        Algorithm::Linear => linear::compare(a, b, config),
        Algorithm::Greedy => match config.greedy_direction {
            GreedyDirection::Forward => greedy::solve_forward(a, b, config.combine_snakes),
            GreedyDirection::Reverse => greedy::solve_reverse(a, b, config.combine_snakes),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diff_defaults_to_linear() {
        let results = diff(&[1, 2, 3], &[1, 2, 3]).unwrap();
        assert_eq!(results.distance(), 0);
    }

    #[test]
    fn diff_with_greedy_matches_linear_distance() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 9, 3, 4, 8, 5];
        let linear_result = diff(&a, &b).unwrap();
        let greedy_result = diff_with(
            &a,
            &b,
            Config {
                algorithm: Algorithm::Greedy,
                ..Config::default()
            },
        )
        .unwrap();
        assert_eq!(linear_result.distance(), greedy_result.distance());
    }

    #[test]
    fn diff_with_greedy_reverse_matches_linear_distance() {
        let a = [1, 2, 3, 4, 5];
        let b = [1, 9, 3, 4, 8, 5];
        let linear_result = diff(&a, &b).unwrap();
        let greedy_result = diff_with(
            &a,
            &b,
            Config {
                algorithm: Algorithm::Greedy,
                greedy_direction: GreedyDirection::Reverse,
                ..Config::default()
            },
        )
        .unwrap();
        assert_eq!(linear_result.distance(), greedy_result.distance());
    }
}
