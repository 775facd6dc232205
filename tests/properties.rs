// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

use myers_diff::{apply, compare, render, Algorithm, Config};
use pretty_assertions::assert_eq;

fn levenshtein(a: &[i32], b: &[i32]) -> usize {
    let n = a.len();
    let m = b.len();
    let mut row: Vec<usize> = (0..=m).collect();
    for i in 1..=n {
        let mut prev = row[0];
        row[0] = i;
        for j in 1..=m {
            let temp = row[j];
            row[j] = if a[i - 1] == b[j - 1] {
                prev
            } else {
                1 + prev.min(row[j]).min(row[j - 1])
            };
            prev = temp;
        }
    }
    row[m]
}

fn assert_round_trips(a: &[i32], b: &[i32]) {
    let results = compare::diff(a, b).unwrap();
    assert_eq!(apply::reconstruct(a, b, &results), b);
}

fn assert_optimal(a: &[i32], b: &[i32]) {
    let results = compare::diff(a, b).unwrap();
    assert_eq!(results.distance(), levenshtein(a, b));
}

fn assert_covers_inputs(a: &[i32], b: &[i32]) {
    let results = compare::diff(a, b).unwrap();
    let mut consumed_a = 0usize;
    let mut produced_b = 0usize;
    for snake in results.snakes() {
        consumed_a += snake.deleted + snake.diagonal_length;
        produced_b += snake.inserted + snake.diagonal_length;
    }
    assert_eq!(consumed_a, a.len());
    assert_eq!(produced_b, b.len());
}

/// The snake list is totally ordered in both x and y: each snake's end
/// point is no further right/down than the next snake's start point.
fn assert_monotonic(a: &[i32], b: &[i32]) {
    let results = compare::diff(a, b).unwrap();
    for pair in results.snakes().windows(2) {
        let (x_end, y_end) = pair[0].end_point();
        let (x_start, y_start) = pair[1].start_point();
        assert!(
            x_end <= x_start && y_end <= y_start,
            "snakes out of order: {:?} ends after {:?} starts",
            pair[0],
            pair[1]
        );
    }
}

fn assert_all_properties(a: &[i32], b: &[i32]) {
    assert_round_trips(a, b);
    assert_optimal(a, b);
    assert_covers_inputs(a, b);
    assert_monotonic(a, b);
}

#[test]
fn empty_against_empty() {
    assert_all_properties(&[], &[]);
}

#[test]
fn empty_against_nonempty() {
    assert_all_properties(&[], &[1, 2, 3]);
    assert_all_properties(&[1, 2, 3], &[]);
}

#[test]
fn identical_sequences_have_zero_distance() {
    let a = [1, 2, 3, 4, 5];
    assert_all_properties(&a, &a);
    let results = compare::diff(&a, &a).unwrap();
    assert_eq!(results.distance(), 0);
}

#[test]
fn single_insert() {
    assert_all_properties(&[1, 2, 3], &[1, 2, 9, 3]);
}

#[test]
fn single_delete() {
    assert_all_properties(&[1, 2, 9, 3], &[1, 2, 3]);
}

#[test]
fn completely_disjoint_sequences() {
    assert_all_properties(&[1, 2, 3], &[4, 5, 6]);
}

#[test]
fn long_integer_sequence_with_scattered_edits() {
    let a: Vec<i32> = (0..120).collect();
    let mut b = a.clone();
    b.remove(100);
    b.remove(50);
    b.insert(50, -1);
    b.insert(10, -2);
    assert_all_properties(&a, &b);
}

#[test]
fn linear_and_greedy_agree_on_distance() {
    let a: Vec<i32> = vec![3, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
    let b: Vec<i32> = vec![1, 4, 1, 5, 5, 9, 2, 6, 5, 8, 9];
    let linear_results = compare::diff(&a, &b).unwrap();
    let greedy_results = compare::diff_with(
        &a,
        &b,
        Config {
            algorithm: Algorithm::Greedy,
            ..Config::default()
        },
    )
    .unwrap();
    assert_eq!(linear_results.distance(), greedy_results.distance());
    assert_eq!(
        apply::reconstruct(&a, &b, &greedy_results),
        apply::reconstruct(&a, &b, &linear_results)
    );
}

#[test]
fn render_and_apply_agree_on_context_and_inserted_elements() {
    let a = [1, 2, 3, 4];
    let b = [1, 9, 3, 4];
    let results = compare::diff(&a, &b).unwrap();
    let transcript = render::unified(&a, &b, &results);
    let rebuilt = apply::reconstruct(&a, &b, &results);
    assert_eq!(rebuilt, b);
    assert!(transcript.lines().count() >= 4);
}
