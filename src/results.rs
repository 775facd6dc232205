// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! `Results`: the output of a comparator run.

use crate::snake::Snake;
use crate::vector::KLineVector;

/// The edit script plus (when requested) the search snapshots that
/// produced it. A "full" result carries both direction's snapshot
/// arrays (the linear comparator, at the top level); a "partial"
/// result carries only the one the greedy comparator searched with.
#[derive(Debug, Default)]
pub struct Results {
    snakes: Vec<Snake>,
    forward_vs: Vec<KLineVector>,
    reverse_vs: Vec<KLineVector>,
}

/// Compares only the edit script, ignoring the search snapshots —
/// two runs that disagree on whether to keep snapshots still compare
/// equal if they agree on the snakes.
impl PartialEq for Results {
    fn eq(&self, other: &Self) -> bool {
        self.snakes == other.snakes
    }
}

impl Results {
    pub fn full(snakes: Vec<Snake>, forward_vs: Vec<KLineVector>, reverse_vs: Vec<KLineVector>) -> Self {
        Self {
            snakes,
            forward_vs,
            reverse_vs,
        }
    }

    pub fn partial_forward(snakes: Vec<Snake>, forward_vs: Vec<KLineVector>) -> Self {
        Self {
            snakes,
            forward_vs,
            reverse_vs: Vec::new(),
        }
    }

    pub fn partial_reverse(snakes: Vec<Snake>, reverse_vs: Vec<KLineVector>) -> Self {
        Self {
            snakes,
            forward_vs: Vec::new(),
            reverse_vs,
        }
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn forward_vs(&self) -> &[KLineVector] {
        &self.forward_vs
    }

    pub fn reverse_vs(&self) -> &[KLineVector] {
        &self.reverse_vs
    }

    /// Total edit distance implied by the script: the sum of every
    /// snake's deleted and inserted counts.
    pub fn distance(&self) -> usize {
        self.snakes.iter().map(|s| s.deleted + s.inserted).sum()
    }
}
