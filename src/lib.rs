// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! A from-scratch implementation of Myers' O(ND) diff algorithm and
//! its linear-space divide-and-conquer refinement, plus a
//! non-recursive greedy alternative, a transcript renderer, and a
//! patch applier.

pub mod apply;
mod combine;
pub mod compare;
mod config;
mod error;
mod greedy;
mod linear;
mod provider;
pub mod render;
mod results;
mod snake;
mod vector;

pub use compare::{diff, diff_with};
pub use config::{Algorithm, Config, GreedyDirection};
pub use error::DiffError;
pub use results::Results;
pub use snake::{Snake, SnakePair};
pub use vector::KLineVector;
