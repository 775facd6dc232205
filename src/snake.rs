// This file is part of the myers-diff crate.
//
// Licensed under the MIT license.

//! `Snake`: one combined axis-move + diagonal-run segment of an edit
//! script, and `SnakePair`, the result of a single middle-snake
//! search.

use crate::vector::KLineVector;

/// One segment of an edit script: an optional single-element
/// deletion or insertion (never both), followed or preceded by a run
/// of `diagonal_length` matching elements, depending on direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snake {
    pub x_start: usize,
    pub y_start: usize,
    pub deleted: usize,
    pub inserted: usize,
    pub diagonal_length: usize,
    pub is_forward: bool,
    pub delta: isize,
    pub is_middle: bool,
    pub d: Option<usize>,
}

impl Snake {
    /// Constructs a snake with an explicit axis-move and diagonal run.
    #[allow(clippy::too_many_arguments)]
    pub fn full(
        is_forward: bool,
        delta: isize,
        x_start: usize,
        y_start: usize,
        deleted: usize,
        inserted: usize,
        diagonal_length: usize,
    ) -> Self {
        Self {
            x_start,
            y_start,
            deleted,
            inserted,
            diagonal_length,
            is_forward,
            delta,
            is_middle: false,
            d: None,
        }
    }

    /// Constructs a snake from a single axis move (`down`: insertion;
    /// otherwise deletion) plus the diagonal run that followed it.
    pub fn axis_move(
        is_forward: bool,
        delta: isize,
        x_start: usize,
        y_start: usize,
        down: bool,
        diagonal_length: usize,
    ) -> Self {
        let (deleted, inserted) = if down { (0, 1) } else { (1, 0) };
        Self::full(
            is_forward,
            delta,
            x_start,
            y_start,
            deleted,
            inserted,
            diagonal_length,
        )
    }

    /// Point reached after the axis move, before the diagonal run.
    pub fn x_mid(&self) -> usize {
        if self.is_forward {
            self.x_start + self.deleted
        } else {
            self.x_start - self.deleted
        }
    }

    pub fn y_mid(&self) -> usize {
        if self.is_forward {
            self.y_start + self.inserted
        } else {
            self.y_start - self.inserted
        }
    }

    /// Point reached after the diagonal run.
    pub fn x_end(&self) -> usize {
        if self.is_forward {
            self.x_mid() + self.diagonal_length
        } else {
            self.x_mid() - self.diagonal_length
        }
    }

    pub fn y_end(&self) -> usize {
        if self.is_forward {
            self.y_mid() + self.diagonal_length
        } else {
            self.y_mid() - self.diagonal_length
        }
    }

    pub fn start_point(&self) -> (usize, usize) {
        (self.x_start, self.y_start)
    }

    pub fn end_point(&self) -> (usize, usize) {
        (self.x_end(), self.y_end())
    }

    /// Drops a degenerate one-element insertion that only exists to
    /// straddle the rectangle's edge (the stub point), folding it
    /// into an adjacent diagonal run instead.
    pub fn remove_stubs(&mut self, a0: usize, source_size: usize, b0: usize, dest_size: usize) {
        if self.inserted == 1 && self.is_forward && self.x_start == a0 && self.y_start + 1 == b0 {
            self.y_start += 1;
            self.inserted = 0;
        } else if self.inserted == 1
            && !self.is_forward
            && self.x_start == a0 + source_size
            && self.y_start == b0 + dest_size + 1
        {
            self.y_start -= 1;
            self.inserted = 0;
        }
    }

    /// The single-step advance described by `spec.md` §4.2: reads the
    /// neighboring k-lines of `v`, performs the axis move plus
    /// diagonal walk, writes the new frontier back to `v[k]`, and
    /// returns the resulting snake (with stubs removed).
    #[allow(clippy::too_many_arguments)]
    pub fn calculate<T: PartialEq>(
        v: &mut KLineVector,
        k: isize,
        d: usize,
        source: &[T],
        a0: usize,
        n: usize,
        dest: &[T],
        b0: usize,
        m: usize,
    ) -> Snake {
        let delta = v.delta();
        let is_forward = v.is_forward();
        let d_i = d as isize;
        let a0_i = a0 as isize;
        let b0_i = b0 as isize;

        // x_start/y_start/x_end/y_end below are rectangle-local (0-based),
        // matching what v stores; a0/b0 are added only for indexing into
        // source/dest during the walk, and for the final global coordinates.
        let (x_start, y_start, mut x_end, is_insert) = if is_forward {
            let down = k == -d_i || (k != d_i && v.get(k - 1) < v.get(k + 1));
            let x_start = if down { v.get(k + 1) } else { v.get(k - 1) };
            let y_start = x_start - if down { k + 1 } else { k - 1 };
            let x_end = if down { x_start } else { x_start + 1 };
            (x_start, y_start, x_end, down)
        } else {
            let up = k == d_i + delta || (k != -d_i + delta && v.get(k - 1) < v.get(k + 1));
            let x_start = if up { v.get(k - 1) } else { v.get(k + 1) };
            let y_start = x_start - if up { k - 1 } else { k + 1 };
            let x_end = if up { x_start } else { x_start - 1 };
            (x_start, y_start, x_end, up)
        };

        let mut y_end = x_end - k;
        let mut diagonal_length: usize = 0;

        if is_forward {
            while x_end < n as isize
                && y_end < m as isize
                && source[(x_end + a0_i) as usize] == dest[(y_end + b0_i) as usize]
            {
                x_end += 1;
                y_end += 1;
                diagonal_length += 1;
            }
        } else {
            while x_end > 0
                && y_end > 0
                && source[(x_end + a0_i - 1) as usize] == dest[(y_end + b0_i - 1) as usize]
            {
                x_end -= 1;
                y_end -= 1;
                diagonal_length += 1;
            }
        }

        v.set(k, x_end);

        // Shift to global coordinates and fold the degenerate stub
        // insertion away *before* casting to usize: the forward stub's
        // local y_start is -1, which would underflow if cast first.
        let x_start_g = x_start + a0_i;
        let mut y_start_g = y_start + b0_i;
        let deleted = if is_insert { 0 } else { 1 };
        let mut inserted = if is_insert { 1 } else { 0 };

        if is_forward && inserted == 1 && x_start_g == a0_i && y_start_g + 1 == b0_i {
            y_start_g += 1;
            inserted = 0;
        } else if !is_forward
            && inserted == 1
            && x_start_g == a0_i + n as isize
            && y_start_g == b0_i + m as isize + 1
        {
            y_start_g -= 1;
            inserted = 0;
        }

        Snake::full(
            is_forward,
            delta,
            x_start_g as usize,
            y_start_g as usize,
            deleted,
            inserted,
            diagonal_length,
        )
    }

    /// Merges `other` into `self` if they agree on axis (both
    /// deletion-only or both insertion-only, never mixed) and at
    /// least one carries no diagonal run. Returns whether the merge
    /// happened.
    pub fn append(&mut self, other: &Snake) -> bool {
        if self.is_forward != other.is_forward {
            return false;
        }
        let same_axis = (self.deleted > 0 && other.deleted > 0 && self.inserted == 0 && other.inserted == 0)
            || (self.inserted > 0 && other.inserted > 0 && self.deleted == 0 && other.deleted == 0)
            || (self.deleted == 0 && self.inserted == 0)
            || (other.deleted == 0 && other.inserted == 0);
        if !same_axis {
            return false;
        }
        if self.diagonal_length > 0 && other.diagonal_length > 0 {
            return false;
        }

        self.deleted += other.deleted;
        self.inserted += other.inserted;
        self.diagonal_length += other.diagonal_length;
        if self.is_forward {
            self.x_start = self.x_start.min(other.x_start);
            self.y_start = self.y_start.min(other.y_start);
        } else {
            self.x_start = self.x_start.max(other.x_start);
            self.y_start = self.y_start.max(other.y_start);
        }
        true
    }
}

/// Result of one middle-snake search: whichever direction's pass
/// first detected the overlap, paired with the total edit distance
/// `d` it implies.
#[derive(Debug, Clone)]
pub struct SnakePair {
    pub d: usize,
    pub forward: Option<Snake>,
    pub reverse: Option<Snake>,
}
