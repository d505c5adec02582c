//! Greedy row packing.
//!
//! A [`RowPacker`] fills one row. It accepts items while they fit in the
//! remaining width, never looks ahead and never revisits a finished row.

use flexrow_core::{Point, Size};

use tracing::trace;

/// Packing state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowState {
    /// No item accepted yet; the next item is taken unconditionally
    Empty,
    /// At least one item accepted
    Filling,
}

/// An item accepted into a row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowEntry {
    /// Position of the item in the input list
    pub index: usize,
    /// Resolved content size
    pub size: Size,
}

/// A finished run of items on one line.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    origin: Point,
    entries: Vec<RowEntry>,
    used_width: f64,
    height: f64,
}

impl Row {
    fn new(origin: Point) -> Self {
        Self {
            origin,
            entries: Vec::new(),
            used_width: 0.0,
            height: 0.0,
        }
    }

    /// Top-left corner of the row.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Accepted items, in input order.
    pub fn entries(&self) -> &[RowEntry] {
        &self.entries
    }

    /// Sum of item widths plus one gap after every item, the last one
    /// included.
    pub fn used_width(&self) -> f64 {
        self.used_width
    }

    /// Height of the tallest item.
    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds a single row.
#[derive(Debug, Clone)]
pub struct RowPacker {
    row: Row,
    available: Size,
    gap: f64,
}

impl RowPacker {
    /// Start an empty row at `origin`.
    pub fn new(origin: Point, available: Size, gap: f64) -> Self {
        Self {
            row: Row::new(origin),
            available,
            gap,
        }
    }

    /// Space item sizes resolve against.
    pub fn available(&self) -> Size {
        self.available
    }

    pub fn state(&self) -> RowState {
        if self.row.is_empty() {
            RowState::Empty
        } else {
            RowState::Filling
        }
    }

    /// The row built so far.
    pub fn row(&self) -> &Row {
        &self.row
    }

    /// Try to add the item at `index` with its resolved `size`.
    ///
    /// An empty row takes any item, however wide. Otherwise the item is
    /// taken when the remaining width is at least its width. A rejected item
    /// leaves the row untouched.
    pub fn try_accept(&mut self, index: usize, size: Size) -> bool {
        let remaining = self.available.width - self.row.used_width;
        if self.state() == RowState::Filling && remaining < size.width {
            trace!(index, width = size.width, remaining, "item rejected");
            return false;
        }

        self.row.entries.push(RowEntry { index, size });
        self.row.used_width += size.width + self.gap;
        self.row.height = self.row.height.max(size.height);
        trace!(index, width = size.width, used_width = self.row.used_width, "item accepted");
        true
    }

    /// Close the row.
    pub fn finish(self) -> Row {
        self.row
    }
}
