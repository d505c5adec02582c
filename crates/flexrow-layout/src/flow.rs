//! The full layout pass.
//!
//! A pass resolves the gaps once, feeds every item through a [`RowPacker`],
//! positions each row as it closes, and finally reports the content size.
//! It keeps no state between calls.

use std::ops::Range;

use flexrow_core::{Bounds, Point, Size};
use tracing::{debug, trace};

use crate::dimension::content_size;
use crate::item::FlowItem;
use crate::options::FlowOptions;
use crate::position::RowPositioner;
use crate::row::{Row, RowPacker};
use crate::spacing::Gaps;

/// Summary of one laid-out row.
#[derive(Debug, Clone, PartialEq)]
pub struct RowSummary {
    /// Input indices of the row's items
    pub items: Range<usize>,
    /// Top of the row
    pub y: f64,
    /// Height of the tallest item
    pub height: f64,
    /// Packed width, including one trailing gap
    pub used_width: f64,
}

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    /// Available width by the total height of rows, gaps and vertical insets
    pub content_size: Size,
    /// One frame per item, in input order
    pub frames: Vec<Bounds>,
    /// Rows in top-to-bottom order
    pub rows: Vec<RowSummary>,
}

impl LayoutResult {
    /// Row holding the item at `index`.
    pub fn row_of(&self, index: usize) -> Option<usize> {
        self.rows.iter().position(|row| row.items.contains(&index))
    }
}

/// Lay out `items` inside a container of `container` size and write each
/// computed frame back to its item.
pub fn layout<I: FlowItem>(items: &mut [I], container: Size, options: &FlowOptions) -> LayoutResult {
    let result = measure(items, container, options);
    for (item, frame) in items.iter_mut().zip(&result.frames) {
        item.set_frame(*frame);
    }
    result
}

/// Run a layout pass without touching the items.
pub fn measure<I: FlowItem>(items: &[I], container: Size, options: &FlowOptions) -> LayoutResult {
    let mut pass = FlowPass::new(options, container, items.len());
    for (index, item) in items.iter().enumerate() {
        pass.place(index, item);
    }
    pass.finish()
}

/// State of one pass. Created at the start, fed every item while packing,
/// and consumed by [`FlowPass::finish`].
struct FlowPass<'a> {
    options: &'a FlowOptions,
    available: Size,
    gaps: Gaps,
    positioner: RowPositioner,
    packer: RowPacker,
    y: f64,
    frames: Vec<Bounds>,
    rows: Vec<RowSummary>,
}

impl<'a> FlowPass<'a> {
    fn new(options: &'a FlowOptions, container: Size, item_count: usize) -> Self {
        let available = options.insets.inset_size(container);
        let gaps = Gaps::resolve(options.horizontal_spacing, options.vertical_spacing, available);
        let y = options.insets.top;

        debug!(
            items = item_count,
            container_width = container.width,
            container_height = container.height,
            available_width = available.width,
            horizontal_gap = gaps.horizontal,
            vertical_gap = gaps.vertical,
            "flow layout pass started"
        );

        Self {
            options,
            available,
            gaps,
            positioner: RowPositioner::new(
                available.width,
                gaps.horizontal,
                options.horizontal_alignment,
                options.row_alignment,
            ),
            packer: RowPacker::new(Point::new(options.insets.left, y), available, gaps.horizontal),
            y,
            frames: vec![Bounds::default(); item_count],
            rows: Vec::new(),
        }
    }

    fn packer_at(&self, y: f64) -> RowPacker {
        RowPacker::new(Point::new(self.options.insets.left, y), self.available, self.gaps.horizontal)
    }

    fn place<I: FlowItem + ?Sized>(&mut self, index: usize, item: &I) {
        let size = content_size(item, self.packer.available());
        if self.packer.try_accept(index, size) {
            return;
        }

        self.y += self.packer.row().height() + self.gaps.vertical;
        let next = self.packer_at(self.y);
        let row = std::mem::replace(&mut self.packer, next).finish();
        self.flush(&row, index);

        // A fresh row takes any item.
        let accepted = self.packer.try_accept(index, size);
        debug_assert!(accepted);
    }

    /// Position `row` and record its frames. `end` is the index one past the
    /// row's last item.
    fn flush(&mut self, row: &Row, end: usize) {
        for (index, frame) in self.positioner.position(row) {
            self.frames[index] = frame;
        }
        let start = row.entries().first().map_or(end, |entry| entry.index);
        trace!(start, end, y = row.origin().y, height = row.height(), "row finalized");
        self.rows.push(RowSummary {
            items: start..end,
            y: row.origin().y,
            height: row.height(),
            used_width: row.used_width(),
        });
    }

    fn finish(mut self) -> LayoutResult {
        let end = self.frames.len();
        let last = self.packer.row().clone();
        self.flush(&last, end);

        let content_size = Size::new(
            self.available.width,
            self.y + last.height() + self.options.insets.bottom,
        );
        debug!(
            rows = self.rows.len(),
            content_width = content_size.width,
            content_height = content_size.height,
            "flow layout pass finished"
        );

        LayoutResult {
            content_size,
            frames: self.frames,
            rows: self.rows,
        }
    }
}
