//! Placing the items of a finished row.

use flexrow_core::{Bounds, HorizontalAlignment, RowAlignment};

use crate::row::Row;

/// Computes frames for the items of a [`Row`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowPositioner {
    /// Width rows are packed into
    pub available_width: f64,
    /// Horizontal gap between items
    pub gap: f64,
    pub horizontal_alignment: HorizontalAlignment,
    pub row_alignment: RowAlignment,
}

impl RowPositioner {
    pub fn new(
        available_width: f64,
        gap: f64,
        horizontal_alignment: HorizontalAlignment,
        row_alignment: RowAlignment,
    ) -> Self {
        Self {
            available_width,
            gap,
            horizontal_alignment,
            row_alignment,
        }
    }

    /// X coordinate of the row's first item.
    ///
    /// [`Row::used_width`] counts a gap after the last item, which the right
    /// and center offsets compensate for. Neither adds the row origin.
    pub fn start_x(&self, row: &Row) -> f64 {
        match self.horizontal_alignment {
            HorizontalAlignment::Left => row.origin().x,
            HorizontalAlignment::Right => self.available_width - row.used_width() - self.gap,
            HorizontalAlignment::Center => (self.available_width - row.used_width() + self.gap) / 2.0,
        }
    }

    /// Y coordinate of an item of `item_height` inside `row`.
    pub fn item_y(&self, row: &Row, item_height: f64) -> f64 {
        let top = row.origin().y;
        match self.row_alignment {
            RowAlignment::Top => top,
            RowAlignment::Bottom => top + row.height() - item_height,
            RowAlignment::Center => top + (row.height() - item_height) / 2.0,
        }
    }

    /// Frames for every item in `row`, left to right, paired with the
    /// item's input index.
    pub fn position(&self, row: &Row) -> Vec<(usize, Bounds)> {
        let mut x = self.start_x(row);
        row.entries()
            .iter()
            .map(|entry| {
                let y = self.item_y(row, entry.size.height);
                let frame = Bounds::new(x, y, entry.size.width, entry.size.height);
                x += entry.size.width + self.gap;
                (entry.index, frame)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use flexrow_core::{Point, Size};

    use super::*;
    use crate::row::RowPacker;

    fn two_item_row(origin: Point) -> Row {
        let mut packer = RowPacker::new(origin, Size::new(100.0, 100.0), 10.0);
        assert!(packer.try_accept(0, Size::new(40.0, 20.0)));
        assert!(packer.try_accept(1, Size::new(30.0, 40.0)));
        packer.finish()
    }

    fn positioner(horizontal: HorizontalAlignment, vertical: RowAlignment) -> RowPositioner {
        RowPositioner::new(100.0, 10.0, horizontal, vertical)
    }

    #[test]
    fn test_left_top() {
        let row = two_item_row(Point::new(5.0, 7.0));
        let frames = positioner(HorizontalAlignment::Left, RowAlignment::Top).position(&row);
        assert_eq!(frames[0], (0, Bounds::new(5.0, 7.0, 40.0, 20.0)));
        assert_eq!(frames[1], (1, Bounds::new(55.0, 7.0, 30.0, 40.0)));
    }

    #[test]
    fn test_right_start_offset() {
        // used width 40 + 10 + 30 + 10 = 90
        let row = two_item_row(Point::ZERO);
        let positioner = positioner(HorizontalAlignment::Right, RowAlignment::Top);
        assert!((positioner.start_x(&row) - 0.0).abs() < 0.001);
        let frames = positioner.position(&row);
        assert!((frames[1].1.right() - 80.0).abs() < 0.001);
    }

    #[test]
    fn test_center_start_offset() {
        let row = two_item_row(Point::ZERO);
        let positioner = positioner(HorizontalAlignment::Center, RowAlignment::Top);
        // (100 - 90 + 10) / 2
        assert!((positioner.start_x(&row) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_alignment_ignores_origin_x() {
        let row = two_item_row(Point::new(25.0, 0.0));
        let positioner = positioner(HorizontalAlignment::Center, RowAlignment::Top);
        assert!((positioner.start_x(&row) - 10.0).abs() < 0.001);
    }

    #[test]
    fn test_bottom_alignment() {
        let row = two_item_row(Point::new(0.0, 100.0));
        let frames = positioner(HorizontalAlignment::Left, RowAlignment::Bottom).position(&row);
        assert!((frames[0].1.y - 120.0).abs() < 0.001);
        assert!((frames[1].1.y - 100.0).abs() < 0.001);
        assert!((frames[0].1.bottom() - frames[1].1.bottom()).abs() < 0.001);
    }

    #[test]
    fn test_center_alignment() {
        let row = two_item_row(Point::ZERO);
        let frames = positioner(HorizontalAlignment::Left, RowAlignment::Center).position(&row);
        assert!((frames[0].1.y - 10.0).abs() < 0.001);
        assert!((frames[1].1.y - 0.0).abs() < 0.001);
    }
}
