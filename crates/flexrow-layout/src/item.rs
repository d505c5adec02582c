//! Items laid out by a flow pass.

use flexrow_core::{Bounds, LayoutSize, Size};

/// Something a flow pass can place.
///
/// Items stay owned by the caller. A pass reads [`layout_size`], asks for
/// [`intrinsic_size`] when a spec is estimated, and writes the result back
/// through [`set_frame`].
///
/// [`layout_size`]: FlowItem::layout_size
/// [`intrinsic_size`]: FlowItem::intrinsic_size
/// [`set_frame`]: FlowItem::set_frame
pub trait FlowItem {
    /// Width and height specs for this item.
    fn layout_size(&self) -> LayoutSize;

    /// Natural size of the item's content when offered `available` space.
    fn intrinsic_size(&self, available: Size) -> Size;

    /// Receive the frame computed by a layout pass.
    fn set_frame(&mut self, frame: Bounds);
}

impl<T: FlowItem + ?Sized> FlowItem for Box<T> {
    fn layout_size(&self) -> LayoutSize {
        (**self).layout_size()
    }

    fn intrinsic_size(&self, available: Size) -> Size {
        (**self).intrinsic_size(available)
    }

    fn set_frame(&mut self, frame: Bounds) {
        (**self).set_frame(frame)
    }
}

impl<T: FlowItem + ?Sized> FlowItem for &mut T {
    fn layout_size(&self) -> LayoutSize {
        (**self).layout_size()
    }

    fn intrinsic_size(&self, available: Size) -> Size {
        (**self).intrinsic_size(available)
    }

    fn set_frame(&mut self, frame: Bounds) {
        (**self).set_frame(frame)
    }
}

/// A plain item with a fixed intrinsic size.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlowChild {
    /// Size specs
    pub layout_size: LayoutSize,
    /// Reported for every available size
    pub intrinsic: Size,
    /// Frame from the most recent pass
    pub frame: Bounds,
}

impl FlowChild {
    /// Create an item with the given specs and no intrinsic size.
    pub fn new(layout_size: LayoutSize) -> Self {
        Self {
            layout_size,
            intrinsic: Size::ZERO,
            frame: Bounds::default(),
        }
    }

    /// Create an item with absolute width and height.
    pub fn fixed(width: f64, height: f64) -> Self {
        Self::new(LayoutSize::fixed(width, height))
    }

    /// Set the intrinsic size.
    pub fn with_intrinsic(mut self, width: f64, height: f64) -> Self {
        self.intrinsic = Size::new(width, height);
        self
    }
}

impl FlowItem for FlowChild {
    fn layout_size(&self) -> LayoutSize {
        self.layout_size
    }

    fn intrinsic_size(&self, _available: Size) -> Size {
        self.intrinsic
    }

    fn set_frame(&mut self, frame: Bounds) {
        self.frame = frame;
    }
}
