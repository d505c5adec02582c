//! Resolving an item's size specs into a concrete content size.

use flexrow_core::{LayoutSize, Size};

use crate::item::FlowItem;

/// Resolve both axes of `spec`: width against `container.width`, height
/// against `container.height`.
pub fn resolve_size(spec: LayoutSize, container: Size, intrinsic: Size) -> Size {
    Size::new(
        spec.width.resolve(container.width, intrinsic.width),
        spec.height.resolve(container.height, intrinsic.height),
    )
}

/// Content size of `item` inside `available`.
///
/// The item is only asked for its intrinsic size when one of its specs is
/// estimated.
pub fn content_size<I: FlowItem + ?Sized>(item: &I, available: Size) -> Size {
    let spec = item.layout_size();
    let intrinsic = if spec.needs_intrinsic() {
        item.intrinsic_size(available)
    } else {
        Size::ZERO
    };
    resolve_size(spec, available, intrinsic)
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use flexrow_core::{Bounds, SizeSpec};

    use super::*;
    use crate::item::FlowChild;

    struct CountingItem {
        spec: LayoutSize,
        calls: Cell<u32>,
    }

    impl FlowItem for CountingItem {
        fn layout_size(&self) -> LayoutSize {
            self.spec
        }

        fn intrinsic_size(&self, available: Size) -> Size {
            self.calls.set(self.calls.get() + 1);
            Size::new(available.width / 2.0, 12.0)
        }

        fn set_frame(&mut self, _frame: Bounds) {}
    }

    #[test]
    fn test_mixed_specs() {
        let spec = LayoutSize::new(SizeSpec::Proportional(0.5), SizeSpec::Estimated(20.0));
        let size = resolve_size(spec, Size::new(300.0, 100.0), Size::new(0.0, 35.0));
        assert!((size.width - 150.0).abs() < 0.001);
        assert!((size.height - 35.0).abs() < 0.001);
    }

    #[test]
    fn test_height_uses_container_height() {
        let spec = LayoutSize::new(SizeSpec::Absolute(10.0), SizeSpec::Proportional(0.5));
        let size = resolve_size(spec, Size::new(300.0, 80.0), Size::ZERO);
        assert!((size.height - 40.0).abs() < 0.001);
    }

    #[test]
    fn test_estimated_fallback() {
        let item = FlowChild::new(LayoutSize::new(SizeSpec::Estimated(20.0), SizeSpec::Absolute(5.0)))
            .with_intrinsic(30.0, 0.0);
        assert_eq!(content_size(&item, Size::new(100.0, 100.0)).width, 30.0);

        let item = item.with_intrinsic(10.0, 0.0);
        assert_eq!(content_size(&item, Size::new(100.0, 100.0)).width, 20.0);
    }

    #[test]
    fn test_intrinsic_queried_only_when_estimated() {
        let fixed = CountingItem {
            spec: LayoutSize::fixed(10.0, 10.0),
            calls: Cell::new(0),
        };
        content_size(&fixed, Size::new(100.0, 100.0));
        assert_eq!(fixed.calls.get(), 0);

        let estimated = CountingItem {
            spec: LayoutSize::new(SizeSpec::Estimated(0.0), SizeSpec::Estimated(0.0)),
            calls: Cell::new(0),
        };
        let size = content_size(&estimated, Size::new(100.0, 100.0));
        assert_eq!(estimated.calls.get(), 1);
        assert!((size.width - 50.0).abs() < 0.001);
        assert!((size.height - 12.0).abs() < 0.001);
    }
}
