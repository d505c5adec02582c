//! Declarative size, spacing and alignment values.

/// How an item sizes itself along one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeSpec {
    /// Exact size, ignoring container and intrinsic size
    Absolute(f64),
    /// Fraction of the container extent (not clamped to `0..=1`)
    Proportional(f64),
    /// At least the given minimum, growing to the intrinsic size
    Estimated(f64),
}

impl SizeSpec {
    /// Whether this spec depends on the item's intrinsic size.
    pub fn is_estimated(&self) -> bool {
        matches!(self, SizeSpec::Estimated(_))
    }

    /// Resolve to a concrete extent.
    ///
    /// `intrinsic` is only consulted for [`SizeSpec::Estimated`].
    pub fn resolve(&self, container: f64, intrinsic: f64) -> f64 {
        match *self {
            SizeSpec::Absolute(value) => value,
            SizeSpec::Proportional(fraction) => fraction * container,
            SizeSpec::Estimated(minimum) => minimum.max(intrinsic),
        }
    }
}

/// Width and height specs for one item.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutSize {
    pub width: SizeSpec,
    pub height: SizeSpec,
}

impl LayoutSize {
    pub const fn new(width: SizeSpec, height: SizeSpec) -> Self {
        Self { width, height }
    }

    /// Absolute width and height.
    pub const fn fixed(width: f64, height: f64) -> Self {
        Self::new(SizeSpec::Absolute(width), SizeSpec::Absolute(height))
    }

    /// Whether either axis needs the intrinsic size to resolve.
    pub fn needs_intrinsic(&self) -> bool {
        self.width.is_estimated() || self.height.is_estimated()
    }
}

/// Gap between neighbouring items or rows.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpacingSpec {
    /// Constant gap
    Fixed(f64),
    /// Fraction of the container extent
    Proportional(f64),
}

impl SpacingSpec {
    /// Resolve to a concrete gap.
    pub fn resolve(&self, container: f64) -> f64 {
        match *self {
            SpacingSpec::Fixed(value) => value,
            SpacingSpec::Proportional(fraction) => container * fraction,
        }
    }
}

impl Default for SpacingSpec {
    fn default() -> Self {
        SpacingSpec::Fixed(8.0)
    }
}

/// Where each row starts horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HorizontalAlignment {
    /// Rows start at the left inset
    #[default]
    Left,
    /// Rows end at the right edge
    Right,
    /// Rows are centered
    Center,
}

/// Vertical placement of an item inside its row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RowAlignment {
    /// Align to the row's top edge
    Top,
    /// Align to the row's bottom edge
    Bottom,
    /// Center within the row height
    #[default]
    Center,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_ignores_inputs() {
        assert_eq!(SizeSpec::Absolute(42.0).resolve(1000.0, 5000.0), 42.0);
    }

    #[test]
    fn test_proportional() {
        assert!((SizeSpec::Proportional(0.25).resolve(200.0, 0.0) - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_proportional_is_not_clamped() {
        assert!((SizeSpec::Proportional(1.5).resolve(100.0, 0.0) - 150.0).abs() < 0.001);
        assert!((SizeSpec::Proportional(-0.5).resolve(100.0, 0.0) + 50.0).abs() < 0.001);
    }

    #[test]
    fn test_estimated_uses_larger_value() {
        assert_eq!(SizeSpec::Estimated(20.0).resolve(100.0, 30.0), 30.0);
        assert_eq!(SizeSpec::Estimated(20.0).resolve(100.0, 10.0), 20.0);
    }

    #[test]
    fn test_is_estimated() {
        assert!(SizeSpec::Estimated(1.0).is_estimated());
        assert!(!SizeSpec::Absolute(1.0).is_estimated());
        assert!(LayoutSize::new(SizeSpec::Absolute(1.0), SizeSpec::Estimated(1.0)).needs_intrinsic());
        assert!(!LayoutSize::fixed(1.0, 1.0).needs_intrinsic());
    }

    #[test]
    fn test_spacing() {
        assert_eq!(SpacingSpec::Fixed(12.0).resolve(500.0), 12.0);
        assert!((SpacingSpec::Proportional(0.1).resolve(300.0) - 30.0).abs() < 0.001);
        assert_eq!(SpacingSpec::default(), SpacingSpec::Fixed(8.0));
    }

    #[test]
    fn test_alignment_defaults() {
        assert_eq!(HorizontalAlignment::default(), HorizontalAlignment::Left);
        assert_eq!(RowAlignment::default(), RowAlignment::Center);
    }
}
