//! Gap resolution for a layout pass.

use flexrow_core::{Size, SpacingSpec};

/// Concrete gaps for one pass.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Gaps {
    /// Between items in a row
    pub horizontal: f64,
    /// Between rows
    pub vertical: f64,
}

impl Gaps {
    /// Resolve both specs once for a pass.
    ///
    /// Both axes resolve against the available width, vertical included.
    pub fn resolve(horizontal: SpacingSpec, vertical: SpacingSpec, available: Size) -> Self {
        Self {
            horizontal: horizontal.resolve(available.width),
            vertical: vertical.resolve(available.width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_gaps() {
        let gaps = Gaps::resolve(SpacingSpec::Fixed(4.0), SpacingSpec::Fixed(6.0), Size::new(100.0, 50.0));
        assert_eq!(gaps, Gaps { horizontal: 4.0, vertical: 6.0 });
    }

    #[test]
    fn test_vertical_gap_follows_width() {
        let gaps = Gaps::resolve(
            SpacingSpec::Proportional(0.1),
            SpacingSpec::Proportional(0.1),
            Size::new(200.0, 50.0),
        );
        assert!((gaps.horizontal - 20.0).abs() < 0.001);
        assert!((gaps.vertical - 20.0).abs() < 0.001);
    }
}
