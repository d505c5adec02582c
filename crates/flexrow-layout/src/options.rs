//! Configuration for a flow layout pass.

use flexrow_core::{ConfigError, EdgeInsets, HorizontalAlignment, RowAlignment, SpacingSpec};

/// Options for a flow layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlowOptions {
    /// Space between the container edge and the content
    pub insets: EdgeInsets,
    /// Gap between items in a row
    pub horizontal_spacing: SpacingSpec,
    /// Gap between rows
    pub vertical_spacing: SpacingSpec,
    /// Where each row starts
    pub horizontal_alignment: HorizontalAlignment,
    /// Vertical placement inside a row
    pub row_alignment: RowAlignment,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            insets: EdgeInsets::ZERO,
            horizontal_spacing: SpacingSpec::Fixed(8.0),
            vertical_spacing: SpacingSpec::Fixed(8.0),
            horizontal_alignment: HorizontalAlignment::Left,
            row_alignment: RowAlignment::Center,
        }
    }
}

impl FlowOptions {
    /// Set the content insets.
    pub fn with_insets(mut self, insets: EdgeInsets) -> Self {
        self.insets = insets;
        self
    }

    /// Set the gap between items in a row.
    pub fn with_horizontal_spacing(mut self, spacing: SpacingSpec) -> Self {
        self.horizontal_spacing = spacing;
        self
    }

    /// Set the gap between rows.
    pub fn with_vertical_spacing(mut self, spacing: SpacingSpec) -> Self {
        self.vertical_spacing = spacing;
        self
    }

    /// Use the same spacing on both axes.
    pub fn with_spacing(self, spacing: SpacingSpec) -> Self {
        self.with_horizontal_spacing(spacing)
            .with_vertical_spacing(spacing)
    }

    /// Set the horizontal alignment.
    pub fn with_horizontal_alignment(mut self, alignment: HorizontalAlignment) -> Self {
        self.horizontal_alignment = alignment;
        self
    }

    /// Set the row alignment.
    pub fn with_row_alignment(mut self, alignment: RowAlignment) -> Self {
        self.row_alignment = alignment;
        self
    }

    /// Check that every value is finite and that insets and gaps are not
    /// negative.
    ///
    /// Layout passes never call this; out-of-range values are laid out as
    /// given.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let insets = [
            ("insets.top", self.insets.top),
            ("insets.left", self.insets.left),
            ("insets.bottom", self.insets.bottom),
            ("insets.right", self.insets.right),
        ];
        for (field, value) in insets {
            check_non_negative(field, value)?;
        }
        check_spacing("horizontal_spacing", self.horizontal_spacing)?;
        check_spacing("vertical_spacing", self.vertical_spacing)?;
        Ok(())
    }

    /// Parse options from JSON. Missing fields take their default values.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    /// Serialize options to pretty-printed JSON.
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn check_spacing(field: &'static str, spacing: SpacingSpec) -> Result<(), ConfigError> {
    match spacing {
        SpacingSpec::Fixed(value) | SpacingSpec::Proportional(value) => {
            check_non_negative(field, value)
        }
    }
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}
