//! Row-wrapping flow layout.
//!
//! Items are placed left to right and wrap to a new row when the available
//! width runs out, much like words in a paragraph.
//!
//! # Architecture
//!
//! 1. **Resolution**: size and spacing specs become concrete numbers
//! 2. **Packing**: a greedy [`RowPacker`] fills one row at a time
//! 3. **Positioning**: a [`RowPositioner`] aligns each finished row
//! 4. **Pass**: [`layout`] drives the above and reports the content size
//!
//! # Example
//!
//! ```
//! use flexrow_layout::{layout, FlowChild, FlowOptions, Size, SpacingSpec};
//!
//! let mut items = vec![
//!     FlowChild::fixed(40.0, 20.0),
//!     FlowChild::fixed(40.0, 20.0),
//!     FlowChild::fixed(40.0, 20.0),
//! ];
//! let options = FlowOptions::default().with_spacing(SpacingSpec::Fixed(10.0));
//! let result = layout(&mut items, Size::new(100.0, 200.0), &options);
//!
//! assert_eq!(result.rows.len(), 2);
//! assert_eq!(result.content_size, Size::new(100.0, 50.0));
//! ```

mod container;
mod dimension;
mod flow;
mod item;
mod options;
mod position;
mod row;
mod spacing;

pub use container::{FlowContainer, LayoutOutcome};
pub use dimension::{content_size, resolve_size};
pub use flow::{layout, measure, LayoutResult, RowSummary};
pub use item::{FlowChild, FlowItem};
pub use options::FlowOptions;
pub use position::RowPositioner;
pub use row::{Row, RowEntry, RowPacker, RowState};
pub use spacing::Gaps;

pub use flexrow_core::{
    Bounds, ConfigError, ContainerError, EdgeInsets, FlowError, HorizontalAlignment, LayoutSize,
    Point, RowAlignment, Size, SizeSpec, SpacingSpec,
};
