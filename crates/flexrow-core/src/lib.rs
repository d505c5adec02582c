//! Core types for the Flexrow flow layout engine.
//!
//! This crate holds the declarative inputs of a layout pass ([`SizeSpec`],
//! [`SpacingSpec`], alignments), the geometry it produces ([`Bounds`],
//! [`Size`]) and the errors raised by the surfaces around the pass.
//! The algorithm itself lives in `flexrow-layout`.

pub mod errors;
pub mod geometry;
pub mod types;

pub use errors::{ConfigError, ContainerError, FlowError};
pub use geometry::{Bounds, EdgeInsets, Point, Size};
pub use types::{HorizontalAlignment, LayoutSize, RowAlignment, SizeSpec, SpacingSpec};
