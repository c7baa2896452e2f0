#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Projected object vertices are reduced to an axis-aligned bounding box in
//! normalized image coordinates, clipped to the viewport, and emitted as
//! `class_id center_x center_y width height` label lines, one file per
//! rendered frame. Objects that do not produce a usable box (behind the
//! camera, fully off-screen, or degenerate after clipping) reduce to
//! [`BoundingBox::Empty`] and are dropped or zero-filled depending on the
//! writer mode.
//!
//! ## Example
//!
//! ```rust
//! use synthlabel_camera::ProjectedPoint;
//! use synthlabel_labels::{BoundingBox, LabelRecord};
//!
//! let projected = [
//!     ProjectedPoint::Visible { u: 0.2, v: 0.3 },
//!     ProjectedPoint::Visible { u: 0.8, v: 0.7 },
//! ];
//!
//! let bbox = BoundingBox::from_projected(&projected);
//! let record = LabelRecord::from_bounding_box(&bbox);
//! assert_eq!(record.to_string(), "0 0.500000 0.500000 0.600000 0.400000");
//! ```

/// Bounding box values and the projected-vertex reducer.
pub mod bbox;

/// Error types for label output.
pub mod error;

/// Label line records and their text format.
pub mod record;

/// Per-frame label file writers.
pub mod writer;

pub use bbox::{BoundingBox, Box2d};
pub use error::{LabelError, LabelResult};
pub use record::{LabelRecord, TARGET_CLASS_ID};
pub use writer::{LabelMode, LabelWriter};
