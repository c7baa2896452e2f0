#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! The camera is rebuilt from scratch for every rendered frame: the external
//! renderer reports sensor, lens and resolution settings together with the
//! camera world transform, and this crate turns them into a pinhole intrinsic
//! matrix and a world-to-camera transform used to project object vertices
//! into normalized image coordinates.
//!
//! ## Example
//!
//! ```rust
//! use glam::{DMat4, DVec3};
//! use synthlabel_camera::{project_point, Camera, CameraParams, ProjectedPoint};
//!
//! let camera = Camera::new(CameraParams {
//!     sensor_width: 36.0,
//!     sensor_height: 24.0,
//!     focal_length: 18.0,
//!     shift_x: 0.0,
//!     shift_y: 0.0,
//!     x_resolution: 640,
//!     y_resolution: 480,
//!     pixel_aspect_y: 1.0,
//!     resolution_percentage: 100.0,
//!     world_from_camera: DMat4::IDENTITY,
//! })?;
//!
//! // The camera looks down the negative z axis.
//! match project_point(&camera, DVec3::new(0.0, 0.0, -1.0)) {
//!     ProjectedPoint::Visible { u, v } => println!("({u}, {v})"),
//!     ProjectedPoint::BehindCamera => println!("not visible"),
//! }
//! # Ok::<(), synthlabel_camera::CameraError>(())
//! ```

/// Per-frame camera state and intrinsic matrix derivation.
pub mod camera;

/// Error types for camera construction.
pub mod error;

/// Projection of world-space points to normalized image coordinates.
pub mod projection;

pub use camera::{Camera, CameraParams};
pub use error::{CameraError, CameraResult};
pub use projection::{project_point, ProjectedPoint};
