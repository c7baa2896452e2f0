#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]
//!
//! Every rendered frame starts from an immutable [`FramePlan`]: the sampled
//! camera placement, lens and light settings for that frame. Plans are
//! produced by a [`FrameSampler`] owning its RNG, handed to the renderer to
//! pose the scene, and recorded next to the labels so a dataset can be
//! reproduced. Nothing sampled for one frame is ever mutated for the next.
//!
//! The renderer itself stays a black box behind [`RenderSource`]: it renders
//! pixels and reports the camera parameters and object geometry needed for
//! labeling.

/// HSV to RGB conversion for sampled light colors.
pub mod color;

/// Immutable per-frame randomization plans.
pub mod plan;

/// Randomized frame plan sampling.
pub mod sampler;

/// Renderer boundary traits and object geometry.
pub mod source;

pub use color::hsv_to_rgb;
pub use plan::{CameraPlan, FramePlan, LightPlan};
pub use sampler::{FrameSampler, SampleRanges};
pub use source::{RenderSource, SceneObject};
