use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::color::hsv_to_rgb;
use crate::plan::{CameraPlan, FramePlan, LightPlan};

/// Bounds for the per-frame randomization.
///
/// The defaults reproduce the distributions the reference dataset was
/// generated with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SampleRanges {
    /// Camera x and y are drawn from `[-planar_radius, planar_radius]`.
    pub planar_radius: f64,
    /// Camera height range (min, max).
    pub height: (f64, f64),
    /// Camera x/y tilt is drawn from `[-max_tilt, max_tilt]` radians. The
    /// roll around z covers the full circle.
    pub max_tilt: f64,
    /// Inclusive integer focal length range in millimeters.
    pub focal_length_mm: (u32, u32),
    /// Light energy range (min, max), before scaling.
    pub light_energy: (f64, f64),
    /// Multiplier applied to the sampled light energy.
    pub light_scale: f64,
    /// Light color saturation is drawn from `[0, max_saturation]`.
    pub max_saturation: f64,
}

impl Default for SampleRanges {
    fn default() -> Self {
        Self {
            planar_radius: 13.0 / 4.0,
            height: (1.5, 5.5),
            max_tilt: PI / 9.0,
            focal_length_mm: (18, 22),
            light_energy: (0.05, 3.5),
            light_scale: 1000.0,
            max_saturation: 0.5,
        }
    }
}

/// Draws a fresh [`FramePlan`] for every frame.
///
/// The sampler owns its RNG; a seeded sampler reproduces the same plan
/// sequence, which makes datasets replayable.
#[derive(Debug)]
pub struct FrameSampler {
    ranges: SampleRanges,
    rng: StdRng,
}

impl FrameSampler {
    /// Create a sampler seeded from the operating system.
    pub fn new(ranges: SampleRanges) -> Self {
        Self {
            ranges,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a deterministic sampler from a seed.
    pub fn with_seed(ranges: SampleRanges, seed: u64) -> Self {
        Self {
            ranges,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// The configured sampling bounds.
    pub fn ranges(&self) -> &SampleRanges {
        &self.ranges
    }

    /// Draw the next frame plan.
    pub fn sample(&mut self) -> FramePlan {
        let r = self.ranges.planar_radius;
        let (height_min, height_max) = self.ranges.height;
        let tilt = self.ranges.max_tilt;
        let (focal_min, focal_max) = self.ranges.focal_length_mm;
        let (energy_min, energy_max) = self.ranges.light_energy;

        let camera = CameraPlan {
            location: [
                self.rng.random_range(-r..=r),
                self.rng.random_range(-r..=r),
                self.rng.random_range(height_min..=height_max),
            ],
            rotation_euler: [
                self.rng.random_range(-tilt..=tilt),
                self.rng.random_range(-tilt..=tilt),
                self.rng.random_range(-PI..=PI),
            ],
            focal_length: self.rng.random_range(focal_min..=focal_max) as f64,
        };

        let hue = self.rng.random_range(0.0..1.0);
        let saturation = self.rng.random_range(0.0..=self.ranges.max_saturation);
        let light = LightPlan {
            energy: self.rng.random_range(energy_min..=energy_max) * self.ranges.light_scale,
            color: hsv_to_rgb(hue, saturation, 1.0),
        };

        FramePlan { camera, light }
    }
}
