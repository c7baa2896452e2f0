use glam::{DMat4, DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// Sampled camera placement and lens settings for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraPlan {
    /// Camera location in world coordinates.
    pub location: [f64; 3],
    /// Camera orientation as XYZ euler angles in radians.
    pub rotation_euler: [f64; 3],
    /// Lens focal length in millimeters.
    pub focal_length: f64,
}

impl CameraPlan {
    /// The rigid camera-to-world transform this plan describes.
    pub fn world_from_camera(&self) -> DMat4 {
        let rotation = DQuat::from_euler(
            EulerRot::XYZ,
            self.rotation_euler[0],
            self.rotation_euler[1],
            self.rotation_euler[2],
        );
        DMat4::from_rotation_translation(rotation, DVec3::from_array(self.location))
    }
}

/// Sampled light settings for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightPlan {
    /// Light power in watts.
    pub energy: f64,
    /// Light color as linear RGB.
    pub color: [f64; 3],
}

/// The complete randomization plan for a single frame.
///
/// A plan is constructed once by the sampler, applied to the scene by the
/// renderer, and never mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FramePlan {
    /// Camera placement and lens settings.
    pub camera: CameraPlan,
    /// Light settings.
    pub light: LightPlan,
}
