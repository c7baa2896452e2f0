use glam::DVec3;

use crate::camera::Camera;

/// Outcome of projecting a single world-space point through a [`Camera`].
///
/// Points behind (or exactly on) the camera plane cannot be projected; they
/// are reported explicitly instead of producing out-of-range coordinates, so
/// downstream consumers can decide how an unprojectable vertex affects the
/// object it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ProjectedPoint {
    /// The point projects to normalized image coordinates.
    ///
    /// `(0, 0)` is one image corner and `(1, 1)` the opposite one; values
    /// outside `[0, 1]` are off-screen but still meaningful for clipping.
    Visible {
        /// Normalized horizontal image coordinate.
        u: f64,
        /// Normalized vertical image coordinate.
        v: f64,
    },
    /// The point lies behind or on the camera plane.
    BehindCamera,
}

impl ProjectedPoint {
    /// Returns `true` for points behind the camera plane.
    pub fn is_behind(&self) -> bool {
        matches!(self, Self::BehindCamera)
    }

    /// The normalized coordinates, if the point projected.
    pub fn uv(&self) -> Option<(f64, f64)> {
        match *self {
            Self::Visible { u, v } => Some((u, v)),
            Self::BehindCamera => None,
        }
    }
}

/// Project a world-space point to normalized image coordinates.
///
/// The camera looks down its local negative z axis, so camera-space points
/// with `z >= 0` are behind or on the camera plane and yield
/// [`ProjectedPoint::BehindCamera`]. Visible points go through the intrinsic
/// matrix, a perspective divide, and a horizontal flip that matches the
/// handedness of the renderer's image coordinates.
///
/// Pure and deterministic; the output is not clipped to the viewport.
pub fn project_point(camera: &Camera, point_world: DVec3) -> ProjectedPoint {
    let point_camera = camera.world_to_camera(point_world);

    if point_camera.z >= 0.0 {
        return ProjectedPoint::BehindCamera;
    }

    let projected = *camera.intrinsic_matrix() * point_camera;
    let inv_z = 1.0 / projected.z;

    let u = 1.0 - (projected.x * inv_z) / camera.x_resolution() as f64;
    let v = (projected.y * inv_z) / camera.y_resolution() as f64;

    ProjectedPoint::Visible { u, v }
}
