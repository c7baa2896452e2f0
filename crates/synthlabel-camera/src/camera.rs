use glam::{DMat3, DMat4, DVec3};

use crate::error::{CameraError, CameraResult};

/// Vertical scale correction matching the renderer's aspect distortion.
/// Existing label sets were produced with this value; do not change it.
const Y_SCALE_CORRECTION: f64 = 1.2;

/// Determinant threshold below which the world transform is rejected.
const DET_EPSILON: f64 = 1e-12;

/// Raw camera settings reported by the renderer for a single frame.
///
/// Lengths are in millimeters, the lens shift is normalized, and the world
/// transform maps camera-local coordinates into world coordinates.
#[derive(Debug, Clone)]
pub struct CameraParams {
    /// Physical sensor width in millimeters.
    pub sensor_width: f64,
    /// Physical sensor height in millimeters.
    pub sensor_height: f64,
    /// Lens focal length in millimeters.
    pub focal_length: f64,
    /// Normalized horizontal lens shift.
    pub shift_x: f64,
    /// Normalized vertical lens shift.
    pub shift_y: f64,
    /// Horizontal output resolution in pixels.
    pub x_resolution: u32,
    /// Vertical output resolution in pixels.
    pub y_resolution: u32,
    /// Vertical pixel aspect ratio.
    pub pixel_aspect_y: f64,
    /// Render resolution scale in percent.
    pub resolution_percentage: f64,
    /// Rigid transform from camera-local to world coordinates.
    pub world_from_camera: DMat4,
}

/// An immutable per-frame camera.
///
/// Construction validates the raw parameters and derives the intrinsic
/// matrix and the world-to-camera transform once; the camera is then a pure
/// read-only value for the rest of the frame.
#[derive(Debug, Clone)]
pub struct Camera {
    params: CameraParams,
    k: DMat3,
    camera_from_world: DMat4,
}

impl Camera {
    /// Build a camera from the renderer-reported parameters.
    ///
    /// Fails when sensor size, focal length, resolution, pixel aspect or
    /// resolution percentage are out of range, or when the world transform is
    /// not invertible. A non-invertible transform is a configuration error of
    /// the scene, not a per-frame condition.
    pub fn new(params: CameraParams) -> CameraResult<Self> {
        if params.sensor_width <= 0.0 || params.sensor_height <= 0.0 {
            return Err(CameraError::InvalidSensorSize {
                width: params.sensor_width,
                height: params.sensor_height,
            });
        }
        if params.focal_length <= 0.0 {
            return Err(CameraError::InvalidFocalLength(params.focal_length));
        }
        if params.x_resolution == 0 || params.y_resolution == 0 {
            return Err(CameraError::InvalidResolution {
                x: params.x_resolution,
                y: params.y_resolution,
            });
        }
        if params.pixel_aspect_y <= 0.0 {
            return Err(CameraError::InvalidPixelAspect(params.pixel_aspect_y));
        }
        if params.resolution_percentage <= 0.0 {
            return Err(CameraError::InvalidResolutionPercentage(
                params.resolution_percentage,
            ));
        }

        let det = params.world_from_camera.determinant();
        if det.abs() < DET_EPSILON {
            return Err(CameraError::NonInvertibleTransform(det));
        }
        let camera_from_world = params.world_from_camera.inverse();

        let k = intrinsic_matrix(&params);

        Ok(Self {
            params,
            k,
            camera_from_world,
        })
    }

    /// The 3x3 pinhole intrinsic matrix.
    pub fn intrinsic_matrix(&self) -> &DMat3 {
        &self.k
    }

    /// Horizontal output resolution in pixels.
    pub fn x_resolution(&self) -> u32 {
        self.params.x_resolution
    }

    /// Vertical output resolution in pixels.
    pub fn y_resolution(&self) -> u32 {
        self.params.y_resolution
    }

    /// The raw parameters this camera was built from.
    pub fn params(&self) -> &CameraParams {
        &self.params
    }

    /// Transform a world-space point into camera-local coordinates.
    pub fn world_to_camera(&self, point: DVec3) -> DVec3 {
        self.camera_from_world.transform_point3(point)
    }
}

/// Derive the intrinsic matrix from validated parameters.
///
/// The horizontal and vertical pixel densities are scaled independently; the
/// vertical axis carries the fixed renderer aspect correction. The principal
/// point follows the lens shift.
fn intrinsic_matrix(params: &CameraParams) -> DMat3 {
    let f = params.focal_length;
    let scale = params.resolution_percentage / 100.0;

    let mx = params.x_resolution as f64 / params.sensor_width * scale;
    let my = params.y_resolution as f64 / (params.sensor_height * params.pixel_aspect_y)
        * scale
        * Y_SCALE_CORRECTION;

    let cx = params.x_resolution as f64 * (0.5 - params.shift_x);
    let cy = params.y_resolution as f64 * (0.5 - params.shift_y);

    DMat3::from_cols(
        DVec3::new(mx * f, 0.0, 0.0),
        DVec3::new(0.0, my * f, 0.0),
        DVec3::new(cx, cy, 1.0),
    )
}
