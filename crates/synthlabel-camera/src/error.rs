use thiserror::Error;

/// Error types for camera operations.
#[derive(Debug, Error)]
pub enum CameraError {
    /// Sensor dimensions must be strictly positive
    #[error("Invalid sensor size: {width} x {height} mm")]
    InvalidSensorSize {
        /// Physical sensor width in millimeters
        width: f64,
        /// Physical sensor height in millimeters
        height: f64,
    },

    /// Focal length must be strictly positive
    #[error("Invalid focal length: {0} mm")]
    InvalidFocalLength(f64),

    /// Output resolution must be non-zero on both axes
    #[error("Invalid render resolution: {x} x {y} px")]
    InvalidResolution {
        /// Horizontal resolution in pixels
        x: u32,
        /// Vertical resolution in pixels
        y: u32,
    },

    /// Pixel aspect ratio must be strictly positive
    #[error("Invalid pixel aspect ratio: {0}")]
    InvalidPixelAspect(f64),

    /// Resolution percentage must be strictly positive
    #[error("Invalid resolution percentage: {0}")]
    InvalidResolutionPercentage(f64),

    /// The camera world transform could not be inverted
    #[error("Camera world transform is not invertible (determinant {0})")]
    NonInvertibleTransform(f64),
}

/// Result type for camera operations.
pub type CameraResult<T> = Result<T, CameraError>;
