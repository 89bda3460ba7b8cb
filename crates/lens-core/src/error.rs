use crate::constants::MAX_FOCAL_LENGTH_MM;
use thiserror::Error;

/// Inputs the lens calculation cannot turn into a finite focal length.
#[derive(Clone, Copy, Debug, Error, PartialEq)]
pub enum LensError {
    #[error("shooting distance must be a positive number of metres, got {0}")]
    InvalidDistance(f64),
    #[error("ground ratio must be in [0, 100) percent, got {0}")]
    InvalidGroundRatio(f64),
    #[error("firework vertical extent must be positive, got {0} m")]
    EmptyExtent(f64),
    #[error("framing needs a {required_deg:.1}° vertical field of view, wider than any rectilinear lens")]
    FieldOfViewTooWide { required_deg: f64 },
    #[error("framing needs a {exact_mm:.0} mm lens, longer than {max} mm", max = MAX_FOCAL_LENGTH_MM)]
    FocalLengthTooLong { exact_mm: f64 },
}
