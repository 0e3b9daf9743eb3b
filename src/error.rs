use core::fmt;

use crate::element::Precision;

/// Errors surfaced by plane construction and the reconstruction entry points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconError {
    /// An input (or output) plane differs from the base plane in
    /// width, height, or stride. Shapes are `(width, height, stride)`.
    ShapeMismatch {
        /// Name of the offending plane (`"slope"`, `"weights"`, `"intercept"`, `"output"`).
        plane: &'static str,
        /// Shape of the base plane.
        expected: (usize, usize, usize),
        /// Shape of the offending plane.
        got: (usize, usize, usize),
    },
    /// The capability provider rejects the requested sample width.
    UnsupportedPrecision {
        /// The rejected precision.
        precision: Precision,
    },
    /// Row stride is smaller than the plane width.
    InvalidStride {
        /// Supplied stride, in elements.
        stride: usize,
        /// Plane width, in elements.
        width: usize,
    },
    /// Backing buffer length doesn't match `stride * height`.
    DataSizeMismatch {
        /// Required buffer length.
        expected: usize,
        /// Supplied buffer length.
        got: usize,
    },
}

impl fmt::Display for ReconError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { plane, expected, got } => {
                write!(
                    f,
                    "{plane} must have the same dimensions as base, passed \
                     [{}x{} stride {}] and [{}x{} stride {}]",
                    got.0, got.1, got.2, expected.0, expected.1, expected.2,
                )
            }
            Self::UnsupportedPrecision { precision } => {
                write!(f, "{}-bit float samples are not supported by this host", precision.bits())
            }
            Self::InvalidStride { stride, width } => {
                write!(f, "stride {stride} is smaller than width {width}")
            }
            Self::DataSizeMismatch { expected, got } => {
                write!(f, "plane buffer: expected {expected} elements, got {got}")
            }
        }
    }
}

#[cfg(feature = "std")]
extern crate std;

#[cfg(feature = "std")]
impl std::error::Error for ReconError {}
