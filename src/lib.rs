//! Windowed linear-model reconstruction for single-channel float planes.
//!
//! Re-derives a full-resolution plane (typically chroma) from a local linear
//! regression previously fit at lower resolution: alongside the `base` plane,
//! each pixel carries a `slope`, an optional `intercept`, and a blending
//! `weight`, and every output pixel is the weighted sum of the model
//! predictions `base * slope + intercept` taken over its square
//! `(2r+1)x(2r+1)` neighborhood, clamped at the plane edges.
//!
//! Two kernel paths produce identical output: a scalar per-pixel routine and
//! a vectorized one processing eight adjacent output pixels per step. Planes
//! hold either [`f32`] or [`half::f16`] samples; half-precision arithmetic
//! rounds after every operation, deliberately trading accumulation accuracy
//! for storage and throughput.
//!
//! The weight plane carries its own normalization: with `slope` uniformly 1,
//! `intercept` 0, and `weight` uniformly `1/(2r+1)^2`, the filter is an
//! identity away from the plane edges.
//!
//! # Example
//!
//! ```
//! use recon::{reconstruct, ExecPath, HostCaps, Plane};
//!
//! let base = Plane::filled(2.0f32, 8, 8);
//! let slope = Plane::filled(1.0f32, 8, 8);
//! let weights = Plane::filled(1.0 / 9.0, 8, 8);
//!
//! let out = reconstruct(
//!     base.view(),
//!     slope.view(),
//!     weights.view(),
//!     None,
//!     1,
//!     ExecPath::Auto,
//!     &HostCaps::detect(),
//! )
//! .unwrap();
//!
//! assert!((out.get(3, 3) - 2.0).abs() < 1e-6);
//! ```

#![no_std]
#![warn(missing_docs)]

extern crate alloc;

mod caps;
mod element;
mod error;
mod kernel;
mod plane;

use alloc::vec;

pub use caps::{Capabilities, HostCaps};
pub use element::{Element, F16x8, Precision};
pub use error::ReconError;
pub use plane::{Plane, PlaneRef};

/// Window radius used when the host does not specify one.
pub const DEFAULT_RADIUS: usize = 4;

/// Kernel path selection.
///
/// There is no fallback logic beyond "if the vectorized path is unavailable
/// or not requested, use scalar".
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExecPath {
    /// Vectorized when the capability provider allows it.
    Auto,
    /// Request the vectorized path; still subject to the capability provider.
    ForceVector,
    /// Always scalar.
    ForceScalar,
}

/// Reconstruct a plane, allocating the output.
///
/// All input planes must share width, height, and stride with `base`;
/// `radius` is the window half-width ([`DEFAULT_RADIUS`] when the host has no
/// opinion). The output has the same shape and precision as `base`.
///
/// Fails with [`ReconError::ShapeMismatch`] on disagreeing plane shapes and
/// with [`ReconError::UnsupportedPrecision`] when `caps` rejects the plane's
/// sample width, before any computation; with validated inputs the kernel
/// itself cannot fail.
pub fn reconstruct<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    radius: usize,
    path: ExecPath,
    caps: &impl Capabilities,
) -> Result<Plane<E>, ReconError> {
    validate(base, slope, weights, intercept, caps)?;

    let mut output = Plane::from_vec(
        vec![E::zero(); base.stride() * base.height()],
        base.width(),
        base.height(),
        base.stride(),
    )?;
    dispatch(base, slope, weights, intercept, radius, path, caps, &mut output);
    Ok(output)
}

/// Reconstruct into a caller-supplied output plane.
///
/// Same contract as [`reconstruct`]; additionally fails with
/// [`ReconError::ShapeMismatch`] (plane `"output"`) if `output` does not
/// match `base`'s shape.
#[allow(clippy::too_many_arguments)]
pub fn reconstruct_into<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    radius: usize,
    path: ExecPath,
    caps: &impl Capabilities,
    output: &mut Plane<E>,
) -> Result<(), ReconError> {
    validate(base, slope, weights, intercept, caps)?;
    ensure_same_shape("output", base.shape(), output.shape())?;

    dispatch(base, slope, weights, intercept, radius, path, caps, output);
    Ok(())
}

fn validate<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    caps: &impl Capabilities,
) -> Result<(), ReconError> {
    ensure_same_shape("slope", base.shape(), slope.shape())?;
    ensure_same_shape("weights", base.shape(), weights.shape())?;
    if let Some(ic) = intercept {
        ensure_same_shape("intercept", base.shape(), ic.shape())?;
    }

    if E::PRECISION == Precision::Half && !caps.half_precision() {
        return Err(ReconError::UnsupportedPrecision { precision: E::PRECISION });
    }
    Ok(())
}

fn ensure_same_shape(
    plane: &'static str,
    expected: (usize, usize, usize),
    got: (usize, usize, usize),
) -> Result<(), ReconError> {
    if expected != got {
        return Err(ReconError::ShapeMismatch { plane, expected, got });
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn dispatch<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    radius: usize,
    path: ExecPath,
    caps: &impl Capabilities,
    output: &mut Plane<E>,
) {
    let vectorized = caps.simd() && path != ExecPath::ForceScalar;
    if vectorized {
        kernel::simd(base, slope, weights, intercept, radius, output);
    } else {
        kernel::scalar(base, slope, weights, intercept, radius, output);
    }
}
