mod scalar_impl;
mod simd_impl;

use crate::element::Element;
use crate::plane::{Plane, PlaneRef};

pub(crate) fn scalar<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    radius: usize,
    output: &mut Plane<E>,
) {
    match intercept {
        Some(ic) => scalar_impl::reconstruct::<E, true>(base, slope, weights, ic, radius, output),
        // The intercept plane is never read when INTERCEPT is false; base
        // stands in to satisfy the signature.
        None => scalar_impl::reconstruct::<E, false>(base, slope, weights, base, radius, output),
    }
}

pub(crate) fn simd<E: Element>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: Option<PlaneRef<'_, E>>,
    radius: usize,
    output: &mut Plane<E>,
) {
    match intercept {
        Some(ic) => simd_impl::reconstruct::<E, true>(base, slope, weights, ic, radius, output),
        None => simd_impl::reconstruct::<E, false>(base, slope, weights, base, radius, output),
    }
}
