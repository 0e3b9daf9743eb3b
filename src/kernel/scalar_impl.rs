use crate::element::Element;
use crate::plane::{Plane, PlaneRef};

/// Scalar reconstruction kernel.
///
/// For each output pixel, evaluates the local linear model of every neighbor
/// in the clamped `(2r+1)x(2r+1)` window and accumulates the weighted
/// predictions in the working precision of the plane.
pub(super) fn reconstruct<E: Element, const INTERCEPT: bool>(
    base: PlaneRef<'_, E>,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: PlaneRef<'_, E>,
    radius: usize,
    output: &mut Plane<E>,
) {
    let width = base.width();
    let height = base.height();

    for j in 0..height {
        let brow = base.row(j);
        let orow = output.row_mut(j);
        for i in 0..width {
            orow[i] = pixel::<E, INTERCEPT>(brow[i], slope, weights, intercept, radius, i, j);
        }
    }
}

/// One output sample. Also used by the vectorized kernel for the columns its
/// blocks cannot cover.
#[inline]
pub(super) fn pixel<E: Element, const INTERCEPT: bool>(
    value: E,
    slope: PlaneRef<'_, E>,
    weights: PlaneRef<'_, E>,
    intercept: PlaneRef<'_, E>,
    radius: usize,
    i: usize,
    j: usize,
) -> E {
    let width = slope.width();
    let height = slope.height();

    let y_lo = j.saturating_sub(radius);
    let y_hi = (j + radius).min(height - 1);
    let x_lo = i.saturating_sub(radius);
    let x_hi = (i + radius).min(width - 1);

    let mut acc = E::zero();
    for y in y_lo..=y_hi {
        let srow = slope.row(y);
        let wrow = weights.row(y);
        let irow = intercept.row(y);

        for x in x_lo..=x_hi {
            let pred = if INTERCEPT {
                value * srow[x] + irow[x]
            } else {
                value * srow[x]
            };
            acc = acc + pred * wrow[x];
        }
    }
    acc
}
