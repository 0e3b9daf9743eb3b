use crate::element::Element;
use crate::plane::{Plane, PlaneRef};

use super::scalar_impl;

/// Vectorized reconstruction kernel.
///
/// Processes [`Element::LANES`] adjacent output pixels per block. Neighbor
/// samples are loaded as contiguous vectors, so as `x` walks the window of
/// the block's first pixel, lane `k` picks up pixel `i + k`'s neighbor at the
/// same window offset. Blocks run only where no per-lane x-clamp can occur;
/// the leading and trailing columns of each row (and rows too narrow for a
/// block) go through the scalar per-pixel routine, which keeps the two
/// kernels in exact agreement across the whole plane.
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
    let lanes = E::LANES;

    for j in 0..height {
        let y_lo = j.saturating_sub(radius);
        let y_hi = (j + radius).min(height.saturating_sub(1));

        // Columns whose window clamps on the left.
        let lead = radius.min(width);
        for i in 0..lead {
            let v = base.row(j)[i];
            output.row_mut(j)[i] =
                scalar_impl::pixel::<E, INTERCEPT>(v, slope, weights, intercept, radius, i, j);
        }

        // Full blocks: every load of lanes [x, x + LANES) stays inside the
        // row and every lane's window is unclamped in x.
        let mut i = lead;
        while i + lanes + radius <= width {
            let value = E::load(&base.row(j)[i..]);
            let mut acc = E::splat(E::zero());

            for y in y_lo..=y_hi {
                let srow = slope.row(y);
                let wrow = weights.row(y);
                let irow = intercept.row(y);

                for x in (i - radius)..=(i + radius) {
                    let s = E::load(&srow[x..]);
                    let w = E::load(&wrow[x..]);
                    let pred = if INTERCEPT {
                        E::vadd(E::vmul(value, s), E::load(&irow[x..]))
                    } else {
                        E::vmul(value, s)
                    };
                    acc = E::vadd(acc, E::vmul(pred, w));
                }
            }

            E::store(acc, &mut output.row_mut(j)[i..]);
            i += lanes;
        }

        // Remainder columns, including any right-edge clamping.
        for k in i..width {
            let v = base.row(j)[k];
            output.row_mut(j)[k] =
                scalar_impl::pixel::<E, INTERCEPT>(v, slope, weights, intercept, radius, k, j);
        }
    }
}
