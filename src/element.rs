use core::fmt;
use core::ops::{Add, Mul};

use half::f16;
use wide::f32x8;

/// Floating-point sample width of a plane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    /// 16-bit (half-precision) samples.
    Half,
    /// 32-bit (single-precision) samples.
    Single,
}

impl Precision {
    /// Bits per sample (16 or 32).
    pub fn bits(self) -> u32 {
        match self {
            Self::Half => 16,
            Self::Single => 32,
        }
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Half => f.write_str("half"),
            Self::Single => f.write_str("single"),
        }
    }
}

/// Plane element type: one of the two supported floating-point widths.
///
/// Carries both the scalar arithmetic and the 8-lane vector used by the
/// vectorized kernel. Every operation — scalar or per-lane — rounds to the
/// element width before the next one, so accumulation error is identical
/// between the two kernel paths, and half-precision accumulation carries
/// the rounding error of its 11-bit mantissa by design.
pub trait Element:
    Copy + PartialEq + fmt::Debug + Add<Output = Self> + Mul<Output = Self> + 'static
{
    /// Width tag consulted by the path selector.
    const PRECISION: Precision;
    /// Elements per vector, for both element widths.
    const LANES: usize = 8;
    /// 8-lane vector of `Self`.
    type Vector: Copy;

    /// Additive identity.
    fn zero() -> Self;
    /// Narrowing conversion from `f32`.
    fn from_f32(v: f32) -> Self;
    /// Widening conversion to `f32`.
    fn to_f32(self) -> f32;

    /// All lanes set to `v`.
    fn splat(v: Self) -> Self::Vector;
    /// Load [`Self::LANES`] elements from the head of `src`.
    ///
    /// Panics if `src` is shorter than that; callers guarantee bounds.
    fn load(src: &[Self]) -> Self::Vector;
    /// Store all lanes to the head of `dst`. Panics if `dst` is too short.
    fn store(v: Self::Vector, dst: &mut [Self]);
    /// Lane-wise addition.
    fn vadd(a: Self::Vector, b: Self::Vector) -> Self::Vector;
    /// Lane-wise multiplication.
    fn vmul(a: Self::Vector, b: Self::Vector) -> Self::Vector;
}

impl Element for f32 {
    const PRECISION: Precision = Precision::Single;
    type Vector = f32x8;

    fn zero() -> Self {
        0.0
    }

    fn from_f32(v: f32) -> Self {
        v
    }

    fn to_f32(self) -> f32 {
        self
    }

    #[inline]
    fn splat(v: Self) -> f32x8 {
        f32x8::splat(v)
    }

    #[inline]
    fn load(src: &[Self]) -> f32x8 {
        let mut lanes = [0.0f32; 8];
        lanes.copy_from_slice(&src[..8]);
        f32x8::from(lanes)
    }

    #[inline]
    fn store(v: f32x8, dst: &mut [Self]) {
        dst[..8].copy_from_slice(&v.to_array());
    }

    #[inline]
    fn vadd(a: f32x8, b: f32x8) -> f32x8 {
        a + b
    }

    #[inline]
    fn vmul(a: f32x8, b: f32x8) -> f32x8 {
        a * b
    }
}

/// 8-lane half-precision vector.
///
/// Safe Rust has no hardware f16 vectors, so lanes are computed one at a
/// time; each lane op rounds to f16 exactly like the scalar path does, which
/// keeps the two kernel paths bit-identical for half-precision planes.
#[derive(Clone, Copy, Debug)]
pub struct F16x8([f16; 8]);

impl Element for f16 {
    const PRECISION: Precision = Precision::Half;
    type Vector = F16x8;

    fn zero() -> Self {
        f16::ZERO
    }

    fn from_f32(v: f32) -> Self {
        f16::from_f32(v)
    }

    fn to_f32(self) -> f32 {
        f16::to_f32(self)
    }

    #[inline]
    fn splat(v: Self) -> F16x8 {
        F16x8([v; 8])
    }

    #[inline]
    fn load(src: &[Self]) -> F16x8 {
        let mut lanes = [f16::ZERO; 8];
        lanes.copy_from_slice(&src[..8]);
        F16x8(lanes)
    }

    #[inline]
    fn store(v: F16x8, dst: &mut [Self]) {
        dst[..8].copy_from_slice(&v.0);
    }

    #[inline]
    fn vadd(a: F16x8, b: F16x8) -> F16x8 {
        let mut lanes = [f16::ZERO; 8];
        for (out, (x, y)) in lanes.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *out = *x + *y;
        }
        F16x8(lanes)
    }

    #[inline]
    fn vmul(a: F16x8, b: F16x8) -> F16x8 {
        let mut lanes = [f16::ZERO; 8];
        for (out, (x, y)) in lanes.iter_mut().zip(a.0.iter().zip(b.0.iter())) {
            *out = *x * *y;
        }
        F16x8(lanes)
    }
}
