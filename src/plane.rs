use alloc::vec;
use alloc::vec::Vec;

use crate::error::ReconError;

/// Owned single-channel plane of samples, row-major with an explicit stride.
///
/// `stride` is the element count per row (≥ `width`); the padding elements
/// between `width` and `stride` are never read or written by the kernels.
#[derive(Clone, Debug)]
pub struct Plane<T> {
    data: Vec<T>,
    width: usize,
    height: usize,
    stride: usize,
}

impl<T: Copy> Plane<T> {
    /// Plane of `width * height` copies of `value`, with a tight stride.
    pub fn filled(value: T, width: usize, height: usize) -> Self {
        Self { data: vec![value; width * height], width, height, stride: width }
    }

    /// Wrap an existing buffer.
    ///
    /// Fails with [`ReconError::InvalidStride`] if `stride < width` and with
    /// [`ReconError::DataSizeMismatch`] if `data.len() != stride * height`.
    pub fn from_vec(
        data: Vec<T>,
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, ReconError> {
        if stride < width {
            return Err(ReconError::InvalidStride { stride, width });
        }
        let expected = stride * height;
        if data.len() != expected {
            return Err(ReconError::DataSizeMismatch { expected, got: data.len() });
        }
        Ok(Self { data, width, height, stride })
    }

    /// Plane width in elements.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Elements per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height, stride)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.stride)
    }

    /// Row `y` without padding.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Mutable row `y` without padding.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        let start = y * self.stride;
        &mut self.data[start..start + self.width]
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }

    /// Borrowed read-only view.
    pub fn view(&self) -> PlaneRef<'_, T> {
        PlaneRef {
            data: &self.data,
            width: self.width,
            height: self.height,
            stride: self.stride,
        }
    }

    /// Consume the plane, returning the backing buffer (stride layout intact).
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }
}

/// Borrowed read-only view of a plane.
#[derive(Clone, Copy, Debug)]
pub struct PlaneRef<'a, T> {
    data: &'a [T],
    width: usize,
    height: usize,
    stride: usize,
}

impl<'a, T: Copy> PlaneRef<'a, T> {
    /// View over an existing buffer, with the same checks as
    /// [`Plane::from_vec`].
    pub fn new(
        data: &'a [T],
        width: usize,
        height: usize,
        stride: usize,
    ) -> Result<Self, ReconError> {
        if stride < width {
            return Err(ReconError::InvalidStride { stride, width });
        }
        let expected = stride * height;
        if data.len() != expected {
            return Err(ReconError::DataSizeMismatch { expected, got: data.len() });
        }
        Ok(Self { data, width, height, stride })
    }

    /// Plane width in elements.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Plane height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Elements per row, including padding.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// `(width, height, stride)`.
    pub fn shape(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.stride)
    }

    /// Row `y` without padding.
    pub fn row(&self, y: usize) -> &'a [T] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }

    /// Sample at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> T {
        self.data[y * self.stride + x]
    }
}
