//! Dense 2D arrays holding rendered feature images.

use serde::{Deserialize, Serialize};

/// A row-major 2D array of shape `(rows, cols)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageArray<T> {
    rows: usize,
    cols: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> ImageArray<T> {
    /// Creates an array filled with `T::default()`.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            data: vec![T::default(); rows * cols],
        }
    }
}

impl<T> ImageArray<T> {
    /// Reinterprets a flat row-major buffer as `(rows, cols)`.
    ///
    /// Returns `None` if the length does not match the shape.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<T>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Shape as `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Number of rows (first axis).
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns (second axis).
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of elements, `rows * cols`.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True when either axis is zero.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows && col < self.cols);
        row * self.cols + col
    }

    /// Returns the element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> &T {
        &self.data[self.index(row, col)]
    }

    /// Sets the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        let i = self.index(row, col);
        self.data[i] = value;
    }

    /// Flat row-major view.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in row-major order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }
}

impl<T: Clone> ImageArray<T> {
    /// Builds a `(rows, cols)` array from a flat row-major buffer, truncating
    /// it or padding it with `fill` to the exact size.
    pub(crate) fn from_flat_filled(rows: usize, cols: usize, mut data: Vec<T>, fill: T) -> Self {
        data.resize(rows * cols, fill);
        Self { rows, cols, data }
    }
}
