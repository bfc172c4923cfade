use std::ops::{Index, IndexMut};

use crate::error::{MatrixError, Result};

/// Validates a shape and returns its element count. Rejects zero dimensions
/// and products that overflow `usize`.
fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    if rows == 0 || cols == 0 {
        return Err(MatrixError::InvalidArgument {
            reason: "matrix dimensions must be positive",
        });
    }
    rows.checked_mul(cols).ok_or(MatrixError::InvalidArgument {
        reason: "matrix dimensions overflow",
    })
}

/// Dense row-major matrix of `f64` values.
///
/// Storage is one contiguous buffer of `rows * cols` elements owned by the
/// matrix, addressed as `i * cols + j`. Every operation that produces a new
/// matrix allocates fresh storage; results never alias their inputs.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
}

impl Matrix {
    /// Creates a `rows x cols` matrix with every element set to `0.0`.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        Ok(Self {
            data: vec![0.0; len],
            rows,
            cols,
        })
    }

    /// The sentinel "no matrix" value: zero dimensions, no storage.
    ///
    /// Never produced by [`Matrix::new`]; used to signal absence and as the
    /// state left behind by [`Matrix::release`].
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    /// Builds a `rows x cols` matrix from the first `rows * cols` values of
    /// a flat row-major buffer, so `m[(i, j)] = values[i * cols + j]`.
    ///
    /// A buffer longer than `rows * cols` is accepted; the excess is
    /// ignored. A shorter buffer is rejected.
    pub fn from_flat(values: &[f64], rows: usize, cols: usize) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        if values.len() < len {
            return Err(MatrixError::InvalidArgument {
                reason: "buffer shorter than rows * cols",
            });
        }
        Ok(Self {
            data: values[..len].to_vec(),
            rows,
            cols,
        })
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// True for the sentinel state (zero dimensions, no storage).
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    pub fn row_slice(&self, row: usize) -> &[f64] {
        let start = self.offset(row, 0);
        &self.data[start..start + self.cols]
    }

    /// Elementwise sum. Both operands must have the same shape.
    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        if self.shape() != other.shape() {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let data = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix product; requires `self.ncols() == other.nrows()`.
    ///
    /// Naive triple loop. Each cell accumulates over increasing `k` in
    /// plain f64, no pairwise or compensated summation.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if self.cols != other.rows {
            return Err(MatrixError::DimensionMismatch {
                left: self.shape(),
                right: other.shape(),
            });
        }
        let mut result = Matrix {
            data: vec![0.0; self.rows * other.cols],
            rows: self.rows,
            cols: other.cols,
        };
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self[(i, k)] * other[(k, j)];
                }
                result[(i, j)] = sum;
            }
        }
        Ok(result)
    }

    /// Returns the `cols x rows` transpose.
    pub fn transpose(&self) -> Matrix {
        let mut result = Matrix {
            data: vec![0.0; self.rows * self.cols],
            rows: self.cols,
            cols: self.rows,
        };
        for i in 0..self.rows {
            for j in 0..self.cols {
                result[(j, i)] = self[(i, j)];
            }
        }
        result
    }

    /// Arithmetic mean of all elements, summed left to right in row-major
    /// order.
    ///
    /// The one operation that checks for the sentinel state instead of
    /// assuming a validly constructed matrix.
    pub fn average(&self) -> Result<f64> {
        if self.rows == 0 || self.cols == 0 || self.data.is_empty() {
            return Err(MatrixError::InvalidArgument {
                reason: "average of an empty matrix",
            });
        }
        let sum: f64 = self.data.iter().sum();
        Ok(sum / (self.rows * self.cols) as f64)
    }

    /// Drops the backing storage and resets to the sentinel state.
    ///
    /// Idempotent, safe on an already-empty matrix. `Drop` makes this
    /// unnecessary in ordinary use; it exists for callers that want to hand
    /// back storage before the value goes out of scope.
    pub fn release(&mut self) {
        if self.data.is_empty() {
            return;
        }
        self.data = Vec::new();
        self.rows = 0;
        self.cols = 0;
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Matrix {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}
