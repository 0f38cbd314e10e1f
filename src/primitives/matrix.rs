//! Matrix type for 2D numeric data.

use std::fmt;

use super::Vector;
use crate::error::{MatrizError, Result};
use serde::{Deserialize, Serialize};

/// A dense 2D matrix of numeric values (row-major storage).
///
/// The matrix is always rectangular and never empty: every row has the same
/// number of elements, and both dimensions are at least one. Structural
/// editing (appending and deleting rows and columns) preserves this; the
/// operations that could break it fail with a typed error instead.
///
/// Two access conventions coexist, as the operations fall into two layers:
/// storage-level accessors ([`Matrix::get`], [`Matrix::set`], [`Matrix::row`],
/// [`Matrix::column`]) are 0-indexed and panic on misuse, while the checked
/// public surface ([`Matrix::value`], [`Matrix::set_value`],
/// [`Matrix::delete_row`], [`Matrix::minor`], ...) is 1-indexed and returns
/// errors.
///
/// # Examples
///
/// ```
/// use matriz::primitives::Matrix;
///
/// let m = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).expect("rectangular");
/// assert_eq!(m.shape(), (2, 3));
/// assert_eq!(m.value(1, 2).expect("in bounds"), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Matrix<T> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Copy> Matrix<T> {
    /// Creates a new matrix from a flat vector of row-major data.
    ///
    /// This is the storage-level constructor: it checks the layout (both
    /// dimensions nonzero, data length equal to `rows * cols`) but does not
    /// inspect element values. The checked constructor for the numeric
    /// surface is [`Matrix::from_rows`].
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the data length does
    /// not match `rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(MatrizError::invalid_shape(
                "dimensions must be at least 1x1",
            ));
        }
        if data.len() != rows * cols {
            return Err(MatrizError::invalid_shape(format!(
                "data length {} does not match {rows}x{cols}",
                data.len()
            )));
        }
        Ok(Self { data, rows, cols })
    }

    /// Returns the shape as (rows, cols).
    ///
    /// Reads the cached counters; O(1).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn n_rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn n_cols(&self) -> usize {
        self.cols
    }

    /// Gets element at (row, col), 0-indexed.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> T {
        self.data[row * self.cols + col]
    }

    /// Sets element at (row, col), 0-indexed.
    ///
    /// # Panics
    ///
    /// Panics if indices are out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: T) {
        self.data[row * self.cols + col] = value;
    }

    /// Returns a row as a Vector, 0-indexed.
    ///
    /// # Panics
    ///
    /// Panics if `row_idx` is out of bounds.
    #[must_use]
    pub fn row(&self, row_idx: usize) -> Vector<T> {
        let start = row_idx * self.cols;
        let end = start + self.cols;
        Vector::from_slice(&self.data[start..end])
    }

    /// Returns a column as a Vector, 0-indexed.
    ///
    /// # Panics
    ///
    /// Panics if `col_idx` is out of bounds.
    #[must_use]
    pub fn column(&self, col_idx: usize) -> Vector<T> {
        let data: Vec<T> = (0..self.rows)
            .map(|row| self.data[row * self.cols + col_idx])
            .collect();
        Vector::from_vec(data)
    }

    /// Returns the underlying data as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }
}

impl Matrix<f64> {
    /// Creates a matrix from an ordered sequence of rows.
    ///
    /// Every element is validated: the outer sequence must be non-empty,
    /// every row must have the same nonzero length, and every value must be
    /// finite.
    ///
    /// # Errors
    ///
    /// Returns an error if `rows` is empty, the first row is empty, any row
    /// length differs from the first, or any element is NaN or infinite.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self> {
        let Some(first) = rows.first() else {
            return Err(MatrizError::invalid_shape("no rows supplied"));
        };
        let cols = first.len();
        if cols == 0 {
            return Err(MatrizError::invalid_shape("rows must not be empty"));
        }
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatrizError::invalid_shape(format!(
                    "jagged rows: expected length {cols}, found {}",
                    row.len()
                )));
            }
            check_finite(row)?;
            data.extend_from_slice(row);
        }
        let out = Self {
            data,
            rows: rows.len(),
            cols,
        };
        out.debug_check_invariants();
        Ok(out)
    }

    /// Creates a matrix of zeros.
    ///
    /// Dimensions must be nonzero; debug builds assert this.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1, "matrix must be at least 1x1");
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates a matrix of ones.
    ///
    /// Dimensions must be nonzero; debug builds assert this.
    #[must_use]
    pub fn ones(rows: usize, cols: usize) -> Self {
        debug_assert!(rows >= 1 && cols >= 1, "matrix must be at least 1x1");
        Self {
            data: vec![1.0; rows * cols],
            rows,
            cols,
        }
    }

    /// Creates an identity matrix.
    ///
    /// `n` must be nonzero; debug builds assert this.
    #[must_use]
    pub fn identity(n: usize) -> Self {
        debug_assert!(n >= 1, "matrix must be at least 1x1");
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }

    /// Alias for [`Matrix::identity`].
    #[must_use]
    pub fn eye(n: usize) -> Self {
        Self::identity(n)
    }

    /// Gets the element at a 1-indexed position.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` is outside `1..=n_rows` or `col` is outside
    /// `1..=n_cols`.
    pub fn value(&self, row: usize, col: usize) -> Result<f64> {
        let r = self.check_row_index(row)?;
        let c = self.check_col_index(col)?;
        Ok(self.data[r * self.cols + c])
    }

    /// Sets the element at a 1-indexed position.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds or the value is NaN
    /// or infinite.
    pub fn set_value(&mut self, row: usize, col: usize, value: f64) -> Result<()> {
        let r = self.check_row_index(row)?;
        let c = self.check_col_index(col)?;
        if !value.is_finite() {
            return Err(MatrizError::non_finite(value));
        }
        self.data[r * self.cols + c] = value;
        self.debug_check_invariants();
        Ok(())
    }

    /// Appends a row at the bottom.
    ///
    /// # Errors
    ///
    /// Returns an error if the row length differs from the current column
    /// count or any element is non-finite. On error the matrix is unchanged.
    pub fn add_row(&mut self, row: &[f64]) -> Result<()> {
        if row.len() != self.cols {
            return Err(MatrizError::shape_mismatch(self.cols, row.len()));
        }
        check_finite(row)?;
        self.data.extend_from_slice(row);
        self.rows += 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Appends multiple rows at the bottom, in input order.
    ///
    /// Not transactional: rows are appended one at a time, so if one fails
    /// validation the rows before it remain appended. Callers needing
    /// all-or-nothing behavior must validate the input first.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Matrix::add_row`].
    pub fn add_rows(&mut self, rows: &[Vec<f64>]) -> Result<()> {
        for row in rows {
            self.add_row(row)?;
        }
        Ok(())
    }

    /// Deletes a row, 1-indexed, shifting subsequent rows up.
    ///
    /// # Errors
    ///
    /// Returns an error if `row` is out of bounds or the matrix has only one
    /// row left.
    pub fn delete_row(&mut self, row: usize) -> Result<()> {
        let r = self.check_row_index(row)?;
        if self.rows == 1 {
            return Err(MatrizError::cannot_empty("row"));
        }
        let start = r * self.cols;
        self.data.drain(start..start + self.cols);
        self.rows -= 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Appends a column at the right edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the column length differs from the current row
    /// count or any element is non-finite. On error the matrix is unchanged.
    pub fn add_column(&mut self, column: &[f64]) -> Result<()> {
        if column.len() != self.rows {
            return Err(MatrizError::shape_mismatch(self.rows, column.len()));
        }
        check_finite(column)?;
        let mut data = Vec::with_capacity(self.rows * (self.cols + 1));
        for (r, value) in column.iter().enumerate() {
            data.extend_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
            data.push(*value);
        }
        self.data = data;
        self.cols += 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Appends multiple columns at the right edge, in input order.
    ///
    /// Not transactional, like [`Matrix::add_rows`]: a failure partway
    /// leaves the columns appended before it in place.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by [`Matrix::add_column`].
    pub fn add_columns(&mut self, columns: &[Vec<f64>]) -> Result<()> {
        for column in columns {
            self.add_column(column)?;
        }
        Ok(())
    }

    /// Deletes a column, 1-indexed, shifting subsequent columns left.
    ///
    /// # Errors
    ///
    /// Returns an error if `col` is out of bounds or the matrix has only one
    /// column left.
    pub fn delete_column(&mut self, col: usize) -> Result<()> {
        let c = self.check_col_index(col)?;
        if self.cols == 1 {
            return Err(MatrizError::cannot_empty("column"));
        }
        let cols = self.cols;
        let mut idx = 0;
        self.data.retain(|_| {
            let keep = idx % cols != c;
            idx += 1;
            keep
        });
        self.cols -= 1;
        self.debug_check_invariants();
        Ok(())
    }

    /// Adds a scalar to each element, returning a new matrix.
    #[must_use]
    pub fn add_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x + scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Multiplies each element by a scalar, returning a new matrix.
    #[must_use]
    pub fn mul_scalar(&self, scalar: f64) -> Self {
        Self {
            data: self.data.iter().map(|x| x * scalar).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Adds another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn add(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Subtracts another matrix element-wise, returning a new matrix.
    ///
    /// # Errors
    ///
    /// Returns an error if the shapes differ.
    pub fn sub(&self, other: &Self) -> Result<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(MatrizError::dimension_mismatch(
                self.shape(),
                other.shape(),
            ));
        }
        let data: Vec<f64> = self
            .data
            .iter()
            .zip(other.data.iter())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Self {
            data,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Matrix-matrix multiplication, computing `self * other` in that order.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self.n_cols() == other.n_rows()`.
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        if self.cols != other.rows {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("inner dimension {}", self.cols),
                actual: format!("{} rows", other.rows),
            });
        }
        let mut result = vec![0.0; self.rows * other.cols];
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result[i * other.cols + j] = sum;
            }
        }
        Ok(Self {
            data: result,
            rows: self.rows,
            cols: other.cols,
        })
    }

    /// Matrix-vector multiplication.
    ///
    /// # Errors
    ///
    /// Returns an error unless `self.n_cols() == vec.len()`.
    pub fn matvec(&self, vec: &Vector<f64>) -> Result<Vector<f64>> {
        if self.cols != vec.len() {
            return Err(MatrizError::DimensionMismatch {
                expected: format!("vector of length {}", self.cols),
                actual: format!("length {}", vec.len()),
            });
        }
        let result: Vec<f64> = (0..self.rows).map(|i| self.row(i).dot(vec)).collect();
        Ok(Vector::from_vec(result))
    }

    /// Transposes the matrix, returning a new matrix.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut data = vec![0.0; self.rows * self.cols];
        for i in 0..self.rows {
            for j in 0..self.cols {
                data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Self {
            data,
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// The sub-matrix with the given 1-indexed row and column removed.
    ///
    /// # Errors
    ///
    /// Returns an error if the position is out of bounds, or if the matrix
    /// has a single row or column (the minor would be empty).
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        let r = self.check_row_index(row)?;
        let c = self.check_col_index(col)?;
        if self.rows == 1 {
            return Err(MatrizError::cannot_empty("row"));
        }
        if self.cols == 1 {
            return Err(MatrizError::cannot_empty("column"));
        }
        Ok(self.minor_unchecked(r, c))
    }

    /// Determinant via cofactor expansion along the first row.
    ///
    /// Cofactor expansion is O(n!): each level expands n minors of size
    /// n-1. This crate targets small matrices, and there is no decomposition
    /// fast path.
    ///
    /// # Errors
    ///
    /// Returns an error if the matrix is not square.
    pub fn determinant(&self) -> Result<f64> {
        if self.rows != self.cols {
            return Err(MatrizError::not_square(self.rows, self.cols));
        }
        Ok(self.det_cofactor())
    }

    // Assumes square; the public entry point checks.
    fn det_cofactor(&self) -> f64 {
        if self.rows == 1 {
            return self.get(0, 0);
        }
        let mut det = 0.0;
        for col in 0..self.cols {
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * self.get(0, col) * self.minor_unchecked(0, col).det_cofactor();
        }
        det
    }

    // 0-indexed; assumes in-bounds and at least 2x2.
    fn minor_unchecked(&self, row: usize, col: usize) -> Self {
        let mut data = Vec::with_capacity((self.rows - 1) * (self.cols - 1));
        for i in 0..self.rows {
            if i == row {
                continue;
            }
            for j in 0..self.cols {
                if j == col {
                    continue;
                }
                data.push(self.get(i, j));
            }
        }
        Self {
            data,
            rows: self.rows - 1,
            cols: self.cols - 1,
        }
    }

    fn check_row_index(&self, row: usize) -> Result<usize> {
        if row < 1 || row > self.rows {
            return Err(MatrizError::index_out_of_bounds("row", row, self.rows));
        }
        Ok(row - 1)
    }

    fn check_col_index(&self, col: usize) -> Result<usize> {
        if col < 1 || col > self.cols {
            return Err(MatrizError::index_out_of_bounds("column", col, self.cols));
        }
        Ok(col - 1)
    }

    fn debug_check_invariants(&self) {
        debug_assert!(
            self.rows >= 1 && self.cols >= 1,
            "matrix must stay non-empty"
        );
        debug_assert_eq!(
            self.data.len(),
            self.rows * self.cols,
            "storage must stay rectangular"
        );
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    for &value in values {
        if !value.is_finite() {
            return Err(MatrizError::non_finite(value));
        }
    }
    Ok(())
}

/// Renders the matrix as a grid: one line per row, elements space-separated
/// and right-justified to the width of the longest element in the whole
/// matrix. No trailing newline.
impl<T: Copy + fmt::Display> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = self
            .data
            .iter()
            .map(|value| value.to_string().len())
            .max()
            .unwrap_or(0);
        for (i, row) in self.data.chunks(self.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{value:>width$}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "matrix_tests.rs"]
mod tests;
