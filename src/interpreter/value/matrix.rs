use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult, util::num::usize_to_i64};

/// Pivot magnitude below which a matrix is treated as singular during
/// inversion. Part of the language contract.
pub const PIVOT_TOLERANCE: f64 = 1e-10;

/// A dense 2-D matrix of 64-bit floats, stored row-major.
///
/// Matrices are value types: copies are deep, and every operation produces a
/// fresh matrix. The `0 × 0` matrix is valid and is what the literal `[]`
/// evaluates to.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Creates a `rows × cols` matrix filled with `value`.
    #[must_use]
    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self { rows,
               cols,
               data: vec![value; rows * cols] }
    }

    /// Creates a `rows × cols` matrix of zeros.
    #[must_use]
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, 0.0)
    }

    /// Creates the `n × n` identity matrix.
    ///
    /// # Example
    /// ```
    /// use dakota::interpreter::value::Matrix;
    ///
    /// let eye = Matrix::identity(2);
    /// assert_eq!(eye.get(0, 0), 1.0);
    /// assert_eq!(eye.get(0, 1), 0.0);
    /// ```
    #[must_use]
    pub fn identity(n: usize) -> Self {
        let mut matrix = Self::zeros(n, n);
        for i in 0..n {
            matrix.set(i, i, 1.0);
        }
        matrix
    }

    /// Creates a matrix from row-major element data.
    ///
    /// Returns `None` when the element count does not equal `rows × cols`.
    #[must_use]
    pub fn from_data(rows: usize, cols: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * cols {
            return None;
        }
        Some(Self { rows, cols, data })
    }

    /// Creates a single-row matrix from a slice.
    #[must_use]
    pub fn from_row(values: &[f64]) -> Self {
        Self { rows: 1,
               cols: values.len(),
               data: values.to_vec(), }
    }

    /// Creates a single-column matrix, one value per row.
    #[must_use]
    pub fn column(values: Vec<f64>) -> Self {
        Self { rows: values.len(),
               cols: 1,
               data: values, }
    }

    /// Number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` for the `0 × 0` matrix.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Reads the element at `(row, col)`. Out-of-range reads yield `0.0`;
    /// callers validate indices beforehand.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data.get(row * self.cols + col).copied().unwrap_or(0.0)
    }

    /// Writes the element at `(row, col)`. Out-of-range writes are ignored.
    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        if let Some(slot) = self.data.get_mut(row * self.cols + col) {
            *slot = value;
        }
    }

    /// Extracts row `index` as a single-row matrix.
    ///
    /// # Errors
    /// Returns [`RuntimeError::IndexOutOfBounds`] when `index` does not name
    /// a row.
    pub fn row(&self, index: i64) -> EvalResult<Self> {
        let row = usize::try_from(index).ok()
                                        .filter(|&r| r < self.rows)
                                        .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                                                rows: self.rows })?;

        let start = row * self.cols;
        Ok(Self::from_row(&self.data[start..start + self.cols]))
    }

    /// Applies `f` to every element, producing a new matrix.
    #[must_use]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self { rows: self.rows,
               cols: self.cols,
               data: self.data.iter().map(|&x| f(x)).collect(), }
    }

    /// Combines two matrices elementwise with `f`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DimensionMismatch`] when the shapes differ.
    pub fn zip(&self, other: &Self, operation: &str, f: impl Fn(f64, f64) -> f64)
               -> EvalResult<Self> {
        if self.rows != other.rows || self.cols != other.cols {
            return Err(RuntimeError::DimensionMismatch { operation: operation.to_string() });
        }

        let data = self.data
                       .iter()
                       .zip(&other.data)
                       .map(|(&a, &b)| f(a, b))
                       .collect();
        Ok(Self { rows: self.rows,
                  cols: self.cols,
                  data })
    }

    /// Computes the matrix product `self × other`.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DimensionMismatch`] when the inner dimensions
    /// do not agree.
    ///
    /// # Example
    /// ```
    /// use dakota::interpreter::value::Matrix;
    ///
    /// let a = Matrix::from_data(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
    /// let b = Matrix::identity(2);
    ///
    /// assert_eq!(a.multiply(&b).unwrap(), a);
    /// ```
    pub fn multiply(&self, other: &Self) -> EvalResult<Self> {
        if self.cols != other.rows {
            return Err(RuntimeError::DimensionMismatch { operation:
                                                             "multiplication".to_string(), });
        }

        let mut result = Self::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut sum = 0.0;
                for k in 0..self.cols {
                    sum += self.get(i, k) * other.get(k, j);
                }
                result.set(i, j, sum);
            }
        }

        Ok(result)
    }

    /// Produces the transpose.
    #[must_use]
    pub fn transpose(&self) -> Self {
        let mut result = Self::zeros(self.cols, self.rows);
        for i in 0..self.rows {
            for j in 0..self.cols {
                result.set(j, i, self.get(i, j));
            }
        }
        result
    }

    /// Computes the determinant by recursive Laplace expansion along the
    /// first row.
    ///
    /// # Errors
    /// Returns [`RuntimeError::NonSquareMatrix`] for non-square input.
    pub fn determinant(&self) -> EvalResult<f64> {
        if self.rows != self.cols {
            return Err(RuntimeError::NonSquareMatrix { operation: "Determinant".to_string() });
        }

        Ok(self.determinant_unchecked())
    }

    fn determinant_unchecked(&self) -> f64 {
        let n = self.rows;
        match n {
            0 => 1.0,
            1 => self.get(0, 0),
            2 => self.get(0, 0) * self.get(1, 1) - self.get(0, 1) * self.get(1, 0),
            _ => {
                let mut det = 0.0;
                for j in 0..n {
                    let sign = if j % 2 == 0 { 1.0 } else { -1.0 };
                    det += sign * self.get(0, j) * self.minor(0, j).determinant_unchecked();
                }
                det
            },
        }
    }

    /// Builds the submatrix with `row` and `col` removed.
    fn minor(&self, row: usize, col: usize) -> Self {
        let n = self.rows;
        let mut data = Vec::with_capacity((n - 1) * (n - 1));

        for i in 0..n {
            if i == row {
                continue;
            }
            for j in 0..n {
                if j == col {
                    continue;
                }
                data.push(self.get(i, j));
            }
        }

        Self { rows: n - 1,
               cols: n - 1,
               data }
    }

    /// Computes the inverse by Gauss–Jordan elimination with partial
    /// pivoting.
    ///
    /// # Errors
    /// - [`RuntimeError::NonSquareMatrix`] for non-square input.
    /// - [`RuntimeError::SingularMatrix`] when a pivot's magnitude falls
    ///   below [`PIVOT_TOLERANCE`].
    pub fn inverse(&self) -> EvalResult<Self> {
        if self.rows != self.cols {
            return Err(RuntimeError::NonSquareMatrix { operation: "Inverse".to_string() });
        }

        let n = self.rows;
        let mut augmented = Self::zeros(n, 2 * n);
        for i in 0..n {
            for j in 0..n {
                augmented.set(i, j, self.get(i, j));
            }
            augmented.set(i, i + n, 1.0);
        }

        for i in 0..n {
            let mut pivot_row = i;
            for k in i + 1..n {
                if augmented.get(k, i).abs() > augmented.get(pivot_row, i).abs() {
                    pivot_row = k;
                }
            }

            if augmented.get(pivot_row, i).abs() < PIVOT_TOLERANCE {
                return Err(RuntimeError::SingularMatrix);
            }

            if pivot_row != i {
                for j in 0..2 * n {
                    let upper = augmented.get(i, j);
                    let lower = augmented.get(pivot_row, j);
                    augmented.set(i, j, lower);
                    augmented.set(pivot_row, j, upper);
                }
            }

            let pivot = augmented.get(i, i);
            for j in 0..2 * n {
                augmented.set(i, j, augmented.get(i, j) / pivot);
            }

            for k in 0..n {
                if k == i {
                    continue;
                }
                let factor = augmented.get(k, i);
                for j in 0..2 * n {
                    let value = augmented.get(k, j) - factor * augmented.get(i, j);
                    augmented.set(k, j, value);
                }
            }
        }

        let mut result = Self::zeros(n, n);
        for i in 0..n {
            for j in 0..n {
                result.set(i, j, augmented.get(i, j + n));
            }
        }

        Ok(result)
    }

    /// Number of rows as a language-level integer, for `len()`.
    #[must_use]
    pub fn len(&self) -> i64 {
        usize_to_i64(self.rows)
    }
}
