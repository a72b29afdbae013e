use std::{
    fmt,
    ops::{Index, IndexMut, Neg},
};

use itertools::{iproduct, Itertools};

use super::SlowVector;
use crate::{approx::ApproxEq, Error, Matrix, Number, One, Result, Zero};

/// A matrix whose dimensions are only known at runtime.
///
/// Elements are stored in column-major order, like [`Matrix`]. The *width* is the number of
/// columns, the *height* the number of rows. Elements are indexed by `(row, column)`.
///
/// # Examples
///
/// ```
/// # use lina::*;
/// let m = SlowMatrix::from_columns(vec![vec![2.0, 0.0], vec![0.0, 2.0]])?;
/// assert_eq!(m.determinant()?, 4.0);
/// assert_eq!(m.invert()?, SlowMatrix::from_columns(vec![vec![0.5, 0.0], vec![0.0, 0.5]])?);
///
/// let ragged = SlowMatrix::from_columns(vec![vec![1.0, 2.0], vec![3.0, 4.0, 5.0]]);
/// assert_eq!(ragged, Err(Error::PartialMatrix { column: 1, expected: 2, found: 3 }));
/// # Ok::<_, Error>(())
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SlowMatrix<T> {
    width: usize,
    height: usize,
    elems: Vec<T>,
}

impl<T> SlowMatrix<T> {
    /// Creates a matrix from a list of columns.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartialMatrix`] if the columns do not all have the same length.
    pub fn from_columns(columns: Vec<Vec<T>>) -> Result<Self> {
        let width = columns.len();
        let height = columns.first().map_or(0, Vec::len);
        if let Some((column, found)) = columns
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != height)
        {
            return Err(Error::PartialMatrix {
                column,
                expected: height,
                found,
            });
        }

        Ok(Self {
            width,
            height,
            elems: columns.into_iter().flatten().collect(),
        })
    }

    /// Creates a matrix from a list of rows.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PartialMatrix`] if the rows do not all have the same length. The error
    /// refers to the transposed input, ie. `column` is the index of the offending row.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self>
    where
        T: Clone,
    {
        Ok(Self::from_columns(rows)?.transpose())
    }

    /// Creates a `width`x`height` matrix by invoking `f` with the `(row, column)` position of
    /// every element.
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let elems = iproduct!(0..width, 0..height)
            .map(|(col, row)| f(row, col))
            .collect();
        Self {
            width,
            height,
            elems,
        }
    }

    /// Returns the number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        if row < self.height && col < self.width {
            self.elems.get(col * self.height + row)
        } else {
            None
        }
    }

    /// Returns the elements of column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn column(&self, index: usize) -> &[T] {
        assert!(index < self.width, "column index {index} out of bounds");
        &self.elems[index * self.height..][..self.height]
    }

    /// Returns an iterator over the elements of row `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn row(&self, index: usize) -> impl Iterator<Item = &T> + '_ {
        assert!(index < self.height, "row index {index} out of bounds");
        self.elems.iter().skip(index).step_by(self.height.max(1))
    }

    /// Returns the elements in column-major order.
    pub fn as_slice(&self) -> &[T] {
        &self.elems
    }

    pub fn transpose(&self) -> Self
    where
        T: Clone,
    {
        Self::from_fn(self.height, self.width, |row, col| self[(col, row)].clone())
    }

    fn dims(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    fn check_square(&self) -> Result<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(Error::NonSquare {
                width: self.width,
                height: self.height,
            })
        }
    }

    fn check_same_size(&self, other: &Self) -> Result<()> {
        if self.dims() == other.dims() {
            Ok(())
        } else {
            Err(Error::MatrixSize {
                left: self.dims(),
                right: other.dims(),
            })
        }
    }

    /// Returns a copy of `self` with row `row` and column `col` removed.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of bounds.
    pub fn submatrix(&self, row: usize, col: usize) -> Self
    where
        T: Clone,
    {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) out of bounds for a {}x{} matrix",
            self.width,
            self.height,
        );
        Self::from_fn(self.width - 1, self.height - 1, |r, c| {
            let r = if r < row { r } else { r + 1 };
            let c = if c < col { c } else { c + 1 };
            self[(r, c)].clone()
        })
    }
}

impl<T: Zero + One + Clone> SlowMatrix<T> {
    /// Creates a `width`x`height` matrix with all elements set to zero.
    pub fn zeros(width: usize, height: usize) -> Self {
        Self::from_fn(width, height, |_, _| T::ZERO)
    }

    /// Creates the `n`x`n` identity matrix.
    pub fn identity(n: usize) -> Self {
        Self::from_fn(n, n, |row, col| if row == col { T::ONE } else { T::ZERO })
    }
}

impl<T: Number> SlowMatrix<T> {
    /// Adds `other` to `self` element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixSize`] if the matrices do not have the same dimensions.
    pub fn try_add(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a + b))
    }

    /// Subtracts `other` from `self` element-wise.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixSize`] if the matrices do not have the same dimensions.
    pub fn try_sub(&self, other: &Self) -> Result<Self> {
        self.check_same_size(other)?;
        Ok(self.zip_with(other, |a, b| a - b))
    }

    fn zip_with(&self, other: &Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self {
            width: self.width,
            height: self.height,
            elems: self
                .elems
                .iter()
                .zip_eq(&other.elems)
                .map(|(&a, &b)| f(a, b))
                .collect(),
        }
    }

    /// Computes the matrix product `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MatrixSize`] if the width of `self` differs from the height of `other`.
    pub fn try_mul(&self, other: &Self) -> Result<Self> {
        if self.width != other.height {
            return Err(Error::MatrixSize {
                left: self.dims(),
                right: other.dims(),
            });
        }

        Ok(Self::from_fn(other.width, self.height, |row, col| {
            (0..self.width).fold(T::ZERO, |acc, i| acc + self[(row, i)] * other[(i, col)])
        }))
    }

    /// Multiplies `self` with the column vector `v`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::VectorSize`] if the length of `v` differs from the width of `self`.
    pub fn try_mul_vector(&self, v: &SlowVector<T>) -> Result<SlowVector<T>> {
        if v.len() != self.width {
            return Err(Error::VectorSize {
                expected: self.width,
                found: v.len(),
            });
        }

        Ok(SlowVector::new(
            (0..self.height)
                .map(|row| {
                    self.row(row)
                        .zip_eq(v.iter())
                        .fold(T::ZERO, |acc, (&a, &b)| acc + a * b)
                })
                .collect(),
        ))
    }

    /// Multiplies every element by `factor`.
    pub fn scale(&self, factor: T) -> Self {
        Self {
            width: self.width,
            height: self.height,
            elems: self.elems.iter().map(|&a| a * factor).collect(),
        }
    }

    /// Computes the determinant by cofactor expansion along the first row.
    ///
    /// This takes time proportional to `n!` for an `n`x`n` matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonSquare`] if `self` is not a square matrix.
    pub fn determinant(&self) -> Result<T> {
        self.check_square()?;
        Ok(self.determinant_unchecked())
    }

    fn determinant_unchecked(&self) -> T {
        match self.width {
            0 => T::ONE,
            1 => self.elems[0],
            n => (0..n).fold(T::ZERO, |acc, col| {
                acc + self[(0, col)] * self.cofactor_unchecked(0, col)
            }),
        }
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> T {
        let minor = self.submatrix(row, col).determinant_unchecked();
        if (row + col) % 2 == 0 {
            minor
        } else {
            -minor
        }
    }

    /// Computes the determinant of the submatrix obtained by removing `row` and `col`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonSquare`] if `self` is not a square matrix.
    pub fn minor(&self, row: usize, col: usize) -> Result<T> {
        self.check_square()?;
        Ok(self.submatrix(row, col).determinant_unchecked())
    }

    /// Computes the signed minor at `(row, col)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonSquare`] if `self` is not a square matrix.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<T> {
        self.check_square()?;
        Ok(self.cofactor_unchecked(row, col))
    }

    /// Computes the adjugate, the transpose of the cofactor matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonSquare`] if `self` is not a square matrix.
    pub fn adjoint(&self) -> Result<Self> {
        self.check_square()?;
        if self.width == 1 {
            return Ok(Self::identity(1));
        }
        Ok(Self::from_fn(self.width, self.height, |row, col| {
            self.cofactor_unchecked(col, row)
        }))
    }

    /// Inverts `self` using Gauss-Jordan elimination.
    ///
    /// Rows are only swapped when a pivot is exactly zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NonSquare`] if `self` is not a square matrix, and
    /// [`Error::SingularMatrix`] if no non-zero pivot can be found for some column.
    pub fn invert(&self) -> Result<Self> {
        self.check_square()?;
        let n = self.width;

        let mut rows: Vec<Vec<T>> = (0..n).map(|r| self.row(r).copied().collect()).collect();
        let mut inv: Vec<Vec<T>> = (0..n)
            .map(|r| (0..n).map(|c| if r == c { T::ONE } else { T::ZERO }).collect())
            .collect();

        for col in 0..n {
            if rows[col][col] == T::ZERO {
                let Some(swap) = (col + 1..n).find(|&r| rows[r][col] != T::ZERO) else {
                    log::debug!("no pivot in column {col} of {n}x{n} matrix, matrix is singular");
                    return Err(Error::SingularMatrix);
                };
                log::trace!("pivot in column {col} is zero, swapping rows {col} and {swap}");
                rows.swap(col, swap);
                inv.swap(col, swap);
            }

            let pivot = rows[col][col];
            for c in 0..n {
                rows[col][c] = rows[col][c] / pivot;
                inv[col][c] = inv[col][c] / pivot;
            }

            for r in (0..n).filter(|&r| r != col) {
                let factor = rows[r][col];
                if factor == T::ZERO {
                    continue;
                }
                for c in 0..n {
                    rows[r][c] = rows[r][c] - factor * rows[col][c];
                    inv[r][c] = inv[r][c] - factor * inv[col][c];
                }
            }
        }

        Ok(Self::from_fn(n, n, |row, col| inv[row][col]))
    }
}

impl<T: Number> Neg for SlowMatrix<T> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            elems: self.elems.into_iter().map(|a| -a).collect(),
        }
    }
}

impl<T> Index<(usize, usize)> for SlowMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        match self.get(row, col) {
            Some(elem) => elem,
            None => panic!(
                "({row}, {col}) out of bounds for a {}x{} matrix",
                self.width, self.height
            ),
        }
    }
}

impl<T> IndexMut<(usize, usize)> for SlowMatrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            row < self.height && col < self.width,
            "({row}, {col}) out of bounds for a {}x{} matrix",
            self.width,
            self.height,
        );
        &mut self.elems[col * self.height + row]
    }
}

impl<T: Copy, const R: usize, const C: usize> From<Matrix<T, R, C>> for SlowMatrix<T> {
    fn from(m: Matrix<T, R, C>) -> Self {
        Self {
            width: C,
            height: R,
            elems: m.into_columns().into_iter().flatten().collect(),
        }
    }
}

/// Matrices of different dimensions never compare equal.
impl<T: ApproxEq> ApproxEq for SlowMatrix<T> {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.dims() == other.dims() && self.elems.abs_diff_eq(&other.elems, tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.dims() == other.dims() && self.elems.rel_diff_eq(&other.elems, tolerance)
    }

    fn scaled_diff_eq(&self, other: &Self, tolerance: Self::Tolerance) -> bool {
        self.dims() == other.dims() && self.elems.scaled_diff_eq(&other.elems, tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, tolerance: u32) -> bool {
        self.dims() == other.dims() && self.elems.ulps_diff_eq(&other.elems, tolerance)
    }
}

impl<T: fmt::Debug> fmt::Debug for SlowMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for row in 0..self.height {
            if row != 0 {
                f.write_str(", ")?;
            }
            f.debug_list().entries(self.row(row)).finish()?;
        }
        f.write_str("]")
    }
}

impl<T: fmt::Display> fmt::Display for SlowMatrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            if row != 0 {
                f.write_str("\n")?;
            }
            write!(f, "[{}]", self.row(row).format(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, test::init_logger, Mat3f, Mat4f, SquareMatrix};

    use super::*;

    #[rustfmt::skip]
    fn sample() -> SlowMatrix<f64> {
        SlowMatrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![0.0, 1.0, 4.0],
            vec![5.0, 6.0, 0.0],
        ]).unwrap()
    }

    #[test]
    fn construction() {
        let m = SlowMatrix::from_columns(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.width(), 2);
        assert_eq!(m.height(), 3);
        assert!(!m.is_square());
        assert_eq!(m[(0, 1)], 4);
        assert_eq!(m[(2, 0)], 3);
        assert_eq!(m.get(3, 0), None);
        assert_eq!(m.column(1), &[4, 5, 6]);
        assert_eq!(m.row(1).copied().collect::<Vec<_>>(), [2, 5]);
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);

        let r = SlowMatrix::from_rows(vec![vec![1, 4], vec![2, 5], vec![3, 6]]).unwrap();
        assert_eq!(r, m);
        assert_eq!(m.transpose().transpose(), m);
        assert_eq!(m.transpose().width(), 3);
    }

    #[test]
    #[should_panic(expected = "row index 2 out of bounds")]
    fn row_out_of_bounds() {
        let m = SlowMatrix::from_columns(vec![vec![1, 2], vec![3, 4]]).unwrap();
        m.row(2).for_each(drop);
    }

    #[test]
    fn ragged_columns() {
        assert_eq!(
            SlowMatrix::from_columns(vec![vec![1, 2], vec![3, 4, 5]]),
            Err(Error::PartialMatrix {
                column: 1,
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            SlowMatrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]),
            Err(Error::PartialMatrix {
                column: 2,
                expected: 3,
                found: 1
            })
        );
        let empty = SlowMatrix::<f32>::from_columns(Vec::new()).unwrap();
        assert_eq!((empty.width(), empty.height()), (0, 0));
    }

    #[test]
    fn arithmetic() -> Result<()> {
        let a = SlowMatrix::from_columns(vec![vec![1, 2], vec![3, 4]])?;
        let b = SlowMatrix::from_columns(vec![vec![5, 6], vec![7, 8]])?;
        assert_eq!(a.try_add(&b)?.as_slice(), &[6, 8, 10, 12]);
        assert_eq!(a.try_sub(&b)?.as_slice(), &[-4, -4, -4, -4]);
        assert_eq!(a.scale(3).as_slice(), &[3, 6, 9, 12]);
        assert_eq!((-a.clone()).as_slice(), &[-1, -2, -3, -4]);

        // [1 3] [5 7]   [23 31]
        // [2 4] [6 8] = [34 46]
        assert_eq!(a.try_mul(&b)?.as_slice(), &[23, 34, 31, 46]);

        let v = SlowVector::from(vec![1, 1]);
        assert_eq!(a.try_mul_vector(&v)?.as_slice(), &[4, 6]);
        Ok(())
    }

    #[test]
    fn size_mismatch() -> Result<()> {
        let a = SlowMatrix::<f32>::zeros(2, 3);
        let b = SlowMatrix::<f32>::zeros(3, 3);
        let err = Error::MatrixSize {
            left: (2, 3),
            right: (3, 3),
        };
        assert_eq!(a.try_add(&b), Err(err.clone()));
        assert_eq!(a.try_sub(&b), Err(err));
        assert_eq!(
            a.try_mul(&b),
            Err(Error::MatrixSize {
                left: (2, 3),
                right: (3, 3)
            })
        );
        assert_eq!(b.try_mul(&a)?.width(), 2);
        assert_eq!(
            a.try_mul_vector(&SlowVector::zeros(3)),
            Err(Error::VectorSize {
                expected: 2,
                found: 3
            })
        );
        assert_eq!(
            a.determinant(),
            Err(Error::NonSquare {
                width: 2,
                height: 3
            })
        );
        assert!(a.invert().is_err());
        assert!(a.adjoint().is_err());
        Ok(())
    }

    #[test]
    fn determinant() -> Result<()> {
        assert_eq!(SlowMatrix::<f64>::identity(2).determinant()?, 1.0);
        assert_eq!(SlowMatrix::from_columns(vec![vec![7]])?.determinant()?, 7);
        assert_eq!(sample().determinant()?, 1.0);

        #[rustfmt::skip]
        let m = Mat4f::from_rows([
            [ 1.0, 0.0,  2.0, -1.0],
            [ 3.0, 0.0,  0.0,  5.0],
            [ 2.0, 1.0,  4.0, -3.0],
            [ 1.0, 0.0,  5.0,  0.0],
        ]);
        assert_eq!(SlowMatrix::from(m).determinant()?, m.determinant());
        Ok(())
    }

    #[test]
    fn minor_cofactor_adjoint() -> Result<()> {
        let m = sample();
        assert_eq!(m.submatrix(0, 0).as_slice(), &[1.0, 6.0, 4.0, 0.0]);
        assert_eq!(m.minor(0, 0)?, -24.0);
        assert_eq!(m.minor(0, 1)?, -20.0);
        assert_eq!(m.cofactor(0, 1)?, 20.0);

        let adj = m.adjoint()?;
        let product = m.try_mul(&adj)?;
        assert_eq!(product, SlowMatrix::identity(3).scale(m.determinant()?));

        let fixed = Mat3f::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(SlowMatrix::from(fixed.adjoint()), SlowMatrix::from(fixed).adjoint()?);
        Ok(())
    }

    #[test]
    fn invert() -> Result<()> {
        init_logger();

        let m = sample();
        let inv = m.invert()?;
        assert_approx_eq!(m.try_mul(&inv)?, SlowMatrix::identity(3)).abs(1e-12);
        assert_approx_eq!(inv.invert()?, m).abs(1e-12);

        let two = SlowMatrix::from_columns(vec![vec![2.0, 0.0], vec![0.0, 2.0]])?;
        assert_eq!(
            two.invert()?,
            SlowMatrix::from_columns(vec![vec![0.5, 0.0], vec![0.0, 0.5]])?
        );
        Ok(())
    }

    #[test]
    fn invert_with_row_swap() -> Result<()> {
        init_logger();

        // Zero pivot in the first column.
        #[rustfmt::skip]
        let m = SlowMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![4.0, -3.0, 8.0],
        ])?;
        let inv = m.invert()?;
        assert_approx_eq!(m.try_mul(&inv)?, SlowMatrix::identity(3)).abs(1e-12);
        assert_approx_eq!(inv.try_mul(&m)?, SlowMatrix::identity(3)).abs(1e-12);
        Ok(())
    }

    #[test]
    fn invert_singular() {
        init_logger();

        let zero = SlowMatrix::<f32>::zeros(2, 2);
        assert_eq!(zero.invert(), Err(Error::SingularMatrix));

        #[rustfmt::skip]
        let m = SlowMatrix::from_rows(vec![
            vec![1.0, 2.0],
            vec![2.0, 4.0],
        ]).unwrap();
        assert_eq!(m.invert(), Err(Error::SingularMatrix));
    }

    #[test]
    fn from_fixed() {
        let m = Mat3f::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let slow = SlowMatrix::from(m);
        assert_eq!((slow.width(), slow.height()), (3, 3));
        assert_eq!(slow[(1, 2)], 6.0);
        assert_eq!(slow.as_slice(), m.as_slice());
    }

    #[test]
    fn formatting() {
        let m = SlowMatrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
        assert_eq!(m.to_string(), "[1, 2]\n[3, 4]");
        assert_eq!(format!("{m:?}"), "[[1, 2], [3, 4]]");
    }
}
