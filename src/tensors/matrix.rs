use std::{
    fmt::Display,
    ops::{Index, Neg},
    slice::Chunks,
};

use smallvec::SmallVec;
use tracing::{debug, instrument};

use crate::{
    error::{Error, Result},
    printer::{MatrixPrinter, PrintOptions},
};

/// Number of entries that are stored inline, enough for a 4x4 matrix.
const INLINED_ENTRIES: usize = 16;

/// The classification of a matrix by its shape and entries.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MatrixKind {
    /// A single row with more than one column.
    Row,
    /// A single column with more than one row.
    Column,
    /// All entries are zero.
    Zero,
    /// A diagonal matrix with ones on the diagonal.
    Unit,
    /// A square matrix with a non-zero diagonal and zeroes elsewhere.
    Diagonal,
    Square,
    Rectangular,
}

impl MatrixKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatrixKind::Row => "row",
            MatrixKind::Column => "column",
            MatrixKind::Zero => "zero",
            MatrixKind::Unit => "unit",
            MatrixKind::Diagonal => "diagonal",
            MatrixKind::Square => "square",
            MatrixKind::Rectangular => "rectangular",
        }
    }
}

impl Display for MatrixKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A dense matrix with finite real entries, stored row by row.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Matrix {
    pub(crate) data: SmallVec<[f64; INLINED_ENTRIES]>,
    pub(crate) nrows: usize,
    pub(crate) ncols: usize,
}

impl Matrix {
    /// Create a new matrix from a list of rows.
    ///
    /// The list must be non-empty, all rows must have the same non-zero length,
    /// and every entry must be a finite number.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Matrix> {
        let ncols = match rows.first() {
            Some(r) if !r.is_empty() => r.len(),
            _ => {
                return Err(Error::invalid_argument(
                    "rows",
                    "value must be a non-empty array",
                ))
            }
        };

        if rows.iter().any(|r| r.len() != ncols) {
            return Err(Error::invalid_argument(
                "rows",
                "all rows must have the same length",
            ));
        }

        if rows.iter().flatten().any(|x| !x.is_finite()) {
            return Err(Error::invalid_argument(
                "rows",
                "all elements must be numbers",
            ));
        }

        Ok(Matrix {
            nrows: rows.len(),
            ncols,
            data: rows.into_iter().flatten().collect(),
        })
    }

    /// Get the number of entries of a matrix of shape `(nrows, ncols)`.
    fn linear_len(nrows: usize, ncols: usize) -> Result<usize> {
        if nrows == 0 || ncols == 0 {
            return Err(Error::invalid_argument(
                "data",
                "value must be a non-empty array",
            ));
        }

        nrows.checked_mul(ncols).ok_or_else(|| {
            Error::invalid_argument(
                "data",
                format!("matrix dimensions ({},{}) are too large", nrows, ncols),
            )
        })
    }

    /// Convert a linear, row-major representation of a matrix to a `Matrix`.
    pub fn from_linear(data: Vec<f64>, nrows: usize, ncols: usize) -> Result<Matrix> {
        if data.len() != Self::linear_len(nrows, ncols)? {
            return Err(Error::invalid_argument(
                "data",
                format!(
                    "data length does not match matrix dimensions: {} vs ({},{})",
                    data.len(),
                    nrows,
                    ncols
                ),
            ));
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::invalid_argument(
                "data",
                "all elements must be numbers",
            ));
        }

        Ok(Matrix {
            data: SmallVec::from_vec(data),
            nrows,
            ncols,
        })
    }

    /// Create a new zeroed matrix with `nrows` rows and `ncols` columns.
    pub fn zeros(nrows: usize, ncols: usize) -> Result<Matrix> {
        let len = Self::linear_len(nrows, ncols)?;
        Matrix::from_linear(vec![0.; len], nrows, ncols)
    }

    /// Create a new square matrix with `n` rows and ones on the main diagonal and zeroes elsewhere.
    pub fn identity(n: usize) -> Result<Matrix> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.;
        }
        Ok(m)
    }

    /// Create a matrix of shape `(nrows, ncols)` whose entries are `f(i, j)`.
    /// The shape must be non-empty and `f` must produce finite numbers.
    fn from_fn(nrows: usize, ncols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Matrix {
        let mut data = SmallVec::with_capacity(nrows * ncols);
        for i in 0..nrows {
            for j in 0..ncols {
                data.push(f(i, j));
            }
        }

        Matrix { data, nrows, ncols }
    }

    /// Return the number of rows.
    pub fn nrows(&self) -> usize {
        self.nrows
    }

    /// Return the number of columns.
    pub fn ncols(&self) -> usize {
        self.ncols
    }

    /// Return the number of rows and columns.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.nrows, self.ncols)
    }

    /// Return the row-major entries of the matrix.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Return an iterator over the rows of the matrix.
    pub fn row_iter(&self) -> Chunks<'_, f64> {
        self.data.chunks(self.ncols)
    }

    /// Copy the matrix into a list of rows.
    pub fn to_nested_vec(&self) -> Vec<Vec<f64>> {
        self.row_iter().map(|r| r.to_vec()).collect()
    }

    pub fn is_square(&self) -> bool {
        self.nrows == self.ncols
    }

    /// Return true iff every entry in the matrix is zero.
    pub fn is_zero(&self) -> bool {
        self.data.iter().all(|e| *e == 0.)
    }

    /// Get the entries on the main diagonal, or an empty list if the matrix is not square.
    pub fn leading_diagonal(&self) -> Vec<f64> {
        if !self.is_square() {
            return vec![];
        }

        (0..self.nrows).map(|i| self[(i, i)]).collect()
    }

    /// Return true iff the matrix is square, has no zeroes on the main diagonal
    /// and only zeroes elsewhere.
    ///
    /// Note that a zero on the main diagonal makes the matrix non-diagonal.
    pub fn is_diagonal(&self) -> bool {
        if !self.is_square() || self.leading_diagonal().contains(&0.) {
            return false;
        }

        self.data
            .iter()
            .enumerate()
            .all(|(i, e)| i % self.ncols == i / self.ncols || *e == 0.)
    }

    /// Return true iff the matrix is diagonal with ones on the main diagonal.
    pub fn is_unit(&self) -> bool {
        self.is_diagonal() && self.leading_diagonal().iter().all(|e| *e == 1.)
    }

    /// Classify the matrix. The first matching kind is returned, in the order
    /// row, column, zero, unit, diagonal, square, rectangular.
    pub fn kind(&self) -> MatrixKind {
        if self.nrows == 1 && self.ncols > 1 {
            MatrixKind::Row
        } else if self.ncols == 1 && self.nrows > 1 {
            MatrixKind::Column
        } else if self.is_zero() {
            MatrixKind::Zero
        } else if self.is_unit() {
            MatrixKind::Unit
        } else if self.is_diagonal() {
            MatrixKind::Diagonal
        } else if self.is_square() {
            MatrixKind::Square
        } else {
            MatrixKind::Rectangular
        }
    }

    /// Get a copy of the `index`th row.
    pub fn row(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.nrows {
            return Err(Error::index_out_of_range(index, self.nrows));
        }

        Ok(self[index].to_vec())
    }

    /// Get a copy of the `index`th column.
    pub fn column(&self, index: usize) -> Result<Vec<f64>> {
        if index >= self.ncols {
            return Err(Error::index_out_of_range(index, self.ncols));
        }

        Ok(self.row_iter().map(|r| r[index]).collect())
    }

    /// Get the sum of the entries on the main diagonal.
    pub fn trace(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::not_square("trace"));
        }

        Ok(self.leading_diagonal().iter().sum())
    }

    /// Check if `other` has the same number of rows and columns.
    pub fn is_conformal_to(&self, other: &Matrix) -> bool {
        self.nrows == other.nrows && self.ncols == other.ncols
    }

    /// Check if `other` has the same shape and the same entries.
    pub fn is_equal_to(&self, other: &Matrix) -> bool {
        self.is_conformal_to(other) && self.data == other.data
    }

    fn check_conformal(&self, other: &Matrix, op: &'static str) -> Result<()> {
        if !self.is_conformal_to(other) {
            return Err(Error::dimension_mismatch(
                op,
                &[self.nrows, self.ncols],
                &[other.nrows, other.ncols],
            ));
        }
        Ok(())
    }

    /// Add two matrices.
    pub fn plus(&self, other: &Matrix) -> Result<Matrix> {
        self.check_conformal(other, "plus")?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a + b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Subtract `other` from `self`.
    pub fn minus(&self, other: &Matrix) -> Result<Matrix> {
        self.check_conformal(other, "minus")?;

        Ok(Matrix {
            data: self
                .data
                .iter()
                .zip(&other.data)
                .map(|(a, b)| a - b)
                .collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiply the scalar `k` to each entry of the matrix.
    pub fn scale(&self, k: f64) -> Result<Matrix> {
        if !k.is_finite() {
            return Err(Error::not_a_number("k"));
        }

        Ok(Matrix {
            data: self.data.iter().map(|e| e * k).collect(),
            nrows: self.nrows,
            ncols: self.ncols,
        })
    }

    /// Multiply `self` by `other` from the right.
    ///
    /// If `other` is classified as a unit matrix, a copy of `self` is returned
    /// without checking the shapes.
    pub fn multiply(&self, other: &Matrix) -> Result<Matrix> {
        if other.kind() == MatrixKind::Unit {
            debug!("Right operand is a unit matrix, skipping the product");
            return Ok(self.clone());
        }

        if self.ncols != other.nrows {
            return Err(Error::dimension_mismatch(
                "multiply",
                &[self.nrows, self.ncols],
                &[other.nrows, other.ncols],
            ));
        }

        let mut m = Matrix::from_fn(self.nrows, other.ncols, |_, _| 0.);
        for i in 0..self.nrows {
            for j in 0..other.ncols {
                let sum = &mut m.data[i * other.ncols + j];
                for k in 0..self.ncols {
                    *sum += self[(i, k)] * other[(k, j)];
                }
            }
        }

        Ok(m)
    }

    /// Transpose the matrix.
    pub fn transpose(&self) -> Matrix {
        Matrix::from_fn(self.ncols, self.nrows, |i, j| self[(j, i)])
    }

    fn check_index(&self, row: usize, col: usize) -> Result<()> {
        if row >= self.nrows {
            return Err(Error::index_out_of_range(row, self.nrows));
        }
        if col >= self.ncols {
            return Err(Error::index_out_of_range(col, self.ncols));
        }
        Ok(())
    }

    /// Get the matrix without row `row` and column `col`.
    /// The minor of a 1x1 matrix is the matrix itself.
    pub fn minor(&self, row: usize, col: usize) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::not_square("minor"));
        }
        self.check_index(row, col)?;

        Ok(self.minor_unchecked(row, col))
    }

    fn minor_unchecked(&self, row: usize, col: usize) -> Matrix {
        if self.nrows == 1 {
            return self.clone();
        }

        let n = self.nrows - 1;
        Matrix::from_fn(n, n, |i, j| {
            let i = if i < row { i } else { i + 1 };
            let j = if j < col { j } else { j + 1 };
            self[(i, j)]
        })
    }

    /// Get the signed determinant of the minor at `(row, col)`.
    pub fn cofactor(&self, row: usize, col: usize) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::not_square("cofactor"));
        }
        self.check_index(row, col)?;

        Ok(self.cofactor_unchecked(row, col))
    }

    fn cofactor_unchecked(&self, row: usize, col: usize) -> f64 {
        let sign = if (row + col) % 2 == 0 { 1. } else { -1. };
        sign * self.minor_unchecked(row, col).det_unchecked()
    }

    /// Compute the determinant of the matrix using cofactor expansion along the first row.
    ///
    /// The cost grows factorially with the size of the matrix.
    #[instrument(level = "trace", skip_all, fields(n = self.nrows))]
    pub fn det(&self) -> Result<f64> {
        if !self.is_square() {
            return Err(Error::not_square("det"));
        }

        Ok(self.det_unchecked())
    }

    fn det_unchecked(&self) -> f64 {
        let d = &self.data;
        match self.nrows {
            1 => d[0],
            2 => d[0] * d[3] - d[1] * d[2],
            n => (0..n).map(|i| d[i] * self.cofactor_unchecked(0, i)).sum(),
        }
    }

    /// Get the matrix of transposed cofactors, scaled by `1/det` when a determinant is given.
    fn adjugate(&self, det: Option<f64>) -> Matrix {
        Matrix::from_fn(self.nrows, self.ncols, |i, j| {
            let c = self.cofactor_unchecked(j, i);
            match det {
                Some(d) => c / d,
                None => c,
            }
        })
    }

    /// Compute the inverse of a square matrix, if it exists.
    /// Otherwise, this function returns an invalid argument error.
    ///
    /// The matrix is considered singular only when its determinant is exactly zero.
    #[instrument(level = "trace", skip_all, fields(n = self.nrows))]
    pub fn inv(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::not_square("inv"));
        }

        let det = self.det_unchecked();
        if det == 0. {
            debug!("Cannot invert a singular {}x{} matrix", self.nrows, self.ncols);
            return Err(Error::invalid_argument("self", "matrix is singular"));
        }

        if self.nrows == 1 {
            return Ok(Matrix::from_fn(1, 1, |_, _| 1. / self.data[0]));
        }

        Ok(self.adjugate(Some(det)))
    }

    /// Compute the adjoint (adjugate) of the matrix, the transpose of its cofactor matrix.
    /// The adjoint of a 1x1 matrix is `[[1]]`.
    #[instrument(level = "trace", skip_all, fields(n = self.nrows))]
    pub fn adjoint(&self) -> Result<Matrix> {
        if !self.is_square() {
            return Err(Error::not_square("adjoint"));
        }

        if self.nrows == 1 {
            return Ok(Matrix::from_fn(1, 1, |_, _| 1.));
        }

        Ok(self.adjugate(None))
    }
}

impl TryFrom<Vec<Vec<f64>>> for Matrix {
    type Error = Error;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Matrix::new(rows)
    }
}

impl From<Matrix> for Vec<Vec<f64>> {
    fn from(m: Matrix) -> Self {
        m.to_nested_vec()
    }
}

impl Index<usize> for Matrix {
    type Output = [f64];

    /// Get the `index`th row of the matrix.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index * self.ncols..(index + 1) * self.ncols]
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = f64;

    /// Get the `i`th row and `j`th column of the matrix, where `index=(i,j)`.
    #[inline]
    fn index(&self, index: (usize, usize)) -> &Self::Output {
        assert!(
            index.1 < self.ncols,
            "column index {} out of range for matrix with {} columns",
            index.1,
            self.ncols
        );
        &self.data[index.0 * self.ncols + index.1]
    }
}

impl Neg for Matrix {
    type Output = Matrix;

    /// Negate each entry of the matrix.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = -*e;
        }

        self
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        MatrixPrinter::new_with_options(self, PrintOptions::from_fmt(f)).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::{
        error::Error,
        tensors::matrix::{Matrix, MatrixKind},
    };

    fn m(rows: &[&[f64]]) -> Matrix {
        Matrix::new(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
    }

    fn reason(r: Result<Matrix, Error>) -> String {
        match r {
            Err(Error::InvalidArgument { reason, .. }) => reason,
            r => panic!("Expected an invalid argument error, got {:?}", r),
        }
    }

    #[test]
    fn construction() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        assert_eq!(a.to_nested_vec(), vec![vec![1., 2.], vec![3., 4.]]);
        assert_eq!(a.dimensions(), (2, 2));
        assert_eq!(a[(1, 0)], 3.);
        assert_eq!(&a[1], &[3., 4.]);

        assert_eq!(reason(Matrix::new(vec![])), "value must be a non-empty array");
        assert_eq!(
            reason(Matrix::new(vec![vec![]])),
            "value must be a non-empty array"
        );
        assert_eq!(
            reason(Matrix::new(vec![vec![1., 2.], vec![3.]])),
            "all rows must have the same length"
        );
        assert_eq!(
            reason(Matrix::new(vec![vec![1., 2.], vec![3., f64::NAN]])),
            "all elements must be numbers"
        );

        let b = Matrix::from_linear(vec![1., 2., 3., 4., 5., 6.], 2, 3).unwrap();
        assert_eq!(b.to_nested_vec(), vec![vec![1., 2., 3.], vec![4., 5., 6.]]);
        assert!(Matrix::from_linear(vec![1., 2., 3.], 2, 2).is_err());
        assert!(Matrix::zeros(0, 3).is_err());
        assert!(reason(Matrix::from_linear(vec![1.], usize::MAX, 2)).contains("too large"));
        assert!(reason(Matrix::zeros(usize::MAX, 2)).contains("too large"));
        assert_eq!(Matrix::identity(2).unwrap(), m(&[&[1., 0.], &[0., 1.]]));
    }

    #[test]
    #[should_panic(expected = "column index 2 out of range")]
    fn index_past_last_column() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        let _ = a[(0, 2)];
    }

    #[test]
    fn structure() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        assert!(a.is_square());
        assert!(!m(&[&[1., 2., 3.], &[4., 5., 6.]]).is_square());

        assert!(m(&[&[0., 0.], &[0., 0.]]).is_zero());
        assert!(!m(&[&[1., 0.], &[0., 0.]]).is_zero());

        assert_eq!(a.leading_diagonal(), vec![1., 4.]);
        assert!(m(&[&[1., 2., 3.]]).leading_diagonal().is_empty());

        assert_eq!(a.trace().unwrap(), 5.);
        assert!(matches!(
            m(&[&[1., 2.]]).trace(),
            Err(Error::InvalidArgument { arg: "trace", .. })
        ));
    }

    #[test]
    fn diagonal() {
        assert!(m(&[&[2., 0.], &[0., 3.]]).is_diagonal());
        assert!(!m(&[&[2., 1.], &[0., 3.]]).is_diagonal());
        // a zero on the diagonal disqualifies the matrix
        assert!(!m(&[&[2., 0.], &[0., 0.]]).is_diagonal());
        assert!(!m(&[&[1., 0., 0.], &[0., 1., 0.]]).is_diagonal());

        assert!(Matrix::identity(3).unwrap().is_unit());
        assert!(!m(&[&[1., 0.], &[0., 2.]]).is_unit());
        assert!(!m(&[&[1., 1.], &[0., 1.]]).is_unit());
    }

    #[test]
    fn kind() {
        let cases: [(Matrix, MatrixKind); 9] = [
            (m(&[&[1., 2., 3.]]), MatrixKind::Row),
            (m(&[&[0., 0.]]), MatrixKind::Row),
            (m(&[&[1.], &[2.]]), MatrixKind::Column),
            (m(&[&[0., 0.], &[0., 0.]]), MatrixKind::Zero),
            (m(&[&[1.]]), MatrixKind::Unit),
            (Matrix::identity(3).unwrap(), MatrixKind::Unit),
            (m(&[&[5., 0.], &[0., 7.]]), MatrixKind::Diagonal),
            (m(&[&[1., 0.], &[0., 0.]]), MatrixKind::Square),
            (m(&[&[1., 2., 3.], &[4., 5., 6.]]), MatrixKind::Rectangular),
        ];

        for (a, k) in cases {
            assert_eq!(a.kind(), k, "{}", a);
        }
        assert_eq!(MatrixKind::Rectangular.to_string(), "rectangular");
    }

    #[test]
    fn rows_columns() {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.]]);
        assert_eq!(a.row(1).unwrap(), vec![4., 5., 6.]);
        assert_eq!(a.column(2).unwrap(), vec![3., 6.]);
        assert_eq!(a.row(2), Err(Error::index_out_of_range(2, 2)));
        assert_eq!(a.column(3), Err(Error::index_out_of_range(3, 3)));
    }

    #[test]
    fn arithmetic() {
        let a = m(&[&[1., 2.], &[3., 4.]]);
        let b = m(&[&[5., 6.], &[7., 8.]]);

        assert_eq!(a.plus(&b).unwrap(), m(&[&[6., 8.], &[10., 12.]]));
        assert_eq!(b.minus(&a).unwrap(), m(&[&[4., 4.], &[4., 4.]]));
        assert_eq!(a.scale(-2.).unwrap(), m(&[&[-2., -4.], &[-6., -8.]]));
        assert_eq!(-a.clone(), m(&[&[-1., -2.], &[-3., -4.]]));
        assert_eq!(reason(a.scale(f64::NAN)), "value must be a number");

        let c = m(&[&[1., 2., 3.]]);
        assert!(!a.is_conformal_to(&c));
        assert!(!a.is_equal_to(&c));
        assert!(a.is_equal_to(&a.clone()));
        assert!(matches!(
            a.plus(&c),
            Err(Error::DimensionMismatch { op: "plus", .. })
        ));
        assert!(matches!(
            a.minus(&c),
            Err(Error::DimensionMismatch { op: "minus", .. })
        ));
    }

    #[test]
    fn multiply() {
        let a = Matrix::from_linear(vec![1., 2., 3., 4., 5., 6.], 2, 3).unwrap();
        let b = m(&[&[7., 8.], &[9., 10.], &[11., 12.]]);

        let c = a.multiply(&b).unwrap();
        assert_eq!(c, m(&[&[58., 64.], &[139., 154.]]));

        assert_eq!(
            b.multiply(&b),
            Err(Error::dimension_mismatch("multiply", &[3, 2], &[3, 2]))
        );

        // the identity short-circuits before the shape check
        assert_eq!(a.multiply(&Matrix::identity(3).unwrap()).unwrap(), a);
        assert_eq!(a.multiply(&Matrix::identity(2).unwrap()).unwrap(), a);
    }

    #[test]
    fn transpose() {
        let a = Matrix::from_linear(vec![1., 2., 3., 4., 5., 6.], 2, 3).unwrap();
        assert_eq!(a.transpose().as_slice(), &[1., 4., 2., 5., 3., 6.]);
        assert_eq!(a.transpose().dimensions(), (3, 2));
        assert_eq!(a.transpose().transpose(), a);
    }

    #[test]
    fn minor_cofactor() {
        let a = m(&[&[1., 2., 3.], &[4., 5., 6.], &[7., 8., 10.]]);
        assert_eq!(a.minor(0, 0).unwrap(), m(&[&[5., 6.], &[8., 10.]]));
        assert_eq!(a.minor(1, 2).unwrap(), m(&[&[1., 2.], &[7., 8.]]));
        assert_eq!(a.cofactor(0, 1).unwrap(), -(40. - 42.));
        assert_eq!(a.cofactor(1, 2).unwrap(), -(8. - 14.));

        let one = m(&[&[9.]]);
        assert_eq!(one.minor(0, 0).unwrap(), one);
        assert_eq!(one.cofactor(0, 0).unwrap(), 9.);

        assert_eq!(a.minor(3, 0), Err(Error::index_out_of_range(3, 3)));
        assert_eq!(a.cofactor(0, 3), Err(Error::index_out_of_range(3, 3)));
        assert_eq!(
            reason(m(&[&[1., 2.]]).minor(0, 0)),
            "matrix must be square"
        );
    }

    #[test]
    fn determinant() {
        assert_eq!(m(&[&[-3.]]).det().unwrap(), -3.);
        assert_eq!(m(&[&[1., 2.], &[3., 4.]]).det().unwrap(), -2.);
        assert_eq!(
            m(&[&[1., 2., 3.], &[4., 5., 16.], &[7., 8., 9.]]).det().unwrap(),
            60.
        );
        assert_eq!(
            m(&[
                &[3., 2., 15., 4.],
                &[9., 6., 7., 8.],
                &[17., 45., 23., 12.],
                &[13., 14., 15., 16.]
            ])
            .det()
            .unwrap(),
            17600.
        );
        assert!(m(&[&[1., 2., 3.]]).det().is_err());
    }

    #[test]
    fn inverse() {
        let a = m(&[&[4., 7.], &[2., 6.]]);
        assert_eq!(a.inv().unwrap(), m(&[&[0.6, -0.7], &[-0.2, 0.4]]));

        assert_eq!(m(&[&[4.]]).inv().unwrap(), m(&[&[0.25]]));

        assert_eq!(
            reason(m(&[&[1., 2.], &[2., 4.]]).inv()),
            "matrix is singular"
        );
        assert_eq!(reason(m(&[&[0.]]).inv()), "matrix is singular");
        assert_eq!(reason(m(&[&[1., 2.]]).inv()), "matrix must be square");

        let b = m(&[&[2., 0., 0.], &[0., 4., 0.], &[0., 0., 8.]]);
        assert_eq!(
            b.inv().unwrap(),
            m(&[&[0.5, 0., 0.], &[0., 0.25, 0.], &[0., 0., 0.125]])
        );
    }

    #[test]
    fn adjoint() {
        assert_eq!(m(&[&[5.]]).adjoint().unwrap(), m(&[&[1.]]));
        assert_eq!(
            m(&[&[1., 2.], &[3., 4.]]).adjoint().unwrap(),
            m(&[&[4., -2.], &[-3., 1.]])
        );

        // the adjoint exists for singular matrices too
        assert_eq!(
            m(&[&[1., 2.], &[2., 4.]]).adjoint().unwrap(),
            m(&[&[4., -2.], &[-2., 1.]])
        );
        assert_eq!(
            reason(m(&[&[1.], &[2.]]).adjoint()),
            "matrix must be square"
        );
    }
}
