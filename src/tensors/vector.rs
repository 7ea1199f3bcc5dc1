use std::{
    fmt::Display,
    ops::{Index, Neg},
};

use smallvec::SmallVec;

use crate::{
    error::{Error, Result},
    printer::{PrintOptions, VectorPrinter},
};

/// Number of entries that are stored inline.
const INLINED_ENTRIES: usize = 4;

/// An n-dimensional Euclidean vector with finite real entries.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<f64>", into = "Vec<f64>")
)]
pub struct Vector {
    pub(crate) data: SmallVec<[f64; INLINED_ENTRIES]>,
}

impl Vector {
    /// Create a new vector from a list of scalars.
    ///
    /// Fails if the list is empty or if an entry is NaN or infinite.
    pub fn new(data: Vec<f64>) -> Result<Vector> {
        Self::check_entries(&data)?;
        Ok(Vector {
            data: SmallVec::from_vec(data),
        })
    }

    /// Create a new vector from a slice of scalars.
    pub fn from_slice(data: &[f64]) -> Result<Vector> {
        Self::check_entries(data)?;
        Ok(Vector {
            data: SmallVec::from_slice(data),
        })
    }

    fn check_entries(data: &[f64]) -> Result<()> {
        if data.is_empty() {
            return Err(Error::invalid_argument(
                "data",
                "value must be a non-empty array",
            ));
        }

        if data.iter().any(|x| !x.is_finite()) {
            return Err(Error::invalid_argument(
                "data",
                "all elements must be numbers",
            ));
        }

        Ok(())
    }

    /// Return the number of entries.
    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.data.iter()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    fn check_same_dimension(&self, rhs: &Vector, op: &'static str) -> Result<()> {
        if self.data.len() != rhs.data.len() {
            return Err(Error::dimension_mismatch(
                op,
                &[self.data.len()],
                &[rhs.data.len()],
            ));
        }
        Ok(())
    }

    /// Apply `f` to each pair of entries of `self` and `rhs`.
    fn zip_with(&self, rhs: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        Vector {
            data: self
                .data
                .iter()
                .zip(&rhs.data)
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }

    /// Add two vectors.
    pub fn plus(&self, rhs: &Vector) -> Result<Vector> {
        self.check_same_dimension(rhs, "plus")?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }

    /// Subtract `rhs` from `self`.
    pub fn minus(&self, rhs: &Vector) -> Result<Vector> {
        self.check_same_dimension(rhs, "minus")?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }

    /// Multiply each entry by `scalar`, which must be finite.
    pub fn scale(&self, scalar: f64) -> Result<Vector> {
        if !scalar.is_finite() {
            return Err(Error::not_a_number("scalar"));
        }

        Ok(Vector {
            data: self.data.iter().map(|x| x * scalar).collect(),
        })
    }

    /// Take the Euclidean scalar product of two vectors.
    pub fn dot(&self, rhs: &Vector) -> Result<f64> {
        self.check_same_dimension(rhs, "dot")?;
        Ok(self.data.iter().zip(&rhs.data).map(|(a, b)| a * b).sum())
    }

    /// Get the squared Euclidean norm of the vector.
    pub fn norm_squared(&self) -> f64 {
        self.data.iter().map(|x| x * x).sum()
    }

    /// Get the Euclidean norm of the vector.
    pub fn magnitude(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Scale the vector to unit length.
    pub fn normalize(&self) -> Result<Vector> {
        let magnitude = self.magnitude();
        if magnitude == 0. {
            return Err(Error::invalid_argument(
                "self",
                "cannot normalize a zero vector",
            ));
        }

        Ok(Vector {
            data: self.data.iter().map(|x| x / magnitude).collect(),
        })
    }
}

impl TryFrom<Vec<f64>> for Vector {
    type Error = Error;

    fn try_from(data: Vec<f64>) -> Result<Self> {
        Vector::new(data)
    }
}

impl From<Vector> for Vec<f64> {
    fn from(v: Vector) -> Self {
        v.data.into_vec()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    /// Get the `i`th entry of the vector.
    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Neg for Vector {
    type Output = Vector;

    /// Negate each entry of the vector.
    fn neg(mut self) -> Self::Output {
        for e in &mut self.data {
            *e = -*e;
        }

        self
    }
}

impl Display for Vector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        VectorPrinter::new_with_options(self, PrintOptions::from_fmt(f)).fmt(f)
    }
}

#[cfg(test)]
mod test {
    use crate::{error::Error, tensors::vector::Vector};

    #[test]
    fn construction() {
        let v = Vector::new(vec![1., 2., 3.]).unwrap();
        assert_eq!(v.as_slice(), &[1., 2., 3.]);
        assert_eq!(v.dimensions(), 3);
        assert_eq!(v[1], 2.);

        assert!(matches!(
            Vector::new(vec![]),
            Err(Error::InvalidArgument { reason, .. }) if reason == "value must be a non-empty array"
        ));
        assert!(matches!(
            Vector::from_slice(&[1., f64::NAN]),
            Err(Error::InvalidArgument { reason, .. }) if reason == "all elements must be numbers"
        ));
        assert!(Vector::new(vec![f64::INFINITY]).is_err());
    }

    #[test]
    fn arithmetic() {
        let a = Vector::new(vec![1., 2., 3.]).unwrap();
        let b = Vector::new(vec![4., 5., 6.]).unwrap();

        assert_eq!(a.plus(&b).unwrap().as_slice(), &[5., 7., 9.]);
        assert_eq!(b.minus(&a).unwrap().as_slice(), &[3., 3., 3.]);
        assert_eq!(a.scale(2.).unwrap().as_slice(), &[2., 4., 6.]);
        assert_eq!(a.dot(&b).unwrap(), 32.);
        assert_eq!((-a.clone()).as_slice(), &[-1., -2., -3.]);

        // operands are untouched
        assert_eq!(a.as_slice(), &[1., 2., 3.]);
    }

    #[test]
    fn dimension_mismatch() {
        let a = Vector::new(vec![1., 2., 3.]).unwrap();
        let b = Vector::new(vec![1., 2.]).unwrap();

        for r in [a.plus(&b), a.minus(&b)] {
            assert!(matches!(r, Err(Error::DimensionMismatch { .. })));
        }
        assert_eq!(
            a.dot(&b),
            Err(Error::dimension_mismatch("dot", &[3], &[2]))
        );
    }

    #[test]
    fn bad_scalar() {
        let a = Vector::new(vec![1., 2.]).unwrap();
        assert!(matches!(
            a.scale(f64::NAN),
            Err(Error::InvalidArgument { reason, .. }) if reason == "value must be a number"
        ));
    }

    #[test]
    fn magnitude_normalize() {
        let v = Vector::new(vec![3., 4.]).unwrap();
        assert_eq!(v.magnitude(), 5.);
        assert_eq!(v.normalize().unwrap().as_slice(), &[0.6, 0.8]);

        let z = Vector::new(vec![0., 0.]).unwrap();
        assert_eq!(z.magnitude(), 0.);
        assert!(matches!(
            z.normalize(),
            Err(Error::InvalidArgument { reason, .. }) if reason == "cannot normalize a zero vector"
        ));
    }
}
