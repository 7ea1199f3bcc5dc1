//! Dynamically typed input data.
//!
//! A [Value] is what a host hands over when it does not know the shape of its data in advance,
//! for example after parsing a document. The checked conversions into [Matrix] and [Vector]
//! report exactly what is wrong with the input:
//!
//! ```
//! use algebrica::{error::Error, tensors::matrix::Matrix, value::Value};
//!
//! let v = Value::from(vec![Value::from(vec![1., 2.]), Value::from(3.)]);
//! assert!(matches!(
//!     Matrix::try_from(&v),
//!     Err(Error::InvalidArgument { reason, .. }) if reason == "array must be a 2D array"
//! ));
//! ```

use crate::{
    error::{Error, Result},
    tensors::{matrix::Matrix, vector::Vector},
};

/// A dynamically typed value.
#[derive(Clone, PartialEq, Debug)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(String),
    List(Vec<Value>),
    Matrix(Matrix),
    Vector(Vector),
}

impl Value {
    /// Get a short name of the kind of value.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Matrix(_) => "matrix",
            Value::Vector(_) => "vector",
        }
    }

    /// Get the value as a finite number.
    pub fn as_number(&self) -> Result<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Ok(*n),
            _ => Err(Error::not_a_number("value")),
        }
    }

    /// Get the matrix stored in the value.
    pub fn as_matrix(&self) -> Result<&Matrix> {
        match self {
            Value::Matrix(m) => Ok(m),
            v => Err(Error::type_mismatch("matrix", v.kind_name())),
        }
    }

    /// Get the vector stored in the value.
    pub fn as_vector(&self) -> Result<&Vector> {
        match self {
            Value::Vector(v) => Ok(v),
            v => Err(Error::type_mismatch("vector", v.kind_name())),
        }
    }

    /// Get the entries of a list of numbers.
    fn to_numbers(list: &[Value]) -> Result<Vec<f64>> {
        list.iter()
            .map(|e| match e {
                Value::Number(n) => Ok(*n),
                _ => Err(Error::invalid_argument(
                    "value",
                    "all elements must be numbers",
                )),
            })
            .collect()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Value::Matrix(m)
    }
}

impl From<Vector> for Value {
    fn from(v: Vector) -> Self {
        Value::Vector(v)
    }
}

impl TryFrom<&Value> for Matrix {
    type Error = Error;

    /// Convert a list of lists of numbers into a matrix. The checks are performed in order:
    /// non-empty list, every row is a list, all rows have the same length, all entries are numbers.
    fn try_from(value: &Value) -> Result<Self> {
        let rows = match value {
            Value::Matrix(m) => return Ok(m.clone()),
            Value::List(rows) if !rows.is_empty() => rows,
            _ => {
                return Err(Error::invalid_argument(
                    "value",
                    "value must be a non-empty array",
                ))
            }
        };

        let rows = rows
            .iter()
            .map(|r| match r {
                Value::List(r) => Ok(r.as_slice()),
                _ => Err(Error::invalid_argument("value", "array must be a 2D array")),
            })
            .collect::<Result<Vec<_>>>()?;

        if rows.iter().any(|r| r.len() != rows[0].len()) {
            return Err(Error::invalid_argument(
                "value",
                "all rows must have the same length",
            ));
        }

        let rows = rows
            .into_iter()
            .map(Value::to_numbers)
            .collect::<Result<Vec<_>>>()?;

        Matrix::new(rows)
    }
}

impl TryFrom<&Value> for Vector {
    type Error = Error;

    /// Convert a non-empty list of numbers into a vector.
    fn try_from(value: &Value) -> Result<Self> {
        match value {
            Value::Vector(v) => Ok(v.clone()),
            Value::List(l) if !l.is_empty() => Vector::new(Value::to_numbers(l)?),
            _ => Err(Error::invalid_argument(
                "value",
                "value must be a non-empty array",
            )),
        }
    }
}
