//! Algebrica provides three small mathematical value types:
//!
//! - [ExtendedSet](set::ExtendedSet), an insertion-ordered set with union, intersection,
//!   difference and subset tests,
//! - [Vector](tensors::vector::Vector), a Euclidean vector with arithmetic, dot product,
//!   magnitude and normalization,
//! - [Matrix](tensors::matrix::Matrix), a dense real matrix with classification, arithmetic,
//!   multiplication, transposition, minors, cofactors, determinants, inverses and adjoints.
//!
//! The components are independent of each other. All of them validate their input and
//! report problems through [Error](error::Error) instead of panicking:
//!
//! ```
//! use algebrica::{error::Error, tensors::{matrix::Matrix, vector::Vector}};
//!
//! let v = Vector::new(vec![3., 4.]).unwrap();
//! assert_eq!(v.magnitude(), 5.);
//!
//! let singular = Matrix::new(vec![vec![1., 2.], vec![2., 4.]]).unwrap();
//! assert!(matches!(singular.inv(), Err(Error::InvalidArgument { .. })));
//! ```
//!
//! Untyped input, for example parsed from a document, can be converted with the checked
//! conversions of [Value](value::Value).

pub mod error;
pub mod printer;
pub mod set;
pub mod tensors;
pub mod value;

pub use error::{Error, Result};
