//! Dense vectors and matrices with real entries.
//!
//! Both types validate their input on construction and are immutable afterwards:
//! every operation returns a new value and leaves its operands untouched.
//!
//! ```
//! use algebrica::tensors::matrix::Matrix;
//!
//! let a = Matrix::new(vec![vec![4., 7.], vec![2., 6.]]).unwrap();
//! assert_eq!(a.det().unwrap(), 10.);
//! assert_eq!(a.inv().unwrap().to_nested_vec(), vec![vec![0.6, -0.7], vec![-0.2, 0.4]]);
//! ```

pub mod matrix;
pub mod vector;
