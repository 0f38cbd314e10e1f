//! Matriz: dense 2D matrix primitives in pure Rust.
//!
//! Matriz provides a rectangular numeric container with structural editing
//! (row and column insertion and deletion), checked 1-indexed element
//! access, exact small-matrix algebra (addition, multiplication, transpose,
//! cofactor determinant), and a human-readable grid rendering.
//!
//! # Quick Start
//!
//! ```
//! use matriz::prelude::*;
//!
//! let a = Matrix::from_rows(&[
//!     vec![1.0, 2.0, 3.0],
//!     vec![4.0, 5.0, 6.0],
//! ]).unwrap();
//! let b = Matrix::from_rows(&[
//!     vec![7.0, 8.0],
//!     vec![9.0, 10.0],
//!     vec![11.0, 12.0],
//! ]).unwrap();
//!
//! let product = a.matmul(&b).unwrap();
//! assert_eq!(product.shape(), (2, 2));
//! assert_eq!(product.value(2, 2).unwrap(), 154.0);
//!
//! let square = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
//! assert_eq!(square.determinant().unwrap(), -2.0);
//! assert_eq!(square.to_string(), "1 2\n3 4");
//! ```
//!
//! # Modules
//!
//! - [`primitives`]: Core Matrix and Vector types
//! - [`error`]: Error type and Result alias
//! - [`prelude`]: Convenience re-exports

pub mod error;
pub mod prelude;
pub mod primitives;

pub use error::{MatrizError, Result};
pub use primitives::{Matrix, Vector};
