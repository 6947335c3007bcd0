// ============================================================================
// Decimal Vector Library
// Euclidean vectors over exact decimals with standard linear-algebra operations
// ============================================================================

//! # Decimal Vector
//!
//! A finite-dimensional Euclidean vector whose coordinates are exact decimals.
//!
//! ## Features
//!
//! - **Exact decimal coordinates** (`rust_decimal`, 28 significant digits)
//! - **Arithmetic**: add, subtract, scalar multiply
//! - **Metrics**: magnitude, normalization, dot product, angle
//! - **Relations**: zero, parallel and orthogonal tests with a 1e-8 epsilon
//! - **Projections**: parallel/orthogonal decomposition along a basis
//! - **3D**: cross product, parallelogram and triangle area
//!
//! Every operation returns a new value or a `VectorResult`; instances are
//! immutable and `Send + Sync`.
//!
//! ## Example
//!
//! ```rust
//! use decimal_vector::prelude::*;
//!
//! let v = Vector::new(["8.218", "-9.341"]).unwrap();
//! let w = Vector::new(["-1.129", "2.111"]).unwrap();
//! assert_eq!(v.add(&w).unwrap(), Vector::new(["7.089", "-7.23"]).unwrap());
//!
//! let x = Vector::new([1, 0, 0]).unwrap();
//! let y = Vector::new([0, 1, 0]).unwrap();
//! assert_eq!(x.cross_product(&y).unwrap(), Vector::new([0, 0, 1]).unwrap());
//!
//! // Cross products need three dimensions
//! let flat = Vector::new([1, 2]).unwrap();
//! assert!(matches!(
//!     flat.cross_product(&flat),
//!     Err(VectorError::UnsupportedDimension { .. })
//! ));
//! ```

pub mod domain;
pub mod numeric;
mod ops;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{
        ArgumentError, ParallelismTest, RoundedVector, Tolerance, Vector, VectorError,
        VectorResult,
    };
    pub use crate::numeric::{IntoScalar, NumericError, NumericResult, Scalar};
}
