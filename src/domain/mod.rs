// ============================================================================
// Domain Models Module
// The vector value type, its configuration and errors
// ============================================================================

pub mod config;
pub mod errors;
pub mod vector;

pub use config::{ParallelismTest, Tolerance};
pub use errors::{ArgumentError, VectorError, VectorResult};
pub use vector::{RoundedVector, Vector};
