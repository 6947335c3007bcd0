// ============================================================================
// Tolerance Configuration
// Thresholds and rounding used by comparisons, angles and display
// ============================================================================

use super::errors::{VectorError, VectorResult};
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest scale a `Decimal` can carry.
const MAX_DIGITS: u32 = 28;

// ============================================================================
// Parallelism Test
// ============================================================================

/// How `is_parallel_within` decides that two non-zero vectors are parallel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ParallelismTest {
    /// Angle between the vectors is exactly 0 or exactly π.
    /// Brittle for inputs whose rounded cosine is not exactly ±1.
    #[default]
    ExactAngle,

    /// `| |v·w| - |v||w| | < epsilon`
    DotProduct,
}

// ============================================================================
// Tolerance
// ============================================================================

/// Comparison thresholds for vector operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tolerance {
    /// Absolute threshold for zero-vector and orthogonality tests
    pub epsilon: Decimal,

    /// Decimal places the cosine is rounded to before `arccos`
    pub angle_digits: u32,

    /// Decimal places shown by `Display`
    pub display_digits: u32,

    /// Parallelism decision rule
    pub parallelism: ParallelismTest,
}

impl Tolerance {
    /// Default thresholds: epsilon `1e-8`, 8 digits for angle rounding
    /// and display, exact-angle parallelism.
    pub const STANDARD: Self = Self {
        epsilon: Decimal::from_parts(1, 0, 0, false, 8),
        angle_digits: 8,
        display_digits: 8,
        parallelism: ParallelismTest::ExactAngle,
    };

    pub fn new() -> Self {
        Self::STANDARD
    }

    /// Builder method: Set the near-zero threshold
    pub fn with_epsilon(mut self, epsilon: Decimal) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Builder method: Set cosine rounding before `arccos`
    pub fn with_angle_digits(mut self, digits: u32) -> Self {
        self.angle_digits = digits;
        self
    }

    /// Builder method: Set display rounding
    pub fn with_display_digits(mut self, digits: u32) -> Self {
        self.display_digits = digits;
        self
    }

    /// Builder method: Set the parallelism rule
    pub fn with_parallelism(mut self, parallelism: ParallelismTest) -> Self {
        self.parallelism = parallelism;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> VectorResult<()> {
        if self.epsilon.is_sign_negative() && !self.epsilon.is_zero() {
            return Err(VectorError::InvalidTolerance("epsilon cannot be negative"));
        }
        if self.angle_digits > MAX_DIGITS {
            return Err(VectorError::InvalidTolerance(
                "angle digits cannot exceed 28",
            ));
        }
        if self.display_digits > MAX_DIGITS {
            return Err(VectorError::InvalidTolerance(
                "display digits cannot exceed 28",
            ));
        }
        Ok(())
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::STANDARD
    }
}
