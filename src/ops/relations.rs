// ============================================================================
// Vector Relations
// Zero, parallel and orthogonal classification
// ============================================================================

use crate::domain::{ParallelismTest, Tolerance, Vector, VectorResult};
use crate::numeric::NumericError;
use std::f64::consts::PI;

impl Vector {
    /// True when every coordinate is within `1e-8` of zero.
    pub fn is_zero_vector(&self) -> bool {
        self.is_zero_vector_within(&Tolerance::STANDARD)
    }

    pub fn is_zero_vector_within(&self, tolerance: &Tolerance) -> bool {
        self.iter().all(|c| c.abs() < tolerance.epsilon)
    }

    /// True if either vector is a zero vector, or the angle between them is
    /// exactly `0` or `π`.
    ///
    /// The angle comparison is exact `f64` equality. It holds whenever the
    /// cosine rounds to exactly ±1 at 8 decimal places.
    ///
    /// Dimensions are checked before the zero-vector shortcut, so a zero
    /// vector of another dimension is a `DimensionMismatch`, not `true`.
    pub fn is_parallel(&self, other: &Vector) -> VectorResult<bool> {
        self.is_parallel_within(other, &Tolerance::STANDARD)
    }

    pub fn is_parallel_within(&self, other: &Vector, tolerance: &Tolerance) -> VectorResult<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero_vector_within(tolerance) || other.is_zero_vector_within(tolerance) {
            return Ok(true);
        }

        match tolerance.parallelism {
            ParallelismTest::ExactAngle => {
                let angle = self.get_angle_with(other, false, tolerance)?;
                Ok(angle == 0.0 || angle == PI)
            },
            ParallelismTest::DotProduct => {
                let dot = self.dot_product(other)?.abs();
                let norms = self
                    .magnitude()?
                    .checked_mul(other.magnitude()?)
                    .ok_or(NumericError::Overflow)?;
                let gap = dot.checked_sub(norms).ok_or(NumericError::Overflow)?;
                Ok(gap.abs() < tolerance.epsilon)
            },
        }
    }

    /// True if either vector is a zero vector, or `|v·w| < 1e-8`.
    ///
    /// As with [`Vector::is_parallel`], a dimension mismatch is reported
    /// even when one side is a zero vector.
    pub fn is_orthogonal(&self, other: &Vector) -> VectorResult<bool> {
        self.is_orthogonal_within(other, &Tolerance::STANDARD)
    }

    pub fn is_orthogonal_within(
        &self,
        other: &Vector,
        tolerance: &Tolerance,
    ) -> VectorResult<bool> {
        self.ensure_same_dimension(other)?;
        if self.is_zero_vector_within(tolerance) || other.is_zero_vector_within(tolerance) {
            return Ok(true);
        }
        Ok(self.dot_product(other)?.abs() < tolerance.epsilon)
    }
}
