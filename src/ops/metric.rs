// ============================================================================
// Metric Operations
// Magnitude, normalization, dot product and angle
// ============================================================================

use crate::domain::{Tolerance, Vector, VectorError, VectorResult};
use crate::numeric::{checked_acos, checked_sqrt, NumericError, Scalar};

impl Vector {
    /// Euclidean (L2) norm.
    ///
    /// Coordinates are divided by the largest absolute coordinate before
    /// squaring, so every square lies in `[0, 1]`. Neither tiny coordinates
    /// (below `1e-14`) nor large ones (above `1e14`) leave the decimal
    /// range. The result is exactly zero only for an exactly zero vector.
    pub fn magnitude(&self) -> VectorResult<Scalar> {
        let largest = self
            .iter()
            .map(|c| c.abs())
            .max()
            .unwrap_or(Scalar::ZERO);
        if largest.is_zero() {
            return Ok(Scalar::ZERO);
        }

        let squared = self.iter().try_fold(Scalar::ZERO, |acc, c| {
            c.checked_div(largest)
                .and_then(|ratio| ratio.checked_mul(ratio))
                .and_then(|sq| acc.checked_add(sq))
                .ok_or(NumericError::Overflow)
        })?;
        let root = checked_sqrt(squared)?;
        Ok(root.checked_mul(largest).ok_or(NumericError::Overflow)?)
    }

    /// Unit vector in the same direction.
    ///
    /// Only an exactly zero magnitude fails; a tiny non-zero magnitude still
    /// normalizes.
    ///
    /// # Errors
    /// - `DivisionByZero` if the magnitude is exactly zero
    pub fn normalize(&self) -> VectorResult<Vector> {
        self.direction("normalize")
    }

    fn direction(&self, operation: &'static str) -> VectorResult<Vector> {
        let magnitude = self.magnitude()?;
        if magnitude.is_zero() {
            tracing::debug!(
                dimension = self.dimension(),
                operation,
                "Zero-magnitude vector has no direction"
            );
            return Err(VectorError::DivisionByZero { operation });
        }
        let inverse = Scalar::ONE
            .checked_div(magnitude)
            .ok_or(NumericError::Overflow)?;
        self.scale(inverse)
    }

    /// Sum of element-wise products.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    pub fn dot_product(&self, other: &Vector) -> VectorResult<Scalar> {
        self.ensure_same_dimension(other)?;
        let dot = self
            .iter()
            .zip(other.iter())
            .try_fold(Scalar::ZERO, |acc, (a, b)| {
                a.checked_mul(*b)
                    .and_then(|product| acc.checked_add(product))
                    .ok_or(NumericError::Overflow)
            })?;
        Ok(dot)
    }

    /// Angle between two vectors, in radians unless `in_degrees`.
    ///
    /// The cosine is rounded to 8 decimal places before `arccos`, so nearly
    /// parallel vectors resolve to exactly `0` or `π`.
    ///
    /// # Errors
    /// - `DivisionByZero` if either vector has zero magnitude
    /// - `DimensionMismatch` if the dimensions differ
    pub fn get_angle(&self, other: &Vector, in_degrees: bool) -> VectorResult<f64> {
        self.get_angle_with(other, in_degrees, &Tolerance::STANDARD)
    }

    /// [`Vector::get_angle`] with the cosine rounded to
    /// `tolerance.angle_digits` places.
    pub fn get_angle_with(
        &self,
        other: &Vector,
        in_degrees: bool,
        tolerance: &Tolerance,
    ) -> VectorResult<f64> {
        let radians = checked_acos(self.cosine(other, tolerance.angle_digits)?)?;
        if in_degrees {
            Ok(radians.to_degrees())
        } else {
            Ok(radians)
        }
    }

    /// `v·w / (|v||w|)`, taken as the dot product of the two unit vectors
    /// so the intermediate products stay in range for any coordinate size.
    fn cosine(&self, other: &Vector, digits: u32) -> VectorResult<Scalar> {
        self.ensure_same_dimension(other)?;
        let unit_self = self.direction("angle")?;
        let unit_other = other.direction("angle")?;
        let cosine = unit_self.dot_product(&unit_other)?;
        Ok(cosine.round_dp(digits))
    }
}
