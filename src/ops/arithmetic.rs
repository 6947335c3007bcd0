// ============================================================================
// Vector Arithmetic
// Element-wise addition, subtraction and scaling
// ============================================================================

use crate::domain::{Vector, VectorResult};
use crate::numeric::{IntoScalar, NumericError, Scalar};

impl Vector {
    /// Element-wise sum.
    ///
    /// # Errors
    /// - `DimensionMismatch` if the dimensions differ
    /// - `Numeric(Overflow)` if a coordinate leaves the decimal range
    pub fn add(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, Scalar::checked_add)
    }

    /// Element-wise difference `self - other`.
    ///
    /// # Errors
    /// Same as [`Vector::add`].
    pub fn subtract(&self, other: &Vector) -> VectorResult<Vector> {
        self.zip_with(other, Scalar::checked_sub)
    }

    /// Multiply every coordinate by `scalar`.
    ///
    /// # Errors
    /// - `Numeric(_)` if the scalar cannot be converted or a product overflows
    pub fn scalar_multiply(&self, scalar: impl IntoScalar) -> VectorResult<Vector> {
        let factor = scalar.into_scalar()?;
        self.scale(factor)
    }

    /// Additive inverse.
    pub fn negate(&self) -> Vector {
        self.map(|c| -c)
    }

    pub(crate) fn scale(&self, factor: Scalar) -> VectorResult<Vector> {
        let coordinates = self
            .iter()
            .map(|c| c.checked_mul(factor).ok_or(NumericError::Overflow))
            .collect::<Result<_, _>>()?;
        Vector::from_coordinates(coordinates)
    }

    fn zip_with(
        &self,
        other: &Vector,
        op: impl Fn(Scalar, Scalar) -> Option<Scalar>,
    ) -> VectorResult<Vector> {
        self.ensure_same_dimension(other)?;
        let coordinates = self
            .iter()
            .zip(other.iter())
            .map(|(a, b)| op(*a, *b).ok_or(NumericError::Overflow))
            .collect::<Result<_, _>>()?;
        Vector::from_coordinates(coordinates)
    }
}
