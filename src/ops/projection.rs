// ============================================================================
// Vector Projections
// Decomposition of a vector along and across a basis direction
// ============================================================================

use crate::domain::{Tolerance, Vector, VectorResult};
use crate::numeric::NumericError;

impl Vector {
    /// Component of `self` along `basis`: the unit basis scaled by
    /// `self · unit_basis`.
    ///
    /// # Errors
    /// - `DivisionByZero` if `basis` has zero magnitude
    /// - `DimensionMismatch` if the dimensions differ
    pub fn get_parallel_projection(&self, basis: &Vector) -> VectorResult<Vector> {
        let unit_basis = basis.normalize()?;
        let parallel_magnitude = self.dot_product(&unit_basis)?;
        unit_basis.scale(parallel_magnitude)
    }

    /// Component of `self` perpendicular to `basis`.
    ///
    /// The direction is the normalized difference `self - parallel`; the
    /// length is `self` dotted with that direction. The zero vector is
    /// returned when the difference is negligible next to `self`, that is
    /// `|self - parallel| <= 1e-8 * |self|`. This covers an exactly parallel
    /// `self` and the rounding noise left by an inexact unit basis, while a
    /// short but genuine orthogonal component is kept at any scale.
    ///
    /// # Errors
    /// Same as [`Vector::get_parallel_projection`].
    pub fn get_orthogonal_projection(&self, basis: &Vector) -> VectorResult<Vector> {
        let difference = self.subtract(&self.get_parallel_projection(basis)?)?;
        let threshold = Tolerance::STANDARD
            .epsilon
            .checked_mul(self.magnitude()?)
            .ok_or(NumericError::Overflow)?;
        if difference.magnitude()? <= threshold {
            tracing::trace!("Vector parallel to basis, orthogonal component is zero");
            return Vector::zero(self.dimension());
        }

        let unit_orthogonal = difference.normalize()?;
        let orthogonal_magnitude = self.dot_product(&unit_orthogonal)?;
        unit_orthogonal.scale(orthogonal_magnitude)
    }

    /// Both components at once: `(parallel, orthogonal)`.
    pub fn decompose(&self, basis: &Vector) -> VectorResult<(Vector, Vector)> {
        let parallel = self.get_parallel_projection(basis)?;
        let orthogonal = self.get_orthogonal_projection(basis)?;
        Ok((parallel, orthogonal))
    }
}
