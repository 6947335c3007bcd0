// ============================================================================
// Cross Product and Areas
// Operations defined only in three dimensions
// ============================================================================

use crate::domain::{Vector, VectorError, VectorResult};
use crate::numeric::{NumericError, Scalar};

const CROSS_DIMENSION: usize = 3;

impl Vector {
    /// Standard 3D cross product `self × other`.
    ///
    /// Returns the zero vector when either operand is a zero vector or the
    /// two are parallel, so near-parallel rounding noise is not amplified.
    ///
    /// # Errors
    /// - `UnsupportedDimension` unless both vectors are 3-dimensional
    pub fn cross_product(&self, other: &Vector) -> VectorResult<Vector> {
        for operand in [self, other] {
            if operand.dimension() != CROSS_DIMENSION {
                tracing::debug!(
                    dimension = operand.dimension(),
                    "Cross product requires 3-dimensional vectors"
                );
                return Err(VectorError::UnsupportedDimension {
                    operation: "cross_product",
                    dimension: operand.dimension(),
                });
            }
        }

        if self.is_zero_vector() || other.is_zero_vector() || self.is_parallel(other)? {
            tracing::trace!("Degenerate cross product, returning zero vector");
            return Vector::zero(CROSS_DIMENSION);
        }

        let [x1, y1, z1] = self.xyz();
        let [x2, y2, z2] = other.xyz();
        Vector::new([
            minor(y1, z2, y2, z1)?,
            minor(z1, x2, z2, x1)?,
            minor(x1, y2, x2, y1)?,
        ])
    }

    /// Area of the parallelogram spanned by the two vectors.
    ///
    /// # Errors
    /// Same as [`Vector::cross_product`].
    pub fn get_parallelogram_area(&self, other: &Vector) -> VectorResult<Scalar> {
        self.cross_product(other)?.magnitude()
    }

    /// Half the parallelogram area.
    pub fn get_triangle_area(&self, other: &Vector) -> VectorResult<Scalar> {
        let area = self.get_parallelogram_area(other)?;
        Ok(area
            .checked_div(Scalar::TWO)
            .ok_or(NumericError::Overflow)?)
    }

    fn xyz(&self) -> [Scalar; 3] {
        let c = self.coordinates();
        [c[0], c[1], c[2]]
    }
}

/// `a*b - c*d`
fn minor(a: Scalar, b: Scalar, c: Scalar, d: Scalar) -> Result<Scalar, NumericError> {
    let left = a.checked_mul(b).ok_or(NumericError::Overflow)?;
    let right = c.checked_mul(d).ok_or(NumericError::Overflow)?;
    left.checked_sub(right).ok_or(NumericError::Overflow)
}
