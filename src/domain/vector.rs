// ============================================================================
// Vector Domain Model
// Immutable Euclidean vector over exact decimals
// ============================================================================

use super::config::Tolerance;
use super::errors::{ArgumentError, VectorError, VectorResult};
use crate::numeric::{IntoScalar, Scalar};
use smallvec::SmallVec;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Inline capacity: vectors up to 4 dimensions never touch the heap.
pub(crate) type Coordinates = SmallVec<[Scalar; 4]>;

/// A finite-dimensional Euclidean vector with exact-decimal coordinates.
///
/// Instances are immutable: every operation returns a new `Vector`.
/// Equality is exact and element-wise; vectors of different dimension are
/// simply unequal.
///
/// # Example
/// ```rust
/// use decimal_vector::prelude::*;
///
/// let v = Vector::new([3, 4]).unwrap();
/// assert_eq!(v.dimension(), 2);
/// assert_eq!(v.magnitude().unwrap(), Scalar::from(5));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "Vec<Scalar>", into = "Vec<Scalar>")
)]
pub struct Vector {
    coordinates: Coordinates,
}

impl Vector {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Create a vector from any sequence of numeric-like values.
    ///
    /// # Errors
    /// - `InvalidArgument(Empty)` if the sequence has no elements
    /// - `InvalidArgument(NotNumeric)` if an element cannot be converted
    pub fn new<I>(coordinates: I) -> VectorResult<Self>
    where
        I: IntoIterator,
        I::Item: IntoScalar,
    {
        let coordinates = coordinates
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                value
                    .into_scalar()
                    .map_err(|cause| ArgumentError::NotNumeric { index, cause })
            })
            .collect::<Result<Coordinates, _>>()?;

        Self::from_coordinates(coordinates)
    }

    /// The zero vector of the given dimension.
    pub fn zero(dimension: usize) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_elem(Scalar::ZERO, dimension))
    }

    pub(crate) fn from_coordinates(coordinates: Coordinates) -> VectorResult<Self> {
        if coordinates.is_empty() {
            return Err(VectorError::InvalidArgument(ArgumentError::Empty));
        }
        Ok(Self { coordinates })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Number of coordinates (always at least 1).
    #[inline]
    pub fn dimension(&self) -> usize {
        self.coordinates.len()
    }

    #[inline]
    pub fn coordinates(&self) -> &[Scalar] {
        &self.coordinates
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<Scalar> {
        self.coordinates.get(index).copied()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Scalar> {
        self.coordinates.iter()
    }

    /// Display adapter rounding each coordinate to `digits` decimal places.
    pub fn display_rounded(&self, digits: u32) -> RoundedVector<'_> {
        RoundedVector {
            vector: self,
            digits,
        }
    }

    /// Apply an infallible transform to every coordinate.
    pub(crate) fn map(&self, f: impl Fn(Scalar) -> Scalar) -> Self {
        Self {
            coordinates: self.iter().map(|c| f(*c)).collect(),
        }
    }

    /// Fail with `DimensionMismatch` unless `other` has the same dimension.
    pub(crate) fn ensure_same_dimension(&self, other: &Self) -> VectorResult<()> {
        if self.dimension() == other.dimension() {
            Ok(())
        } else {
            tracing::debug!(
                expected = self.dimension(),
                found = other.dimension(),
                "Vector dimension mismatch"
            );
            Err(VectorError::DimensionMismatch {
                expected: self.dimension(),
                found: other.dimension(),
            })
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

impl TryFrom<Vec<Scalar>> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: Vec<Scalar>) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_vec(coordinates))
    }
}

impl TryFrom<&[Scalar]> for Vector {
    type Error = VectorError;

    fn try_from(coordinates: &[Scalar]) -> VectorResult<Self> {
        Self::from_coordinates(SmallVec::from_slice(coordinates))
    }
}

impl From<Vector> for Vec<Scalar> {
    fn from(vector: Vector) -> Self {
        vector.coordinates.into_vec()
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Scalar;
    type IntoIter = std::slice::Iter<'a, Scalar>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

/// Borrowed view of a vector that formats with a fixed rounding.
pub struct RoundedVector<'a> {
    vector: &'a Vector,
    digits: u32,
}

impl fmt::Display for RoundedVector<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vector: (")?;
        for (i, coordinate) in self.vector.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", coordinate.round_dp(self.digits).normalize())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(
            &self.display_rounded(Tolerance::STANDARD.display_digits),
            f,
        )
    }
}

impl fmt::Debug for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Vector").field(&self.coordinates()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numeric::NumericError;
    use rust_decimal::Decimal;

    #[test]
    fn test_vector_creation() {
        let v = Vector::new([1, 2, 3]).unwrap();
        assert_eq!(v.dimension(), 3);
        assert_eq!(
            v.coordinates(),
            &[Decimal::from(1), Decimal::from(2), Decimal::from(3)]
        );
        assert_eq!(v.get(1), Some(Decimal::from(2)));
        assert_eq!(v.get(3), None);
    }

    #[test]
    fn test_mixed_inputs() {
        let from_strings = Vector::new(["8.218", "-9.341"]).unwrap();
        let from_decimals =
            Vector::new([Decimal::new(8218, 3), Decimal::new(-9341, 3)]).unwrap();
        assert_eq!(from_strings, from_decimals);

        let from_floats = Vector::new([1.5f64, -0.25]).unwrap();
        assert_eq!(from_floats, Vector::new(["1.5", "-0.25"]).unwrap());
    }

    #[test]
    fn test_empty_rejected() {
        let empty: [i32; 0] = [];
        assert_eq!(
            Vector::new(empty),
            Err(VectorError::InvalidArgument(ArgumentError::Empty))
        );
        assert_eq!(
            Vector::zero(0),
            Err(VectorError::InvalidArgument(ArgumentError::Empty))
        );
        assert!(Vector::try_from(Vec::<Decimal>::new()).is_err());
    }

    #[test]
    fn test_non_numeric_rejected() {
        let result = Vector::new(["1.0", "two", "3"]);
        assert_eq!(
            result,
            Err(VectorError::InvalidArgument(ArgumentError::NotNumeric {
                index: 1,
                cause: NumericError::InvalidInput,
            }))
        );

        let result = Vector::new([1.0, f64::NAN]);
        assert!(matches!(
            result,
            Err(VectorError::InvalidArgument(ArgumentError::NotNumeric {
                index: 1,
                cause: NumericError::NotFinite,
            }))
        ));
    }

    #[test]
    fn test_equality() {
        let a = Vector::new(["7.230", "1"]).unwrap();
        let b = Vector::new(["7.23", "1.00"]).unwrap();
        assert_eq!(a, b);

        let c = Vector::new(["7.23", "1.00000001"]).unwrap();
        assert_ne!(a, c);

        // Mismatched dimensions are unequal, not an error
        let d = Vector::new([1, 2, 3]).unwrap();
        let e = Vector::new([1, 2]).unwrap();
        assert_ne!(d, e);
    }

    #[test]
    fn test_display() {
        let v = Vector::new(["7.089", "-7.230"]).unwrap();
        assert_eq!(v.to_string(), "Vector: (7.089, -7.23)");

        let w = Vector::new(["0.123456789123", "2"]).unwrap();
        assert_eq!(w.to_string(), "Vector: (0.12345679, 2)");
        // Stored precision untouched
        assert_eq!(w.get(0), Some(Decimal::new(123456789123, 12)));

        assert_eq!(w.display_rounded(2).to_string(), "Vector: (0.12, 2)");
    }

    #[test]
    fn test_zero_vector() {
        let zero = Vector::zero(3).unwrap();
        assert_eq!(zero, Vector::new([0, 0, 0]).unwrap());
    }

    #[test]
    fn test_conversions() {
        let coords = vec![Decimal::ONE, Decimal::TWO];
        let v = Vector::try_from(coords.clone()).unwrap();
        assert_eq!(Vector::try_from(coords.as_slice()).unwrap(), v);

        let back: Vec<Decimal> = v.clone().into();
        assert_eq!(back, coords);

        let sum: Decimal = (&v).into_iter().copied().sum();
        assert_eq!(sum, Decimal::from(3));
    }

    #[test]
    fn test_large_dimension_spills() {
        let v = Vector::new(1..=10).unwrap();
        assert_eq!(v.dimension(), 10);
        assert_eq!(v.get(9), Some(Decimal::from(10)));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Vector>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip_validates() {
        let v = Vector::new(["1.5", "-2"]).unwrap();
        let json = serde_json::to_string(&v).unwrap();
        let back: Vector = serde_json::from_str(&json).unwrap();
        assert_eq!(back, v);

        let empty: Result<Vector, _> = serde_json::from_str("[]");
        assert!(empty.is_err());
    }
}
