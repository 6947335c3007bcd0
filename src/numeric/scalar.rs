// ============================================================================
// Scalar Conversion and Transcendental Helpers
// ============================================================================

use super::errors::{NumericError, NumericResult};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Exact-decimal scalar used for every coordinate.
///
/// 96-bit mantissa with up to 28 decimal places, so chained additions and
/// products of short decimal inputs stay exact.
pub type Scalar = Decimal;

/// Upper bound on Newton steps in [`checked_sqrt`]. Seeding from `f64`
/// leaves roughly a dozen correct digits, so convergence takes a handful.
const MAX_SQRT_ITERATIONS: usize = 64;

/// Conversion of numeric-like values into a [`Scalar`].
///
/// Integers and decimals convert exactly. Floats convert through
/// `Decimal::from_f64`, strings accept plain (`"-1.25"`) and scientific
/// (`"1e-3"`) notation.
pub trait IntoScalar {
    fn into_scalar(self) -> NumericResult<Scalar>;
}

impl IntoScalar for Decimal {
    #[inline]
    fn into_scalar(self) -> NumericResult<Scalar> {
        Ok(self)
    }
}

impl IntoScalar for &Decimal {
    #[inline]
    fn into_scalar(self) -> NumericResult<Scalar> {
        Ok(*self)
    }
}

macro_rules! impl_into_scalar_for_int {
    ($($t:ty),*) => {
        $(
            impl IntoScalar for $t {
                #[inline]
                fn into_scalar(self) -> NumericResult<Scalar> {
                    Ok(Decimal::from(self))
                }
            }
        )*
    };
}

impl_into_scalar_for_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl IntoScalar for f64 {
    fn into_scalar(self) -> NumericResult<Scalar> {
        if !self.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Decimal::from_f64(self).ok_or(NumericError::Overflow)
    }
}

impl IntoScalar for f32 {
    fn into_scalar(self) -> NumericResult<Scalar> {
        if !self.is_finite() {
            return Err(NumericError::NotFinite);
        }
        Decimal::from_f32(self).ok_or(NumericError::Overflow)
    }
}

impl IntoScalar for &str {
    fn into_scalar(self) -> NumericResult<Scalar> {
        let s = self.trim();
        if s.is_empty() {
            return Err(NumericError::InvalidInput);
        }

        if s.contains(['e', 'E']) {
            Decimal::from_scientific(s).map_err(|_| NumericError::InvalidInput)
        } else {
            Decimal::from_str(s).map_err(|_| NumericError::InvalidInput)
        }
    }
}

impl IntoScalar for String {
    #[inline]
    fn into_scalar(self) -> NumericResult<Scalar> {
        self.as_str().into_scalar()
    }
}

impl IntoScalar for &String {
    #[inline]
    fn into_scalar(self) -> NumericResult<Scalar> {
        self.as_str().into_scalar()
    }
}

/// Square root in the decimal domain.
///
/// Newton iteration seeded from the `f64` root. Exact squares such as `25`
/// return exact roots. Stops at a fixed point, or on a two-cycle in the last
/// digit (returns the smaller of the pair).
///
/// # Errors
/// - `NegativeSqrt` for negative input
/// - `Overflow` if an intermediate step leaves the decimal range
pub fn checked_sqrt(value: Scalar) -> NumericResult<Scalar> {
    if value.is_zero() {
        return Ok(Scalar::ZERO);
    }
    if value.is_sign_negative() {
        return Err(NumericError::NegativeSqrt);
    }

    let mut root = value
        .to_f64()
        .map(f64::sqrt)
        .and_then(Decimal::from_f64)
        .filter(|seed| !seed.is_zero())
        .unwrap_or(value);
    let mut previous = Scalar::ZERO;

    for _ in 0..MAX_SQRT_ITERATIONS {
        let quotient = value
            .checked_div(root)
            .ok_or(NumericError::Overflow)?;
        let next = root
            .checked_add(quotient)
            .ok_or(NumericError::Overflow)?
            / Scalar::TWO;

        if next == root {
            return Ok(next);
        }
        if next == previous {
            return Ok(next.min(root));
        }

        previous = root;
        root = next;
    }

    Ok(root)
}

/// Arc cosine of a decimal cosine, in radians.
///
/// The input is clamped to `[-1, 1]` before conversion so values marginally
/// outside the domain never yield NaN.
pub fn checked_acos(cosine: Scalar) -> NumericResult<f64> {
    let clamped = cosine.clamp(-Scalar::ONE, Scalar::ONE);
    clamped
        .to_f64()
        .map(f64::acos)
        .ok_or(NumericError::InvalidInput)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_integer_conversion() {
        assert_eq!(7i32.into_scalar().unwrap(), Decimal::from(7));
        assert_eq!(0u8.into_scalar().unwrap(), Decimal::ZERO);
        assert_eq!((-42i64).into_scalar().unwrap(), Decimal::from(-42));
    }

    #[test]
    fn test_float_conversion() {
        let x = 8.218f64.into_scalar().unwrap();
        assert_eq!(x.round_dp(3), Decimal::new(8218, 3));

        assert_eq!(f64::NAN.into_scalar(), Err(NumericError::NotFinite));
        assert_eq!(f64::INFINITY.into_scalar(), Err(NumericError::NotFinite));
        assert_eq!(1e40f64.into_scalar(), Err(NumericError::Overflow));
    }

    #[test]
    fn test_string_conversion() {
        assert_eq!("-1.25".into_scalar().unwrap(), Decimal::new(-125, 2));
        assert_eq!(" 42 ".into_scalar().unwrap(), Decimal::from(42));
        assert_eq!("1e-3".into_scalar().unwrap(), Decimal::new(1, 3));
        assert_eq!(
            String::from("0.5").into_scalar().unwrap(),
            Decimal::new(5, 1)
        );

        assert_eq!("".into_scalar(), Err(NumericError::InvalidInput));
        assert_eq!("abc".into_scalar(), Err(NumericError::InvalidInput));
    }

    #[test]
    fn test_sqrt_exact_squares() {
        assert_eq!(checked_sqrt(Decimal::from(25)).unwrap(), Decimal::from(5));
        assert_eq!(checked_sqrt(Decimal::ONE).unwrap(), Decimal::ONE);
        assert_eq!(
            checked_sqrt(Decimal::new(225, 2)).unwrap(),
            Decimal::new(15, 1)
        );
        assert_eq!(checked_sqrt(Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(
            checked_sqrt(Decimal::from(-4)),
            Err(NumericError::NegativeSqrt)
        );
    }

    #[test]
    fn test_sqrt_irrational() {
        let root = checked_sqrt(Decimal::TWO).unwrap();
        let error = (root * root - Decimal::TWO).abs();
        assert!(error < Decimal::new(1, 20), "error too large: {error}");
    }

    #[test]
    fn test_acos_clamps() {
        assert_eq!(checked_acos(Decimal::ONE).unwrap(), 0.0);
        assert_eq!(checked_acos(-Decimal::ONE).unwrap(), std::f64::consts::PI);
        // Marginally outside the domain still resolves
        assert_eq!(checked_acos(Decimal::new(100000001, 8)).unwrap(), 0.0);
        assert!((checked_acos(Decimal::ZERO).unwrap() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    }

    proptest! {
        #[test]
        fn prop_sqrt_squares_back(raw in 1i64..1_000_000_000i64, scale in 0u32..6) {
            let value = Decimal::new(raw, scale);
            let root = checked_sqrt(value).unwrap();
            let relative = ((root * root - value) / value).abs();
            prop_assert!(relative < Decimal::new(1, 18));
        }
    }
}
