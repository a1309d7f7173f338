//! Scalar component representations.
//!
//! A [`Color`](crate::Color) stores its four channels in one of a closed set of
//! numeric types. Each of those types implements [`Component`], which defines
//! the per-representation arithmetic the color operators are built on:
//!
//! | Representation | Natural range | Overflow | Equality |
//! |----------------|---------------|----------|----------|
//! | `u8`, `u16`, `u32`, `u64` | `0..=MAX` | wraps | exact |
//! | `i8`, `i16`, `i32`, `i64` | `0..=MAX` | wraps | exact |
//! | `f32`, `f64` | `0.0..=1.0` | IEEE | `abs(a - b) < 1e-4` |
//!
//! The trait is sealed. Asking for a `Color<u128>` or `Color<char>` is a
//! compile error rather than a runtime failure.

use crate::representation::Representation;
use std::fmt;

/// Tolerance used by floating-point component equality.
pub const EPSILON: f64 = 1e-4;

mod sealed {
    pub trait Sealed {}
}

/// Scalar operations for one component representation.
///
/// Integer division by zero is defined to return zero, mirroring the
/// degenerate policy used for zero alpha. Floating-point division follows IEEE.
pub trait Component:
    sealed::Sealed + Copy + Default + PartialOrd + fmt::Debug + Send + Sync + 'static
{
    /// The zero value.
    const ZERO: Self;

    /// Full intensity: `MAX` for integers, `1.0` for floats.
    const MAX: Self;

    /// Whether this is a floating-point representation.
    const IS_FLOAT: bool;

    /// Runtime tag for this representation.
    const REPRESENTATION: Representation;

    /// Adds two components, wrapping on integer overflow.
    fn add(self, rhs: Self) -> Self;

    /// Subtracts two components, wrapping on integer overflow.
    fn sub(self, rhs: Self) -> Self;

    /// Multiplies two components, wrapping on integer overflow.
    fn mul(self, rhs: Self) -> Self;

    /// Divides two components. Integer division by zero yields zero.
    fn div(self, rhs: Self) -> Self;

    /// Computes `self * rhs * 0.5`, truncated back into the representation.
    fn average(self, rhs: Self) -> Self;

    /// Exact equality for integers, `EPSILON`-tolerant equality for floats.
    fn equals(self, rhs: Self) -> bool;

    /// Widens the raw value to `f64`.
    fn to_f64(self) -> f64;

    /// Narrows an `f64` into the representation.
    ///
    /// Integers round to nearest and saturate at their bounds (NaN becomes 0).
    fn from_f64(value: f64) -> Self;

    /// Formats the component for `Display`.
    fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result;

    /// Maps the value into `0.0..=1.0` relative to [`Component::MAX`].
    #[inline]
    fn to_unit(self) -> f64 {
        self.to_f64() / Self::MAX.to_f64()
    }

    /// Inverse of [`Component::to_unit`].
    #[inline]
    fn from_unit(unit: f64) -> Self {
        Self::from_f64(unit * Self::MAX.to_f64())
    }

    /// Clamps the value into `ZERO..=MAX`.
    #[inline]
    fn clamp_natural(self) -> Self {
        if self < Self::ZERO {
            Self::ZERO
        } else if self > Self::MAX {
            Self::MAX
        } else {
            self
        }
    }

    /// Interpolates `self + (to - self) * amount` without intermediate wraparound.
    #[inline]
    fn lerp(self, to: Self, amount: f64) -> Self {
        // Exact endpoints: 64-bit integers do not survive an f64 round trip.
        if amount == 0.0 {
            return self;
        }
        if amount == 1.0 {
            return to;
        }
        let from = self.to_f64();
        Self::from_f64(from + (to.to_f64() - from) * amount)
    }
}

macro_rules! impl_integer_component {
    ($t:ty, $wide:ty, $repr:expr) => {
        impl sealed::Sealed for $t {}

        impl Component for $t {
            const ZERO: Self = 0;
            const MAX: Self = <$t>::MAX;
            const IS_FLOAT: bool = false;
            const REPRESENTATION: Representation = $repr;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn div(self, rhs: Self) -> Self {
                if rhs == 0 {
                    0
                } else {
                    <$t>::wrapping_div(self, rhs)
                }
            }

            #[inline]
            fn average(self, rhs: Self) -> Self {
                ((self as $wide * rhs as $wide) / 2) as $t
            }

            #[inline]
            fn equals(self, rhs: Self) -> bool {
                self == rhs
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value.round() as $t
            }

            fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self)
            }
        }
    };
}

macro_rules! impl_float_component {
    ($t:ty, $repr:expr) => {
        impl sealed::Sealed for $t {}

        impl Component for $t {
            const ZERO: Self = 0.0;
            const MAX: Self = 1.0;
            const IS_FLOAT: bool = true;
            const REPRESENTATION: Representation = $repr;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                self + rhs
            }

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                self - rhs
            }

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                self * rhs
            }

            #[inline]
            fn div(self, rhs: Self) -> Self {
                self / rhs
            }

            #[inline]
            fn average(self, rhs: Self) -> Self {
                self * rhs * 0.5
            }

            #[inline]
            fn equals(self, rhs: Self) -> bool {
                ((self - rhs) as f64).abs() < EPSILON
            }

            #[inline]
            fn to_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn from_f64(value: f64) -> Self {
                value as $t
            }

            fn fmt_component(self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&format_fraction(self as f64))
            }
        }
    };
}

impl_integer_component!(u8, u16, Representation::U8);
impl_integer_component!(i8, i16, Representation::I8);
impl_integer_component!(u16, u32, Representation::U16);
impl_integer_component!(i16, i32, Representation::I16);
impl_integer_component!(u32, u64, Representation::U32);
impl_integer_component!(i32, i64, Representation::I32);
impl_integer_component!(u64, u128, Representation::U64);
impl_integer_component!(i64, i128, Representation::I64);
impl_float_component!(f32, Representation::F32);
impl_float_component!(f64, Representation::F64);

/// Renders a float with at most two fractional digits, dropping trailing zeros.
fn format_fraction(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    if text == "-0" {
        "0".to_string()
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod integer_tests {
        use super::*;

        #[test]
        fn test_add_wraps() {
            assert_eq!(Component::add(250u8, 10), 4);
            assert_eq!(Component::add(127i8, 1), -128);
            assert_eq!(Component::add(u64::MAX, 2), 1);
        }

        #[test]
        fn test_sub_wraps() {
            assert_eq!(Component::sub(3u8, 5), 254);
            assert_eq!(Component::sub(i16::MIN, 1), i16::MAX);
        }

        #[test]
        fn test_mul_wraps() {
            assert_eq!(Component::mul(16u8, 17), 16);
            assert_eq!(Component::mul(300u16, 300), 24464);
        }

        #[test]
        fn test_div_by_zero_is_zero() {
            assert_eq!(Component::div(200u8, 0), 0);
            assert_eq!(Component::div(-7i32, 0), 0);
            assert_eq!(Component::div(9u64, 2), 4);
        }

        #[test]
        fn test_div_min_by_negative_one_wraps() {
            assert_eq!(Component::div(i8::MIN, -1), i8::MIN);
        }

        #[test]
        fn test_average_is_half_product() {
            assert_eq!(Component::average(10u8, 6), 30);
            assert_eq!(Component::average(20u8, 20), 200);
            // 255 * 255 / 2 = 32512, truncated to the low byte.
            assert_eq!(Component::average(255u8, 255), 0);
            assert_eq!(Component::average(-3i32, 5), -7);
        }

        #[test]
        fn test_equals_is_exact() {
            assert!(Component::equals(5u32, 5));
            assert!(!Component::equals(5u32, 6));
        }

        #[test]
        fn test_from_f64_rounds_and_saturates() {
            assert_eq!(<u8 as Component>::from_f64(127.5), 128);
            assert_eq!(<u8 as Component>::from_f64(300.0), 255);
            assert_eq!(<u8 as Component>::from_f64(-4.0), 0);
            assert_eq!(<i8 as Component>::from_f64(f64::NAN), 0);
        }

        #[test]
        fn test_unit_mapping() {
            assert_eq!(255u8.to_unit(), 1.0);
            assert_eq!(<u16 as Component>::from_unit(1.0), u16::MAX);
            assert_eq!(<i8 as Component>::from_unit(1.0), 127);
            assert_eq!(<u8 as Component>::from_unit(0.5), 128);
        }

        #[test]
        fn test_clamp_natural() {
            assert_eq!((-5i16).clamp_natural(), 0);
            assert_eq!(200u8.clamp_natural(), 200);
        }

        #[test]
        fn test_lerp_without_wraparound() {
            assert_eq!(Component::lerp(200u8, 100, 0.5), 150);
            assert_eq!(Component::lerp(u64::MAX - 1, 3, 0.0), u64::MAX - 1);
            assert_eq!(Component::lerp(u64::MAX - 1, 3, 1.0), 3);
        }
    }

    mod float_tests {
        use super::*;

        #[test]
        fn test_ieee_division() {
            assert!(Component::div(1.0f32, 0.0).is_infinite());
            assert!(Component::div(0.0f64, 0.0).is_nan());
        }

        #[test]
        fn test_equals_uses_epsilon() {
            assert!(Component::equals(0.5f32, 0.500_05));
            assert!(!Component::equals(0.5f32, 0.5002));
            assert!(Component::equals(0.25f64, 0.25 + 5e-5));
            assert!(!Component::equals(0.25f64, 0.25 + 2e-4));
        }

        #[test]
        fn test_average_is_half_product() {
            assert_eq!(Component::average(0.5f64, 0.5), 0.125);
        }

        #[test]
        fn test_clamp_natural() {
            assert_eq!(1.5f32.clamp_natural(), 1.0);
            assert_eq!((-0.2f64).clamp_natural(), 0.0);
        }

        #[test]
        fn test_format_fraction() {
            assert_eq!(format_fraction(0.5), "0.5");
            assert_eq!(format_fraction(1.0), "1");
            assert_eq!(format_fraction(0.126), "0.13");
            assert_eq!(format_fraction(-0.001), "0");
        }
    }

    #[test]
    fn test_representation_tags() {
        assert_eq!(<u8 as Component>::REPRESENTATION, Representation::U8);
        assert_eq!(<f64 as Component>::REPRESENTATION, Representation::F64);
        assert!(<f32 as Component>::IS_FLOAT);
        assert!(!<i64 as Component>::IS_FLOAT);
    }
}
