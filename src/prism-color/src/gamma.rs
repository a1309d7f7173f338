//! sRGB transfer curve.
//!
//! [`compress`] turns a linear-light signal into an sRGB-encoded one and
//! [`expand`] reverses it. Both work on `f32` and `f64`; the curve itself is
//! evaluated in `f64`.

use crate::color::Color;
use crate::component::Component;

/// Linear values at or below this are encoded by the linear toe.
pub const LINEAR_THRESHOLD: f64 = 0.003_130_8;

/// Encoded values at or below this are decoded by the linear toe.
pub const ENCODED_THRESHOLD: f64 = 0.040_45;

/// Slope of the linear toe.
pub const TOE_SLOPE: f64 = 12.92;

/// Exponent of the power segment.
pub const GAMMA: f64 = 2.4;

/// A floating-point signal the transfer curve can be applied to.
pub trait Signal: Component {}

impl Signal for f32 {}
impl Signal for f64 {}

/// Encodes a linear signal with the sRGB curve.
#[inline]
pub fn compress<F: Signal>(linear: F) -> F {
    F::from_f64(compress_f64(linear.to_f64()))
}

/// Decodes an sRGB signal back to linear light.
#[inline]
pub fn expand<F: Signal>(gamma: F) -> F {
    F::from_f64(expand_f64(gamma.to_f64()))
}

fn compress_f64(linear: f64) -> f64 {
    if linear <= LINEAR_THRESHOLD {
        linear * TOE_SLOPE
    } else {
        1.055 * linear.powf(1.0 / GAMMA) - 0.055
    }
}

fn expand_f64(gamma: f64) -> f64 {
    if gamma <= ENCODED_THRESHOLD {
        gamma / TOE_SLOPE
    } else {
        ((gamma + 0.055) / 1.055).powf(GAMMA)
    }
}

impl<T: Component> Color<T> {
    /// Encodes R, G and B with the sRGB curve. Alpha passes through.
    ///
    /// The color is un-premultiplied before the curve is applied and
    /// re-premultiplied afterwards. A zero-alpha color is curved as stored.
    pub fn compress(self) -> Self {
        self.map_straight(compress_f64)
    }

    /// Decodes R, G and B from sRGB to linear light. Alpha passes through.
    pub fn expand(self) -> Self {
        self.map_straight(expand_f64)
    }

    fn map_straight(self, curve: fn(f64) -> f64) -> Self {
        let [r, g, b, a] = self.to_unit_straight();
        let mapped = [curve(r), curve(g), curve(b), a];
        if T::from_unit(a).equals(T::ZERO) {
            // Nothing to re-premultiply against; keep the curved channels.
            tracing::trace!("gamma curve applied to zero-alpha color as stored");
            return Self::from_array(mapped.map(T::from_unit));
        }
        Self::from_unit_straight(mapped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples() -> impl Iterator<Item = f64> {
        (0..=100).map(|i| f64::from(i) / 100.0)
    }

    #[test]
    fn test_known_values() {
        assert_eq!(compress(0.0f64), 0.0);
        assert!((compress(1.0f64) - 1.0).abs() < 1e-12);
        assert!((compress(0.002f64) - 0.025_84).abs() < 1e-12);
        assert!((expand(0.5f64) - 0.214_041).abs() < 1e-6);
        assert!((expand(0.04f32) - 0.04 / 12.92).abs() < 1e-7);
    }

    #[test]
    fn test_expand_inverts_compress() {
        for x in samples() {
            assert!((expand(compress(x)) - x).abs() < 1e-9, "x = {x}");
            assert!((compress(expand(x)) - x).abs() < 1e-9, "x = {x}");
        }
    }

    #[test]
    fn test_f32_signal() {
        for x in samples().map(|x| x as f32) {
            assert!((expand(compress(x)) - x).abs() < 1e-5, "x = {x}");
        }
    }

    #[test]
    fn test_curve_is_monotonic() {
        let encoded: Vec<f64> = samples().map(compress).collect();
        assert!(encoded.windows(2).all(|pair| pair[0] < pair[1]));
    }

    mod color_tests {
        use super::*;

        #[test]
        fn test_alpha_passes_through() {
            let c = Color::<f32>::new(0.1, 0.2, 0.3, 0.5);
            assert_eq!(c.compress().a(), 0.5);
            assert_eq!(c.expand().a(), 0.5);
        }

        #[test]
        fn test_color_round_trip() {
            let c = Color::<f64>::new(0.1, 0.2, 0.3, 0.5);
            assert_eq!(c.compress().expand(), c);
        }

        #[test]
        fn test_operates_on_straight_alpha() {
            // Straight red 0.5 at half alpha, stored premultiplied as 0.25.
            let c = Color::<f64>::new(0.25, 0.0, 0.0, 0.5);
            let expected = compress(0.5f64) * 0.5;
            assert!((c.compress().r() - expected).abs() < 1e-12);
        }

        #[test_log::test]
        fn test_zero_alpha_keeps_channels() {
            let c = Color::<f32>::new(0.3, 0.3, 0.3, 0.0);
            let encoded = c.compress();
            assert!((encoded.r() - compress(0.3f32)).abs() < 1e-6);
            assert_eq!(encoded.a(), 0.0);
            assert_eq!(encoded.expand(), c);

            let wrapped = Color::<u8>::new(250, 0, 0, 0).compress();
            assert_eq!(wrapped.to_array(), [253, 0, 0, 0]);
        }

        #[test]
        fn test_integer_color() {
            let mid = Color::<u8>::rgb(128, 0, 255);
            let encoded = mid.compress();
            assert_eq!(encoded.b(), 255);
            assert_eq!(encoded.g(), 0);
            assert!(encoded.r() > 128);
            assert!(encoded.expand().r().abs_diff(128) <= 1);
        }
    }
}
