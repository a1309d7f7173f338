use super::{Extremes, hue_degrees, normalize_hue};
use crate::color::Color;
use crate::component::{Component, EPSILON};

/// Hue in degrees `[0, 360)`, saturation and value in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsv {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Value.
    pub v: f32,
}

impl Hsv {
    /// Creates an HSV value, wrapping the hue and clamping `s` and `v`.
    pub fn new(h: f32, s: f32, v: f32) -> Self {
        Self {
            h: normalize_hue(f64::from(h)) as f32,
            s: s.clamp(0.0, 1.0),
            v: v.clamp(0.0, 1.0),
        }
    }
}

impl<T: Component> Color<T> {
    /// Converts to HSV.
    pub fn to_hsv(self) -> Hsv {
        let [r, g, b, _] = self.to_unit_straight();
        let extremes = Extremes::of(r, g, b);
        let v = extremes.max;

        if extremes.is_achromatic() {
            tracing::trace!("hsv conversion of achromatic color");
            return Hsv {
                h: 0.0,
                s: 0.0,
                v: v as f32,
            };
        }

        Hsv {
            h: hue_degrees(r, g, b, extremes) as f32,
            s: (extremes.chroma() / v) as f32,
            v: v as f32,
        }
    }

    /// Builds an opaque color from HSV.
    pub fn from_hsv(hsv: Hsv) -> Self {
        let s = f64::from(hsv.s).clamp(0.0, 1.0);
        let v = f64::from(hsv.v).clamp(0.0, 1.0);

        if s < EPSILON {
            return Self::from_unit_straight([v, v, v, 1.0]);
        }

        let position = normalize_hue(f64::from(hsv.h)) / 60.0;
        let sector = position.floor();
        let f = position - sector;

        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match sector as u8 % 6 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };

        Self::from_unit_straight([r, g, b, 1.0])
    }
}

impl<T: Component> From<Color<T>> for Hsv {
    fn from(color: Color<T>) -> Self {
        color.to_hsv()
    }
}

impl<T: Component> From<Hsv> for Color<T> {
    fn from(hsv: Hsv) -> Self {
        Self::from_hsv(hsv)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_hsv_primaries() {
        assert_eq!(Color::<u8>::from_hsv(Hsv::new(0.0, 1.0, 1.0)), Color::<u8>::RED);
        assert_eq!(Color::<u8>::from_hsv(Hsv::new(120.0, 1.0, 1.0)), Color::<u8>::LIME);
        assert_eq!(Color::<u8>::from_hsv(Hsv::new(240.0, 1.0, 1.0)), Color::<u8>::BLUE);
    }

    #[test]
    fn test_hue_360_is_red() {
        let hsv = Hsv {
            h: 360.0,
            s: 1.0,
            v: 1.0,
        };
        assert_eq!(Color::<u8>::from_hsv(hsv), Color::<u8>::RED);
    }

    #[test]
    fn test_black_has_no_saturation() {
        let hsv = Color::<u8>::BLACK.to_hsv();
        assert_eq!(hsv.s, 0.0);
        assert_eq!(hsv.v, 0.0);
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        for h in [0.0, 90.0, 359.0] {
            assert_eq!(Color::<u8>::from(Hsv::new(h, 0.0, 1.0)), Color::<u8>::WHITE);
        }
        assert_eq!(
            Color::<f32>::from_hsv(Hsv::new(200.0, 0.0, 0.5)),
            Color::rgb(0.5, 0.5, 0.5)
        );
    }

    #[test]
    fn test_to_hsv() {
        let hsv = Color::<u8>::rgb(255, 128, 0).to_hsv();
        assert!((hsv.h - 30.117).abs() < 1e-2);
        assert_eq!(hsv.s, 1.0);
        assert_eq!(hsv.v, 1.0);
    }

    #[test]
    fn test_new_wraps_hue() {
        assert_eq!(Hsv::new(-90.0, 2.0, -1.0), Hsv::new(270.0, 1.0, 0.0));
    }

    #[test]
    fn test_near_red_hue_stays_below_360() {
        let hsv = Color::<f64>::rgb(1.0, 0.0, 1e-9).to_hsv();
        assert!(hsv.h >= 0.0 && hsv.h < 360.0, "h = {}", hsv.h);
        assert_eq!(hsv.h, 0.0);
    }
}
