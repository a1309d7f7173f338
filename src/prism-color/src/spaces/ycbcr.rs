use crate::color::Color;
use crate::component::Component;

/// Full-range BT.601 luma and chroma, each in `0.0..=255.0` with chroma
/// centred on 128.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct YCbCr {
    /// Luma.
    pub y: f32,
    /// Blue-difference chroma.
    pub cb: f32,
    /// Red-difference chroma.
    pub cr: f32,
}

/// Chroma value of a neutral gray.
pub const CHROMA_OFFSET: f64 = 128.0;

impl YCbCr {
    /// Creates a YCbCr value, clamping each channel into `0.0..=255.0`.
    pub fn new(y: f32, cb: f32, cr: f32) -> Self {
        Self {
            y: y.clamp(0.0, 255.0),
            cb: cb.clamp(0.0, 255.0),
            cr: cr.clamp(0.0, 255.0),
        }
    }
}

impl<T: Component> Color<T> {
    /// Converts to YCbCr.
    pub fn to_ycbcr(self) -> YCbCr {
        let [r, g, b, _] = self.to_unit_straight().map(|unit| unit * 255.0);
        YCbCr {
            y: (0.299 * r + 0.587 * g + 0.114 * b) as f32,
            cb: (CHROMA_OFFSET - 0.168_736 * r - 0.331_264 * g + 0.5 * b) as f32,
            cr: (CHROMA_OFFSET + 0.5 * r - 0.418_688 * g - 0.081_312 * b) as f32,
        }
    }

    /// Builds an opaque color from YCbCr, clamping out-of-gamut results.
    pub fn from_ycbcr(ycbcr: YCbCr) -> Self {
        let y = f64::from(ycbcr.y);
        let cb = f64::from(ycbcr.cb) - CHROMA_OFFSET;
        let cr = f64::from(ycbcr.cr) - CHROMA_OFFSET;

        let unit = |intensity: f64| (intensity / 255.0).clamp(0.0, 1.0);
        Self::from_unit_straight([
            unit(y + 1.402 * cr),
            unit(y - 0.344_14 * cb - 0.714_14 * cr),
            unit(y + 1.772 * cb),
            1.0,
        ])
    }
}

impl<T: Component> From<Color<T>> for YCbCr {
    fn from(color: Color<T>) -> Self {
        color.to_ycbcr()
    }
}

impl<T: Component> From<YCbCr> for Color<T> {
    fn from(ycbcr: YCbCr) -> Self {
        Self::from_ycbcr(ycbcr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gray_has_neutral_chroma() {
        let gray = Color::<u8>::rgb(100, 100, 100).to_ycbcr();
        assert!((gray.y - 100.0).abs() < 1e-3);
        assert!((gray.cb - 128.0).abs() < 1e-3);
        assert!((gray.cr - 128.0).abs() < 1e-3);
    }

    #[test]
    fn test_red() {
        let red = Color::<u8>::RED.to_ycbcr();
        assert!((red.y - 76.245).abs() < 1e-3);
        assert!((red.cb - 84.972).abs() < 1e-3);
        assert!((red.cr - 255.5).abs() < 1e-3);
    }

    #[test]
    fn test_out_of_gamut_is_clamped() {
        let color = Color::<u8>::from_ycbcr(YCbCr {
            y: 255.0,
            cb: 255.0,
            cr: 255.0,
        });
        assert_eq!(color.r(), 255);
        assert_eq!(color.b(), 255);
        assert!(color.is_opaque());
    }

    #[test]
    fn test_round_trip_within_rounding() {
        for color in [
            Color::<u8>::rgb(12, 200, 99),
            Color::<u8>::CORNFLOWER_BLUE,
            Color::<u8>::GOLD,
        ] {
            let back = Color::<u8>::from(color.to_ycbcr());
            for (lhs, rhs) in color.to_array().into_iter().zip(back.to_array()) {
                assert!(lhs.abs_diff(rhs) <= 1, "{color} vs {back}");
            }
        }
    }
}
