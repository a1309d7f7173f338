//! Conversions between [`Color`](crate::Color) and alternate color models.
//!
//! Every forward conversion clamps the color with `limited`, un-premultiplies
//! it and works on unit floats. Every reverse conversion produces an opaque
//! color; use [`Color::with_alpha`](crate::Color::with_alpha) to supply another
//! alpha. Degenerate inputs (black, gray, zero lightness) short-circuit to a
//! defined result instead of dividing by a value near zero.

mod cmyk;
mod hsl;
mod hsv;
mod ycbcr;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use ycbcr::YCbCr;

use crate::component::EPSILON;

/// Channel extremes of a straight-alpha unit RGB triple.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Extremes {
    pub max: f64,
    pub min: f64,
}

impl Extremes {
    pub fn of(r: f64, g: f64, b: f64) -> Self {
        Self {
            max: r.max(g).max(b),
            min: r.min(g).min(b),
        }
    }

    pub fn chroma(self) -> f64 {
        self.max - self.min
    }

    /// Whether the triple is a gray with no meaningful hue.
    pub fn is_achromatic(self) -> bool {
        self.chroma() < EPSILON
    }
}

/// Hue in degrees `[0, 360)` for a chromatic triple, keyed by the channel
/// holding the maximum.
pub(crate) fn hue_degrees(r: f64, g: f64, b: f64, extremes: Extremes) -> f64 {
    let chroma = extremes.chroma();
    let sector = if r == extremes.max {
        (g - b) / chroma
    } else if g == extremes.max {
        2.0 + (b - r) / chroma
    } else {
        4.0 + (r - g) / chroma
    };
    normalize_hue(sector * 60.0)
}

/// Normalizes a hue into `[0, 360)`, treating values within epsilon of 360 as 0.
pub(crate) fn normalize_hue(hue: f64) -> f64 {
    let hue = hue.rem_euclid(360.0);
    if (hue - 360.0).abs() < EPSILON { 0.0 } else { hue }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_hues() {
        let hue = |r, g, b| hue_degrees(r, g, b, Extremes::of(r, g, b));
        assert_eq!(hue(1.0, 0.0, 0.0), 0.0);
        assert_eq!(hue(0.0, 1.0, 0.0), 120.0);
        assert_eq!(hue(0.0, 0.0, 1.0), 240.0);
        assert_eq!(hue(1.0, 0.0, 1.0), 300.0);
    }

    #[test]
    fn test_hue_just_below_red_wraps_to_zero() {
        let hue = hue_degrees(1.0, 0.0, 1e-9, Extremes::of(1.0, 0.0, 1e-9));
        assert_eq!(hue, 0.0);
    }

    #[test]
    fn test_achromatic() {
        assert!(Extremes::of(0.3, 0.3, 0.3).is_achromatic());
        assert!(!Extremes::of(0.3, 0.4, 0.3).is_achromatic());
    }

    #[test]
    fn test_normalize_hue() {
        assert_eq!(normalize_hue(360.0), 0.0);
        assert_eq!(normalize_hue(-90.0), 270.0);
        assert_eq!(normalize_hue(725.0), 5.0);
        assert_eq!(normalize_hue(-0.000_01), 0.0);
    }
}
