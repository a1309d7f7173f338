use super::{Extremes, hue_degrees, normalize_hue};
use crate::color::Color;
use crate::component::{Component, EPSILON};

/// Hue in degrees `[0, 360)`, saturation and lightness in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hsl {
    /// Hue in degrees.
    pub h: f32,
    /// Saturation.
    pub s: f32,
    /// Lightness.
    pub l: f32,
}

impl Hsl {
    /// Creates an HSL value, wrapping the hue and clamping `s` and `l`.
    pub fn new(h: f32, s: f32, l: f32) -> Self {
        Self {
            h: normalize_hue(f64::from(h)) as f32,
            s: s.clamp(0.0, 1.0),
            l: l.clamp(0.0, 1.0),
        }
    }
}

impl<T: Component> Color<T> {
    /// Converts to HSL.
    pub fn to_hsl(self) -> Hsl {
        let [r, g, b, _] = self.to_unit_straight();
        let extremes = Extremes::of(r, g, b);
        let l = (extremes.max + extremes.min) / 2.0;

        if extremes.is_achromatic() {
            tracing::trace!("hsl conversion of achromatic color");
            return Hsl {
                h: 0.0,
                s: 0.0,
                l: l as f32,
            };
        }

        let chroma = extremes.chroma();
        let s = if l <= 0.5 {
            chroma / (extremes.max + extremes.min)
        } else {
            chroma / (2.0 - extremes.max - extremes.min)
        };

        Hsl {
            h: hue_degrees(r, g, b, extremes) as f32,
            s: s as f32,
            l: l as f32,
        }
    }

    /// Builds an opaque color from HSL.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let s = f64::from(hsl.s).clamp(0.0, 1.0);
        let l = f64::from(hsl.l).clamp(0.0, 1.0);

        if l < EPSILON {
            return Self::from_unit_straight([0.0, 0.0, 0.0, 1.0]);
        }
        if s < EPSILON {
            return Self::from_unit_straight([l, l, l, 1.0]);
        }

        let temp2 = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let temp1 = 2.0 * l - temp2;
        let hue = normalize_hue(f64::from(hsl.h)) / 360.0;

        Self::from_unit_straight([
            hue_channel(temp1, temp2, hue + 1.0 / 3.0),
            hue_channel(temp1, temp2, hue),
            hue_channel(temp1, temp2, hue - 1.0 / 3.0),
            1.0,
        ])
    }
}

/// One RGB channel of the HSL reverse transform at a hue position in turns.
fn hue_channel(temp1: f64, temp2: f64, position: f64) -> f64 {
    let position = position.rem_euclid(1.0);
    if position < 1.0 / 6.0 {
        temp1 + (temp2 - temp1) * 6.0 * position
    } else if position < 0.5 {
        temp2
    } else if position < 2.0 / 3.0 {
        temp1 + (temp2 - temp1) * (2.0 / 3.0 - position) * 6.0
    } else {
        temp1
    }
}

impl<T: Component> From<Color<T>> for Hsl {
    fn from(color: Color<T>) -> Self {
        color.to_hsl()
    }
}

impl<T: Component> From<Hsl> for Color<T> {
    fn from(hsl: Hsl) -> Self {
        Self::from_hsl(hsl)
    }
}
