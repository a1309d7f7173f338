use crate::color::Color;
use crate::component::{Component, EPSILON};

/// Subtractive cyan, magenta, yellow and key (black), each in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cmyk {
    /// Cyan.
    pub c: f32,
    /// Magenta.
    pub m: f32,
    /// Yellow.
    pub y: f32,
    /// Key (black).
    pub k: f32,
}

impl Cmyk {
    /// Pure black: no ink except full key.
    pub const BLACK: Self = Self {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 1.0,
    };

    /// Creates a CMYK value, clamping each channel into `0.0..=1.0`.
    pub fn new(c: f32, m: f32, y: f32, k: f32) -> Self {
        Self {
            c: c.clamp(0.0, 1.0),
            m: m.clamp(0.0, 1.0),
            y: y.clamp(0.0, 1.0),
            k: k.clamp(0.0, 1.0),
        }
    }
}

impl<T: Component> Color<T> {
    /// Converts to CMYK.
    pub fn to_cmyk(self) -> Cmyk {
        let [r, g, b, _] = self.to_unit_straight();
        let (c, m, y) = (1.0 - r, 1.0 - g, 1.0 - b);
        let k = c.min(m).min(y);

        if (k - 1.0).abs() <= EPSILON {
            tracing::trace!("cmyk conversion short-circuited to black");
            return Cmyk::BLACK;
        }

        let ink = |channel: f64| ((channel - k) / (1.0 - k)) as f32;
        Cmyk {
            c: ink(c),
            m: ink(m),
            y: ink(y),
            k: k as f32,
        }
    }

    /// Builds an opaque color from CMYK.
    pub fn from_cmyk(cmyk: Cmyk) -> Self {
        let key = 1.0 - f64::from(cmyk.k);
        let channel = |ink: f32| ((1.0 - f64::from(ink)) * key).clamp(0.0, 1.0);
        Self::from_unit_straight([channel(cmyk.c), channel(cmyk.m), channel(cmyk.y), 1.0])
    }
}

impl<T: Component> From<Color<T>> for Cmyk {
    fn from(color: Color<T>) -> Self {
        color.to_cmyk()
    }
}

impl<T: Component> From<Cmyk> for Color<T> {
    fn from(cmyk: Cmyk) -> Self {
        Self::from_cmyk(cmyk)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(lhs: Cmyk, rhs: Cmyk) -> bool {
        [(lhs.c, rhs.c), (lhs.m, rhs.m), (lhs.y, rhs.y), (lhs.k, rhs.k)]
            .iter()
            .all(|(a, b)| (a - b).abs() < 1e-4)
    }

    #[test]
    fn test_primaries() {
        assert!(approx(
            Color::<u8>::RED.to_cmyk(),
            Cmyk::new(0.0, 1.0, 1.0, 0.0)
        ));
        assert!(approx(
            Color::<u8>::WHITE.to_cmyk(),
            Cmyk::new(0.0, 0.0, 0.0, 0.0)
        ));
        assert!(approx(
            Color::<u8>::rgb(128, 128, 0).to_cmyk(),
            Cmyk::new(0.0, 0.0, 1.0, 1.0 - 128.0 / 255.0)
        ));
    }

    #[test_log::test]
    fn test_black_short_circuits() {
        assert_eq!(Color::<u8>::BLACK.to_cmyk(), Cmyk::BLACK);
        assert_eq!(Color::<f32>::rgb(0.0, 0.0, 0.0).to_cmyk(), Cmyk::BLACK);
    }

    #[test]
    fn test_from_cmyk_is_opaque() {
        let color = Color::<u8>::from_cmyk(Cmyk::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(color, Color::<u8>::RED);
        assert_eq!(Color::<u8>::from(Cmyk::BLACK), Color::<u8>::BLACK);
    }

    #[test]
    fn test_new_clamps() {
        assert_eq!(Cmyk::new(-1.0, 2.0, 0.5, 1.0), Cmyk::new(0.0, 1.0, 0.5, 1.0));
    }

    #[test]
    fn test_forward_ignores_alpha() {
        // Premultiplied half-alpha red is still red once un-premultiplied.
        let translucent = Color::<f32>::rgb(1.0, 0.0, 0.0).with_alpha(0.5);
        assert!(approx(Cmyk::from(translucent), Cmyk::new(0.0, 1.0, 1.0, 0.0)));
    }
}
