//! Premultiplied RGBA color values.
//!
//! This module provides the [`Color`] type, a four-component value generic
//! over its [`Component`] representation. Colors are stored with
//! **premultiplied alpha**: R, G and B are already scaled by A relative to the
//! representation's maximum.
//!
//! # Representation
//!
//! The four components live in a `#[repr(C)]` `[T; 4]` array in R, G, B, A
//! order. Every operator is component-wise and returns a new value; a color is
//! never mutated in place.
//!
//! # Supported Formats
//!
//! - Hex strings: `#RGB`, `#RRGGBB`, `#AARRGGBB` (alpha first)
//! - Raw component arrays and tuples
//! - W3C color names (see [`crate::named`])
//!
//! # Examples
//!
//! ```
//! use prism_color::Color;
//!
//! let red = Color::<u8>::from_hex("#FF0000").unwrap();
//! assert_eq!(red, Color::new(255, 0, 0, 255));
//!
//! // Half-transparent red, premultiplied.
//! let overlay = Color::<f32>::rgb(1.0, 0.0, 0.0).with_alpha(0.5);
//! assert_eq!(overlay, Color::new(0.5, 0.0, 0.0, 0.5));
//!
//! // Cast between representations by rescaling.
//! let wide: Color<u16> = red.cast();
//! assert_eq!(wide.r(), u16::MAX);
//! ```

use crate::component::Component;
use crate::error::{ColorError, FormatIssue, Result};
use crate::named;
use crate::representation::Representation;
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

const R: usize = 0;
const G: usize = 1;
const B: usize = 2;
const A: usize = 3;

/// A premultiplied RGBA color with components of representation `T`.
#[derive(Clone, Copy)]
#[repr(C)]
pub struct Color<T> {
    components: [T; 4],
}

impl<T: Component> Default for Color<T> {
    fn default() -> Self {
        Self::EMPTY
    }
}

impl<T: Component> fmt::Debug for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Color")
            .field("r", &self.r())
            .field("g", &self.g())
            .field("b", &self.b())
            .field("a", &self.a())
            .finish()
    }
}

impl<T: Component> fmt::Display for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("Color [ Empty ]");
        }
        f.write_str("Color [ R=")?;
        self.r().fmt_component(f)?;
        f.write_str(", G=")?;
        self.g().fmt_component(f)?;
        f.write_str(", B=")?;
        self.b().fmt_component(f)?;
        f.write_str(", A=")?;
        self.a().fmt_component(f)?;
        f.write_str(" ]")
    }
}

// ============================================================================
// Constructors and accessors
// ============================================================================

impl<T: Component> Color<T> {
    /// The all-zero color (transparent black).
    pub const EMPTY: Self = Self {
        components: [T::ZERO; 4],
    };

    /// Creates a color from premultiplied components.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self {
            components: [r, g, b, a],
        }
    }

    /// Creates an opaque color (alpha = `T::MAX`).
    #[inline]
    pub const fn rgb(r: T, g: T, b: T) -> Self {
        Self::new(r, g, b, T::MAX)
    }

    /// Creates a color from a raw `[r, g, b, a]` vector.
    #[inline]
    pub const fn from_array(components: [T; 4]) -> Self {
        Self { components }
    }

    /// Returns the raw `[r, g, b, a]` vector.
    #[inline]
    pub const fn to_array(self) -> [T; 4] {
        self.components
    }

    /// Red component.
    #[inline]
    pub const fn r(&self) -> T {
        self.components[R]
    }

    /// Green component.
    #[inline]
    pub const fn g(&self) -> T {
        self.components[G]
    }

    /// Blue component.
    #[inline]
    pub const fn b(&self) -> T {
        self.components[B]
    }

    /// Alpha component.
    #[inline]
    pub const fn a(&self) -> T {
        self.components[A]
    }

    /// Returns the runtime tag of `T`.
    #[inline]
    pub fn representation(&self) -> Representation {
        T::REPRESENTATION
    }

    #[inline]
    fn map(self, f: impl Fn(T) -> T) -> Self {
        Self::from_array(self.components.map(f))
    }

    #[inline]
    fn zip_with(self, rhs: Self, f: impl Fn(T, T) -> T) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            f(self.components[i], rhs.components[i])
        }))
    }
}

// ============================================================================
// Hex parsing and formatting
// ============================================================================

impl<T: Component> Color<T> {
    /// Parses a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RGB` (shorthand, each nibble duplicated, alpha = max)
    /// - `#RRGGBB` (alpha = max)
    /// - `#AARRGGBB` (alpha first)
    ///
    /// The `#` prefix is optional. Bytes are rescaled from `0..=255` into the
    /// natural range of `T` and stored as-is, exactly like [`Color::new`].
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_color::Color;
    ///
    /// let red = Color::<u8>::from_hex("#F00").unwrap();
    /// let translucent = Color::<u8>::from_hex("80FF0000").unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0, 255));
    /// assert_eq!(translucent.a(), 128);
    /// ```
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let bytes = digits.as_bytes();

        let reject = |reason: FormatIssue| {
            tracing::debug!(input = hex, %reason, "rejected hex color");
            ColorError::invalid_format(hex, reason)
        };

        if !matches!(bytes.len(), 3 | 6 | 8) {
            return Err(reject(FormatIssue::InvalidLength(bytes.len())));
        }
        if !bytes.iter().all(u8::is_ascii_hexdigit) {
            return Err(reject(FormatIssue::InvalidHexChar));
        }

        let byte_at = |i: usize| hex_nibble(bytes[i]) << 4 | hex_nibble(bytes[i + 1]);
        let [a, r, g, b] = match bytes.len() {
            3 => {
                let short = |i: usize| hex_nibble(bytes[i]) * 0x11;
                [0xFF, short(0), short(1), short(2)]
            }
            6 => [0xFF, byte_at(0), byte_at(2), byte_at(4)],
            _ => [byte_at(0), byte_at(2), byte_at(4), byte_at(6)],
        };

        Ok(Self::from_array(
            [r, g, b, a].map(|byte| T::from_unit(f64::from(byte) / 255.0)),
        ))
    }

    /// Renders the color as `#AARRGGBB`, rescaled to 8-bit components.
    ///
    /// This is the inverse of [`Color::from_hex`] for the 8-digit grammar.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.cast::<u8>().to_array();
        format!("#{:02X}{:02X}{:02X}{:02X}", a, r, g, b)
    }
}

/// Value of an ASCII hex digit. Callers validate the byte first.
fn hex_nibble(byte: u8) -> u8 {
    match byte {
        b'0'..=b'9' => byte - b'0',
        b'a'..=b'f' => byte - b'a' + 10,
        b'A'..=b'F' => byte - b'A' + 10,
        _ => 0,
    }
}

// ============================================================================
// Named color parsing
// ============================================================================

impl<T: Component> Color<T> {
    /// Returns the W3C named color, or `None` if the name is unknown.
    ///
    /// Lookup is case-insensitive and accepts the `grey` spellings.
    pub fn from_name(name: &str) -> Option<Self> {
        named::lookup(name).map(|color| color.cast())
    }

    /// Parses a color from a W3C color name or a hex literal.
    ///
    /// # Examples
    ///
    /// ```
    /// use prism_color::Color;
    ///
    /// let red = Color::<u8>::parse("Red").unwrap();
    /// let hex_blue = Color::<u8>::parse("#0000FF").unwrap();
    /// assert_eq!(red, Color::new(255, 0, 0, 255));
    /// assert_eq!(hex_blue, Color::new(0, 0, 255, 255));
    /// ```
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(color) = Self::from_name(input) {
            return Ok(color);
        }

        Self::from_hex(input).map_err(|err| {
            let looks_like_hex =
                input.starts_with('#') || input.bytes().all(|byte| byte.is_ascii_hexdigit());
            if looks_like_hex {
                err
            } else {
                tracing::debug!(input, "unknown color name");
                ColorError::invalid_format(input, FormatIssue::UnknownName)
            }
        })
    }
}

impl<T: Component> FromStr for Color<T> {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ============================================================================
// Equality and identity
// ============================================================================

impl<T: Component> Color<T> {
    /// Returns whether all four components are equal per [`Component::equals`].
    #[inline]
    pub fn equals(&self, other: &Self) -> bool {
        self.components
            .iter()
            .zip(other.components.iter())
            .all(|(&lhs, &rhs)| lhs.equals(rhs))
    }

    /// Returns whether this is the all-zero color.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.equals(&Self::EMPTY)
    }

    /// Returns whether alpha is at the representation's maximum.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a().equals(T::MAX)
    }
}

impl<T: Component> PartialEq for Color<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

impl<T: Component> Add for Color<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::add)
    }
}

impl<T: Component> Sub for Color<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::sub)
    }
}

impl<T: Component> Mul for Color<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        self.zip_with(rhs, T::mul)
    }
}

impl<T: Component> Mul<T> for Color<T> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        self.map(|c| c.mul(rhs))
    }
}

impl<T: Component> Div<T> for Color<T> {
    type Output = Self;

    /// Integer division by zero yields [`Color::EMPTY`].
    fn div(self, rhs: T) -> Self {
        self.map(|c| c.div(rhs))
    }
}

impl<T: Component> Color<T> {
    /// Multiplies every component by a fractional factor.
    ///
    /// Integer results round to nearest and saturate.
    #[inline]
    pub fn scale(self, factor: f32) -> Self {
        let factor = f64::from(factor);
        self.map(|c| T::from_f64(c.to_f64() * factor))
    }

    /// Component-wise [`Component::average`].
    #[inline]
    pub fn average(self, other: Self) -> Self {
        self.zip_with(other, T::average)
    }

    /// Linearly interpolates towards `to`.
    ///
    /// Computes `self + (to - self) * amount` per component in `f64`, so
    /// integer colors do not wrap. `amount` is not clamped; `0.0` and `1.0`
    /// return the endpoints exactly.
    #[inline]
    pub fn lerp(self, to: Self, amount: f32) -> Self {
        let amount = f64::from(amount);
        self.zip_with(to, |from, to| from.lerp(to, amount))
    }
}

// ============================================================================
// Range, representation and alpha
// ============================================================================

impl<T: Component> Color<T> {
    /// Clamps every component into `ZERO..=MAX`.
    #[inline]
    pub fn limited(self) -> Self {
        self.map(Component::clamp_natural)
    }

    /// Converts to representation `U`, rescaling each component between the
    /// natural ranges. Premultiplication is unchanged.
    #[inline]
    pub fn cast<U: Component>(self) -> Color<U> {
        Color::from_array(self.components.map(|c| U::from_unit(c.to_unit())))
    }

    /// Divides R, G and B by alpha.
    ///
    /// A color with zero alpha is returned unchanged.
    pub fn to_non_premultiplied(self) -> Self {
        if self.a().equals(T::ZERO) {
            tracing::trace!("un-premultiply skipped for zero alpha");
            return self;
        }
        let alpha = self.a().to_unit();
        let [r, g, b, a] = self.components;
        let unscale = |c: T| T::from_f64(c.to_f64() / alpha);
        Self::new(unscale(r), unscale(g), unscale(b), a)
    }

    /// Multiplies R, G and B by alpha.
    #[allow(clippy::wrong_self_convention)]
    pub fn from_non_premultiplied(self) -> Self {
        let alpha = self.a().to_unit();
        let [r, g, b, a] = self.components;
        let scale = |c: T| T::from_f64(c.to_f64() * alpha);
        Self::new(scale(r), scale(g), scale(b), a)
    }

    /// Replaces alpha, re-premultiplying the color channels.
    pub fn with_alpha(self, alpha: T) -> Self {
        let [r, g, b, _] = self.to_non_premultiplied().components;
        Self::new(r, g, b, alpha).from_non_premultiplied()
    }

    /// Straight-alpha unit components, the entry form of the gamma codec and
    /// the color-model bridges.
    pub(crate) fn to_unit_straight(self) -> [f64; 4] {
        self.limited()
            .to_non_premultiplied()
            .components
            .map(Component::to_unit)
    }

    /// Builds a premultiplied color from straight-alpha unit components.
    pub(crate) fn from_unit_straight(unit: [f64; 4]) -> Self {
        Self::from_array(unit.map(T::from_unit)).from_non_premultiplied()
    }
}

// ============================================================================
// Type conversions
// ============================================================================

impl<T: Component> From<[T; 4]> for Color<T> {
    fn from(components: [T; 4]) -> Self {
        Self::from_array(components)
    }
}

impl<T: Component> From<Color<T>> for [T; 4] {
    fn from(color: Color<T>) -> Self {
        color.to_array()
    }
}

impl<T: Component> From<(T, T, T, T)> for Color<T> {
    fn from((r, g, b, a): (T, T, T, T)) -> Self {
        Self::new(r, g, b, a)
    }
}

impl<T: Component> From<(T, T, T)> for Color<T> {
    fn from((r, g, b): (T, T, T)) -> Self {
        Self::rgb(r, g, b)
    }
}

#[cfg(feature = "serde")]
mod serde_support {
    use super::Color;
    use crate::component::Component;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    /// Serialized as the `#AARRGGBB` literal.
    impl<T: Component> Serialize for Color<T> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&self.to_hex())
        }
    }

    /// Accepts a hex literal or a W3C color name.
    impl<'de, T: Component> Deserialize<'de> for Color<T> {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let text = String::deserialize(deserializer)?;
            Color::parse(&text).map_err(serde::de::Error::custom)
        }
    }
}
