//! Runtime description of component representations.
//!
//! Statically typed code picks its representation through the type parameter
//! of [`Color`]. Decoders and configuration files only learn the component
//! type at runtime, so this module provides a [`Representation`] tag and the
//! [`AnyColor`] enum that carries a color of any supported representation.

use crate::color::Color;
use crate::component::Component;
use crate::error::{ColorError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the supported component representations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Unsigned 8-bit integer.
    U8,
    /// Signed 8-bit integer.
    I8,
    /// Unsigned 16-bit integer.
    U16,
    /// Signed 16-bit integer.
    I16,
    /// Unsigned 32-bit integer.
    U32,
    /// Signed 32-bit integer.
    I32,
    /// Unsigned 64-bit integer.
    U64,
    /// Signed 64-bit integer.
    I64,
    /// 32-bit float.
    F32,
    /// 64-bit float.
    F64,
}

impl Representation {
    /// Every supported representation.
    pub const ALL: [Self; 10] = [
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
    ];

    /// Returns the Rust type name of the representation.
    pub const fn name(self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
        }
    }

    /// Returns the width of one component in bits.
    pub const fn bits(self) -> u32 {
        match self {
            Self::U8 | Self::I8 => 8,
            Self::U16 | Self::I16 => 16,
            Self::U32 | Self::I32 | Self::F32 => 32,
            Self::U64 | Self::I64 | Self::F64 => 64,
        }
    }

    /// Returns whether this is a floating-point representation.
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Representation {
    type Err = ColorError;

    /// Parses a type name such as `u8` or `f32` (case-insensitive).
    fn from_str(s: &str) -> Result<Self> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|repr| repr.name() == lower)
            .ok_or_else(|| {
                tracing::debug!(name = s, "rejected component representation");
                ColorError::UnsupportedRepresentation(s.to_string())
            })
    }
}

/// A color whose component representation is only known at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AnyColor {
    /// `Color<u8>`.
    U8(Color<u8>),
    /// `Color<i8>`.
    I8(Color<i8>),
    /// `Color<u16>`.
    U16(Color<u16>),
    /// `Color<i16>`.
    I16(Color<i16>),
    /// `Color<u32>`.
    U32(Color<u32>),
    /// `Color<i32>`.
    I32(Color<i32>),
    /// `Color<u64>`.
    U64(Color<u64>),
    /// `Color<i64>`.
    I64(Color<i64>),
    /// `Color<f32>`.
    F32(Color<f32>),
    /// `Color<f64>`.
    F64(Color<f64>),
}

macro_rules! dispatch {
    ($value:expr, $color:ident => $body:expr) => {
        match $value {
            AnyColor::U8($color) => $body,
            AnyColor::I8($color) => $body,
            AnyColor::U16($color) => $body,
            AnyColor::I16($color) => $body,
            AnyColor::U32($color) => $body,
            AnyColor::I32($color) => $body,
            AnyColor::U64($color) => $body,
            AnyColor::I64($color) => $body,
            AnyColor::F32($color) => $body,
            AnyColor::F64($color) => $body,
        }
    };
}

impl AnyColor {
    /// Builds the representation `repr` from a typed color, rescaling components.
    pub fn from_color<T: Component>(color: Color<T>, repr: Representation) -> Self {
        match repr {
            Representation::U8 => Self::U8(color.cast()),
            Representation::I8 => Self::I8(color.cast()),
            Representation::U16 => Self::U16(color.cast()),
            Representation::I16 => Self::I16(color.cast()),
            Representation::U32 => Self::U32(color.cast()),
            Representation::I32 => Self::I32(color.cast()),
            Representation::U64 => Self::U64(color.cast()),
            Representation::I64 => Self::I64(color.cast()),
            Representation::F32 => Self::F32(color.cast()),
            Representation::F64 => Self::F64(color.cast()),
        }
    }

    /// Parses a hex literal or color name into the given representation.
    pub fn parse(repr: Representation, text: &str) -> Result<Self> {
        Color::<u8>::parse(text).map(|color| Self::from_color(color, repr))
    }

    /// Parses a color whose representation is given by name, e.g. `("u16", "#FF8000")`.
    pub fn parse_named(representation: &str, text: &str) -> Result<Self> {
        let repr = representation.parse::<Representation>()?;
        Self::parse(repr, text)
    }

    /// Returns the representation of the carried color.
    pub fn representation(&self) -> Representation {
        dispatch!(self, color => color.representation())
    }

    /// Converts into another representation.
    pub fn cast_to(self, repr: Representation) -> Self {
        dispatch!(self, color => Self::from_color(color, repr))
    }

    /// Converts into a statically typed color.
    pub fn to_color<T: Component>(self) -> Color<T> {
        dispatch!(self, color => color.cast())
    }
}

impl fmt::Display for AnyColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, color => fmt::Display::fmt(color, f))
    }
}

macro_rules! impl_from_color {
    ($($t:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<Color<$t>> for AnyColor {
                fn from(color: Color<$t>) -> Self {
                    Self::$variant(color)
                }
            }
        )*
    };
}

impl_from_color!(
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
);

#[cfg(feature = "serde")]
mod serde_support {
    use super::Representation;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    impl Serialize for Representation {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(self.name())
        }
    }

    impl<'de> Deserialize<'de> for Representation {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let name = String::deserialize(deserializer)?;
            name.parse().map_err(serde::de::Error::custom)
        }
    }
}
