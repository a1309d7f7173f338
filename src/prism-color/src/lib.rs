//! Premultiplied RGBA colors for image processing.
//!
//! This crate provides the pixel foundation that decoders, encoders,
//! quantizers and resamplers build on:
//!
//! - [`color`]: the [`Color`] value, generic over its component representation
//! - [`component`]: per-representation arithmetic behind the color operators
//! - [`gamma`]: the sRGB transfer curve
//! - [`spaces`]: CMYK, YCbCr, HSV and HSL conversions
//! - [`named`]: the W3C named color table
//! - [`representation`]: runtime representation tags for configuration and decoders
//! - [`error`]: error types for the crate
//!
//! # Examples
//!
//! ## Working with Colors
//!
//! ```
//! use prism_color::Color;
//!
//! let red = Color::<u8>::RED;
//! let hex = Color::<u8>::from_hex("#FF8000").unwrap();
//!
//! // Component-wise arithmetic wraps for integer representations.
//! let sum = Color::<u8>::new(250, 0, 0, 0) + Color::new(10, 0, 0, 0);
//! assert_eq!(sum.r(), 4);
//!
//! // Interpolation is evaluated in f64, so it never wraps.
//! let mid = red.lerp(hex, 0.5);
//! assert_eq!(mid.g(), 64);
//!
//! // Rescale into another representation.
//! let float: Color<f32> = red.cast();
//! assert_eq!(float, Color::rgb(1.0, 0.0, 0.0));
//! ```
//!
//! ## Color Models
//!
//! ```
//! use prism_color::{Color, Hsv};
//!
//! let orange = Color::<u8>::from_hsv(Hsv::new(30.0, 1.0, 1.0));
//! assert_eq!(orange, Color::rgb(255, 128, 0));
//!
//! let hsl = Color::<u8>::CORNFLOWER_BLUE.to_hsl();
//! assert_eq!(Color::<u8>::from_hsl(hsl), Color::<u8>::CORNFLOWER_BLUE);
//! ```
//!
//! ## Runtime Representations
//!
//! ```
//! use prism_color::{AnyColor, Representation};
//!
//! let color = AnyColor::parse_named("u16", "teal").unwrap();
//! assert_eq!(color.representation(), Representation::U16);
//! assert!("u128".parse::<Representation>().is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::float_cmp)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::doc_markdown)]

pub mod color;
pub mod component;
pub mod error;
pub mod gamma;
pub mod named;
pub mod representation;
pub mod spaces;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use component::{Component, EPSILON};
pub use error::{ColorError, FormatIssue, Result};
pub use representation::{AnyColor, Representation};
pub use spaces::{Cmyk, Hsl, Hsv, YCbCr};
