//! polychrome implements the direct color-model conversion table: per-model
//! channel metadata and the pure numeric transforms between pairs of models
//! (rgb, hsl, hsv, hwb, cmyk, xyz, lab, lch, hcg, apple, gray, hex, keyword,
//! ansi16 and ansi256). A routing layer that chains direct conversions into
//! arbitrary multi-hop paths is expected to live on top of this crate.

#![deny(missing_docs)]

mod convert;
mod error;
mod keyword;
mod math;
mod model;
mod models;
mod named;
mod registry;
mod value;

#[cfg(not(feature = "f64"))]
/// A 32-bit floating point value that all channels are stored as.
pub type Component = f32;

#[cfg(feature = "f64")]
/// A 64-bit floating point value that all channels are stored as.
pub type Component = f64;

pub use convert::Converter;
pub use error::{ConfigError, ConvertError, UnknownKeywordError, UnknownModelError};
pub use keyword::KeywordIndex;
pub use model::Model;
pub use models::{Ansi16, Ansi256, Apple, Cmyk, Gray, Hcg, Hsl, Hsv, Hwb, Lab, Lch, Rgb, Xyz};
pub use registry::{ModelSpec, ModelSpecBuilder, Registry};
pub use value::{Value, ValueKind};
