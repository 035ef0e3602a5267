//! Each color model is a typed struct with named channels, and every direct
//! conversion is an inherent method on its source model. The dynamic
//! [`Converter`](crate::Converter) dispatches into these methods, so each
//! formula exists exactly once.
//!
//! Channel values are carried in each model's canonical range (rgb 0..=255,
//! hue 0..=360, percentages 0..=100, apple 0..=65535); conversions assume
//! canonical input and produce canonical output, without rounding unless the
//! destination model is integral by convention.

pub mod ansi;
pub mod apple;
pub mod cmyk;
pub mod gray;
pub mod hcg;
pub mod hex;
pub mod hsl;
pub mod hsv;
pub mod hwb;
pub mod lab;
pub mod rgb;
pub mod xyz;

pub use ansi::{Ansi16, Ansi256};
pub use apple::Apple;
pub use cmyk::Cmyk;
pub use gray::Gray;
pub use hcg::Hcg;
pub use hsl::Hsl;
pub use hsv::Hsv;
pub use hwb::Hwb;
pub use lab::{Lab, Lch};
pub use rgb::Rgb;
pub use xyz::Xyz;
