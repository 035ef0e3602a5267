//! The legacy Apple 16-bit RGB model.

use crate::models::Rgb;
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the 16-bit-per-channel RGB model used by classic Apple
    /// APIs, each channel in 0..=65535.
    pub struct Apple {
        /// The red channel of the color.
        pub red: Component,
        /// The green channel of the color.
        pub green: Component,
        /// The blue channel of the color.
        pub blue: Component,
    }
}

impl Apple {
    /// Convert to the 8-bit-ranged RGB model.
    pub fn to_rgb(&self) -> Rgb {
        Rgb::new(
            self.red / 65535.0 * 255.0,
            self.green / 65535.0 * 255.0,
            self.blue / 65535.0 * 255.0,
        )
    }
}
