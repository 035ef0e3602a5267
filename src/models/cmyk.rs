//! The CMYK model and its direct conversion back to RGB.

use crate::models::Rgb;
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the CMYK model, each channel in 0..=100.
    pub struct Cmyk {
        /// The cyan channel of the color.
        pub cyan: Component,
        /// The magenta channel of the color.
        pub magenta: Component,
        /// The yellow channel of the color.
        pub yellow: Component,
        /// The black (key) channel of the color.
        pub key: Component,
    }
}

impl Cmyk {
    /// Convert to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        let cyan = self.cyan / 100.0;
        let magenta = self.magenta / 100.0;
        let yellow = self.yellow / 100.0;
        let key = self.key / 100.0;

        let red = 1.0 - (cyan * (1.0 - key) + key).min(1.0);
        let green = 1.0 - (magenta * (1.0 - key) + key).min(1.0);
        let blue = 1.0 - (yellow * (1.0 - key) + key).min(1.0);

        Rgb::new(red * 255.0, green * 255.0, blue * 255.0)
    }
}
