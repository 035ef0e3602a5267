//! The ANSI-16 and ANSI-256 terminal color codes and their conversions
//! back to RGB.

use crate::models::Rgb;
use crate::Component;

polychrome_macros::gen_model! {
    /// An ANSI-16 terminal color code: 30..=37, or 90..=97 for the bright
    /// half.
    pub struct Ansi16 {
        /// The color code.
        pub code: Component,
    }
}

impl Ansi16 {
    /// Decode back to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        let code = self.code;
        let mut color = code % 10.0;

        // Codes 0 and 7 are the greyscale ramp.
        if color == 0.0 || color == 7.0 {
            if code > 50.0 {
                color += 3.5;
            }

            let value = color / 10.5 * 255.0;
            return Rgb::new(value, value, value);
        }

        let mult = if code > 50.0 { 1.0 } else { 0.5 };
        let color = color as u8;
        let red = (color & 1) as Component * mult * 255.0;
        let green = ((color >> 1) & 1) as Component * mult * 255.0;
        let blue = ((color >> 2) & 1) as Component * mult * 255.0;

        Rgb::new(red, green, blue)
    }
}

polychrome_macros::gen_model! {
    /// An ANSI-256 terminal color code: 16..=231 for the 6x6x6 cube,
    /// 232..=255 for the fine grey ramp.
    pub struct Ansi256 {
        /// The color code.
        pub code: Component,
    }
}

impl Ansi256 {
    /// Decode back to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        let code = self.code;

        if code >= 232.0 {
            let value = (code - 232.0) * 10.0 + 8.0;
            return Rgb::new(value, value, value);
        }

        let code = code - 16.0;
        let rem = code % 36.0;

        let red = (code / 36.0).floor() / 5.0 * 255.0;
        let green = (rem / 6.0).floor() / 5.0 * 255.0;
        let blue = (rem % 6.0) / 5.0 * 255.0;

        Rgb::new(red, green, blue)
    }
}
