//! The HWB model and every direct conversion out of it.
//! <http://dev.w3.org/csswg/css-color/#hwb-to-rgb>

use crate::models::{Hcg, Rgb};
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the HWB model: hue in 0..=360, whiteness and blackness in
    /// 0..=100.
    pub struct Hwb {
        /// The hue channel of the color.
        pub hue: Component,
        /// The whiteness channel of the color.
        pub whiteness: Component,
        /// The blackness channel of the color.
        pub blackness: Component,
    }
}

impl Hwb {
    /// Convert to the RGB model. Whiteness and blackness are renormalized
    /// when their sum exceeds 1, and the interpolation fraction is inverted
    /// on odd sectors.
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue / 360.0;
        let mut whiteness = self.whiteness / 100.0;
        let mut blackness = self.blackness / 100.0;
        let ratio = whiteness + blackness;

        if ratio > 1.0 {
            whiteness /= ratio;
            blackness /= ratio;
        }

        let sector = (6.0 * hue).floor();
        let value = 1.0 - blackness;
        let mut f = 6.0 * hue - sector;

        if (sector as i64 & 0x01) != 0 {
            f = 1.0 - f;
        }

        // Linear interpolation between whiteness and value.
        let n = whiteness + f * (value - whiteness);

        let (red, green, blue) = match sector as i64 {
            1 => (n, value, whiteness),
            2 => (whiteness, value, n),
            3 => (whiteness, n, value),
            4 => (n, whiteness, value),
            5 => (value, whiteness, n),
            // Sector 0, and 6 when the hue is exactly 360.
            _ => (value, n, whiteness),
        };

        Rgb::new(red * 255.0, green * 255.0, blue * 255.0)
    }

    /// Convert to the HCG model.
    pub fn to_hcg(&self) -> Hcg {
        let whiteness = self.whiteness / 100.0;
        let blackness = self.blackness / 100.0;

        let value = 1.0 - blackness;
        let chroma = value - whiteness;
        let grayscale = if chroma < 1.0 {
            (value - chroma) / (1.0 - chroma)
        } else {
            0.0
        };

        Hcg::new(self.hue, chroma * 100.0, grayscale * 100.0)
    }
}
