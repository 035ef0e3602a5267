//! The single-channel grayscale model and its conversions into the wider
//! models.

use crate::models::{hex, Cmyk, Hsl, Hsv, Hwb, Lab, Rgb};
use crate::Component;

polychrome_macros::gen_model! {
    /// A grayscale level in 0..=100.
    pub struct Gray {
        /// The gray level.
        pub level: Component,
    }
}

impl Gray {
    /// Convert to the RGB model.
    pub fn to_rgb(&self) -> Rgb {
        let value = self.level / 100.0 * 255.0;
        Rgb::new(value, value, value)
    }

    /// Convert to the HSV model. The level maps straight onto the value
    /// channel.
    pub fn to_hsv(&self) -> Hsv {
        Hsv::new(0.0, 0.0, self.level)
    }

    /// Convert to the HSL model. Identical channels to [`Gray::to_hsv`],
    /// since for a grey both lightness and value equal the level.
    pub fn to_hsl(&self) -> Hsl {
        let [hue, saturation, level] = self.to_hsv().to_channels();
        Hsl::new(hue, saturation, level)
    }

    /// Convert to the HWB model.
    pub fn to_hwb(&self) -> Hwb {
        Hwb::new(0.0, 100.0, self.level)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        Cmyk::new(0.0, 0.0, 0.0, self.level)
    }

    /// Convert to the CIE-Lab model.
    pub fn to_lab(&self) -> Lab {
        Lab::new(self.level, 0.0, 0.0)
    }

    /// Convert to a hex string.
    pub fn to_hex(&self) -> String {
        let value = self.level / 100.0 * 255.0;
        hex::pack(value, value, value)
    }
}
