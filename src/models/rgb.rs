//! The RGB model and every direct conversion out of it.

use crate::math::{or_zero, transform, transform_3x3, Transform};
use crate::models::{Ansi16, Ansi256, Apple, Cmyk, Gray, Hcg, Hsl, Hsv, Hwb, Lab, Xyz};
use crate::models::hex;
use crate::{keyword::KeywordIndex, Component};

polychrome_macros::gen_model! {
    /// A color in the RGB model, each channel in 0..=255.
    pub struct Rgb {
        /// The red channel of the color.
        pub red: Component,
        /// The green channel of the color.
        pub green: Component,
        /// The blue channel of the color.
        pub blue: Component,
    }
}

impl Rgb {
    /// Convert to the HSL model.
    pub fn to_hsl(&self) -> Hsl {
        let red = self.red / 255.0;
        let green = self.green / 255.0;
        let blue = self.blue / 255.0;
        let min = red.min(green).min(blue);
        let max = red.max(green).max(blue);
        let delta = max - min;

        let mut hue = if max == min {
            0.0
        } else if red == max {
            (green - blue) / delta
        } else if green == max {
            2.0 + (blue - red) / delta
        } else {
            4.0 + (red - green) / delta
        };

        hue = (hue * 60.0).min(360.0);
        if hue < 0.0 {
            hue += 360.0;
        }

        let lightness = (min + max) / 2.0;

        let saturation = if max == min {
            0.0
        } else if lightness <= 0.5 {
            delta / (max + min)
        } else {
            delta / (2.0 - max - min)
        };

        Hsl::new(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert to the HSV model.
    pub fn to_hsv(&self) -> Hsv {
        let red = self.red / 255.0;
        let green = self.green / 255.0;
        let blue = self.blue / 255.0;
        let value = red.max(green).max(blue);
        let diff = value - red.min(green).min(blue);
        let diffc = |c: Component| (value - c) / 6.0 / diff + 1.0 / 2.0;

        let (hue, saturation) = if diff == 0.0 {
            // Achromatic: hue takes saturation's zero.
            let saturation = 0.0;
            (saturation, saturation)
        } else {
            let saturation = diff / value;
            let rdif = diffc(red);
            let gdif = diffc(green);
            let bdif = diffc(blue);

            let mut hue = if red == value {
                bdif - gdif
            } else if green == value {
                1.0 / 3.0 + rdif - bdif
            } else {
                2.0 / 3.0 + gdif - rdif
            };

            if hue < 0.0 {
                hue += 1.0;
            } else if hue > 1.0 {
                hue -= 1.0;
            }

            (hue, saturation)
        };

        Hsv::new(hue * 360.0, saturation * 100.0, value * 100.0)
    }

    /// Convert to the HWB model.
    pub fn to_hwb(&self) -> Hwb {
        let hue = self.to_hsl().hue;
        let whiteness = (1.0 / 255.0) * self.red.min(self.green.min(self.blue));
        let blackness = 1.0 - (1.0 / 255.0) * self.red.max(self.green.max(self.blue));

        Hwb::new(hue, whiteness * 100.0, blackness * 100.0)
    }

    /// Convert to the CMYK model.
    pub fn to_cmyk(&self) -> Cmyk {
        let red = self.red / 255.0;
        let green = self.green / 255.0;
        let blue = self.blue / 255.0;

        let key = (1.0 - red).min(1.0 - green).min(1.0 - blue);
        let cyan = or_zero((1.0 - red - key) / (1.0 - key));
        let magenta = or_zero((1.0 - green - key) / (1.0 - key));
        let yellow = or_zero((1.0 - blue - key) / (1.0 - key));

        Cmyk::new(cyan * 100.0, magenta * 100.0, yellow * 100.0, key * 100.0)
    }

    /// Convert to CIE-XYZ, assuming the sRGB transfer curve.
    pub fn to_xyz(&self) -> Xyz {
        #[rustfmt::skip]
        const TO_XYZ: Transform = transform_3x3(
            0.4124, 0.2126, 0.0193,
            0.3576, 0.7152, 0.1192,
            0.1805, 0.0722, 0.9505,
        );

        let linear = |channel: Component| {
            let channel = channel / 255.0;
            if channel > 0.04045 {
                ((channel + 0.055) / 1.055).powf(2.4)
            } else {
                channel / 12.92
            }
        };

        let [x, y, z] = transform(
            &TO_XYZ,
            [linear(self.red), linear(self.green), linear(self.blue)],
        );

        Xyz::new(x * 100.0, y * 100.0, z * 100.0)
    }

    /// Convert to CIE-Lab, through CIE-XYZ.
    pub fn to_lab(&self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Convert to the HCG model.
    pub fn to_hcg(&self) -> Hcg {
        let red = self.red / 255.0;
        let green = self.green / 255.0;
        let blue = self.blue / 255.0;
        let max = red.max(green).max(blue);
        let min = red.min(green).min(blue);
        let chroma = max - min;

        let grayscale = if chroma < 1.0 {
            min / (1.0 - chroma)
        } else {
            0.0
        };

        let mut hue = if chroma <= 0.0 {
            0.0
        } else if max == red {
            ((green - blue) / chroma) % 6.0
        } else if max == green {
            2.0 + (blue - red) / chroma
        } else {
            // The blue branch folds with a trailing `+ 4` after the ratio,
            // unlike the red branch's modulo. Historical formula; keep it.
            4.0 + (red - green) / chroma + 4.0
        };

        hue /= 6.0;
        hue %= 1.0;

        Hcg::new(hue * 360.0, chroma * 100.0, grayscale * 100.0)
    }

    /// Pack into a six-digit uppercase hex string, rounding each channel to
    /// a byte.
    pub fn to_hex(&self) -> String {
        hex::pack(self.red, self.green, self.blue)
    }

    /// Find the CSS keyword for this color: an exact named value if the
    /// channels match one, otherwise the nearest keyword by squared
    /// distance.
    pub fn to_keyword(&self, index: &KeywordIndex) -> &'static str {
        index.keyword_for(self.to_channels())
    }

    /// Convert to an ANSI-16 terminal color code. `value` is an optional
    /// precomputed HSV value channel (0..=100); when absent it is derived
    /// from the channels.
    pub fn to_ansi16(&self, value: Option<Component>) -> Ansi16 {
        let value = value.unwrap_or_else(|| self.to_hsv().value);
        let value = (value / 50.0).round();

        if value == 0.0 {
            return Ansi16::new(30.0);
        }

        let bit = |channel: Component| (channel / 255.0).round() as u8;
        let mut ansi =
            30.0 + ((bit(self.blue) << 2) | (bit(self.green) << 1) | bit(self.red)) as Component;

        if value == 2.0 {
            ansi += 60.0;
        }

        Ansi16::new(ansi)
    }

    /// Convert to an ANSI-256 terminal color code, using the extended
    /// greyscale ramp for grey triples and the 6x6x6 cube otherwise.
    pub fn to_ansi256(&self) -> Ansi256 {
        // The extended greyscale palette, except black and white; the
        // normal palette only has 4 greyscale shades.
        if self.red == self.green && self.green == self.blue {
            if self.red < 8.0 {
                return Ansi256::new(16.0);
            }

            if self.red > 248.0 {
                return Ansi256::new(231.0);
            }

            return Ansi256::new(((self.red - 8.0) / 247.0 * 24.0).round() + 232.0);
        }

        Ansi256::new(
            16.0 + 36.0 * (self.red / 255.0 * 5.0).round()
                + 6.0 * (self.green / 255.0 * 5.0).round()
                + (self.blue / 255.0 * 5.0).round(),
        )
    }

    /// Convert to 16-bit apple RGB.
    pub fn to_apple(&self) -> Apple {
        Apple::new(
            self.red / 255.0 * 65535.0,
            self.green / 255.0 * 65535.0,
            self.blue / 255.0 * 65535.0,
        )
    }

    /// Convert to a single grey level, as the plain channel average.
    pub fn to_gray(&self) -> Gray {
        let value = (self.red + self.green + self.blue) / 3.0;
        Gray::new(value / 255.0 * 100.0)
    }
}
