//! The HSL model and every direct conversion out of it.

use crate::models::{Hcg, Hsv, Rgb};
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the HSL model: hue in 0..=360, saturation and lightness
    /// in 0..=100.
    pub struct Hsl {
        /// The hue channel of the color.
        pub hue: Component,
        /// The saturation channel of the color.
        pub saturation: Component,
        /// The lightness channel of the color.
        pub lightness: Component,
    }
}

impl Hsl {
    /// Convert to the RGB model via the classic six-segment interpolation.
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue / 360.0;
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        if saturation == 0.0 {
            let value = lightness * 255.0;
            return Rgb::new(value, value, value);
        }

        let t2 = if lightness < 0.5 {
            lightness * (1.0 + saturation)
        } else {
            lightness + saturation - lightness * saturation
        };
        let t1 = 2.0 * lightness - t2;

        let mut rgb = [0.0; 3];
        for (i, channel) in rgb.iter_mut().enumerate() {
            // One phase-shifted hue sample per channel.
            let mut t3 = hue + 1.0 / 3.0 * -(i as Component - 1.0);
            if t3 < 0.0 {
                t3 += 1.0;
            }
            if t3 > 1.0 {
                t3 -= 1.0;
            }

            let value = if 6.0 * t3 < 1.0 {
                t1 + (t2 - t1) * 6.0 * t3
            } else if 2.0 * t3 < 1.0 {
                t2
            } else if 3.0 * t3 < 2.0 {
                t1 + (t2 - t1) * (2.0 / 3.0 - t3) * 6.0
            } else {
                t1
            };

            *channel = value * 255.0;
        }

        Rgb::new(rgb[0], rgb[1], rgb[2])
    }

    /// Convert to the HSV model. The 0.01 floor on lightness keeps the
    /// degenerate denominator finite when lightness vanishes.
    pub fn to_hsv(&self) -> Hsv {
        let hue = self.hue;
        let mut saturation = self.saturation / 100.0;
        let mut lightness = self.lightness / 100.0;
        let mut smin = saturation;
        let lmin = lightness.max(0.01);

        lightness *= 2.0;
        saturation *= if lightness <= 1.0 {
            lightness
        } else {
            2.0 - lightness
        };
        smin *= if lmin <= 1.0 { lmin } else { 2.0 - lmin };

        let value = (lightness + saturation) / 2.0;
        let sv = if lightness == 0.0 {
            (2.0 * smin) / (lmin + smin)
        } else {
            (2.0 * saturation) / (lightness + saturation)
        };

        Hsv::new(hue, sv * 100.0, value * 100.0)
    }

    /// Convert to the HCG model.
    pub fn to_hcg(&self) -> Hcg {
        let saturation = self.saturation / 100.0;
        let lightness = self.lightness / 100.0;

        let chroma = if lightness < 0.5 {
            2.0 * saturation * lightness
        } else {
            2.0 * saturation * (1.0 - lightness)
        };

        let grayscale = if chroma < 1.0 {
            (lightness - 0.5 * chroma) / (1.0 - chroma)
        } else {
            0.0
        };

        Hcg::new(self.hue, chroma * 100.0, grayscale * 100.0)
    }
}
