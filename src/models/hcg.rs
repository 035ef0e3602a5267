//! The HCG (hue, chroma, grayscale) model and every direct conversion out
//! of it.

use crate::models::{Hsl, Hsv, Hwb, Rgb};
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the HCG model: hue in 0..=360, chroma and grayscale in
    /// 0..=100.
    pub struct Hcg {
        /// The hue channel of the color.
        pub hue: Component,
        /// The chroma channel of the color.
        pub chroma: Component,
        /// The grayscale channel of the color.
        pub grayscale: Component,
    }
}

impl Hcg {
    /// Convert to the RGB model. Out-of-range hues produce out-of-range
    /// channels exactly as the formula dictates; nothing is clamped.
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue / 360.0;
        let chroma = self.chroma / 100.0;
        let grayscale = self.grayscale / 100.0;

        if chroma == 0.0 {
            let value = grayscale * 255.0;
            return Rgb::new(value, value, value);
        }

        let hi = (hue % 1.0) * 6.0;
        let v = hi % 1.0;
        let w = 1.0 - v;

        let pure: [Component; 3] = match hi.floor() as i64 {
            0 => [1.0, v, 0.0],
            1 => [w, 1.0, 0.0],
            2 => [0.0, 1.0, v],
            3 => [0.0, w, 1.0],
            4 => [v, 0.0, 1.0],
            _ => [1.0, 0.0, w],
        };

        let mg = (1.0 - chroma) * grayscale;

        Rgb::new(
            (chroma * pure[0] + mg) * 255.0,
            (chroma * pure[1] + mg) * 255.0,
            (chroma * pure[2] + mg) * 255.0,
        )
    }

    /// Convert to the HSV model.
    pub fn to_hsv(&self) -> Hsv {
        let chroma = self.chroma / 100.0;
        let grayscale = self.grayscale / 100.0;

        let value = chroma + grayscale * (1.0 - chroma);
        let saturation = if value > 0.0 { chroma / value } else { 0.0 };

        Hsv::new(self.hue, saturation * 100.0, value * 100.0)
    }

    /// Convert to the HSL model.
    pub fn to_hsl(&self) -> Hsl {
        let chroma = self.chroma / 100.0;
        let grayscale = self.grayscale / 100.0;

        let lightness = grayscale * (1.0 - chroma) + 0.5 * chroma;
        let saturation = if lightness > 0.0 && lightness < 0.5 {
            chroma / (2.0 * lightness)
        } else if lightness >= 0.5 && lightness < 1.0 {
            chroma / (2.0 * (1.0 - lightness))
        } else {
            0.0
        };

        Hsl::new(self.hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert to the HWB model.
    pub fn to_hwb(&self) -> Hwb {
        let chroma = self.chroma / 100.0;
        let grayscale = self.grayscale / 100.0;

        let value = chroma + grayscale * (1.0 - chroma);

        Hwb::new(self.hue, (value - chroma) * 100.0, (1.0 - value) * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn reference_conversions() {
        let rgb = Hcg::new(96.0, 50.0, 50.0).to_rgb();
        assert_component_eq!(rgb.red, 114.74999999999999);
        assert_component_eq!(rgb.green, 191.25);
        assert_component_eq!(rgb.blue, 63.75);

        let hsv = Hcg::new(96.0, 50.0, 50.0).to_hsv();
        assert_component_eq!(hsv.saturation, 66.666666666666657);
        assert_component_eq!(hsv.value, 75.0);

        let hsl = Hcg::new(96.0, 50.0, 50.0).to_hsl();
        assert_eq!(hsl.to_channels(), [96.0, 50.0, 50.0]);

        let hwb = Hcg::new(96.0, 50.0, 50.0).to_hwb();
        assert_eq!(hwb.to_channels(), [96.0, 25.0, 25.0]);
    }

    #[test]
    fn zero_chroma_is_a_grey_ramp() {
        let rgb = Hcg::new(0.0, 0.0, 50.0).to_rgb();
        assert_eq!(rgb.to_channels(), [127.5, 127.5, 127.5]);
    }
}
