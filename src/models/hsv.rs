//! The HSV model and every direct conversion out of it.

use crate::math::or_zero;
use crate::models::{Ansi16, Hcg, Hsl, Rgb};
use crate::Component;

polychrome_macros::gen_model! {
    /// A color in the HSV model: hue in 0..=360, saturation and value in
    /// 0..=100.
    pub struct Hsv {
        /// The hue channel of the color.
        pub hue: Component,
        /// The saturation channel of the color.
        pub saturation: Component,
        /// The value channel of the color.
        pub value: Component,
    }
}

impl Hsv {
    /// Convert to the RGB model via the six-sector switch.
    pub fn to_rgb(&self) -> Rgb {
        let hue = self.hue / 60.0;
        let saturation = self.saturation / 100.0;
        let mut value = self.value / 100.0;
        let sector = (hue.floor() % 6.0) as i64;

        let f = hue - hue.floor();
        let p = 255.0 * value * (1.0 - saturation);
        let q = 255.0 * value * (1.0 - saturation * f);
        let t = 255.0 * value * (1.0 - saturation * (1.0 - f));
        value *= 255.0;

        let (red, green, blue) = match sector {
            0 => (value, t, p),
            1 => (q, value, p),
            2 => (p, value, t),
            3 => (p, q, value),
            4 => (t, p, value),
            // Sector 5; the modulo keeps anything else from occurring.
            _ => (value, p, q),
        };

        Rgb::new(red, green, blue)
    }

    /// Convert to the HSL model. The 0.01 floor on value keeps the
    /// degenerate denominator finite when value vanishes.
    pub fn to_hsl(&self) -> Hsl {
        let hue = self.hue;
        let saturation = self.saturation / 100.0;
        let value = self.value / 100.0;
        let vmin = value.max(0.01);

        let mut lightness = (2.0 - saturation) * value;
        let lmin = (2.0 - saturation) * vmin;
        let mut sl = saturation * vmin;
        sl /= if lmin <= 1.0 { lmin } else { 2.0 - lmin };
        let sl = or_zero(sl);
        lightness /= 2.0;

        Hsl::new(hue, sl * 100.0, lightness * 100.0)
    }

    /// Convert to the HCG model.
    pub fn to_hcg(&self) -> Hcg {
        let saturation = self.saturation / 100.0;
        let value = self.value / 100.0;

        let chroma = saturation * value;
        let grayscale = if chroma < 1.0 {
            (value - chroma) / (1.0 - chroma)
        } else {
            0.0
        };

        Hcg::new(self.hue, chroma * 100.0, grayscale * 100.0)
    }

    /// Convert to an ANSI-16 terminal color code, feeding the value channel
    /// straight into the RGB conversion instead of recomputing it.
    pub fn to_ansi16(&self) -> Ansi16 {
        self.to_rgb().to_ansi16(Some(self.value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn reference_conversions() {
        let rgb = Hsv::new(96.0, 50.0, 78.0).to_rgb();
        assert_component_eq!(rgb.red, 139.22999999999999);
        assert_component_eq!(rgb.green, 198.90000000000001);
        assert_component_eq!(rgb.blue, 99.450000000000003);

        let hsl = Hsv::new(96.0, 50.0, 78.0).to_hsl();
        assert_component_eq!(hsl.saturation, 46.98795180722891);
        assert_component_eq!(hsl.lightness, 58.5);

        let hcg = Hsv::new(96.0, 50.0, 78.0).to_hcg();
        assert_component_eq!(hcg.chroma, 39.0);
        assert_component_eq!(hcg.grayscale, 63.934426229508205);
    }

    #[test]
    fn hue_360_wraps_into_the_first_sector() {
        let rgb = Hsv::new(360.0, 100.0, 100.0).to_rgb();
        assert_eq!(rgb.to_channels(), [255.0, 0.0, 0.0]);
    }

    #[test]
    fn to_hsl_guards_the_zero_value_denominator() {
        let hsl = Hsv::new(0.0, 50.0, 0.0).to_hsl();
        assert_component_eq!(hsl.saturation, 33.333333333333336);
        assert_eq!(hsl.lightness, 0.0);
    }

    #[test]
    fn ansi16_uses_the_value_channel() {
        assert_eq!(Hsv::new(96.0, 50.0, 78.0).to_ansi16().code, 93.0);
        assert_eq!(Hsv::new(0.0, 0.0, 0.0).to_ansi16().code, 30.0);
    }
}
