//! The CIE-Lab model, its polar CIE-LCh form, and the conversions between
//! them and back to CIE-XYZ.

use crate::models::xyz::WHITE_POINT;
use crate::models::Xyz;
use crate::Component;
use std::f64::consts::PI;

polychrome_macros::gen_model! {
    /// A color in the CIE-Lab model: lightness in 0..=100, a and b signed.
    pub struct Lab {
        /// The lightness channel of the color.
        pub lightness: Component,
        /// The a (green-red) channel of the color.
        pub a: Component,
        /// The b (blue-yellow) channel of the color.
        pub b: Component,
    }
}

impl Lab {
    /// Convert back to CIE-XYZ. The threshold branch tests the cubed
    /// intermediate, unlike the forward direction.
    pub fn to_xyz(&self) -> Xyz {
        let y = (self.lightness + 16.0) / 116.0;
        let x = self.a / 500.0 + y;
        let z = y - self.b / 200.0;

        let f = |t: Component| {
            let cubed = t * t * t;
            if cubed > 0.008856 {
                cubed
            } else {
                (t - 16.0 / 116.0) / 7.787
            }
        };

        Xyz::new(
            f(x) * WHITE_POINT[0],
            f(y) * WHITE_POINT[1],
            f(z) * WHITE_POINT[2],
        )
    }

    /// Convert to the polar CIE-LCh form.
    pub fn to_lch(&self) -> Lch {
        let hr = self.b.atan2(self.a);
        let mut hue = hr * 360.0 / 2.0 / PI as Component;
        if hue < 0.0 {
            hue += 360.0;
        }

        let chroma = (self.a * self.a + self.b * self.b).sqrt();

        Lch::new(self.lightness, chroma, hue)
    }
}

polychrome_macros::gen_model! {
    /// A color in the CIE-LCh model: lightness in 0..=100, chroma
    /// unbounded at or above zero, hue in 0..=360.
    pub struct Lch {
        /// The lightness channel of the color.
        pub lightness: Component,
        /// The chroma channel of the color.
        pub chroma: Component,
        /// The hue channel of the color.
        pub hue: Component,
    }
}

impl Lch {
    /// Convert to the rectangular CIE-Lab form.
    pub fn to_lab(&self) -> Lab {
        let hr = self.hue / 360.0 * 2.0 * PI as Component;
        let a = self.chroma * hr.cos();
        let b = self.chroma * hr.sin();

        Lab::new(self.lightness, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn reference_conversions() {
        let xyz = Lab::new(69.0, -48.0, 44.0).to_xyz();
        assert_component_eq!(xyz.x, 24.539342015588943);
        assert_component_eq!(xyz.y, 39.344389376358194);
        assert_component_eq!(xyz.z, 14.679085163620853);

        let lch = Lab::new(69.0, -48.0, 44.0).to_lch();
        assert_component_eq!(lch.lightness, 69.0);
        assert_component_eq!(lch.chroma, 65.115282384398824);
        assert_component_eq!(lch.hue, 137.48955292199915);

        let lab = Lch::new(69.0, 65.0, 137.0).to_lab();
        assert_component_eq!(lab.a, -47.53799060524608);
        assert_component_eq!(lab.b, 44.32989340406241);
    }

    #[test]
    fn dark_lab_takes_the_linear_branch() {
        let xyz = Lab::new(5.0, 3.0, -2.0).to_xyz();
        assert_component_eq!(xyz.x, 0.59934961452110735);
        assert_component_eq!(xyz.y, 0.55353086266677887);
        assert_component_eq!(xyz.z, 0.74252764333128163);
    }

    #[test]
    fn negative_b_wraps_the_hue_positive() {
        let lch = Lab::new(54.0, 10.0, -20.0).to_lch();
        assert_component_eq!(lch.chroma, 22.360679774997898);
        assert_component_eq!(lch.hue, 296.56505117707798);
    }
}
