//! The CIE-XYZ model and its direct conversions to RGB and CIE-Lab.

use crate::math::{transform, transform_3x3, Transform};
use crate::models::{Lab, Rgb};
use crate::Component;

/// D65 white point divisors for the Lab conversions.
pub(crate) const WHITE_POINT: [Component; 3] = [95.047, 100.0, 108.883];

polychrome_macros::gen_model! {
    /// A color in the CIE-XYZ model, scaled to roughly 0..=100 per channel.
    pub struct Xyz {
        /// The X channel of the color.
        pub x: Component,
        /// The Y channel of the color.
        pub y: Component,
        /// The Z channel of the color.
        pub z: Component,
    }
}

impl Xyz {
    /// Convert to the RGB model, assuming the sRGB transfer curve. Each
    /// channel is clamped to its gamut before scaling.
    pub fn to_rgb(&self) -> Rgb {
        #[rustfmt::skip]
        const FROM_XYZ: Transform = transform_3x3(
             3.2406, -0.9689,  0.0557,
            -1.5372,  1.8758, -0.204,
            -0.4986,  0.0415,  1.057,
        );

        let [red, green, blue] = transform(
            &FROM_XYZ,
            [self.x / 100.0, self.y / 100.0, self.z / 100.0],
        );

        let encode = |channel: Component| {
            let channel = if channel > 0.0031308 {
                1.055 * channel.powf(1.0 / 2.4) - 0.055
            } else {
                channel * 12.92
            };
            channel.clamp(0.0, 1.0) * 255.0
        };

        Rgb::new(encode(red), encode(green), encode(blue))
    }

    /// Convert to CIE-Lab, with the cube-root branch at 0.008856.
    pub fn to_lab(&self) -> Lab {
        let f = |t: Component| {
            if t > 0.008856 {
                t.powf(1.0 / 3.0)
            } else {
                7.787 * t + 16.0 / 116.0
            }
        };

        let x = f(self.x / WHITE_POINT[0]);
        let y = f(self.y / WHITE_POINT[1]);
        let z = f(self.z / WHITE_POINT[2]);

        Lab::new(116.0 * y - 16.0, 500.0 * (x - y), 200.0 * (y - z))
    }
}
