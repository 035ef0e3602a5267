//! The conversion table: one entry per supported model pair, dispatching
//! dynamically typed values through the typed models.

use crate::error::{ConfigError, ConvertError};
use crate::keyword::KeywordIndex;
use crate::model::Model;
use crate::models::{
    hex, Ansi16, Ansi256, Apple, Cmyk, Gray, Hcg, Hsl, Hsv, Hwb, Lab, Lch, Rgb, Xyz,
};
use crate::registry::Registry;
use crate::value::Value;
use crate::Component;

/// Converts dynamically typed color values between models.
///
/// Every supported conversion is a single direct formula; there is no
/// multi-hop routing. Asking for a pair outside the table yields
/// [`ConvertError::UnsupportedPair`].
pub struct Converter {
    registry: Registry,
    keywords: KeywordIndex,
}

impl Converter {
    /// Build a converter, freezing the model registry and indexing the
    /// named colors.
    pub fn new() -> Result<Self, ConfigError> {
        Ok(Self {
            registry: Registry::new()?,
            keywords: KeywordIndex::new(),
        })
    }

    /// The frozen model metadata registry.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The named color index used by the keyword conversions.
    pub fn keywords(&self) -> &KeywordIndex {
        &self.keywords
    }

    /// Convert `input`, interpreted in the `from` model, to the `to` model.
    ///
    /// The input's kind and arity are checked against `from` before any
    /// formula runs, so a mistagged value never reaches the math.
    pub fn convert(&self, from: Model, to: Model, input: &Value) -> Result<Value, ConvertError> {
        let output: Value = match (from, to) {
            (Model::Rgb, Model::Hsl) => Rgb::from(input.channels_array(from)?).to_hsl().into(),
            (Model::Rgb, Model::Hsv) => Rgb::from(input.channels_array(from)?).to_hsv().into(),
            (Model::Rgb, Model::Hwb) => Rgb::from(input.channels_array(from)?).to_hwb().into(),
            (Model::Rgb, Model::Cmyk) => Rgb::from(input.channels_array(from)?).to_cmyk().into(),
            (Model::Rgb, Model::Xyz) => Rgb::from(input.channels_array(from)?).to_xyz().into(),
            (Model::Rgb, Model::Lab) => Rgb::from(input.channels_array(from)?).to_lab().into(),
            (Model::Rgb, Model::Hcg) => Rgb::from(input.channels_array(from)?).to_hcg().into(),
            (Model::Rgb, Model::Apple) => Rgb::from(input.channels_array(from)?).to_apple().into(),
            (Model::Rgb, Model::Gray) => Rgb::from(input.channels_array(from)?).to_gray().into(),
            (Model::Rgb, Model::Ansi16) => Rgb::from(input.channels_array(from)?)
                .to_ansi16(None)
                .into(),
            (Model::Rgb, Model::Ansi256) => {
                Rgb::from(input.channels_array(from)?).to_ansi256().into()
            }
            (Model::Rgb, Model::Hex) => {
                Value::Hex(Rgb::from(input.channels_array(from)?).to_hex())
            }
            (Model::Rgb, Model::Keyword) => Value::Keyword(
                Rgb::from(input.channels_array(from)?)
                    .to_keyword(&self.keywords)
                    .to_string(),
            ),

            (Model::Hsl, Model::Rgb) => Hsl::from(input.channels_array(from)?).to_rgb().into(),
            (Model::Hsl, Model::Hsv) => Hsl::from(input.channels_array(from)?).to_hsv().into(),
            (Model::Hsl, Model::Hcg) => Hsl::from(input.channels_array(from)?).to_hcg().into(),

            (Model::Hsv, Model::Rgb) => Hsv::from(input.channels_array(from)?).to_rgb().into(),
            (Model::Hsv, Model::Hsl) => Hsv::from(input.channels_array(from)?).to_hsl().into(),
            (Model::Hsv, Model::Hcg) => Hsv::from(input.channels_array(from)?).to_hcg().into(),
            (Model::Hsv, Model::Ansi16) => {
                Hsv::from(input.channels_array(from)?).to_ansi16().into()
            }

            (Model::Hwb, Model::Rgb) => Hwb::from(input.channels_array(from)?).to_rgb().into(),
            (Model::Hwb, Model::Hcg) => Hwb::from(input.channels_array(from)?).to_hcg().into(),

            (Model::Cmyk, Model::Rgb) => Cmyk::from(input.channels_array(from)?).to_rgb().into(),

            (Model::Xyz, Model::Rgb) => Xyz::from(input.channels_array(from)?).to_rgb().into(),
            (Model::Xyz, Model::Lab) => Xyz::from(input.channels_array(from)?).to_lab().into(),

            (Model::Lab, Model::Xyz) => Lab::from(input.channels_array(from)?).to_xyz().into(),
            (Model::Lab, Model::Lch) => Lab::from(input.channels_array(from)?).to_lch().into(),

            (Model::Lch, Model::Lab) => Lch::from(input.channels_array(from)?).to_lab().into(),

            (Model::Hex, Model::Rgb) => hex::parse(input.hex_str(from)?).into(),

            (Model::Keyword, Model::Rgb) => {
                Rgb::from(self.keywords.rgb_for(input.keyword_str(from)?)?).into()
            }

            (Model::Ansi16, Model::Rgb) => {
                Ansi16::from(input.channels_array(from)?).to_rgb().into()
            }
            (Model::Ansi256, Model::Rgb) => {
                Ansi256::from(input.channels_array(from)?).to_rgb().into()
            }

            (Model::Hcg, Model::Rgb) => Hcg::from(input.channels_array(from)?).to_rgb().into(),
            (Model::Hcg, Model::Hsv) => Hcg::from(input.channels_array(from)?).to_hsv().into(),
            (Model::Hcg, Model::Hsl) => Hcg::from(input.channels_array(from)?).to_hsl().into(),
            (Model::Hcg, Model::Hwb) => Hcg::from(input.channels_array(from)?).to_hwb().into(),

            (Model::Apple, Model::Rgb) => Apple::from(input.channels_array(from)?).to_rgb().into(),

            (Model::Gray, Model::Rgb) => Gray::from(input.channels_array(from)?).to_rgb().into(),
            // A grey has equal lightness and value, so one formula serves
            // both targets.
            (Model::Gray, Model::Hsl | Model::Hsv) => {
                Gray::from(input.channels_array(from)?).to_hsv().into()
            }
            (Model::Gray, Model::Hwb) => Gray::from(input.channels_array(from)?).to_hwb().into(),
            (Model::Gray, Model::Cmyk) => Gray::from(input.channels_array(from)?).to_cmyk().into(),
            (Model::Gray, Model::Lab) => Gray::from(input.channels_array(from)?).to_lab().into(),
            (Model::Gray, Model::Hex) => {
                Value::Hex(Gray::from(input.channels_array(from)?).to_hex())
            }

            (from, to) => return Err(ConvertError::UnsupportedPair { from, to }),
        };

        Ok(output)
    }

    /// Like [`Converter::convert`], but rounding every output channel to the
    /// nearest integer. Hex and keyword outputs pass through unchanged.
    pub fn convert_rounded(
        &self,
        from: Model,
        to: Model,
        input: &Value,
    ) -> Result<Value, ConvertError> {
        Ok(match self.convert(from, to, input)? {
            Value::Channels(channels) => {
                Value::Channels(channels.into_iter().map(Component::round).collect())
            }
            other => other,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;
    use crate::value::ValueKind;

    #[allow(clippy::excessive_precision)]
    #[rustfmt::skip]
    const TESTS: &[(Model, &[Component], Model, &[Component])] = &[
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Hsl, &[95.999999999999986, 47.619047619047606, 58.82352941176471]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Hsv, &[95.999999999999972, 50.0, 78.431372549019613]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Hwb, &[95.999999999999986, 39.215686274509807, 21.568627450980394]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Cmyk, &[29.999999999999993, 0.0, 50.000000000000014, 21.568627450980394]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Xyz, &[33.769743798152412, 47.804102131355329, 19.503854144362037]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Lab, &[74.701202400653059, -36.820412527327647, 43.639976636361411]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Hcg, &[96.0, 39.215686274509807, 64.51612903225805]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Apple, &[35980.0, 51400.0, 25700.0]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Gray, &[57.51633986928104]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Ansi16, &[93.0]),
        (Model::Rgb, &[140.0, 200.0, 100.0], Model::Ansi256, &[150.0]),
        (Model::Rgb, &[92.0, 191.0, 84.0], Model::Ansi16, &[32.0]),
        (Model::Rgb, &[92.0, 191.0, 84.0], Model::Ansi256, &[114.0]),
        (Model::Rgb, &[40.0, 38.0, 41.0], Model::Ansi256, &[59.0]),
        (Model::Rgb, &[255.0, 0.0, 0.0], Model::Ansi16, &[91.0]),
        (Model::Hsl, &[120.0, 100.0, 50.0], Model::Rgb, &[0.0, 255.0, 0.0]),
        (Model::Hsl, &[240.0, 0.0, 50.0], Model::Hsv, &[240.0, 0.0, 50.0]),
        (Model::Hsl, &[96.0, 50.0, 50.0], Model::Hcg, &[96.0, 50.0, 50.0]),
        (Model::Hsv, &[96.0, 50.0, 100.0], Model::Rgb, &[178.5, 255.0, 127.5]),
        (Model::Hsv, &[96.0, 50.0, 100.0], Model::Hsl, &[96.0, 100.0, 75.0]),
        (Model::Hsv, &[96.0, 50.0, 100.0], Model::Hcg, &[96.0, 50.0, 100.0]),
        (Model::Hsv, &[0.0, 100.0, 100.0], Model::Ansi16, &[91.0]),
        (Model::Hwb, &[0.0, 0.0, 0.0], Model::Rgb, &[255.0, 0.0, 0.0]),
        (Model::Hwb, &[96.0, 25.0, 25.0], Model::Hcg, &[96.0, 50.0, 50.0]),
        (Model::Cmyk, &[30.0, 0.0, 50.0, 22.0], Model::Rgb, &[139.23000000000002, 198.90000000000001, 99.450000000000003]),
        (Model::Xyz, &[25.0, 40.0, 15.0], Model::Rgb, &[97.36354718775813, 189.9012949117888, 85.015118205629179]),
        (Model::Xyz, &[25.0, 40.0, 15.0], Model::Lab, &[69.469530768456963, -48.043948235658938, 44.06758649341613]),
        (Model::Lab, &[69.0, -48.0, 44.0], Model::Xyz, &[24.539342015588943, 39.344389376358194, 14.679085163620853]),
        (Model::Lab, &[69.0, -48.0, 44.0], Model::Lch, &[69.0, 65.115282384398824, 137.48955292199915]),
        (Model::Lch, &[69.0, 65.0, 137.0], Model::Lab, &[69.0, -47.53799060524608, 44.32989340406241]),
        (Model::Ansi16, &[91.0], Model::Rgb, &[255.0, 0.0, 0.0]),
        (Model::Ansi16, &[37.0], Model::Rgb, &[170.0, 170.0, 170.0]),
        (Model::Ansi256, &[175.0], Model::Rgb, &[204.0, 102.0, 153.0]),
        (Model::Hcg, &[96.0, 50.0, 50.0], Model::Rgb, &[114.74999999999999, 191.25, 63.75]),
        (Model::Hcg, &[96.0, 50.0, 50.0], Model::Hsv, &[96.0, 66.666666666666657, 75.0]),
        (Model::Hcg, &[96.0, 50.0, 50.0], Model::Hsl, &[96.0, 50.0, 50.0]),
        (Model::Hcg, &[96.0, 50.0, 50.0], Model::Hwb, &[96.0, 25.0, 25.0]),
        (Model::Apple, &[35000.0, 50000.0, 25000.0], Model::Rgb, &[136.18677042801556, 194.55252918287937, 97.276264591439684]),
        (Model::Gray, &[50.0], Model::Rgb, &[127.5, 127.5, 127.5]),
        (Model::Gray, &[50.0], Model::Hsl, &[0.0, 0.0, 50.0]),
        (Model::Gray, &[50.0], Model::Hsv, &[0.0, 0.0, 50.0]),
        (Model::Gray, &[50.0], Model::Hwb, &[0.0, 100.0, 50.0]),
        (Model::Gray, &[50.0], Model::Cmyk, &[0.0, 0.0, 0.0, 50.0]),
        (Model::Gray, &[50.0], Model::Lab, &[50.0, 0.0, 0.0]),
    ];

    /// Every channel pair in the table whose arity the dispatch must honor.
    #[rustfmt::skip]
    const PAIRS: &[(Model, Model)] = &[
        (Model::Rgb, Model::Hsl), (Model::Rgb, Model::Hsv), (Model::Rgb, Model::Hwb),
        (Model::Rgb, Model::Cmyk), (Model::Rgb, Model::Keyword), (Model::Rgb, Model::Xyz),
        (Model::Rgb, Model::Lab), (Model::Rgb, Model::Hex), (Model::Rgb, Model::Ansi16),
        (Model::Rgb, Model::Ansi256), (Model::Rgb, Model::Hcg), (Model::Rgb, Model::Apple),
        (Model::Rgb, Model::Gray),
        (Model::Hsl, Model::Rgb), (Model::Hsl, Model::Hsv), (Model::Hsl, Model::Hcg),
        (Model::Hsv, Model::Rgb), (Model::Hsv, Model::Hsl), (Model::Hsv, Model::Ansi16),
        (Model::Hsv, Model::Hcg),
        (Model::Hwb, Model::Rgb), (Model::Hwb, Model::Hcg),
        (Model::Cmyk, Model::Rgb),
        (Model::Xyz, Model::Rgb), (Model::Xyz, Model::Lab),
        (Model::Lab, Model::Xyz), (Model::Lab, Model::Lch),
        (Model::Lch, Model::Lab),
        (Model::Hex, Model::Rgb),
        (Model::Keyword, Model::Rgb),
        (Model::Ansi16, Model::Rgb),
        (Model::Ansi256, Model::Rgb),
        (Model::Hcg, Model::Rgb), (Model::Hcg, Model::Hsv), (Model::Hcg, Model::Hsl),
        (Model::Hcg, Model::Hwb),
        (Model::Apple, Model::Rgb),
        (Model::Gray, Model::Rgb), (Model::Gray, Model::Hsl), (Model::Gray, Model::Hsv),
        (Model::Gray, Model::Hwb), (Model::Gray, Model::Cmyk), (Model::Gray, Model::Lab),
        (Model::Gray, Model::Hex),
    ];

    /// An in-range input for each source model.
    fn sample(model: Model) -> Value {
        match model {
            Model::Rgb => Value::Channels(vec![140.0, 200.0, 100.0]),
            Model::Hsl => Value::Channels(vec![96.0, 48.0, 59.0]),
            Model::Hsv => Value::Channels(vec![96.0, 50.0, 78.0]),
            Model::Hwb => Value::Channels(vec![96.0, 22.0, 39.0]),
            Model::Cmyk => Value::Channels(vec![30.0, 0.0, 50.0, 22.0]),
            Model::Xyz => Value::Channels(vec![25.0, 40.0, 15.0]),
            Model::Lab => Value::Channels(vec![69.0, -48.0, 44.0]),
            Model::Lch => Value::Channels(vec![69.0, 65.0, 137.0]),
            Model::Hex => Value::Hex("8CC864".to_string()),
            Model::Keyword => Value::Keyword("darkseagreen".to_string()),
            Model::Ansi16 => Value::Channels(vec![91.0]),
            Model::Ansi256 => Value::Channels(vec![175.0]),
            Model::Hcg => Value::Channels(vec![96.0, 50.0, 50.0]),
            Model::Apple => Value::Channels(vec![35000.0, 50000.0, 25000.0]),
            Model::Gray => Value::Channels(vec![50.0]),
        }
    }

    #[test]
    fn reference_conversions() {
        let converter = Converter::new().unwrap();

        for (from, input, to, expected) in TESTS {
            let input = Value::Channels(input.to_vec());
            let output = converter.convert(*from, *to, &input).unwrap();

            let Value::Channels(channels) = output else {
                panic!("{from} -> {to} did not produce channels");
            };
            assert_eq!(channels.len(), expected.len(), "{from} -> {to}");
            for (actual, expected) in channels.iter().zip(expected.iter()) {
                assert_component_eq!(*actual, *expected);
            }
        }
    }

    #[test]
    fn every_pair_honors_the_destination_shape() {
        let converter = Converter::new().unwrap();

        assert_eq!(PAIRS.len(), 44);

        for &(from, to) in PAIRS {
            let output = converter.convert(from, to, &sample(from)).unwrap();
            assert_eq!(output.kind(), to.kind(), "{from} -> {to}");
            if let Value::Channels(channels) = output {
                assert_eq!(
                    channels.len(),
                    converter.registry().channels_of(to),
                    "{from} -> {to}"
                );
            }
        }
    }

    #[test]
    fn hex_and_keyword_values_flow_through() {
        let converter = Converter::new().unwrap();

        let rgb = Value::Channels(vec![140.0, 200.0, 100.0]);
        assert_eq!(
            converter.convert(Model::Rgb, Model::Hex, &rgb),
            Ok(Value::Hex("8CC864".to_string()))
        );
        assert_eq!(
            converter.convert(Model::Rgb, Model::Keyword, &rgb),
            Ok(Value::Keyword("darkseagreen".to_string()))
        );

        assert_eq!(
            converter.convert(Model::Hex, Model::Rgb, &Value::Hex("#f07".to_string())),
            Ok(Value::Channels(vec![255.0, 0.0, 119.0]))
        );
        assert_eq!(
            converter.convert(
                Model::Keyword,
                Model::Rgb,
                &Value::Keyword("rebeccapurple".to_string()),
            ),
            Ok(Value::Channels(vec![102.0, 51.0, 153.0]))
        );
    }

    #[test]
    fn unknown_keywords_surface_as_convert_errors() {
        let converter = Converter::new().unwrap();

        let result = converter.convert(
            Model::Keyword,
            Model::Rgb,
            &Value::Keyword("notacolor".to_string()),
        );
        assert!(matches!(result, Err(ConvertError::UnknownKeyword(_))));
    }

    #[test]
    fn unsupported_pairs_are_rejected() {
        let converter = Converter::new().unwrap();

        assert_eq!(
            converter
                .convert(Model::Lab, Model::Ansi16, &sample(Model::Lab))
                .unwrap_err(),
            ConvertError::UnsupportedPair {
                from: Model::Lab,
                to: Model::Ansi16,
            }
        );
    }

    #[test]
    fn inputs_are_checked_before_any_formula_runs() {
        let converter = Converter::new().unwrap();

        assert_eq!(
            converter
                .convert(Model::Rgb, Model::Hsl, &Value::Channels(vec![1.0, 2.0]))
                .unwrap_err(),
            ConvertError::Arity {
                model: Model::Rgb,
                expected: 3,
                actual: 2,
            }
        );
        assert_eq!(
            converter
                .convert(Model::Rgb, Model::Hsl, &Value::Hex("8CC864".to_string()))
                .unwrap_err(),
            ConvertError::Kind {
                model: Model::Rgb,
                expected: ValueKind::Channels,
                actual: ValueKind::Hex,
            }
        );
    }

    #[test]
    fn gray_lightness_and_value_agree() {
        let converter = Converter::new().unwrap();

        let gray = Value::Channels(vec![37.0]);
        assert_eq!(
            converter.convert(Model::Gray, Model::Hsl, &gray),
            converter.convert(Model::Gray, Model::Hsv, &gray)
        );
    }

    #[test]
    fn rounded_conversions() {
        let converter = Converter::new().unwrap();

        let rgb = Value::Channels(vec![140.0, 200.0, 100.0]);
        assert_eq!(
            converter.convert_rounded(Model::Rgb, Model::Hsl, &rgb),
            Ok(Value::Channels(vec![96.0, 48.0, 59.0]))
        );
        assert_eq!(
            converter.convert_rounded(Model::Rgb, Model::Hex, &rgb),
            Ok(Value::Hex("8CC864".to_string()))
        );
    }
}
