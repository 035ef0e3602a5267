use polychrome::{Converter, Model, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let converter = Converter::new()?;

    let keywords = [
        "tomato",
        "gold",
        "mediumseagreen",
        "steelblue",
        "rebeccapurple",
        "slategray",
    ];

    for keyword in keywords {
        let input = Value::Keyword(keyword.to_string());
        let rgb = converter.convert_rounded(Model::Keyword, Model::Rgb, &input)?;

        let Value::Channels(channels) = &rgb else {
            unreachable!()
        };
        let (r, g, b) = (
            channels[0] as u8,
            channels[1] as u8,
            channels[2] as u8,
        );

        let hex = converter.convert(Model::Rgb, Model::Hex, &rgb)?;
        let Value::Hex(hex) = hex else { unreachable!() };

        let ansi256 = converter.convert_rounded(Model::Rgb, Model::Ansi256, &rgb)?;
        let Value::Channels(code) = &ansi256 else {
            unreachable!()
        };

        println!(
            "\x1b[48;2;{r};{g};{b}m        \x1b[0m  {keyword:<16} #{hex}  ansi256 {}",
            code[0]
        );
    }

    Ok(())
}
