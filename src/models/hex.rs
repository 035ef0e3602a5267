//! Packing RGB channels into hex strings and scanning hex strings back
//! out of arbitrary input.

use crate::models::Rgb;
use crate::Component;

/// Pack rounded RGB channels into an uppercase six digit hex string.
pub(crate) fn pack(red: Component, green: Component, blue: Component) -> String {
    let integer = (((red.round() as u32) & 0xff) << 16)
        + (((green.round() as u32) & 0xff) << 8)
        + ((blue.round() as u32) & 0xff);

    format!("{integer:06X}")
}

/// Scan `input` for the first run of six hex digits, or failing that at
/// the same position a run of three which is widened by doubling each
/// digit. Input with no hex run at all decodes to black.
pub(crate) fn parse(input: &str) -> Rgb {
    let bytes = input.as_bytes();

    for start in 0..bytes.len() {
        if let Some(integer) = hex_run(&bytes[start..], 6, false)
            .or_else(|| hex_run(&bytes[start..], 3, true))
        {
            let red = (integer >> 16) & 0xff;
            let green = (integer >> 8) & 0xff;
            let blue = integer & 0xff;

            return Rgb::new(red as Component, green as Component, blue as Component);
        }
    }

    Rgb::new(0.0, 0.0, 0.0)
}

fn hex_run(bytes: &[u8], length: usize, doubled: bool) -> Option<u32> {
    if bytes.len() < length {
        return None;
    }

    let mut integer = 0u32;
    for &byte in &bytes[..length] {
        let digit = (byte as char).to_digit(16)?;
        if doubled {
            integer = (integer << 8) | (digit << 4) | digit;
        } else {
            integer = (integer << 4) | digit;
        }
    }

    Some(integer)
}
