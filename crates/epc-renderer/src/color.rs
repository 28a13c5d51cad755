//! Rating to pointer color mapping.

use epc_common::RatingScale;
use image::Rgba;

/// A band color, kept both as the hex code and as a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swatch {
    pub hex: &'static str,
    pub rgba: Rgba<u8>,
}

impl Swatch {
    /// Build from a `#rrggbb` literal. Malformed codes fail at compile time
    /// when used in a constant.
    pub const fn from_hex(hex: &'static str) -> Self {
        let b = hex.as_bytes();
        assert!(b.len() == 7 && b[0] == b'#', "expected #rrggbb");
        Self {
            hex,
            rgba: Rgba([
                hex_byte(b[1], b[2]),
                hex_byte(b[3], b[4]),
                hex_byte(b[5], b[6]),
                255,
            ]),
        }
    }
}

const fn hex_digit(d: u8) -> u8 {
    match d {
        b'0'..=b'9' => d - b'0',
        b'a'..=b'f' => d - b'a' + 10,
        b'A'..=b'F' => d - b'A' + 10,
        _ => panic!("invalid hex digit"),
    }
}

const fn hex_byte(hi: u8, lo: u8) -> u8 {
    hex_digit(hi) * 16 + hex_digit(lo)
}

/// A rating band: lower bound (inclusive) and its color on each scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorBand {
    pub min_value: i32,
    pub eer: Swatch,
    pub eir: Swatch,
}

const fn band(min_value: i32, eer: &'static str, eir: &'static str) -> ColorBand {
    ColorBand {
        min_value,
        eer: Swatch::from_hex(eer),
        eir: Swatch::from_hex(eir),
    }
}

/// Bands ordered from highest to lowest; the first band whose lower bound
/// the value reaches wins. The last band catches everything below 21.
pub static COLOR_BANDS: [ColorBand; 7] = [
    band(92, "#127d5a", "#84c6e7"),
    band(81, "#2ca55a", "#4aacda"),
    band(69, "#8cbd42", "#269ad1"),
    band(55, "#f7ce17", "#1176b9"),
    band(39, "#f4a96a", "#bebdbb"),
    band(21, "#ed8024", "#9f9fa0"),
    band(i32::MIN, "#e4203a", "#818281"),
];

impl ColorBand {
    pub fn swatch(&self, scale: RatingScale) -> &Swatch {
        match scale {
            RatingScale::Eer => &self.eer,
            RatingScale::Eir => &self.eir,
        }
    }
}

/// Band a rating falls into. Defined for every integer.
pub fn band_for(value: i32) -> &'static ColorBand {
    COLOR_BANDS
        .iter()
        .find(|band| value >= band.min_value)
        .unwrap_or(&COLOR_BANDS[COLOR_BANDS.len() - 1])
}

/// Hex color code for a rating on the given scale.
pub fn color_hex(value: i32, scale: RatingScale) -> &'static str {
    band_for(value).swatch(scale).hex
}

/// Pointer fill color for a rating on the given scale.
pub fn color_for(value: i32, scale: RatingScale) -> Rgba<u8> {
    band_for(value).swatch(scale).rgba
}
