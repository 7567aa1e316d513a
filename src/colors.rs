//! Named plot colors with a regular and an emphasized (bolder) variant.
//!
//! Regular colors are muted so that an emphasized series stands out next to
//! them. Hex strings (`#RRGGBB`) bypass the palette and ignore emphasis.

use crate::error::{PlotError, Result};
use plotters::prelude::*;

/// (name, regular, emphasis)
const PALETTE: [(&str, RGBColor, RGBColor); 11] = [
    ("red", RGBColor(224, 122, 114), RGBColor(200, 30, 30)),
    ("orange", RGBColor(244, 170, 110), RGBColor(237, 110, 20)),
    ("yellow", RGBColor(240, 215, 110), RGBColor(230, 180, 0)),
    ("green", RGBColor(140, 196, 120), RGBColor(50, 140, 40)),
    ("blue", RGBColor(120, 160, 214), RGBColor(30, 90, 190)),
    ("purple", RGBColor(178, 145, 200), RGBColor(110, 50, 150)),
    ("brown", RGBColor(190, 150, 120), RGBColor(130, 80, 40)),
    ("pink", RGBColor(240, 170, 200), RGBColor(220, 70, 140)),
    ("gray", RGBColor(170, 170, 170), RGBColor(99, 99, 99)),
    ("black", RGBColor(0, 0, 0), RGBColor(0, 0, 0)),
    ("white", RGBColor(255, 255, 255), RGBColor(255, 255, 255)),
];

/// Resolve a color name to a concrete color.
pub fn get_plot_color(name: &str, emphasis: bool) -> Result<RGBAColor> {
    let key = name.trim().to_ascii_lowercase();
    if let Some(hex) = key.strip_prefix('#') {
        return parse_hex(hex)
            .map(|c| c.to_rgba())
            .ok_or_else(|| PlotError::UnknownColor(name.to_string()));
    }
    let key = if key == "grey" { "gray" } else { key.as_str() };
    PALETTE
        .iter()
        .find(|(n, _, _)| *n == key)
        .map(|(_, regular, bold)| (if emphasis { bold } else { regular }).to_rgba())
        .ok_or_else(|| PlotError::UnknownColor(name.to_string()))
}

fn parse_hex(hex: &str) -> Option<RGBColor> {
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emphasis_selects_bolder_variant() {
        let regular = get_plot_color("red", false).unwrap();
        let bold = get_plot_color("red", true).unwrap();
        assert_ne!(regular, bold);
        assert_eq!(bold, RGBAColor(200, 30, 30, 1.0));
    }

    #[test]
    fn names_are_case_insensitive_and_grey_is_gray() {
        assert_eq!(
            get_plot_color("Grey", false).unwrap(),
            get_plot_color("gray", false).unwrap()
        );
    }

    #[test]
    fn hex_colors_pass_through() {
        assert_eq!(
            get_plot_color("#4472C4", true).unwrap(),
            RGBAColor(68, 114, 196, 1.0)
        );
        assert!(get_plot_color("#12345", false).is_err());
    }

    #[test]
    fn unknown_name_is_error() {
        match get_plot_color("chartreuse", false) {
            Err(PlotError::UnknownColor(n)) => assert_eq!(n, "chartreuse"),
            other => panic!("unexpected: {other:?}"),
        }
    }
}
