//! Font registration and text measurement.

use plotters::style::{FontStyle, register_font};
use std::path::PathBuf;
use std::sync::OnceLock;

/// Environment variable naming a TrueType font to render text with.
pub const FONT_ENV: &str = "SS_PLOT_FONT";

const SYSTEM_FONTS: [&str; 8] = [
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

static FONT_READY: OnceLock<bool> = OnceLock::new();

/// Register a "sans-serif" font for the `ab_glyph` text path, once per process.
///
/// `ab_glyph` doesn't discover OS fonts, so a file is looked up explicitly.
/// Returns whether text can be drawn.
pub fn ensure_fonts_registered() -> bool {
    *FONT_READY.get_or_init(|| {
        let env_font = std::env::var_os(FONT_ENV).map(PathBuf::from);
        let candidates = env_font
            .into_iter()
            .chain(SYSTEM_FONTS.iter().map(PathBuf::from));
        for path in candidates {
            let Ok(bytes) = std::fs::read(&path) else {
                continue;
            };
            // plotters keeps a 'static reference to the font data
            let bytes: &'static [u8] = Box::leak(bytes.into_boxed_slice());
            if register_font("sans-serif", FontStyle::Normal, bytes).is_ok() {
                log::debug!("registered font {}", path.display());
                return true;
            }
            log::debug!("{} is not a usable font", path.display());
        }
        log::warn!("no TrueType font found, figures are drawn without text (set {FONT_ENV})");
        false
    })
}

/// Heuristic: estimate pixel width of text (Plotters has no built-in text measuring).
pub fn estimate_text_width_px(text: &str, font_px: u32) -> u32 {
    ((text.chars().count() as f32) * (font_px as f32) * 0.60).ceil() as u32
}

/// Widest of several labels, in pixels.
pub fn max_text_width_px<'a>(texts: impl IntoIterator<Item = &'a str>, font_px: u32) -> u32 {
    texts
        .into_iter()
        .map(|t| estimate_text_width_px(t, font_px))
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_grows_with_length_and_size() {
        assert_eq!(estimate_text_width_px("", 12), 0);
        assert!(estimate_text_width_px("abcd", 12) > estimate_text_width_px("ab", 12));
        assert!(estimate_text_width_px("ab", 24) > estimate_text_width_px("ab", 12));
        assert_eq!(
            max_text_width_px(["a", "abc", "ab"], 10),
            estimate_text_width_px("abc", 10)
        );
    }
}
