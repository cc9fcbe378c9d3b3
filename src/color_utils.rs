//lifegrid/src/color_utils.rs

// Maps stage color tokens to concrete RGB values.
// This file has NO dependencies on ratatui so it can be used from the text
// renderer, the TUI and tests alike.

use crate::model::StageColor;

/// Text color used on light backgrounds (indigo 900).
pub const DARK_TEXT: (u8, u8, u8) = (49, 46, 129);
/// Text color used on dark backgrounds.
pub const LIGHT_TEXT: (u8, u8, u8) = (255, 255, 255);

/// RGB of the light (300) shade of each palette color.
pub fn stage_rgb(color: StageColor) -> (u8, u8, u8) {
    match color {
        StageColor::Teal => (94, 234, 212),
        StageColor::Sky => (125, 211, 252),
        StageColor::Amber => (252, 211, 77),
        StageColor::Rose => (253, 164, 175),
        StageColor::Lime => (190, 242, 100),
        StageColor::Violet => (196, 181, 253),
    }
}

/// Determines if text on top of this color should be white rather than black.
pub fn is_dark(r: u8, g: u8, b: u8) -> bool {
    // Perceptual luminance approximation
    let brightness = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    brightness < 128.0
}

/// Readable text color on top of `bg`.
pub fn text_rgb_on((r, g, b): (u8, u8, u8)) -> (u8, u8, u8) {
    if is_dark(r, g, b) { LIGHT_TEXT } else { DARK_TEXT }
}

/// Wraps `text` in a 24-bit ANSI foreground escape.
pub fn ansi_fg(color: StageColor, text: &str) -> String {
    let (r, g, b) = stage_rgb(color);
    format!("\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_palette_shades() {
        assert_eq!(stage_rgb(StageColor::Teal), (0x5e, 0xea, 0xd4));
        assert_eq!(stage_rgb(StageColor::Violet), (0xc4, 0xb5, 0xfd));
    }

    #[test]
    fn test_stage_labels_use_dark_text() {
        for color in StageColor::iter() {
            assert_eq!(text_rgb_on(stage_rgb(color)), DARK_TEXT, "{}", color);
        }
    }

    #[test]
    fn test_dark_background_gets_light_text() {
        assert!(is_dark(30, 27, 75));
        assert_eq!(text_rgb_on((30, 27, 75)), LIGHT_TEXT);
        assert_eq!(text_rgb_on((255, 255, 255)), DARK_TEXT);
    }

    #[test]
    fn test_ansi_wraps_text() {
        let s = ansi_fg(StageColor::Teal, "c");
        assert_eq!(s, "\x1b[38;2;94;234;212mc\x1b[0m");
    }
}
