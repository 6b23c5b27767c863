//! UI widgets: file panel, status bar, and popup dialogs.
//!
//! Theme colors arrive as strings from `fsnek-core`; [`parse_color`]
//! converts them to [`ratatui::style::Color`] at render time.

pub mod panel;
pub mod popup;
pub mod statusbar;

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        // is_ascii: byte-indexed slicing below must not land mid-char
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("dark_gray"), Color::DarkGray);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("reset"), Color::Reset);
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("DARK_GRAY"), Color::DarkGray);
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
    }

    #[test]
    fn parse_color_unknown_returns_reset() {
        assert_eq!(parse_color("nonexistent"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
    }

    #[test]
    fn parse_color_non_ascii_hex_returns_reset() {
        // 6 chars but 7 bytes; byte slicing must not be reached.
        assert_eq!(parse_color("#1é345"), Color::Reset);
        assert_eq!(parse_color("#ffffé"), Color::Reset);
    }
}
