use ratatui::style::{Color, Modifier, Style};
use rolltext_core::config::ThemeConfig;

/// Colors used by the ticker widgets
#[derive(Debug, Clone)]
pub struct Theme {
    pub bg: Color,
    pub bar_bg: Color,
    pub fg: Color,
    pub dim: Color,
    pub accent: Color,
    pub warning: Color,
}

impl Default for Theme {
    fn default() -> Self {
        // Gruvbox Material dark
        Self {
            bg: Color::Rgb(0x28, 0x28, 0x28),
            bar_bg: Color::Rgb(0x45, 0x40, 0x3d),
            fg: Color::Rgb(0xd4, 0xbe, 0x98),
            dim: Color::Rgb(0x7c, 0x6f, 0x64),
            accent: Color::Rgb(0xd8, 0xa6, 0x57),
            warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        }
    }
}

impl Theme {
    /// Default palette with the configured overrides applied
    pub fn from_config(config: &ThemeConfig) -> Self {
        let mut theme = Self::default();
        if let Some(color) = config.foreground.as_deref().and_then(parse_hex_color) {
            theme.fg = color;
        }
        if let Some(color) = config.dim.as_deref().and_then(parse_hex_color) {
            theme.dim = color;
        }
        if let Some(color) = config.accent.as_deref().and_then(parse_hex_color) {
            theme.accent = color;
        }
        theme
    }

    /// Glyph sitting on the baseline
    pub fn glyph(&self) -> Style {
        Style::default().fg(self.fg).add_modifier(Modifier::BOLD)
    }

    /// Glyph scrolling in or out of view
    pub fn glyph_dim(&self) -> Style {
        Style::default().fg(self.dim)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn status_bar(&self) -> Style {
        Style::default().fg(self.fg).bg(self.bar_bg)
    }

    pub fn status_hint(&self) -> Style {
        Style::default().fg(self.dim).bg(self.bar_bg)
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("ff8000"), Some(Color::Rgb(255, 128, 0)));
        assert_eq!(parse_hex_color("#f80"), Some(Color::Rgb(255, 136, 0)));
        assert_eq!(parse_hex_color("#ff80"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ä00"), None);
    }

    #[test]
    fn test_overrides() {
        let config = ThemeConfig {
            foreground: Some("#ffffff".into()),
            dim: Some("not a color".into()),
            accent: None,
        };
        let theme = Theme::from_config(&config);
        let default = Theme::default();
        assert_eq!(theme.fg, Color::Rgb(255, 255, 255));
        assert_eq!(theme.dim, default.dim);
        assert_eq!(theme.accent, default.accent);
    }
}
