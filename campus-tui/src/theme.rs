//! Campus theme and color utilities.

use crate::notifications::NotificationLevel;
use campus_core::{parse_hex_color, ColorSettings};
use ratatui::style::Color;

#[derive(Debug, Clone)]
pub struct CampusTheme {
    pub bg: Color,
    pub bg_secondary: Color,
    pub primary: Color,
    pub secondary: Color,
    pub accent: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub border_focus: Color,
}

impl CampusTheme {
    pub fn campus() -> Self {
        Self {
            bg: Color::Rgb(16, 20, 28),
            bg_secondary: Color::Rgb(28, 34, 44),
            primary: Color::Rgb(64, 156, 255),
            secondary: Color::Rgb(255, 176, 48),
            accent: Color::Rgb(120, 220, 160),
            success: Color::Rgb(80, 220, 120),
            warning: Color::Rgb(255, 200, 60),
            error: Color::Rgb(255, 80, 80),
            info: Color::Rgb(64, 156, 255),
            text: Color::Rgb(230, 235, 240),
            text_dim: Color::Rgb(140, 150, 160),
            border: Color::Rgb(70, 80, 95),
            border_focus: Color::Rgb(64, 156, 255),
        }
    }

    /// Overlay the site administrator's colors onto the shipped palette.
    /// Unparseable values keep the shipped color.
    pub fn with_site_colors(mut self, colors: &ColorSettings) -> Self {
        self.primary = color_or(&colors.primary, self.primary);
        self.secondary = color_or(&colors.secondary, self.secondary);
        self.bg = color_or(&colors.background, self.bg);
        self.text = color_or(&colors.text, self.text);
        self.accent = color_or(&colors.accent, self.accent);
        self
    }
}

fn color_or(hex: &str, fallback: Color) -> Color {
    match parse_hex_color(hex) {
        Ok((r, g, b)) => Color::Rgb(r, g, b),
        Err(_) => fallback,
    }
}

pub fn notification_color(level: NotificationLevel, theme: &CampusTheme) -> Color {
    match level {
        NotificationLevel::Info => theme.info,
        NotificationLevel::Warning => theme.warning,
        NotificationLevel::Error => theme.error,
        NotificationLevel::Success => theme.success,
    }
}

pub fn academic_year_color(active: bool, theme: &CampusTheme) -> Color {
    if active {
        theme.success
    } else {
        theme.text_dim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site_colors() -> ColorSettings {
        ColorSettings {
            primary: "#0000ff".to_string(),
            secondary: "#00ff00".to_string(),
            background: "#101010".to_string(),
            text: "#fafafa".to_string(),
            accent: "#ff00ff".to_string(),
        }
    }

    #[test]
    fn site_colors_override_palette() {
        let theme = CampusTheme::campus().with_site_colors(&site_colors());
        assert_eq!(theme.primary, Color::Rgb(0, 0, 255));
        assert_eq!(theme.accent, Color::Rgb(255, 0, 255));
    }

    #[test]
    fn unparseable_color_keeps_default() {
        let mut colors = site_colors();
        colors.primary = "bright-blue".to_string();
        let default_primary = CampusTheme::campus().primary;

        let theme = CampusTheme::campus().with_site_colors(&colors);
        assert_eq!(theme.primary, default_primary);
    }

    #[test]
    fn notification_levels_map_to_distinct_colors() {
        let theme = CampusTheme::campus();
        assert_ne!(
            notification_color(NotificationLevel::Error, &theme),
            notification_color(NotificationLevel::Success, &theme)
        );
    }
}
