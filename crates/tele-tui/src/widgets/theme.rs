//! Semantic style roles and their terminal styles.
//!
//! Renderers ask for a `Role` or a `DepthBand`; only this module knows
//! colors.

use std::str::FromStr;

use ratatui::style::{Color, Modifier, Style};
use tele_core::config::ThemeConfig;

use crate::features::prompter::DepthBand;

/// Semantic style identifiers used outside the prompter rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Screen titles and the prompter header.
    Header,
    /// Horizontal rules.
    Separator,
    /// Key hints at the bottom.
    Help,
    /// Transient error line.
    Error,
    /// Highlighted menu row / browser cursor.
    Selected,
    /// Regular menu rows.
    Item,
    /// Entries that cannot be chosen.
    Disabled,
    /// Directories in the file browser.
    Directory,
    /// Placeholder text in the entry field.
    Placeholder,
    /// Cursor cell of the entry field.
    Cursor,
}

/// Capability for turning roles and depth bands into styles.
pub trait StyleSheet {
    fn band(&self, band: DepthBand) -> Style;

    fn role(&self, role: Role) -> Style;
}

/// Configurable palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    header: Color,
    center_fg: Color,
    center_bg: Color,
    near: Color,
    mid: Color,
    far: Color,
    error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    /// Builds a theme, keeping the default for any color that fails to parse.
    pub fn from_config(config: &ThemeConfig) -> Self {
        let defaults = ThemeConfig::default();
        let pick = |name: &str, value: &str, fallback: &str| {
            parse_color(value).unwrap_or_else(|| {
                tracing::warn!(field = name, value, "invalid theme color, using default");
                parse_color(fallback).unwrap_or(Color::Reset)
            })
        };

        Self {
            header: pick("header", &config.header, &defaults.header),
            center_fg: pick("center_fg", &config.center_fg, &defaults.center_fg),
            center_bg: pick("center_bg", &config.center_bg, &defaults.center_bg),
            near: pick("near", &config.near, &defaults.near),
            mid: pick("mid", &config.mid, &defaults.mid),
            far: pick("far", &config.far, &defaults.far),
            error: pick("error", &config.error, &defaults.error),
        }
    }
}

impl StyleSheet for Theme {
    fn band(&self, band: DepthBand) -> Style {
        match band {
            DepthBand::Center => Style::default()
                .fg(self.center_fg)
                .bg(self.center_bg)
                .add_modifier(Modifier::BOLD),
            DepthBand::Near => Style::default().fg(self.near),
            DepthBand::Mid => Style::default().fg(self.mid),
            DepthBand::Far => Style::default().fg(self.far),
        }
    }

    fn role(&self, role: Role) -> Style {
        match role {
            Role::Header => Style::default().fg(self.header).add_modifier(Modifier::BOLD),
            Role::Separator | Role::Help | Role::Placeholder => {
                Style::default().fg(Color::DarkGray)
            }
            Role::Error => Style::default().fg(self.error),
            Role::Selected => Style::default()
                .fg(self.center_fg)
                .add_modifier(Modifier::BOLD),
            Role::Item => Style::default().fg(self.near),
            Role::Disabled => Style::default()
                .fg(self.far)
                .add_modifier(Modifier::DIM),
            Role::Directory => Style::default().fg(Color::Cyan),
            Role::Cursor => Style::default().add_modifier(Modifier::REVERSED),
        }
    }
}

fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_palette() {
        let theme = Theme::default();
        let center = theme.band(DepthBand::Center);
        assert_eq!(center.fg, Some(Color::Rgb(0xFF, 0xFF, 0x00)));
        assert_eq!(center.bg, Some(Color::Rgb(0x33, 0x33, 0x33)));
        assert!(center.add_modifier.contains(Modifier::BOLD));
        assert_eq!(
            theme.band(DepthBand::Mid).fg,
            Some(Color::Rgb(0x88, 0x88, 0x88))
        );
        assert_eq!(theme.role(Role::Header).fg, Some(Color::Indexed(12)));
        assert_eq!(theme.role(Role::Error).fg, Some(Color::Red));
    }

    #[test]
    fn test_invalid_color_falls_back() {
        let config = ThemeConfig {
            far: "not-a-color".to_string(),
            near: "green".to_string(),
            ..ThemeConfig::default()
        };
        let theme = Theme::from_config(&config);
        assert_eq!(
            theme.band(DepthBand::Far).fg,
            Some(Color::Rgb(0x44, 0x44, 0x44))
        );
        assert_eq!(theme.band(DepthBand::Near).fg, Some(Color::Green));
    }
}
