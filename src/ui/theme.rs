//! Theme and styling for the TUI.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Brand Colors
    pub primary: Color,
    pub accent: Color,
    pub success: Color,

    // Background Colors
    pub bg_dark: Color,

    // Text Colors
    pub text: Color,
    pub text_muted: Color,
    pub text_dim: Color,
}

/// Available theme names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeName {
    #[default]
    Default,
    KanagawaWave,
}

impl ThemeName {
    pub fn display_name(&self) -> &'static str {
        match self {
            ThemeName::Default => "Default",
            ThemeName::KanagawaWave => "Kanagawa Wave",
        }
    }
}

/// Theme struct that holds colors and provides style methods.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: ThemeName,
    pub colors: ThemeColors,
}

impl Theme {
    pub fn new(name: ThemeName) -> Self {
        let colors = match name {
            ThemeName::Default => Self::default_colors(),
            ThemeName::KanagawaWave => Self::kanagawa_wave_colors(),
        };
        Self { name, colors }
    }

    fn default_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(99, 102, 241),      // Indigo
            accent: Color::Rgb(0, 255, 0),          // Green, for the term
            success: Color::Rgb(34, 197, 94),       // Green

            bg_dark: Color::Rgb(15, 23, 42),        // Slate 900

            text: Color::Rgb(248, 250, 252),        // Slate 50
            text_muted: Color::Rgb(148, 163, 184),  // Slate 400
            text_dim: Color::Rgb(100, 116, 139),    // Slate 500
        }
    }

    /// Kanagawa Wave theme - inspired by kanagawa.nvim
    fn kanagawa_wave_colors() -> ThemeColors {
        ThemeColors {
            primary: Color::Rgb(0x7E, 0x9C, 0xD8),      // crystalBlue
            accent: Color::Rgb(0xD2, 0x7E, 0x99),       // sakuraPink
            success: Color::Rgb(0x98, 0xBB, 0x6C),      // springGreen

            bg_dark: Color::Rgb(0x16, 0x16, 0x1D),      // sumiInk0

            text: Color::Rgb(0xDC, 0xD7, 0xBA),         // fujiWhite
            text_muted: Color::Rgb(0xC8, 0xC0, 0x93),   // oldWhite
            text_dim: Color::Rgb(0x54, 0x54, 0x6D),     // sumiInk4
        }
    }

    // ══════════════════════════════════════════════════════════════════════
    // Styles
    // ══════════════════════════════════════════════════════════════════════

    pub fn card_border(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
    }

    pub fn term(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn meaning(&self) -> Style {
        Style::default()
            .fg(self.colors.success)
    }

    pub fn placeholder(&self) -> Style {
        Style::default()
            .fg(self.colors.text_dim)
            .add_modifier(Modifier::ITALIC)
    }

    pub fn label(&self) -> Style {
        Style::default()
            .fg(self.colors.text_muted)
    }

    pub fn counter(&self) -> Style {
        Style::default()
            .fg(self.colors.primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key_hint(&self) -> Style {
        Style::default()
            .fg(self.colors.text_dim)
    }

    pub fn key_highlight(&self) -> Style {
        Style::default()
            .fg(self.colors.accent)
            .add_modifier(Modifier::BOLD)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeName::Default)
    }
}
