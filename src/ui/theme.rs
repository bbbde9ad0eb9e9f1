//! # Theme System
//!
//! Semantic colour palette for every screen.
//!
//! Rendering code never hardcodes `ratatui::style::Color` values; it reads
//! the [`Theme`] held by the [`App`](crate::ui::App). `F2` cycles through the
//! built-in palettes and the choice is stored in the config file.
//!
//! ## Built-in Themes
//!
//! - **FitLazy** (default) - dark navy with the orange/violet brand gradient
//! - **Catppuccin Mocha** - warm, dark pastel theme
//! - **Dracula** - dark theme with vivid colors
//! - **Nord** - arctic, north-bluish color palette
//! - **Gruvbox Dark** - retro groove color scheme

use ratatui::style::Color;

/// All colors used by the FitLazy TUI, grouped by semantic role.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Human-readable name, also the key stored in the config file.
    pub name: &'static str,

    /// Background of cards and the screen.
    pub bg: Color,

    /// Primary text.
    pub fg: Color,
    /// Hints, separators, disabled buttons.
    pub fg_dim: Color,

    /// Brand colour: focused borders, primary buttons, progress bars.
    pub accent: Color,
    /// Second brand colour: premium badges and upsell cards.
    pub secondary: Color,

    /// Completed days, easy workouts.
    pub success: Color,
    /// Disclaimer and warnings.
    pub error: Color,

    /// Background of the focused field or selected row.
    pub highlight_bg: Color,
}

impl Theme {
    /// All built-in themes, in cycling order.
    pub fn all() -> &'static [Theme] {
        &BUILT_IN_THEMES
    }

    /// Find a built-in theme by name (case-insensitive).
    pub fn by_name(name: &str) -> Option<&'static Theme> {
        BUILT_IN_THEMES
            .iter()
            .find(|t| t.name.eq_ignore_ascii_case(name))
    }

    pub fn default_theme() -> &'static Theme {
        &BUILT_IN_THEMES[0]
    }

    /// The theme after this one, wrapping around.
    pub fn next(&self) -> &'static Theme {
        let index = BUILT_IN_THEMES
            .iter()
            .position(|t| t.name == self.name)
            .map_or(0, |i| (i + 1) % BUILT_IN_THEMES.len());
        &BUILT_IN_THEMES[index]
    }

    pub fn names() -> Vec<&'static str> {
        BUILT_IN_THEMES.iter().map(|t| t.name).collect()
    }
}

static BUILT_IN_THEMES: [Theme; 5] = [
    // 0 - FitLazy (default)
    Theme {
        name: "FitLazy",
        bg: Color::Rgb(26, 31, 44),
        fg: Color::Rgb(241, 245, 249),
        fg_dim: Color::Rgb(148, 163, 184),
        accent: Color::Rgb(249, 115, 22),     // orange
        secondary: Color::Rgb(139, 92, 246),  // violet
        success: Color::Rgb(34, 197, 94),
        error: Color::Rgb(239, 68, 68),
        highlight_bg: Color::Rgb(51, 41, 44),
    },
    // 1 - Catppuccin Mocha
    Theme {
        name: "Catppuccin Mocha",
        bg: Color::Rgb(30, 30, 46),            // base
        fg: Color::Rgb(205, 214, 244),         // text
        fg_dim: Color::Rgb(108, 112, 134),     // overlay0
        accent: Color::Rgb(250, 179, 135),     // peach
        secondary: Color::Rgb(203, 166, 247),  // mauve
        success: Color::Rgb(166, 227, 161),    // green
        error: Color::Rgb(243, 139, 168),      // red
        highlight_bg: Color::Rgb(69, 71, 90),  // surface1
    },
    // 2 - Dracula
    Theme {
        name: "Dracula",
        bg: Color::Rgb(40, 42, 54),
        fg: Color::Rgb(248, 248, 242),
        fg_dim: Color::Rgb(98, 114, 164),
        accent: Color::Rgb(255, 184, 108),    // orange
        secondary: Color::Rgb(189, 147, 249), // purple
        success: Color::Rgb(80, 250, 123),
        error: Color::Rgb(255, 85, 85),
        highlight_bg: Color::Rgb(68, 71, 90),
    },
    // 3 - Nord
    Theme {
        name: "Nord",
        bg: Color::Rgb(46, 52, 64),
        fg: Color::Rgb(216, 222, 233),
        fg_dim: Color::Rgb(76, 86, 106),
        accent: Color::Rgb(208, 135, 112),    // aurora orange
        secondary: Color::Rgb(180, 142, 173), // aurora purple
        success: Color::Rgb(163, 190, 140),
        error: Color::Rgb(191, 97, 106),
        highlight_bg: Color::Rgb(67, 76, 94),
    },
    // 4 - Gruvbox Dark
    Theme {
        name: "Gruvbox Dark",
        bg: Color::Rgb(40, 40, 40),
        fg: Color::Rgb(235, 219, 178),
        fg_dim: Color::Rgb(146, 131, 116),
        accent: Color::Rgb(254, 128, 25),     // orange
        secondary: Color::Rgb(211, 134, 155), // purple
        success: Color::Rgb(184, 187, 38),
        error: Color::Rgb(251, 73, 52),
        highlight_bg: Color::Rgb(80, 73, 69),
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    /// Convert a catppuccin color to a ratatui Color via its RGB values.
    fn ctp(color: catppuccin::Color) -> Color {
        Color::Rgb(color.rgb.r, color.rgb.g, color.rgb.b)
    }

    #[test]
    fn test_default_is_fitlazy() {
        assert_eq!(Theme::default_theme().name, "FitLazy");
    }

    #[test]
    fn test_by_name_case_insensitive() {
        assert!(Theme::by_name("fitlazy").is_some());
        assert!(Theme::by_name("NORD").is_some());
        assert!(Theme::by_name("solarized").is_none());
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut theme = Theme::default_theme();
        for _ in 0..Theme::all().len() {
            theme = theme.next();
        }
        assert_eq!(theme.name, Theme::default_theme().name);
        assert_eq!(Theme::default_theme().next().name, "Catppuccin Mocha");
    }

    #[test]
    fn test_catppuccin_mocha_matches_palette() {
        let mocha = catppuccin::PALETTE.mocha.colors;
        let theme = Theme::by_name("Catppuccin Mocha").expect("theme exists");
        assert_eq!(theme.bg, ctp(mocha.base));
        assert_eq!(theme.fg, ctp(mocha.text));
        assert_eq!(theme.accent, ctp(mocha.peach));
        assert_eq!(theme.secondary, ctp(mocha.mauve));
        assert_eq!(theme.success, ctp(mocha.green));
        assert_eq!(theme.error, ctp(mocha.red));
    }

    #[test]
    fn test_all_themes_have_distinct_names() {
        let mut names = Theme::names();
        let count = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), count, "duplicate theme names found");
    }
}
