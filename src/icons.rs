//! Icon service for managing different icon themes
//!
//! This module provides a centralized way to manage icons throughout the application,
//! supporting different themes like emoji, Unicode, and ASCII fallbacks.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// UI element icons
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub questions_title: &'static str,
    pub categories_title: &'static str,
    pub search: &'static str,
    pub answer: &'static str,
    pub error: &'static str,
    pub info: &'static str,
    pub warning: &'static str,
}

/// Icons for the trivia categories the stock backend ships with
#[derive(Debug, Clone)]
pub struct CategoryIcons {
    pub science: &'static str,
    pub art: &'static str,
    pub geography: &'static str,
    pub history: &'static str,
    pub entertainment: &'static str,
    pub sports: &'static str,
    pub other: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub ui: UiIcons,
    pub categories: CategoryIcons,
    pub difficulty: &'static str,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone)]
pub struct IconService {
    current_theme: IconTheme,
}

impl Default for IconService {
    fn default() -> Self {
        Self::new(IconTheme::default())
    }
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                questions_title: "❓",
                categories_title: "📚",
                search: "🔍",
                answer: "💬",
                error: "❌",
                info: "💡",
                warning: "⚠️",
            },
            categories: CategoryIcons {
                science: "🔬",
                art: "🎨",
                geography: "🌍",
                history: "📜",
                entertainment: "🎬",
                sports: "⚽",
                other: "📁",
            },
            difficulty: "⭐",
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                questions_title: "▶",
                categories_title: "◆",
                search: "⌕",
                answer: "↳",
                error: "✗",
                info: "ⓘ",
                warning: "⚠",
            },
            categories: CategoryIcons {
                science: "⚗",
                art: "✎",
                geography: "◍",
                history: "⌛",
                entertainment: "♫",
                sports: "⚑",
                other: "◇",
            },
            difficulty: "★",
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            ui: UiIcons {
                questions_title: ">",
                categories_title: "#",
                search: "/",
                answer: "=>",
                error: "X",
                info: "i",
                warning: "!",
            },
            categories: CategoryIcons {
                science: "S",
                art: "A",
                geography: "G",
                history: "H",
                entertainment: "E",
                sports: "P",
                other: "-",
            },
            difficulty: "*",
        }
    }

    /// Icon for a category, matched case-insensitively by name
    #[must_use]
    pub fn category(&self, name: &str) -> &'static str {
        let icons = self.icons().categories;
        match name.trim().to_lowercase().as_str() {
            "science" => icons.science,
            "art" => icons.art,
            "geography" => icons.geography,
            "history" => icons.history,
            "entertainment" => icons.entertainment,
            "sports" => icons.sports,
            _ => icons.other,
        }
    }

    /// Difficulty rendered as repeated marks, e.g. `***` for 3
    #[must_use]
    pub fn difficulty(&self, level: u8) -> String {
        self.icons().difficulty.repeat(usize::from(level.min(5)))
    }

    #[must_use]
    pub fn questions_title(&self) -> &'static str {
        self.icons().ui.questions_title
    }

    #[must_use]
    pub fn categories_title(&self) -> &'static str {
        self.icons().ui.categories_title
    }

    #[must_use]
    pub fn search(&self) -> &'static str {
        self.icons().ui.search
    }

    #[must_use]
    pub fn answer(&self) -> &'static str {
        self.icons().ui.answer
    }

    #[must_use]
    pub fn error(&self) -> &'static str {
        self.icons().ui.error
    }

    #[must_use]
    pub fn info(&self) -> &'static str {
        self.icons().ui.info
    }

    #[must_use]
    pub fn warning(&self) -> &'static str {
        self.icons().ui.warning
    }
}
