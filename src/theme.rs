//! Interface theme palettes and the global cycling shortcut.
//!
//! Themes recolor the surrounding UI only; cycling never touches design
//! state. The host registers one global key listener for the lifetime of the
//! view (and removes it on teardown) and forwards matching presses to
//! [`crate::GarmentCustomizer::handle_key`].

// ============================================================================
// Palette catalog
// ============================================================================

/// A named set of five interface colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub text: &'static str,
}

/// The fixed, ordered theme catalog. Cycling walks this in order and wraps.
pub static THEME_CATALOG: [Palette; 3] = [
    Palette {
        name: "Classic",
        primary: "#3b82f6",
        secondary: "#f3f4f6",
        accent: "#111827",
        background: "#ffffff",
        text: "#1f2937",
    },
    Palette {
        name: "Dark Mode",
        primary: "#8b5cf6",
        secondary: "#1f2937",
        accent: "#f3f4f6",
        background: "#111827",
        text: "#f9fafb",
    },
    Palette {
        name: "Vibrant",
        primary: "#ec4899",
        secondary: "#fdf2f8",
        accent: "#6d28d9",
        background: "#fffbeb",
        text: "#4c1d95",
    },
];

/// Tracks which catalog entry is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeCycler {
    index: usize,
}

impl ThemeCycler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Index of the active palette within [`THEME_CATALOG`].
    pub fn index(&self) -> usize {
        self.index
    }

    /// The active palette.
    pub fn active(&self) -> &'static Palette {
        &THEME_CATALOG[self.index]
    }

    /// Advances to the next palette, wrapping from the last back to the
    /// first.
    pub fn cycle(&mut self) {
        self.index = (self.index + 1) % THEME_CATALOG.len();
    }
}

// ============================================================================
// Keyboard shortcut
// ============================================================================

/// Modifier keys recognized by the theme shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modifier {
    Alt,
    Ctrl,
    Shift,
}

/// A modifier-plus-letter combination observed globally, regardless of which
/// widget has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifier: Modifier,
    pub key: char,
}

/// The combination that cycles the theme: Alt+Q.
pub const THEME_SHORTCUT: KeyCombo = KeyCombo {
    modifier: Modifier::Alt,
    key: 'q',
};

impl KeyCombo {
    /// Whether a key press matches this combo.
    ///
    /// The letter comparison is ASCII case-insensitive; a press with no
    /// modifier never matches.
    pub fn matches(&self, modifier: Option<Modifier>, key: char) -> bool {
        modifier == Some(self.modifier) && key.eq_ignore_ascii_case(&self.key)
    }
}

// ============================================================================
// Tests
// ============================================================================
