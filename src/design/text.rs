//! Free-form print text with a soft three-line cap.

/// Character bound enforced by the input surface (`maxLength` on the widget).
///
/// The state layer stores whatever it is given; this constant exists for
/// hosts wiring up the text box.
pub const MAX_TEXT_CHARS: usize = 100;

/// Number of lines actually printed on the garment.
pub const MAX_PRINTED_LINES: usize = 3;

/// The text a user wants printed on the garment.
///
/// Input is stored verbatim on every keystroke. The line cap is a soft UI
/// cap: lines beyond [`MAX_PRINTED_LINES`] stay in storage but are never
/// rendered, and no error is raised.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DesignText {
    raw: String,
}

impl DesignText {
    /// Creates an empty text box.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `text` verbatim, replacing the previous contents.
    pub fn set(&mut self, text: impl Into<String>) {
        self.raw = text.into();
    }

    /// Clears the stored text.
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// The raw stored string, including any lines beyond the print cap.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// The lines that make it onto the garment: the first three
    /// newline-delimited segments.
    ///
    /// An empty string yields a single empty line, not zero lines, matching
    /// `str::split` semantics: the preview shows one (blank) line and the
    /// line counter reads 1.
    pub fn printed_lines(&self) -> Vec<&str> {
        self.raw.split('\n').take(MAX_PRINTED_LINES).collect()
    }

    /// The line-counter label shown next to the text box.
    ///
    /// Reads `"3 (maximum)"` once the input holds more than three segments;
    /// the stored text itself is never truncated.
    pub fn line_count_label(&self) -> String {
        let segments = self.raw.split('\n').count();
        if segments <= MAX_PRINTED_LINES {
            segments.to_string()
        } else {
            format!("{MAX_PRINTED_LINES} (maximum)")
        }
    }
}
