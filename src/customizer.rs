//! Top-level customization controller.

use crate::design::{
    Build, CandidateFile, CommitOutcome, DecodeCompletion, DesignText, DragState, GarmentColor,
    ImageSlot, IngestTicket, Measurements,
};
use crate::preview::{self, ComposedDesign};
use crate::profile::{ArtworkSummary, DesignProfile, OrderTicket};
use crate::theme::{Modifier, THEME_SHORTCUT, ThemeCycler};

// ============================================================================
// Configurable Trait
// ============================================================================

/// Trait for types that can be configured from a [`DesignProfile`].
pub trait Configurable {
    /// Applies a profile's settings to this instance.
    fn apply_profile(&mut self, profile: &DesignProfile);

    /// Exports the current settings as a profile.
    fn export_profile(&self) -> DesignProfile;
}

// ============================================================================
// Input Events
// ============================================================================

/// A discrete user input event, as forwarded by the host UI runtime.
///
/// Events are dispatched serially; each one mutates exactly one piece of
/// state, after which the host re-derives the preview via
/// [`GarmentCustomizer::preview`].
#[derive(Debug, Clone)]
pub enum InputEvent {
    /// A swatch was clicked.
    SelectColor(GarmentColor),
    /// The text box content changed (full new content, per keystroke).
    EditText(String),
    /// The height field was edited.
    SetHeight(i32),
    /// The weight field was edited.
    SetWeight(i32),
    /// A build category was picked from the selector.
    SetBuild(Build),
    /// A drag entered the drop target.
    DragEnter,
    /// A drag moved over the drop target.
    DragOver,
    /// A drag left the drop target without dropping.
    DragLeave,
    /// A file was dropped on the drop target.
    DropFile(CandidateFile),
    /// A file was selected through the native picker.
    ChooseFile(CandidateFile),
    /// The remove button next to the thumbnail was clicked.
    RemoveImage,
    /// A key press observed by the global listener, regardless of focus.
    KeyPress {
        modifier: Option<Modifier>,
        key: char,
    },
}

// ============================================================================
// GarmentCustomizer
// ============================================================================

/// Owns the full customization state and wires input events to mutations.
///
/// One instance per customization session; nothing is shared across
/// instances. The composed design is re-derived from scratch on every
/// [`preview`](Self::preview) call rather than patched incrementally, so the
/// preview can never go stale.
///
/// # Example
///
/// ```
/// use garment_studio::{GarmentColor, GarmentCustomizer, InputEvent};
///
/// let mut studio = GarmentCustomizer::new();
/// studio.handle(InputEvent::SelectColor(GarmentColor::Black));
/// studio.handle(InputEvent::EditText("HELLO\nWORLD".into()));
///
/// let design = studio.preview();
/// assert_eq!(design.garment, GarmentColor::Black);
/// assert_eq!(design.lines, vec!["HELLO", "WORLD"]);
/// ```
#[derive(Debug, Default)]
pub struct GarmentCustomizer {
    garment: GarmentColor,
    text: DesignText,
    measurements: Measurements,
    slot: ImageSlot,
    drag: DragState,
    theme: ThemeCycler,
}

impl GarmentCustomizer {
    /// Creates a customizer in the default state: white garment, empty text,
    /// 180cm / 80kg / athletic, no image, first theme active.
    pub fn new() -> Self {
        Self::default()
    }

    // ---- State access ----

    pub fn garment(&self) -> GarmentColor {
        self.garment
    }

    pub fn text(&self) -> &DesignText {
        &self.text
    }

    pub fn measurements(&self) -> &Measurements {
        &self.measurements
    }

    pub fn image_slot(&self) -> &ImageSlot {
        &self.slot
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn theme(&self) -> &ThemeCycler {
        &self.theme
    }

    // ---- Event dispatch ----

    /// Routes an input event to the matching mutation.
    ///
    /// Ingestion events (`DropFile`, `ChooseFile`) return the ticket whose
    /// decode the host must drive; the result comes back through
    /// [`commit_decode`](Self::commit_decode). All other events return
    /// `None`.
    pub fn handle(&mut self, event: InputEvent) -> Option<IngestTicket> {
        match event {
            InputEvent::SelectColor(color) => {
                self.select_color(color);
                None
            }
            InputEvent::EditText(text) => {
                self.set_text(text);
                None
            }
            InputEvent::SetHeight(cm) => {
                self.measurements.set_height(cm);
                None
            }
            InputEvent::SetWeight(kg) => {
                self.measurements.set_weight(kg);
                None
            }
            InputEvent::SetBuild(build) => {
                self.measurements.set_build(build);
                None
            }
            InputEvent::DragEnter => {
                self.drag.drag_enter();
                None
            }
            InputEvent::DragOver => {
                self.drag.drag_over();
                None
            }
            InputEvent::DragLeave => {
                self.drag.drag_leave();
                None
            }
            InputEvent::DropFile(file) => self.drop_file(&file),
            InputEvent::ChooseFile(file) => self.choose_file(&file),
            InputEvent::RemoveImage => {
                self.remove_image();
                None
            }
            InputEvent::KeyPress { modifier, key } => {
                self.handle_key(modifier, key);
                None
            }
        }
    }

    // ---- Mutations ----

    /// Selects a garment base color. Total and idempotent.
    pub fn select_color(&mut self, color: GarmentColor) {
        self.garment = color;
    }

    /// Replaces the print text verbatim.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set(text);
    }

    pub fn set_height(&mut self, cm: i32) {
        self.measurements.set_height(cm);
    }

    pub fn set_weight(&mut self, kg: i32) {
        self.measurements.set_weight(kg);
    }

    pub fn set_build(&mut self, build: Build) {
        self.measurements.set_build(build);
    }

    pub fn drag_enter(&mut self) {
        self.drag.drag_enter();
    }

    pub fn drag_over(&mut self) {
        self.drag.drag_over();
    }

    pub fn drag_leave(&mut self) {
        self.drag.drag_leave();
    }

    /// Handles a drop: the drag highlight ends and the dropped file funnels
    /// into the same ingest as the picker.
    pub fn drop_file(&mut self, file: &CandidateFile) -> Option<IngestTicket> {
        self.drag.drop_finished();
        self.slot.begin_ingest(file)
    }

    /// Handles a native file-picker selection.
    pub fn choose_file(&mut self, file: &CandidateFile) -> Option<IngestTicket> {
        self.slot.begin_ingest(file)
    }

    /// Applies a finished decode to the image slot.
    pub fn commit_decode(&mut self, completion: DecodeCompletion) -> CommitOutcome {
        self.slot.commit(completion)
    }

    /// Clears the uploaded image immediately.
    pub fn remove_image(&mut self) {
        self.slot.remove();
    }

    /// Advances the interface theme. Design state is untouched.
    pub fn cycle_theme(&mut self) {
        self.theme.cycle();
    }

    /// Feeds a globally observed key press through the theme shortcut.
    ///
    /// Returns whether the press was consumed.
    pub fn handle_key(&mut self, modifier: Option<Modifier>, key: char) -> bool {
        if THEME_SHORTCUT.matches(modifier, key) {
            self.cycle_theme();
            true
        } else {
            false
        }
    }

    // ---- Derivations ----

    /// Re-derives the composed design from the current state.
    ///
    /// Pure recomputation on every call; callers must not hold the result
    /// across a state mutation.
    pub fn preview(&self) -> ComposedDesign<'_> {
        preview::compose(self.garment, &self.slot, &self.text)
    }

    /// Assembles the Add-to-Cart payload.
    ///
    /// This is a labeled action point only; nothing is sent or persisted,
    /// an external order system consumes the ticket.
    pub fn order_ticket(&self) -> OrderTicket {
        OrderTicket {
            design: self.export_profile(),
            artwork: self.slot.artwork().map(|a| ArtworkSummary {
                name: a.name.clone(),
                width: a.image.width(),
                height: a.image.height(),
            }),
        }
    }
}

impl Configurable for GarmentCustomizer {
    fn apply_profile(&mut self, profile: &DesignProfile) {
        self.garment = profile.garment_color;
        self.text.set(profile.shirt_text.clone());
        self.measurements = profile.measurements;
    }

    fn export_profile(&self) -> DesignProfile {
        DesignProfile {
            garment_color: self.garment,
            shirt_text: self.text.raw().to_string(),
            measurements: self.measurements,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
