//! garment-studio: Print-on-demand garment customization library
//!
//! This crate models an interactive garment customizer: a base color chosen
//! from a fixed swatch palette, uploaded artwork, up to three lines of print
//! text, and body measurements, all composed into a single live preview. An
//! orthogonal theme cycler recolors the surrounding interface without
//! touching design state.
//!
//! The host UI runtime owns widgets and event dispatch; it forwards discrete
//! input events to a [`GarmentCustomizer`] and re-renders from the derived
//! [`ComposedDesign`] after every change.
//!
//! # Example
//!
//! ```
//! use garment_studio::{GarmentColor, GarmentCustomizer, InputEvent};
//!
//! let mut studio = GarmentCustomizer::new();
//! studio.handle(InputEvent::SelectColor(GarmentColor::Black));
//! studio.handle(InputEvent::EditText("HELLO\nWORLD".into()));
//!
//! let design = studio.preview();
//! assert_eq!(design.garment, GarmentColor::Black);
//! assert_eq!(design.lines, vec!["HELLO", "WORLD"]);
//! ```
//!
//! # Uploading artwork
//!
//! Ingestion is two-phase so hosts can decode off the event thread: an
//! accepted file yields a ticket, and the decode completion is committed
//! back. Only the most recently requested ingestion may commit; stale
//! completions are discarded.
//!
//! ```
//! use garment_studio::{CandidateFile, GarmentCustomizer};
//!
//! let mut studio = GarmentCustomizer::new();
//!
//! // Non-image files are silently ignored.
//! let notes = CandidateFile::new("notes.txt", "text/plain", b"hi".to_vec());
//! assert!(studio.drop_file(&notes).is_none());
//! ```
//!
//! # Serializable Profiles
//!
//! For frontend/backend communication, use [`DesignProfile`] with the
//! [`Configurable`] trait:
//!
//! ```
//! use garment_studio::{Configurable, DesignProfile, GarmentColor, GarmentCustomizer};
//!
//! let mut studio = GarmentCustomizer::new();
//! studio.select_color(GarmentColor::Red);
//!
//! let json = studio.export_profile().to_json().unwrap();
//! let restored = DesignProfile::from_json(&json).unwrap();
//! assert_eq!(restored.garment_color, GarmentColor::Red);
//! ```

mod customizer;
mod design;
mod preview;
mod profile;
mod theme;

pub use customizer::{Configurable, GarmentCustomizer, InputEvent};
pub use design::{
    Artwork, Build, CandidateFile, CommitOutcome, DecodeCompletion, DecodeFailure, DesignText,
    DragState, GarmentColor, HEIGHT_HINT_CM, ImageSlot, IngestTicket, MAX_PRINTED_LINES,
    MAX_TEXT_CHARS, Measurements, SlotState, WEIGHT_HINT_KG,
};
pub use preview::{
    ComposedDesign, MOCKUP_HEIGHT, MOCKUP_WIDTH, PreviewError, compose, render_preview,
};
pub use profile::{ArtworkSummary, DesignProfile, OrderTicket};
pub use theme::{KeyCombo, Modifier, Palette, THEME_CATALOG, THEME_SHORTCUT, ThemeCycler};
