//! Design state entities: garment color, print text, measurements, and the
//! uploaded artwork slot.
//!
//! Each entity owns its own invariants; [`crate::GarmentCustomizer`] wires
//! them together and [`crate::preview`] derives the composed design from
//! them.

pub mod asset;
pub mod garment;
pub mod measurements;
pub mod text;

pub use asset::{
    Artwork, CandidateFile, CommitOutcome, DecodeCompletion, DecodeFailure, DragState,
    ImageSlot, IngestTicket, SlotState,
};
pub use garment::GarmentColor;
pub use measurements::{Build, HEIGHT_HINT_CM, Measurements, WEIGHT_HINT_KG};
pub use text::{DesignText, MAX_PRINTED_LINES, MAX_TEXT_CHARS};
