//! Derivation of the composed design shown on the preview surface.
//!
//! [`compose`] is a pure function over the three source entities. It holds no
//! state and is cheap, so consumers re-derive on every relevant change
//! instead of caching; a cached [`ComposedDesign`] must never outlive a
//! mutation of any input.

pub mod mockup;

pub use mockup::{MOCKUP_HEIGHT, MOCKUP_WIDTH, PreviewError, render_preview};

use image::RgbaImage;

use crate::design::{DesignText, GarmentColor, ImageSlot};

/// Everything the preview surface needs to paint one frame.
///
/// Borrowed from the source entities; rebuilt per render, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedDesign<'a> {
    /// The garment base color.
    pub garment: GarmentColor,
    /// Decoded artwork to center on the chest, when present. A slot in the
    /// failed state composes like an absent image, so the preview never
    /// shows stale content.
    pub artwork: Option<&'a RgbaImage>,
    /// The printed text lines, at most three. Empty input still contributes
    /// its single empty line here; renderers skip blank lines when painting.
    pub lines: Vec<&'a str>,
}

impl ComposedDesign<'_> {
    pub fn has_artwork(&self) -> bool {
        self.artwork.is_some()
    }

    /// The lines that actually produce visible print.
    pub fn visible_lines(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().copied().filter(|line| !line.is_empty())
    }
}

/// Combines garment color, artwork, and text into a renderable design.
///
/// Total: every combination of inputs produces a paintable result, including
/// the degenerate default of a white garment, no artwork, and one empty line.
pub fn compose<'a>(
    garment: GarmentColor,
    slot: &'a ImageSlot,
    text: &'a DesignText,
) -> ComposedDesign<'a> {
    ComposedDesign {
        garment,
        artwork: slot.artwork().map(|a| &a.image),
        lines: text.printed_lines(),
    }
}
