//! User-supplied artwork: ingestion, decoding, and the drop-target state.
//!
//! Ingestion is two-phase. [`ImageSlot::begin_ingest`] filters the candidate
//! by content type and issues an [`IngestTicket`] carrying a monotonically
//! increasing token; the host decodes the ticket (possibly off the event
//! thread) and feeds the resulting [`DecodeCompletion`] back through
//! [`ImageSlot::commit`]. Only the most recently issued token may commit;
//! completions that lost the race are discarded, so the slot always reflects
//! the most recently *requested* ingestion, never merely the slowest decode.

use image::RgbaImage;
use thiserror::Error;

// ============================================================================
// Candidate files
// ============================================================================

/// A file handed over by the host, from either the native picker or an
/// OS drag-and-drop payload. Both sources funnel through the same ingest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// File name as reported by the host.
    pub name: String,
    /// Declared MIME type, e.g. `image/png`.
    pub content_type: String,
    /// Raw file bytes.
    pub bytes: Vec<u8>,
}

impl CandidateFile {
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Whether the declared content type marks this as an image.
    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

// ============================================================================
// Slot state
// ============================================================================

/// Decoded artwork held by the slot.
#[derive(Debug, Clone, PartialEq)]
pub struct Artwork {
    /// Name of the file the artwork came from.
    pub name: String,
    /// The decoded bitmap in RGBA format.
    pub image: RgbaImage,
}

/// A decode that went wrong, kept so the UI can show it and offer a retry.
///
/// Distinct from [`SlotState::Empty`]: the slot remembers that the user tried
/// to upload something rather than silently showing nothing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("could not decode `{name}`: {reason}")]
pub struct DecodeFailure {
    /// Name of the file that failed to decode.
    pub name: String,
    /// Human-readable decoder error.
    pub reason: String,
}

/// What the image slot currently holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SlotState {
    /// No artwork uploaded.
    #[default]
    Empty,
    /// Artwork decoded and ready to composite.
    Loaded(Artwork),
    /// The last ingestion failed to decode; the previous image is gone.
    Failed(DecodeFailure),
}

// ============================================================================
// Ingestion tickets
// ============================================================================

/// A pending ingestion issued by [`ImageSlot::begin_ingest`].
///
/// The ticket owns the file bytes; [`decode`](Self::decode) may run anywhere,
/// but the resulting completion must come back to the slot on the event
/// thread.
#[derive(Debug, Clone)]
pub struct IngestTicket {
    token: u64,
    name: String,
    bytes: Vec<u8>,
}

impl IngestTicket {
    /// The token identifying this ingestion request.
    pub fn token(&self) -> u64 {
        self.token
    }

    /// Decodes the file bytes into a bitmap.
    ///
    /// This is the one potentially slow step of ingestion. The returned
    /// completion carries the ticket's token so the slot can recognize
    /// whether it is still the authoritative request.
    pub fn decode(self) -> DecodeCompletion {
        let result = image::load_from_memory(&self.bytes).map(|img| img.to_rgba8());
        DecodeCompletion {
            token: self.token,
            name: self.name,
            result,
        }
    }
}

/// The outcome of decoding an [`IngestTicket`].
#[derive(Debug)]
pub struct DecodeCompletion {
    token: u64,
    name: String,
    result: Result<RgbaImage, image::ImageError>,
}

impl DecodeCompletion {
    pub fn token(&self) -> u64 {
        self.token
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Whether a completion was applied to the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The completion carried the latest token and the slot was updated.
    Committed,
    /// A newer ingestion (or a removal) superseded this completion; the slot
    /// was left untouched.
    Stale,
}

// ============================================================================
// ImageSlot
// ============================================================================

/// Holds at most one user-supplied image.
///
/// Between `begin_ingest` and `commit` the slot keeps its previous state;
/// there is no exposed "loading" intermediate. Removal is synchronous and
/// also supersedes any decode still in flight.
#[derive(Debug, Default)]
pub struct ImageSlot {
    state: SlotState,
    last_issued: u64,
}

impl ImageSlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SlotState {
        &self.state
    }

    /// The decoded artwork, if the slot holds one.
    pub fn artwork(&self) -> Option<&Artwork> {
        match &self.state {
            SlotState::Loaded(artwork) => Some(artwork),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self.state, SlotState::Empty)
    }

    /// Starts ingesting a candidate file.
    ///
    /// Non-image content types are a silent no-op: no ticket, no error, slot
    /// untouched. For image types this issues a ticket whose token becomes
    /// the authoritative request; any earlier in-flight ticket is now stale.
    pub fn begin_ingest(&mut self, file: &CandidateFile) -> Option<IngestTicket> {
        if !file.is_image() {
            return None;
        }
        self.last_issued += 1;
        Some(IngestTicket {
            token: self.last_issued,
            name: file.name.clone(),
            bytes: file.bytes.clone(),
        })
    }

    /// Applies a decode completion.
    ///
    /// Completions whose token is not the most recently issued are discarded
    /// and reported as [`CommitOutcome::Stale`]. A successful decode loads
    /// the artwork; a failed decode moves the slot to [`SlotState::Failed`]
    /// so the user can retry.
    pub fn commit(&mut self, completion: DecodeCompletion) -> CommitOutcome {
        if completion.token != self.last_issued {
            return CommitOutcome::Stale;
        }
        self.state = match completion.result {
            Ok(image) => SlotState::Loaded(Artwork {
                name: completion.name,
                image,
            }),
            Err(err) => SlotState::Failed(DecodeFailure {
                name: completion.name,
                reason: err.to_string(),
            }),
        };
        CommitOutcome::Committed
    }

    /// Clears the slot immediately.
    ///
    /// Also advances the authoritative token, so a decode started before the
    /// removal cannot resurrect the image when it completes.
    pub fn remove(&mut self) {
        self.last_issued += 1;
        self.state = SlotState::Empty;
    }
}

// ============================================================================
// Drag state
// ============================================================================

/// Visual state of the drop target, separate from the asset itself.
///
/// Drag events only drive highlighting; the slot changes solely via a drop's
/// ingest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Active,
}

impl DragState {
    pub fn is_active(&self) -> bool {
        matches!(self, DragState::Active)
    }

    pub fn drag_enter(&mut self) {
        *self = DragState::Active;
    }

    pub fn drag_over(&mut self) {
        *self = DragState::Active;
    }

    pub fn drag_leave(&mut self) {
        *self = DragState::Idle;
    }

    /// A drop ends the drag regardless of whether a file was present.
    pub fn drop_finished(&mut self) {
        *self = DragState::Idle;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use std::io::Cursor;

    fn png_file(name: &str, w: u32, h: u32, rgba: [u8; 4]) -> CandidateFile {
        let img = RgbaImage::from_pixel(w, h, Rgba(rgba));
        let mut buf = Cursor::new(Vec::new());
        img.write_to(&mut buf, image::ImageFormat::Png).unwrap();
        CandidateFile::new(name, "image/png", buf.into_inner())
    }

    #[test]
    fn non_image_files_are_a_silent_no_op() {
        let mut slot = ImageSlot::new();
        let file = CandidateFile::new("notes.txt", "text/plain", b"hello".to_vec());

        assert!(slot.begin_ingest(&file).is_none());
        assert_eq!(*slot.state(), SlotState::Empty);
    }

    #[test]
    fn accepted_image_decodes_and_commits() {
        let mut slot = ImageSlot::new();
        let file = png_file("logo.png", 4, 4, [10, 20, 30, 255]);

        let ticket = slot.begin_ingest(&file).unwrap();
        // Slot keeps its previous state while the decode is in flight.
        assert!(slot.is_empty());

        let outcome = slot.commit(ticket.decode());
        assert_eq!(outcome, CommitOutcome::Committed);

        let artwork = slot.artwork().unwrap();
        assert_eq!(artwork.name, "logo.png");
        assert_eq!(artwork.image.dimensions(), (4, 4));
        assert_eq!(artwork.image.get_pixel(0, 0).0, [10, 20, 30, 255]);
    }

    #[test]
    fn remove_clears_synchronously() {
        let mut slot = ImageSlot::new();
        let file = png_file("logo.png", 2, 2, [1, 2, 3, 255]);
        let ticket = slot.begin_ingest(&file).unwrap();
        slot.commit(ticket.decode());
        assert!(slot.artwork().is_some());

        slot.remove();
        assert_eq!(*slot.state(), SlotState::Empty);
    }

    #[test]
    fn stale_completion_is_discarded() {
        let mut slot = ImageSlot::new();
        let slow = png_file("slow.png", 8, 8, [255, 0, 0, 255]);
        let fast = png_file("fast.png", 2, 2, [0, 0, 255, 255]);

        // A is requested first, then B supersedes it.
        let ticket_a = slot.begin_ingest(&slow).unwrap();
        let ticket_b = slot.begin_ingest(&fast).unwrap();

        // B's decode finishes first and commits.
        assert_eq!(slot.commit(ticket_b.decode()), CommitOutcome::Committed);
        assert_eq!(slot.artwork().unwrap().name, "fast.png");

        // A's decode straggles in afterwards and is thrown away.
        assert_eq!(slot.commit(ticket_a.decode()), CommitOutcome::Stale);
        assert_eq!(slot.artwork().unwrap().name, "fast.png");
    }

    #[test]
    fn removal_supersedes_in_flight_decode() {
        let mut slot = ImageSlot::new();
        let file = png_file("logo.png", 2, 2, [9, 9, 9, 255]);

        let ticket = slot.begin_ingest(&file).unwrap();
        slot.remove();

        assert_eq!(slot.commit(ticket.decode()), CommitOutcome::Stale);
        assert!(slot.is_empty());
    }

    #[test]
    fn decode_failure_is_distinct_from_empty() {
        let mut slot = ImageSlot::new();
        let corrupt = CandidateFile::new("broken.png", "image/png", vec![0xde, 0xad, 0xbe, 0xef]);

        let ticket = slot.begin_ingest(&corrupt).unwrap();
        let completion = ticket.decode();
        assert!(!completion.is_ok());
        assert_eq!(slot.commit(completion), CommitOutcome::Committed);

        match slot.state() {
            SlotState::Failed(failure) => {
                assert_eq!(failure.name, "broken.png");
                assert!(!failure.reason.is_empty());
            }
            other => panic!("expected Failed, got {other:?}"),
        }
        assert!(!slot.is_empty());
        assert!(slot.artwork().is_none());
    }

    #[test]
    fn a_later_upload_recovers_from_failure() {
        let mut slot = ImageSlot::new();
        let corrupt = CandidateFile::new("broken.png", "image/png", vec![1, 2, 3]);
        let ticket = slot.begin_ingest(&corrupt).unwrap();
        slot.commit(ticket.decode());
        assert!(matches!(slot.state(), SlotState::Failed(_)));

        let good = png_file("fixed.png", 2, 2, [0, 255, 0, 255]);
        let ticket = slot.begin_ingest(&good).unwrap();
        slot.commit(ticket.decode());
        assert_eq!(slot.artwork().unwrap().name, "fixed.png");
    }

    #[test]
    fn replacement_overwrites_previous_artwork() {
        let mut slot = ImageSlot::new();
        let first = png_file("first.png", 2, 2, [1, 1, 1, 255]);
        let second = png_file("second.png", 3, 3, [2, 2, 2, 255]);

        let ticket = slot.begin_ingest(&first).unwrap();
        slot.commit(ticket.decode());
        let ticket = slot.begin_ingest(&second).unwrap();
        slot.commit(ticket.decode());

        let artwork = slot.artwork().unwrap();
        assert_eq!(artwork.name, "second.png");
        assert_eq!(artwork.image.dimensions(), (3, 3));
    }

    #[test]
    fn drag_state_machine() {
        let mut drag = DragState::default();
        assert!(!drag.is_active());

        drag.drag_enter();
        assert!(drag.is_active());
        drag.drag_over();
        assert!(drag.is_active());

        drag.drag_leave();
        assert!(!drag.is_active());

        drag.drag_enter();
        drag.drop_finished();
        assert!(!drag.is_active());
    }
}
