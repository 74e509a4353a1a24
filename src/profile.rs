//! Serializable design snapshot for cross-process communication.
//!
//! A [`DesignProfile`] captures the settings half of a customization (color,
//! text, measurements) in a JSON-friendly shape a frontend and backend can
//! exchange. The theme is deliberately absent: cycling the interface palette
//! never alters customization state.
//!
//! # Example
//!
//! ```
//! use garment_studio::{DesignProfile, GarmentColor};
//!
//! let mut profile = DesignProfile::default();
//! profile.garment_color = GarmentColor::Blue;
//! profile.shirt_text = "CREW\n2026".to_string();
//!
//! let json = profile.to_json().unwrap();
//! let restored = DesignProfile::from_json(&json).unwrap();
//! assert_eq!(restored.garment_color, GarmentColor::Blue);
//! ```

use serde::{Deserialize, Serialize};

use crate::design::{GarmentColor, Measurements};

// ============================================================================
// DesignProfile
// ============================================================================

/// A serializable snapshot of the user's customization settings.
///
/// # JSON Format
///
/// ```json
/// {
///   "garmentColor": "#0000FF",
///   "shirtText": "CREW\n2026",
///   "measurements": { "height_cm": 180, "weight_kg": 80, "build": "athletic" }
/// }
/// ```
///
/// Missing fields deserialize to their defaults, so `{}` is a valid profile.
/// An unknown garment color is a parse error, so invalid colors never reach
/// state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct DesignProfile {
    /// Selected garment base color, serialized as its hex value.
    #[serde(default)]
    pub garment_color: GarmentColor,

    /// Raw print text, including any lines beyond the print cap.
    #[serde(default)]
    pub shirt_text: String,

    /// Body measurements as entered.
    #[serde(default)]
    pub measurements: Measurements,
}

impl DesignProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serializes the profile to a JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Serializes the profile to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes a profile from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

// ============================================================================
// Order payload
// ============================================================================

/// Size and origin of the uploaded artwork, for the order payload.
///
/// The bitmap itself stays host-side; an order system fetches it out of band.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtworkSummary {
    pub name: String,
    pub width: u32,
    pub height: u32,
}

/// What the Add-to-Cart action hands to an external order system.
///
/// Assembling this is the whole of the cart stub: no network call, no
/// persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderTicket {
    /// The customization settings.
    pub design: DesignProfile,

    /// Present when artwork was uploaded and decoded.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub artwork: Option<ArtworkSummary>,
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::design::Build;

    #[test]
    fn profile_roundtrip() {
        let profile = DesignProfile {
            garment_color: GarmentColor::Orange,
            shirt_text: "ONE\nTWO".to_string(),
            measurements: Measurements {
                height_cm: 165,
                weight_kg: 60,
                build: Build::Lean,
            },
        };

        let json = profile.to_json().unwrap();
        let restored = DesignProfile::from_json(&json).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn profile_uses_camel_case_keys() {
        let json = DesignProfile::default().to_json_pretty().unwrap();
        assert!(json.contains("\"garmentColor\""));
        assert!(json.contains("\"shirtText\""));
        assert!(json.contains("\"measurements\""));
    }

    #[test]
    fn empty_object_deserializes_to_defaults() {
        let profile = DesignProfile::from_json("{}").unwrap();
        assert_eq!(profile.garment_color, GarmentColor::White);
        assert_eq!(profile.shirt_text, "");
        assert_eq!(profile.measurements, Measurements::default());
    }

    #[test]
    fn unknown_garment_color_is_a_parse_error() {
        let result = DesignProfile::from_json(r##"{"garmentColor": "#BADBAD"}"##);
        assert!(result.is_err());
    }

    #[test]
    fn order_ticket_serializes_artwork_when_present() {
        let ticket = OrderTicket {
            design: DesignProfile::default(),
            artwork: Some(ArtworkSummary {
                name: "logo.png".to_string(),
                width: 32,
                height: 16,
            }),
        };
        let json = serde_json::to_string(&ticket).unwrap();
        assert!(json.contains("\"logo.png\""));
        assert!(json.contains("\"width\":32"));

        let bare = OrderTicket {
            design: DesignProfile::default(),
            artwork: None,
        };
        let json = serde_json::to_string(&bare).unwrap();
        assert!(!json.contains("artwork"));
    }
}
