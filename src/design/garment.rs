//! Garment base color selection.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The fixed palette of garment base colors offered by the swatch row.
///
/// The selector UI only ever offers these eight values, so an invalid color
/// is unrepresentable in state. Each variant carries the hex value painted
/// onto the mockup silhouette.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GarmentColor {
    #[default]
    White,
    Black,
    Red,
    Blue,
    Yellow,
    Green,
    Orange,
    Purple,
}

impl GarmentColor {
    /// All swatches, in the order they appear in the picker.
    pub const ALL: [GarmentColor; 8] = [
        GarmentColor::White,
        GarmentColor::Black,
        GarmentColor::Red,
        GarmentColor::Blue,
        GarmentColor::Yellow,
        GarmentColor::Green,
        GarmentColor::Orange,
        GarmentColor::Purple,
    ];

    /// The hex value used for the mockup fill and for serialization.
    pub fn hex(&self) -> &'static str {
        match self {
            GarmentColor::White => "#FFFFFF",
            GarmentColor::Black => "#000000",
            GarmentColor::Red => "#FF0000",
            GarmentColor::Blue => "#0000FF",
            GarmentColor::Yellow => "#FFFF00",
            GarmentColor::Green => "#00FF00",
            GarmentColor::Orange => "#FFA500",
            GarmentColor::Purple => "#800080",
        }
    }

    /// The color as RGB components.
    pub fn rgb(&self) -> (u8, u8, u8) {
        match self {
            GarmentColor::White => (255, 255, 255),
            GarmentColor::Black => (0, 0, 0),
            GarmentColor::Red => (255, 0, 0),
            GarmentColor::Blue => (0, 0, 255),
            GarmentColor::Yellow => (255, 255, 0),
            GarmentColor::Green => (0, 255, 0),
            GarmentColor::Orange => (255, 165, 0),
            GarmentColor::Purple => (128, 0, 128),
        }
    }

    /// Looks up a swatch by hex value, case-insensitively.
    ///
    /// Returns `None` for anything outside the fixed palette.
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|color| color.hex().eq_ignore_ascii_case(hex))
    }
}

impl Serialize for GarmentColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}

impl<'de> Deserialize<'de> for GarmentColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex)
            .ok_or_else(|| D::Error::custom(format!("unknown garment color `{hex}`")))
    }
}
