//! Body measurement inputs used for fit guidance.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Hinted height range (cm) for the presentational widget.
pub const HEIGHT_HINT_CM: RangeInclusive<i32> = 120..=220;

/// Hinted weight range (kg) for the presentational widget.
pub const WEIGHT_HINT_KG: RangeInclusive<i32> = 30..=200;

/// Body-type classification used for fit guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Build {
    Lean,
    Regular,
    #[default]
    Athletic,
    Big,
}

impl Build {
    /// All categories, in selector order.
    pub const ALL: [Build; 4] = [Build::Lean, Build::Regular, Build::Athletic, Build::Big];

    /// Capitalized label for the selector widget.
    pub fn label(&self) -> &'static str {
        match self {
            Build::Lean => "Lean",
            Build::Regular => "Regular",
            Build::Athletic => "Athletic",
            Build::Big => "Big",
        }
    }
}

/// Height, weight, and build as entered by the user.
///
/// Values are held raw: the widgets hint at [`HEIGHT_HINT_CM`] and
/// [`WEIGHT_HINT_KG`] but nothing is clamped or rejected on commit. An
/// external order collaborator consumes these later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Measurements {
    pub height_cm: i32,
    pub weight_kg: i32,
    pub build: Build,
}

impl Default for Measurements {
    fn default() -> Self {
        Self {
            height_cm: 180,
            weight_kg: 80,
            build: Build::Athletic,
        }
    }
}

impl Measurements {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_height(&mut self, cm: i32) {
        self.height_cm = cm;
    }

    pub fn set_weight(&mut self, kg: i32) {
        self.weight_kg = kg;
    }

    pub fn set_build(&mut self, build: Build) {
        self.build = build;
    }

    /// Whether both numeric values sit inside the widget hint ranges.
    ///
    /// Purely informational; out-of-range values are still stored.
    pub fn within_hints(&self) -> bool {
        HEIGHT_HINT_CM.contains(&self.height_cm) && WEIGHT_HINT_KG.contains(&self.weight_kg)
    }
}
