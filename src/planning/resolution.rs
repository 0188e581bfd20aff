//! Resolution classification.
//!
//! A wall is classified by comparing its long and short side against the
//! broadcast format tiers, highest first. Orientation does not matter: a
//! portrait wall of 1200×2000 px classifies the same as 2000×1200.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Broadcast resolution tier of a wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ResolutionClass {
    /// Below 1280×720.
    #[serde(rename = "SD")]
    Sd,
    /// 1280×720 and above.
    #[serde(rename = "HD")]
    Hd,
    /// 1920×1080 and above.
    #[serde(rename = "FHD")]
    Fhd,
    /// 2560×1440 and above.
    #[serde(rename = "QHD")]
    Qhd,
    /// 3840×2160 and above.
    #[serde(rename = "4K")]
    Uhd4k,
    /// 7680×4320 and above.
    #[serde(rename = "8K")]
    Uhd8k,
}

/// Tier thresholds as (class, long side, short side), highest tier first.
const THRESHOLDS: [(ResolutionClass, u64, u64); 5] = [
    (ResolutionClass::Uhd8k, 7680, 4320),
    (ResolutionClass::Uhd4k, 3840, 2160),
    (ResolutionClass::Qhd, 2560, 1440),
    (ResolutionClass::Fhd, 1920, 1080),
    (ResolutionClass::Hd, 1280, 720),
];

impl ResolutionClass {
    /// Classifies a resolution given in pixels.
    #[must_use]
    pub fn classify(width: u64, height: u64) -> Self {
        let long_side = width.max(height);
        let short_side = width.min(height);

        THRESHOLDS
            .iter()
            .find(|(_, long, short)| long_side >= *long && short_side >= *short)
            .map_or(Self::Sd, |(class, _, _)| *class)
    }

    /// Returns the display label ("8K", "4K", "QHD", "FHD", "HD", "SD").
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Sd => "SD",
            Self::Hd => "HD",
            Self::Fhd => "FHD",
            Self::Qhd => "QHD",
            Self::Uhd4k => "4K",
            Self::Uhd8k => "8K",
        }
    }
}

impl fmt::Display for ResolutionClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
