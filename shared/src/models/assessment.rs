//! Derived assessment and estimate models

use serde::{Deserialize, Serialize};

use crate::models::crop::GROWTH_WEEKS;
use crate::types::Season;

/// Verdict on whether a crop fits the current season and soil.
///
/// Produced per evaluation call; never stored by the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuitabilityAssessment {
    pub suitable: bool,
    pub current_season: Season,
    /// Season warning first, soil warning second; a single generic entry
    /// for unknown crops
    pub warnings: Vec<String>,
}

impl SuitabilityAssessment {
    /// Assessment for a crop identifier missing from the catalog
    pub fn unknown_crop(current_season: Season) -> Self {
        Self {
            suitable: false,
            current_season,
            warnings: vec!["Unknown crop type".to_string()],
        }
    }
}

/// Adjusted weekly growth curve and the farm's position on it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GrowthEstimate {
    /// Estimated completion percentage per growth week, each in [0, 100]
    pub weekly_progress: [i32; GROWTH_WEEKS],
    /// Progress at the week corresponding to the elapsed growing time
    pub current_progress: i32,
}

/// Estimated plant height per growth week, derived from the progress curve
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeightEstimate {
    pub weekly_height_cm: [i32; GROWTH_WEEKS],
}

/// Everything the farm-management UI needs to render a farm card.
///
/// The flat shape is the engine's public contract: suitability verdict,
/// adjusted curve, and the derived harvest/health numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FarmReport {
    pub suitable: bool,
    pub current_season: Season,
    pub warnings: Vec<String>,
    pub weekly_progress: [i32; GROWTH_WEEKS],
    pub current_progress: i32,
    pub days_to_harvest: i64,
    pub health_score: i32,
}
