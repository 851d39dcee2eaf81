//! Crop profile models

use serde::{Deserialize, Serialize};

use crate::types::{CropCategory, Season, SoilType, TemperatureRange};

/// Number of discrete growth weeks tracked for every crop
pub const GROWTH_WEEKS: usize = 8;

/// Agronomic constants for a single crop.
///
/// Profiles are reference data: immutable after catalog construction and
/// shared read-only between evaluations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CropProfile {
    pub name: String,
    pub category: CropCategory,
    /// Total days from planting to harvest-ready
    pub growth_days: u32,
    pub ideal_seasons: Vec<Season>,
    /// Descriptive band shown to the farmer; not used in scoring
    pub ideal_temperature: TemperatureRange,
    pub soil_preference: Vec<SoilType>,
    /// Cumulative completion percentage per growth week under ideal
    /// conditions. Non-decreasing, final value at least 90.
    pub growth_curve: [u8; GROWTH_WEEKS],
}

impl CropProfile {
    /// Whether the given season is one of the crop's ideal seasons
    pub fn grows_in(&self, season: Season) -> bool {
        self.ideal_seasons.contains(&season)
    }

    /// Whether the crop prefers the given soil
    pub fn prefers_soil(&self, soil: SoilType) -> bool {
        self.soil_preference.contains(&soil)
    }
}
