//! Crop knowledge base
//!
//! An immutable table of agronomic constants per supported crop. The
//! built-in catalog covers the platform's enumerated crops; regional
//! deployments can load their own table from JSON instead of patching
//! the defaults.

use std::collections::HashMap;

use shared::{
    validate_crop_profile, CropCategory, CropProfile, Season, SoilType, TemperatureRange,
    GROWTH_WEEKS,
};

use crate::error::{EngineError, EngineResult};

/// Generic 8-week progress curve used when a crop has no profile
pub const DEFAULT_GROWTH_CURVE: [u8; GROWTH_WEEKS] = [12, 25, 38, 52, 67, 78, 85, 92];

/// Read-only crop lookup table, keyed by exact crop name.
///
/// Immutable after construction; safe to share behind an `Arc` across any
/// number of concurrent evaluations.
#[derive(Debug, Clone)]
pub struct CropCatalog {
    crops: HashMap<String, CropProfile>,
}

fn profile(
    name: &str,
    category: CropCategory,
    growth_days: u32,
    ideal_seasons: &[Season],
    (low_c, high_c): (i32, i32),
    soil_preference: &[SoilType],
    growth_curve: [u8; GROWTH_WEEKS],
) -> CropProfile {
    CropProfile {
        name: name.to_string(),
        category,
        growth_days,
        ideal_seasons: ideal_seasons.to_vec(),
        ideal_temperature: TemperatureRange::new(low_c, high_c),
        soil_preference: soil_preference.to_vec(),
        growth_curve,
    }
}

impl CropCatalog {
    /// The platform's built-in crop table
    pub fn builtin() -> Self {
        use CropCategory::*;
        use Season::*;
        use SoilType::*;

        let profiles = vec![
            // Cereals
            profile("Wheat", Cereal, 120, &[Fall, Winter], (15, 25), &[Loamy, Clay], [8, 18, 32, 48, 65, 78, 88, 95]),
            profile("Rice", Cereal, 130, &[Summer], (25, 35), &[Clay], [5, 15, 28, 45, 65, 80, 92, 98]),
            profile("Corn", Cereal, 100, &[Spring, Summer], (20, 30), &[Loamy, Sandy], [12, 28, 45, 62, 78, 88, 95, 100]),
            profile("Bajra", Cereal, 75, &[Summer], (25, 35), &[Sandy, Loamy], [10, 22, 35, 50, 65, 78, 90, 98]),
            profile("Jowar", Cereal, 110, &[Summer], (26, 30), &[Loamy, Clay], [8, 20, 35, 52, 68, 80, 92, 100]),
            profile("Ragi", Cereal, 120, &[Summer], (20, 27), &[Sandy, Loamy], [12, 25, 40, 55, 70, 82, 94, 100]),
            // Pulses
            profile("Arhar Dal", Pulse, 180, &[Summer], (20, 30), &[Loamy, Clay], [5, 12, 25, 40, 60, 75, 88, 95]),
            profile("Moong Dal", Pulse, 60, &[Summer], (25, 35), &[Sandy, Loamy], [15, 30, 45, 60, 75, 85, 95, 100]),
            profile("Chana Dal", Pulse, 120, &[Winter], (15, 25), &[Loamy, Clay], [10, 20, 35, 50, 65, 78, 90, 98]),
            // Cash crops
            profile("Sugarcane", CashCrop, 365, &[Spring, Summer], (20, 30), &[Loamy, Clay], [2, 8, 15, 25, 40, 60, 80, 95]),
            profile("Cotton", CashCrop, 180, &[Summer], (21, 30), &[Loamy, Clay], [8, 18, 30, 45, 65, 78, 90, 98]),
            profile("Jute", CashCrop, 120, &[Summer], (24, 35), &[Clay, Loamy], [12, 25, 40, 55, 70, 82, 92, 100]),
            profile("Mustard", CashCrop, 90, &[Winter], (10, 25), &[Loamy, Sandy], [15, 28, 42, 58, 72, 85, 95, 100]),
            profile("Groundnut", CashCrop, 120, &[Summer], (20, 30), &[Sandy, Loamy], [10, 22, 38, 55, 70, 82, 92, 98]),
            profile("Sunflower", CashCrop, 90, &[Summer], (20, 25), &[Loamy, Sandy], [12, 25, 40, 58, 72, 85, 95, 100]),
            // Plantation crops
            profile("Tea", Plantation, 1095, &[Spring, Summer], (20, 30), &[Loamy, Clay], [1, 5, 12, 25, 45, 65, 80, 95]),
            profile("Coffee", Plantation, 1460, &[Spring, Summer], (15, 25), &[Loamy], [1, 3, 8, 18, 35, 55, 75, 90]),
            profile("Rubber", Plantation, 2555, &[Spring, Summer], (25, 35), &[Loamy, Clay], [1, 2, 5, 12, 25, 45, 70, 90]),
            // Vegetables
            profile("Tomatoes", Vegetable, 80, &[Spring, Summer], (18, 28), &[Loamy, Sandy], [15, 32, 48, 65, 78, 88, 95, 100]),
            profile("Onions", Vegetable, 120, &[Winter], (13, 24), &[Loamy, Sandy], [8, 18, 32, 48, 65, 78, 90, 98]),
            profile("Potatoes", Vegetable, 90, &[Spring, Fall], (15, 25), &[Loamy, Sandy], [10, 25, 42, 58, 72, 85, 92, 98]),
            profile("Cabbage", Vegetable, 75, &[Winter], (15, 20), &[Loamy, Clay], [12, 25, 40, 55, 70, 82, 92, 100]),
            profile("Cauliflower", Vegetable, 70, &[Winter], (15, 20), &[Loamy, Clay], [15, 28, 42, 58, 72, 85, 95, 100]),
            // Fruits
            profile("Apples", Fruit, 1460, &[Spring], (15, 25), &[Loamy], [1, 3, 8, 18, 35, 55, 75, 90]),
            profile("Bananas", Fruit, 365, &[Spring, Summer], (26, 30), &[Loamy, Clay], [2, 8, 18, 32, 50, 68, 82, 95]),
            profile("Mangoes", Fruit, 1095, &[Spring, Summer], (24, 30), &[Loamy], [1, 4, 10, 22, 40, 60, 78, 92]),
            profile("Oranges", Fruit, 1095, &[Spring], (15, 30), &[Loamy, Sandy], [1, 4, 10, 22, 40, 60, 78, 92]),
        ];

        Self::from_profiles_unchecked(profiles)
    }

    /// Build a catalog from caller-supplied profiles, validating each one
    pub fn from_profiles(profiles: Vec<CropProfile>) -> EngineResult<Self> {
        for p in &profiles {
            validate_crop_profile(p).map_err(|reason| EngineError::InvalidProfile {
                crop: p.name.clone(),
                reason,
            })?;
        }
        Ok(Self::from_profiles_unchecked(profiles))
    }

    /// Load a catalog from a JSON array of crop profiles
    pub fn from_json(json: &str) -> EngineResult<Self> {
        let profiles: Vec<CropProfile> = serde_json::from_str(json)?;
        Self::from_profiles(profiles)
    }

    fn from_profiles_unchecked(profiles: Vec<CropProfile>) -> Self {
        let crops = profiles
            .into_iter()
            .map(|p| (p.name.clone(), p))
            .collect();
        Self { crops }
    }

    /// Look up a crop by exact, case-sensitive name
    pub fn lookup(&self, name: &str) -> EngineResult<&CropProfile> {
        self.crops
            .get(name)
            .ok_or_else(|| EngineError::UnknownCrop(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.crops.contains_key(name)
    }

    /// All crop names, sorted for stable display
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.crops.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn profiles(&self) -> impl Iterator<Item = &CropProfile> {
        self.crops.values()
    }

    pub fn len(&self) -> usize {
        self.crops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.crops.is_empty()
    }
}

impl Default for CropCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
