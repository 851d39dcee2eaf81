//! Growth curve synthesis
//!
//! Adjusts a crop's canonical 8-week curve for soil, farm area and
//! planting season, adds bounded variation, and damps the weeks the farm
//! has not reached yet. The variation source is injected so tests can
//! seed it; production callers draw a fresh thread-local generator per
//! call, so concurrent evaluations never contend on a shared one.

use std::sync::Arc;

use chrono::NaiveDate;
use rand::Rng;

use shared::{GrowthEstimate, HeightEstimate, Season, SeasonCalendar, SoilType, GROWTH_WEEKS};

use crate::catalog::{CropCatalog, DEFAULT_GROWTH_CURVE};

/// Growth estimation service
#[derive(Clone)]
pub struct GrowthService {
    catalog: Arc<CropCatalog>,
    calendar: SeasonCalendar,
}

impl GrowthService {
    /// Create a service using the default Northern-Hemisphere calendar
    pub fn new(catalog: Arc<CropCatalog>) -> Self {
        Self::with_calendar(catalog, SeasonCalendar::default())
    }

    /// Create a service with an explicit season calendar
    pub fn with_calendar(catalog: Arc<CropCatalog>, calendar: SeasonCalendar) -> Self {
        Self { catalog, calendar }
    }

    /// Synthesize an adjusted growth curve, drawing variation from a
    /// fresh thread-local generator
    pub fn synthesize(
        &self,
        crop: &str,
        soil: SoilType,
        area_hectares: f64,
        planting_date: NaiveDate,
        evaluation_date: NaiveDate,
    ) -> GrowthEstimate {
        self.synthesize_with(
            crop,
            soil,
            area_hectares,
            planting_date,
            evaluation_date,
            &mut rand::thread_rng(),
        )
    }

    /// Synthesize an adjusted growth curve using the supplied variation
    /// source.
    ///
    /// Unknown crops fall back to the generic default curve. A planting
    /// date in the future clamps elapsed time to zero; a non-positive
    /// area is accepted as-is and simply yields a sub-1.0 area factor.
    pub fn synthesize_with(
        &self,
        crop: &str,
        soil: SoilType,
        area_hectares: f64,
        planting_date: NaiveDate,
        evaluation_date: NaiveDate,
        rng: &mut impl Rng,
    ) -> GrowthEstimate {
        let profile = self.catalog.lookup(crop).ok();
        let base = profile.map_or(DEFAULT_GROWTH_CURVE, |p| p.growth_curve);
        if profile.is_none() {
            tracing::debug!(crop, "crop not in catalog, using default growth curve");
        }

        let days_since_planted = days_since_planting(planting_date, evaluation_date);
        let soil_multiplier = soil_multiplier(soil);
        let area_factor = (1.0 + 0.01 * area_hectares).min(1.20);
        let season_factor = season_factor(self.calendar.season_for(planting_date));
        let current_week = (days_since_planted / 7 + 1).min(GROWTH_WEEKS as i64);

        let mut weekly_progress = [0i32; GROWTH_WEEKS];
        for (i, &base_value) in base.iter().enumerate() {
            let mut adjusted = f64::from(base_value) * soil_multiplier * area_factor * season_factor;

            // Smooth week-to-week variation plus bounded jitter
            adjusted += 5.0 * (0.5 * i as f64).sin() + rng.gen_range(-4.0..4.0);

            // Weeks not yet reached are provisional projections
            if i as i64 >= current_week {
                adjusted *= rng.gen_range(0.3..0.5);
            }

            weekly_progress[i] = adjusted.clamp(0.0, 100.0).floor() as i32;
        }

        let current_progress = match profile {
            Some(p) => {
                let index = ((days_since_planted as f64 / f64::from(p.growth_days))
                    * GROWTH_WEEKS as f64)
                    .floor() as usize;
                weekly_progress[index.min(GROWTH_WEEKS - 1)]
            }
            // No growth duration to position against
            None => 0,
        };

        GrowthEstimate {
            weekly_progress,
            current_progress,
        }
    }
}

/// Per-crop height shape: maximum height in cm and the fraction of it
/// reached each week under full progress
fn height_pattern(crop: &str) -> (f64, [f64; GROWTH_WEEKS]) {
    match crop {
        "Corn" => (250.0, [0.03, 0.08, 0.18, 0.32, 0.48, 0.64, 0.80, 1.0]),
        "Rice" => (95.0, [0.02, 0.05, 0.13, 0.26, 0.42, 0.63, 0.84, 1.0]),
        "Tomatoes" => (180.0, [0.03, 0.08, 0.17, 0.28, 0.44, 0.67, 0.83, 1.0]),
        "Potatoes" => (55.0, [0.04, 0.11, 0.27, 0.45, 0.64, 0.82, 0.91, 1.0]),
        // Wheat's shape doubles as the generic fallback
        _ => (105.0, [0.03, 0.08, 0.17, 0.33, 0.52, 0.71, 0.86, 1.0]),
    }
}

/// Derive a weekly height curve from an adjusted progress curve
pub fn height_curve(crop: &str, estimate: &GrowthEstimate) -> HeightEstimate {
    let (max_height, pattern) = height_pattern(crop);
    let mut weekly_height_cm = [0i32; GROWTH_WEEKS];
    for i in 0..GROWTH_WEEKS {
        let progress_factor = f64::from(estimate.weekly_progress[i]) / 100.0;
        weekly_height_cm[i] = (max_height * pattern[i] * progress_factor).floor() as i32;
    }
    HeightEstimate { weekly_height_cm }
}

/// Days elapsed since planting, clamped to zero for future planting dates
pub(crate) fn days_since_planting(planting_date: NaiveDate, evaluation_date: NaiveDate) -> i64 {
    evaluation_date
        .signed_duration_since(planting_date)
        .num_days()
        .max(0)
}

fn soil_multiplier(soil: SoilType) -> f64 {
    match soil {
        SoilType::Loamy => 1.15,
        SoilType::Clay => 0.90,
        SoilType::Sandy => 1.05,
    }
}

fn season_factor(season: Season) -> f64 {
    match season {
        Season::Spring => 1.10,
        Season::Summer => 1.00,
        Season::Fall => 0.95,
        Season::Winter => 0.85,
    }
}
