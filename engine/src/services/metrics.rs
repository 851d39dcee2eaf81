//! Farm metric derivation
//!
//! The single entry point the farm-management layer calls: combines the
//! suitability verdict and the adjusted growth curve into the flat report
//! a farm card renders. Never fails; every input combination degrades to
//! a best-effort structured result.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use rand::Rng;

use shared::{FarmReport, FarmSnapshot, SeasonCalendar, SoilType};

use crate::catalog::CropCatalog;
use crate::services::growth::{days_since_planting, GrowthService};
use crate::services::suitability::SuitabilityService;

/// Derives the per-farm numbers shown on dashboards and farm cards
#[derive(Clone)]
pub struct MetricsService {
    catalog: Arc<CropCatalog>,
    suitability: SuitabilityService,
    growth: GrowthService,
}

impl MetricsService {
    /// Create a service using the default Northern-Hemisphere calendar
    pub fn new(catalog: Arc<CropCatalog>) -> Self {
        Self::with_calendar(catalog, SeasonCalendar::default())
    }

    /// Create a service with an explicit season calendar
    pub fn with_calendar(catalog: Arc<CropCatalog>, calendar: SeasonCalendar) -> Self {
        Self {
            suitability: SuitabilityService::with_calendar(Arc::clone(&catalog), calendar),
            growth: GrowthService::with_calendar(Arc::clone(&catalog), calendar),
            catalog,
        }
    }

    /// Derive metrics for a farm as of today
    pub fn derive_now(&self, farm: &FarmSnapshot) -> FarmReport {
        self.derive(farm, Utc::now().date_naive())
    }

    /// Derive metrics for a farm as of an explicit evaluation date
    pub fn derive(&self, farm: &FarmSnapshot, evaluation_date: NaiveDate) -> FarmReport {
        self.derive_with(farm, evaluation_date, &mut rand::thread_rng())
    }

    /// Derive metrics using the supplied variation source
    pub fn derive_with(
        &self,
        farm: &FarmSnapshot,
        evaluation_date: NaiveDate,
        rng: &mut impl Rng,
    ) -> FarmReport {
        let assessment = self
            .suitability
            .evaluate(&farm.crop, farm.soil, evaluation_date);
        let estimate = self.growth.synthesize_with(
            &farm.crop,
            farm.soil,
            farm.area_hectares,
            farm.planting_date,
            evaluation_date,
            rng,
        );

        let days_since_planted = days_since_planting(farm.planting_date, evaluation_date);
        let days_to_harvest = match self.catalog.lookup(&farm.crop) {
            Ok(profile) => (i64::from(profile.growth_days) - days_since_planted).max(0),
            // No growth duration to count down from
            Err(_) => 0,
        };

        let health_score = health_score(assessment.suitable, farm.area_hectares, farm.soil);

        FarmReport {
            suitable: assessment.suitable,
            current_season: assessment.current_season,
            warnings: assessment.warnings,
            weekly_progress: estimate.weekly_progress,
            current_progress: estimate.current_progress,
            days_to_harvest,
            health_score,
        }
    }
}

/// Additive health heuristic: suitability baseline plus area bonus, with
/// a loamy-soil bump, bounded to [0, 100]
fn health_score(suitable: bool, area_hectares: f64, soil: SoilType) -> i32 {
    let raw = if suitable {
        let soil_bonus = if soil == SoilType::Loamy { 5.0 } else { 0.0 };
        85.0 + 2.0 * area_hectares + soil_bonus
    } else {
        60.0 + area_hectares
    };
    (raw.floor() as i32).clamp(0, 100)
}
