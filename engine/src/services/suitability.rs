//! Crop suitability evaluation
//!
//! Checks a crop against the season the evaluation date falls in and the
//! farm's soil, producing a verdict plus farmer-readable warnings. The
//! onboarding flow blocks submission on an unsuitable verdict until the
//! farmer explicitly acknowledges the risk; that gating flag belongs to
//! the caller, not this service.

use std::sync::Arc;

use chrono::NaiveDate;

use shared::{CropProfile, SeasonCalendar, SoilType, SuitabilityAssessment};

use crate::catalog::CropCatalog;

/// Suitability evaluation service
#[derive(Clone)]
pub struct SuitabilityService {
    catalog: Arc<CropCatalog>,
    calendar: SeasonCalendar,
}

impl SuitabilityService {
    /// Create a service using the default Northern-Hemisphere calendar
    pub fn new(catalog: Arc<CropCatalog>) -> Self {
        Self::with_calendar(catalog, SeasonCalendar::default())
    }

    /// Create a service with an explicit season calendar
    pub fn with_calendar(catalog: Arc<CropCatalog>, calendar: SeasonCalendar) -> Self {
        Self { catalog, calendar }
    }

    /// Evaluate a crop identifier against soil and evaluation date.
    ///
    /// An unknown crop is a terminal, non-fatal result: unsuitable with a
    /// single generic warning, leaving the go/no-go decision to the caller.
    pub fn evaluate(
        &self,
        crop: &str,
        soil: SoilType,
        evaluation_date: NaiveDate,
    ) -> SuitabilityAssessment {
        let current_season = self.calendar.season_for(evaluation_date);

        match self.catalog.lookup(crop) {
            Ok(profile) => self.evaluate_profile(profile, soil, evaluation_date),
            Err(_) => {
                tracing::debug!(crop, "crop not in catalog, returning generic assessment");
                SuitabilityAssessment::unknown_crop(current_season)
            }
        }
    }

    /// Evaluate a resolved crop profile against soil and evaluation date
    pub fn evaluate_profile(
        &self,
        profile: &CropProfile,
        soil: SoilType,
        evaluation_date: NaiveDate,
    ) -> SuitabilityAssessment {
        let current_season = self.calendar.season_for(evaluation_date);
        let season_match = profile.grows_in(current_season);
        let soil_match = profile.prefers_soil(soil);

        let mut warnings = Vec::new();
        if !season_match {
            warnings.push(format!(
                "{} is not ideal for {}. Best seasons: {}",
                profile.name,
                current_season,
                join_display(&profile.ideal_seasons)
            ));
        }
        if !soil_match {
            warnings.push(format!(
                "{} soil may not be optimal. Preferred: {}",
                soil,
                join_display(&profile.soil_preference)
            ));
        }

        SuitabilityAssessment {
            suitable: season_match && soil_match,
            current_season,
            warnings,
        }
    }
}

fn join_display<T: std::fmt::Display>(items: &[T]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
