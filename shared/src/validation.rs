//! Validation utilities for the Farm Advisory Platform
//!
//! Form-level checks live here so the UI and any API layer gate input the
//! same way; the estimation engine itself accepts raw values and degrades
//! instead of rejecting.

use crate::models::{CropProfile, GROWTH_WEEKS};
use crate::types::TemperatureRange;

// ============================================================================
// Crop Profile Validations
// ============================================================================

/// Validate a canonical growth curve: values in [0, 100], non-decreasing,
/// final value at least 90
pub fn validate_growth_curve(curve: &[u8; GROWTH_WEEKS]) -> Result<(), &'static str> {
    if curve.iter().any(|&v| v > 100) {
        return Err("Growth curve values must be between 0 and 100");
    }
    if curve.windows(2).any(|w| w[1] < w[0]) {
        return Err("Growth curve must be non-decreasing");
    }
    if curve[GROWTH_WEEKS - 1] < 90 {
        return Err("Growth curve must reach at least 90 by the final week");
    }
    Ok(())
}

/// Validate a full crop profile
pub fn validate_crop_profile(profile: &CropProfile) -> Result<(), &'static str> {
    if profile.name.trim().is_empty() {
        return Err("Crop name cannot be empty");
    }
    if profile.growth_days == 0 {
        return Err("Growth duration must be positive");
    }
    if profile.ideal_seasons.is_empty() {
        return Err("Crop must list at least one ideal season");
    }
    if profile.soil_preference.is_empty() {
        return Err("Crop must list at least one preferred soil");
    }
    if profile.ideal_temperature.low_c > profile.ideal_temperature.high_c {
        return Err("Temperature band low must not exceed high");
    }
    validate_growth_curve(&profile.growth_curve)
}

// ============================================================================
// Farm Input Validations
// ============================================================================

/// Validate farm area before submitting to the engine
pub fn validate_area_hectares(area: f64) -> Result<(), &'static str> {
    if !area.is_finite() {
        return Err("Farm area must be a finite number");
    }
    if area <= 0.0 {
        return Err("Farm area must be positive");
    }
    Ok(())
}

/// Validate a relative humidity percentage
pub fn validate_humidity_percent(humidity: i32) -> Result<(), &'static str> {
    if !(0..=100).contains(&humidity) {
        return Err("Humidity must be between 0 and 100%");
    }
    Ok(())
}

/// Check if a measured temperature sits inside a crop's descriptive band
pub fn is_ideal_temperature(band: &TemperatureRange, temperature_c: f64) -> bool {
    band.contains(temperature_c)
}
