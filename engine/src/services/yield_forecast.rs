//! Yield forecasting
//!
//! A multiplicative factor model over per-crop base yields: weather, soil,
//! management (current progress) and farm area each scale the base, and
//! each shortfall contributes an advisory recommendation.

use rand::Rng;

use shared::{
    FarmSnapshot, Recommendation, RecommendationTopic, SoilType, WeatherObservation, YieldFactors,
    YieldForecast,
};

/// Typical yield in quintals per hectare under average conditions
fn base_yield(crop: &str) -> f64 {
    match crop {
        "Wheat" => 45.0,
        "Rice" => 55.0,
        "Corn" => 65.0,
        "Tomatoes" => 400.0,
        "Onions" => 350.0,
        "Potatoes" => 250.0,
        "Cotton" => 25.0,
        "Sugarcane" => 700.0,
        _ => 50.0,
    }
}

fn optimal_temperature(crop: &str) -> f64 {
    match crop {
        "Wheat" => 20.0,
        "Rice" => 30.0,
        _ => 25.0,
    }
}

/// Forecast yield, drawing the confidence jitter from a fresh
/// thread-local generator
pub fn forecast_yield(
    farm: &FarmSnapshot,
    progress_percent: i32,
    weather: Option<&WeatherObservation>,
) -> YieldForecast {
    forecast_yield_with(farm, progress_percent, weather, &mut rand::thread_rng())
}

/// Forecast yield using the supplied randomness source
pub fn forecast_yield_with(
    farm: &FarmSnapshot,
    progress_percent: i32,
    weather: Option<&WeatherObservation>,
    rng: &mut impl Rng,
) -> YieldForecast {
    let base = base_yield(&farm.crop);

    let weather_factor = weather.map_or(1.0, |w| {
        let temp_diff = (w.temperature_c - optimal_temperature(&farm.crop)).abs();
        (1.0 - temp_diff * 0.02).max(0.7)
    });

    let soil_factor = match farm.soil {
        SoilType::Loamy => 1.1,
        SoilType::Clay => 0.95,
        SoilType::Sandy => 1.0,
    };

    let management_factor = 0.8 + f64::from(progress_percent) * 0.004;

    let area_factor = if farm.area_hectares > 5.0 {
        1.05
    } else if farm.area_hectares > 2.0 {
        1.0
    } else {
        0.95
    };

    let expected = base * weather_factor * soil_factor * management_factor * area_factor;
    let confidence_percent = 85 + rng.gen_range(0..=10);

    YieldForecast {
        expected_yield_quintals_per_ha: expected.round() as i32,
        confidence_percent,
        factors: YieldFactors {
            weather: (weather_factor * 100.0).round() as i32,
            soil: (soil_factor * 100.0).round() as i32,
            management: (management_factor * 100.0).round() as i32,
            area: (area_factor * 100.0).round() as i32,
        },
        recommendations: recommendations(farm, progress_percent, weather_factor),
    }
}

fn recommendations(
    farm: &FarmSnapshot,
    progress_percent: i32,
    weather_factor: f64,
) -> Vec<Recommendation> {
    let mut recs = Vec::new();

    if weather_factor < 0.9 {
        recs.push(Recommendation {
            topic: RecommendationTopic::Weather,
            message: "Weather conditions are not optimal. Consider protective measures."
                .to_string(),
            action: "Install shade nets or greenhouse protection".to_string(),
        });
    }

    if farm.soil != SoilType::Loamy {
        recs.push(Recommendation {
            topic: RecommendationTopic::Soil,
            message: "Soil improvement can boost yield by 10-15%".to_string(),
            action: "Add organic compost and improve drainage".to_string(),
        });
    }

    if progress_percent < 70 {
        recs.push(Recommendation {
            topic: RecommendationTopic::Management,
            message: "Improve farm management practices".to_string(),
            action: "Regular monitoring and timely interventions needed".to_string(),
        });
    }

    let interval = if farm.crop == "Rice" { "2-3" } else { "4-5" };
    recs.push(Recommendation {
        topic: RecommendationTopic::Irrigation,
        message: "Optimal irrigation schedule for maximum yield".to_string(),
        action: format!("Water every {interval} days during growing season"),
    });

    recs
}
