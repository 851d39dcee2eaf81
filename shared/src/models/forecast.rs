//! Yield forecast models

use serde::{Deserialize, Serialize};

/// Predicted harvest yield with the factors that shaped it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct YieldForecast {
    pub expected_yield_quintals_per_ha: i32,
    /// Confidence in the 85-95 percent band
    pub confidence_percent: i32,
    pub factors: YieldFactors,
    pub recommendations: Vec<Recommendation>,
}

/// Contribution of each input to the forecast, as percentages of the
/// crop's base yield
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct YieldFactors {
    pub weather: i32,
    pub soil: i32,
    pub management: i32,
    pub area: i32,
}

/// Advisory message attached to a forecast
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub topic: RecommendationTopic,
    pub message: String,
    pub action: String,
}

/// What a recommendation is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RecommendationTopic {
    Weather,
    Soil,
    Management,
    Irrigation,
}

impl std::fmt::Display for RecommendationTopic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationTopic::Weather => write!(f, "weather"),
            RecommendationTopic::Soil => write!(f, "soil"),
            RecommendationTopic::Management => write!(f, "management"),
            RecommendationTopic::Irrigation => write!(f, "irrigation"),
        }
    }
}
