//! Weather-driven crop suggestions
//!
//! Coarse temperature/humidity banding for the dashboard's "what could I
//! plant right now" widget. The suggestions are display labels; some fall
//! outside the managed catalog on purpose (regional staples the platform
//! does not track yet).

use shared::WeatherObservation;

/// Suggest crops that suit the current weather
pub fn suggest_crops(observation: &WeatherObservation) -> Vec<&'static str> {
    let t = observation.temperature_c;
    let h = observation.humidity_percent;

    if t >= 30.0 && h >= 70 {
        vec!["Rice", "Sugarcane", "Coconut"]
    } else if t >= 25.0 && h >= 60 {
        vec!["Cotton", "Maize", "Groundnut"]
    } else if (20.0..30.0).contains(&t) && h < 60 {
        vec!["Wheat", "Barley", "Mustard"]
    } else if t < 25.0 {
        vec!["Potato", "Onion", "Cabbage"]
    } else {
        vec!["Tomato", "Chili", "Soybean"]
    }
}
