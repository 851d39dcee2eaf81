//! Common types used across the platform

use serde::{Deserialize, Serialize};

/// Calendar seasons used for crop suitability
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Season::Spring => write!(f, "Spring"),
            Season::Summer => write!(f, "Summer"),
            Season::Fall => write!(f, "Fall"),
            Season::Winter => write!(f, "Winter"),
        }
    }
}

/// Month-to-season policy.
///
/// The default calendar follows the Northern-Hemisphere meteorological
/// convention (Mar-May spring, Jun-Aug summer, Sep-Nov fall, Dec-Feb
/// winter). Regional deployments can supply their own mapping; a shifted
/// Southern-Hemisphere calendar ships ready-made.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeasonCalendar {
    /// Season for each calendar month, January first.
    months: [Season; 12],
}

impl SeasonCalendar {
    /// Northern-Hemisphere calendar (the platform default)
    pub fn northern() -> Self {
        use Season::*;
        Self {
            months: [
                Winter, Winter, Spring, Spring, Spring, Summer, Summer, Summer, Fall, Fall, Fall,
                Winter,
            ],
        }
    }

    /// Southern-Hemisphere calendar (seasons shifted by six months)
    pub fn southern() -> Self {
        use Season::*;
        Self {
            months: [
                Summer, Summer, Fall, Fall, Fall, Winter, Winter, Winter, Spring, Spring, Spring,
                Summer,
            ],
        }
    }

    /// Build a calendar from an explicit per-month mapping, January first
    pub fn from_months(months: [Season; 12]) -> Self {
        Self { months }
    }

    /// Season for a calendar month (1 = January, ..., 12 = December)
    pub fn season_of_month(&self, month: u32) -> Season {
        let index = (month.clamp(1, 12) - 1) as usize;
        self.months[index]
    }

    /// Season a given date falls in
    pub fn season_for(&self, date: chrono::NaiveDate) -> Season {
        use chrono::Datelike;
        self.season_of_month(date.month())
    }
}

impl Default for SeasonCalendar {
    fn default() -> Self {
        Self::northern()
    }
}

/// Soil classifications supported by the advisory engine
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SoilType {
    Loamy,
    Clay,
    Sandy,
}

impl std::fmt::Display for SoilType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SoilType::Loamy => write!(f, "Loamy"),
            SoilType::Clay => write!(f, "Clay"),
            SoilType::Sandy => write!(f, "Sandy"),
        }
    }
}

/// Agronomic grouping of the supported crops
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CropCategory {
    Cereal,
    Pulse,
    CashCrop,
    Plantation,
    Vegetable,
    Fruit,
}

impl std::fmt::Display for CropCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CropCategory::Cereal => write!(f, "Cereal"),
            CropCategory::Pulse => write!(f, "Pulse"),
            CropCategory::CashCrop => write!(f, "Cash Crop"),
            CropCategory::Plantation => write!(f, "Plantation"),
            CropCategory::Vegetable => write!(f, "Vegetable"),
            CropCategory::Fruit => write!(f, "Fruit"),
        }
    }
}

/// Descriptive temperature band for a crop, in degrees Celsius.
///
/// Shown to farmers alongside the suitability verdict; not part of the
/// suitability scoring itself.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemperatureRange {
    pub low_c: i32,
    pub high_c: i32,
}

impl TemperatureRange {
    pub fn new(low_c: i32, high_c: i32) -> Self {
        Self { low_c, high_c }
    }

    /// Whether a measured temperature falls inside the band
    pub fn contains(&self, temperature_c: f64) -> bool {
        temperature_c >= f64::from(self.low_c) && temperature_c <= f64::from(self.high_c)
    }
}

impl std::fmt::Display for TemperatureRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}\u{b0}C", self.low_c, self.high_c)
    }
}

/// A point-in-time weather reading supplied by the caller
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_percent: i32,
}

impl WeatherObservation {
    pub fn new(temperature_c: f64, humidity_percent: i32) -> Self {
        Self {
            temperature_c,
            humidity_percent,
        }
    }
}
