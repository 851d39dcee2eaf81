//! Farm snapshot model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::SoilType;

/// A read-only snapshot of a farm's attributes at evaluation time.
///
/// Owned by the farm-management layer; the estimation engine only reads
/// the crop, soil, area and planting date and returns derived numbers for
/// the caller to attach.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FarmSnapshot {
    pub id: Uuid,
    pub name: String,
    /// Crop identifier, matched case-sensitively against the catalog
    pub crop: String,
    pub soil: SoilType,
    pub area_hectares: f64,
    pub planting_date: NaiveDate,
}

impl FarmSnapshot {
    pub fn new(
        name: impl Into<String>,
        crop: impl Into<String>,
        soil: SoilType,
        area_hectares: f64,
        planting_date: NaiveDate,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            crop: crop.into(),
            soil,
            area_hectares,
            planting_date,
        }
    }
}
