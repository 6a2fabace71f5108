//! Narrative report contract: context out, narrative in
//!
//! The context object carries everything the text-generation service needs
//! to write about a zone: the raw environment the user described and the
//! schedule this crate computed. The response carries narrative only plus
//! optional usage estimates; the schedule numbers themselves have no fields
//! in [`ZoneReport`], so a response can never overwrite them.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ContractError;
use crate::core_types::input::{lenient_number, ZoneForm};
use crate::schedule::LiveCalculation;
use crate::session::SavedZone;
use crate::usage::WaterUsage;

/// The structured context sent to the text-generation service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportContext {
    /// Display name of the zone
    pub zone_name: String,
    /// Nozzle key as entered
    pub nozzle_type: Option<String>,
    /// Soil key as entered
    pub soil_type: Option<String>,
    /// Slope bucket as entered
    pub slope: Option<String>,
    /// Plant category as entered
    pub zone_type: Option<String>,
    /// Sunlight exposure as entered
    pub sunlight: Option<String>,
    /// Operating pressure, PSI
    pub pressure: Option<f64>,
    /// Weekly ET as entered or estimated, inches
    pub est_weekly_et: Option<f64>,
    /// Weekly rainfall, inches
    pub est_weekly_rain: Option<f64>,
    /// Mowing height, inches
    pub mowing_height: Option<f64>,
    /// Irrigated area, square feet
    pub area_sq_ft: Option<f64>,
    /// Computed minutes per week
    pub weekly_total_minutes: u32,
    /// Computed runoff ceiling, minutes
    pub max_run_time: u32,
    /// Computed soak interval, minutes
    pub recommended_soak_time: u32,
    /// Computed watering days per week
    pub suggested_frequency: u32,
    /// Computed cycles per watering day
    pub cycles_per_day: u32,
    /// Computed precipitation rate, in/hr
    pub precip_rate: f64,
    /// Computed depth per watering day, inches
    pub inches_applied_per_day: f64,
    /// Distribution efficiency applied, fraction
    pub efficiency: f64,
    /// True when the schedule rests on estimated ET
    pub is_est_data: bool,
}

impl ReportContext {
    /// Build the context for one zone
    #[must_use]
    pub fn new(zone_name: &str, form: &ZoneForm, calculation: &LiveCalculation) -> Self {
        ReportContext {
            zone_name: zone_name.to_string(),
            nozzle_type: form.input.nozzle_type.clone(),
            soil_type: form.input.soil_type.clone(),
            slope: form.input.slope.clone(),
            zone_type: form.input.zone_type.clone(),
            sunlight: form.input.sunlight.clone(),
            pressure: form.input.pressure,
            est_weekly_et: form.input.est_weekly_et,
            est_weekly_rain: form.input.est_weekly_rain,
            mowing_height: form.input.mowing_height,
            area_sq_ft: form.area_sq_ft,
            weekly_total_minutes: calculation.weekly_total_minutes,
            max_run_time: calculation.max_run_time,
            recommended_soak_time: calculation.recommended_soak_time,
            suggested_frequency: calculation.suggested_frequency,
            cycles_per_day: calculation.cycles_per_day,
            precip_rate: calculation.precip_rate,
            inches_applied_per_day: calculation.inches_applied_per_day,
            efficiency: calculation.efficiency,
            is_est_data: calculation.is_est_data,
        }
    }

    /// Build the context from a committed zone
    #[must_use]
    pub fn from_saved(zone: &SavedZone) -> Self {
        ReportContext::new(&zone.name, &zone.form, &zone.calculation)
    }
}

/// The narrative result expected back from the text-generation service
///
/// Every field is optional or defaults empty; the service is free-text
/// generation behind a JSON contract, so partial responses are normal.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneReport {
    /// Short actionable tips
    pub tips: Vec<String>,
    /// Longer advice paragraph
    pub advice: Option<String>,
    /// Difficulty tier label for maintaining this zone
    pub difficulty: Option<String>,
    /// Projected soil-moisture level over time, percent
    pub moisture_series: Vec<f64>,
    /// Service's gallons estimate; replaced by the authoritative figure
    #[serde(deserialize_with = "lenient_number")]
    pub estimated_gallons: Option<f64>,
    /// Service's cost estimate; replaced by the authoritative figure
    #[serde(deserialize_with = "lenient_number")]
    pub estimated_monthly_cost: Option<f64>,
}

impl ZoneReport {
    /// Parse a raw service response
    ///
    /// # Errors
    /// Returns [`ContractError::EmptyResponse`] for blank output and
    /// [`ContractError::MalformedResponse`] when the text does not parse
    /// against the contract
    pub fn from_json(raw: &str) -> Result<Self, ContractError> {
        if raw.trim().is_empty() {
            return Err(ContractError::EmptyResponse);
        }

        serde_json::from_str(raw).map_err(|e| {
            warn!("Discarding malformed report response: {}", e);
            ContractError::MalformedResponse(e.to_string())
        })
    }

    /// Overwrite the service's usage estimates with this crate's figures
    ///
    /// The schedule is authoritative here, not in the narrative service;
    /// its gallons/cost guesses are display filler until this is applied.
    pub fn apply_authoritative_usage(&mut self, usage: &WaterUsage) {
        self.estimated_gallons = Some(usage.weekly_gallons);
        self.estimated_monthly_cost = Some(usage.monthly_cost);
    }
}
