//! Weather-estimate contract: location out, weekly ET and rain in
//!
//! The weather service takes a postal code and month and answers with two
//! weekly depths. The answer is a convenience, not ground truth: it lands
//! in the same optional form fields the user could type by hand, with the
//! same leniency.

use serde::{Deserialize, Serialize};
use tracing::warn;

use super::ContractError;
use crate::core_types::input::{lenient_number, ZoneForm};

/// The location query sent to the weather service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherQuery {
    /// Postal code of the site
    pub postal_code: String,
    /// Month being planned for, 1-12
    pub month: u32,
}

impl WeatherQuery {
    /// Build the query from a form, if it names a location and month
    #[must_use]
    pub fn from_form(form: &ZoneForm) -> Option<Self> {
        Some(WeatherQuery {
            postal_code: form.postal_code.clone()?,
            month: form.month?,
        })
    }
}

/// The estimate expected back from the weather service
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WeatherEstimate {
    /// Weekly evapotranspiration, inches
    #[serde(deserialize_with = "lenient_number")]
    pub weekly_et: Option<f64>,
    /// Weekly rainfall, inches
    #[serde(deserialize_with = "lenient_number")]
    pub weekly_rain: Option<f64>,
}

impl WeatherEstimate {
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
            warn!("Discarding malformed weather response: {}", e);
            ContractError::MalformedResponse(e.to_string())
        })
    }

    /// Copy the estimate into a form's ET and rain fields
    ///
    /// Only fields the service actually answered are written; a half-empty
    /// estimate keeps whatever the form already had.
    pub fn apply_to(&self, form: &mut ZoneForm) {
        if let Some(et) = self.weekly_et {
            form.input.est_weekly_et = Some(et);
        }
        if let Some(rain) = self.weekly_rain {
            form.input.est_weekly_rain = Some(rain);
        }
    }
}
