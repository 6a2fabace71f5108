//! Zone input model and lenient numeric parsing
//!
//! The planning form arrives as loosely-typed data: numeric fields may be
//! JSON numbers, decimal strings ("45", "1.25"), empty strings, or missing
//! entirely. The input contract is "invalid or missing means absent" - a
//! malformed value never produces a parse error, it simply leaves the field
//! unset and the calculator falls back to its defaults.

use serde::{Deserialize, Deserializer, Serialize};

/// Parse a decimal string leniently. Whitespace is trimmed; anything that
/// does not parse to a finite number yields `None`.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Parse a count leniently. Fractions truncate toward zero ("4.9" reads as
/// 4); negative or non-numeric input yields `None`.
#[must_use]
pub fn parse_count(raw: &str) -> Option<u32> {
    let value = parse_decimal(raw)?;
    count_from_f64(value)
}

fn count_from_f64(value: f64) -> Option<u32> {
    if value.is_finite() && value >= 0.0 && value <= f64::from(u32::MAX) {
        Some(value.trunc() as u32)
    } else {
        None
    }
}

/// A numeric form value as it appears on the wire: a number or a string
#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
}

/// Deserialize an optional numeric field from a number, a decimal string,
/// null, or absence. Unparsable input becomes `None`, never an error.
pub(crate) fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawNumber> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawNumber::Num(n) if n.is_finite() => Some(n),
        RawNumber::Num(_) => None,
        RawNumber::Text(s) => parse_decimal(&s),
    }))
}

/// Deserialize an optional count field with the same leniency as
/// [`lenient_number`], truncating fractions toward zero.
fn lenient_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<RawNumber> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| match value {
        RawNumber::Num(n) => count_from_f64(n),
        RawNumber::Text(s) => parse_count(&s),
    }))
}

/// Which supply line feeds the zone
///
/// Secondary (irrigation/ditch) water is unmetered, so zones on it are
/// exempt from the monthly cost estimate while still counting gallons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WaterSource {
    /// Metered culinary supply
    #[default]
    Primary,
    /// Unmetered secondary / pressurized irrigation supply
    Secondary,
}

/// Deserialize a water source leniently: anything other than the literal
/// "Secondary" (including null, absence, or junk) reads as Primary
fn lenient_source<'de, D>(deserializer: D) -> Result<WaterSource, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("Secondary") => WaterSource::Secondary,
        _ => WaterSource::Primary,
    })
}

impl WaterSource {
    /// Whether zones on this source are exempt from the cost estimate
    pub fn cost_exempt(&self) -> bool {
        matches!(self, WaterSource::Secondary)
    }
}

/// One zone's hydraulic configuration at calculation time
///
/// The four key fields (`nozzle_type`, `soil_type`, `slope`, `zone_type`)
/// gate the calculation: until all four are present no result is produced.
/// Everything else is optional with a defined fallback.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneInput {
    /// Key into the nozzle table (required)
    pub nozzle_type: Option<String>,
    /// Key into the soil table (required)
    pub soil_type: Option<String>,
    /// Key into the slope table (required)
    pub slope: Option<String>,
    /// Key into the plant-type table (required)
    pub zone_type: Option<String>,
    /// Key into the sunlight table; absent or unknown reads as factor 1.0
    pub sunlight: Option<String>,
    /// Static operating pressure, PSI; absent or non-positive leaves the
    /// nozzle's base rate unmodified
    #[serde(deserialize_with = "lenient_number")]
    pub pressure: Option<f64>,
    /// Distribution efficiency override, percent (e.g. 70 for 70%)
    #[serde(deserialize_with = "lenient_number")]
    pub efficiency: Option<f64>,
    /// Weekly evapotranspiration, inches; absent or zero triggers the
    /// estimated-data fallback
    #[serde(deserialize_with = "lenient_number")]
    pub est_weekly_et: Option<f64>,
    /// Weekly rainfall, inches; absent reads as 0
    #[serde(deserialize_with = "lenient_number")]
    pub est_weekly_rain: Option<f64>,
    /// Mowing height, inches; only consulted for turf zone types
    #[serde(deserialize_with = "lenient_number")]
    pub mowing_height: Option<f64>,
}

/// The four required lookup keys, borrowed out of a complete input
#[derive(Debug, Clone, Copy)]
pub struct RequiredKeys<'a> {
    pub nozzle: &'a str,
    pub soil: &'a str,
    pub slope: &'a str,
    pub zone_type: &'a str,
}

impl ZoneInput {
    /// Borrow the four required keys, or `None` while any is still absent.
    /// This is the "no result" gate: not an error, a valid empty state.
    #[must_use]
    pub fn required_keys(&self) -> Option<RequiredKeys<'_>> {
        Some(RequiredKeys {
            nozzle: self.nozzle_type.as_deref()?,
            soil: self.soil_type.as_deref()?,
            slope: self.slope.as_deref()?,
            zone_type: self.zone_type.as_deref()?,
        })
    }

    /// Whether `other` keeps the same nozzle/soil/slope basis.
    ///
    /// A manual cycle override is tuned against the runoff relationship of
    /// that trio; changing any of them invalidates the override, while
    /// pressure, efficiency, sunlight, ET, rain, and mowing height changes
    /// only move runtime magnitude and keep it.
    #[must_use]
    pub fn same_hydraulic_basis(&self, other: &ZoneInput) -> bool {
        self.nozzle_type == other.nozzle_type
            && self.soil_type == other.soil_type
            && self.slope == other.slope
    }
}

/// The full form state for one zone: the calculation input plus the
/// billing/reporting fields that ride along into a saved snapshot
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ZoneForm {
    /// Hydraulic calculation input
    #[serde(flatten)]
    pub input: ZoneInput,
    /// Irrigated area, square feet; absent means usage cannot be estimated
    #[serde(deserialize_with = "lenient_number")]
    pub area_sq_ft: Option<f64>,
    /// Water price per 1000 gallons
    #[serde(deserialize_with = "lenient_number")]
    pub price_per_1000_gal: Option<f64>,
    /// Supply line feeding the zone
    #[serde(deserialize_with = "lenient_source")]
    pub water_source: WaterSource,
    /// Postal code for the weather-estimate collaborator
    pub postal_code: Option<String>,
    /// Month (1-12) for the weather-estimate collaborator
    #[serde(deserialize_with = "lenient_count")]
    pub month: Option<u32>,
    /// Persisted manual cycle override (1-10), if one was active at save
    #[serde(deserialize_with = "lenient_count")]
    pub manual_cycles: Option<u32>,
}
