//! Hydraulic watering-schedule calculation
//!
//! Turns one zone's configuration into a complete watering plan: pressure-
//! adjusted precipitation rate, weekly water need, frequency, daily runtime,
//! and a runoff-limited cycle/soak split. Pure function of the input, the
//! reference tables, and the active cycle selection.
//!
//! # References
//! - Keller, J., Bliesner, R.D. (1990). "Sprinkle and Trickle Irrigation."
//!   Van Nostrand Reinhold. (orifice flow vs. pressure, distribution uniformity)
//! - Irrigation Association (2014). "Landscape Irrigation Best Management
//!   Practices." (cycle-and-soak scheduling, runoff management)

use serde::{Deserialize, Serialize};

use crate::catalog::{ReferenceTables, SoilSpec};
use crate::core_types::input::ZoneInput;
use crate::core_types::units::{Inches, InchesPerHour, Psi};
use crate::schedule::cycles::CycleCount;

/// Weekly evapotranspiration assumed when no measured value is supplied (inches)
const FALLBACK_WEEKLY_ET: f64 = 1.25;

/// Distribution efficiency assumed when neither the form nor the nozzle
/// table supplies one
const FALLBACK_EFFICIENCY: f64 = 0.75;

/// Nominal single-cycle ceiling when the soil drinks faster than the nozzle
/// delivers (minutes)
const NOMINAL_MAX_RUN: u32 = 60;

/// Shortest useful split cycle; below this, system pressurization overhead
/// dominates the water actually delivered (minutes)
const MIN_SPLIT_RUN: u32 = 3;

/// The computed watering plan for one zone
///
/// Recomputed from scratch on every relevant input change and immutable once
/// produced; committing a zone captures a copy, decoupling the snapshot from
/// further live edits.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveCalculation {
    /// Pressure-adjusted precipitation rate (in/hr)
    pub precip_rate: f64,
    /// Total run minutes needed per week
    pub weekly_total_minutes: u32,
    /// Watering days per week, always within 1..=7
    pub suggested_frequency: u32,
    /// Run minutes per watering day
    pub daily_run_time: u32,
    /// Runoff-limited ceiling for a single cycle (minutes)
    pub max_run_time: u32,
    /// Soak interval between cycles (minutes); 0 when a day runs as one cycle
    pub recommended_soak_time: u32,
    /// Cycles the daily runtime is split across, always within 1..=10
    pub cycles_per_day: u32,
    /// Run minutes per cycle
    pub minutes_per_cycle: u32,
    /// Water depth applied on a watering day (inches)
    pub inches_applied_per_day: f64,
    /// True when the weekly ET fell back to the built-in estimate
    pub is_est_data: bool,
    /// Distribution efficiency actually applied (fraction 0-1)
    pub efficiency: f64,
}

/// Compute the watering plan for one zone
///
/// Requires `nozzle_type`, `soil_type`, `slope`, and `zone_type`; while any
/// of the four is absent the result is `None`, a valid empty state rather
/// than an error. Every other input is optional with a defined fallback, and
/// unknown lookup keys degrade the same way (zero-rate nozzle, runoff-free
/// soil, neutral factors) instead of failing.
///
/// # Arguments
/// * `tables` - Reference lookup data (nozzles, soils, slopes, plants, sunlight)
/// * `input` - The zone's form state
/// * `cycles` - Active cycle selection; an override replaces the automatic split
///
/// # Returns
/// The complete plan, or `None` while a required field is missing
///
/// # Example
/// ```
/// use hydrozone_core::catalog::ReferenceTables;
/// use hydrozone_core::core_types::input::ZoneInput;
/// use hydrozone_core::schedule::{recalculate, CycleCount};
///
/// let tables = ReferenceTables::builtin();
/// let input = ZoneInput {
///     nozzle_type: Some("Fixed Spray Head".to_string()),
///     soil_type: Some("Loam".to_string()),
///     slope: Some("0-15%".to_string()),
///     zone_type: Some("Cool Season Turf Grass".to_string()),
///     ..ZoneInput::default()
/// };
///
/// let plan = recalculate(&tables, &input, CycleCount::Automatic).unwrap();
/// assert_eq!(plan.max_run_time, 20);
/// ```
pub fn recalculate(
    tables: &ReferenceTables,
    input: &ZoneInput,
    cycles: CycleCount,
) -> Option<LiveCalculation> {
    let keys = input.required_keys()?;

    let nozzle = tables.nozzle(keys.nozzle);
    let soil = tables.soil(keys.soil);
    let slope_factor = tables.slope_factor(keys.slope).unwrap_or(1.0);
    let plant = tables.plant(keys.zone_type);
    let sun_factor = input
        .sunlight
        .as_deref()
        .and_then(|key| tables.sunlight_factor(key))
        .unwrap_or(1.0);

    // 1. Precipitation rate, adjusted for operating pressure
    let base_rate = nozzle.map_or(InchesPerHour::ZERO, |n| n.rate);
    let precip_rate = match (nozzle, input.pressure) {
        (Some(n), Some(psi)) if psi > 0.0 => {
            let multiplier = pressure_multiplier(Psi::new(psi), n.optimal_psi);
            InchesPerHour::new(round2(*base_rate * multiplier))
        }
        _ => base_rate,
    };

    // 2. Distribution efficiency: form override, else nozzle default
    let efficiency = match input.efficiency {
        Some(percent) => percent / 100.0,
        None => nozzle.map_or(FALLBACK_EFFICIENCY, |n| n.efficiency),
    };

    // 3. Net weekly water need
    let (base_et, is_est_data) = match input.est_weekly_et {
        Some(et) if et != 0.0 => (et, false),
        _ => (FALLBACK_WEEKLY_ET, true),
    };
    let plant_factor = plant.map_or(1.0, |p| p.factor);
    let adjusted_et = base_et * plant_factor * sun_factor;
    let rain = input.est_weekly_rain.unwrap_or(0.0);
    let net_weekly = Inches::new((adjusted_et - rain).max(0.0));

    // 4. Effective precipitation rate: poor uniformity inflates runtime
    let effective_pr = precip_rate * efficiency;

    // 5. Weekly total minutes
    let weekly_total_minutes = if *effective_pr > 0.0 {
        (net_weekly / effective_pr * 60.0).ceil() as u32
    } else {
        0
    };

    // 6. Base frequency from water need and soil holding capacity
    let sandy = soil.is_some_and(|s| s.sandy);
    let base_frequency = base_frequency(net_weekly, sandy);

    // 7. Mowing-height root-depth policy, turf zones with a known height only
    let turf = plant.is_some_and(|p| p.turf);
    let suggested_frequency = match input.mowing_height {
        Some(height) if turf => turf_frequency(base_frequency, height),
        _ => base_frequency,
    }
    .clamp(1, 7);

    // 8. Daily runtime
    let daily_run_time = weekly_total_minutes.div_ceil(suggested_frequency);

    // 9. Depth applied on a watering day
    let inches_applied_per_day = round2(f64::from(daily_run_time) / 60.0 * *effective_pr);

    // 10. Runoff-limited single-cycle ceiling
    let max_run_time = runoff_ceiling(precip_rate, soil, slope_factor);

    // 11. Automatic cycle count; sand always benefits from split cycles
    let mut automatic = daily_run_time.div_ceil(max_run_time);
    if sandy {
        automatic = automatic.max(2);
    }
    let automatic = automatic.clamp(CycleCount::MIN, CycleCount::MAX);

    // 12. Per-cycle runtime under the active cycle count
    let cycles_per_day = cycles.resolve(automatic);
    let minutes_per_cycle = daily_run_time.div_ceil(cycles_per_day);

    // 13. Soak interval, only meaningful between cycles
    let recommended_soak_time = if cycles_per_day > 1 {
        soil.map_or(0, |s| s.soak_minutes)
    } else {
        0
    };

    Some(LiveCalculation {
        precip_rate: *precip_rate,
        weekly_total_minutes,
        suggested_frequency,
        daily_run_time,
        max_run_time,
        recommended_soak_time,
        cycles_per_day,
        minutes_per_cycle,
        inches_applied_per_day,
        is_est_data,
        efficiency,
    })
}

/// Pressure adjustment to a nozzle's rated precipitation rate
///
/// Flow through a fixed orifice scales with the square root of pressure
/// (Keller & Bliesner 1990), so running off-spec shifts delivery by
/// `sqrt(actual / optimal)`. Clamped to [0.5, 1.5]: beyond that range the
/// spray pattern itself breaks down (misting or doughnutting) and the
/// orifice model stops being meaningful.
fn pressure_multiplier(actual: Psi, optimal: Psi) -> f64 {
    (actual / optimal).sqrt().clamp(0.5, 1.5)
}

/// Round to 2 decimals, the display precision for rates and depths
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Base watering days per week from net need and soil holding capacity
///
/// Sandy soils hold little water, so the same weekly depth splits across
/// more, shallower soaks; loam and clay store enough to water deeper and
/// less often.
fn base_frequency(net_weekly: Inches, sandy: bool) -> u32 {
    if sandy {
        if *net_weekly > 1.5 {
            5
        } else if *net_weekly > 0.8 {
            4
        } else {
            3
        }
    } else if *net_weekly > 1.4 {
        4
    } else if *net_weekly > 0.7 {
        3
    } else {
        2
    }
}

/// Root-depth frequency policy for turf, keyed on mowing height
///
/// Short-mown grass keeps shallow roots and needs water near-daily; tall
/// grass roots deep and does best watered infrequently. The tall-grass cap
/// is a hard upper bound that wins over any high-demand signal from the
/// soil-based frequency.
fn turf_frequency(base: u32, mowing_height: f64) -> u32 {
    if mowing_height <= 0.75 {
        7
    } else if mowing_height < 1.5 {
        base.max(5)
    } else if mowing_height < 2.0 {
        base.max(4)
    } else {
        base.min(4)
    }
}

/// Longest single cycle before surface runoff starts (minutes)
///
/// When the nozzle outpaces the soil's intake, the sustainable fraction of
/// an hour is `infiltration / precipitation`, further derated on slopes
/// where water sheds before it can soak. Floored at [`MIN_SPLIT_RUN`].
/// An unknown soil reads as runoff-free.
fn runoff_ceiling(precip_rate: InchesPerHour, soil: Option<&SoilSpec>, slope_factor: f64) -> u32 {
    match soil {
        Some(s) if precip_rate > s.infiltration => {
            let sustainable = 60.0 * (s.infiltration / precip_rate) * slope_factor;
            (sustainable.floor() as u32).max(MIN_SPLIT_RUN)
        }
        _ => NOMINAL_MAX_RUN,
    }
}
