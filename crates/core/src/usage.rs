//! Weekly gallons and monthly cost estimation
//!
//! Derives per-zone water usage from a plan plus the zone's area and price,
//! and sums across the committed fleet. Pure arithmetic; rounding happens
//! once, at the gallons figure, which is what a meter would report.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::core_types::input::ZoneForm;
use crate::schedule::LiveCalculation;
use crate::session::SavedZone;

/// One inch of water over one square foot, in gallons
const GALLONS_PER_SQ_FT_INCH: f64 = 0.623;

/// Average weeks per month, for scaling a weekly figure to a billing month
const WEEKS_PER_MONTH: f64 = 4.3;

/// Estimated water usage for one zone
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WaterUsage {
    /// Gallons applied per week, rounded to whole gallons
    pub weekly_gallons: f64,
    /// Estimated monthly cost; 0 for cost-exempt zones
    pub monthly_cost: f64,
    /// True when the zone draws unmetered secondary water
    pub cost_exempt: bool,
}

/// Fleet-level usage totals across committed zones
///
/// Cost-exempt zones contribute their gallons but nothing to the monthly
/// cost.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetTotals {
    /// Sum of weekly gallons across estimated zones
    pub weekly_gallons: f64,
    /// Sum of monthly cost across metered zones
    pub monthly_cost: f64,
    /// Zones with enough data to estimate
    pub zones: usize,
    /// Of those, zones exempt from the cost estimate
    pub exempt_zones: usize,
}

impl FleetTotals {
    fn from_zone(usage: WaterUsage) -> Self {
        FleetTotals {
            weekly_gallons: usage.weekly_gallons,
            monthly_cost: usage.monthly_cost,
            zones: 1,
            exempt_zones: usize::from(usage.cost_exempt),
        }
    }

    fn merge(self, other: Self) -> Self {
        FleetTotals {
            weekly_gallons: self.weekly_gallons + other.weekly_gallons,
            monthly_cost: self.monthly_cost + other.monthly_cost,
            zones: self.zones + other.zones,
            exempt_zones: self.exempt_zones + other.exempt_zones,
        }
    }
}

/// Estimate one zone's weekly gallons and monthly cost
///
/// Weekly runtime at the zone's precipitation rate gives an applied depth;
/// depth times area converts to gallons. Needs the irrigated area; without
/// it there is nothing to estimate and the result is `None`. A missing
/// price reads as free water, and a secondary (unmetered) source zeroes the
/// cost outright while the gallons stay.
#[must_use]
pub fn zone_usage(calculation: &LiveCalculation, form: &ZoneForm) -> Option<WaterUsage> {
    let area_sq_ft = form.area_sq_ft?;

    let weekly_inches =
        f64::from(calculation.weekly_total_minutes) / 60.0 * calculation.precip_rate;
    let weekly_gallons = (weekly_inches * area_sq_ft * GALLONS_PER_SQ_FT_INCH).round();

    let cost_exempt = form.water_source.cost_exempt();
    let monthly_cost = if cost_exempt {
        0.0
    } else {
        let price = form.price_per_1000_gal.unwrap_or(0.0);
        weekly_gallons * WEEKS_PER_MONTH / 1000.0 * price
    };

    Some(WaterUsage {
        weekly_gallons,
        monthly_cost,
        cost_exempt,
    })
}

/// Sum usage across the committed fleet
///
/// Zones without an area estimate are skipped entirely; they appear in
/// neither the gallons total nor the zone count.
#[must_use]
pub fn fleet_usage(zones: &[SavedZone]) -> FleetTotals {
    zones
        .par_iter()
        .filter_map(|zone| zone_usage(&zone.calculation, &zone.form))
        .map(FleetTotals::from_zone)
        .reduce(FleetTotals::default, FleetTotals::merge)
}
