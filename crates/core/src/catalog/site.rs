//! Site condition factors: slope, sunlight exposure, and plant material
//!
//! Slope factors scale the runoff-limited cycle ceiling (steeper ground
//! sheds ponded water sooner). Sunlight factors scale the weekly demand
//! (shade cuts evapotranspiration). Plant factors are landscape
//! coefficients relative to reference ET.

use serde::{Deserialize, Serialize};

/// Ground slope runoff factors
///
/// The fraction of the flat-ground cycle runtime that remains safe as the
/// grade steepens. Keys in the built-in table are the bucket labels the
/// form uses ("0-15%", "15-30%", "30%+").
pub mod slope_factors {
    /// 0-15% grade: no reduction
    pub const GENTLE: f64 = 1.0;
    /// 15-30% grade
    pub const MODERATE: f64 = 0.7;
    /// Over 30% grade
    pub const STEEP: f64 = 0.5;
}

/// Sunlight exposure factors applied to weekly demand
pub mod sunlight_factors {
    /// Six or more hours of direct sun
    pub const DIRECT_SUN: f64 = 1.0;
    /// Four to six hours of sun
    pub const PARTIAL_SUN: f64 = 0.85;
    /// Two to four hours of sun
    pub const PARTIAL_SHADE: f64 = 0.70;
    /// Under two hours of sun
    pub const FULL_SHADE: f64 = 0.55;
}

/// Water-use characteristics of one plant category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlantSpec {
    /// Landscape coefficient applied to reference ET
    pub factor: f64,
    /// Mowed turf: the mowing-height root-depth policy applies
    pub turf: bool,
}

impl PlantSpec {
    /// Cool season turf (bluegrass, fescue, rye)
    pub const COOL_SEASON_TURF: PlantSpec = PlantSpec {
        factor: 0.95,
        turf: true,
    };

    /// Warm season turf (bermuda, zoysia, buffalo)
    pub const WARM_SEASON_TURF: PlantSpec = PlantSpec {
        factor: 0.70,
        turf: true,
    };

    /// Vegetable garden at full production
    pub const VEGETABLE_GARDEN: PlantSpec = PlantSpec {
        factor: 1.0,
        turf: false,
    };

    /// Annual flower beds
    pub const ANNUAL_FLOWERS: PlantSpec = PlantSpec {
        factor: 0.80,
        turf: false,
    };

    /// Established shrub plantings
    pub const SHRUBS: PlantSpec = PlantSpec {
        factor: 0.50,
        turf: false,
    };

    /// Established landscape trees
    pub const TREES: PlantSpec = PlantSpec {
        factor: 0.60,
        turf: false,
    };

    /// Native and drought-adapted plantings
    pub const NATIVE_PLANTS: PlantSpec = PlantSpec {
        factor: 0.30,
        turf: false,
    };
}
