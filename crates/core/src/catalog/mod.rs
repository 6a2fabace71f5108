//! Reference lookup data for the hydraulic calculator
//!
//! All static knowledge lives here: nozzle hardware characteristics, soil
//! intake behavior, slope runoff factors, plant water-use coefficients, and
//! sunlight exposure factors. The tables are immutable once built and are
//! passed into the calculator by reference, so tests can run against
//! alternate data and sessions can safely share one instance.

pub mod nozzles;
pub mod site;
pub mod soils;

pub use nozzles::NozzleSpec;
pub use site::{slope_factors, sunlight_factors, PlantSpec};
pub use soils::SoilSpec;

use rustc_hash::FxHashMap;

/// Immutable keyed lookup tables, built once and shared read-only
///
/// Keys are the display strings the planning form uses. Lookups return
/// `Option` - an unknown key is a defined fallback in the calculator, never
/// an error.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTables {
    nozzles: FxHashMap<String, NozzleSpec>,
    soils: FxHashMap<String, SoilSpec>,
    slopes: FxHashMap<String, f64>,
    plants: FxHashMap<String, PlantSpec>,
    sunlight: FxHashMap<String, f64>,
}

impl ReferenceTables {
    /// Empty tables; every lookup misses. Starting point for custom data.
    pub fn empty() -> Self {
        ReferenceTables::default()
    }

    /// The built-in catalog the planning tool ships with
    pub fn builtin() -> Self {
        ReferenceTables::empty()
            .with_nozzle("Fixed Spray Head", NozzleSpec::FIXED_SPRAY_HEAD)
            .with_nozzle("Rotor Head", NozzleSpec::ROTOR_HEAD)
            .with_nozzle("Rotary Nozzle", NozzleSpec::ROTARY_NOZZLE)
            .with_nozzle("Impact Sprinkler", NozzleSpec::IMPACT_SPRINKLER)
            .with_nozzle("Drip Line", NozzleSpec::DRIP_LINE)
            .with_nozzle("Bubbler", NozzleSpec::BUBBLER)
            .with_soil("Sand", SoilSpec::SAND)
            .with_soil("Loamy Sand", SoilSpec::LOAMY_SAND)
            .with_soil("Sandy Loam", SoilSpec::SANDY_LOAM)
            .with_soil("Loam", SoilSpec::LOAM)
            .with_soil("Clay Loam", SoilSpec::CLAY_LOAM)
            .with_soil("Silty Clay", SoilSpec::SILTY_CLAY)
            .with_soil("Clay", SoilSpec::CLAY)
            .with_slope("0-15%", slope_factors::GENTLE)
            .with_slope("15-30%", slope_factors::MODERATE)
            .with_slope("30%+", slope_factors::STEEP)
            .with_plant("Cool Season Turf Grass", PlantSpec::COOL_SEASON_TURF)
            .with_plant("Warm Season Turf Grass", PlantSpec::WARM_SEASON_TURF)
            .with_plant("Vegetable Garden", PlantSpec::VEGETABLE_GARDEN)
            .with_plant("Annual Flowers", PlantSpec::ANNUAL_FLOWERS)
            .with_plant("Shrubs", PlantSpec::SHRUBS)
            .with_plant("Trees", PlantSpec::TREES)
            .with_plant("Native Plants", PlantSpec::NATIVE_PLANTS)
            .with_sunlight("Direct Sun", sunlight_factors::DIRECT_SUN)
            .with_sunlight("Partial Sun", sunlight_factors::PARTIAL_SUN)
            .with_sunlight("Partial Shade", sunlight_factors::PARTIAL_SHADE)
            .with_sunlight("Full Shade", sunlight_factors::FULL_SHADE)
    }

    /// Add or replace a nozzle entry
    pub fn with_nozzle(mut self, key: impl Into<String>, spec: NozzleSpec) -> Self {
        self.nozzles.insert(key.into(), spec);
        self
    }

    /// Add or replace a soil entry
    pub fn with_soil(mut self, key: impl Into<String>, spec: SoilSpec) -> Self {
        self.soils.insert(key.into(), spec);
        self
    }

    /// Add or replace a slope bucket
    pub fn with_slope(mut self, key: impl Into<String>, factor: f64) -> Self {
        self.slopes.insert(key.into(), factor);
        self
    }

    /// Add or replace a plant category
    pub fn with_plant(mut self, key: impl Into<String>, spec: PlantSpec) -> Self {
        self.plants.insert(key.into(), spec);
        self
    }

    /// Add or replace a sunlight exposure entry
    pub fn with_sunlight(mut self, key: impl Into<String>, factor: f64) -> Self {
        self.sunlight.insert(key.into(), factor);
        self
    }

    /// Look up a nozzle by form key
    #[must_use]
    pub fn nozzle(&self, key: &str) -> Option<&NozzleSpec> {
        self.nozzles.get(key)
    }

    /// Look up a soil by form key
    #[must_use]
    pub fn soil(&self, key: &str) -> Option<&SoilSpec> {
        self.soils.get(key)
    }

    /// Look up a slope bucket's runoff factor
    #[must_use]
    pub fn slope_factor(&self, key: &str) -> Option<f64> {
        self.slopes.get(key).copied()
    }

    /// Look up a plant category
    #[must_use]
    pub fn plant(&self, key: &str) -> Option<&PlantSpec> {
        self.plants.get(key)
    }

    /// Look up a sunlight exposure factor
    #[must_use]
    pub fn sunlight_factor(&self, key: &str) -> Option<f64> {
        self.sunlight.get(key).copied()
    }

    /// Nozzle keys, sorted for stable display
    #[must_use]
    pub fn nozzle_keys(&self) -> Vec<&str> {
        sorted_keys(&self.nozzles)
    }

    /// Soil keys, sorted for stable display
    #[must_use]
    pub fn soil_keys(&self) -> Vec<&str> {
        sorted_keys(&self.soils)
    }

    /// Slope bucket keys, sorted for stable display
    #[must_use]
    pub fn slope_keys(&self) -> Vec<&str> {
        sorted_keys(&self.slopes)
    }

    /// Plant category keys, sorted for stable display
    #[must_use]
    pub fn plant_keys(&self) -> Vec<&str> {
        sorted_keys(&self.plants)
    }

    /// Sunlight exposure keys, sorted for stable display
    #[must_use]
    pub fn sunlight_keys(&self) -> Vec<&str> {
        sorted_keys(&self.sunlight)
    }
}

fn sorted_keys<V>(map: &FxHashMap<String, V>) -> Vec<&str> {
    let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
    keys.sort_unstable();
    keys
}
