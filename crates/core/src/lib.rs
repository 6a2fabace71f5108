//! Irrigation Zone Planning Core Library
//!
//! The deterministic hydraulic engine behind an irrigation-zone planner:
//! turns what a user knows about a zone (nozzle hardware, soil texture,
//! slope, plants, sun, local weather) into a watering plan with runoff-safe
//! cycle/soak splitting, and rolls committed zones up into usage totals.
//!
//! ## Design
//!
//! - The calculation is a pure function: same input, same tables, same plan
//! - Bad input degrades to defined fallbacks; only remote collaborators fail
//! - Reference data is injected, so tests can plan against alternate tables
//! - Sessions are independent; the tables are the only shared state

// Core types and utilities
pub mod core_types;

// Reference lookup data
pub mod catalog;

// Schedule computation
pub mod schedule;

// Session state and committed zones
pub mod session;

// Usage and cost aggregation
pub mod usage;

// Remote collaborator contracts
pub mod contracts;

// Re-export core types
pub use core_types::{Inches, InchesPerHour, Psi};
pub use core_types::{RequiredKeys, WaterSource, ZoneForm, ZoneInput};

// Re-export catalog types
pub use catalog::{NozzleSpec, PlantSpec, ReferenceTables, SoilSpec};

// Re-export schedule types
pub use schedule::{recalculate, CycleCount, LiveCalculation};

// Re-export session types
pub use session::{SavedZone, SnapshotError, ZoneBook, ZoneBookSnapshot, ZonePlanner};

// Re-export aggregation and contract types
pub use contracts::{ContractError, ReportContext, WeatherEstimate, WeatherQuery, ZoneReport};
pub use usage::{fleet_usage, zone_usage, FleetTotals, WaterUsage};
