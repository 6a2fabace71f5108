//! Nozzle hardware characteristics
//!
//! Application rates are catalog values at the manufacturer's optimal
//! operating pressure; the calculator adjusts them for the measured static
//! pressure. Default efficiencies are typical distribution-uniformity
//! figures for each head family, used when the form does not override them.

use crate::core_types::units::{InchesPerHour, Psi};
use serde::{Deserialize, Serialize};

/// Hydraulic characteristics of one nozzle family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NozzleSpec {
    /// Base application rate at optimal pressure
    pub rate: InchesPerHour,
    /// Pressure the catalog rate was measured at
    pub optimal_psi: Psi,
    /// Default distribution efficiency, fraction 0-1
    pub efficiency: f64,
}

impl NozzleSpec {
    /// Fixed spray head - high application rate, modest uniformity
    pub const FIXED_SPRAY_HEAD: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(1.5),
        optimal_psi: Psi::new(30.0),
        efficiency: 0.70,
    };

    /// Gear-driven rotor - slower application over larger throw
    pub const ROTOR_HEAD: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(0.75),
        optimal_psi: Psi::new(45.0),
        efficiency: 0.75,
    };

    /// Multi-stream rotary nozzle - slowest rate, good wind resistance
    pub const ROTARY_NOZZLE: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(0.4),
        optimal_psi: Psi::new(40.0),
        efficiency: 0.80,
    };

    /// Impact sprinkler - legacy metal heads on high pressure
    pub const IMPACT_SPRINKLER: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(0.6),
        optimal_psi: Psi::new(50.0),
        efficiency: 0.70,
    };

    /// In-line drip tubing at 12" emitter spacing - near-zero overspray
    pub const DRIP_LINE: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(0.52),
        optimal_psi: Psi::new(25.0),
        efficiency: 0.90,
    };

    /// Flood bubbler for tree wells and basins - very high rate
    pub const BUBBLER: NozzleSpec = NozzleSpec {
        rate: InchesPerHour::new(2.25),
        optimal_psi: Psi::new(25.0),
        efficiency: 0.85,
    };
}
