//! Soil texture characteristics
//!
//! Basic intake rates follow the standard agronomic ranges for each texture
//! class. The sandy flag drives the frequency policy: low water-holding
//! capacity wants frequent light applications, heavy textures want deeper,
//! less frequent soaks. Soak minutes are the pause between split cycles,
//! long enough for ponded surface water to move below grade before the
//! next application starts.

use crate::core_types::units::InchesPerHour;
use serde::{Deserialize, Serialize};

/// Hydraulic characteristics of one soil texture class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SoilSpec {
    /// Steady-state intake rate without runoff
    pub infiltration: InchesPerHour,
    /// Recommended pause between split cycles, minutes
    pub soak_minutes: u32,
    /// Low water-holding capacity (drives the frequency policy)
    pub sandy: bool,
}

impl SoilSpec {
    /// Coarse sand - drinks fast, holds almost nothing
    pub const SAND: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(2.0),
        soak_minutes: 10,
        sandy: true,
    };

    /// Loamy sand
    pub const LOAMY_SAND: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(1.25),
        soak_minutes: 15,
        sandy: true,
    };

    /// Sandy loam
    pub const SANDY_LOAM: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(0.8),
        soak_minutes: 20,
        sandy: true,
    };

    /// Loam - the balanced reference texture
    pub const LOAM: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(0.5),
        soak_minutes: 30,
        sandy: false,
    };

    /// Clay loam
    pub const CLAY_LOAM: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(0.3),
        soak_minutes: 45,
        sandy: false,
    };

    /// Silty clay
    pub const SILTY_CLAY: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(0.2),
        soak_minutes: 50,
        sandy: false,
    };

    /// Heavy clay - slowest intake, longest soak
    pub const CLAY: SoilSpec = SoilSpec {
        infiltration: InchesPerHour::new(0.15),
        soak_minutes: 60,
        sandy: false,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loam_reference_values() {
        assert_eq!(*SoilSpec::LOAM.infiltration, 0.5);
        assert_eq!(SoilSpec::LOAM.soak_minutes, 30);
        assert!(!SoilSpec::LOAM.sandy);
    }

    #[test]
    fn test_intake_ordering_by_texture() {
        // Coarser textures take water faster
        assert!(SoilSpec::SAND.infiltration > SoilSpec::LOAM.infiltration);
        assert!(SoilSpec::LOAM.infiltration > SoilSpec::CLAY.infiltration);
    }

    #[test]
    fn test_soak_lengthens_as_intake_slows() {
        assert!(SoilSpec::SAND.soak_minutes < SoilSpec::LOAM.soak_minutes);
        assert!(SoilSpec::LOAM.soak_minutes < SoilSpec::CLAY.soak_minutes);
    }

    #[test]
    fn test_sandy_flags() {
        assert!(SoilSpec::SAND.sandy);
        assert!(SoilSpec::LOAMY_SAND.sandy);
        assert!(SoilSpec::SANDY_LOAM.sandy);
        assert!(!SoilSpec::CLAY_LOAM.sandy);
        assert!(!SoilSpec::CLAY.sandy);
    }
}
