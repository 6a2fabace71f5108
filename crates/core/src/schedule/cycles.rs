//! Cycles-per-day selection: automatic split vs. user override

use serde::{Deserialize, Serialize};

/// How many irrigation cycles to split a day's run time across
///
/// `Automatic` follows the calculator's runoff-driven split. `Override`
/// pins a user-chosen count that survives recalculation until it is
/// cleared or the hydraulic basis of the zone changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CycleCount {
    /// Let the calculator pick from run time and the runoff ceiling
    #[default]
    Automatic,
    /// User-pinned count, kept within [`CycleCount::MIN`]..=[`CycleCount::MAX`]
    Override(u32),
}

impl CycleCount {
    /// Fewest cycles a day can be split into
    pub const MIN: u32 = 1;
    /// Most cycles a day can be split into
    pub const MAX: u32 = 10;

    /// True when a user override is pinned
    #[must_use]
    pub fn is_override(self) -> bool {
        matches!(self, CycleCount::Override(_))
    }

    /// The count to schedule with, given the automatic split
    ///
    /// Overrides are clamped on the way out so a count that arrived via
    /// deserialization can never leave the valid range.
    #[must_use]
    pub fn resolve(self, automatic: u32) -> u32 {
        match self {
            CycleCount::Automatic => automatic,
            CycleCount::Override(n) => n.clamp(Self::MIN, Self::MAX),
        }
    }

    /// Step the count by `delta`, pinning the result as an override
    ///
    /// The step is relative to the current override if one is pinned,
    /// otherwise to the automatic split. With no override and no automatic
    /// baseline there is nothing to step from and the selection is
    /// returned unchanged.
    #[must_use]
    pub fn adjusted(self, automatic: Option<u32>, delta: i32) -> CycleCount {
        let baseline = match self {
            CycleCount::Override(n) => Some(n),
            CycleCount::Automatic => automatic,
        };
        match baseline {
            Some(base) => {
                let stepped = base.saturating_add_signed(delta).clamp(Self::MIN, Self::MAX);
                CycleCount::Override(stepped)
            }
            None => self,
        }
    }
}
