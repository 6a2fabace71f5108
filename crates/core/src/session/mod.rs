//! Planning session: the live zone, its plan, and the committed zone list
//!
//! One `ZonePlanner` owns everything a single planning session mutates: the
//! form being edited, the cycle override pinned against it, the plan derived
//! from both, and the book of committed zones. Sessions are independent;
//! only the reference tables are shared, and those are immutable.

pub mod saved;

pub use saved::*;

use tracing::{debug, info};

use crate::catalog::ReferenceTables;
use crate::core_types::input::ZoneForm;
use crate::schedule::{recalculate, CycleCount, LiveCalculation};

/// One planning session's mutable state
///
/// Every mutation that touches a plan dependency funnels through a method
/// that ends in exactly one recomputation, so the plan can never be stale
/// or partially updated with respect to the form.
#[derive(Debug)]
pub struct ZonePlanner {
    tables: ReferenceTables,
    form: ZoneForm,
    cycles: CycleCount,
    result: Option<LiveCalculation>,
    book: ZoneBook,
    next_zone_id: u64,
}

impl ZonePlanner {
    /// Start an empty session against the given tables
    #[must_use]
    pub fn new(tables: ReferenceTables) -> Self {
        ZonePlanner {
            tables,
            form: ZoneForm::default(),
            cycles: CycleCount::Automatic,
            result: None,
            book: ZoneBook::new(),
            next_zone_id: 1,
        }
    }

    /// The reference tables this session plans against
    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// The live form being edited
    pub fn form(&self) -> &ZoneForm {
        &self.form
    }

    /// The current plan, absent while required fields are missing
    pub fn calculation(&self) -> Option<&LiveCalculation> {
        self.result.as_ref()
    }

    /// The active cycle selection
    pub fn cycles(&self) -> CycleCount {
        self.cycles
    }

    /// Committed zones in commit order
    pub fn zones(&self) -> Vec<&SavedZone> {
        self.book.zones()
    }

    /// The committed zone book, for aggregation and snapshots
    pub fn book(&self) -> &ZoneBook {
        &self.book
    }

    /// Replace the live form and recompute the plan
    ///
    /// Any number of fields may change at once; the plan is recomputed
    /// exactly once. A pinned cycle override is cleared when the nozzle,
    /// soil, or slope changes, since those invalidate the runoff
    /// relationship the override was tuned against; every other field keeps
    /// it.
    pub fn set_form(&mut self, form: ZoneForm) {
        if self.cycles.is_override() && !self.form.input.same_hydraulic_basis(&form.input) {
            debug!("Hydraulic basis changed, clearing cycle override");
            self.cycles = CycleCount::Automatic;
        }
        self.form = form;
        self.recompute();
    }

    /// Step the cycle count by `delta`, pinning it as an override
    ///
    /// Relative to the current override if one is pinned, else to the
    /// plan's automatic split. Without a plan there is no baseline and the
    /// call does nothing.
    pub fn adjust_cycles(&mut self, delta: i32) {
        let automatic = self.result.map(|plan| plan.cycles_per_day);
        self.cycles = self.cycles.adjusted(automatic, delta);
        self.recompute();
    }

    /// Drop any cycle override and return to the automatic split
    pub fn clear_cycle_override(&mut self) {
        self.cycles = CycleCount::Automatic;
        self.recompute();
    }

    /// Commit the live zone under a display name
    ///
    /// Captures the form and the current plan into the book and returns the
    /// assigned identity. Refused (returns `None`) while the session has no
    /// plan to capture.
    pub fn commit_zone(&mut self, name: &str) -> Option<u64> {
        let calculation = self.result?;
        let id = self.next_zone_id;
        self.next_zone_id += 1;

        self.book.insert(SavedZone {
            id,
            name: name.to_string(),
            form: self.form_for_commit(),
            calculation,
            saved_at: chrono::Utc::now(),
        });

        info!("Committed zone '{}' as id {}", name, id);
        Some(id)
    }

    /// Replace a committed zone with the live form and plan
    ///
    /// Returns false when the identity is unknown or the session has no
    /// plan; the book is untouched in either case.
    pub fn update_zone(&mut self, id: u64, name: &str) -> bool {
        let Some(calculation) = self.result else {
            return false;
        };
        if self.book.get(id).is_none() {
            return false;
        }

        self.book.insert(SavedZone {
            id,
            name: name.to_string(),
            form: self.form_for_commit(),
            calculation,
            saved_at: chrono::Utc::now(),
        });

        info!("Updated zone {}", id);
        true
    }

    /// Remove a committed zone
    pub fn delete_zone(&mut self, id: u64) -> bool {
        let removed = self.book.remove(id).is_some();
        if removed {
            info!("Deleted zone {}", id);
        }
        removed
    }

    /// Load a committed zone back into the live form for editing
    ///
    /// Restores the form and any cycle override saved with it, then
    /// recomputes. Returns false for an unknown identity.
    pub fn load_zone(&mut self, id: u64) -> bool {
        let Some(saved) = self.book.get(id) else {
            return false;
        };

        self.form = saved.form.clone();
        self.cycles = saved
            .form
            .manual_cycles
            .map_or(CycleCount::Automatic, CycleCount::Override);
        self.recompute();
        true
    }

    /// Capture the committed zones and identity counter
    #[must_use]
    pub fn snapshot(&self) -> ZoneBookSnapshot {
        ZoneBookSnapshot::capture(&self.book, self.next_zone_id)
    }

    /// Replace the committed zones from a snapshot
    ///
    /// The identity counter is bumped past every restored zone so a
    /// tampered or stale counter can never hand out a duplicate identity.
    pub fn restore_snapshot(&mut self, snapshot: &ZoneBookSnapshot) {
        self.book = snapshot.restore();
        let highest = self.book.zones().last().map_or(0, |zone| zone.id);
        self.next_zone_id = snapshot.next_id.max(highest + 1);
        info!("Restored {} committed zones", self.book.len());
    }

    /// The live form with the active override written into it, so a saved
    /// zone round-trips its cycle selection
    fn form_for_commit(&self) -> ZoneForm {
        let mut form = self.form.clone();
        form.manual_cycles = match self.cycles {
            CycleCount::Override(n) => Some(n),
            CycleCount::Automatic => None,
        };
        form
    }

    fn recompute(&mut self) {
        self.result = recalculate(&self.tables, &self.form.input, self.cycles);
        if let Some(plan) = &self.result {
            debug!(
                "Recomputed plan: {} min/week over {} days, {} cycles",
                plan.weekly_total_minutes, plan.suggested_frequency, plan.cycles_per_day
            );
        } else {
            debug!("No plan: required fields missing");
        }
    }
}
