//! Cycle override lifecycle: stepping, clamping, and invalidation
//!
//! The override is tuned against one nozzle/soil/slope runoff relationship.
//! These tests pin down exactly which edits keep it and which take it away,
//! plus range invariants under randomized input.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use hydrozone_core::{
    recalculate, CycleCount, ReferenceTables, ZoneForm, ZoneInput, ZonePlanner,
};

fn base_form() -> ZoneForm {
    ZoneForm {
        input: ZoneInput {
            nozzle_type: Some("Fixed Spray Head".to_string()),
            soil_type: Some("Loam".to_string()),
            slope: Some("0-15%".to_string()),
            zone_type: Some("Cool Season Turf Grass".to_string()),
            sunlight: Some("Direct Sun".to_string()),
            ..ZoneInput::default()
        },
        ..ZoneForm::default()
    }
}

fn session_with_override() -> ZonePlanner {
    let mut planner = ZonePlanner::new(ReferenceTables::builtin());
    planner.set_form(base_form());
    planner.adjust_cycles(1);
    assert!(planner.cycles().is_override());
    planner
}

#[test]
fn test_stepping_walks_both_directions() {
    let mut planner = ZonePlanner::new(ReferenceTables::builtin());
    planner.set_form(base_form());
    let automatic = planner.calculation().unwrap().cycles_per_day;

    planner.adjust_cycles(1);
    assert_eq!(planner.cycles(), CycleCount::Override(automatic + 1));

    planner.adjust_cycles(-1);
    assert_eq!(planner.cycles(), CycleCount::Override(automatic));

    planner.adjust_cycles(-1);
    assert_eq!(planner.cycles(), CycleCount::Override(automatic - 1));
}

#[test]
fn test_stepping_saturates_at_the_bounds() {
    let mut planner = session_with_override();

    for _ in 0..20 {
        planner.adjust_cycles(1);
    }
    assert_eq!(planner.cycles(), CycleCount::Override(10));
    assert_eq!(planner.calculation().unwrap().cycles_per_day, 10);

    for _ in 0..20 {
        planner.adjust_cycles(-1);
    }
    assert_eq!(planner.cycles(), CycleCount::Override(1));
    assert_eq!(planner.calculation().unwrap().cycles_per_day, 1);
}

/// Runtime-magnitude edits keep the override: they change how much water
/// moves, not the soil/nozzle relationship the split was tuned against.
#[test]
fn test_magnitude_edits_keep_the_override() {
    let edits: Vec<Box<dyn Fn(&mut ZoneInput)>> = vec![
        Box::new(|input| input.pressure = Some(55.0)),
        Box::new(|input| input.efficiency = Some(60.0)),
        Box::new(|input| input.sunlight = Some("Full Shade".to_string())),
        Box::new(|input| input.est_weekly_et = Some(2.2)),
        Box::new(|input| input.est_weekly_rain = Some(0.6)),
        Box::new(|input| input.mowing_height = Some(2.0)),
        Box::new(|input| input.zone_type = Some("Warm Season Turf Grass".to_string())),
    ];

    for edit in edits {
        let mut planner = session_with_override();
        let pinned = planner.cycles();

        let mut form = planner.form().clone();
        edit(&mut form.input);
        planner.set_form(form);

        assert_eq!(planner.cycles(), pinned);
        assert_eq!(
            planner.calculation().unwrap().cycles_per_day,
            pinned.resolve(0)
        );
    }
}

/// Basis edits clear the override: a different nozzle, soil, or slope
/// invalidates the runoff assumptions behind it.
#[test]
fn test_basis_edits_clear_the_override() {
    let edits: Vec<Box<dyn Fn(&mut ZoneInput)>> = vec![
        Box::new(|input| input.nozzle_type = Some("Rotor Head".to_string())),
        Box::new(|input| input.soil_type = Some("Sand".to_string())),
        Box::new(|input| input.slope = Some("30%+".to_string())),
    ];

    for edit in edits {
        let mut planner = session_with_override();

        let mut form = planner.form().clone();
        edit(&mut form.input);
        planner.set_form(form);

        assert_eq!(planner.cycles(), CycleCount::Automatic);
    }
}

#[test]
fn test_rewriting_the_same_basis_keeps_the_override() {
    let mut planner = session_with_override();
    let pinned = planner.cycles();

    // A wholesale form replacement with identical keys is not a basis change
    planner.set_form(base_form());

    assert_eq!(planner.cycles(), pinned);
}

#[test]
fn test_clear_then_adjust_rebases_on_automatic() {
    let mut planner = session_with_override();
    planner.clear_cycle_override();
    let automatic = planner.calculation().unwrap().cycles_per_day;

    planner.adjust_cycles(-1);

    assert_eq!(
        planner.cycles(),
        CycleCount::Override(automatic.saturating_sub(1).max(1))
    );
}

#[test]
fn test_recalculation_is_idempotent() {
    let tables = ReferenceTables::builtin();
    let form = base_form();

    let first = recalculate(&tables, &form.input, CycleCount::Override(3)).unwrap();
    let second = recalculate(&tables, &form.input, CycleCount::Override(3)).unwrap();

    assert_eq!(first, second);
}

/// Randomized sweep: whatever the form says, frequency stays within 1..=7,
/// the cycle count within 1..=10, and the split covers the daily runtime.
#[test]
fn test_plan_invariants_under_random_input() {
    let tables = ReferenceTables::builtin();
    let mut rng = StdRng::seed_from_u64(0x5eed);

    let nozzles = tables.nozzle_keys();
    let soils = tables.soil_keys();
    let slopes = tables.slope_keys();
    let plants = tables.plant_keys();
    let suns = tables.sunlight_keys();

    for _ in 0..500 {
        let input = ZoneInput {
            nozzle_type: Some(nozzles[rng.random_range(0..nozzles.len())].to_string()),
            soil_type: Some(soils[rng.random_range(0..soils.len())].to_string()),
            slope: Some(slopes[rng.random_range(0..slopes.len())].to_string()),
            zone_type: Some(plants[rng.random_range(0..plants.len())].to_string()),
            sunlight: rng
                .random_bool(0.7)
                .then(|| suns[rng.random_range(0..suns.len())].to_string()),
            pressure: rng.random_bool(0.5).then(|| rng.random_range(5.0..90.0)),
            efficiency: rng.random_bool(0.3).then(|| rng.random_range(30.0..100.0)),
            est_weekly_et: rng.random_bool(0.5).then(|| rng.random_range(0.0..3.5)),
            est_weekly_rain: rng.random_bool(0.5).then(|| rng.random_range(0.0..2.0)),
            mowing_height: rng.random_bool(0.4).then(|| rng.random_range(0.25..4.0)),
        };
        let cycles = if rng.random_bool(0.3) {
            CycleCount::Override(rng.random_range(1..=10))
        } else {
            CycleCount::Automatic
        };

        let plan = recalculate(&tables, &input, cycles).unwrap();

        assert!((1..=7).contains(&plan.suggested_frequency));
        assert!((1..=10).contains(&plan.cycles_per_day));
        assert!(plan.daily_run_time * plan.suggested_frequency >= plan.weekly_total_minutes);
        assert!(plan.minutes_per_cycle * plan.cycles_per_day >= plan.daily_run_time);
        assert!(plan.max_run_time >= 3 && plan.max_run_time <= 60);
        assert!(plan.precip_rate >= 0.0);
    }
}

/// Randomized walk over a session: deltas and edits in any order never
/// push the active cycle count out of range.
#[test]
fn test_session_override_walk_stays_in_range() {
    let mut planner = ZonePlanner::new(ReferenceTables::builtin());
    planner.set_form(base_form());
    let mut rng = StdRng::seed_from_u64(42);

    let soils = ["Loam", "Sand", "Clay", "Sandy Loam"];
    for _ in 0..200 {
        match rng.random_range(0..4) {
            0 => planner.adjust_cycles(if rng.random_bool(0.5) { 1 } else { -1 }),
            1 => planner.clear_cycle_override(),
            2 => {
                let mut form = planner.form().clone();
                form.input.soil_type = Some(soils[rng.random_range(0..soils.len())].to_string());
                planner.set_form(form);
            }
            _ => {
                let mut form = planner.form().clone();
                form.input.pressure = Some(rng.random_range(10.0..80.0));
                planner.set_form(form);
            }
        }

        let plan = planner.calculation().unwrap();
        assert!((1..=10).contains(&plan.cycles_per_day));
        if let CycleCount::Override(n) = planner.cycles() {
            assert!((1..=10).contains(&n));
        }
    }
}
