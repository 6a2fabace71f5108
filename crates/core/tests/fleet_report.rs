//! Committed fleet flows: usage totals, snapshots, and collaborator wiring

use approx::assert_relative_eq;

use hydrozone_core::{
    fleet_usage, zone_usage, ContractError, ReferenceTables, ReportContext, WaterSource,
    ZoneBookSnapshot, ZoneForm, ZoneInput, ZonePlanner, ZoneReport,
};

fn form(nozzle: &str, soil: &str, area: Option<f64>, source: WaterSource) -> ZoneForm {
    ZoneForm {
        input: ZoneInput {
            nozzle_type: Some(nozzle.to_string()),
            soil_type: Some(soil.to_string()),
            slope: Some("0-15%".to_string()),
            zone_type: Some("Cool Season Turf Grass".to_string()),
            sunlight: Some("Direct Sun".to_string()),
            ..ZoneInput::default()
        },
        area_sq_ft: area,
        price_per_1000_gal: Some(2.5),
        water_source: source,
        postal_code: Some("84041".to_string()),
        month: Some(7),
        ..ZoneForm::default()
    }
}

fn committed_fleet() -> ZonePlanner {
    let mut planner = ZonePlanner::new(ReferenceTables::builtin());

    planner.set_form(form(
        "Fixed Spray Head",
        "Loam",
        Some(1200.0),
        WaterSource::Primary,
    ));
    planner.commit_zone("Front lawn");

    planner.set_form(form(
        "Fixed Spray Head",
        "Loam",
        Some(600.0),
        WaterSource::Secondary,
    ));
    planner.commit_zone("Garden");

    planner.set_form(form("Rotor Head", "Clay Loam", None, WaterSource::Primary));
    planner.commit_zone("Side strip");

    planner
}

#[test]
fn test_fleet_totals_across_committed_zones() {
    let planner = committed_fleet();
    let snapshot = planner.snapshot();
    let totals = fleet_usage(&snapshot.zones);

    // The side strip has no area, so only two zones can be estimated
    assert_eq!(totals.zones, 2);
    assert_eq!(totals.exempt_zones, 1);

    // 68 min/week at 1.5 in/hr is 1.7 inches: 1271 gal over 1200 sq ft,
    // 635 over 600. The secondary garden adds gallons but no cost.
    assert_eq!(totals.weekly_gallons, 1271.0 + 635.0);
    assert_relative_eq!(totals.monthly_cost, 1271.0 * 4.3 / 1000.0 * 2.5);
}

#[test]
fn test_secondary_zone_costs_nothing_at_any_price() {
    let mut expensive = form(
        "Fixed Spray Head",
        "Loam",
        Some(5000.0),
        WaterSource::Secondary,
    );
    expensive.price_per_1000_gal = Some(99.0);

    let mut planner = ZonePlanner::new(ReferenceTables::builtin());
    planner.set_form(expensive);
    let id = planner.commit_zone("Pasture").unwrap();

    let zone = planner.book().get(id).unwrap();
    let usage = zone_usage(&zone.calculation, &zone.form).unwrap();

    assert!(usage.weekly_gallons > 0.0);
    assert_eq!(usage.monthly_cost, 0.0);
    assert!(usage.cost_exempt);
}

#[test]
fn test_snapshot_roundtrip_preserves_the_fleet() {
    let planner = committed_fleet();
    let json = planner.snapshot().to_json().unwrap();

    let snapshot = ZoneBookSnapshot::from_json(&json).unwrap();
    let mut restored = ZonePlanner::new(ReferenceTables::builtin());
    restored.restore_snapshot(&snapshot);

    assert_eq!(restored.zones().len(), 3);
    let names: Vec<&str> = restored.zones().iter().map(|z| z.name.as_str()).collect();
    assert_eq!(names, vec!["Front lawn", "Garden", "Side strip"]);

    // Totals survive the round trip bit for bit
    let original = fleet_usage(&planner.snapshot().zones);
    let reloaded = fleet_usage(&restored.snapshot().zones);
    assert_eq!(original, reloaded);
}

#[test]
fn test_report_context_for_each_committed_zone() {
    let planner = committed_fleet();

    for zone in planner.zones() {
        let context = ReportContext::from_saved(zone);
        let json = serde_json::to_value(&context).unwrap();

        assert_eq!(json["zoneName"], zone.name.as_str());
        assert_eq!(
            json["weeklyTotalMinutes"],
            zone.calculation.weekly_total_minutes
        );
        assert_eq!(json["suggestedFrequency"], zone.calculation.suggested_frequency);
    }
}

#[test]
fn test_narrative_response_with_authoritative_usage() {
    let planner = committed_fleet();
    let zone = planner.book().get(1).unwrap();

    let raw = r#"{
        "tips": ["Aerate in fall"],
        "advice": "Loam is forgiving; water deeply and let it rest.",
        "difficulty": "Easy",
        "moistureSeries": [60, 52, 68, 61, 55],
        "estimatedGallons": "9000",
        "estimatedMonthlyCost": "45"
    }"#;
    let mut report = ZoneReport::from_json(raw).unwrap();

    // The service's numbers are placeholders until ours replace them
    assert_eq!(report.estimated_gallons, Some(9000.0));

    let usage = zone_usage(&zone.calculation, &zone.form).unwrap();
    report.apply_authoritative_usage(&usage);

    assert_eq!(report.estimated_gallons, Some(1271.0));
    assert_relative_eq!(report.estimated_monthly_cost.unwrap(), usage.monthly_cost);
    // Narrative content is untouched
    assert_eq!(report.tips, vec!["Aerate in fall".to_string()]);
    assert_eq!(report.moisture_series.len(), 5);
}

#[test]
fn test_collaborator_failures_leave_the_session_usable() {
    let mut planner = committed_fleet();

    let failure = ZoneReport::from_json("");
    assert!(matches!(failure, Err(ContractError::EmptyResponse)));

    let failure = ZoneReport::from_json("I could not generate a report.");
    assert!(matches!(failure, Err(ContractError::MalformedResponse(_))));

    // The session is untouched: zones still there, plan still live
    assert_eq!(planner.zones().len(), 3);
    planner.set_form(form(
        "Fixed Spray Head",
        "Loam",
        Some(1200.0),
        WaterSource::Primary,
    ));
    assert!(planner.calculation().is_some());
}
