use clap::Parser;
use hydrozone_core::{
    zone_usage, ReferenceTables, ReportContext, WaterSource, ZoneForm, ZoneInput, ZonePlanner,
};

/// Irrigation zone planning demo with configurable zone parameters
#[derive(Parser, Debug)]
#[command(name = "zone-planner-demo")]
#[command(about = "Irrigation watering schedule demo", long_about = None)]
struct Args {
    /// Zone display name
    #[arg(long, default_value = "Demo zone")]
    name: String,

    /// Nozzle type (see --list-catalog)
    #[arg(short, long, default_value = "Fixed Spray Head")]
    nozzle: String,

    /// Soil type
    #[arg(short, long, default_value = "Loam")]
    soil: String,

    /// Slope bucket
    #[arg(long, default_value = "0-15%")]
    slope: String,

    /// Plant category
    #[arg(short, long, default_value = "Cool Season Turf Grass")]
    zone_type: String,

    /// Sunlight exposure
    #[arg(long)]
    sun: Option<String>,

    /// Static operating pressure in PSI
    #[arg(short, long)]
    psi: Option<f64>,

    /// Distribution efficiency override in percent
    #[arg(short, long)]
    efficiency: Option<f64>,

    /// Weekly evapotranspiration in inches
    #[arg(long)]
    et: Option<f64>,

    /// Weekly rainfall in inches
    #[arg(long)]
    rain: Option<f64>,

    /// Mowing height in inches (turf zones)
    #[arg(short, long)]
    mowing_height: Option<f64>,

    /// Irrigated area in square feet
    #[arg(short, long)]
    area: Option<f64>,

    /// Water price per 1000 gallons
    #[arg(long)]
    price: Option<f64>,

    /// Zone draws unmetered secondary water
    #[arg(long)]
    secondary: bool,

    /// Pin the cycles-per-day count (1-10) instead of the automatic split
    #[arg(short, long)]
    cycles: Option<u32>,

    /// List the built-in catalog keys and exit
    #[arg(long)]
    list_catalog: bool,

    /// Emit the narrative-service context as JSON
    #[arg(long)]
    context_json: bool,
}

fn main() {
    let args = Args::parse();

    println!("=== Irrigation Zone Planner ===\n");

    let tables = ReferenceTables::builtin();

    if args.list_catalog {
        println!("Nozzles:  {}", tables.nozzle_keys().join(", "));
        println!("Soils:    {}", tables.soil_keys().join(", "));
        println!("Slopes:   {}", tables.slope_keys().join(", "));
        println!("Plants:   {}", tables.plant_keys().join(", "));
        println!("Sunlight: {}", tables.sunlight_keys().join(", "));
        return;
    }

    if tables.nozzle(&args.nozzle).is_none() {
        println!("Unknown nozzle '{}', planning with a zero-rate head", args.nozzle);
    }
    if tables.soil(&args.soil).is_none() {
        println!("Unknown soil '{}', planning without a runoff ceiling", args.soil);
    }

    let form = ZoneForm {
        input: ZoneInput {
            nozzle_type: Some(args.nozzle.clone()),
            soil_type: Some(args.soil.clone()),
            slope: Some(args.slope.clone()),
            zone_type: Some(args.zone_type.clone()),
            sunlight: args.sun.clone(),
            pressure: args.psi,
            efficiency: args.efficiency,
            est_weekly_et: args.et,
            est_weekly_rain: args.rain,
            mowing_height: args.mowing_height,
        },
        area_sq_ft: args.area,
        price_per_1000_gal: args.price,
        water_source: if args.secondary {
            WaterSource::Secondary
        } else {
            WaterSource::Primary
        },
        ..ZoneForm::default()
    };

    let mut planner = ZonePlanner::new(tables);
    planner.set_form(form);

    if let Some(target) = args.cycles {
        let target = target.clamp(1, 10);
        if let Some(automatic) = planner.calculation().map(|plan| plan.cycles_per_day) {
            let delta = i64::from(target) - i64::from(automatic);
            planner.adjust_cycles(delta as i32);
        }
    }

    let Some(plan) = planner.calculation().copied() else {
        println!("Zone is incomplete: nozzle, soil, slope, and plant type are required");
        return;
    };

    println!("Zone: {} ({} on {}, {} slope)", args.name, args.nozzle, args.soil, args.slope);
    println!(
        "Precipitation: {:.2} in/hr at {:.0}% efficiency{}",
        plan.precip_rate,
        plan.efficiency * 100.0,
        if plan.is_est_data { " (estimated ET)" } else { "" }
    );
    println!(
        "Schedule: {} min/week over {} days ({} min/day)",
        plan.weekly_total_minutes, plan.suggested_frequency, plan.daily_run_time
    );
    println!(
        "Cycle/soak: {} x {} min cycles, {} min soak (max single run {} min)",
        plan.cycles_per_day, plan.minutes_per_cycle, plan.recommended_soak_time, plan.max_run_time
    );
    println!("Applied: {:.2} in per watering day", plan.inches_applied_per_day);

    match zone_usage(&plan, planner.form()) {
        Some(usage) if usage.cost_exempt => {
            println!(
                "Usage: {:.0} gal/week (secondary water, no metered cost)",
                usage.weekly_gallons
            );
        }
        Some(usage) => {
            println!(
                "Usage: {:.0} gal/week, about ${:.2}/month",
                usage.weekly_gallons, usage.monthly_cost
            );
        }
        None => println!("Usage: unknown (pass --area to estimate gallons)"),
    }

    if args.context_json {
        let context = ReportContext::new(&args.name, planner.form(), &plan);
        match serde_json::to_string_pretty(&context) {
            Ok(json) => println!("\n{json}"),
            Err(e) => println!("\nCould not serialize report context: {e}"),
        }
    }
}
