//! CLI command implementations.

use serde::Serialize;

use gravwell_solver::{Footprint, MassObject, SceneConfig, Simulation};
use gravwell_telemetry::TracingSink;

/// Loads `path`, or the defaults when no path is given.
fn load_config(path: Option<&str>) -> Result<SceneConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(SceneConfig::load(path)?),
        None => Ok(SceneConfig::default()),
    }
}

/// Open the Bevy viewer.
pub fn view(config_path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(config_path)?;
    println!("gravwell viewer");
    println!("  P  add planet");
    println!("  B  add collapsed body");
    println!("  drag a body with the left mouse button");
    gravwell_viewer::launch_viewer(config).map_err(|e| format!("Viewer error: {e}"))?;
    Ok(())
}

#[derive(Serialize)]
struct RunReport<'a> {
    steps: u64,
    samples: usize,
    min_height: f32,
    footprint: Footprint,
    bodies: &'a [MassObject],
}

/// Add bodies headlessly and report where everything settled.
pub fn run(
    config_path: Option<&str>,
    planets: usize,
    collapsed: usize,
    seed: Option<u64>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config(config_path)?;
    if seed.is_some() {
        config.seed = seed;
    }
    config.validate()?;

    let mut sim = Simulation::from_config(config)?;
    sim.bus_mut().add_sink(Box::new(TracingSink::default()));

    for _ in 0..planets {
        sim.add_planet()?;
    }
    for _ in 0..collapsed {
        sim.add_collapsed()?;
    }
    let last = sim.step();
    sim.bus_mut().finish();

    let report = RunReport {
        steps: sim.step_count(),
        samples: last.samples,
        min_height: last.min_height,
        footprint: sim.footprint_mode(),
        bodies: sim.registry().all(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("gravwell run");
    println!("────────────");
    println!("Samples:     {}", report.samples);
    println!("Steps:       {}", report.steps);
    println!("Footprint:   {:?}", report.footprint);
    println!("Min height:  {:.4}", report.min_height);
    println!();
    println!(
        "{:<6} {:<26} {:>6} {:>6} {:>9} {:>9} {:>9}",
        "id", "name", "radius", "mass", "x", "y", "z"
    );
    for body in report.bodies {
        let p = body.world_position();
        println!(
            "{:<6} {:<26} {:>6.2} {:>6.1} {:>9.3} {:>9.3} {:>9.3}",
            body.id().raw(),
            body.name(),
            body.radius(),
            body.mass(),
            p.x,
            p.y,
            p.z
        );
    }

    Ok(())
}

/// Validate a scene config.
pub fn validate(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    println!("gravwell validator");
    println!("──────────────────");
    println!();

    if !path.ends_with(".toml") {
        return Err(format!("Unsupported file format: {path} (expected .toml)").into());
    }

    println!("Validating config: {path}");
    let config = SceneConfig::load(path)?;
    println!(
        "✅ Config is valid ({} samples, footprint {:?}).",
        (config.fabric.divisions as usize + 1).pow(2),
        config.field.footprint
    );
    Ok(())
}

/// Print the defaults as a starting point for a config file.
pub fn print_default_config() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", SceneConfig::default().to_toml_string()?);
    Ok(())
}
