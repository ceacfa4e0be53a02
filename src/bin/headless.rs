use bevy::{log::LogPlugin, prelude::*};
use clap::Parser;
use std::path::PathBuf;

use flyer_uav::{
    plugins::add_simulation_plugins,
    resources::{
        ControllerCommands, FlightSnapshot, SimulationConfig, SimulationToggle, TickInput,
        TickSource,
    },
    utils::SimError,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Fly a scripted UAV session without a display.")]
struct Args {
    /// Session config (YAML). Defaults are used when omitted.
    config: Option<PathBuf>,
    /// Number of ticks to run.
    #[arg(long, default_value_t = 600)]
    ticks: usize,
    /// Milliseconds credited per tick.
    #[arg(long, default_value_t = 50.0)]
    tick_ms: f64,
}

/// Roll right, hold, then ease the nose down.
fn scripted_commands(tick: usize, total: usize) -> ControllerCommands {
    let phase = total / 3;
    if tick < phase {
        ControllerCommands {
            roll_right: true,
            ..Default::default()
        }
    } else if tick < 2 * phase {
        ControllerCommands::none()
    } else {
        ControllerCommands {
            pitch_down: true,
            ..Default::default()
        }
    }
}

fn main() -> Result<(), SimError> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()));
    add_simulation_plugins(&mut app, &config, TickSource::Manual)?;

    // Startup: spawn and take the first performance pass.
    app.update();
    app.world_mut().send_event(SimulationToggle::now());

    info!("Running {} ticks of {} ms", args.ticks, args.tick_ms);
    for tick in 0..args.ticks {
        app.insert_resource(scripted_commands(tick, args.ticks))
            .insert_resource(TickInput::new(args.tick_ms));
        app.update();
    }

    let snapshot = app
        .world()
        .get_resource::<FlightSnapshot>()
        .cloned()
        .unwrap_or_default();
    println!("{}", serde_json::to_string_pretty(&snapshot)?);

    Ok(())
}
