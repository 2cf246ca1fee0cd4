//! # smartbuildingd — smartbuilding daemon
//!
//! Composition root that wires the collaborators together and runs the
//! building controller.
//!
//! ## Responsibilities
//! - Parse configuration (config file, env vars)
//! - Initialise structured logging
//! - Construct the virtual building (doors, lights, detectors, transports)
//! - Construct the controller, injecting the collaborators via port traits
//! - Feed stdin commands to the controller until `quit` or end of input
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod commands;
mod config;

use std::io::{self, BufRead, Write};

use smartbuilding_adapter_virtual::VirtualBuilding;
use smartbuilding_app::services::building_controller::BuildingController;
use tracing_subscriber::EnvFilter;

use crate::commands::Command;
use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(io::stderr)
        .init();

    let building = VirtualBuilding::from_config(&config.devices);
    let mut controller = building
        .attach(
            BuildingController::builder()
                .id(config.building.id.as_str())
                .start_state(config.start_state()?),
        )
        .build()?;

    tracing::info!(
        building = %controller.identity(),
        state = %controller.current_state(),
        "controller ready"
    );

    let mut stdout = io::stdout().lock();
    for line in io::stdin().lock().lines() {
        let line = line?;
        let command = Command::parse(&line);
        if command == Command::Quit {
            break;
        }
        if let Some(reply) = commands::execute(&mut controller, &command)? {
            writeln!(stdout, "{reply}")?;
        }
    }

    tracing::info!(state = %controller.current_state(), "shutting down");
    Ok(())
}
