//! Command-line interface over the simulator client.

use clap::{Parser, Subcommand};
use simulator_client::{Device, Interaction, Point, Screen, SimulatorClient, Transport, actions};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

/// Command-line client for the Craft mobile device simulator.
#[derive(Debug, Parser)]
#[command(name = "craft-simulator", version, about)]
pub struct Cli {
    /// Path to a TOML configuration file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Override the request timeout in milliseconds.
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Operation to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported operations.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// List all simulated devices.
    Devices,
    /// List the screens of a device.
    Screens {
        /// Device id.
        device_id: String,
    },
    /// Send an interaction to a screen.
    Interact {
        /// Device id.
        device_id: String,
        /// Screen id.
        screen_id: String,
        /// Action label, e.g. tap or swipe.
        #[arg(long, default_value = actions::TAP)]
        action: String,
        /// Horizontal coordinate.
        #[arg(long, default_value_t = 0.0)]
        x: f64,
        /// Vertical coordinate.
        #[arg(long, default_value_t = 0.0)]
        y: f64,
    },
}

/// One output line for a device.
#[must_use]
pub fn format_device(device: &Device) -> String {
    format!("{}\t{}\t{}", device.id(), device.name, device.screen_size)
}

/// One output line for a screen.
#[must_use]
pub fn format_screen(screen: &Screen) -> String {
    format!(
        "{}\t{}\t({} views)",
        screen.id(),
        screen.name,
        screen.layout.len()
    )
}

/// Runs a command and writes its output to `out`.
///
/// # Errors
/// Returns error if the API call fails or output cannot be written.
pub async fn run<T, W>(
    command: &Command,
    client: &SimulatorClient<T>,
    out: &mut W,
) -> anyhow::Result<()>
where
    T: Transport,
    W: Write,
{
    match command {
        Command::Devices => {
            let devices = client.list_devices().await?;
            for device in &devices {
                writeln!(out, "{}", format_device(device))?;
            }
        }
        Command::Screens { device_id } => {
            let screens = client.list_screens_for(device_id).await?;
            for screen in &screens {
                writeln!(out, "{}", format_screen(screen))?;
            }
        }
        Command::Interact {
            device_id,
            screen_id,
            action,
            x,
            y,
        } => {
            let interaction =
                Interaction::new(screen_id.as_str(), action.as_str(), Point::new(*x, *y));
            client
                .post_interaction(device_id, screen_id, &interaction)
                .await?;
            info!(%device_id, %screen_id, %action, "interaction sent");
            writeln!(out, "sent {} to {}/{}", action, device_id, screen_id)?;
        }
    }
    Ok(())
}
