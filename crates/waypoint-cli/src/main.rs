//! Waypoint CLI Application
//!
//! Command-line interface for the waypoint itinerary editor.

mod args;
mod cli;
mod mcp;
mod renderer;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, WaypointMcpServer};
use renderer::TerminalRenderer;
use waypoint_core::PlannerBuilder;
use Commands::*;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        database_file,
        no_color,
        command,
    } = Args::parse();

    let planner = PlannerBuilder::new()
        .with_optional_database_path(database_file)
        .build()
        .await
        .context("Failed to initialize planner")?;

    let renderer = TerminalRenderer::new(!no_color);

    info!("Waypoint started");

    match command {
        Some(Course { command }) => {
            Cli::new(planner, renderer)
                .handle_course_command(command)
                .await
        }
        Some(Spot { command }) => {
            Cli::new(planner, renderer)
                .handle_spot_command(command)
                .await
        }
        Some(Itinerary { command }) => {
            Cli::new(planner, renderer)
                .handle_itinerary_command(command)
                .await
        }
        Some(Serve) => {
            info!("Starting Waypoint MCP server");
            run_stdio_server(WaypointMcpServer::new(planner))
                .await
                .context("MCP server failed")
        }
        None => Cli::new(planner, renderer).list_courses().await,
    }
}
