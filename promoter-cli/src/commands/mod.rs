//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod generate;
mod plan;

pub use generate::GenerateArgs;
pub use plan::PlanArgs;

use anyhow::{Context, Result};
use clap::Subcommand;
use promoter_config::{DeploymentConfig, load_deployment_config};
use std::path::Path;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Generate the deploy pipeline from a deployment config file
    #[command(name = "generate-app-pipeline")]
    GenerateAppPipeline(GenerateArgs),
    /// Show the resolved jobs and their dependencies without writing anything
    Plan(PlanArgs),
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
///
/// # Arguments
/// * `command` - The parsed subcommand
/// * `config` - CLI configuration built from the global flags
///
/// # Returns
/// Result indicating success or failure
pub fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::GenerateAppPipeline(args) => generate::handle_generate_command(args, config),
        Commands::Plan(args) => plan::handle_plan_command(args, config),
    }
}

/// Load the deployment config named on the command line
fn load_config_file(path: &Path) -> Result<DeploymentConfig> {
    load_deployment_config(path)
        .with_context(|| format!("Failed to load deployment config {}", path.display()))
}
