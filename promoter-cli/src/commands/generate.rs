//! Pipeline generation command
//!
//! Reads the deployment config, generates the pipeline and writes it to
//! `deploy-pipeline.yaml` (or another path / stdout).

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use promoter_core::plan_pipeline;
use std::path::{Path, PathBuf};

use super::load_config_file;
use crate::config::Config;

/// File the pipeline is written to unless `--output` is given
pub const DEFAULT_OUTPUT: &str = "deploy-pipeline.yaml";

/// Arguments of `generate-app-pipeline`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Deployment config file
    #[arg(short, long)]
    pub config_file: PathBuf,

    /// Where to write the generated pipeline
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Print the pipeline to stdout instead of writing a file
    #[arg(long, conflicts_with = "output")]
    pub stdout: bool,
}

/// Handle `generate-app-pipeline`
///
/// # Arguments
/// * `args` - Config file and output destination
/// * `config` - CLI configuration (predecessor policy)
///
/// # Returns
/// `Ok(())` once the pipeline has been written or printed. On any error the
/// output file is left untouched.
pub fn handle_generate_command(args: GenerateArgs, config: &Config) -> Result<()> {
    let deployments = load_config_file(&args.config_file)?;

    let plan = plan_pipeline(&deployments.deployments, &config.generate_options())
        .context("Failed to generate deploy pipeline")?;
    let pipeline = plan.render();

    if args.stdout {
        print!("{}", pipeline);
        return Ok(());
    }

    write_pipeline(&args.output, &pipeline)?;

    println!("{}", "✓ Pipeline generated successfully!".green().bold());
    println!("  Jobs:   {}", plan.jobs.len().to_string().cyan());
    println!("  Needs:  {}", plan.edge_count().to_string().dimmed());
    println!("  Output: {}", args.output.display().to_string().bold());

    Ok(())
}

/// Write the rendered pipeline, replacing any previous file
fn write_pipeline(path: &Path, pipeline: &str) -> Result<()> {
    std::fs::write(path, pipeline)
        .with_context(|| format!("Error when writing {}", path.display()))?;
    tracing::info!("Wrote pipeline to {}", path.display());
    Ok(())
}
