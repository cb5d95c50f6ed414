//! Plan command
//!
//! Prints the resolved job graph so a configuration can be reviewed before
//! the pipeline file is regenerated.

use anyhow::{Context, Result};
use clap::Args;
use colored::*;
use promoter_core::{Job, PipelinePlan, plan_pipeline};
use std::path::PathBuf;

use super::load_config_file;
use crate::config::Config;

/// Arguments of `plan`
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Deployment config file
    #[arg(short, long)]
    pub config_file: PathBuf,

    /// Print the plan as JSON
    #[arg(long)]
    pub json: bool,
}

/// Handle `plan`
///
/// # Arguments
/// * `args` - Config file and output format
/// * `config` - CLI configuration (predecessor policy)
///
/// # Returns
/// `Ok(())` once the plan has been printed as text or JSON.
pub fn handle_plan_command(args: PlanArgs, config: &Config) -> Result<()> {
    let deployments = load_config_file(&args.config_file)?;

    let plan = plan_pipeline(&deployments.deployments, &config.generate_options())
        .context("Failed to resolve deploy pipeline")?;

    if args.json {
        println!("{}", plan_to_json(&plan)?);
    } else {
        print_plan(&plan, config);
    }

    Ok(())
}

fn plan_to_json(plan: &PipelinePlan) -> Result<String> {
    serde_json::to_string_pretty(plan).context("Failed to serialize plan to JSON")
}

/// Print the plan as a readable list
fn print_plan(plan: &PipelinePlan, config: &Config) {
    if plan.jobs.is_empty() {
        println!("{}", "No deployments found.".yellow());
        return;
    }

    println!(
        "{}",
        format!(
            "{} job(s), {} dependency edge(s) (policy: {}):",
            plan.jobs.len(),
            plan.edge_count(),
            config.predecessor_policy
        )
        .bold()
    );
    println!();
    for job in &plan.jobs {
        print_job(job);
    }
}

fn print_job(job: &Job) {
    println!("  {} {}", "▸".cyan(), job.id.bold());
    println!("    Stage:   {}", job.stage);
    println!("    Cluster: {}", job.descriptor.target_cluster.dimmed());
    println!("    Values:  {}", job.descriptor.value_file.dimmed());
    match &job.depends_on {
        Some(needs) => println!("    Needs:   {}", needs.cyan()),
        None => println!("    Needs:   {}", "-".dimmed()),
    }
    println!();
}
