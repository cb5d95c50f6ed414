//! Promoter CLI
//!
//! Command-line interface that turns a deployment configuration file into a
//! GitLab CI promotion pipeline.

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::{Config, PolicyArg};

#[derive(Parser)]
#[command(name = "promoter")]
#[command(about = "Generate GitLab CI promotion pipelines from deployment descriptors", long_about = None)]
#[command(version)]
struct Cli {
    /// Log filter (e.g. info, debug, promoter_core=trace)
    #[arg(long, env = "PROMOTER_LOG", default_value = "info", global = true)]
    log_level: String,

    /// How to pick a predecessor when several jobs have pathToProd set
    #[arg(
        long,
        env = "PROMOTER_PREDECESSOR_POLICY",
        value_enum,
        default_value_t = PolicyArg::LowestJobId,
        global = true
    )]
    predecessor_policy: PolicyArg,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level);

    let config = Config {
        predecessor_policy: cli.predecessor_policy.into(),
    };

    handle_command(cli.command, &config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use promoter_core::PredecessorPolicy;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    fn declared_default(id: &str) -> Vec<String> {
        Cli::command()
            .get_arguments()
            .find(|arg| arg.get_id() == id)
            .map(|arg| {
                arg.get_default_values()
                    .iter()
                    .map(|value| value.to_string_lossy().into_owned())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[test]
    fn test_global_defaults() {
        assert_eq!(declared_default("log_level"), vec!["info"]);
        assert_eq!(declared_default("predecessor_policy"), vec!["lowest-job-id"]);
    }

    #[test]
    fn test_parse_generate_defaults() {
        let cli = Cli::try_parse_from([
            "promoter",
            "generate-app-pipeline",
            "--config-file",
            "deploy.yaml",
        ])
        .unwrap();

        match cli.command {
            Commands::GenerateAppPipeline(args) => {
                assert_eq!(args.config_file, PathBuf::from("deploy.yaml"));
                assert_eq!(args.output, PathBuf::from("deploy-pipeline.yaml"));
                assert!(!args.stdout);
            }
            _ => panic!("expected generate-app-pipeline"),
        }
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "promoter",
            "plan",
            "-c",
            "deploy.yaml",
            "--json",
            "--predecessor-policy",
            "strict",
        ])
        .unwrap();

        let config = Config {
            predecessor_policy: cli.predecessor_policy.into(),
        };
        assert_eq!(config.predecessor_policy, PredecessorPolicy::Strict);
        assert!(matches!(cli.command, Commands::Plan(ref args) if args.json));
    }

    #[test]
    fn test_config_file_is_required() {
        assert!(Cli::try_parse_from(["promoter", "generate-app-pipeline"]).is_err());
    }

    #[test]
    fn test_stdout_conflicts_with_output() {
        let result = Cli::try_parse_from([
            "promoter",
            "generate-app-pipeline",
            "-c",
            "deploy.yaml",
            "-o",
            "out.yaml",
            "--stdout",
        ]);
        assert!(result.is_err());
    }
}
