//! Configuration module
//!
//! Handles CLI configuration shared by every command.

use clap::ValueEnum;
use promoter_core::{GenerateOptions, PredecessorPolicy};

/// CLI configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Tie-break rule among several eligible predecessors
    pub predecessor_policy: PredecessorPolicy,
}

impl Config {
    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            predecessor_policy: self.predecessor_policy,
        }
    }
}

/// Command-line spelling of [`PredecessorPolicy`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PolicyArg {
    /// Lexicographically smallest job id wins
    LowestJobId,
    /// First job in the configuration file wins
    FirstDeclared,
    /// Fail when more than one job is eligible
    Strict,
}

impl From<PolicyArg> for PredecessorPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::LowestJobId => PredecessorPolicy::LowestJobId,
            PolicyArg::FirstDeclared => PredecessorPolicy::FirstDeclared,
            PolicyArg::Strict => PredecessorPolicy::Strict,
        }
    }
}
