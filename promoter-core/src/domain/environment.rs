//! Promotion environments

use serde::Serialize;
use std::str::FromStr;

use crate::error::PipelineError;

/// Promotion stage of a deployment
///
/// The chain is fixed: development, then pre-production, then production.
/// Serialized and displayed as the short tag (`dev`, `preprod`, `prod`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Environment {
    #[serde(rename = "dev")]
    Development,
    #[serde(rename = "preprod")]
    PreProduction,
    #[serde(rename = "prod")]
    Production,
}

impl Environment {
    /// Stage that must be promoted from before this one, if any
    pub fn predecessor(self) -> Option<Environment> {
        match self {
            Environment::Development => None,
            Environment::PreProduction => Some(Environment::Development),
            Environment::Production => Some(Environment::PreProduction),
        }
    }

    /// Canonical short tag, as written in configuration files
    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Development => "dev",
            Environment::PreProduction => "preprod",
            Environment::Production => "prod",
        }
    }

    /// Parse a raw tag, returning `None` when it is not recognised
    pub fn from_tag(tag: &str) -> Option<Environment> {
        match tag {
            "dev" | "development" => Some(Environment::Development),
            "preprod" | "pre-production" => Some(Environment::PreProduction),
            "prod" | "production" => Some(Environment::Production),
            _ => None,
        }
    }
}

impl FromStr for Environment {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Environment::from_tag(s).ok_or_else(|| PipelineError::UnknownEnvironment {
            env: s.to_string(),
            job_id: None,
        })
    }
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
