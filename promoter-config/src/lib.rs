//! Promoter configuration loading
//!
//! Reads the deployment configuration file and turns it into the descriptor
//! list consumed by `promoter-core`. Only the file format is checked here;
//! what the values mean is decided by pipeline generation.

pub mod error;
pub mod parser;

pub use error::{ConfigError, Result};
pub use parser::{DeploymentConfig, load_deployment_config, parse_deployment_config};

pub use promoter_core::Descriptor;
