//! Deployment configuration parser
//!
//! The configuration is a YAML document with a single `deployments` list:
//!
//! ```yaml
//! deployments:
//!   - valueFile: values-dev.yaml
//!     targetCluster: dev-01
//!     instanceName: my-app
//!     env: dev
//!     pathToProd: true
//! ```

use promoter_core::Descriptor;
use serde::Deserialize;
use std::path::Path;

use crate::error::{ConfigError, Result};

/// Parsed deployment configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct DeploymentConfig {
    #[serde(default, alias = "Deployments")]
    pub deployments: Vec<Descriptor>,
}

impl DeploymentConfig {
    pub fn len(&self) -> usize {
        self.deployments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deployments.is_empty()
    }
}

/// Parse a deployment configuration from YAML source
///
/// An empty document is an empty configuration.
///
/// # Errors
/// Returns [`ConfigError::Parse`] if the YAML is malformed or a field has the
/// wrong type. Missing descriptor fields load as empty strings.
///
/// # Example
/// ```
/// use promoter_config::parse_deployment_config;
///
/// let source = r#"
/// deployments:
///   - valueFile: values.yaml
///     targetCluster: dev-01
///     instanceName: my-app
///     env: dev
///     pathToProd: true
/// "#;
///
/// let config = parse_deployment_config(source)?;
/// assert_eq!(config.deployments.len(), 1);
/// assert_eq!(config.deployments[0].job_id(), "push-my-app-to-dev-01");
/// # Ok::<(), promoter_config::ConfigError>(())
/// ```
pub fn parse_deployment_config(source: &str) -> Result<DeploymentConfig> {
    if source.trim().is_empty() {
        return Ok(DeploymentConfig::default());
    }

    let config: Option<DeploymentConfig> = serde_yaml::from_str(source)
        .map_err(|source| ConfigError::Parse { path: None, source })?;

    Ok(config.unwrap_or_default())
}

/// Read and parse a deployment configuration file
///
/// # Arguments
/// * `path` - Path to the YAML configuration file
///
/// # Returns
/// The descriptors declared in the file, in declaration order.
///
/// # Errors
/// Returns [`ConfigError::Read`] if the file cannot be read and
/// [`ConfigError::Parse`], carrying `path`, if its content is invalid.
pub fn load_deployment_config(path: &Path) -> Result<DeploymentConfig> {
    let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let config = parse_deployment_config(&source).map_err(|e| e.with_path(path))?;

    tracing::info!("Loaded configuration with {} deployments", config.len());
    Ok(config)
}
