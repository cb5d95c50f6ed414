//! Deployment descriptor domain type

use serde::{Deserialize, Serialize};

/// One deployment target, as declared in the configuration file
///
/// Descriptors are immutable once loaded. `env` is kept as the raw tag so the
/// rendered pipeline reproduces it verbatim; it is interpreted by
/// [`crate::stage::stage_for_job`] and [`crate::Environment`].
///
/// Absent string fields load as empty strings. An empty `env` is then
/// rejected as an unknown environment when the job is planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Descriptor {
    /// Path to the values file, never interpreted
    #[serde(default)]
    pub value_file: String,

    /// Cluster the manifests are pushed to
    #[serde(default)]
    pub target_cluster: String,

    /// Logical application/instance name
    #[serde(default)]
    pub instance_name: String,

    /// Environment tag (`dev`, `preprod`, `prod` or their long forms)
    #[serde(default)]
    pub env: String,

    /// Marks this descriptor as the gate for the next promotion stage
    #[serde(default)]
    pub path_to_prod: bool,
}

impl Descriptor {
    pub fn new(
        value_file: impl Into<String>,
        target_cluster: impl Into<String>,
        instance_name: impl Into<String>,
        env: impl Into<String>,
        path_to_prod: bool,
    ) -> Self {
        Self {
            value_file: value_file.into(),
            target_cluster: target_cluster.into(),
            instance_name: instance_name.into(),
            env: env.into(),
            path_to_prod,
        }
    }

    /// Job identifier derived from instance name and target cluster
    pub fn job_id(&self) -> String {
        format!("push-{}-to-{}", self.instance_name, self.target_cluster)
    }
}
