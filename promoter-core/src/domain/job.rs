//! Job domain types

use serde::Serialize;

use super::descriptor::Descriptor;
use super::environment::Environment;

/// A push job derived from exactly one descriptor
///
/// Jobs only live for the duration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Job {
    pub id: String,
    pub descriptor: Descriptor,
    pub environment: Environment,
    pub stage: &'static str,
    #[serde(rename = "needs", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<String>,
}

impl Job {
    pub fn has_dependency(&self) -> bool {
        self.depends_on.is_some()
    }
}
