//! Error types for pipeline generation

use thiserror::Error;

use crate::domain::environment::Environment;

/// Result type alias for pipeline generation
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that abort pipeline generation
///
/// Every variant is fatal for the run: no partial pipeline is produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Two descriptors map to the same job id
    #[error(
        "Job name {job_id} already exists. Please ensure unique instanceName/targetCluster ({instance_name}/{target_cluster})"
    )]
    DuplicateJobIdentity {
        job_id: String,
        instance_name: String,
        target_cluster: String,
    },

    /// A descriptor's env tag is not a known promotion stage
    #[error("Unknown environment '{env}'{}", job_suffix(.job_id))]
    UnknownEnvironment {
        env: String,
        /// Job carrying the tag, when known
        job_id: Option<String>,
    },

    /// More than one eligible predecessor under the strict policy
    #[error(
        "Ambiguous predecessor in {environment}: {} jobs have pathToProd set ({})",
        .candidates.len(),
        .candidates.join(", ")
    )]
    AmbiguousPredecessor {
        environment: Environment,
        candidates: Vec<String>,
    },
}

fn job_suffix(job_id: &Option<String>) -> String {
    job_id
        .as_ref()
        .map(|id| format!(" for job {}", id))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_message_names_everything() {
        let err = PipelineError::DuplicateJobIdentity {
            job_id: "push-app-to-c1".to_string(),
            instance_name: "app".to_string(),
            target_cluster: "c1".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("push-app-to-c1"));
        assert!(msg.contains("app/c1"));
    }

    #[test]
    fn test_unknown_environment_message() {
        let err = PipelineError::UnknownEnvironment {
            env: "qa".to_string(),
            job_id: Some("push-app-to-qa-01".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unknown environment 'qa' for job push-app-to-qa-01"
        );

        let err = PipelineError::UnknownEnvironment {
            env: "qa".to_string(),
            job_id: None,
        };
        assert_eq!(err.to_string(), "Unknown environment 'qa'");
    }

    #[test]
    fn test_ambiguous_message_lists_candidates() {
        let err = PipelineError::AmbiguousPredecessor {
            environment: Environment::Development,
            candidates: vec!["push-a-to-d1".to_string(), "push-b-to-d1".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.starts_with("Ambiguous predecessor in dev:"));
        assert!(msg.contains("2 jobs"));
        assert!(msg.contains("push-a-to-d1, push-b-to-d1"));
    }
}
