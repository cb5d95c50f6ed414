//! Stage mapper
//!
//! Maps an environment to the GitLab stage its push job runs in.

use crate::domain::environment::Environment;
use crate::error::{PipelineError, Result};

/// Stage label for a parsed environment
pub fn stage_label(environment: Environment) -> &'static str {
    match environment {
        Environment::Development => "Push Manifests Dev",
        Environment::PreProduction => "Push Manifests Preprod",
        Environment::Production => "Push Manifests Prod",
    }
}

/// Environment and stage label for a job's raw env tag
///
/// # Errors
/// Returns [`PipelineError::UnknownEnvironment`] naming `job_id` for tags
/// outside the promotion chain, including the empty tag.
pub fn stage_for_job(job_id: &str, env: &str) -> Result<(Environment, &'static str)> {
    let environment =
        Environment::from_tag(env).ok_or_else(|| PipelineError::UnknownEnvironment {
            env: env.to_string(),
            job_id: Some(job_id.to_string()),
        })?;
    Ok((environment, stage_label(environment)))
}
