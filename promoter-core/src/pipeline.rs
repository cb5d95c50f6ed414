//! Pipeline generation
//!
//! Chains the identity builder, stage mapper, dependency resolver and
//! renderer. Every call starts from an empty job set.

use serde::Serialize;

use crate::domain::descriptor::Descriptor;
use crate::domain::job::Job;
use crate::error::Result;
use crate::identity::build_job_identities;
use crate::render::render_pipeline;
use crate::resolver::{PredecessorPolicy, resolve_predecessor};
use crate::stage::stage_for_job;

/// Generation options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    pub predecessor_policy: PredecessorPolicy,
}

/// Resolved job graph, in declaration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct PipelinePlan {
    pub jobs: Vec<Job>,
}

impl PipelinePlan {
    pub fn job(&self, id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == id)
    }

    /// Number of jobs gated by another job
    pub fn edge_count(&self) -> usize {
        self.jobs.iter().filter(|job| job.has_dependency()).count()
    }

    /// Render the pipeline text and log a summary of the graph
    pub fn render(&self) -> String {
        let pipeline = render_pipeline(&self.jobs);

        tracing::info!(
            "Generated pipeline with {} job(s) and {} dependency edge(s)",
            self.jobs.len(),
            self.edge_count()
        );
        tracing::debug!("Generated pipeline {}", pipeline);

        pipeline
    }
}

/// Build the job graph for a descriptor list
///
/// # Arguments
/// * `descriptors` - Deployment descriptors in declaration order
/// * `options` - Generation options (predecessor tie-break policy)
///
/// # Returns
/// One job per descriptor, in declaration order, each with its stage and
/// optional predecessor.
///
/// # Errors
/// Fails on duplicate job ids, unknown env tags, and (under the strict
/// policy) ambiguous predecessors. Nothing is returned on failure.
pub fn plan_pipeline(descriptors: &[Descriptor], options: &GenerateOptions) -> Result<PipelinePlan> {
    let identities = build_job_identities(descriptors)?;
    let mut jobs = Vec::with_capacity(identities.len());

    for (id, descriptor) in identities.iter() {
        let (environment, stage) = stage_for_job(id, &descriptor.env)?;
        let depends_on = resolve_predecessor(&identities, environment, options.predecessor_policy)?;

        jobs.push(Job {
            id: id.to_string(),
            descriptor: descriptor.clone(),
            environment,
            stage,
            depends_on,
        });
    }

    Ok(PipelinePlan { jobs })
}

/// Generate the pipeline text for a descriptor list
pub fn generate_pipeline(descriptors: &[Descriptor], options: &GenerateOptions) -> Result<String> {
    Ok(plan_pipeline(descriptors, options)?.render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::environment::Environment;
    use crate::error::PipelineError;

    fn options() -> GenerateOptions {
        GenerateOptions::default()
    }

    #[test]
    fn test_plan_assigns_stage_and_needs() {
        let descriptors = vec![
            Descriptor::new("app1-dev.yaml", "dev", "app1", "dev", true),
            Descriptor::new("app1-preprod.yaml", "preprod", "app1", "preprod", true),
            Descriptor::new("app1-prod.yaml", "prod", "app1", "prod", false),
        ];

        let plan = plan_pipeline(&descriptors, &options()).unwrap();
        assert_eq!(plan.jobs.len(), 3);
        assert_eq!(plan.edge_count(), 2);

        let dev = plan.job("push-app1-to-dev").unwrap();
        assert_eq!(dev.environment, Environment::Development);
        assert_eq!(dev.stage, "Push Manifests Dev");
        assert_eq!(dev.depends_on, None);

        let preprod = plan.job("push-app1-to-preprod").unwrap();
        assert_eq!(preprod.stage, "Push Manifests Preprod");
        assert_eq!(preprod.depends_on.as_deref(), Some("push-app1-to-dev"));

        let prod = plan.job("push-app1-to-prod").unwrap();
        assert_eq!(prod.stage, "Push Manifests Prod");
        assert_eq!(prod.depends_on.as_deref(), Some("push-app1-to-preprod"));
    }

    #[test]
    fn test_unknown_env_aborts_plan() {
        let descriptors = vec![
            Descriptor::new("a.yaml", "dev-01", "app", "dev", true),
            Descriptor::new("b.yaml", "qa-01", "app", "qa", false),
        ];

        let err = plan_pipeline(&descriptors, &options()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownEnvironment {
                env: "qa".to_string(),
                job_id: Some("push-app-to-qa-01".to_string()),
            }
        );
    }

    #[test]
    fn test_missing_env_is_an_unknown_environment() {
        let mut descriptor = Descriptor::new("a.yaml", "dev-01", "app", "dev", true);
        descriptor.env = String::new();

        let err = plan_pipeline(&[descriptor], &options()).unwrap_err();
        assert_eq!(
            err,
            PipelineError::UnknownEnvironment {
                env: String::new(),
                job_id: Some("push-app-to-dev-01".to_string()),
            }
        );
    }

    #[test]
    fn test_duplicate_aborts_generation() {
        let descriptors = vec![
            Descriptor::new("a.yaml", "shared", "app", "dev", true),
            Descriptor::new("b.yaml", "shared", "app", "preprod", false),
        ];

        let result = generate_pipeline(&descriptors, &options());
        assert!(matches!(
            result,
            Err(PipelineError::DuplicateJobIdentity { .. })
        ));
    }

    #[test]
    fn test_plan_serializes_needs_only_when_set() {
        let descriptors = vec![
            Descriptor::new("a.yaml", "dev-01", "app", "dev", true),
            Descriptor::new("b.yaml", "preprod-01", "app", "preprod", false),
        ];

        let plan = plan_pipeline(&descriptors, &options()).unwrap();
        let json = serde_json::to_value(&plan).unwrap();
        let jobs = json["jobs"].as_array().unwrap();

        assert!(jobs[0].get("needs").is_none());
        assert_eq!(jobs[1]["needs"], "push-app-to-dev-01");
        assert_eq!(jobs[1]["environment"], "preprod");
        assert_eq!(jobs[1]["descriptor"]["pathToProd"], false);
    }

    #[test]
    fn test_rendered_plan_matches_generate() {
        let descriptors = vec![
            Descriptor::new("a.yaml", "dev-01", "app", "dev", true),
            Descriptor::new("b.yaml", "preprod-01", "app", "preprod", false),
        ];

        let plan = plan_pipeline(&descriptors, &options()).unwrap();
        let text = generate_pipeline(&descriptors, &options()).unwrap();
        assert_eq!(plan.render(), text);
    }
}
