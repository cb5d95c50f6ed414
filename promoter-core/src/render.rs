//! Pipeline renderer
//!
//! Serializes resolved jobs into GitLab CI YAML. The text is assembled by hand
//! rather than through a YAML serializer so the layout is byte-for-byte stable
//! and values are emitted verbatim.

use crate::domain::job::Job;

/// Include block written before every job
pub const PIPELINE_HEADER: &str = "
include:
  - project: 'digital-factory/devops/continuous-integration-delivery'
    ref: 'master'
    file:
      - 'gitlab-ci/templates/cno-apps-multistage-pipeline.gitlab-ci.yaml'

";

/// Shared job template every push job extends
pub const JOB_TEMPLATE: &str = ".push-to-target-cluster-repo";

/// Render one job block
pub fn render_job(job: &Job) -> String {
    let descriptor = &job.descriptor;
    let mut block = format!(
        "\n{id}:\n  variables:\n    VALUE_FILE: {value_file}\n    TARGET_CLUSTER: {target_cluster}\n    INSTANCENAME: {instance_name}\n    ENV: {env}\n  stage: {stage}\n  extends: {template}\n  when: manual\n",
        id = job.id,
        value_file = descriptor.value_file,
        target_cluster = descriptor.target_cluster,
        instance_name = descriptor.instance_name,
        env = descriptor.env,
        stage = job.stage,
        template = JOB_TEMPLATE,
    );

    if let Some(needs) = &job.depends_on {
        block.push_str(&format!("  needs:\n    - {}\n", needs));
    }

    block
}

/// Render the whole pipeline: header, then one block per job in the given order
pub fn render_pipeline(jobs: &[Job]) -> String {
    jobs.iter().fold(PIPELINE_HEADER.to_string(), |mut out, job| {
        out.push_str(&render_job(job));
        out
    })
}
