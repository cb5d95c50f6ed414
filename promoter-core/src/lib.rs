//! Promoter Core
//!
//! Turns a list of deployment descriptors into promotion jobs and renders them
//! as a GitLab CI pipeline definition.
//!
//! This crate contains:
//! - Domain types: descriptors, environments and derived jobs
//! - Job identity derivation and collision detection
//! - Stage mapping and predecessor resolution across promotion stages
//! - Deterministic rendering of the pipeline text
//!
//! Note: reading configuration files and writing output live in
//! `promoter-config` and `promoter-cli`.

pub mod domain;
pub mod error;
pub mod identity;
pub mod pipeline;
pub mod render;
pub mod resolver;
pub mod stage;

pub use domain::descriptor::Descriptor;
pub use domain::environment::Environment;
pub use domain::job::Job;
pub use error::{PipelineError, Result};
pub use identity::{JobIdentities, build_job_identities};
pub use pipeline::{GenerateOptions, PipelinePlan, generate_pipeline, plan_pipeline};
pub use render::{PIPELINE_HEADER, render_pipeline};
pub use resolver::{PredecessorPolicy, resolve_predecessor};
pub use stage::{stage_for_job, stage_label};
