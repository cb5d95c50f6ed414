//! Job identity builder
//!
//! Derives one job id per descriptor and rejects collisions. The result keeps
//! the order in which descriptors were declared, which is also the order the
//! rendered pipeline lists its jobs in.

use indexmap::IndexMap;
use indexmap::map::Entry;

use crate::domain::descriptor::Descriptor;
use crate::error::{PipelineError, Result};

/// Ordered association from job id to descriptor
///
/// Built fresh for every run; iteration follows insertion order.
#[derive(Debug, Clone, Default)]
pub struct JobIdentities {
    jobs: IndexMap<String, Descriptor>,
}

impl JobIdentities {
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Iterate `(job_id, descriptor)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Descriptor)> {
        self.jobs
            .iter()
            .map(|(id, descriptor)| (id.as_str(), descriptor))
    }

    /// Job ids in declaration order
    pub fn ids(&self) -> Vec<&str> {
        self.jobs.keys().map(String::as_str).collect()
    }

    fn insert(&mut self, job_id: String, descriptor: Descriptor) -> Result<()> {
        match self.jobs.entry(job_id) {
            Entry::Occupied(entry) => Err(PipelineError::DuplicateJobIdentity {
                job_id: entry.key().clone(),
                instance_name: descriptor.instance_name,
                target_cluster: descriptor.target_cluster,
            }),
            Entry::Vacant(entry) => {
                entry.insert(descriptor);
                Ok(())
            }
        }
    }
}

/// Build the job id association for a descriptor list
///
/// # Errors
/// Returns [`PipelineError::DuplicateJobIdentity`] on the first descriptor
/// whose `(instanceName, targetCluster)` pair was already seen.
pub fn build_job_identities(descriptors: &[Descriptor]) -> Result<JobIdentities> {
    let mut identities = JobIdentities::default();

    for descriptor in descriptors {
        identities.insert(descriptor.job_id(), descriptor.clone())?;
    }

    tracing::debug!(
        "Generated job names by deployment: {}",
        identities.ids().join(", ")
    );
    Ok(identities)
}
