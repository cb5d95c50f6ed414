//! Dependency resolver
//!
//! A pre-production job is gated by the development job marked `pathToProd`,
//! and a production job by the pre-production job marked `pathToProd`.
//! Development jobs are never gated. The search spans every instance in the
//! configuration, not only the job's own instance.
//!
//! When several jobs are eligible the winner is chosen by a
//! [`PredecessorPolicy`], so the output never depends on hash ordering.

use crate::domain::environment::Environment;
use crate::error::{PipelineError, Result};
use crate::identity::JobIdentities;

/// Tie-break rule among several eligible predecessors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PredecessorPolicy {
    /// Lexicographically smallest job id wins, independent of declaration order
    #[default]
    LowestJobId,
    /// First eligible job in declaration order wins
    FirstDeclared,
    /// More than one eligible job is an error
    Strict,
}

impl std::fmt::Display for PredecessorPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PredecessorPolicy::LowestJobId => write!(f, "lowest-job-id"),
            PredecessorPolicy::FirstDeclared => write!(f, "first-declared"),
            PredecessorPolicy::Strict => write!(f, "strict"),
        }
    }
}

/// Job ids eligible to gate a job in `environment`, in declaration order
///
/// Descriptors with an unrecognised env tag are never eligible.
pub fn eligible_predecessors(identities: &JobIdentities, environment: Environment) -> Vec<&str> {
    let Some(previous) = environment.predecessor() else {
        return Vec::new();
    };

    identities
        .iter()
        .filter(|(_, descriptor)| {
            descriptor.path_to_prod && Environment::from_tag(&descriptor.env) == Some(previous)
        })
        .map(|(id, _)| id)
        .collect()
}

/// Resolve the single job gating a job in `environment`
///
/// # Arguments
/// * `identities` - Every job of the run, in declaration order
/// * `environment` - Environment of the job being gated
/// * `policy` - Tie-break rule when several jobs are eligible
///
/// # Returns
/// The gating job id, or `None` for development jobs and when no job is
/// eligible.
///
/// # Errors
/// Returns [`PipelineError::AmbiguousPredecessor`] only under
/// [`PredecessorPolicy::Strict`] when more than one job is eligible.
pub fn resolve_predecessor(
    identities: &JobIdentities,
    environment: Environment,
    policy: PredecessorPolicy,
) -> Result<Option<String>> {
    let Some(previous) = environment.predecessor() else {
        return Ok(None);
    };
    let candidates = eligible_predecessors(identities, environment);

    let chosen = match policy {
        PredecessorPolicy::LowestJobId => candidates.iter().min().copied(),
        PredecessorPolicy::FirstDeclared => candidates.first().copied(),
        PredecessorPolicy::Strict => match candidates.as_slice() {
            [] => None,
            [only] => Some(*only),
            _ => {
                let mut sorted: Vec<String> = candidates.iter().map(|id| id.to_string()).collect();
                sorted.sort();
                return Err(PipelineError::AmbiguousPredecessor {
                    environment: previous,
                    candidates: sorted,
                });
            }
        },
    };

    if candidates.len() > 1 {
        tracing::warn!(
            "{} jobs are eligible predecessors for {} jobs, using {:?} ({})",
            candidates.len(),
            environment,
            chosen,
            policy
        );
    }

    Ok(chosen.map(str::to_string))
}
