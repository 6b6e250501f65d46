//! NsrlPlugin: one lookup and one reduction per job.

use nsrl_core::constants::{LOOKUP_ERROR_LABEL, NSRL_TAG, PLUGIN_EXCEPTION_LABEL};
use nsrl_core::errors::{NsrlErrorCode, PluginError};
use nsrl_core::models::{FeatureName, FeatureSet, Job, JobResult};
use nsrl_core::NsrlConfig;
use nsrl_lookup::{LookupClient, LookupClientConfig, LookupOutcome};
use nsrl_reduce::{reduce_details, ReducerLimits};

use crate::descriptor::PluginDescriptor;

/// Known-file lookup plugin.
///
/// Holds no per-job state, so one instance can serve jobs from several
/// threads.
#[derive(Debug, Clone)]
pub struct NsrlPlugin {
    config: NsrlConfig,
    limits: ReducerLimits,
    client: LookupClient,
}

impl NsrlPlugin {
    /// Validate the configuration and build the lookup client.
    pub fn new(config: NsrlConfig) -> Result<Self, PluginError> {
        config.validate()?;
        let limits = ReducerLimits::from_config(&config)?;
        let client = LookupClient::new(LookupClientConfig::from(&config))?;
        Ok(Self {
            config,
            limits,
            client,
        })
    }

    pub fn config(&self) -> &NsrlConfig {
        &self.config
    }

    pub fn descriptor(&self) -> PluginDescriptor {
        PluginDescriptor::nsrl()
    }

    /// Run one job. Transport failures and malformed catalog data are
    /// errors; a non-200/404 response is an `Error` job state.
    pub fn execute(&self, job: &Job) -> Result<JobResult, PluginError> {
        if !self.config.allows(job.action) {
            tracing::debug!(digest = %job.digest, action = %job.action, "event type not processed");
            return Ok(JobResult::skipped(format!(
                "event type '{}' is not processed",
                job.action
            )));
        }

        let outcome = self.client.lookup(&job.digest, self.config.details)?;

        let mut features = FeatureSet::new();
        match outcome {
            LookupOutcome::NotFound => return Ok(JobResult::completed_empty()),
            LookupOutcome::ServiceError { status, body } => {
                return Ok(JobResult::error(
                    LOOKUP_ERROR_LABEL,
                    format!("Error looking up digest: {status}: {body}"),
                ));
            }
            LookupOutcome::FoundMinimal => {
                features.add_string(FeatureName::Tag, NSRL_TAG);
            }
            LookupOutcome::FoundDetailed(details) => {
                features.add_string(FeatureName::Tag, NSRL_TAG);
                features.extend(reduce_details(&details, self.limits));
            }
        }

        tracing::info!(digest = %job.digest, features = features.len(), "digest found in NSRL");
        Ok(JobResult::completed(features))
    }

    /// Run one job, turning any error into an `Error` job state.
    pub fn run(&self, job: &Job) -> JobResult {
        match self.execute(job) {
            Ok(result) => result,
            Err(e) => {
                tracing::error!(
                    digest = %job.digest,
                    code = e.error_code(),
                    error = %e,
                    "job failed"
                );
                JobResult::error(PLUGIN_EXCEPTION_LABEL, e.coded_string())
            }
        }
    }
}
