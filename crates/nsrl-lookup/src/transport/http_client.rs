//! Blocking HTTP client with a fixed timeout and redirect following.

use std::time::Duration;

use nsrl_core::constants::{DEFAULT_URI, LOOKUP_TIMEOUT_SECS};
use nsrl_core::errors::{LookupError, TransportKind};
use nsrl_core::NsrlConfig;

use crate::action::LookupAction;
use crate::outcome::{classify, needs_body, LookupOutcome};

/// Maximum redirects followed before the request fails.
const MAX_REDIRECTS: usize = 10;

/// Configuration for the lookup transport.
#[derive(Debug, Clone)]
pub struct LookupClientConfig {
    /// Base URI of the lookup service.
    pub base_uri: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for LookupClientConfig {
    fn default() -> Self {
        Self {
            base_uri: DEFAULT_URI.to_string(),
            timeout: Duration::from_secs(LOOKUP_TIMEOUT_SECS),
        }
    }
}

impl From<&NsrlConfig> for LookupClientConfig {
    fn from(config: &NsrlConfig) -> Self {
        Self {
            base_uri: config.uri.clone(),
            ..Self::default()
        }
    }
}

/// Lookup client. One GET per call, no retries.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::blocking::Client,
    config: LookupClientConfig,
}

impl LookupClient {
    pub fn new(config: LookupClientConfig) -> Result<Self, LookupError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .gzip(true)
            .build()
            .map_err(|e| LookupError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &LookupClientConfig {
        &self.config
    }

    /// Request URL: `{base_uri}/{action}/{digest}`.
    pub fn url_for(&self, action: LookupAction, digest: &str) -> String {
        format!(
            "{}/{}/{}",
            self.config.base_uri.trim_end_matches('/'),
            action.segment(),
            digest
        )
    }

    /// Look up a digest, choosing the endpoint from `wants_details`.
    pub fn lookup(&self, digest: &str, wants_details: bool) -> Result<LookupOutcome, LookupError> {
        let action = LookupAction::from_details(wants_details);
        let url = self.url_for(action, digest);
        tracing::debug!(url = %url, %action, "issuing lookup");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| transport_failure(&url, e))?;

        let status = response.status().as_u16();
        let body = if needs_body(action, status) {
            response.text().map_err(|e| transport_failure(&url, e))?
        } else {
            String::new()
        };

        let outcome = classify(action, status, &body)?;
        match &outcome {
            LookupOutcome::FoundDetailed(records) => {
                tracing::debug!(status, records = records.len(), "lookup hit with details");
            }
            LookupOutcome::ServiceError { status, .. } => {
                tracing::warn!(url = %url, status, "lookup service returned an error status");
            }
            other => tracing::debug!(status, outcome = other.kind(), "lookup classified"),
        }
        Ok(outcome)
    }
}

/// Log and wrap a reqwest failure.
fn transport_failure(url: &str, e: reqwest::Error) -> LookupError {
    let kind = if e.is_timeout() {
        TransportKind::Timeout
    } else if e.is_connect() {
        TransportKind::Connect
    } else if e.is_redirect() {
        TransportKind::Redirect
    } else if e.is_body() || e.is_decode() {
        TransportKind::Body
    } else {
        TransportKind::Request
    };
    tracing::error!(
        url = %url,
        %kind,
        status = ?e.status().map(|s| s.as_u16()),
        error = %e,
        "error looking up digest"
    );
    LookupError::Transport {
        url: url.to_string(),
        kind,
        reason: e.to_string(),
    }
}
