//! # nsrl-lookup
//!
//! Lookup client for the NSRL known-file service: builds the
//! `{uri}/{exists|details}/{digest}` request, issues a single blocking GET,
//! and classifies the response into a [`LookupOutcome`].
//!
//! Transport failures are returned as errors and never retried.

pub mod action;
pub mod decode;
pub mod outcome;
pub mod transport;

pub use action::LookupAction;
pub use decode::decode_details;
pub use outcome::{classify, LookupOutcome};
pub use transport::{LookupClient, LookupClientConfig};
