//! Transport layer: blocking HTTP client for the lookup service.

pub mod http_client;

pub use http_client::{LookupClient, LookupClientConfig};
