//! NsrlErrorCode trait for runner-facing error reporting.

/// Trait for mapping errors to stable error code strings.
/// Every error enum implements this so the runner can label failed jobs
/// without matching on display text.
pub trait NsrlErrorCode {
    /// Returns the error code string (e.g., "TRANSPORT_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CLIENT_ERROR: &str = "CLIENT_ERROR";
pub const TRANSPORT_ERROR: &str = "TRANSPORT_ERROR";
pub const TIMEOUT: &str = "TIMEOUT";
pub const DECODE_ERROR: &str = "DECODE_ERROR";
