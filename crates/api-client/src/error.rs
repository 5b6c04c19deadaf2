use thiserror::Error;

/// The classified error produced by the transport layer.
///
/// Every failed backend call resolves to exactly one of these kinds; nothing
/// escapes the transport unclassified. The `Display` text is suitable for
/// showing next to the control that triggered the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The transport failed before a response arrived (DNS failure,
    /// connection refused, query encoding, broken transfer).
    #[error("Network error: {0}")]
    Network(String),

    /// The per-call budget elapsed without a response.
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },

    /// The response body was not valid JSON, or did not fit the expected
    /// shape. Carries at most the first 200 characters of the offender.
    #[error("Server returned non-JSON: {snippet}")]
    MalformedResponse { snippet: String },

    /// The server responded but signalled failure, either with a non-2xx
    /// status or an `error` field in the body (any status).
    #[error("{message}")]
    Application { message: String },
}

impl ApiError {
    /// True when the server itself signalled the failure.
    pub fn is_application(&self) -> bool {
        matches!(self, ApiError::Application { .. })
    }
}
