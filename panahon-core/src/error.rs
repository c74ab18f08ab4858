use thiserror::Error;

/// Why a weather fetch failed.
///
/// The interactive surface collapses every variant into one fixed message
/// (see [`crate::view::FETCH_FAILED_MESSAGE`]); the distinction exists for
/// logging and for callers that want to react differently.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The provider does not recognize the requested location (HTTP 404).
    #[error("location not recognized by the weather service")]
    NotFound,

    /// Any other non-success status from the provider.
    #[error("weather service request failed with status {status}: {body}")]
    Api {
        status: reqwest::StatusCode,
        body: String,
    },

    /// The request never produced a usable response (DNS, TLS, timeout, ...).
    #[error("failed to reach the weather service: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response arrived but did not match the expected schema.
    #[error("could not interpret the weather service response: {0}")]
    Malformed(String),
}
