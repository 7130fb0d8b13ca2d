use thiserror::Error;

/// Failures of a Raider.IO API call.
///
/// Each failure class is kept distinct so callers can tell a transport problem from
/// an upstream rejection or an unexpected payload shape. None of them are retried.
#[derive(Error, Debug)]
pub enum RaiderIoError {
    /// The caller passed an empty region code.
    #[error("Region code must not be empty")]
    InvalidRegion,

    /// Transport failure reaching Raider.IO, including timeouts.
    ///
    /// The request URL is stripped before the error is stored since it carries the
    /// access key.
    #[error("Failed to reach Raider.IO: {0}")]
    Network(#[source] reqwest::Error),

    /// Raider.IO answered with a status other than 200 OK.
    #[error("Raider.IO responded with status {status}")]
    UpstreamStatus {
        /// HTTP status code returned by the API
        status: u16,
    },

    /// The response body did not match the expected JSON shape.
    #[error("Failed to decode Raider.IO response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for RaiderIoError {
    fn from(err: reqwest::Error) -> Self {
        RaiderIoError::Network(err.without_url())
    }
}
