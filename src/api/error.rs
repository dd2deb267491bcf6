use thiserror::Error;

/// Why a remote load failed.
///
/// Transport-specific errors never cross this boundary: anything the
/// [`HttpClient`](super::HttpClient) reports as a failure becomes
/// [`Connectivity`](LoadError::Connectivity).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The HTTP exchange did not complete.
    #[error("could not reach the feed server")]
    Connectivity,

    /// The exchange completed but the status or payload was rejected.
    #[error("the feed server returned invalid data")]
    InvalidData,
}
