//! The transport seam.
//!
//! [`HttpClient`] is the only thing [`RemoteFeedLoader`](super::RemoteFeedLoader)
//! knows about the network.  Production code uses
//! [`ReqwestHttpClient`](super::ReqwestHttpClient); tests substitute a spy that
//! records requests and completes them on demand.

use url::Url;

use crate::feed::Completion;

/// A completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Empty when the server sent no body.
    pub body: Vec<u8>,
}

/// Outcome of one [`HttpClient::get`] call.
///
/// The error arm is deliberately opaque: callers only learn that the
/// exchange failed, never why.
pub type HttpClientResult = Result<HttpResponse, anyhow::Error>;

/// Performs GET requests.
///
/// Implementations must invoke `completion` exactly once per call.  It may
/// run on any thread, and concurrent calls may complete in any order.
pub trait HttpClient: Send + Sync {
    fn get(&self, url: &Url, completion: Completion<HttpClientResult>);
}
