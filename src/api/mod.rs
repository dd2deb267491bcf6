//! Remote loading pipeline.
//!
//! ```text
//! RemoteFeedLoader::load ──► HttpClient::get ──► (async) ──► feed_items_mapper::map ──► completion
//! ```
//!
//! * **`http_client`**: the [`HttpClient`] trait; the only transport
//!   dependency the loader has.
//! * **`reqwest_http_client`**: the production [`HttpClient`].
//! * **`feed_items_mapper`**: pure status/payload validation and decoding.
//! * **`remote_feed_loader`**: ties them together and guards delivery
//!   against a discarded loader.

mod error;
pub mod feed_items_mapper;
mod http_client;
mod remote_feed_loader;
mod reqwest_http_client;

pub use error::LoadError;
pub use http_client::{HttpClient, HttpClientResult, HttpResponse};
pub use remote_feed_loader::RemoteFeedLoader;
pub use reqwest_http_client::{ClientConfig, ReqwestHttpClient};

use crate::feed::LoadFeedResult;

/// What a [`RemoteFeedLoader`] delivers.
pub type LoadResult = LoadFeedResult<LoadError>;
