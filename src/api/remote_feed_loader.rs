//! Loads the feed from a fixed URL through an injected [`HttpClient`].

use std::sync::{Arc, Weak};

use tracing::{debug, warn};
use url::Url;

use super::{feed_items_mapper, HttpClient, LoadError, LoadResult};
use crate::feed::{Completion, FeedLoader};

/// A [`FeedLoader`] backed by a remote HTTP endpoint.
///
/// Construction is free of side effects; each [`load`](FeedLoader::load)
/// issues exactly one GET to the configured URL.  Loads are independent of
/// each other: nothing is cached or de-duplicated.
///
/// ## Lifetime
///
/// The loader owns a liveness token.  Pending requests only hold a
/// [`Weak`] reference to it, so once the loader is dropped every pending
/// completion is discarded instead of delivered.  The request itself still
/// runs to completion inside the client.
pub struct RemoteFeedLoader {
    url: Url,
    client: Arc<dyn HttpClient>,
    alive: Arc<()>,
}

impl RemoteFeedLoader {
    pub fn new(url: Url, client: Arc<dyn HttpClient>) -> Self {
        Self {
            url,
            client,
            alive: Arc::new(()),
        }
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

impl FeedLoader for RemoteFeedLoader {
    type Error = LoadError;

    fn load(&self, completion: Completion<LoadResult>) {
        let alive: Weak<()> = Arc::downgrade(&self.alive);
        let url = self.url.clone();

        debug!(%url, "requesting feed");
        self.client.get(
            &self.url,
            Box::new(move |outcome| {
                let result = match outcome {
                    Ok(response) => {
                        let result = feed_items_mapper::map(&response.body, response.status);
                        match &result {
                            Ok(entries) => debug!(%url, count = entries.len(), "feed loaded"),
                            Err(_) => warn!(
                                %url,
                                status = response.status,
                                bytes = response.body.len(),
                                "feed response rejected"
                            ),
                        }
                        result
                    }
                    Err(err) => {
                        warn!(%url, error = %err, "feed request failed");
                        Err(LoadError::Connectivity)
                    }
                };

                deliver(&alive, &url, result, completion);
            }),
        );
    }
}

/// Hand `result` to `completion` only if the loader still exists.
///
/// The token stays upgraded for the whole call, so the loader cannot be
/// considered alive and dropped halfway through a delivery.
fn deliver(alive: &Weak<()>, url: &Url, result: LoadResult, completion: Completion<LoadResult>) {
    let Some(_alive) = alive.upgrade() else {
        debug!(%url, "loader dropped before response arrived, discarding result");
        return;
    };
    completion(result);
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
