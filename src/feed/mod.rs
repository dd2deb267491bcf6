//! Feed feature: the domain type and the loader abstraction callers use.
//!
//! Nothing in here knows about HTTP.  The [`FeedLoader`] trait is the seam
//! between callers (the CLI, the watch loop, tests) and whatever actually
//! produces entries; the remote implementation lives in [`crate::api`].
//!
//! ## For contributors: adding a new loader
//!
//! 1. Pick an error type for your loader (it becomes [`FeedLoader::Error`]).
//! 2. Implement [`FeedLoader::load`], invoking the completion exactly once
//!    per call.  The `FnOnce` bound already rules out double delivery.
//! 3. Callers that want `async` can go through [`load_once`].

mod feed_entry;

pub use feed_entry::FeedEntry;

use tokio::sync::oneshot;

/// A one-shot callback, invoked at most once on an unspecified thread.
pub type Completion<T> = Box<dyn FnOnce(T) + Send + 'static>;

/// The outcome of one [`FeedLoader::load`] call.
pub type LoadFeedResult<E> = Result<Vec<FeedEntry>, E>;

/// Anything that can asynchronously produce a batch of feed entries.
pub trait FeedLoader: Send + Sync {
    type Error: Send + 'static;

    /// Start a load and report its outcome through `completion`.
    ///
    /// `load` itself never fails: every failure is delivered as the `Err`
    /// arm of the result.
    fn load(&self, completion: Completion<LoadFeedResult<Self::Error>>);
}

/// Issue a single load and await its outcome.
///
/// Returns `None` when the completion was dropped without being invoked,
/// which is what happens when a loader is discarded while its request is
/// still in flight.
pub async fn load_once<L>(loader: &L) -> Option<LoadFeedResult<L::Error>>
where
    L: FeedLoader + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    loader.load(Box::new(move |result| {
        // The receiver may already be gone if the caller stopped waiting.
        let _ = tx.send(result);
    }));
    rx.await.ok()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
