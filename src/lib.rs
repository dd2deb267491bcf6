//! feedloader: fetch a remote image feed and deliver typed entries.
//!
//! ## Architecture overview
//!
//! ```text
//! ┌────────────────┐ get(url) ┌────────────┐  (status, bytes)  ┌───────────────────┐
//! │ RemoteFeed-    │ ───────► │ HttpClient │ ────────────────► │ feed_items_mapper │
//! │ Loader::load() │          │  (trait)   │    or failure     │   (pure decode)   │
//! └────────────────┘          └────────────┘                   └───────────────────┘
//!         ▲                                                              │
//!         │ Completion(LoadResult), dropped if the loader is gone        │
//!         └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! * **`feed`**: the [`FeedEntry`](feed::FeedEntry) record, the
//!   [`FeedLoader`](feed::FeedLoader) trait, and an `async` bridge.
//! * **`api`**: the HTTP transport seam, its reqwest implementation, the
//!   response mapper, and the remote loader.
//! * **`poll`**: optional watch mode that re-loads on a timer.

pub mod api;
pub mod feed;
pub mod poll;
