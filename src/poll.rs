//! Watch mode: re-load the feed on a fixed interval.
//!
//! Runs as a tokio task, issuing one load per tick and forwarding each
//! outcome over an [`mpsc`] channel.  A failed tick is reported and the next
//! tick proceeds on schedule; there is no retry or backoff.
//!
//! ## For contributors
//!
//! Loads are awaited one at a time, so a slow response delays the next tick
//! rather than overlapping with it.  Missed ticks are skipped, not bunched.

use std::fmt::Display;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::MissedTickBehavior;

use crate::feed::{load_once, FeedEntry, FeedLoader};

/// Messages sent from the watch task to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollMsg {
    /// A load succeeded with these entries.
    Entries(Vec<FeedEntry>),
    /// A load failed with this error description.
    Error(String),
}

/// Spawn the watch task on the current runtime.
///
/// The first load happens immediately.  The task stops once the receiver is
/// dropped, or if the loader stops delivering results.
pub fn spawn<L>(loader: Arc<L>, interval: Duration) -> mpsc::Receiver<PollMsg>
where
    L: FeedLoader + 'static,
    L::Error: Display,
{
    let (tx, rx) = mpsc::channel(16);

    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            ticker.tick().await;

            let msg = match load_once(loader.as_ref()).await {
                Some(Ok(entries)) => PollMsg::Entries(entries),
                Some(Err(e)) => PollMsg::Error(e.to_string()),
                None => {
                    tracing::debug!("loader dropped its completion, stopping watch");
                    return;
                }
            };

            // If the receiver is gone the caller has exited; stop polling.
            if tx.send(msg).await.is_err() {
                return;
            }
        }
    });

    rx
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
