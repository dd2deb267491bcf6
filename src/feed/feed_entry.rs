//! The domain record produced by every successful load.
//!
//! `FeedEntry` is deliberately transport-agnostic: it knows nothing about
//! JSON keys or HTTP.  The wire representation lives next to the mapper in
//! `api::feed_items_mapper`, which is the only place that builds entries from
//! network data.

use serde::Serialize;
use url::Url;
use uuid::Uuid;

/// A single image-feed entry.
///
/// Entries are immutable once built: fields are private and exposed through
/// accessors.  Two entries compare equal when every field matches, which is
/// what the loader tests rely on.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FeedEntry {
    /// Unique within one fetch; not checked across fetches.
    id: Uuid,

    description: Option<String>,

    location: Option<String>,

    /// Always present and absolute.
    image: Url,
}

impl FeedEntry {
    pub fn new(
        id: Uuid,
        description: Option<String>,
        location: Option<String>,
        image: Url,
    ) -> Self {
        Self {
            id,
            description,
            location,
            image,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn image(&self) -> &Url {
        &self.image
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
