//! Turns a raw HTTP response into feed entries.
//!
//! This is the only place that knows the wire format:
//!
//! ```json
//! { "items": [ { "id": "<uuid>", "description": "…", "location": "…", "image_url": "<url>" } ] }
//! ```
//!
//! Decoding is all-or-nothing.  A single item with a missing or malformed
//! required field rejects the whole response; bad items are never filtered
//! out.

use serde::Deserialize;
use url::Url;
use uuid::Uuid;

use super::{LoadError, LoadResult};
use crate::feed::FeedEntry;

/// The only status code accepted as success.
const OK_200: u16 = 200;

#[derive(Deserialize)]
struct Root {
    items: Vec<RemoteFeedItem>,
}

/// One item as it appears on the wire.
#[derive(Deserialize)]
struct RemoteFeedItem {
    id: Uuid,
    description: Option<String>,
    location: Option<String>,
    image_url: Url,
}

impl From<RemoteFeedItem> for FeedEntry {
    fn from(item: RemoteFeedItem) -> Self {
        FeedEntry::new(item.id, item.description, item.location, item.image_url)
    }
}

/// Validate `status`, then decode `body`.
///
/// Pure: the same input always yields the same result.  Every non-200 code
/// is rejected the same way, whatever the body holds.
pub fn map(body: &[u8], status: u16) -> LoadResult {
    if status != OK_200 {
        return Err(LoadError::InvalidData);
    }

    let root: Root = serde_json::from_slice(body).map_err(|_| LoadError::InvalidData)?;
    Ok(root.items.into_iter().map(FeedEntry::from).collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ID_1: &str = "8f7c0e64-0b4e-4b8e-9d55-3a2f1c7a9e01";
    const ID_2: &str = "1d2e3f40-5a6b-4c7d-8e9f-a0b1c2d3e4f5";

    #[test]
    fn rejects_every_non_200_status_regardless_of_body() {
        let body = br#"{"items":[]}"#;

        for status in [199, 201, 300, 400, 404, 500] {
            assert_eq!(map(body, status), Err(LoadError::InvalidData), "status {status}");
        }
    }

    #[test]
    fn rejects_invalid_json_on_200() {
        assert_eq!(map(b"Invalid JSON", 200), Err(LoadError::InvalidData));
        assert_eq!(map(b"", 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn rejects_json_without_items_container() {
        assert_eq!(map(b"[]", 200), Err(LoadError::InvalidData));
        assert_eq!(map(br#"{"entries":[]}"#, 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn empty_item_list_is_valid() {
        assert_eq!(map(br#"{"items":[]}"#, 200), Ok(vec![]));
    }

    #[test]
    fn decodes_items_in_order_with_optional_fields() {
        let body = format!(
            r#"{{"items":[
                {{"id":"{ID_1}","image_url":"https://a-url.com/"}},
                {{"id":"{ID_2}","description":"a description","location":"a location","image_url":"https://another-url.com/"}}
            ]}}"#
        );

        let entries = map(body.as_bytes(), 200).unwrap();

        assert_eq!(
            entries,
            vec![
                FeedEntry::new(
                    ID_1.parse().unwrap(),
                    None,
                    None,
                    Url::parse("https://a-url.com/").unwrap(),
                ),
                FeedEntry::new(
                    ID_2.parse().unwrap(),
                    Some("a description".into()),
                    Some("a location".into()),
                    Url::parse("https://another-url.com/").unwrap(),
                ),
            ]
        );
    }

    #[test]
    fn null_optional_fields_map_to_none() {
        let body = format!(
            r#"{{"items":[{{"id":"{ID_1}","description":null,"location":null,"image_url":"https://a-url.com/"}}]}}"#
        );

        let entries = map(body.as_bytes(), 200).unwrap();

        assert_eq!(entries[0].description(), None);
        assert_eq!(entries[0].location(), None);
    }

    #[test]
    fn one_malformed_item_rejects_the_whole_payload() {
        let missing_image = format!(
            r#"{{"items":[{{"id":"{ID_1}","image_url":"https://a-url.com/"}},{{"id":"{ID_2}"}}]}}"#
        );
        let bad_id = r#"{"items":[{"id":"not-a-uuid","image_url":"https://a-url.com/"}]}"#;
        let bad_url = format!(r#"{{"items":[{{"id":"{ID_1}","image_url":"not a url"}}]}}"#);
        let missing_id = r#"{"items":[{"image_url":"https://a-url.com/"}]}"#;

        assert_eq!(map(missing_image.as_bytes(), 200), Err(LoadError::InvalidData));
        assert_eq!(map(bad_id.as_bytes(), 200), Err(LoadError::InvalidData));
        assert_eq!(map(bad_url.as_bytes(), 200), Err(LoadError::InvalidData));
        assert_eq!(map(missing_id.as_bytes(), 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn decodes_image_url_wire_key_with_uppercase_id() {
        let body = br#"{"items":[{"id":"8F7C0E64-0B4E-4B8E-9D55-3A2F1C7A9E01","image_url":"https://a-url.com"}]}"#;

        let entries = map(body, 200).unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id(), ID_1.parse::<Uuid>().unwrap());
        assert_eq!(entries[0].image().as_str(), "https://a-url.com/");
    }

    #[test]
    fn in_memory_field_name_is_not_accepted_as_wire_key() {
        let body = format!(r#"{{"items":[{{"id":"{ID_1}","image":"https://a-url.com/"}}]}}"#);

        assert_eq!(map(body.as_bytes(), 200), Err(LoadError::InvalidData));
    }

    #[test]
    fn identical_input_yields_identical_result() {
        let body = format!(r#"{{"items":[{{"id":"{ID_1}","image_url":"https://a-url.com/"}}]}}"#);

        assert_eq!(map(body.as_bytes(), 200), map(body.as_bytes(), 200));
        assert_eq!(map(body.as_bytes(), 500), map(body.as_bytes(), 500));
    }
}
