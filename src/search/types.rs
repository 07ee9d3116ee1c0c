use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// One search result from the Hacker News search API.
///
/// The API sends `null` for `title`, `url` and the counters on some records
/// (Ask HN posts have no url, for instance). Those read as empty/zero so a
/// single sparse hit doesn't fail the whole response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Story {
    #[serde(rename = "objectID")]
    pub object_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub author: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub num_comments: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub points: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Body of a search response. Everything except `hits` is ignored.
#[derive(Deserialize, Debug)]
pub struct SearchResponse {
    pub hits: Vec<Story>,
}

/// The committed, fetch-triggering URL: endpoint followed by the search term.
///
/// Built by plain concatenation. reqwest percent-encodes the query when the
/// request is sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestUrl(String);

impl RequestUrl {
    pub fn compose(endpoint: &str, term: &str) -> Self {
        Self(format!("{endpoint}{term}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RequestUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_url_concatenates_endpoint_and_term() {
        let url = RequestUrl::compose("https://hn.algolia.com/api/v1/search?query=", "Rust");
        assert_eq!(url.as_str(), "https://hn.algolia.com/api/v1/search?query=Rust");
        assert_eq!(url.to_string(), url.as_str());
    }

    #[test]
    fn test_story_deserializes_wire_names() {
        let json = r#"{
            "objectID": "42",
            "title": "Show HN: a thing",
            "url": "https://example.com",
            "author": "pg",
            "num_comments": 7,
            "points": 120,
            "created_at": "2024-01-01T00:00:00Z"
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.object_id, "42");
        assert_eq!(story.title, "Show HN: a thing");
        assert_eq!(story.author, "pg");
        assert_eq!(story.num_comments, 7);
        assert_eq!(story.points, 120);
    }

    #[test]
    fn test_story_null_fields_read_as_defaults() {
        let json = r#"{
            "objectID": "7",
            "title": "Ask HN: anything",
            "url": null,
            "author": "dang",
            "num_comments": null,
            "points": null
        }"#;
        let story: Story = serde_json::from_str(json).unwrap();
        assert_eq!(story.url, "");
        assert_eq!(story.num_comments, 0);
        assert_eq!(story.points, 0);
    }

    #[test]
    fn test_story_without_object_id_is_rejected() {
        let json = r#"{"title": "no id", "url": "", "author": "x", "num_comments": 0, "points": 1}"#;
        assert!(serde_json::from_str::<Story>(json).is_err());
    }

    #[test]
    fn test_search_response_requires_hits() {
        assert!(serde_json::from_str::<SearchResponse>(r#"{"nbHits": 0}"#).is_err());
        let response: SearchResponse = serde_json::from_str(r#"{"hits": [], "page": 0}"#).unwrap();
        assert!(response.hits.is_empty());
    }
}
