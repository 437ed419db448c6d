//! Search API data transfer objects
//!
//! These types represent the data returned from the search API.
//! They are intentionally separate from application domain models
//! to keep this crate pure and reusable.

use serde::{Deserialize, Serialize};

/// One page of search results
///
/// Both fields are required: a body without `hits` or `page` is a
/// decode error.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching stories, in the order returned by the index
    pub hits: Vec<StoryHit>,

    /// Zero-based page number of this result set
    pub page: u32,
}

/// A single search hit
///
/// The index returns `null` for several fields on Ask HN and comment-like
/// items, so everything except the identifier is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoryHit {
    /// Unique identifier of the item
    #[serde(rename = "objectID")]
    pub object_id: String,

    /// Link target of the story
    #[serde(default)]
    pub url: Option<String>,

    /// Story title
    #[serde(default)]
    pub title: Option<String>,

    /// Submitter's username
    #[serde(default)]
    pub author: Option<String>,

    /// Number of comments
    #[serde(default)]
    pub num_comments: Option<u64>,

    /// Number of points
    #[serde(default)]
    pub points: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_search_response() {
        let json = r#"{
            "hits": [
                {
                    "objectID": "1",
                    "url": "https://reactjs.org/",
                    "title": "React",
                    "author": "Jordan Walke",
                    "num_comments": 3,
                    "points": 4
                }
            ],
            "page": 0,
            "nbPages": 50
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.page, 0);
        assert_eq!(response.hits.len(), 1);
        assert_eq!(response.hits[0].object_id, "1");
        assert_eq!(response.hits[0].title.as_deref(), Some("React"));
        assert_eq!(response.hits[0].num_comments, Some(3));
    }

    #[test]
    fn test_decode_null_fields() {
        let json = r#"{
            "hits": [{ "objectID": "42", "url": null, "title": "Ask HN", "author": "pg", "points": null }],
            "page": 2
        }"#;

        let response: SearchResponse = serde_json::from_str(json).unwrap();
        let hit = &response.hits[0];
        assert!(hit.url.is_none());
        assert!(hit.points.is_none());
        assert!(hit.num_comments.is_none());
    }

    #[test]
    fn test_missing_hits_is_an_error() {
        let json = r#"{ "page": 0 }"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }

    #[test]
    fn test_missing_object_id_is_an_error() {
        let json = r#"{ "hits": [{ "title": "no id" }], "page": 0 }"#;
        assert!(serde_json::from_str::<SearchResponse>(json).is_err());
    }
}
