//! Story model
//!
//! Domain model for a Hacker News story as shown in the list.

use hn_client::StoryHit;

const HN_ITEM_URL: &str = "https://news.ycombinator.com/item?id=";

/// A Hacker News story
///
/// Identity is `object_id`; two stories with the same id are the same item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Story {
    /// Unique identifier from the search index
    pub object_id: String,
    /// Link target (empty for text posts such as Ask HN)
    pub url: String,
    /// Story title
    pub title: String,
    /// Submitter's username
    pub author: String,
    /// Number of comments
    pub num_comments: u64,
    /// Number of points
    pub points: u64,
}

impl Story {
    /// Create a new story with the given id and title
    pub fn new(object_id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            object_id: object_id.into(),
            url: String::new(),
            title: title.into(),
            author: String::new(),
            num_comments: 0,
            points: 0,
        }
    }

    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    pub fn with_counts(mut self, num_comments: u64, points: u64) -> Self {
        self.num_comments = num_comments;
        self.points = points;
        self
    }

    /// URL to open for this story: its link, or the discussion page for
    /// text posts
    pub fn link(&self) -> String {
        if self.url.is_empty() {
            format!("{}{}", HN_ITEM_URL, self.object_id)
        } else {
            self.url.clone()
        }
    }
}

impl From<StoryHit> for Story {
    fn from(hit: StoryHit) -> Self {
        Self {
            object_id: hit.object_id,
            url: hit.url.unwrap_or_default(),
            title: hit.title.unwrap_or_default(),
            author: hit.author.unwrap_or_default(),
            num_comments: hit.num_comments.unwrap_or_default(),
            points: hit.points.unwrap_or_default(),
        }
    }
}

/// One fetched page of stories
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StoriesPage {
    /// Stories in arrival order
    pub list: Vec<Story>,
    /// Zero-based page number
    pub page: u32,
}

impl From<hn_client::SearchResponse> for StoriesPage {
    fn from(response: hn_client::SearchResponse) -> Self {
        Self {
            list: response.hits.into_iter().map(Story::from).collect(),
            page: response.page,
        }
    }
}
