use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// How many characters of content the excerpt keeps.
pub const EXCERPT_LEN: usize = 80;

/// Placeholder shown when a post is created or edited with a blank author.
pub const DEFAULT_AUTHOR: &str = "You";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub author: String,
    pub date: String,
    pub content: String,
    pub excerpt: String,
}

impl Post {
    pub fn new(title: String, author: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: Utc::now().to_rfc3339(),
            excerpt: excerpt_of(&content),
            title,
            author,
            content,
        }
    }

    /// Builds a post with a fixed id and date, used for the seed set.
    pub fn seeded(id: &str, title: &str, author: &str, date: &str, content: &str) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            date: date.to_string(),
            excerpt: excerpt_of(content),
            content: content.to_string(),
        }
    }

    /// Replaces the content and keeps the excerpt in sync with it.
    pub fn set_content(&mut self, content: String) {
        self.excerpt = excerpt_of(&content);
        self.content = content;
    }

    /// Substring match against title or content. Expects `query` already
    /// lowercased so a search over the whole sequence lowercases it once.
    pub fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query) || self.content.to_lowercase().contains(query)
    }
}

/// First [`EXCERPT_LEN`] characters of the content plus an ellipsis marker.
pub fn excerpt_of(content: &str) -> String {
    let head: String = content.chars().take(EXCERPT_LEN).collect();
    format!("{head}...")
}
