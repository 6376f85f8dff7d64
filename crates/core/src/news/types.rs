use serde::{Deserialize, Serialize};

/// A news post stored under a game service partition.
///
/// Serialized with the store's attribute names so clients read the same
/// shape the table holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsPost {
    #[serde(rename = "Service")]
    pub service: String,
    #[serde(rename = "PostID")]
    pub post_id: i64,
    #[serde(rename = "Heading")]
    pub heading: String,
    #[serde(rename = "Text")]
    pub text: String,
}

impl NewsPost {
    /// Returns the composite key of this post.
    pub fn key(&self) -> NewsKey {
        NewsKey {
            service: self.service.clone(),
            post_id: self.post_id,
        }
    }
}

/// A validated news post that has not been given an identifier yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsDraft {
    pub service: String,
    pub heading: String,
    pub text: String,
}

impl NewsDraft {
    /// Attaches an identifier, producing the post to store.
    pub fn with_post_id(&self, post_id: i64) -> NewsPost {
        NewsPost {
            service: self.service.clone(),
            post_id,
            heading: self.heading.clone(),
            text: self.text.clone(),
        }
    }
}

/// Composite key of a news post.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NewsKey {
    pub service: String,
    pub post_id: i64,
}

impl std::fmt::Display for NewsKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.service, self.post_id)
    }
}
