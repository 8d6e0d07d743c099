//! Record types owned by the post store

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier assigned to posts by the store.
pub type PostId = u64;

/// Identifier assigned to comments by the store.
pub type CommentId = u64;

/// A stored post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub title: String,
    pub contents: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A stored comment, always attached to one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id: CommentId,
    pub text: String,
    pub post_id: PostId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub contents: String,
}

impl NewPost {
    pub fn new(title: impl Into<String>, contents: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            contents: contents.into(),
        }
    }
}

/// Replacement fields for an existing post.
pub type PostChanges = NewPost;

/// Fields required to create a comment under a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub text: String,
    pub post_id: PostId,
}

impl NewComment {
    pub fn new(text: impl Into<String>, post_id: PostId) -> Self {
        Self {
            text: text.into(),
            post_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_serializes_timestamps_as_rfc3339() {
        let now = Utc::now();
        let post = Post {
            id: 7,
            title: "Hello".to_string(),
            contents: "World".to_string(),
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&post).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["contents"], "World");
        assert!(json["created_at"].as_str().unwrap().contains('T'));
    }

    #[test]
    fn test_comment_carries_post_id() {
        let now = Utc::now();
        let comment = Comment {
            id: 1,
            text: "Nice".to_string(),
            post_id: 3,
            created_at: now,
            updated_at: now,
        };

        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["post_id"], 3);
        assert_eq!(json["text"], "Nice");
    }
}
