//! Request DTOs for the posts API
//!
//! Defines the structure of incoming HTTP request bodies. Every field is
//! optional at the serde level so that presence checks produce the API's own
//! validation payloads instead of extractor rejections.

use serde::Deserialize;

use crate::models::{NewComment, NewPost, PostId};

/// Validation message for post create/update bodies.
pub const POST_FIELDS_REQUIRED: &str = "Please provide title and contents for the post.";

/// Validation message for comment create bodies.
pub const COMMENT_TEXT_REQUIRED: &str = "Please provide text for the comment.";

/// Request body for POST / and PUT /:id
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub contents: Option<String>,
}

impl PostRequest {
    /// Checks that both `title` and `contents` are present and non-empty.
    ///
    /// Returns the validated fields, or the fixed validation message.
    pub fn validate(self) -> Result<NewPost, &'static str> {
        match (non_empty(self.title), non_empty(self.contents)) {
            (Some(title), Some(contents)) => Ok(NewPost { title, contents }),
            _ => Err(POST_FIELDS_REQUIRED),
        }
    }
}

/// Request body for POST /:id/comments
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentRequest {
    #[serde(default)]
    pub text: Option<String>,
}

impl CommentRequest {
    /// Checks that `text` is present and non-empty, attaching it to `post_id`.
    pub fn validate(self, post_id: PostId) -> Result<NewComment, &'static str> {
        non_empty(self.text)
            .map(|text| NewComment { text, post_id })
            .ok_or(COMMENT_TEXT_REQUIRED)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
