//! Records and request/response models for the posts API
//!
//! This module defines the stored record types and the DTOs used for
//! serializing/deserializing HTTP request and response bodies.

pub mod post;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use post::{Comment, CommentId, NewComment, NewPost, Post, PostChanges, PostId};
pub use requests::{CommentRequest, PostRequest, COMMENT_TEXT_REQUIRED, POST_FIELDS_REQUIRED};
pub use responses::{
    ErrorResponse, HealthResponse, MessageResponse, ValidationErrorResponse, POST_NOT_FOUND,
};
