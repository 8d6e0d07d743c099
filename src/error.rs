//! Error types for the posts API
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{debug, error};

use crate::models::{ErrorResponse, MessageResponse, PostId, ValidationErrorResponse};

// == Store Error Enum ==
/// Failure reported by a post store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Backend could not be reached or refused the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Query filter names a field posts do not have
    #[error("Invalid filter field: {0}")]
    InvalidFilter(String),

    /// Comment insert referenced a post that does not exist
    #[error("Post {0} does not exist")]
    MissingPost(PostId),

    /// Internal store error
    #[error("Internal store error: {0}")]
    Internal(String),
}

// == Store Operation ==
/// Route-level operation a store failure happened in.
///
/// Each operation owns the fixed message clients receive on a 500.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// GET / listing with optional filters
    ListPosts,
    /// GET /:id
    GetPost,
    /// GET /:id/comments
    ListComments,
    /// POST /
    CreatePost,
    /// POST /:id/comments, covering both the parent lookup and the insert
    CreateComment,
    /// PUT /:id
    UpdatePost,
    /// DELETE /:id
    DeletePost,
}

impl Operation {
    pub fn failure_message(self) -> &'static str {
        match self {
            Operation::ListPosts => "The posts' information couldn't be retrieved...",
            Operation::GetPost => "The post information could not be retrieved.",
            Operation::ListComments => "The comments information could not be retrieved.",
            Operation::CreatePost => "There was an error while saving the post to the database",
            Operation::CreateComment => {
                "There was an error while saving the comment to the database"
            }
            Operation::UpdatePost => "The post information could not be modified.",
            Operation::DeletePost => "The post could not be removed",
        }
    }
}

// == API Error Enum ==
/// Error returned by request handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Request body failed a presence check
    #[error("{0}")]
    Validation(&'static str),

    /// Addressed post does not exist
    #[error("{}", crate::models::POST_NOT_FOUND)]
    PostNotFound,

    /// The store rejected the operation
    #[error("{}: {source}", .operation.failure_message())]
    Store {
        operation: Operation,
        #[source]
        source: StoreError,
    },
}

impl ApiError {
    /// Wraps a store failure with the operation it interrupted.
    pub fn store(operation: Operation) -> impl FnOnce(StoreError) -> Self {
        move |source| ApiError::Store { operation, source }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::PostNotFound => StatusCode::NOT_FOUND,
            ApiError::Store { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            ApiError::Validation(message) => {
                debug!(reason = message, "rejected request body");
                (status, Json(ValidationErrorResponse::new(message))).into_response()
            }
            ApiError::PostNotFound => {
                debug!("post not found");
                (status, Json(MessageResponse::post_not_found())).into_response()
            }
            ApiError::Store { operation, source } => {
                error!(?operation, error = %source, "store operation failed");
                (status, Json(ErrorResponse::new(operation.failure_message()))).into_response()
            }
        }
    }
}

// == Result Type Aliases ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Convenience Result type for store implementations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
