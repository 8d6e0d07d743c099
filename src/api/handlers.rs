//! API Handlers
//!
//! HTTP request handlers for the posts and comments endpoints. Each handler
//! validates its input, makes one store call (two for comment creation) and
//! maps the outcome onto a status code.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::error::{ApiError, Operation, Result};
use crate::models::{
    Comment, CommentRequest, HealthResponse, MessageResponse, Post, PostId, PostRequest,
};
use crate::store::{PostFilter, PostStore};

/// Application state shared across all handlers.
///
/// Holds the post store behind a trait object so any backend can be mounted.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    /// Creates a new AppState around the given store.
    pub fn new(store: impl PostStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Creates a new AppState from an already shared store.
    pub fn from_shared(store: Arc<dyn PostStore>) -> Self {
        Self { store }
    }
}

/// Parses a path id; anything that is not a post id names no post.
fn parse_post_id(raw: &str) -> Result<PostId> {
    raw.parse().map_err(|_| ApiError::PostNotFound)
}

/// Handler for GET /
///
/// Lists posts, filtered by any query parameters.
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(query): Query<HashMap<String, String>>,
) -> Result<Json<Vec<Post>>> {
    let filter = PostFilter::from(query);
    let posts = state
        .store
        .find(&filter)
        .await
        .map_err(ApiError::store(Operation::ListPosts))?;

    Ok(Json(posts))
}

/// Handler for GET /:id
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Post>> {
    let id = parse_post_id(&id)?;
    state
        .store
        .find_by_id(id)
        .await
        .map_err(ApiError::store(Operation::GetPost))?
        .map(Json)
        .ok_or(ApiError::PostNotFound)
}

/// Handler for GET /:id/comments
///
/// An existing post with no comments yields an empty array, not a 404.
pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<Comment>>> {
    let id = parse_post_id(&id)?;
    state
        .store
        .find_post_comments(id)
        .await
        .map_err(ApiError::store(Operation::ListComments))?
        .map(Json)
        .ok_or(ApiError::PostNotFound)
}

/// Handler for POST /
///
/// A missing or unreadable body counts as an empty one.
pub async fn create_post_handler(
    State(state): State<AppState>,
    body: Option<Json<PostRequest>>,
) -> Result<(StatusCode, Json<Post>)> {
    let new_post = body
        .map(|Json(req)| req)
        .unwrap_or_default()
        .validate()
        .map_err(ApiError::Validation)?;

    let post = state
        .store
        .insert(new_post)
        .await
        .map_err(ApiError::store(Operation::CreatePost))?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Handler for POST /:id/comments
///
/// The parent post is looked up before the body is validated, so a missing
/// post wins over a bad body.
pub async fn create_comment_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<CommentRequest>>,
) -> Result<(StatusCode, Json<Comment>)> {
    let post_id = parse_post_id(&id)?;

    let parent = state
        .store
        .find_by_id(post_id)
        .await
        .map_err(ApiError::store(Operation::CreateComment))?;
    if parent.is_none() {
        return Err(ApiError::PostNotFound);
    }

    let new_comment = body
        .map(|Json(req)| req)
        .unwrap_or_default()
        .validate(post_id)
        .map_err(ApiError::Validation)?;

    let comment = state
        .store
        .insert_comment(new_comment)
        .await
        .map_err(ApiError::store(Operation::CreateComment))?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Handler for PUT /:id
///
/// The body is validated before the id is looked at.
pub async fn update_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Option<Json<PostRequest>>,
) -> Result<Json<Post>> {
    let changes = body
        .map(|Json(req)| req)
        .unwrap_or_default()
        .validate()
        .map_err(ApiError::Validation)?;
    let id = parse_post_id(&id)?;

    state
        .store
        .update(id, changes)
        .await
        .map_err(ApiError::store(Operation::UpdatePost))?
        .map(Json)
        .ok_or(ApiError::PostNotFound)
}

/// Handler for DELETE /:id
pub async fn delete_post_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let post_id = parse_post_id(&id)?;

    match state
        .store
        .remove(post_id)
        .await
        .map_err(ApiError::store(Operation::DeletePost))?
    {
        Some(_) => Ok(Json(MessageResponse::deleted(&id))),
        None => Err(ApiError::PostNotFound),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
