//! Post Store Module
//!
//! Asynchronous persistence interface for posts and comments, plus the
//! bundled in-memory backend.

use std::collections::{BTreeMap, HashMap};

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};
use crate::models::{Comment, NewComment, NewPost, Post, PostChanges, PostId};

mod memory;


pub use memory::InMemoryPostStore;

/// Storage backend for posts and their comments.
///
/// Absence is not an error: lookups and mutations addressing a missing post
/// return `Ok(None)`. `Err` is reserved for the store itself failing.
#[async_trait]
pub trait PostStore: Send + Sync {
    /// All posts matching every field of `filter`
    async fn find(&self, filter: &PostFilter) -> StoreResult<Vec<Post>>;

    async fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>>;

    /// Comments of a post, or `None` when the post itself does not exist.
    ///
    /// An existing post without comments yields `Some(vec![])`.
    async fn find_post_comments(&self, post_id: PostId) -> StoreResult<Option<Vec<Comment>>>;

    async fn insert(&self, post: NewPost) -> StoreResult<Post>;

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment>;

    /// Replaces the post's fields, returning the updated post if it exists
    async fn update(&self, id: PostId, changes: PostChanges) -> StoreResult<Option<Post>>;

    /// Deletes a post, returning it if it existed
    async fn remove(&self, id: PostId) -> StoreResult<Option<Post>>;
}

// == Post Filter ==
/// Equality filter over post fields, built from a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    fields: BTreeMap<String, String>,
}

impl PostFilter {
    /// Fields a filter may name.
    pub const FIELDS: [&'static str; 3] = ["id", "title", "contents"];

    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an equality constraint on `field`.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Rejects filters naming a field posts do not have.
    pub fn check_fields(&self) -> StoreResult<()> {
        match self
            .fields
            .keys()
            .find(|field| !Self::FIELDS.contains(&field.as_str()))
        {
            Some(unknown) => Err(StoreError::InvalidFilter(unknown.clone())),
            None => Ok(()),
        }
    }

    /// Returns true if `post` satisfies every constraint.
    ///
    /// `id` compares numerically, so `01` matches post 1.
    ///
    /// Unknown fields never match; call [`PostFilter::check_fields`] first.
    pub fn matches(&self, post: &Post) -> bool {
        self.fields.iter().all(|(field, value)| match field.as_str() {
            "id" => value.parse::<PostId>().map_or(false, |id| id == post.id),
            "title" => post.title == *value,
            "contents" => post.contents == *value,
            _ => false,
        })
    }
}

impl From<HashMap<String, String>> for PostFilter {
    fn from(query: HashMap<String, String>) -> Self {
        Self {
            fields: query.into_iter().collect(),
        }
    }
}
