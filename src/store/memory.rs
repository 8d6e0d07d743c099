//! In-Memory Post Store
//!
//! Ordered maps behind a single async lock. Ids are assigned sequentially
//! per record kind and never reused.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{Comment, CommentId, NewComment, NewPost, Post, PostChanges, PostId};
use crate::store::{PostFilter, PostStore};

#[derive(Debug)]
struct Tables {
    posts: BTreeMap<PostId, Post>,
    comments: BTreeMap<CommentId, Comment>,
    next_post_id: PostId,
    next_comment_id: CommentId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            posts: BTreeMap::new(),
            comments: BTreeMap::new(),
            next_post_id: 1,
            next_comment_id: 1,
        }
    }
}

impl Tables {
    fn insert_post(&mut self, new: NewPost) -> Post {
        let now = Utc::now();
        let post = Post {
            id: self.next_post_id,
            title: new.title,
            contents: new.contents,
            created_at: now,
            updated_at: now,
        };
        self.next_post_id += 1;
        self.posts.insert(post.id, post.clone());
        post
    }
}

// == In-Memory Store ==
/// [`PostStore`] kept entirely in process memory.
#[derive(Debug, Default)]
pub struct InMemoryPostStore {
    tables: RwLock<Tables>,
}

impl InMemoryPostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `posts`, assigned ids from 1.
    pub fn with_posts(posts: impl IntoIterator<Item = NewPost>) -> Self {
        let mut tables = Tables::default();
        for post in posts {
            tables.insert_post(post);
        }
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// A couple of posts for trying the API by hand.
    pub fn demo() -> Self {
        Self::with_posts([
            NewPost::new(
                "Getting started",
                "Create posts with POST and read them back with GET.",
            ),
            NewPost::new(
                "Comments",
                "Every post has a nested comments collection.",
            ),
        ])
    }

    pub async fn post_count(&self) -> usize {
        self.tables.read().await.posts.len()
    }

    pub async fn comment_count(&self) -> usize {
        self.tables.read().await.comments.len()
    }
}

#[async_trait]
impl PostStore for InMemoryPostStore {
    async fn find(&self, filter: &PostFilter) -> StoreResult<Vec<Post>> {
        filter.check_fields()?;
        let tables = self.tables.read().await;
        Ok(tables
            .posts
            .values()
            .filter(|post| filter.matches(post))
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: PostId) -> StoreResult<Option<Post>> {
        Ok(self.tables.read().await.posts.get(&id).cloned())
    }

    async fn find_post_comments(&self, post_id: PostId) -> StoreResult<Option<Vec<Comment>>> {
        let tables = self.tables.read().await;
        if !tables.posts.contains_key(&post_id) {
            return Ok(None);
        }
        Ok(Some(
            tables
                .comments
                .values()
                .filter(|comment| comment.post_id == post_id)
                .cloned()
                .collect(),
        ))
    }

    async fn insert(&self, post: NewPost) -> StoreResult<Post> {
        let post = self.tables.write().await.insert_post(post);
        debug!(id = post.id, "inserted post");
        Ok(post)
    }

    async fn insert_comment(&self, comment: NewComment) -> StoreResult<Comment> {
        let mut tables = self.tables.write().await;
        if !tables.posts.contains_key(&comment.post_id) {
            return Err(StoreError::MissingPost(comment.post_id));
        }

        let now = Utc::now();
        let comment = Comment {
            id: tables.next_comment_id,
            text: comment.text,
            post_id: comment.post_id,
            created_at: now,
            updated_at: now,
        };
        tables.next_comment_id += 1;
        tables.comments.insert(comment.id, comment.clone());
        debug!(id = comment.id, post_id = comment.post_id, "inserted comment");
        Ok(comment)
    }

    async fn update(&self, id: PostId, changes: PostChanges) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        Ok(tables.posts.get_mut(&id).map(|post| {
            post.title = changes.title;
            post.contents = changes.contents;
            post.updated_at = Utc::now();
            post.clone()
        }))
    }

    async fn remove(&self, id: PostId) -> StoreResult<Option<Post>> {
        let mut tables = self.tables.write().await;
        let removed = tables.posts.remove(&id);
        if removed.is_some() {
            tables.comments.retain(|_, comment| comment.post_id != id);
            debug!(id, "removed post and its comments");
        }
        Ok(removed)
    }
}
