//! API Module
//!
//! HTTP handlers and routing for the posts REST API.
//!
//! # Endpoints (relative to the mount point)
//! - `GET /` / `POST /` - List or create posts
//! - `GET /:id` / `PUT /:id` / `DELETE /:id` - Read, replace or delete a post
//! - `GET /:id/comments` / `POST /:id/comments` - List or add comments
//!
//! `GET /health` is served at the root. Trailing slashes are trimmed before
//! routing.

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::{create_app, create_router, posts_routes, App};
