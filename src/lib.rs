//! Posts API - A small JSON service for posts and their comments
//!
//! Exposes CRUD routes over a pluggable asynchronous post store.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use api::{create_app, create_router, App, AppState};
pub use config::Config;
pub use store::{InMemoryPostStore, PostStore};
