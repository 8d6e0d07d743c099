//! API Routes
//!
//! Configures the Axum router with the posts endpoints and the health check.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    normalize_path::NormalizePath,
    trace::TraceLayer,
};

use super::handlers::{
    create_comment_handler, create_post_handler, delete_post_handler, get_post_handler,
    health_handler, list_comments_handler, list_posts_handler, update_post_handler, AppState,
};

/// Routes for posts and their comments, relative to the mount point.
///
/// # Endpoints
/// - `GET /` - List posts (query parameters filter by field)
/// - `POST /` - Create a post
/// - `GET /:id` - Fetch one post
/// - `PUT /:id` - Replace a post's title and contents
/// - `DELETE /:id` - Delete a post
/// - `GET /:id/comments` - List a post's comments
/// - `POST /:id/comments` - Add a comment to a post
pub fn posts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_posts_handler).post(create_post_handler))
        .route(
            "/:id",
            get(get_post_handler)
                .put(update_post_handler)
                .delete(delete_post_handler),
        )
        .route(
            "/:id/comments",
            get(list_comments_handler).post(create_comment_handler),
        )
}

/// Creates the main router with the posts routes mounted at `api_prefix`.
///
/// An empty prefix mounts the posts routes at the root. `GET /health` is
/// always served at the root.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState, api_prefix: &str) -> Router {
    // Configure CORS middleware
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new().route("/health", get(health_handler));
    let router = if api_prefix.is_empty() {
        router.merge(posts_routes())
    } else {
        router.nest(api_prefix, posts_routes())
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The served application: the router behind trailing-slash trimming.
pub type App = NormalizePath<Router>;

/// Wraps [`create_router`] so `/api/posts/` and `/api/posts/1/` reach the
/// same handlers as their slash-free forms.
///
/// Trimming has to happen before routing, so it wraps the finished router
/// instead of being added with `Router::layer`.
pub fn create_app(state: AppState, api_prefix: &str) -> App {
    NormalizePath::trim_trailing_slash(create_router(state, api_prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewPost;
    use crate::store::InMemoryPostStore;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::util::ServiceExt;

    fn create_test_app(prefix: &str) -> Router {
        let store = InMemoryPostStore::with_posts([NewPost::new("Title", "Body")]);
        create_router(AppState::new(store), prefix)
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app = create_test_app("/api/posts");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_list_under_prefix() {
        let app = create_test_app("/api/posts");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/posts")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_root_mount() {
        let app = create_test_app("");

        let response = app
            .oneshot(Request::builder().uri("/1").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_endpoint() {
        let app = create_test_app("/api/posts");

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/posts")
                    .header("content-type", "application/json")
                    .body(Body::from(r#"{"title":"t","contents":"c"}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CREATED);
    }

    #[tokio::test]
    async fn test_trailing_slash_is_trimmed() {
        let store = InMemoryPostStore::with_posts([NewPost::new("Title", "Body")]);
        let app = create_app(AppState::new(store), "/api/posts");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/posts/1/")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_not_found() {
        let app = create_test_app("/api/posts");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/posts/404")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
