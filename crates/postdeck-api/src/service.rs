//! Blog API operations as a service trait
//!
//! View-models depend on this trait rather than on [`ApiClient`] directly,
//! so tests can substitute an in-memory fake.
//!
//! [`ApiClient`]: crate::client::ApiClient

use postdeck_core::prelude::*;
use postdeck_core::types::{AuthSession, Comment, Post, PostId};

/// Operations the blog API exposes to the client
#[trait_variant::make(BlogApi: Send)]
pub trait LocalBlogApi {
    /// Fetch the full post set (`GET posts/getAll`)
    async fn fetch_posts(&self) -> Result<Vec<Post>>;

    /// Fetch category names (`GET category/getAll`), empty names dropped
    async fn fetch_categories(&self) -> Result<Vec<String>>;

    /// Fetch one post (`GET posts/getID/{id}`)
    async fn fetch_post(&self, id: PostId) -> Result<Post>;

    /// Fetch the comments for one post (`GET posts/getcomment/{id}`)
    async fn fetch_comments(&self, id: PostId) -> Result<Vec<Comment>>;

    /// Submit a comment (`POST posts/comment/{id}`); returns the created comment
    async fn submit_comment(&self, id: PostId, text: &str) -> Result<Comment>;

    /// Like a post (`POST posts/likepost/{id}`); returns the authoritative count
    async fn like_post(&self, id: PostId) -> Result<u64>;

    /// Record a view (`GET analysis/updateviews/{id}`); the payload is ignored
    async fn record_view(&self, id: PostId) -> Result<()>;

    /// Sign in (`POST auth/loguser`); returns the session on success
    async fn login(&self, username: &str, password: &str) -> Result<AuthSession>;

    /// Create an account (`POST auth/register`); same response shape as login
    async fn register(&self, username: &str, password: &str) -> Result<AuthSession>;
}
