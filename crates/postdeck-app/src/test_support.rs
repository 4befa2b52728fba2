//! In-memory `BlogApi` fake and fixture constructors for view-model tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use chrono::{TimeZone, Utc};

use postdeck_api::BlogApi;
use postdeck_core::prelude::*;
use postdeck_core::types::{AuthSession, Comment, Post, PostId};

/// Build a post with fixed date and zeroed counters
pub(crate) fn test_post(id: PostId, title: &str, description: &str, category: &str) -> Post {
    Post {
        id,
        title: title.to_string(),
        description: description.to_string(),
        category: category.to_string(),
        date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
        views: 0,
        likes: 0,
        image: None,
    }
}

pub(crate) fn test_comment(text: &str) -> Comment {
    Comment {
        text: text.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 5, 2, 9, 30, 0).unwrap(),
    }
}

/// Per-endpoint call counters, shared between a [`FakeApi`] and its test
#[derive(Debug, Default)]
pub(crate) struct CallCounts {
    pub posts: AtomicUsize,
    pub post: AtomicUsize,
    pub comments: AtomicUsize,
    pub submit_comment: AtomicUsize,
    pub likes: AtomicUsize,
    pub views: AtomicUsize,
}

/// In-memory [`BlogApi`] implementation
///
/// Failure flags are `Arc<AtomicBool>` so a test can keep a handle and flip
/// behavior after the fake has moved into a view-model.
#[derive(Debug, Default)]
pub(crate) struct FakeApi {
    pub posts: Vec<Post>,
    pub categories: Vec<String>,
    pub comments: Vec<Comment>,
    pub like_count: u64,
    pub token: String,
    pub fail_posts: Arc<AtomicBool>,
    pub fail_categories: Arc<AtomicBool>,
    pub fail_comment: Arc<AtomicBool>,
    pub fail_view: Arc<AtomicBool>,
    pub calls: Arc<CallCounts>,
}

impl BlogApi for FakeApi {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        self.calls.posts.fetch_add(1, Ordering::SeqCst);
        if self.fail_posts.load(Ordering::SeqCst) {
            return Err(Error::fetch("GET posts/getAll: connection refused"));
        }
        Ok(self.posts.clone())
    }

    async fn fetch_categories(&self) -> Result<Vec<String>> {
        if self.fail_categories.load(Ordering::SeqCst) {
            return Err(Error::data_format(
                "category/getAll: expected an array or a data field",
            ));
        }
        Ok(self.categories.clone())
    }

    async fn fetch_post(&self, id: PostId) -> Result<Post> {
        self.calls.post.fetch_add(1, Ordering::SeqCst);
        self.posts
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| Error::fetch(format!("GET posts/getID/{id}: HTTP 404")))
    }

    async fn fetch_comments(&self, _id: PostId) -> Result<Vec<Comment>> {
        self.calls.comments.fetch_add(1, Ordering::SeqCst);
        Ok(self.comments.clone())
    }

    async fn submit_comment(&self, id: PostId, text: &str) -> Result<Comment> {
        self.calls.submit_comment.fetch_add(1, Ordering::SeqCst);
        if self.fail_comment.load(Ordering::SeqCst) {
            return Err(Error::fetch(format!("POST posts/comment/{id}: HTTP 500")));
        }
        Ok(test_comment(text))
    }

    async fn like_post(&self, _id: PostId) -> Result<u64> {
        self.calls.likes.fetch_add(1, Ordering::SeqCst);
        Ok(self.like_count)
    }

    async fn record_view(&self, id: PostId) -> Result<()> {
        self.calls.views.fetch_add(1, Ordering::SeqCst);
        if self.fail_view.load(Ordering::SeqCst) {
            return Err(Error::fetch(format!(
                "GET analysis/updateviews/{id}: HTTP 500"
            )));
        }
        Ok(())
    }

    async fn login(&self, username: &str, _password: &str) -> Result<AuthSession> {
        if self.token.is_empty() {
            return Err(Error::fetch("POST auth/loguser: HTTP 401"));
        }
        Ok(AuthSession::new(username, self.token.clone()))
    }

    async fn register(&self, username: &str, _password: &str) -> Result<AuthSession> {
        if self.token.is_empty() {
            return Err(Error::fetch("POST auth/register: HTTP 409"));
        }
        Ok(AuthSession::new(username, self.token.clone()))
    }
}
