//! Post collection view-model
//!
//! [`PostCollectionViewModel`] owns the full post list fetched from the API
//! and derives the filtered, paginated view from it. Filtering and paging
//! are synchronous and pure over the owned list; only the explicit actions
//! (`load`, `record_view`, `like_post`, `add_comment`) touch the network.

use std::collections::{HashMap, HashSet};

use postdeck_api::BlogApi;
use postdeck_core::prelude::*;
use postdeck_core::types::{AuthSession, Comment, FilterState, Post, PostId};

/// Default posts per page, matching the original client
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Lifecycle phase of a load cycle
///
/// A failed load is terminal for that cycle: no partial post list is shown,
/// and only a new explicit [`PostCollectionViewModel::load`] call starts a
/// fresh cycle.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing fetched yet
    #[default]
    Idle,
    /// Posts and categories are loaded
    Ready,
    /// The load failed; carries the display-ready message
    Failed(String),
}

impl LoadPhase {
    pub fn is_ready(&self) -> bool {
        matches!(self, LoadPhase::Ready)
    }

    /// Display-ready error message, if this cycle failed
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome of [`PostCollectionViewModel::record_view`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewOutcome {
    /// The view was recorded and the local count bumped
    Recorded,
    /// No session: the caller should route to sign-in. No network call was
    /// made.
    RedirectToLogin,
}

/// Owns the post collection and its derived filtered/paginated view
pub struct PostCollectionViewModel<A> {
    api: A,
    posts: Vec<Post>,
    categories: Vec<String>,
    comments: HashMap<PostId, Vec<Comment>>,
    filter: FilterState,
    page_size: usize,
    phase: LoadPhase,
    session: Option<AuthSession>,
    pending_comments: HashSet<PostId>,
}

impl<A: BlogApi> PostCollectionViewModel<A> {
    /// Create an empty view-model over `api`
    ///
    /// `page_size` of zero falls back to [`DEFAULT_PAGE_SIZE`].
    pub fn new(api: A, page_size: usize) -> Self {
        let page_size = if page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            page_size
        };

        Self {
            api,
            posts: Vec::new(),
            categories: Vec::new(),
            comments: HashMap::new(),
            filter: FilterState::default(),
            page_size,
            phase: LoadPhase::default(),
            session: None,
            pending_comments: HashSet::new(),
        }
    }

    // ─────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────

    /// Inject or clear the authenticated session
    pub fn set_session(&mut self, session: Option<AuthSession>) {
        self.session = session;
    }

    pub fn session(&self) -> Option<&AuthSession> {
        self.session.as_ref()
    }

    // ─────────────────────────────────────────────────────────
    // Loading
    // ─────────────────────────────────────────────────────────

    /// Fetch the full post set and the category set
    ///
    /// On any failure the view-model enters [`LoadPhase::Failed`] with a
    /// display-ready message and keeps no partial list. There is no retry;
    /// call `load` again to start a new cycle.
    pub async fn load(&mut self) -> Result<()> {
        match self.fetch_all().await {
            Ok((posts, categories)) => {
                info!("loaded {} posts, {} categories", posts.len(), categories.len());
                self.posts = posts;
                self.categories = categories;
                self.filter.page = 1;
                self.phase = LoadPhase::Ready;
                Ok(())
            }
            Err(e) => {
                error!("load failed: {e}");
                self.posts.clear();
                self.categories.clear();
                self.comments.clear();
                self.phase = LoadPhase::Failed(e.to_string());
                Err(e)
            }
        }
    }

    async fn fetch_all(&self) -> Result<(Vec<Post>, Vec<String>)> {
        let posts = self.api.fetch_posts().await?;
        let categories = self.api.fetch_categories().await?;
        Ok((posts, categories))
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn post(&self, id: PostId) -> Option<&Post> {
        self.posts.iter().find(|p| p.id == id)
    }

    fn post_mut(&mut self, id: PostId) -> Option<&mut Post> {
        self.posts.iter_mut().find(|p| p.id == id)
    }

    // ─────────────────────────────────────────────────────────
    // Filtering & Pagination
    // ─────────────────────────────────────────────────────────

    /// Update the free-text query; resets the page to 1
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.filter.page = 1;
    }

    /// Update the selected category; resets the page to 1
    pub fn set_category(&mut self, category: impl Into<String>) {
        self.filter.category = category.into();
        self.filter.page = 1;
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// The ordered subsequence of posts passing the current filters
    ///
    /// Pure over (post list, query, category): source order is preserved and
    /// no post is dropped or duplicated across pages.
    pub fn filtered_view(&self) -> Vec<&Post> {
        self.posts.iter().filter(|p| self.filter.matches(p)).collect()
    }

    /// Number of pages in the filtered view (0 when it is empty)
    pub fn total_pages(&self) -> usize {
        self.filtered_view().len().div_ceil(self.page_size)
    }

    /// Select page `n` (1-based) and return its slice of the filtered view
    ///
    /// Requests outside `[1, total_pages]` are a no-op: the page selection
    /// is unchanged and the current slice is returned.
    pub fn page(&mut self, n: usize) -> Vec<&Post> {
        if n >= 1 && n <= self.total_pages() {
            self.filter.page = n;
        } else {
            debug!("page {} out of range, staying on page {}", n, self.filter.page);
        }
        self.visible()
    }

    /// The slice of the filtered view for the current page
    pub fn visible(&self) -> Vec<&Post> {
        let start = (self.filter.page - 1) * self.page_size;
        self.filtered_view()
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect()
    }

    // ─────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────

    /// Record a view on a post
    ///
    /// Requires a session: without one, no network call is made and
    /// [`ViewOutcome::RedirectToLogin`] is returned. On success the local
    /// count is bumped by exactly one regardless of the value the server
    /// now holds -- the local count is a display approximation, not a
    /// mirror of server truth.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] if the view endpoint fails; the rendered list is
    /// unaffected.
    pub async fn record_view(&mut self, id: PostId) -> Result<ViewOutcome> {
        if self.session.is_none() {
            debug!("view on post {id} without a session, redirecting to sign-in");
            return Ok(ViewOutcome::RedirectToLogin);
        }

        self.api
            .record_view(id)
            .await
            .with_context(|| format!("record view on post {id}"))?;

        if let Some(post) = self.post_mut(id) {
            post.views += 1;
        }
        Ok(ViewOutcome::Recorded)
    }

    /// Like a post
    ///
    /// Unlike `record_view`, this path trusts the server: the local like
    /// count is replaced with the returned authoritative value.
    ///
    /// # Errors
    ///
    /// [`Error::Fetch`] / [`Error::DataFormat`] on endpoint failure; the
    /// rendered list is unaffected.
    pub async fn like_post(&mut self, id: PostId) -> Result<u64> {
        let likes = self
            .api
            .like_post(id)
            .await
            .with_context(|| format!("like post {id}"))?;

        if let Some(post) = self.post_mut(id) {
            post.likes = likes;
        }
        Ok(likes)
    }

    /// Fetch and cache the comments for a post
    pub async fn load_comments(&mut self, id: PostId) -> Result<&[Comment]> {
        let comments = self
            .api
            .fetch_comments(id)
            .await
            .with_context(|| format!("fetch comments for post {id}"))?;
        self.comments.insert(id, comments);
        Ok(self.comments.get(&id).map(Vec::as_slice).unwrap_or(&[]))
    }

    /// Comments currently cached for a post
    pub fn comments(&self, id: PostId) -> &[Comment] {
        self.comments.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Submit a comment on a post
    ///
    /// Rejects empty/whitespace-only text and a second submission while one
    /// is still in flight for the same post. On success the server-returned
    /// comment is prepended locally and the post is refetched to reconcile
    /// server-derived fields. The in-flight guard is released on success and
    /// failure alike.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for empty text.
    /// - [`Error::CommentPending`] while a submission is outstanding.
    /// - [`Error::Fetch`] / [`Error::DataFormat`] on endpoint failure.
    pub async fn add_comment(&mut self, id: PostId, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(Error::validation("comment text must not be empty"));
        }
        if !self.pending_comments.insert(id) {
            return Err(Error::CommentPending { post_id: id });
        }

        let result = self.submit_and_reconcile(id, text).await;
        self.pending_comments.remove(&id);
        result.with_context(|| format!("comment on post {id}"))
    }

    async fn submit_and_reconcile(&mut self, id: PostId, text: &str) -> Result<()> {
        let comment = self.api.submit_comment(id, text).await?;
        self.comments.entry(id).or_default().insert(0, comment);

        // The comment may change server-derived fields on the post itself,
        // so reconcile with a full refetch.
        let fresh = self.api.fetch_post(id).await?;
        if let Some(post) = self.post_mut(id) {
            *post = fresh;
        }
        Ok(())
    }
}
