//! Post detail view-model
//!
//! Loads a single post together with its comments. Loads are tagged with a
//! generation: starting a new load supersedes any outstanding one, and a
//! result carrying a stale generation is discarded instead of overwriting
//! newer state.

use postdeck_api::BlogApi;
use postdeck_core::prelude::*;
use postdeck_core::types::{Comment, Post, PostId};

/// Identifies one load cycle; results from older cycles are stale
pub type LoadGeneration = u64;

/// Lifecycle phase of the detail view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailPhase {
    /// No load started yet
    #[default]
    Idle,
    /// A load is outstanding
    Loading,
    /// Post and comments are available
    Ready,
    /// The load failed; carries the display-ready message
    Failed(String),
}

impl DetailPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailPhase::Loading)
    }

    /// Display-ready error message, if the last applied load failed
    pub fn error(&self) -> Option<&str> {
        match self {
            DetailPhase::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Owns one post's detail state (post + comments)
pub struct PostDetailViewModel<A> {
    api: A,
    generation: LoadGeneration,
    phase: DetailPhase,
    post: Option<Post>,
    comments: Vec<Comment>,
}

impl<A: BlogApi> PostDetailViewModel<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            generation: 0,
            phase: DetailPhase::default(),
            post: None,
            comments: Vec::new(),
        }
    }

    pub fn phase(&self) -> &DetailPhase {
        &self.phase
    }

    pub fn post(&self) -> Option<&Post> {
        self.post.as_ref()
    }

    pub fn comments(&self) -> &[Comment] {
        &self.comments
    }

    /// Start a load cycle
    ///
    /// Returns the generation for this cycle. Any result tagged with an
    /// earlier generation becomes stale and will be discarded by
    /// [`apply`](Self::apply).
    pub fn begin_load(&mut self) -> LoadGeneration {
        self.generation += 1;
        self.phase = DetailPhase::Loading;
        self.generation
    }

    /// Fetch the post and its comments without touching view state
    ///
    /// Separated from [`begin_load`](Self::begin_load)/[`apply`](Self::apply)
    /// so a driver can run the fetch concurrently with newer navigation.
    pub async fn fetch(&self, id: PostId) -> Result<(Post, Vec<Comment>)> {
        let post = self.api.fetch_post(id).await?;
        let comments = self.api.fetch_comments(id).await?;
        Ok((post, comments))
    }

    /// Apply a finished load if it is still current
    ///
    /// Returns `false` (and changes nothing) when `generation` is stale --
    /// a newer load has been started since this one began.
    pub fn apply(
        &mut self,
        generation: LoadGeneration,
        result: Result<(Post, Vec<Comment>)>,
    ) -> bool {
        if generation != self.generation {
            debug!(
                "discarding stale detail load (generation {} < {})",
                generation, self.generation
            );
            return false;
        }

        match result {
            Ok((post, comments)) => {
                info!("post {} detail loaded with {} comments", post.id, comments.len());
                self.post = Some(post);
                self.comments = comments;
                self.phase = DetailPhase::Ready;
            }
            Err(e) => {
                error!("detail load failed: {e}");
                self.post = None;
                self.comments.clear();
                self.phase = DetailPhase::Failed(e.to_string());
            }
        }
        true
    }

    /// Begin, fetch, and apply in one call
    ///
    /// The phase carries the outcome: [`DetailPhase::Ready`] or
    /// [`DetailPhase::Failed`].
    pub async fn load(&mut self, id: PostId) {
        let generation = self.begin_load();
        let result = self.fetch(id).await;
        self.apply(generation, result);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{test_comment, test_post, FakeApi};

    fn detail_vm(posts: Vec<Post>, comments: Vec<Comment>) -> PostDetailViewModel<FakeApi> {
        PostDetailViewModel::new(FakeApi {
            posts,
            comments,
            ..FakeApi::default()
        })
    }

    #[tokio::test]
    async fn test_load_brings_post_and_comments() {
        let mut vm = detail_vm(
            vec![test_post(5, "Seaside Trip", "sand", "Travel")],
            vec![test_comment("lovely")],
        );

        vm.load(5).await;

        assert_eq!(vm.phase(), &DetailPhase::Ready);
        assert_eq!(vm.post().unwrap().title, "Seaside Trip");
        assert_eq!(vm.comments().len(), 1);
    }

    #[tokio::test]
    async fn test_load_failure_is_display_ready() {
        let mut vm = detail_vm(Vec::new(), Vec::new());

        vm.load(99).await;

        assert!(vm.post().is_none());
        assert!(vm.phase().error().unwrap().contains("posts/getID/99"));
    }

    #[tokio::test]
    async fn test_stale_result_is_discarded() {
        let mut vm = detail_vm(
            vec![
                test_post(1, "First", "one", "Travel"),
                test_post(2, "Second", "two", "Travel"),
            ],
            Vec::new(),
        );

        // A load for post 1 begins, then the user navigates to post 2
        // before the first result lands.
        let stale = vm.begin_load();
        let stale_result = vm.fetch(1).await;

        let current = vm.begin_load();
        let current_result = vm.fetch(2).await;
        assert!(vm.apply(current, current_result));

        assert!(!vm.apply(stale, stale_result));
        assert_eq!(vm.post().unwrap().id, 2);
        assert_eq!(vm.phase(), &DetailPhase::Ready);
    }

    #[tokio::test]
    async fn test_begin_load_marks_loading() {
        let mut vm = detail_vm(Vec::new(), Vec::new());
        vm.begin_load();
        assert!(vm.phase().is_loading());
    }
}
