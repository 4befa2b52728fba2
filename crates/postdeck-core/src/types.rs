//! Core domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-assigned post identifier
pub type PostId = i64;

/// The sentinel category meaning "no category filter applied"
pub const ALL_CATEGORIES: &str = "All";

/// A blog post as served by the API
///
/// Fetched in bulk at load time. `views` and `likes` are mutated in place by
/// view/like actions; posts are never created or deleted by the client.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,
    pub title: String,
    /// Free text; may contain markup that a presentation layer must sanitize
    pub description: String,
    pub category: String,
    pub date: DateTime<Utc>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub image: Option<String>,
}

/// A category entry from `category/getAll`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: String,
}

/// A single comment on a post
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// An authenticated session: username plus the opaque server token
///
/// Held in memory for the lifetime of the client process. Absence means
/// unauthenticated. Passed into view-models explicitly rather than read from
/// ambient state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSession {
    pub username: String,
    pub token: String,
}

impl AuthSession {
    pub fn new(username: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            token: token.into(),
        }
    }
}

/// Transient filter/paging state for the post collection
///
/// The page number is 1-based. Changing the query or category resets the
/// page to 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Free-text query matched against title, description, and category
    pub query: String,
    /// Selected category; [`ALL_CATEGORIES`] disables the restriction
    pub category: String,
    /// Current page, 1-based
    pub page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: ALL_CATEGORIES.to_string(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Reset filters and paging to their default state
    pub fn reset(&mut self) {
        self.query.clear();
        self.category = ALL_CATEGORIES.to_string();
        self.page = 1;
    }

    /// Check if any filter is active (non-empty query or a real category)
    pub fn is_active(&self) -> bool {
        !self.query.is_empty() || self.category != ALL_CATEGORIES
    }

    /// Check if a post passes both the query and the category filter
    ///
    /// The query is a case-insensitive substring match against title,
    /// description, or category. The category restriction is an exact match
    /// unless the sentinel is selected.
    pub fn matches(&self, post: &Post) -> bool {
        if !self.query.is_empty() {
            let needle = self.query.to_lowercase();
            let hit = post.title.to_lowercase().contains(&needle)
                || post.description.to_lowercase().contains(&needle)
                || post.category.to_lowercase().contains(&needle);
            if !hit {
                return false;
            }
        }

        self.category == ALL_CATEGORIES || post.category == self.category
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn test_post(title: &str, description: &str, category: &str) -> Post {
        Post {
            id: 1,
            title: title.to_string(),
            description: description.to_string(),
            category: category.to_string(),
            date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            views: 0,
            likes: 0,
            image: None,
        }
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let filter = FilterState::default();
        assert!(!filter.is_active());
        assert!(filter.matches(&test_post("Seaside Trip", "sand and waves", "Travel")));
    }

    #[test]
    fn test_query_is_case_insensitive_substring() {
        let mut filter = FilterState::default();
        filter.query = "sea".to_string();

        assert!(filter.matches(&test_post("Seaside Trip", "sand", "Travel")));
        assert!(!filter.matches(&test_post("Mountain View", "granite peaks", "Travel")));
    }

    #[test]
    fn test_query_matches_description_and_category() {
        let mut filter = FilterState::default();
        filter.query = "sea".to_string();
        assert!(filter.matches(&test_post("Quiet Morning", "walking by the sea", "Travel")));

        filter.query = "trav".to_string();
        assert!(filter.matches(&test_post("Quiet Morning", "tea and toast", "Travel")));
    }

    #[test]
    fn test_category_restriction_unless_sentinel() {
        let mut filter = FilterState::default();
        filter.category = "Food".to_string();

        assert!(filter.matches(&test_post("Ramen", "broth", "Food")));
        assert!(!filter.matches(&test_post("Seaside Trip", "sand", "Travel")));

        filter.category = ALL_CATEGORIES.to_string();
        assert!(filter.matches(&test_post("Seaside Trip", "sand", "Travel")));
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut filter = FilterState {
            query: "sea".to_string(),
            category: "Travel".to_string(),
            page: 4,
        };
        filter.reset();
        assert_eq!(filter, FilterState::default());
    }
}
