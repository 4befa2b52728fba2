//! Typed endpoint wrappers for [`ApiClient`]
//!
//! Each wrapper issues one request through the uniform helper and decodes
//! the response into domain types. Wire-shape parsing lives in free
//! functions so it can be tested without a server.

use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use postdeck_core::prelude::*;
use postdeck_core::types::{AuthSession, Category, Comment, Post, PostId};

use crate::client::ApiClient;
use crate::envelope::parse_list;
use crate::service::BlogApi;

/// `POST auth/loguser` / `POST auth/register` response body
#[derive(Debug, Deserialize)]
struct TokenResponse {
    token: String,
}

/// `POST posts/likepost/{id}` response body
///
/// Accepts either a bare count or an object carrying a `likes` field.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LikeResponse {
    Count(u64),
    Wrapped { likes: u64 },
}

/// Extract category names from a category list, dropping empty names
pub(crate) fn category_names(categories: Vec<Category>) -> Vec<String> {
    categories
        .into_iter()
        .map(|c| c.name)
        .filter(|name| !name.is_empty())
        .collect()
}

/// Decode the authoritative like count from a like response
pub(crate) fn parse_like_count(value: serde_json::Value) -> Result<u64> {
    serde_json::from_value::<LikeResponse>(value)
        .map(|resp| match resp {
            LikeResponse::Count(n) => n,
            LikeResponse::Wrapped { likes } => likes,
        })
        .map_err(|e| Error::data_format(format!("likepost: expected a like count: {e}")))
}

/// Decode a token response into a session for `username`
pub(crate) fn parse_session(value: serde_json::Value, username: &str) -> Result<AuthSession> {
    serde_json::from_value::<TokenResponse>(value)
        .map(|resp| AuthSession::new(username, resp.token))
        .map_err(|e| Error::data_format(format!("auth: expected a token field: {e}")))
}

impl BlogApi for ApiClient {
    async fn fetch_posts(&self) -> Result<Vec<Post>> {
        let value = self.request(Method::GET, "posts/getAll", None).await?;
        parse_list(value, "posts/getAll")
    }

    async fn fetch_categories(&self) -> Result<Vec<String>> {
        let value = self.request(Method::GET, "category/getAll", None).await?;
        let categories: Vec<Category> = parse_list(value, "category/getAll")?;
        Ok(category_names(categories))
    }

    async fn fetch_post(&self, id: PostId) -> Result<Post> {
        let value = self
            .request(Method::GET, &format!("posts/getID/{id}"), None)
            .await?;
        let mut post: Post = serde_json::from_value(value)
            .map_err(|e| Error::data_format(format!("posts/getID/{id}: {e}")))?;

        // The API only flags that an image exists; the address is derived
        // client-side from the post id.
        if post.image.is_some() {
            post.image = Some(self.image_url(id));
        }
        Ok(post)
    }

    async fn fetch_comments(&self, id: PostId) -> Result<Vec<Comment>> {
        let value = self
            .request(Method::GET, &format!("posts/getcomment/{id}"), None)
            .await?;
        parse_list(value, "posts/getcomment")
    }

    async fn submit_comment(&self, id: PostId, text: &str) -> Result<Comment> {
        let body = json!({ "postId": id, "text": text });
        let value = self
            .request(Method::POST, &format!("posts/comment/{id}"), Some(&body))
            .await?;
        serde_json::from_value(value)
            .map_err(|e| Error::data_format(format!("posts/comment/{id}: {e}")))
    }

    async fn like_post(&self, id: PostId) -> Result<u64> {
        let value = self
            .request(Method::POST, &format!("posts/likepost/{id}"), None)
            .await?;
        parse_like_count(value)
    }

    async fn record_view(&self, id: PostId) -> Result<()> {
        // The numeric payload is ignored; callers keep their own display count.
        self.request(Method::GET, &format!("analysis/updateviews/{id}"), None)
            .await?;
        Ok(())
    }

    async fn login(&self, username: &str, password: &str) -> Result<AuthSession> {
        let body = json!({ "username": username, "password": password });
        let value = self.request(Method::POST, "auth/loguser", Some(&body)).await?;
        parse_session(value, username)
    }

    async fn register(&self, username: &str, password: &str) -> Result<AuthSession> {
        let body = json!({ "username": username, "password": password });
        let value = self
            .request(Method::POST, "auth/register", Some(&body))
            .await?;
        parse_session(value, username)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_names_drops_empty_entries() {
        let categories = vec![
            Category {
                name: "Travel".to_string(),
            },
            Category {
                name: String::new(),
            },
            Category {
                name: "Food".to_string(),
            },
        ];

        assert_eq!(category_names(categories), vec!["Travel", "Food"]);
    }

    #[test]
    fn test_parse_like_count_accepts_both_shapes() {
        assert_eq!(parse_like_count(json!(12)).unwrap(), 12);
        assert_eq!(parse_like_count(json!({"likes": 12})).unwrap(), 12);
    }

    #[test]
    fn test_parse_like_count_rejects_other_shapes() {
        let err = parse_like_count(json!({"count": 12})).unwrap_err();
        assert!(matches!(err, Error::DataFormat { .. }));
    }

    #[test]
    fn test_parse_session_carries_username_and_token() {
        let session = parse_session(json!({"token": "abc123"}), "maya").unwrap();
        assert_eq!(session.username, "maya");
        assert_eq!(session.token, "abc123");
    }

    #[test]
    fn test_parse_session_without_token_is_data_format_error() {
        let err = parse_session(json!({"ok": true}), "maya").unwrap_err();
        assert!(matches!(err, Error::DataFormat { .. }));
    }

    #[test]
    fn test_post_decodes_from_wire_json() {
        let post: Post = serde_json::from_value(json!({
            "id": 3,
            "title": "Seaside Trip",
            "description": "<p>sand and waves</p>",
            "category": "Travel",
            "date": "2024-05-01T12:00:00Z",
            "views": 41,
            "likes": 7,
            "image": "1"
        }))
        .unwrap();

        assert_eq!(post.id, 3);
        assert_eq!(post.category, "Travel");
        assert_eq!(post.views, 41);
        assert!(post.image.is_some());
    }

    #[test]
    fn test_post_counters_default_to_zero() {
        let post: Post = serde_json::from_value(json!({
            "id": 3,
            "title": "Seaside Trip",
            "description": "sand",
            "category": "Travel",
            "date": "2024-05-01T12:00:00Z"
        }))
        .unwrap();

        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
        assert!(post.image.is_none());
    }
}
