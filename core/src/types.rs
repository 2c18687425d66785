//! Domain records for the posts feed.
//!
//! # Design
//! These types mirror the mock-server's schema but are defined independently.
//! Integration tests catch any schema drift between the two crates. Fields the
//! feed does not use (such as `userId` on the public endpoint) are ignored on
//! decode.

use serde::{Deserialize, Serialize};

/// A single post as returned by the remote endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
}

/// Posts in server response order. No uniqueness is enforced.
pub type PostCollection = Vec<Post>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ignores_unknown_fields() {
        let post: Post =
            serde_json::from_str(r#"{"userId":7,"id":3,"title":"t","body":"b"}"#).unwrap();
        assert_eq!(
            post,
            Post {
                id: 3,
                title: "t".to_string(),
                body: "b".to_string(),
            }
        );
    }

    #[test]
    fn post_rejects_missing_body() {
        let result: Result<Post, _> = serde_json::from_str(r#"{"id":1,"title":"t"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn post_rejects_string_id() {
        let result: Result<Post, _> =
            serde_json::from_str(r#"{"id":"1","title":"t","body":"b"}"#);
        assert!(result.is_err());
    }
}
