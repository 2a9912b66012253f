use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Longest accepted title, in characters.
pub const TITLE_MAX_CHARS: usize = 200;
/// Largest accepted content body, in bytes (before rendering).
pub const CONTENT_MAX_BYTES: usize = 64 * 1024;

/// Post entity - a blog entry owned by exactly one user.
///
/// `author_id` is fixed at creation time and never reassigned; `content`
/// holds the already-rendered HTML, not the submitted source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub author_id: Uuid,
}

impl Post {
    /// Create a new post owned by `author_id`.
    ///
    /// `content` must already be rendered (see [`crate::content`]).
    pub fn new(author_id: Uuid, title: String, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: Utc::now(),
            author_id,
        }
    }

    /// Validate submitted title and content.
    ///
    /// Shared by the create and edit paths so the two cannot drift apart.
    pub fn validate_input(title: &str, content: &str) -> Result<(), DomainError> {
        if title.trim().is_empty() {
            return Err(DomainError::Validation("title must not be empty".into()));
        }
        if title.chars().count() > TITLE_MAX_CHARS {
            return Err(DomainError::Validation(format!(
                "title must be at most {TITLE_MAX_CHARS} characters"
            )));
        }
        if content.trim().is_empty() {
            return Err(DomainError::Validation("content must not be empty".into()));
        }
        if content.len() > CONTENT_MAX_BYTES {
            return Err(DomainError::Validation(format!(
                "content must be at most {CONTENT_MAX_BYTES} bytes"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_belongs_to_its_author() {
        let author = Uuid::new_v4();
        let post = Post::new(author, "Hello".into(), "<p>Hi</p>\n".into());

        assert_eq!(post.author_id, author);
        assert_eq!(post.title, "Hello");
    }

    #[test]
    fn validate_accepts_ordinary_input() {
        assert!(Post::validate_input("Test Post", "Test content").is_ok());
    }

    #[test]
    fn validate_rejects_blank_title() {
        assert!(Post::validate_input("   ", "body").is_err());
        assert!(Post::validate_input("", "body").is_err());
    }

    #[test]
    fn validate_rejects_blank_content() {
        assert!(Post::validate_input("title", " \n\t").is_err());
    }

    #[test]
    fn validate_rejects_oversized_title() {
        let title = "x".repeat(TITLE_MAX_CHARS + 1);
        assert!(Post::validate_input(&title, "body").is_err());
    }

    #[test]
    fn validate_rejects_oversized_content() {
        let content = "y".repeat(CONTENT_MAX_BYTES + 1);
        assert!(Post::validate_input("title", &content).is_err());
    }

    #[test]
    fn validate_accepts_input_at_the_bounds() {
        let title = "x".repeat(TITLE_MAX_CHARS);
        let content = "y".repeat(CONTENT_MAX_BYTES);
        assert!(Post::validate_input(&title, &content).is_ok());
    }
}
