use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Post, User};
use crate::error::RepoError;

/// User repository.
///
/// Users are immutable once created in this scope, so there is no update
/// or delete surface.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by their unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError>;

    /// Find a user by their email address.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError>;

    /// Persist a new user. Fails with [`RepoError::Constraint`] on a
    /// duplicate email.
    async fn insert(&self, user: User) -> Result<User, RepoError>;
}

/// Post repository.
///
/// Deliberately a fixed set of named operations rather than a query
/// builder: handlers and the ownership guard stay decoupled from whatever
/// storage engine sits behind this trait.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Find a post by its unique ID.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError>;

    /// All posts, newest first.
    async fn list_ordered_by_created_desc(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;

    /// Overwrite an existing post in place. The row is addressed by
    /// `post.id`; a missing row is [`RepoError::NotFound`].
    async fn update(&self, post: Post) -> Result<Post, RepoError>;

    /// Remove a post. A missing row is [`RepoError::NotFound`].
    async fn delete(&self, id: Uuid) -> Result<(), RepoError>;
}
