//! In-memory repositories - used as fallback when no database is
//! configured, and as the substrate for handler tests.
//!
//! Note: data is lost on process restart.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{Post, User};
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

/// In-memory user store using a HashMap with async RwLock.
#[derive(Default)]
pub struct InMemoryUserRepository {
    store: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, user: User) -> Result<User, RepoError> {
        let mut store = self.store.write().await;

        // Mirror the unique index on users.email.
        if store.values().any(|u| u.email == user.email) {
            return Err(RepoError::Constraint("Entity already exists".to_string()));
        }

        store.insert(user.id, user.clone());
        Ok(user)
    }
}

/// In-memory post store using a HashMap with async RwLock.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<HashMap<Uuid, Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts. Test helper.
    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn list_ordered_by_created_desc(&self) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let mut posts: Vec<Post> = store.values().cloned().collect();
        posts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(posts)
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        match store.get_mut(&post.id) {
            Some(existing) => {
                *existing = post.clone();
                Ok(post)
            }
            None => Err(RepoError::NotFound),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;

        if store.remove(&id).is_none() {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;

    fn post_at(offset_secs: i64, title: &str) -> Post {
        let mut post = Post::new(Uuid::new_v4(), title.into(), "<p>Body</p>\n".into());
        post.created_at = Utc::now() + Duration::seconds(offset_secs);
        post
    }

    #[tokio::test]
    async fn listing_is_newest_first() {
        let repo = InMemoryPostRepository::new();
        repo.insert(post_at(1, "oldest")).await.unwrap();
        repo.insert(post_at(2, "middle")).await.unwrap();
        repo.insert(post_at(3, "newest")).await.unwrap();

        let posts = repo.list_ordered_by_created_desc().await.unwrap();

        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "middle", "oldest"]);
        assert!(posts.windows(2).all(|w| w[0].created_at > w[1].created_at));
    }

    #[tokio::test]
    async fn update_overwrites_in_place() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(post_at(0, "before")).await.unwrap();

        let mut edited = post.clone();
        edited.title = "after".into();
        repo.update(edited).await.unwrap();

        let found = repo.find_by_id(post.id).await.unwrap().unwrap();
        assert_eq!(found.title, "after");
        assert_eq!(found.author_id, post.author_id);
        assert_eq!(repo.count().await, 1);
    }

    #[tokio::test]
    async fn update_of_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();

        let result = repo.update(post_at(0, "ghost")).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn delete_removes_the_row() {
        let repo = InMemoryPostRepository::new();
        let post = repo.insert(post_at(0, "doomed")).await.unwrap();

        repo.delete(post.id).await.unwrap();

        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_id(post.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_of_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();

        let result = repo.delete(Uuid::new_v4()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn duplicate_email_is_a_constraint_violation() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Alice".into(), "alice@example.com".into(), "hash".into());
        repo.insert(user).await.unwrap();

        let dupe = User::new("Other".into(), "alice@example.com".into(), "hash".into());
        let result = repo.insert(dupe).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
    }

    #[tokio::test]
    async fn find_by_email_matches_exactly() {
        let repo = InMemoryUserRepository::new();
        let user = User::new("Alice".into(), "alice@example.com".into(), "hash".into());
        repo.insert(user.clone()).await.unwrap();

        let found = repo.find_by_email("alice@example.com").await.unwrap();
        assert_eq!(found.map(|u| u.id), Some(user.id));

        assert!(repo.find_by_email("bob@example.com").await.unwrap().is_none());
    }
}
