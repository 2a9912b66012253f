use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use quill_core::domain::Post;
use quill_core::error::RepoError;
use quill_core::ports::{PostRepository, UserRepository};

use super::entity::{post, user};
use super::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(title: &str) -> post::Model {
    post::Model {
        id: Uuid::new_v4(),
        title: title.to_owned(),
        content: "<p>Content</p>\n".to_owned(),
        created_at: Utc::now().into(),
        author_id: Uuid::new_v4(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_the_row() {
    let model = post_model("Test Post");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let found = result.expect("post should be found");
    assert_eq!(found.title, "Test Post");
    assert_eq!(found.id, post_id);
}

#[tokio::test]
async fn listing_preserves_query_order() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model("newer"), post_model("older")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.list_ordered_by_created_desc().await.unwrap();

    let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
    assert_eq!(titles, vec!["newer", "older"]);
}

#[tokio::test]
async fn update_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let ghost = Post::new(Uuid::new_v4(), "ghost".into(), "<p>x</p>\n".into());
    let result = repo.update(ghost).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn delete_of_missing_row_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo.delete(Uuid::new_v4()).await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn delete_succeeds_when_a_row_is_removed() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    assert!(repo.delete(Uuid::new_v4()).await.is_ok());
}

#[tokio::test]
async fn find_user_by_email_maps_the_row() {
    let user_id = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id: user_id,
            name: "Alice".to_owned(),
            email: "alice@example.com".to_owned(),
            password_hash: "hash".to_owned(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user = repo
        .find_by_email("alice@example.com")
        .await
        .unwrap()
        .expect("user should be found");

    assert_eq!(user.id, user_id);
    assert_eq!(user.name, "Alice");
}
