use chrono::Utc;
use dreamlog_core::domain::{Comment, DreamPost, Owner};
use dreamlog_core::error::RepoError;
use dreamlog_core::ports::{BaseRepository, PostRepository, UserRepository};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use crate::database::entity::{comment, dream_post, user};
use crate::database::postgres_repo::{PostgresPostRepository, PostgresUserRepository};

fn post_model(id: Uuid, owner_id: Uuid, date: &str) -> dream_post::Model {
    let now = Utc::now();
    dream_post::Model {
        id,
        owner_id,
        owner_email: "dreamer@example.com".to_owned(),
        title: "Test Dream".to_owned(),
        body: "Content".to_owned(),
        kind: "Lucid".to_owned(),
        quality: "Good".to_owned(),
        date: date.to_owned(),
        is_public: false,
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn test_find_post_by_id() {
    let post_id = Uuid::new_v4();
    let owner_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, owner_id, "2024-03-05")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let post: DreamPost = repo.find_by_id(post_id).await.unwrap().unwrap();

    assert_eq!(post.id, post_id);
    assert_eq!(post.title, "Test Dream");
    assert_eq!(post.kind, "Lucid");
    assert_eq!(post.owner.id, owner_id);
    assert_eq!(post.owner.email, "dreamer@example.com");
}

#[tokio::test]
async fn test_save_inserts_when_update_matches_nothing() {
    let owner_id = Uuid::new_v4();
    let post = DreamPost::new(
        Owner {
            id: owner_id,
            email: "dreamer@example.com".to_owned(),
        },
        "Test Dream".to_owned(),
        "Content".to_owned(),
        "Lucid".to_owned(),
        "Good".to_owned(),
        "2024-03-05".to_owned(),
        false,
    );

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        // UPDATE ... RETURNING yields no row
        .append_query_results(vec![Vec::<dream_post::Model>::new()])
        // INSERT ... RETURNING
        .append_query_results(vec![vec![post_model(post.id, owner_id, "2024-03-05")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let saved = repo.save(post.clone()).await.unwrap();
    assert_eq!(saved.id, post.id);
    assert_eq!(saved.date, "2024-03-05");
}

#[tokio::test]
async fn test_delete_missing_post_is_not_found() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 0,
        }])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = BaseRepository::<DreamPost, Uuid>::delete(&repo, Uuid::new_v4()).await;
    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_by_owner_email_maps_rows() {
    let owner_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![
            post_model(Uuid::new_v4(), owner_id, "2024-03-20"),
            post_model(Uuid::new_v4(), owner_id, "2024-03-05"),
        ]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let posts = repo.find_by_owner_email("dreamer@example.com").await.unwrap();
    let dates: Vec<_> = posts.iter().map(|p| p.date.as_str()).collect();
    assert_eq!(dates, vec!["2024-03-20", "2024-03-05"]);
}

#[tokio::test]
async fn test_add_comment_to_missing_post() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<dream_post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let result = repo
        .add_comment(Comment::new(
            Uuid::new_v4(),
            "nice".to_owned(),
            "bo@example.com".to_owned(),
        ))
        .await;

    assert!(matches!(result, Err(RepoError::NotFound)));
}

#[tokio::test]
async fn test_find_comments_in_order() {
    let post_id = Uuid::new_v4();
    let now = Utc::now();
    let comment_model = |text: &str| comment::Model {
        id: Uuid::new_v4(),
        post_id,
        text: text.to_owned(),
        author_email: "bo@example.com".to_owned(),
        created_at: now.into(),
    };

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![post_model(post_id, Uuid::new_v4(), "2024-03-05")]])
        .append_query_results(vec![vec![comment_model("first"), comment_model("second")]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);

    let comments = repo.find_comments(post_id).await.unwrap().unwrap();
    let texts: Vec<_> = comments.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(texts, vec!["first", "second"]);
    assert!(comments.iter().all(|c| c.author_email == "bo@example.com"));
}

#[tokio::test]
async fn test_find_user_by_email() {
    let now = Utc::now();
    let id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![user::Model {
            id,
            username: "dreamer".to_owned(),
            email: "dreamer@example.com".to_owned(),
            password_hash: "$argon2id$...".to_owned(),
            created_at: now.into(),
            updated_at: now.into(),
        }]])
        .into_connection();

    let repo = PostgresUserRepository::new(db);

    let user = repo.find_by_email("dreamer@example.com").await.unwrap().unwrap();
    assert_eq!(user.id, id);
    assert_eq!(user.username, "dreamer");
}
