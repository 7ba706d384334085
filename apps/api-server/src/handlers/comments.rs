//! Append-only comments on posts.

use actix_web::{HttpResponse, web};

use dreamlog_core::domain::Comment;
use dreamlog_core::error::RepoError;
use dreamlog_shared::dto::{CommentRequest, CommentResponse, CreatedResponse};

use super::posts::parse_post_id;
use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

/// POST /api/posts/{id}/comments
pub async fn add(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<CommentRequest>,
) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;
    let text = body.into_inner().comment;
    if text.trim().is_empty() {
        return Err(AppError::BadRequest("Comment must not be empty".to_string()));
    }

    let comment = Comment::new(post_id, text, identity.email);
    state.posts.add_comment(comment).await.map_err(|e| match e {
        RepoError::NotFound => post_not_found(),
        other => other.into(),
    })?;

    tracing::debug!(post_id = %post_id, "Comment added");

    Ok(HttpResponse::Created().json(CreatedResponse {
        id: post_id.to_string(),
    }))
}

/// GET /api/posts/{id}/comments
pub async fn list(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let post_id = parse_post_id(&path)?;

    let comments = state
        .posts
        .find_comments(post_id)
        .await?
        .ok_or_else(post_not_found)?;

    let body: Vec<_> = comments
        .into_iter()
        .map(|c| CommentResponse {
            comment: c.text,
            user: c.author_email,
        })
        .collect();

    Ok(HttpResponse::Ok().json(body))
}
