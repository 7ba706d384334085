//! Dream post CRUD.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use dreamlog_core::DomainError;
use dreamlog_core::domain::{DreamPost, Owner, PostChanges};
use dreamlog_core::ports::BaseRepository;
use dreamlog_core::stats::entry_month;
use dreamlog_shared::SuccessResponse;
use dreamlog_shared::dto::{
    CreatePostRequest, CreatedResponse, OwnerResponse, PostResponse, UpdatePostRequest,
};

use crate::middleware::auth::Identity;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

pub(super) fn parse_post_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid post id: {raw}")))
}

fn validate_date(date: &str) -> AppResult<()> {
    entry_month(date).map(|_| ()).map_err(|e| {
        DomainError::Validation(format!("{e}; expected an ISO-8601 date")).into()
    })
}

/// Render a post. The owner is only included in the caller's own listing.
fn to_response(post: DreamPost, with_owner: bool) -> PostResponse {
    let user = with_owner.then(|| OwnerResponse {
        id: post.owner.id.to_string(),
        email: post.owner.email.clone(),
    });

    PostResponse {
        id: post.id.to_string(),
        title: post.title,
        body: post.body,
        kind: post.kind,
        quality: post.quality,
        date: post.date,
        is_public: post.is_public,
        user,
    }
}

async fn load_post(state: &AppState, id: Uuid) -> AppResult<DreamPost> {
    state.posts.find_by_id(id).await?.ok_or_else(|| {
        DomainError::NotFound {
            entity_type: "Post",
            id,
        }
        .into()
    })
}

/// Load a post the caller is allowed to change.
async fn load_for_mutation(state: &AppState, identity: &Identity, id: Uuid) -> AppResult<DreamPost> {
    let post = load_post(state, id).await?;

    if !state.policy.can_modify(&identity.actor(), &post) {
        tracing::warn!(post_id = %id, user_id = %identity.user_id, "Rejected mutation of foreign post");
        return Err(DomainError::Forbidden {
            entity_type: "Post",
            id,
        }
        .into());
    }

    Ok(post)
}

/// POST /api/posts/create
pub async fn create(
    state: web::Data<AppState>,
    identity: Identity,
    body: web::Json<CreatePostRequest>,
) -> AppResult<HttpResponse> {
    let req = body.into_inner();
    validate_date(&req.date)?;

    let post = DreamPost::new(
        Owner {
            id: identity.user_id,
            email: identity.email,
        },
        req.title,
        req.body,
        req.kind,
        req.quality,
        req.date,
        req.is_public,
    );
    let saved = state.posts.save(post).await?;

    tracing::info!(post_id = %saved.id, "Post created");

    Ok(HttpResponse::Created().json(CreatedResponse {
        id: saved.id.to_string(),
    }))
}

/// GET /api/posts/public
pub async fn list_public(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_public().await?;

    let body: Vec<_> = posts.into_iter().map(|p| to_response(p, false)).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts
pub async fn list_own(state: web::Data<AppState>, identity: Identity) -> AppResult<HttpResponse> {
    let posts = state.posts.find_by_owner_email(&identity.email).await?;

    let body: Vec<_> = posts.into_iter().map(|p| to_response(p, true)).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /api/posts/{id}
pub async fn show(
    state: web::Data<AppState>,
    _identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let post = load_post(&state, id).await?;

    Ok(HttpResponse::Ok().json(to_response(post, false)))
}

/// PUT /api/posts/{id}
pub async fn update(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
    body: web::Json<UpdatePostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    let req = body.into_inner();
    if let Some(date) = &req.date {
        validate_date(date)?;
    }

    let mut post = load_for_mutation(&state, &identity, id).await?;
    post.apply(PostChanges {
        title: req.title,
        body: req.body,
        kind: req.kind,
        quality: req.quality,
        date: req.date,
        is_public: req.is_public,
    });
    let saved = state.posts.save(post).await?;

    tracing::info!(post_id = %id, "Post updated");

    Ok(HttpResponse::Ok().json(to_response(saved, false)))
}

/// DELETE /api/posts/{id}
pub async fn delete(
    state: web::Data<AppState>,
    identity: Identity,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let id = parse_post_id(&path)?;
    load_for_mutation(&state, &identity, id).await?;

    state.posts.delete(id).await?;

    tracing::info!(post_id = %id, "Post deleted");

    Ok(HttpResponse::Ok().json(SuccessResponse::new("Post deleted successfully.")))
}
