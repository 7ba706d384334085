//! Data Transfer Objects - request/response types for the API.
//!
//! Field names follow the journal frontend: posts expose `_id`, `type` and
//! `is_public`, and creation accepts `isPublic`.

use serde::{Deserialize, Serialize};

/// Request to register a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request to login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Id of a freshly created (or commented) resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: String,
}

/// Response containing an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: u64,
}

/// Request to create a dream post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub quality: String,
    pub date: String,
    #[serde(rename = "isPublic", alias = "is_public", default)]
    pub is_public: bool,
}

/// Partial update of a dream post; absent fields are left unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub quality: Option<String>,
    pub date: Option<String>,
    #[serde(alias = "isPublic")]
    pub is_public: Option<bool>,
}

/// Owner reference embedded in the caller's own listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OwnerResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub email: String,
}

/// A dream post as returned by the API. Comments are never embedded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    #[serde(rename = "_id")]
    pub id: String,
    pub title: String,
    pub body: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub quality: String,
    pub date: String,
    pub is_public: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<OwnerResponse>,
}

/// Request to comment on a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentRequest {
    pub comment: String,
}

/// A comment with its author's email.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentResponse {
    pub comment: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DreamTotalResponse {
    #[serde(rename = "totalDreams")]
    pub total_dreams: u64,
}

/// Query string of the monthly statistics endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MonthQuery {
    pub month: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SleepStats {
    pub good: u32,
    pub average: u32,
    pub poor: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DreamStats {
    pub normal: u32,
    pub lucid: u32,
    pub recurring: u32,
    pub nightmare: u32,
}

/// Monthly sleep and dream statistics of the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyStatsResponse {
    /// Selected month (1-12); `null` when the query named no valid month.
    pub month: Option<u32>,
    pub sleep: SleepStats,
    pub dream: DreamStats,
    /// Entries left out because their date could not be read.
    pub skipped: u32,
}
