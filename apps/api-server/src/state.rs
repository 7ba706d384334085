//! Application state - shared across all handlers.

use std::sync::Arc;

use dreamlog_core::ports::{
    AccessPolicy, PasswordService, PostRepository, TokenService, UserRepository,
};
use dreamlog_infra::database::DatabaseConfig;
use dreamlog_infra::{
    Argon2PasswordService, InMemoryPostRepository, InMemoryUserRepository, JwtConfig,
    JwtTokenService, OwnerOnlyPolicy,
};

#[cfg(feature = "postgres")]
use dreamlog_infra::{PostgresPostRepository, PostgresUserRepository};

use crate::config::AppConfig;

type Repositories = (Arc<dyn UserRepository>, Arc<dyn PostRepository>);

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserRepository>,
    pub posts: Arc<dyn PostRepository>,
    pub tokens: Arc<dyn TokenService>,
    pub passwords: Arc<dyn PasswordService>,
    pub policy: Arc<dyn AccessPolicy>,
}

impl AppState {
    /// Build the application state with appropriate implementations.
    pub async fn new(config: &AppConfig) -> Self {
        let (users, posts) = repositories(config.database.as_ref()).await;
        let state = Self::with_repositories(users, posts, config.jwt.clone());

        tracing::info!("Application state initialized");
        state
    }

    /// State backed by in-memory repositories.
    pub fn in_memory(jwt: JwtConfig) -> Self {
        let (users, posts) = in_memory_repositories();
        Self::with_repositories(users, posts, jwt)
    }

    fn with_repositories(
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
        jwt: JwtConfig,
    ) -> Self {
        Self {
            users,
            posts,
            tokens: Arc::new(JwtTokenService::new(jwt)),
            passwords: Arc::new(Argon2PasswordService::new()),
            policy: Arc::new(OwnerOnlyPolicy),
        }
    }
}

fn in_memory_repositories() -> Repositories {
    let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
    let posts: Arc<dyn PostRepository> = Arc::new(InMemoryPostRepository::new());
    (users, posts)
}

#[cfg(feature = "postgres")]
async fn repositories(db_config: Option<&DatabaseConfig>) -> Repositories {
    let Some(config) = db_config else {
        tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
        return in_memory_repositories();
    };

    match dreamlog_infra::database::connect(config).await {
        Ok(conn) => {
            let users: Arc<dyn UserRepository> =
                Arc::new(PostgresUserRepository::new(conn.clone()));
            let posts: Arc<dyn PostRepository> = Arc::new(PostgresPostRepository::new(conn));
            (users, posts)
        }
        Err(e) => {
            tracing::error!(
                "Failed to connect to database: {}. Using in-memory fallback.",
                e
            );
            in_memory_repositories()
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn repositories(_db_config: Option<&DatabaseConfig>) -> Repositories {
    tracing::info!("Running without postgres feature - using in-memory repositories");
    in_memory_repositories()
}
