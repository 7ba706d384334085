//! HTTP handlers and route configuration.

mod comments;
mod health;
mod posts;
mod stats;
mod users;

#[cfg(test)]
mod tests;

use actix_web::{error::JsonPayloadError, web};

use crate::middleware::error::AppError;

/// Configure all application routes.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error))
        .service(
            web::scope("/api")
                // Public routes
                .route("/health", web::get().to(health::health_check))
                // Accounts
                .route("/users", web::post().to(users::register))
                .route("/users/login", web::post().to(users::login))
                // Posts; fixed paths before `{id}`
                .route("/posts/create", web::post().to(posts::create))
                .route("/posts/public", web::get().to(posts::list_public))
                .route("/posts", web::get().to(posts::list_own))
                .service(
                    web::resource("/posts/{id}")
                        .route(web::get().to(posts::show))
                        .route(web::put().to(posts::update))
                        .route(web::delete().to(posts::delete)),
                )
                .service(
                    web::resource("/posts/{id}/comments")
                        .route(web::post().to(comments::add))
                        .route(web::get().to(comments::list)),
                )
                // Statistics
                .route("/dreams", web::get().to(stats::dream_total))
                .route("/data", web::get().to(stats::monthly)),
        );
}

/// Malformed JSON bodies get the same problem format as other errors.
fn json_error(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    AppError::BadRequest(err.to_string()).into()
}
