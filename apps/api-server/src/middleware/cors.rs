//! CORS policy for the journal frontend.

use actix_cors::Cors;
use actix_web::http::{Method, header};

/// Allow the configured frontend origin. Without one only same-origin
/// requests succeed.
pub fn cors(frontend_url: Option<&str>) -> Cors {
    let cors = Cors::default()
        .allowed_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allowed_headers([header::AUTHORIZATION, header::CONTENT_TYPE, header::ACCEPT])
        .max_age(3600);

    match frontend_url {
        Some("*") => cors.allow_any_origin(),
        Some(origin) => cors.allowed_origin(origin),
        None => cors,
    }
}
