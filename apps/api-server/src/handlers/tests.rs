use actix_web::http::{StatusCode, header};
use actix_web::{App, test, web};
use serde_json::{Value, json};
use uuid::Uuid;

use dreamlog_core::domain::{DreamPost, Owner};
use dreamlog_core::ports::BaseRepository;
use dreamlog_infra::JwtConfig;

use super::configure_routes;
use crate::state::AppState;

const PASSWORD: &str = "sweet-dreams";

fn test_state() -> AppState {
    AppState::in_memory(JwtConfig {
        secret: "handler-test-secret".to_string(),
        expiration_secs: 600,
        issuer: "dreamlog-test".to_string(),
    })
}

macro_rules! init_app {
    ($state:expr) => {
        test::init_service(
            App::new()
                .app_data(web::Data::new($state.clone()))
                .configure(configure_routes),
        )
        .await
    };
}

/// Send a request and decode the JSON body.
macro_rules! call_json {
    ($app:expr, $req:expr) => {{
        let resp = test::call_service(&$app, $req.to_request()).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;
        (status, body)
    }};
}

/// Register a user, log in and return `(user_id, bearer header value)`.
macro_rules! sign_up {
    ($app:expr, $name:expr, $email:expr) => {{
        let (status, body) = call_json!(
            $app,
            test::TestRequest::post().uri("/api/users").set_json(json!({
                "username": $name,
                "email": $email,
                "password": PASSWORD
            }))
        );
        assert_eq!(status, StatusCode::CREATED);
        let user_id = body["id"].as_str().unwrap().to_string();

        let (status, body) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/users/login")
                .set_json(json!({"email": $email, "password": PASSWORD}))
        );
        assert_eq!(status, StatusCode::OK);
        let token = body["access_token"].as_str().unwrap().to_string();

        (user_id, format!("Bearer {token}"))
    }};
}

macro_rules! create_post {
    ($app:expr, $auth:expr, $body:expr) => {{
        let (status, body) = call_json!(
            $app,
            test::TestRequest::post()
                .uri("/api/posts/create")
                .insert_header((header::AUTHORIZATION, $auth.clone()))
                .set_json($body)
        );
        assert_eq!(status, StatusCode::CREATED);
        body["id"].as_str().unwrap().to_string()
    }};
}

fn dream(date: &str, quality: &str, kind: &str, is_public: bool) -> Value {
    json!({
        "title": format!("Dream of {date}"),
        "body": "I was somewhere else.",
        "type": kind,
        "quality": quality,
        "date": date,
        "isPublic": is_public
    })
}

#[actix_web::test]
async fn test_health() {
    let state = test_state();
    let app = init_app!(state);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/health"));

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_register_and_login_failures() {
    let state = test_state();
    let app = init_app!(state);

    sign_up!(app, "ana", "ana@example.com");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "username": "ana again",
            "email": "ana@example.com",
            "password": PASSWORD
        }))
    );
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post().uri("/api/users").set_json(json!({
            "username": "bo",
            "email": "bo@example.com",
            "password": "short"
        }))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({"email": "ana@example.com", "password": "not-the-password"}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid email or password");

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/users/login")
            .set_json(json!({"email": "ghost@example.com", "password": PASSWORD}))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_protected_routes_require_token() {
    let state = test_state();
    let app = init_app!(state);

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/posts"));
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["title"], "Authentication Required");

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/data?month=3")
            .insert_header((header::AUTHORIZATION, "Bearer not-a-jwt"))
    );
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["title"], "Invalid Token");
}

#[actix_web::test]
async fn test_monthly_statistics() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");
    let (_, bo) = sign_up!(app, "bo", "bo@example.com");

    create_post!(app, ana, dream("2024-03-05", "Good", "Lucid dream", false));
    create_post!(app, ana, dream("2024-03-20T23:10:00.000Z", "Poor", "Nightmare", false));
    create_post!(app, ana, dream("2024-04-01", "Good", "Normal", false));
    create_post!(app, bo, dream("2024-03-11", "Average", "Recurring", true));

    let expected = json!({
        "month": 3,
        "sleep": {"Good": 1, "Average": 0, "Poor": 1},
        "dream": {"Normal": 0, "Lucid": 1, "Recurring": 0, "Nightmare": 1},
        "skipped": 0
    });

    for month in ["3", "03"] {
        let (status, body) = call_json!(
            app,
            test::TestRequest::get()
                .uri(&format!("/api/data?month={month}"))
                .insert_header((header::AUTHORIZATION, ana.clone()))
        );
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, expected);
    }

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/data")
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["month"], Value::Null);
    assert_eq!(body["sleep"], json!({"Good": 0, "Average": 0, "Poor": 0}));
    assert_eq!(
        body["dream"],
        json!({"Normal": 0, "Lucid": 0, "Recurring": 0, "Nightmare": 0})
    );
}

#[actix_web::test]
async fn test_monthly_statistics_skip_unreadable_dates() {
    let state = test_state();
    let app = init_app!(state);
    let (user_id, ana) = sign_up!(app, "ana", "ana@example.com");

    create_post!(app, ana, dream("2024-05-02", "Average", "Recurring", false));

    // Rows written before dates were validated.
    let legacy = DreamPost::new(
        Owner {
            id: Uuid::parse_str(&user_id).unwrap(),
            email: "ana@example.com".to_string(),
        },
        "Old entry".to_string(),
        String::new(),
        "Normal".to_string(),
        "Good".to_string(),
        "sometime in May".to_string(),
        false,
    );
    state.posts.save(legacy).await.unwrap();

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/data?month=5")
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["skipped"], 1);
    assert_eq!(body["sleep"]["Average"], 1);
    assert_eq!(body["sleep"]["Good"], 0);
    assert_eq!(body["dream"]["Recurring"], 1);
}

#[actix_web::test]
async fn test_create_rejects_unreadable_date() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");

    let (status, body) = call_json!(
        app,
        test::TestRequest::post()
            .uri("/api/posts/create")
            .insert_header((header::AUTHORIZATION, ana.clone()))
            .set_json(dream("yesterday", "Good", "Normal", false))
    );

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["title"], "Bad Request");
}

#[actix_web::test]
async fn test_create_accepts_reduced_iso_dates() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");

    create_post!(app, ana, dream("2024-03-05T22:15Z", "Good", "Normal", false));
    create_post!(app, ana, dream("2024-03", "Poor", "Recurring", false));
    create_post!(app, ana, dream("20240306", "Average", "Lucid", false));

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/data?month=03")
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["sleep"], json!({"Good": 1, "Average": 1, "Poor": 1}));
    assert_eq!(body["skipped"], 0);
}

#[actix_web::test]
async fn test_listings_and_total() {
    let state = test_state();
    let app = init_app!(state);
    let (ana_id, ana) = sign_up!(app, "ana", "ana@example.com");
    let (_, bo) = sign_up!(app, "bo", "bo@example.com");

    create_post!(app, ana, dream("2024-01-10", "Good", "Normal", true));
    create_post!(app, ana, dream("2024-02-10", "Poor", "Nightmare", false));
    create_post!(app, bo, dream("2024-03-10", "Good", "Lucid", true));

    let (status, body) = call_json!(app, test::TestRequest::get().uri("/api/posts/public"));
    assert_eq!(status, StatusCode::OK);
    let public = body.as_array().unwrap();
    assert_eq!(public.len(), 2);
    assert_eq!(public[0]["date"], "2024-03-10");
    assert!(public.iter().all(|p| p.get("user").is_none()));

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/posts")
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(status, StatusCode::OK);
    let own = body.as_array().unwrap();
    assert_eq!(own.len(), 2);
    assert_eq!(own[0]["date"], "2024-02-10");
    assert_eq!(own[0]["type"], "Nightmare");
    assert_eq!(own[0]["user"]["_id"], ana_id.as_str());
    assert_eq!(own[0]["user"]["email"], "ana@example.com");

    let (status, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri("/api/dreams")
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"totalDreams": 2}));
}

#[actix_web::test]
async fn test_only_owner_can_modify() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");
    let (_, bo) = sign_up!(app, "bo", "bo@example.com");

    let id = create_post!(app, ana, dream("2024-06-01", "Good", "Normal", false));
    let uri = format!("/api/posts/{id}");

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, bo.clone()))
            .set_json(json!({"title": "mine now"}))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, bo.clone()))
    );
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, body) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, ana.clone()))
            .set_json(json!({"title": "Renamed", "is_public": true}))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "Renamed");
    assert_eq!(body["is_public"], true);
    assert_eq!(body["type"], "Normal");
    assert!(body.get("user").is_none());

    let (status, body) = call_json!(
        app,
        test::TestRequest::delete()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], "Post deleted successfully.");

    let (status, _) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&uri)
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_rejects_unreadable_date() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");
    let id = create_post!(app, ana, dream("2024-06-01", "Good", "Normal", false));

    let (status, _) = call_json!(
        app,
        test::TestRequest::put()
            .uri(&format!("/api/posts/{id}"))
            .insert_header((header::AUTHORIZATION, ana.clone()))
            .set_json(json!({"date": "June"}))
    );
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = call_json!(
        app,
        test::TestRequest::get()
            .uri(&format!("/api/posts/{id}"))
            .insert_header((header::AUTHORIZATION, ana.clone()))
    );
    assert_eq!(body["date"], "2024-06-01");
}

#[actix_web::test]
async fn test_comments() {
    let state = test_state();
    let app = init_app!(state);
    let (_, ana) = sign_up!(app, "ana", "ana@example.com");
    let (_, bo) = sign_up!(app, "bo", "bo@example.com");

    let id = create_post!(app, ana, dream("2024-06-01", "Good", "Lucid", true));
    let uri = format!("/api/posts/{id}/comments");

    for (auth, text) in [(&bo, "So vivid!"), (&ana, "Thanks")] {
        let (status, body) = call_json!(
            app,
            test::TestRequest::post()
                .uri(&uri)
                .insert_header((header::AUTHORIZATION, auth.clone()))
                .set_json(json!({"comment": text}))
        );
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["id"], id.as_str());
    }

    let (status, body) = call_json!(app, test::TestRequest::get().uri(&uri));
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"comment": "So vivid!", "user": "bo@example.com"},
            {"comment": "Thanks", "user": "ana@example.com"}
        ])
    );

    let missing = format!("/api/posts/{}/comments", Uuid::new_v4());
    let (status, _) = call_json!(app, test::TestRequest::get().uri(&missing));
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(
        app,
        test::TestRequest::post()
            .uri(&missing)
            .insert_header((header::AUTHORIZATION, bo.clone()))
            .set_json(json!({"comment": "hello?"}))
    );
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call_json!(app, test::TestRequest::get().uri("/api/posts/not-a-uuid/comments"));
    assert_eq!(status, StatusCode::BAD_REQUEST);
}
