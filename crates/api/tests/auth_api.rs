//! Integration tests for `POST /api/login`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use sqlx::PgPool;

use tribunal_api::auth::password::hash_password;
use tribunal_db::models::user::CreateUser;
use tribunal_db::repositories::UserRepo;

/// Insert a user with a real Argon2id hash for `password`.
async fn seed_credentialed_user(pool: &PgPool, email: &str, password: &str) -> i64 {
    let user = UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(password).unwrap(),
        },
    )
    .await
    .unwrap();
    user.id
}

// ---------------------------------------------------------------------------
// Test: valid credentials log in and return the safe user shape
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_valid_credentials_succeeds(pool: PgPool) {
    let id = seed_credentialed_user(&pool, "juror@example.edu", "committee-2024").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "juror@example.edu", "password": "committee-2024"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["user"]["id"], id);
    assert_eq!(json["user"]["email"], "juror@example.edu");

    // The identity payload must never carry credential material.
    let body_text = json.to_string();
    assert!(!body_text.contains("password"), "got: {body_text}");
    assert!(!body_text.contains("argon2"), "got: {body_text}");
}

// ---------------------------------------------------------------------------
// Test: wrong password is rejected with 401
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_returns_401(pool: PgPool) {
    seed_credentialed_user(&pool, "juror@example.edu", "committee-2024").await;

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "juror@example.edu", "password": "wrong"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

// ---------------------------------------------------------------------------
// Test: unknown email is reported as not found
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_email_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "nobody@example.edu", "password": "whatever"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: missing fields fail validation with 400
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_missing_fields_returns_400(pool: PgPool) {
    let app = common::build_test_app(pool.clone());
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "juror@example.edu"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "", "password": ""}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

// ---------------------------------------------------------------------------
// Test: an account without a stored hash cannot log in
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_without_stored_hash_returns_401(pool: PgPool) {
    // Legacy row imported without credentials. No bootstrap password works
    // for these accounts; they stay locked until create-user sets a hash.
    sqlx::query("INSERT INTO users (email) VALUES ($1)")
        .bind("legacy@example.edu")
        .execute(&pool)
        .await
        .unwrap();

    let app = common::build_test_app(pool);
    let response = post_json(
        app,
        "/api/login",
        serde_json::json!({"email": "legacy@example.edu", "password": "123456"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}
