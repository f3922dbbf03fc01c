//! Post API integration tests
//!
//! Tests for creating, listing, and deleting posts: the envelope and
//! count field, ownership scoping, and cache invalidation after
//! writes. Validation tests run without a database because the
//! handlers reject bad input before any query.

use axum::http::StatusCode;
use serial_test::serial;

use crate::common::auth_helpers::{auth_header, create_test_user, TestUser};
use crate::common::database::TestDatabase;
use crate::common::keys::test_token_keys;
use crate::common::server::{create_test_server, create_test_server_with_pool};

/// Issue a token for a user id without touching the database
fn token_for(user_id: i64) -> String {
    test_token_keys()
        .issue(user_id)
        .expect("failed to issue test token")
}

async fn setup_user(db: &TestDatabase, email: &str) -> TestUser {
    let keys = test_token_keys();
    create_test_user(db.pool(), &keys, email, "Secret1").await
}

#[tokio::test]
#[serial]
async fn test_create_post() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "author@example.com").await;

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .json(&serde_json::json!({
            "title": "First post",
            "content": "Hello world"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["message"], "ok");
    assert!(body["result"].is_i64());
}

#[tokio::test]
#[serial]
async fn test_create_post_without_title() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "untitled@example.com").await;

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .json(&serde_json::json!({ "content": "No title here" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;
    let body: serde_json::Value = response.json();
    assert!(body["result"][0]["title"].is_null());
}

#[tokio::test]
#[serial]
async fn test_list_posts_with_count() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "lister@example.com").await;

    for n in 1..=3 {
        server
            .post("/post/")
            .add_header("Authorization", auth_header(&user.token))
            .json(&serde_json::json!({
                "title": format!("Post {}", n),
                "content": format!("Body {}", n)
            }))
            .await;
    }

    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 200);
    assert_eq!(body["message"], "ok");
    assert_eq!(body["count"], 3);
    let result = body["result"].as_array().unwrap();
    assert_eq!(result.len(), 3);
    // Oldest first
    assert_eq!(result[0]["title"], "Post 1");
    assert_eq!(result[2]["title"], "Post 3");
    assert!(result.iter().all(|post| post["user_id"] == user.id));
}

#[tokio::test]
#[serial]
async fn test_list_posts_empty() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "empty@example.com").await;

    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 0);
    assert_eq!(body["result"].as_array().unwrap().len(), 0);
}

#[tokio::test]
#[serial]
async fn test_list_reflects_new_post_after_cached_read() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "cache@example.com").await;

    // Prime the cache with an empty listing
    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 0);

    server
        .post("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .json(&serde_json::json!({ "content": "Fresh" }))
        .await;

    // The write dropped the cached listing
    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 1);
    assert_eq!(body["result"][0]["content"], "Fresh");
}

#[tokio::test]
#[serial]
async fn test_listings_are_scoped_to_owner() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let alice = setup_user(&db, "alice@example.com").await;
    let bob = setup_user(&db, "bob@example.com").await;

    server
        .post("/post/")
        .add_header("Authorization", auth_header(&alice.token))
        .json(&serde_json::json!({ "content": "Alice's post" }))
        .await;

    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&bob.token))
        .await;

    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
#[serial]
async fn test_delete_own_post() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "deleter@example.com").await;

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .json(&serde_json::json!({ "content": "Doomed" }))
        .await;
    let body: serde_json::Value = response.json();
    let post_id = body["result"].as_i64().unwrap();

    let response = server
        .delete(&format!("/post/{}/", post_id))
        .add_header("Authorization", auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), "");

    // Gone from the listing as well
    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&user.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 0);
}

#[tokio::test]
#[serial]
async fn test_delete_missing_post() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let user = setup_user(&db, "hopeful@example.com").await;

    let response = server
        .delete("/post/999999/")
        .add_header("Authorization", auth_header(&user.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 4040);
    assert_eq!(body["message"], "not ok");
    assert_eq!(body["result"], "Item not found");
}

#[tokio::test]
#[serial]
async fn test_delete_someone_elses_post() {
    let Some(db) = TestDatabase::try_new().await else {
        eprintln!("skipping: no test database available");
        return;
    };
    let server = create_test_server_with_pool(db.pool().clone());
    let owner = setup_user(&db, "owner@example.com").await;
    let intruder = setup_user(&db, "intruder@example.com").await;

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&owner.token))
        .json(&serde_json::json!({ "content": "Mine" }))
        .await;
    let body: serde_json::Value = response.json();
    let post_id = body["result"].as_i64().unwrap();

    let response = server
        .delete(&format!("/post/{}/", post_id))
        .add_header("Authorization", auth_header(&intruder.token))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 4003);
    assert_eq!(body["result"], "Not owner");

    // The post survives
    let response = server
        .get("/post/")
        .add_header("Authorization", auth_header(&owner.token))
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let server = create_test_server();

    let response = server
        .post("/post/")
        .json(&serde_json::json!({ "content": "Anonymous" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 4012);
}

#[tokio::test]
async fn test_create_post_requires_content() {
    let server = create_test_server();

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&token_for(1)))
        .json(&serde_json::json!({ "title": "All title, no body" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 400);
    let result = body["result"].as_array().unwrap();
    assert_eq!(result[0]["field"], "content");
    assert_eq!(result[0]["detail"], "field required");
}

#[tokio::test]
async fn test_create_post_rejects_blank_content() {
    let server = create_test_server();

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&token_for(1)))
        .json(&serde_json::json!({ "content": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let result = body["result"].as_array().unwrap();
    assert_eq!(result[0]["field"], "content");
}

#[tokio::test]
async fn test_create_post_rejects_long_title() {
    let server = create_test_server();

    let response = server
        .post("/post/")
        .add_header("Authorization", auth_header(&token_for(1)))
        .json(&serde_json::json!({
            "title": "x".repeat(300),
            "content": "Fine body"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    let result = body["result"].as_array().unwrap();
    assert_eq!(result[0]["field"], "title");
}

#[tokio::test]
async fn test_delete_rejects_non_numeric_id() {
    let server = create_test_server();

    let response = server
        .delete("/post/abc/")
        .add_header("Authorization", auth_header(&token_for(1)))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status_code"], 400);
    let result = body["result"].as_array().unwrap();
    assert_eq!(result[0]["field"], "post_id");
}
