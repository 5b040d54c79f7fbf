mod common;

use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use serde_json::{Value, json};
use user_directory::api::routes::user_routes;
use user_directory::routes::{app_router, pipeline};

/// Handler that fails like unanticipated application code would.
async fn boom() -> &'static str {
    panic!("simulated handler fault")
}

/// Builds a test server running the full three-stage pipeline, with an extra
/// `/boom` route for exercising the containment stage.
fn make_server() -> TestServer {
    let state = common::create_test_state();
    let app = pipeline(user_routes().route("/boom", get(boom)), state);
    TestServer::new(app).unwrap()
}

// ─── Token validation ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_missing_authorization_header() {
    let server = make_server();

    let response = server.get("/users").await;

    response.assert_status_unauthorized();
    assert_eq!(response.text(), "Unauthorized: Missing or invalid token.");
}

#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let server = make_server();

    let response = server
        .get("/users")
        .add_header("Authorization", "Basic abc123")
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.text(), "Unauthorized: Missing or invalid token.");
}

#[tokio::test]
async fn test_wrong_token_rejected() {
    let server = make_server();

    let response = server
        .get("/users")
        .add_header("Authorization", common::bearer("some-other-token"))
        .await;

    response.assert_status_unauthorized();
    assert_eq!(response.text(), "Unauthorized: Token validation failed.");
}

#[tokio::test]
async fn test_unauthorized_request_never_reaches_the_store() {
    let server = make_server();

    server
        .post("/users")
        .json(&json!({ "username": "alice", "userage": 25 }))
        .await
        .assert_status_unauthorized();

    // No state change happened behind the rejection.
    let response = server
        .get("/users")
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>(), json!([]));
}

#[tokio::test]
async fn test_valid_token_passes_through() {
    let server = make_server();

    let response = server
        .get("/users")
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status_ok();
}

// ─── Exception containment ───────────────────────────────────────────────────

#[tokio::test]
async fn test_handler_panic_becomes_fixed_500() {
    let server = make_server();

    let response = server
        .get("/boom")
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({ "error": "Internal server error." })
    );
}

#[tokio::test]
async fn test_service_survives_a_contained_panic() {
    let server = make_server();

    server
        .get("/boom")
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    // Subsequent requests are served normally.
    let response = server
        .post("/users")
        .add_header("Authorization", common::bearer(common::TEST_TOKEN))
        .json(&json!({ "username": "alice", "userage": 25 }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_token_validation_runs_before_the_handler() {
    let server = make_server();

    // Without credentials even a faulting route short-circuits at stage 2.
    let response = server.get("/boom").await;

    response.assert_status_unauthorized();
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_full_crud_scenario() {
    let state = common::create_test_state();
    let server = TestServer::new(app_router(state)).unwrap();
    let auth = common::bearer(common::TEST_TOKEN);

    // Start empty, create alice.
    let response = server
        .post("/users")
        .add_header("Authorization", auth.clone())
        .json(&json!({ "username": "alice", "userage": 25 }))
        .await;
    response.assert_status(StatusCode::CREATED);
    assert_eq!(response.json::<Value>()["id"], 1);

    // Read her back.
    let response = server
        .get("/users/1")
        .add_header("Authorization", auth.clone())
        .await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>(),
        json!({ "id": 1, "username": "alice", "userage": 25 })
    );

    // The username is taken.
    server
        .post("/users")
        .add_header("Authorization", auth.clone())
        .json(&json!({ "username": "alice", "userage": 30 }))
        .await
        .assert_status_bad_request();

    // Delete her, then the id is gone.
    let response = server
        .delete("/users/1")
        .add_header("Authorization", auth.clone())
        .await;
    response.assert_status_ok();
    assert_eq!(response.text(), "User deleted");

    server
        .get("/users/1")
        .add_header("Authorization", auth)
        .await
        .assert_status_not_found();
}
