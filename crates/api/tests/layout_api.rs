//! HTTP-level tests for the public layout endpoints.
//!
//! These read only the in-memory booth index, so the router is built over a
//! lazily connecting pool and no database is required.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_offline_app, get, post_json};
use serde_json::json;

#[tokio::test]
async fn layout_lists_every_booth_with_canvas_size() {
    let response = get(build_offline_app(), "/api/v1/layout").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let booths = json["data"]["booths"].as_array().unwrap();
    assert_eq!(booths.len(), 480);
    assert_eq!(json["data"]["canvas"]["width"], 1992);
    assert_eq!(json["data"]["canvas"]["height"], 868);

    let q15 = booths.iter().find(|b| b["id"] == "Q-15").unwrap();
    assert_eq!(q15["x"], 40);
    assert_eq!(q15["y"], 40);
    assert_eq!(q15["segment"], 2);
}

#[tokio::test]
async fn locate_resolves_row_and_segment() {
    let response = get(build_offline_app(), "/api/v1/layout/locate?x=50&y=50").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["row"], "Q");
    assert_eq!(json["data"]["segment"], 2);
}

#[tokio::test]
async fn locate_outside_rows_returns_null() {
    let response = get(build_offline_app(), "/api/v1/layout/locate?x=5&y=50").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn suggest_skips_occupied_booths() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/layout/suggest",
        json!({
            "row": "G",
            "segment": 3,
            "count": 2,
            "target_y": 40.0,
            "occupied": ["G-16"],
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!(["G-17", "G-18"]));
}

#[tokio::test]
async fn suggest_returns_null_when_segment_cannot_fit() {
    let response = post_json(
        build_offline_app(),
        "/api/v1/layout/suggest",
        json!({
            "row": "A",
            "segment": 3,
            "count": 1,
            "target_y": 100.0,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"].is_null());
}

#[tokio::test]
async fn group_centres_on_booth() {
    let response = get(build_offline_app(), "/api/v1/layout/group?booth_id=G-18&count=3").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"], json!(["G-17", "G-18", "G-19"]));
}

#[tokio::test]
async fn draft_routes_require_a_token() {
    let response = get(build_offline_app(), "/api/v1/drafts").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}
