//! HTTP-level tests for checked booth assignment writes.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_as, get_as, post_json_as, put_json_as};
use serde_json::{json, Value};
use sqlx::PgPool;

const OWNER: i64 = 11;
const STRANGER: i64 = 12;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn both_days() -> Value {
    json!(["WEDNESDAY", "THURSDAY"])
}

async fn create_draft(pool: &PgPool) -> i64 {
    let response = post_json_as(
        build_test_app(pool.clone()),
        "/api/v1/drafts",
        OWNER,
        json!({"name": "Spring Fair"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_company(pool: &PgPool, draft_id: i64, name: &str, tier: &str, days: Value) -> i64 {
    let response = post_json_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/companies"),
        OWNER,
        json!({"name": name, "sponsorship": tier, "days": days}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn assign(pool: &PgPool, body: Value) -> axum::http::Response<axum::body::Body> {
    post_json_as(build_test_app(pool.clone()), "/api/v1/assignments", OWNER, body).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn overlapping_assignment_returns_409_naming_holder(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "GOLD", both_days()).await;
    let globex = create_company(&pool, draft_id, "Globex", "GOLD", json!(["WEDNESDAY"])).await;

    let response = assign(
        &pool,
        json!({
            "company_id": acme,
            "draft_id": draft_id,
            "booth_ids": ["G-14", "G-15"],
            "day": null,
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = assign(
        &pool,
        json!({
            "company_id": globex,
            "draft_id": draft_id,
            "booth_ids": ["G-15", "G-16"],
            "day": "WEDNESDAY",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(json["error"], "Booth conflict: G15 is assigned to Acme");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn omitted_day_follows_company_registration(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "BASIC", json!(["THURSDAY"])).await;

    let response = assign(
        &pool,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["C-3"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["day"], "THURSDAY");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn wrong_booth_count_is_rejected(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "MAROON", both_days()).await;

    let response = assign(
        &pool,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["G-14", "G-15"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn day_outside_registration_is_rejected(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "BASIC", json!(["WEDNESDAY"])).await;

    let response = assign(
        &pool,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["C-3"], "day": "THURSDAY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn foreign_draft_is_not_found(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "BASIC", json!(["WEDNESDAY"])).await;

    let response = post_json_as(
        build_test_app(pool.clone()),
        "/api/v1/assignments",
        STRANGER,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["C-3"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Move / delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn move_and_day_change_are_checked(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "GOLD", both_days()).await;
    let globex = create_company(&pool, draft_id, "Globex", "BASIC", json!(["WEDNESDAY"])).await;

    let response = assign(
        &pool,
        json!({
            "company_id": acme,
            "draft_id": draft_id,
            "booth_ids": ["G-14", "G-15"],
            "day": "THURSDAY",
        }),
    )
    .await;
    let acme_assignment = body_json(response).await["data"]["id"].as_i64().unwrap();
    let response = assign(
        &pool,
        json!({
            "company_id": globex,
            "draft_id": draft_id,
            "booth_ids": ["G-13"],
            "day": "WEDNESDAY",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    // Overlaps its own booths and Globex's booth on a different day: allowed.
    let uri = format!("/api/v1/assignments/{acme_assignment}");
    let response = put_json_as(
        build_test_app(pool.clone()),
        &uri,
        OWNER,
        json!({"booth_ids": ["G-13", "G-14"]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    // Widening to both days now clashes with Globex on Wednesday.
    let app = build_test_app(pool.clone());
    let response = put_json_as(app, &uri, OWNER, json!({"day": null})).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_eq!(
        body_json(response).await["error"],
        "Booth conflict: G13 is assigned to Globex"
    );

    let response = delete_as(build_test_app(pool.clone()), &uri, OWNER).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_as(
        build_test_app(pool),
        &format!("/api/v1/drafts/{draft_id}/occupancy?day=THURSDAY"),
        OWNER,
    )
    .await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn preflight_reports_same_conflict(pool: PgPool) {
    let draft_id = create_draft(&pool).await;
    let acme = create_company(&pool, draft_id, "Acme", "GOLD", both_days()).await;
    assign(
        &pool,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["G-14", "G-15"]}),
    )
    .await;

    let response = post_json_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/conflicts"),
        OWNER,
        json!({"booth_ids": ["G-15", "G-16"], "day": "WEDNESDAY"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["booth_id"], "G-15");
    assert_eq!(json["data"]["company_name"], "Acme");

    let response = post_json_as(
        build_test_app(pool),
        &format!("/api/v1/drafts/{draft_id}/conflicts"),
        OWNER,
        json!({"booth_ids": ["G-16", "G-17"]}),
    )
    .await;
    assert!(body_json(response).await["data"].is_null());
}
