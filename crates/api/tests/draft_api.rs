//! HTTP-level tests for drafts, companies, import and export.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, delete_as, get, get_as, post_json_as, put_json_as};
use serde_json::json;
use sqlx::PgPool;

const OWNER: i64 = 21;
const STRANGER: i64 = 22;

async fn create_draft(pool: &PgPool, body: serde_json::Value) -> serde_json::Value {
    let response =
        post_json_as(build_test_app(pool.clone()), "/api/v1/drafts", OWNER, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn health_reports_database_and_layout(pool: PgPool) {
    let response = get(build_test_app(pool), "/health").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get("x-request-id").is_some());

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
    assert_eq!(json["booth_count"], 480);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_name_uses_default(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "   "})).await;
    assert_eq!(draft["name"], "Untitled Draft");

    let draft = create_draft(&pool, json!({})).await;
    assert_eq!(draft["name"], "Untitled Draft");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn drafts_of_other_owners_are_hidden(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Mine"})).await;
    let uri = format!("/api/v1/drafts/{}", draft["id"]);

    let response = get_as(build_test_app(pool.clone()), &uri, STRANGER).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_as(build_test_app(pool.clone()), &uri, STRANGER).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = get_as(build_test_app(pool), "/api/v1/drafts", STRANGER).await;
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rename_and_delete_draft(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Before"})).await;
    let uri = format!("/api/v1/drafts/{}", draft["id"]);

    let app = build_test_app(pool.clone());
    let response = put_json_as(app, &uri, OWNER, json!({"name": "After"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "After");

    let app = build_test_app(pool.clone());
    let response = put_json_as(app, &uri, OWNER, json!({"name": ""})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = delete_as(build_test_app(pool.clone()), &uri, OWNER).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_as(build_test_app(pool), &uri, OWNER).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_company_name_is_409(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Fair"})).await;
    let uri = format!("/api/v1/drafts/{}/companies", draft["id"]);
    let body = json!({"name": "Acme", "sponsorship": "GOLD", "days": ["WEDNESDAY"]});

    let response = post_json_as(build_test_app(pool.clone()), &uri, OWNER, body.clone()).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json_as(build_test_app(pool), &uri, OWNER, body).await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_company_name_is_rejected_on_create(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Fair"})).await;
    let uri = format!("/api/v1/drafts/{}/companies", draft["id"]);

    let body = json!({"name": "   ", "sponsorship": "GOLD", "days": ["WEDNESDAY"]});
    let response = post_json_as(build_test_app(pool.clone()), &uri, OWNER, body).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json!({"name": "  Acme  ", "sponsorship": "GOLD", "days": ["WEDNESDAY"]});
    let response = post_json_as(build_test_app(pool.clone()), &uri, OWNER, body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["data"]["name"], "Acme");

    let listed = body_json(get_as(build_test_app(pool), &uri, OWNER).await).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 1);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_company_name_is_rejected_on_update(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Fair"})).await;
    let uri = format!("/api/v1/drafts/{}/companies", draft["id"]);
    let body = json!({"name": "Acme", "sponsorship": "GOLD", "days": ["WEDNESDAY"]});
    let response = post_json_as(build_test_app(pool.clone()), &uri, OWNER, body).await;
    let company = body_json(response).await["data"].clone();
    let company_uri = format!("/api/v1/companies/{}", company["id"]);

    let response =
        put_json_as(build_test_app(pool.clone()), &company_uri, OWNER, json!({"name": "  "})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response =
        put_json_as(build_test_app(pool.clone()), &company_uri, OWNER, json!({"name": " Globex "}))
            .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["name"], "Globex");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn import_then_export_round_trip(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Fair"})).await;
    let draft_id = draft["id"].as_i64().unwrap();

    let response = post_json_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/import"),
        OWNER,
        json!({"rows": [
            ["Company", "Registration"],
            ["Globex", "Gold Two-Day [$5500.00]"],
            ["Acme", "Basic One-Day: Wednesday, January 28th [$1000.00]"],
            ["Initech", "Mystery"],
        ]}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["created"], 2);
    assert_eq!(json["data"]["updated"], 0);
    assert_eq!(json["data"]["total"], 2);
    assert_eq!(
        json["data"]["errors"],
        json!(["Row 4: could not parse sponsorship \"Mystery\""])
    );

    let response = get_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/companies"),
        OWNER,
    )
    .await;
    let companies = body_json(response).await["data"].clone();
    let acme = companies[0]["id"].as_i64().unwrap();
    let globex = companies[1]["id"].as_i64().unwrap();

    for (company_id, booths) in [(acme, json!(["B-2"])), (globex, json!(["A-2", "A-1"]))] {
        let response = post_json_as(
            build_test_app(pool.clone()),
            "/api/v1/assignments",
            OWNER,
            json!({"company_id": company_id, "draft_id": draft_id, "booth_ids": booths}),
        )
        .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/export"),
        OWNER,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"],
        json!([
            {"name": "Globex", "days_registered": "Wednesday Thursday", "assignment": "A1, A2"},
            {"name": "Acme", "days_registered": "Wednesday", "assignment": "B2"},
        ])
    );

    let response = get_as(
        build_test_app(pool),
        &format!("/api/v1/drafts/{draft_id}/export?day=THURSDAY"),
        OWNER,
    )
    .await;
    let rows = body_json(response).await["data"].clone();
    assert_eq!(rows.as_array().unwrap().len(), 1);
    assert_eq!(rows[0]["name"], "Globex");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn duplicate_draft_copies_assignments(pool: PgPool) {
    let draft = create_draft(&pool, json!({"name": "Fair"})).await;
    let draft_id = draft["id"].as_i64().unwrap();

    let response = post_json_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/companies"),
        OWNER,
        json!({"name": "Acme", "sponsorship": "SILVER", "days": ["THURSDAY"]}),
    )
    .await;
    let acme = body_json(response).await["data"]["id"].as_i64().unwrap();
    post_json_as(
        build_test_app(pool.clone()),
        "/api/v1/assignments",
        OWNER,
        json!({"company_id": acme, "draft_id": draft_id, "booth_ids": ["K-9"]}),
    )
    .await;

    let response = post_json_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{draft_id}/duplicate"),
        OWNER,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let copy = body_json(response).await["data"].clone();
    assert_eq!(copy["name"], "Fair (Copy)");

    let response = get_as(
        build_test_app(pool.clone()),
        &format!("/api/v1/drafts/{}", copy["id"]),
        OWNER,
    )
    .await;
    let detail = body_json(response).await["data"].clone();
    assert_eq!(detail["companies"].as_array().unwrap().len(), 1);
    assert_eq!(detail["assignments"][0]["booth_ids"], json!(["K-9"]));
    assert_eq!(detail["assignments"][0]["day"], "THURSDAY");
    assert_eq!(detail["assignments"][0]["company_id"], detail["companies"][0]["id"]);

    let response = get_as(build_test_app(pool), "/api/v1/drafts", OWNER).await;
    let list = body_json(response).await["data"].clone();
    assert_eq!(list.as_array().unwrap().len(), 2);
    assert_eq!(list[0]["assignment_count"], 1);
    assert_eq!(list[1]["assignment_count"], 1);
}
