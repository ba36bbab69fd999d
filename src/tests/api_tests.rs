use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use crate::api::handlers::api_routes;
use crate::api::models::ErrorResponse;
use crate::core::models::{BalanceRecord, BalanceSummary, Settlement, SettlementPlan};
use crate::tests::create_test_service;

fn test_app() -> Router {
    api_routes(Arc::new(create_test_service()))
}

fn post_json(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().method("GET").uri(uri).body(Body::empty()).unwrap()
}

async fn body_json<T: serde::de::DeserializeOwned>(resp: axum::response::Response) -> T {
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_calculate_settlements_endpoint() {
    let resp = test_app()
        .oneshot(post_json(
            "/settlements/calculate",
            r#"{"participants":[{"id":"a","name":"Alice","amount_paid":500},{"id":"b","name":"Bob"}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let plan: SettlementPlan = body_json(resp).await;
    assert_eq!(plan.participant_count, 2);
    assert_eq!(plan.individual_share, 250.0);
    assert_eq!(plan.settlements.len(), 1);
    assert_eq!(plan.settlements[0].description, "Bob pays 250.00 to Alice");
}

#[tokio::test]
async fn test_calculate_settlements_accepts_strategy() {
    let resp = test_app()
        .oneshot(post_json(
            "/settlements/calculate",
            r#"{"participants":[{"id":"a","name":"A","amount_paid":10},{"id":"b","name":"B"}],"strategy":"resort"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_compute_balances_rejects_negative_amount() {
    let resp = test_app()
        .oneshot(post_json(
            "/balances/compute",
            r#"{"participants":[{"id":"a","name":"Alice","amount_paid":-5}]}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: ErrorResponse = body_json(resp).await;
    assert_eq!(err.error, "Participant a has a negative amount paid");
}

#[tokio::test]
async fn test_compute_balances_empty_list() {
    let resp = test_app()
        .oneshot(post_json("/balances/compute", r#"{"participants":[]}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let summary: BalanceSummary = body_json(resp).await;
    assert_eq!(summary, BalanceSummary::default());
}

#[tokio::test]
async fn test_unknown_group_returns_404() {
    let resp = test_app().oneshot(get("/groups/nowhere/ledger")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_expense_then_payment_flow() {
    let app = test_app();

    let resp = app
        .clone()
        .oneshot(post_json(
            "/groups/trip/expenses",
            r#"{"participants":[{"id":"a","name":"Alice","amount_paid":90},{"id":"b","name":"Bob"},{"id":"c","name":"Carol"}],"recorded_by_id":"a"}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let resp = app
        .clone()
        .oneshot(post_json(
            "/groups/trip/payments",
            r#"{"from_user_id":"b","to_user_id":"a","amount":30}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let record: BalanceRecord = body_json(resp).await;
    assert_eq!(record.debt(), None);

    let resp = app
        .clone()
        .oneshot(get("/groups/trip/settlements/simplified"))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let settlements: Vec<Settlement> = body_json(resp).await;
    assert_eq!(settlements.len(), 1);
    assert_eq!(settlements[0].description, "Carol pays 30.00 to Alice");

    let resp = app.clone().oneshot(get("/groups/trip/chart")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let chart: Value = body_json(resp).await;
    assert_eq!(chart["data"]["labels"], serde_json::json!(["Alice", "Bob", "Carol"]));

    let resp = app.oneshot(get("/logs")).await.unwrap();
    let logs: Vec<Value> = body_json(resp).await;
    assert_eq!(logs.len(), 3);
}

#[tokio::test]
async fn test_self_payment_is_rejected() {
    let app = test_app();
    app.clone()
        .oneshot(post_json(
            "/groups/g/expenses",
            r#"{"participants":[{"id":"a","name":"A","amount_paid":10},{"id":"b","name":"B"}]}"#,
        ))
        .await
        .unwrap();

    let resp = app
        .oneshot(post_json(
            "/groups/g/payments",
            r#"{"from_user_id":"a","to_user_id":"a","amount":5}"#,
        ))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let err: ErrorResponse = body_json(resp).await;
    assert_eq!(err.error, "Cannot create settlement to self");
}

#[tokio::test]
async fn test_balance_chart_without_participants() {
    let resp = test_app()
        .oneshot(post_json("/charts/balances", r#"{"participants":[]}"#))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_group_logs_endpoint() {
    let app = test_app();
    let resp = app.clone().oneshot(get("/groups/trip/logs")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    app.clone()
        .oneshot(post_json(
            "/groups/trip/expenses",
            r#"{"participants":[{"id":"a","name":"Alice","amount_paid":40},{"id":"b","name":"Bob"}],"recorded_by_id":"a"}"#,
        ))
        .await
        .unwrap();

    let resp = app.oneshot(get("/groups/trip/logs")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let logs: Vec<Value> = body_json(resp).await;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0]["action"], "EXPENSE_RECORDED");
    assert_eq!(logs[0]["group_id"], "trip");
}
