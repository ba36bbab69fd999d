use crate::{
    api::models::*,
    core::{
        models::{AppLog, BalanceRecord, BalanceSummary, Settlement, SettlementPlan},
        services::{SettlementService, UserBalancesResponse},
    },
    infrastructure::{logging::in_memory::InMemoryLogging, storage::in_memory::InMemoryStorage},
    visualization::Visualization,
};
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{get, post},
};
use serde_json::Value;
use std::sync::Arc;

pub type SharedService = Arc<SettlementService<InMemoryLogging, InMemoryStorage>>;

// Define API routes
pub fn api_routes(service: SharedService) -> Router {
    Router::new()
        .route("/balances/compute", post(compute_balances))
        .route("/settlements/calculate", post(calculate_settlements))
        .route("/groups/{group_id}/expenses", post(record_expense))
        .route("/groups/{group_id}/payments", post(record_payment))
        .route("/groups/{group_id}/ledger", get(get_group_ledger))
        .route("/groups/{group_id}/settlements/simplified", get(simplify_group_debts))
        .route("/groups/{group_id}/members/{user_id}/balances", get(get_user_balances))
        .route("/groups/{group_id}/chart", get(get_group_chart))
        .route("/charts/balances", post(generate_balance_chart))
        .route("/groups/{group_id}/logs", get(get_group_logs))
        .route("/logs", get(get_app_logs))
        .with_state(service)
}

#[utoipa::path(
    post,
    path = "/api/balances/compute",
    request_body = ComputeBalancesRequest,
    responses(
        (status = 200, description = "Balances computed successfully", body = BalanceSummary),
        (status = 400, description = "Invalid participants", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn compute_balances(
    State(service): State<SharedService>,
    Json(req): Json<ComputeBalancesRequest>,
) -> Result<Json<BalanceSummary>, ApiError> {
    let summary = service.compute_balances(&req.participants).await?;
    Ok(Json(summary))
}

#[utoipa::path(
    post,
    path = "/api/settlements/calculate",
    request_body = CalculateSettlementsRequest,
    responses(
        (status = 200, description = "Settlement plan calculated successfully", body = SettlementPlan),
        (status = 400, description = "Invalid participants", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn calculate_settlements(
    State(service): State<SharedService>,
    Json(req): Json<CalculateSettlementsRequest>,
) -> Result<Json<SettlementPlan>, ApiError> {
    let plan = service.calculate_settlements(&req.participants, req.strategy).await?;
    Ok(Json(plan))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/expenses",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    request_body = RecordExpenseRequest,
    responses(
        (status = 200, description = "Expense recorded and ledger updated", body = SettlementPlan),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_expense(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    Json(req): Json<RecordExpenseRequest>,
) -> Result<Json<SettlementPlan>, ApiError> {
    let plan = service
        .record_expense(&group_id, &req.participants, req.recorded_by_id.as_deref())
        .await?;
    Ok(Json(plan))
}

#[utoipa::path(
    post,
    path = "/api/groups/{group_id}/payments",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    request_body = RecordPaymentRequest,
    responses(
        (status = 200, description = "Payment recorded", body = BalanceRecord),
        (status = 400, description = "Invalid payment", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn record_payment(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
    Json(req): Json<RecordPaymentRequest>,
) -> Result<Json<BalanceRecord>, ApiError> {
    let record = service
        .record_payment(
            &group_id,
            &req.from_user_id,
            &req.to_user_id,
            req.amount,
            req.recorded_by_id.as_deref(),
        )
        .await?;
    Ok(Json(record))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/ledger",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Pairwise ledger retrieved successfully", body = Vec<BalanceRecord>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_group_ledger(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<BalanceRecord>>, ApiError> {
    let records = service.get_group_ledger(&group_id).await?;
    Ok(Json(records))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/settlements/simplified",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Minimal transfers for the group ledger", body = Vec<Settlement>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn simplify_group_debts(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<Settlement>>, ApiError> {
    let settlements = service.simplify_group_debts(&group_id).await?;
    Ok(Json(settlements))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/members/{user_id}/balances",
    params(
        ("group_id" = String, Path, description = "ID of the group"),
        ("user_id" = String, Path, description = "ID of the member")
    ),
    responses(
        (status = 200, description = "User balances retrieved successfully", body = UserBalancesResponse),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_user_balances(
    State(service): State<SharedService>,
    Path((group_id, user_id)): Path<(String, String)>,
) -> Result<Json<UserBalancesResponse>, ApiError> {
    let balances = service.get_user_balances(&group_id, &user_id).await?;
    Ok(Json(balances))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/chart",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Chart.js configuration for the group ledger", body = serde_json::Value),
        (status = 400, description = "No balances to chart", body = ErrorResponse),
        (status = 404, description = "Group not found", body = ErrorResponse)
    )
)]
pub async fn get_group_chart(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let positions = service.get_group_positions(&group_id).await?;
    let chart = Visualization::generate_ledger_chart(&positions, &format!("Balances for Group: {}", group_id))?;
    Ok(Json(chart))
}

#[utoipa::path(
    post,
    path = "/api/charts/balances",
    request_body = BalanceChartRequest,
    responses(
        (status = 200, description = "Chart.js configuration for the expense", body = serde_json::Value),
        (status = 400, description = "Invalid participants or nothing to chart", body = ErrorResponse)
    )
)]
pub async fn generate_balance_chart(
    State(service): State<SharedService>,
    Json(req): Json<BalanceChartRequest>,
) -> Result<Json<Value>, ApiError> {
    let summary = service.compute_balances(&req.participants).await?;
    let title = req.title.unwrap_or_else(|| "Expense Balances".to_string());
    let chart = Visualization::generate_balance_chart(&summary, &title)?;
    Ok(Json(chart))
}

#[utoipa::path(
    get,
    path = "/api/logs",
    responses(
        (status = 200, description = "Application logs retrieved successfully", body = Vec<AppLog>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_app_logs(State(service): State<SharedService>) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_app_logs().await?;
    Ok(Json(logs))
}

#[utoipa::path(
    get,
    path = "/api/groups/{group_id}/logs",
    params(
        ("group_id" = String, Path, description = "ID of the group")
    ),
    responses(
        (status = 200, description = "Audit trail of the group", body = Vec<AppLog>),
        (status = 404, description = "Group not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub async fn get_group_logs(
    State(service): State<SharedService>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<AppLog>>, ApiError> {
    let logs = service.get_group_logs(&group_id).await?;
    Ok(Json(logs))
}
