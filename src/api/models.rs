use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::errors::SettleUpError;
use crate::core::models::Participant;
use crate::core::settlement_reducer::ReductionStrategy;

// Request structs for JSON payloads
#[derive(Deserialize, Serialize, ToSchema)]
pub struct ComputeBalancesRequest {
    pub participants: Vec<Participant>,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct CalculateSettlementsRequest {
    pub participants: Vec<Participant>,
    pub strategy: Option<ReductionStrategy>,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct RecordExpenseRequest {
    pub participants: Vec<Participant>,
    pub recorded_by_id: Option<String>,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct RecordPaymentRequest {
    pub from_user_id: String,
    pub to_user_id: String,
    pub amount: f64,
    pub recorded_by_id: Option<String>,
}

#[derive(Deserialize, Serialize, ToSchema)]
pub struct BalanceChartRequest {
    pub participants: Vec<Participant>,
    pub title: Option<String>,
}

// Error response struct
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

// Newtype wrapper for SettleUpError to implement IntoResponse
pub struct ApiError(pub SettleUpError);

impl From<SettleUpError> for ApiError {
    fn from(err: SettleUpError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, error_message) = match self.0 {
            SettleUpError::EmptyParticipantId => (StatusCode::BAD_REQUEST, "Participant id is required".to_string()),
            SettleUpError::NegativeAmount(id) => (
                StatusCode::BAD_REQUEST,
                format!("Participant {} has a negative amount paid", id),
            ),
            SettleUpError::NonFiniteAmount(id) => (
                StatusCode::BAD_REQUEST,
                format!("Participant {} has a non-finite amount paid", id),
            ),
            SettleUpError::DuplicateParticipant(id) => (
                StatusCode::BAD_REQUEST,
                format!("Participant {} appears more than once", id),
            ),
            SettleUpError::SelfSettlement => (StatusCode::BAD_REQUEST, "Cannot create settlement to self".to_string()),
            SettleUpError::InvalidSettlementAmount => (
                StatusCode::BAD_REQUEST,
                "Settlement amount must be positive".to_string(),
            ),
            SettleUpError::InvalidInput(field, msg) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid input for {}: {}", field, msg.description),
            ),
            SettleUpError::NoBalancesAvailable => (StatusCode::BAD_REQUEST, "No balances available".to_string()),
            SettleUpError::GroupNotFound(id) => (StatusCode::NOT_FOUND, format!("Group {} not found", id)),
            SettleUpError::StorageError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Storage error: {}", msg)),
            SettleUpError::LoggingError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, format!("Logging error: {}", msg)),
        };
        (status, Json(ErrorResponse { error: error_message })).into_response()
    }
}
