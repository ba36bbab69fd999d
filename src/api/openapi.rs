use utoipa::OpenApi;

use crate::{
    api::models::{
        BalanceChartRequest, CalculateSettlementsRequest, ComputeBalancesRequest, ErrorResponse, RecordExpenseRequest,
        RecordPaymentRequest,
    },
    core::{
        models::{
            AppLog, BalanceRecord, BalanceSummary, Debt, Participant, ParticipantWithBalance, Settlement,
            SettlementPlan,
        },
        services::UserBalancesResponse,
        settlement_reducer::ReductionStrategy,
    },
};

#[derive(OpenApi)]
#[openapi(
    paths(
        super::handlers::compute_balances,
        super::handlers::calculate_settlements,
        super::handlers::record_expense,
        super::handlers::record_payment,
        super::handlers::get_group_ledger,
        super::handlers::simplify_group_debts,
        super::handlers::get_user_balances,
        super::handlers::get_group_chart,
        super::handlers::generate_balance_chart,
        super::handlers::get_app_logs,
        super::handlers::get_group_logs
    ),
    components(schemas(
        ComputeBalancesRequest,
        CalculateSettlementsRequest,
        RecordExpenseRequest,
        RecordPaymentRequest,
        BalanceChartRequest,
        ErrorResponse,
        Participant,
        ParticipantWithBalance,
        Settlement,
        BalanceSummary,
        SettlementPlan,
        ReductionStrategy,
        BalanceRecord,
        Debt,
        AppLog,
        UserBalancesResponse
    )),
    info(
        title = "SettleUp API",
        description = "API for splitting shared expenses and settling group debts",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;
