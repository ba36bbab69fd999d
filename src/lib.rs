pub mod api;
pub mod config;
pub mod constants;
pub mod core;
pub mod infrastructure;
pub mod visualization;

pub use crate::core::balance_calculator::{compute_balances, validate_participants};
pub use crate::core::errors::SettleUpError;
pub use crate::core::models::{BalanceSummary, Participant, ParticipantWithBalance, Settlement, SettlementPlan};
pub use crate::core::services::{EngineOptions, SettlementService};
pub use crate::core::settlement_reducer::{
    ReductionStrategy, calculate_settlement_plan, generate_settlements, generate_settlements_with,
};
pub use crate::infrastructure::logging::in_memory::InMemoryLogging;
pub use crate::infrastructure::storage::in_memory::InMemoryStorage;
pub use crate::visualization::Visualization;

#[cfg(test)]
mod tests;
