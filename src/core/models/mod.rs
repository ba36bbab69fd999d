pub mod audit;
pub mod ledger;
pub mod participant;
pub mod settlement;
pub mod summary;

pub use audit::AppLog;
pub use ledger::{BalanceRecord, Debt};
pub use participant::{Participant, ParticipantWithBalance};
pub use settlement::Settlement;
pub use summary::{BalanceSummary, SettlementPlan};
