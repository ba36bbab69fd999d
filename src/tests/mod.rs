mod api_tests;
mod property_tests;
mod visualization_tests;

use crate::core::models::Participant;
use crate::core::services::{EngineOptions, SettlementService};
use crate::infrastructure::logging::in_memory::InMemoryLogging;
use crate::infrastructure::storage::in_memory::InMemoryStorage;

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

pub fn create_test_service() -> SettlementService<InMemoryLogging, InMemoryStorage> {
    create_service_with(EngineOptions::default())
}

pub fn create_service_with(options: EngineOptions) -> SettlementService<InMemoryLogging, InMemoryStorage> {
    init_tracing();
    let storage = InMemoryStorage::new();
    let logging = InMemoryLogging::new();
    SettlementService::new(storage, logging, options)
}

pub fn member(id: &str, name: &str, amount_paid: f64) -> Participant {
    Participant::new(id, name, amount_paid, true)
}

pub fn bystander(id: &str, name: &str, amount_paid: f64) -> Participant {
    Participant::new(id, name, amount_paid, false)
}
