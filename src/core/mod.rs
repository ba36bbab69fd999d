pub mod balance_calculator;
pub mod errors;
pub mod models;
pub mod rounding;
pub mod services;
pub mod settlement_reducer;
