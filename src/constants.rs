/// Balances and remainders closer to zero than this are treated as settled.
pub const SETTLEMENT_TOLERANCE: f64 = 0.01;

/// Decimal places used when rounding transfer amounts.
pub const AMOUNT_DECIMALS: i32 = 2;

/// Largest amount a single payment may carry.
pub const MAX_PAYMENT_AMOUNT: f64 = 1_000_000.0;

pub const MAX_ID_LENGTH: usize = 128;

// Audit log actions
pub const BALANCES_COMPUTED: &str = "BALANCES_COMPUTED";
pub const SETTLEMENTS_CALCULATED: &str = "SETTLEMENTS_CALCULATED";
pub const EXPENSE_RECORDED: &str = "EXPENSE_RECORDED";
pub const PAYMENT_RECORDED: &str = "PAYMENT_RECORDED";
pub const LEDGER_SIMPLIFIED: &str = "LEDGER_SIMPLIFIED";
pub const BALANCE_QUERIED: &str = "BALANCE_QUERIED";
