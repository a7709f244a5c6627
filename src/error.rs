use rust_decimal::Decimal;
use std::path::PathBuf;
use thiserror::Error;

/// Rejections raised by ledger operations. None of these mutate the account.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("amount must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("applying {amount} would take the balance out of range")]
    BalanceOverflow { amount: Decimal },
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("could not write to {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
