use crate::txn::TxnKind;
use rust_decimal::Decimal;

/// A requested balance change. Amounts are unvalidated; the ledger decides whether to accept them.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum LedgerEvent {
    Deposit { amount: Decimal },
    Withdrawal { amount: Decimal },
}

impl LedgerEvent {
    pub fn kind(&self) -> TxnKind {
        match self {
            LedgerEvent::Deposit { .. } => TxnKind::Deposit,
            LedgerEvent::Withdrawal { .. } => TxnKind::Withdrawal,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self {
            LedgerEvent::Deposit { amount } | LedgerEvent::Withdrawal { amount } => *amount,
        }
    }
}
