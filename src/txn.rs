use crate::decimal::{format_currency, PositiveDecimal};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxnKind {
    Deposit,
    Withdrawal,
}

impl fmt::Display for TxnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TxnKind::Deposit => f.write_str("Deposit"),
            TxnKind::Withdrawal => f.write_str("Withdrawal"),
        }
    }
}

/// A completed ledger event. Only created once the owning account accepted the operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    kind: TxnKind,
    amount: PositiveDecimal,
}

impl Transaction {
    pub fn new(kind: TxnKind, amount: PositiveDecimal) -> Self {
        Transaction { kind, amount }
    }

    pub fn kind(&self) -> TxnKind {
        self.kind
    }

    pub fn amount(&self) -> PositiveDecimal {
        self.amount
    }

    /// Signed effect of this transaction on the balance.
    pub fn type_adjusted_amount(&self) -> rust_decimal::Decimal {
        match self.kind {
            TxnKind::Deposit => *self.amount,
            TxnKind::Withdrawal => -*self.amount,
        }
    }

    pub fn report(&self) -> String {
        format!("[{}] Amount: ${}", self.kind, format_currency(&self.amount))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_report_line() {
        let txn = Transaction::new(TxnKind::Deposit, dec!(15.5).try_into().unwrap());
        assert_eq!(txn.report(), "[Deposit] Amount: $15.50");

        let txn = Transaction::new(TxnKind::Withdrawal, dec!(200).try_into().unwrap());
        assert_eq!(txn.report(), "[Withdrawal] Amount: $200.00");
    }

    #[test]
    fn test_type_adjusted_amount() {
        let amount: PositiveDecimal = dec!(12.34).try_into().unwrap();
        assert_eq!(
            Transaction::new(TxnKind::Deposit, amount).type_adjusted_amount(),
            dec!(12.34)
        );
        assert_eq!(
            Transaction::new(TxnKind::Withdrawal, amount).type_adjusted_amount(),
            dec!(-12.34)
        );
    }
}
