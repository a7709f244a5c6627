use crate::{account::Account, decimal::PositiveDecimal, error::LedgerError, ledger::Ledger};
use rust_decimal::Decimal;

/// Account that may be withdrawn below zero, down to `-limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverdraftAccount {
    inner: Account,
    limit: PositiveDecimal,
}

impl OverdraftAccount {
    pub fn new(initial_balance: Decimal, limit: PositiveDecimal) -> Self {
        OverdraftAccount {
            inner: Account::new(initial_balance),
            limit,
        }
    }

    pub fn limit(&self) -> PositiveDecimal {
        self.limit
    }
}

impl Ledger for OverdraftAccount {
    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.inner.deposit(amount)
    }

    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.inner.withdraw_within(amount, *self.limit)
    }

    fn account(&self) -> &Account {
        &self.inner
    }
}
