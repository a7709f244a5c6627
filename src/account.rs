use crate::{
    decimal::{format_currency, PositiveDecimal},
    error::LedgerError,
    ledger::Ledger,
    txn::{Transaction, TxnKind},
};
use rust_decimal::Decimal;

pub const REPORT_FOOTER: &str = "--- End of Report ---";
pub const NO_TRANSACTIONS: &str = "No transactions recorded.";

/// Running balance plus the append-only log of every accepted change.
/// Invariant: `balance == opening balance + sum of type adjusted amounts in txns`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    balance: Decimal,
    txns: Vec<Transaction>,
}

impl Account {
    /// Opening balance is taken as given, including zero or negative values.
    pub fn new(initial_balance: Decimal) -> Self {
        Account {
            balance: initial_balance,
            txns: Vec::new(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.txns
    }

    /// Withdrawal checks shared by account variants; `overdraft` is how far below zero the balance may go.
    pub(crate) fn withdraw_within(
        &mut self,
        amount: Decimal,
        overdraft: Decimal,
    ) -> Result<(), LedgerError> {
        let amount: PositiveDecimal = amount.try_into()?;
        // past Decimal::MAX every representable amount is covered
        let available = self.balance.checked_add(overdraft).unwrap_or(Decimal::MAX);
        if *amount > available {
            return Err(LedgerError::InsufficientFunds {
                requested: *amount,
                available,
            });
        }
        self.record(TxnKind::Withdrawal, amount)
    }

    fn record(&mut self, kind: TxnKind, amount: PositiveDecimal) -> Result<(), LedgerError> {
        let txn = Transaction::new(kind, amount);
        self.balance = self
            .balance
            .checked_add(txn.type_adjusted_amount())
            .ok_or(LedgerError::BalanceOverflow { amount: *amount })?;
        self.txns.push(txn);
        Ok(())
    }

    pub fn report(&self) -> Vec<String> {
        let mut lines = Vec::with_capacity(self.txns.len() + 2);
        lines.push(format!(
            "--- Transaction Report for Account (Balance: ${}) ---",
            format_currency(&self.balance)
        ));
        if self.txns.is_empty() {
            lines.push(NO_TRANSACTIONS.to_owned());
        } else {
            lines.extend(self.txns.iter().map(Transaction::report));
        }
        lines.push(REPORT_FOOTER.to_owned());
        lines
    }
}

impl Ledger for Account {
    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        let amount: PositiveDecimal = amount.try_into()?;
        self.record(TxnKind::Deposit, amount)
    }

    /// Rejects anything that would take the balance below zero.
    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError> {
        self.withdraw_within(amount, Decimal::ZERO)
    }

    fn account(&self) -> &Account {
        self
    }
}
