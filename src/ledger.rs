use crate::{account::Account, error::LedgerError, types::LedgerEvent};
use rust_decimal::Decimal;
use tracing::{debug, warn};

/// Single-account ledger.
/// `withdraw` is the point where account variants differ; everything else reads through `account()`.
pub trait Ledger {
    fn deposit(&mut self, amount: Decimal) -> Result<(), LedgerError>;

    fn withdraw(&mut self, amount: Decimal) -> Result<(), LedgerError>;

    fn account(&self) -> &Account;

    fn balance(&self) -> Decimal {
        self.account().balance()
    }

    fn report(&self) -> Vec<String> {
        self.account().report()
    }

    fn apply(&mut self, event: LedgerEvent) -> Result<(), LedgerError> {
        match event {
            LedgerEvent::Deposit { amount } => self.deposit(amount),
            LedgerEvent::Withdrawal { amount } => self.withdraw(amount),
        }
    }

    /// Applies the event, reporting any rejection as a diagnostic instead of returning it.
    fn submit(&mut self, event: LedgerEvent) -> bool {
        match self.apply(event) {
            Ok(()) => {
                debug!(kind = %event.kind(), amount = %event.amount(), balance = %self.balance(), "Transaction recorded");
                true
            }
            Err(err) => {
                warn!(?err, "{} failed: {err}", event.kind());
                false
            }
        }
    }
}
