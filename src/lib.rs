pub mod account;
pub mod config;
pub mod decimal;
pub mod error;
pub mod ledger;
pub mod overdraft;
pub mod sink;
pub mod txn;
pub mod types;
