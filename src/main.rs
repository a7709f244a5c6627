use itertools::Itertools;
use ledger_report::{
    account::Account,
    config::Config,
    ledger::Ledger,
    sink::{save_report, FileSink},
    types::LedgerEvent,
};
use rust_decimal::Decimal;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Main entry point, sets up logger, reads the output path, runs the demonstration sequence against an `Account` and saves its report.
/// Rejected operations and a failed save are logged, never fatal.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or(EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_args(std::env::args())?;
    info!(output = %config.output.display(), "Starting");

    println!("--- XYZ Bank Application Testing ---");
    // Pluggable Ledger reference
    let ledger: &mut dyn Ledger = &mut Account::new(Decimal::new(100_000, 2));

    println!("\nTesting Deposit...");
    ledger.submit(LedgerEvent::Deposit {
        amount: Decimal::new(50_000, 2),
    });
    ledger.submit(LedgerEvent::Deposit {
        amount: Decimal::new(1_550, 2),
    });

    println!("\nTesting Valid Withdrawal...");
    ledger.submit(LedgerEvent::Withdrawal {
        amount: Decimal::new(20_000, 2),
    });

    println!("\nTesting Invalid Withdrawal (Defensive Programming)...");
    ledger.submit(LedgerEvent::Withdrawal {
        amount: Decimal::new(500_000, 2),
    });

    println!("Testing Invalid Deposit (Defensive Programming)...");
    ledger.submit(LedgerEvent::Deposit {
        amount: Decimal::new(-10_000, 2),
    });

    let report = ledger.report();
    println!("\n--- Displaying Transaction Report ---");
    println!("{}", report.iter().join("\n"));

    save_report(&mut FileSink::new(config.output), &report);
    Ok(())
}
