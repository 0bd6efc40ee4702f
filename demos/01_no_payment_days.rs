/// no-payment days - zero-amount records mark days with no collection
/// without touching the balance
use loan_ledger_rs::chrono::{Duration, TimeZone, Utc};
use loan_ledger_rs::{
    Ledger, LoanTerms, MemoryStore, Money, PaymentMethod, Rate, SafeTimeProvider, TimeSource, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
    ));
    let control = time.test_control().expect("test time source");

    let mut ledger = Ledger::new(MemoryStore::new());
    let owner = Uuid::new_v4();

    let loan = ledger.open_loan(
        LoanTerms::new(
            owner,
            "Maria Lopez",
            Money::from_major(300),
            Rate::from_percentage(5),
            PaymentMethod::Transfer,
        ),
        &time,
    )?;

    // day 1: collected
    control.advance(Duration::days(1));
    ledger.record_payment(loan.id, Money::from_major(100), PaymentMethod::Transfer, None, &time)?;

    // day 2: debtor unreachable, log it explicitly
    control.advance(Duration::days(1));
    let (after, record) = ledger.record_payment(
        loan.id,
        Money::ZERO,
        PaymentMethod::Transfer,
        Some("no contact".to_string()),
        &time,
    )?;
    println!(
        "logged no-payment day ({:?}), balance still {}",
        record.method, after.remaining
    );

    // day 3: collected again
    control.advance(Duration::days(1));
    ledger.record_payment(loan.id, Money::from_major(50), PaymentMethod::Cash, None, &time)?;

    println!("\nhistory (newest first):");
    for record in ledger.payment_history(loan.id)? {
        println!(
            "  {}  {:?}  {}",
            record.created_at.format("%Y-%m-%d"),
            record.method,
            record.amount
        );
    }

    let report = ledger.report(loan.id)?;
    println!(
        "\ncollected {} across {} records, {} zero-payment day(s)",
        report.total_collected, report.payment_count, report.zero_payment_days
    );

    Ok(())
}
