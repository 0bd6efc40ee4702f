/// json report - project a loan and dump the view for a renderer
use loan_ledger_rs::{
    Ledger, LoanTerms, LoanView, MemoryStore, Money, PaymentMethod, Rate, SafeTimeProvider,
    TimeSource, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut ledger = Ledger::new(MemoryStore::new());
    let owner = Uuid::new_v4();

    let loan = ledger.open_loan(
        LoanTerms::new(
            owner,
            "Juan Perez",
            Money::from_major(150),
            Rate::from_percentage(10),
            PaymentMethod::Cash,
        )
        .with_note("weekly collections"),
        &time,
    )?;

    ledger.record_payment(loan.id, Money::from_major(50), PaymentMethod::Cash, None, &time)?;
    ledger.record_payment(loan.id, Money::ZERO, PaymentMethod::Cash, Some("travelling".to_string()), &time)?;
    ledger.record_payment(loan.id, Money::from_major(60), PaymentMethod::Transfer, None, &time)?;

    // aggregate report
    let report = ledger.report(loan.id)?;
    println!("{}", report.to_json_pretty()?);

    // full view: loan, history and summary in one document
    let loan = ledger.loan(loan.id)?;
    let history = ledger.payment_history(loan.id)?;
    let view = LoanView::from_parts(&loan, &history);
    println!("{}", view.to_json_pretty()?);

    Ok(())
}
