/// quick start - open a loan, collect two payments, settle it
use loan_ledger_rs::{
    Ledger, LoanTerms, MemoryStore, Money, PaymentMethod, Rate, SafeTimeProvider, TimeSource, Uuid,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let time = SafeTimeProvider::new(TimeSource::System);
    let mut ledger = Ledger::new(MemoryStore::new());
    let owner = Uuid::new_v4();

    // lend $200 at 10% to Juan
    let loan = ledger.open_loan(
        LoanTerms::new(
            owner,
            "Juan Perez",
            Money::from_major(200),
            Rate::from_percentage(10),
            PaymentMethod::Cash,
        ),
        &time,
    )?;
    println!("opened loan for {}: {} outstanding", loan.debtor_name, loan.remaining);

    // two collections settle it
    let (loan, _) = ledger.record_payment(
        loan.id,
        Money::from_major(50),
        PaymentMethod::Cash,
        None,
        &time,
    )?;
    println!("after cash payment: {} outstanding ({:?})", loan.remaining, loan.status);

    let (loan, _) = ledger.record_payment(
        loan.id,
        Money::from_major(150),
        PaymentMethod::Transfer,
        Some("final transfer".to_string()),
        &time,
    )?;
    println!("after transfer: {} outstanding ({:?})", loan.remaining, loan.status);

    for event in ledger.take_events() {
        println!("event: {:?}", event);
    }

    Ok(())
}
