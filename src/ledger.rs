use hourglass_rs::SafeTimeProvider;

use crate::config::LoanTerms;
use crate::decimal::Money;
use crate::errors::{LedgerError, Result};
use crate::events::{Event, EventStore};
use crate::loan::Loan;
use crate::payment::PaymentRecord;
use crate::report::{project, Report};
use crate::store::LedgerStore;
use crate::types::{LoanId, OwnerId, PaymentMethod};

/// the only component permitted to mutate a loan's balance and status
///
/// validation happens locally before any store call; store failures
/// propagate unmodified. all timestamps come from the supplied time
/// provider, never from ambient clocks.
pub struct Ledger<S: LedgerStore> {
    store: S,
    events: EventStore,
}

impl<S: LedgerStore> Ledger<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            events: EventStore::new(),
        }
    }

    /// open a new loan with the full balance outstanding
    pub fn open_loan(&mut self, terms: LoanTerms, time: &SafeTimeProvider) -> Result<Loan> {
        terms.validate()?;

        let loan = Loan::open(terms, time.now());
        self.store.insert_loan(&loan)?;

        self.events.emit(Event::LoanOpened {
            loan_id: loan.id,
            owner_id: loan.owner_id,
            debtor_name: loan.debtor_name.clone(),
            amount: loan.original_amount,
            interest_rate: loan.interest_rate,
            timestamp: loan.created_at,
        });

        Ok(loan)
    }

    /// record a payment against a loan
    ///
    /// - negative amounts fail closed with `InvalidAmount`
    /// - zero amounts append a no-payment record (method forced to
    ///   `none`) and leave balance and status untouched, even on a paid
    ///   loan
    /// - positive amounts reduce the balance, clamped at zero; the record
    ///   keeps the requested amount; `Paid` is set exactly when the
    ///   balance reaches zero
    /// - a concurrent update on the same loan surfaces as
    ///   `ConcurrencyConflict`; retry with fresh state
    pub fn record_payment(
        &mut self,
        loan_id: LoanId,
        amount: Money,
        method: PaymentMethod,
        note: Option<String>,
        time: &SafeTimeProvider,
    ) -> Result<(Loan, PaymentRecord)> {
        if amount.is_negative() {
            return Err(LedgerError::InvalidAmount { amount });
        }

        let loan = self.store.loan(loan_id)?;
        let now = time.now();

        if amount.is_zero() {
            let record = PaymentRecord::no_payment(&loan, note, now);
            self.store.append_payment(&record)?;

            self.events.emit(Event::NoPaymentLogged {
                loan_id: loan.id,
                payment_id: record.id,
                timestamp: now,
            });

            return Ok((loan, record));
        }

        if loan.is_paid() {
            return Err(LedgerError::LoanAlreadyPaid { loan_id: loan.id });
        }

        let mut updated = loan.clone();
        let new_remaining = updated.apply_collection(amount);
        updated.version = loan.version + 1;

        let record = PaymentRecord::collected(&loan, amount, method.into(), note, now);
        self.store.commit_payment(loan.version, &updated, &record)?;

        self.events.emit(Event::PaymentRecorded {
            loan_id: updated.id,
            payment_id: record.id,
            amount,
            method: record.method,
            new_remaining,
            timestamp: now,
        });

        if updated.is_paid() {
            self.events.emit(Event::LoanSettled {
                loan_id: updated.id,
                final_payment: amount,
                timestamp: now,
            });
        }

        Ok((updated, record))
    }

    /// remove a loan and every payment record it owns. irreversible.
    pub fn delete_loan(&mut self, loan_id: LoanId, time: &SafeTimeProvider) -> Result<usize> {
        let removed = self.store.delete_loan(loan_id)?;

        self.events.emit(Event::LoanDeleted {
            loan_id,
            payments_removed: removed,
            timestamp: time.now(),
        });

        Ok(removed)
    }

    /// fetch a loan by id
    pub fn loan(&self, loan_id: LoanId) -> Result<Loan> {
        self.store.loan(loan_id)
    }

    /// all loans of one lender, newest first
    pub fn loans_for_owner(&self, owner: OwnerId) -> Result<Vec<Loan>> {
        self.store.loans_for_owner(owner)
    }

    /// full payment history of a loan, newest first
    pub fn payment_history(&self, loan_id: LoanId) -> Result<Vec<PaymentRecord>> {
        self.store.payments_for_loan(loan_id)
    }

    /// project a read-only report over a consistent snapshot
    pub fn report(&self, loan_id: LoanId) -> Result<Report> {
        let (loan, payments) = self.store.snapshot(loan_id)?;
        Ok(project(&loan, &payments))
    }

    /// drain events collected since the last call
    pub fn take_events(&mut self) -> Vec<Event> {
        self.events.take_events()
    }

    /// events collected so far
    pub fn events(&self) -> &[Event] {
        self.events.events()
    }
}
