pub mod memory;

pub use memory::MemoryStore;

use crate::errors::Result;
use crate::loan::Loan;
use crate::payment::PaymentRecord;
use crate::types::{LoanId, OwnerId};

/// persistence port for the ledger
///
/// implementations front the remote data store holding the `loans` and
/// `payments` collections. two contracts matter beyond plain CRUD:
///
/// - `commit_payment` must apply the loan row update and the payment
///   append atomically, and must reject the commit with
///   `ConcurrencyConflict` when the stored loan's version no longer
///   matches `expected_version`. this is what serializes concurrent
///   payment submissions per loan; a lost update is a correctness bug.
/// - `delete_loan` must cascade to every payment record of the loan so
///   no orphaned entries survive.
pub trait LedgerStore: Send + Sync {
    /// persist a freshly opened loan
    fn insert_loan(&self, loan: &Loan) -> Result<()>;

    /// fetch a loan by id
    fn loan(&self, id: LoanId) -> Result<Loan>;

    /// all loans of one lender, newest first
    fn loans_for_owner(&self, owner: OwnerId) -> Result<Vec<Loan>>;

    /// payment history of a loan, newest first
    fn payments_for_loan(&self, loan_id: LoanId) -> Result<Vec<PaymentRecord>>;

    /// atomically persist an updated loan plus its new payment record
    ///
    /// `loan` carries the already-bumped version; `expected_version` is
    /// the version the update was computed from
    fn commit_payment(
        &self,
        expected_version: u64,
        loan: &Loan,
        record: &PaymentRecord,
    ) -> Result<()>;

    /// append a record that does not touch the loan row (zero-amount
    /// no-payment entries)
    fn append_payment(&self, record: &PaymentRecord) -> Result<()>;

    /// remove a loan and cascade-delete its payment records; returns how
    /// many records were removed
    fn delete_loan(&self, id: LoanId) -> Result<usize>;

    /// consistent read of a loan together with its full payment history
    fn snapshot(&self, id: LoanId) -> Result<(Loan, Vec<PaymentRecord>)>;
}

// a shared handle is a store too, so multiple client sessions can sit on
// the same backend
impl<S: LedgerStore + ?Sized> LedgerStore for std::sync::Arc<S> {
    fn insert_loan(&self, loan: &Loan) -> Result<()> {
        (**self).insert_loan(loan)
    }

    fn loan(&self, id: LoanId) -> Result<Loan> {
        (**self).loan(id)
    }

    fn loans_for_owner(&self, owner: OwnerId) -> Result<Vec<Loan>> {
        (**self).loans_for_owner(owner)
    }

    fn payments_for_loan(&self, loan_id: LoanId) -> Result<Vec<PaymentRecord>> {
        (**self).payments_for_loan(loan_id)
    }

    fn commit_payment(
        &self,
        expected_version: u64,
        loan: &Loan,
        record: &PaymentRecord,
    ) -> Result<()> {
        (**self).commit_payment(expected_version, loan, record)
    }

    fn append_payment(&self, record: &PaymentRecord) -> Result<()> {
        (**self).append_payment(record)
    }

    fn delete_loan(&self, id: LoanId) -> Result<usize> {
        (**self).delete_loan(id)
    }

    fn snapshot(&self, id: LoanId) -> Result<(Loan, Vec<PaymentRecord>)> {
        (**self).snapshot(id)
    }
}
