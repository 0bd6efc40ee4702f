use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::errors::{LedgerError, Result};
use crate::loan::Loan;
use crate::payment::{sort_newest_first, PaymentRecord};
use crate::store::LedgerStore;
use crate::types::{LoanId, OwnerId};

/// in-memory store, used by tests and demos in place of the remote backend
///
/// both tables live behind one mutex: every trait operation runs inside a
/// single critical section, which makes `commit_payment`, `delete_loan`
/// and `snapshot` atomic without further machinery
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

#[derive(Debug, Default)]
struct Tables {
    loans: HashMap<LoanId, Loan>,
    payments: HashMap<LoanId, Vec<PaymentRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn tables(&self) -> Result<MutexGuard<'_, Tables>> {
        self.inner.lock().map_err(|_| LedgerError::Storage {
            message: "memory store lock poisoned".to_string(),
        })
    }
}

impl LedgerStore for MemoryStore {
    fn insert_loan(&self, loan: &Loan) -> Result<()> {
        let mut tables = self.tables()?;
        tables.payments.entry(loan.id).or_default();
        tables.loans.insert(loan.id, loan.clone());
        Ok(())
    }

    fn loan(&self, id: LoanId) -> Result<Loan> {
        let tables = self.tables()?;
        tables
            .loans
            .get(&id)
            .cloned()
            .ok_or(LedgerError::LoanNotFound { loan_id: id })
    }

    fn loans_for_owner(&self, owner: OwnerId) -> Result<Vec<Loan>> {
        let tables = self.tables()?;
        let mut loans: Vec<Loan> = tables
            .loans
            .values()
            .filter(|loan| loan.owner_id == owner)
            .cloned()
            .collect();
        loans.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(loans)
    }

    fn payments_for_loan(&self, loan_id: LoanId) -> Result<Vec<PaymentRecord>> {
        let tables = self.tables()?;
        let mut records = tables
            .payments
            .get(&loan_id)
            .cloned()
            .ok_or(LedgerError::LoanNotFound { loan_id })?;
        sort_newest_first(&mut records);
        Ok(records)
    }

    fn commit_payment(
        &self,
        expected_version: u64,
        loan: &Loan,
        record: &PaymentRecord,
    ) -> Result<()> {
        let mut tables = self.tables()?;

        let stored = tables
            .loans
            .get(&loan.id)
            .ok_or(LedgerError::LoanNotFound { loan_id: loan.id })?;

        if stored.version != expected_version {
            return Err(LedgerError::ConcurrencyConflict { loan_id: loan.id });
        }

        // both writes inside the same critical section
        tables.loans.insert(loan.id, loan.clone());
        tables.payments.entry(loan.id).or_default().push(record.clone());
        Ok(())
    }

    fn append_payment(&self, record: &PaymentRecord) -> Result<()> {
        let mut tables = self.tables()?;

        if !tables.loans.contains_key(&record.loan_id) {
            return Err(LedgerError::LoanNotFound {
                loan_id: record.loan_id,
            });
        }

        tables
            .payments
            .entry(record.loan_id)
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn delete_loan(&self, id: LoanId) -> Result<usize> {
        let mut tables = self.tables()?;

        tables
            .loans
            .remove(&id)
            .ok_or(LedgerError::LoanNotFound { loan_id: id })?;

        let removed = tables.payments.remove(&id).map(|r| r.len()).unwrap_or(0);
        Ok(removed)
    }

    fn snapshot(&self, id: LoanId) -> Result<(Loan, Vec<PaymentRecord>)> {
        let tables = self.tables()?;

        let loan = tables
            .loans
            .get(&id)
            .cloned()
            .ok_or(LedgerError::LoanNotFound { loan_id: id })?;

        let mut records = tables.payments.get(&id).cloned().unwrap_or_default();
        sort_newest_first(&mut records);
        Ok((loan, records))
    }
}
