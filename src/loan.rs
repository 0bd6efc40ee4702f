use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::LoanTerms;
use crate::decimal::{Money, Rate};
use crate::types::{LoanId, LoanStatus, OwnerId, PaymentMethod};

/// a tracked debt owed by a third party to the lender
///
/// invariants held at every observable point:
/// - `0 <= remaining <= original_amount`
/// - `remaining` never increases after creation
/// - `status == Paid` exactly when `remaining == 0`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: LoanId,
    pub owner_id: OwnerId,
    pub debtor_name: String,
    pub original_amount: Money,
    pub remaining: Money,
    pub interest_rate: Rate,
    pub status: LoanStatus,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    /// optimistic-concurrency token, bumped on every committed update
    pub version: u64,
}

impl Loan {
    /// open a new loan: full balance outstanding, pending
    pub(crate) fn open(terms: LoanTerms, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            owner_id: terms.owner_id,
            debtor_name: terms.debtor_name,
            original_amount: terms.original_amount,
            remaining: terms.original_amount,
            interest_rate: terms.interest_rate,
            status: LoanStatus::Pending,
            payment_method: terms.payment_method,
            note: terms.note,
            created_at,
            version: 0,
        }
    }

    /// check if fully settled
    pub fn is_paid(&self) -> bool {
        self.status == LoanStatus::Paid
    }

    /// total already collected against the balance
    pub fn collected(&self) -> Money {
        self.original_amount - self.remaining
    }

    /// apply a collection to the balance, clamping at zero
    ///
    /// overpayment is capped: the balance never goes negative and the
    /// excess is not tracked. returns the new remaining balance.
    pub(crate) fn apply_collection(&mut self, amount: Money) -> Money {
        self.remaining = (self.remaining - amount).max(Money::ZERO);

        if self.remaining.is_zero() {
            self.status = LoanStatus::Paid;
        }

        self.remaining
    }
}
