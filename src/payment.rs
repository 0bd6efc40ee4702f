use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decimal::Money;
use crate::loan::Loan;
use crate::types::{CollectionMethod, LoanId, OwnerId, PaymentId};

/// an immutable, append-only ledger entry applied against a loan
///
/// the stored amount is the requested amount, never the clamped one: a
/// record of 150 against a balance of 100 stays 150 while the loan's
/// balance bottoms out at zero
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: PaymentId,
    pub loan_id: LoanId,
    pub payer_id: OwnerId,
    pub amount: Money,
    pub method: CollectionMethod,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl PaymentRecord {
    /// entry for money actually collected (amount > 0)
    pub(crate) fn collected(
        loan: &Loan,
        amount: Money,
        method: CollectionMethod,
        note: Option<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            loan_id: loan.id,
            payer_id: loan.owner_id,
            amount,
            method,
            note,
            created_at,
        }
    }

    /// entry marking a day with no collection; the method is forced to
    /// `None` regardless of what the caller asked for
    pub(crate) fn no_payment(loan: &Loan, note: Option<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            loan_id: loan.id,
            payer_id: loan.owner_id,
            amount: Money::ZERO,
            method: CollectionMethod::None,
            note,
            created_at,
        }
    }

    /// true for explicit no-collection entries
    pub fn is_no_payment(&self) -> bool {
        self.amount.is_zero() && self.method == CollectionMethod::None
    }
}

/// display order: newest first, regardless of insertion order
pub fn sort_newest_first(records: &mut [PaymentRecord]) {
    records.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoanTerms;
    use crate::decimal::Rate;
    use crate::types::PaymentMethod;
    use chrono::{Duration, TimeZone, Utc};

    fn test_loan() -> Loan {
        let terms = LoanTerms::new(
            Uuid::new_v4(),
            "Maria Lopez",
            Money::from_major(200),
            Rate::from_percentage(10),
            PaymentMethod::Cash,
        );
        Loan::open(terms, Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_no_payment_pairing() {
        let loan = test_loan();
        let record = PaymentRecord::no_payment(&loan, Some("no contact".to_string()), loan.created_at);

        assert!(record.is_no_payment());
        assert_eq!(record.amount, Money::ZERO);
        assert_eq!(record.method, CollectionMethod::None);
        assert_eq!(record.loan_id, loan.id);
        assert_eq!(record.payer_id, loan.owner_id);
    }

    #[test]
    fn test_collected_keeps_requested_amount() {
        let loan = test_loan();
        let record = PaymentRecord::collected(
            &loan,
            Money::from_major(500),
            CollectionMethod::Transfer,
            None,
            loan.created_at,
        );

        // more than the balance, stored as requested
        assert_eq!(record.amount, Money::from_major(500));
        assert!(!record.is_no_payment());
    }

    #[test]
    fn test_sort_tolerates_out_of_order_timestamps() {
        let loan = test_loan();
        let t0 = loan.created_at;

        let mut records = vec![
            PaymentRecord::collected(&loan, Money::from_major(10), CollectionMethod::Cash, None, t0 + Duration::days(1)),
            PaymentRecord::collected(&loan, Money::from_major(30), CollectionMethod::Cash, None, t0 + Duration::days(3)),
            PaymentRecord::collected(&loan, Money::from_major(20), CollectionMethod::Cash, None, t0 + Duration::days(2)),
        ];

        sort_newest_first(&mut records);

        assert_eq!(records[0].amount, Money::from_major(30));
        assert_eq!(records[1].amount, Money::from_major(20));
        assert_eq!(records[2].amount, Money::from_major(10));
    }
}
