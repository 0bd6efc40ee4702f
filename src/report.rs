use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::loan::Loan;
use crate::payment::PaymentRecord;
use crate::types::{CollectionMethod, LoanId, LoanStatus};

/// read-only summary of a loan's payment history, consumed by the
/// document renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub loan_id: LoanId,
    pub debtor_name: String,
    pub original_amount: Money,
    pub remaining: Money,
    pub status: LoanStatus,
    /// sum of recorded amounts over collecting entries (`none` excluded)
    pub total_collected: Money,
    /// subtotal per collecting method
    pub by_method: BTreeMap<CollectionMethod, Money>,
    /// every record, zero entries included
    pub payment_count: usize,
    /// count of explicit no-payment entries
    pub zero_payment_days: usize,
}

impl Report {
    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// project a report over a loan and its payment records
///
/// pure function of its inputs: same loan and records, same report.
/// an empty history is valid and yields all-zero totals.
pub fn project(loan: &Loan, payments: &[PaymentRecord]) -> Report {
    let mut total_collected = Money::ZERO;
    let mut by_method: BTreeMap<CollectionMethod, Money> = BTreeMap::new();
    let mut zero_payment_days = 0;

    for record in payments {
        if record.method.collects() {
            total_collected += record.amount;
            *by_method.entry(record.method).or_insert(Money::ZERO) += record.amount;
        } else {
            zero_payment_days += 1;
        }
    }

    Report {
        loan_id: loan.id,
        debtor_name: loan.debtor_name.clone(),
        original_amount: loan.original_amount,
        remaining: loan.remaining,
        status: loan.status,
        total_collected,
        by_method,
        payment_count: payments.len(),
        zero_payment_days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoanTerms;
    use crate::decimal::Rate;
    use crate::types::PaymentMethod;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn test_loan() -> Loan {
        let terms = LoanTerms::new(
            Uuid::new_v4(),
            "Maria Lopez",
            Money::from_major(200),
            Rate::from_percentage(10),
            PaymentMethod::Cash,
        );
        Loan::open(terms, Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap())
    }

    fn record(loan: &Loan, amount: i64, method: CollectionMethod) -> PaymentRecord {
        if amount == 0 {
            PaymentRecord::no_payment(loan, None, loan.created_at)
        } else {
            PaymentRecord::collected(loan, Money::from_major(amount), method, None, loan.created_at)
        }
    }

    #[test]
    fn test_empty_history_yields_zero_totals() {
        let loan = test_loan();
        let report = project(&loan, &[]);

        assert_eq!(report.total_collected, Money::ZERO);
        assert!(report.by_method.is_empty());
        assert_eq!(report.payment_count, 0);
        assert_eq!(report.zero_payment_days, 0);
        assert_eq!(report.remaining, loan.remaining);
    }

    #[test]
    fn test_projection_scenario() {
        // 50 cash, 0 none, 150 transfer
        let loan = test_loan();
        let payments = vec![
            record(&loan, 50, CollectionMethod::Cash),
            record(&loan, 0, CollectionMethod::None),
            record(&loan, 150, CollectionMethod::Transfer),
        ];

        let report = project(&loan, &payments);

        assert_eq!(report.total_collected, Money::from_major(200));
        assert_eq!(report.by_method[&CollectionMethod::Cash], Money::from_major(50));
        assert_eq!(report.by_method[&CollectionMethod::Transfer], Money::from_major(150));
        assert!(!report.by_method.contains_key(&CollectionMethod::None));
        assert_eq!(report.payment_count, 3);
        assert_eq!(report.zero_payment_days, 1);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let loan = test_loan();
        let payments = vec![
            record(&loan, 50, CollectionMethod::Cash),
            record(&loan, 0, CollectionMethod::None),
            record(&loan, 150, CollectionMethod::Transfer),
        ];

        let first = project(&loan, &payments);
        let second = project(&loan, &payments);
        assert_eq!(first, second);
    }

    #[test]
    fn test_unclamped_amounts_feed_totals() {
        // overpaid record keeps its requested amount in the totals
        let loan = test_loan();
        let payments = vec![record(&loan, 500, CollectionMethod::Cash)];

        let report = project(&loan, &payments);
        assert_eq!(report.total_collected, Money::from_major(500));
    }

    #[test]
    fn test_json_round_trip() {
        let loan = test_loan();
        let payments = vec![
            record(&loan, 50, CollectionMethod::Cash),
            record(&loan, 0, CollectionMethod::None),
        ];

        let report = project(&loan, &payments);
        let json = report.to_json_pretty().unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
