/// serialization support for the rendering collaborator
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::loan::Loan;
use crate::payment::PaymentRecord;
use crate::preview;
use crate::report::{project, Report};
use crate::types::{CollectionMethod, LoanId, LoanStatus, OwnerId, PaymentId};

/// serializable view of a loan, its history and derived totals
#[derive(Debug, Serialize, Deserialize)]
pub struct LoanView {
    pub id: LoanId,
    pub owner_id: OwnerId,
    pub debtor_name: String,
    pub status: LoanStatus,
    pub created_at: DateTime<Utc>,
    pub note: Option<String>,
    pub balances: BalanceView,
    pub payments: Vec<PaymentEntryView>,
    pub summary: Report,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct BalanceView {
    pub original_amount: Money,
    pub remaining: Money,
    pub collected: Money,
    pub interest_rate: Rate,
    /// preview figure only, never part of the stored balance
    pub total_with_interest: Money,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PaymentEntryView {
    pub id: PaymentId,
    pub amount: Money,
    pub method: CollectionMethod,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LoanView {
    pub fn from_parts(loan: &Loan, payments: &[PaymentRecord]) -> Self {
        LoanView {
            id: loan.id,
            owner_id: loan.owner_id,
            debtor_name: loan.debtor_name.clone(),
            status: loan.status,
            created_at: loan.created_at,
            note: loan.note.clone(),
            balances: BalanceView {
                original_amount: loan.original_amount,
                remaining: loan.remaining,
                collected: loan.collected(),
                interest_rate: loan.interest_rate,
                total_with_interest: preview::total_with_interest(
                    loan.original_amount,
                    loan.interest_rate,
                ),
            },
            payments: payments
                .iter()
                .map(|record| PaymentEntryView {
                    id: record.id,
                    amount: record.amount,
                    method: record.method,
                    note: record.note.clone(),
                    created_at: record.created_at,
                })
                .collect(),
            summary: project(loan, payments),
        }
    }

    /// convert to pretty-printed json string
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
