use serde::{Deserialize, Serialize};

use crate::decimal::{Money, Rate};
use crate::errors::{LedgerError, Result};
use crate::types::{OwnerId, PaymentMethod};

/// terms for opening a new loan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoanTerms {
    pub owner_id: OwnerId,
    pub debtor_name: String,
    pub original_amount: Money,
    pub interest_rate: Rate,
    pub payment_method: PaymentMethod,
    pub note: Option<String>,
}

impl LoanTerms {
    pub fn new(
        owner_id: OwnerId,
        debtor_name: impl Into<String>,
        original_amount: Money,
        interest_rate: Rate,
        payment_method: PaymentMethod,
    ) -> Self {
        Self {
            owner_id,
            debtor_name: debtor_name.into(),
            original_amount,
            interest_rate,
            payment_method,
            note: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// validate locally before any persistence call
    pub fn validate(&self) -> Result<()> {
        if !self.original_amount.is_positive() {
            return Err(LedgerError::InvalidAmount {
                amount: self.original_amount,
            });
        }

        if self.interest_rate.is_negative() {
            return Err(LedgerError::InvalidInterestRate {
                rate: self.interest_rate,
            });
        }

        if self.debtor_name.trim().is_empty() {
            return Err(LedgerError::InvalidTerms {
                message: "debtor name is required".to_string(),
            });
        }

        Ok(())
    }
}
