use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// unique identifier for a loan
pub type LoanId = Uuid;

/// unique identifier for a payment record
pub type PaymentId = Uuid;

/// identifier of the lender who owns a loan
pub type OwnerId = Uuid;

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    /// balance outstanding, payments accepted
    Pending,
    /// remaining driven to zero, terminal for balance-reducing payments
    Paid,
}

/// a loan's default collection channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    Cash,
    Transfer,
}

/// how an individual payment record was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionMethod {
    Cash,
    Transfer,
    /// explicit no-payment entry, amount is always zero
    None,
}

impl From<PaymentMethod> for CollectionMethod {
    fn from(method: PaymentMethod) -> Self {
        match method {
            PaymentMethod::Cash => CollectionMethod::Cash,
            PaymentMethod::Transfer => CollectionMethod::Transfer,
        }
    }
}

impl CollectionMethod {
    /// true for records that moved money
    pub fn collects(&self) -> bool {
        !matches!(self, CollectionMethod::None)
    }
}
