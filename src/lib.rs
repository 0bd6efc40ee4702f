pub mod config;
pub mod decimal;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod loan;
pub mod payment;
pub mod preview;
pub mod report;
pub mod store;
pub mod types;
pub mod view;

// re-export key types
pub use config::LoanTerms;
pub use decimal::{Money, Rate};
pub use errors::{LedgerError, Result};
pub use events::{Event, EventStore};
pub use ledger::Ledger;
pub use loan::Loan;
pub use payment::{sort_newest_first, PaymentRecord};
pub use report::{project, Report};
pub use store::{LedgerStore, MemoryStore};
pub use types::{
    CollectionMethod, LoanId, LoanStatus, OwnerId, PaymentId, PaymentMethod,
};
pub use view::{LoanView, PaymentEntryView};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
