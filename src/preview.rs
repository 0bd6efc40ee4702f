//! optimistic client-side previews
//!
//! pure arithmetic shown to the user before the authoritative ledger
//! operation confirms. nothing here reads or writes stored state.

use crate::decimal::{Money, Rate};

/// total a debtor would owe with interest applied up front
/// (e.g. 150 at 10% previews as 165)
pub fn total_with_interest(amount: Money, rate: Rate) -> Money {
    amount + amount.percentage(rate)
}

/// balance left after a prospective payment, clamped at zero like the
/// ledger itself
pub fn remaining_after(remaining: Money, payment: Money) -> Money {
    (remaining - payment).max(Money::ZERO)
}
