//! Trade record representation.

use chrono::NaiveDate;

/// A single booked or executed trade. Immutable once constructed.
///
/// `trade_id` is the alignment key between the expected and actual record
/// sets; `settlement_date` is carried for reporting but never reconciled.
#[derive(Debug, Clone, PartialEq)]
pub struct TradeRecord {
    pub trade_id: u64,
    pub symbol: String,
    pub quantity: i64,
    pub price: f64,
    pub settlement_date: NaiveDate,
}

impl TradeRecord {
    /// quantity * price
    pub fn notional(&self) -> f64 {
        self.quantity as f64 * self.price
    }
}
