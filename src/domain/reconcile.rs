//! Trade reconciliation engine.
//!
//! Compares two positionally aligned trade record sets field by field and
//! reports every difference. Alignment is by position with matching trade
//! ids; the id itself is never compared as a field.

use super::trade::TradeRecord;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum MisalignedInputError {
    #[error("length mismatch: {expected} expected trades, {actual} actual trades")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("trade id mismatch at index {index}: expected {expected}, actual {actual}")]
    IdMismatch {
        index: usize,
        expected: u64,
        actual: u64,
    },
}

/// A single field-level difference between an expected and an actual trade.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldDiff {
    Symbol { expected: String, actual: String },
    Quantity { expected: i64, actual: i64 },
    Price { expected: f64, actual: f64 },
}

impl FieldDiff {
    pub fn field_name(&self) -> &'static str {
        match self {
            FieldDiff::Symbol { .. } => "symbol",
            FieldDiff::Quantity { .. } => "quantity",
            FieldDiff::Price { .. } => "price",
        }
    }

    pub fn expected_value(&self) -> String {
        match self {
            FieldDiff::Symbol { expected, .. } => expected.clone(),
            FieldDiff::Quantity { expected, .. } => expected.to_string(),
            FieldDiff::Price { expected, .. } => expected.to_string(),
        }
    }

    pub fn actual_value(&self) -> String {
        match self {
            FieldDiff::Symbol { actual, .. } => actual.clone(),
            FieldDiff::Quantity { actual, .. } => actual.to_string(),
            FieldDiff::Price { actual, .. } => actual.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DiscrepancyEntry {
    pub trade_id: u64,
    pub diff: FieldDiff,
}

/// Ordered discrepancy listing. Entries follow input record order, and
/// within a record: symbol, then quantity, then price.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiscrepancyReport {
    pub entries: Vec<DiscrepancyEntry>,
}

impl DiscrepancyReport {
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Compare `expected` against `actual` and report every differing field.
///
/// Fails fast when the collections differ in length or when trade ids at
/// the same index disagree; no partial report is produced. Price uses
/// exact equality, matching literal value comparison.
pub fn reconcile(
    expected: &[TradeRecord],
    actual: &[TradeRecord],
) -> Result<DiscrepancyReport, MisalignedInputError> {
    if expected.len() != actual.len() {
        return Err(MisalignedInputError::LengthMismatch {
            expected: expected.len(),
            actual: actual.len(),
        });
    }

    let mut entries = Vec::new();

    for (index, (exp, act)) in expected.iter().zip(actual.iter()).enumerate() {
        if exp.trade_id != act.trade_id {
            return Err(MisalignedInputError::IdMismatch {
                index,
                expected: exp.trade_id,
                actual: act.trade_id,
            });
        }

        if exp.symbol != act.symbol {
            entries.push(DiscrepancyEntry {
                trade_id: exp.trade_id,
                diff: FieldDiff::Symbol {
                    expected: exp.symbol.clone(),
                    actual: act.symbol.clone(),
                },
            });
        }

        if exp.quantity != act.quantity {
            entries.push(DiscrepancyEntry {
                trade_id: exp.trade_id,
                diff: FieldDiff::Quantity {
                    expected: exp.quantity,
                    actual: act.quantity,
                },
            });
        }

        #[allow(clippy::float_cmp)]
        if exp.price != act.price {
            entries.push(DiscrepancyEntry {
                trade_id: exp.trade_id,
                diff: FieldDiff::Price {
                    expected: exp.price,
                    actual: act.price,
                },
            });
        }
    }

    Ok(DiscrepancyReport { entries })
}
