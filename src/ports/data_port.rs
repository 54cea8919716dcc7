//! Data access port trait.

use crate::domain::account::AccountRecord;
use crate::domain::error::ReconwatchError;
use crate::domain::trade::TradeRecord;

/// Port for loading the record sets the pipelines operate on.
///
/// Implementations must preserve source order: trade reconciliation aligns
/// the expected and actual sets positionally.
pub trait DataPort {
    fn fetch_expected_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError>;

    fn fetch_actual_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError>;

    fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, ReconwatchError>;
}
