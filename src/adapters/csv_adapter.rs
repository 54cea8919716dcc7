//! CSV file data adapter.

use crate::domain::account::AccountRecord;
use crate::domain::error::ReconwatchError;
use crate::domain::trade::TradeRecord;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};

/// Loads trade and account record sets from CSV files.
///
/// Rows are returned in file order: reconciliation alignment is positional,
/// so the adapter must not reorder records.
#[derive(Debug)]
pub struct CsvAdapter {
    expected_path: PathBuf,
    actual_path: PathBuf,
    accounts_path: PathBuf,
}

impl CsvAdapter {
    pub fn new(expected_path: PathBuf, actual_path: PathBuf, accounts_path: PathBuf) -> Self {
        Self {
            expected_path,
            actual_path,
            accounts_path,
        }
    }

    pub fn from_config(config: &dyn ConfigPort) -> Result<Self, ReconwatchError> {
        Ok(Self::new(
            data_path(config, "expected_trades")?,
            data_path(config, "actual_trades")?,
            data_path(config, "accounts")?,
        ))
    }
}

fn data_path(config: &dyn ConfigPort, key: &str) -> Result<PathBuf, ReconwatchError> {
    config
        .get_string("data", key)
        .map(PathBuf::from)
        .ok_or_else(|| ReconwatchError::ConfigMissing {
            section: "data".into(),
            key: key.into(),
        })
}

impl DataPort for CsvAdapter {
    fn fetch_expected_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError> {
        read_trades(&self.expected_path)
    }

    fn fetch_actual_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError> {
        read_trades(&self.actual_path)
    }

    fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, ReconwatchError> {
        read_accounts(&self.accounts_path)
    }
}

fn read_trades(path: &Path) -> Result<Vec<TradeRecord>, ReconwatchError> {
    let content = fs::read_to_string(path).map_err(|e| ReconwatchError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut trades = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| ReconwatchError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let trade_id: u64 = record
            .get(0)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing trade_id column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid trade_id value: {}", e),
            })?;

        let symbol = record
            .get(1)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing symbol column".into(),
            })?
            .to_string();

        let quantity: i64 = record
            .get(2)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing quantity column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid quantity value: {}", e),
            })?;

        let price: f64 = record
            .get(3)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing price column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid price value: {}", e),
            })?;

        let date_str = record.get(4).ok_or_else(|| ReconwatchError::Data {
            reason: "missing settlement_date column".into(),
        })?;
        let settlement_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            ReconwatchError::Data {
                reason: format!("invalid settlement_date format: {}", e),
            }
        })?;

        trades.push(TradeRecord {
            trade_id,
            symbol,
            quantity,
            price,
            settlement_date,
        });
    }

    Ok(trades)
}

fn read_accounts(path: &Path) -> Result<Vec<AccountRecord>, ReconwatchError> {
    let content = fs::read_to_string(path).map_err(|e| ReconwatchError::Data {
        reason: format!("failed to read {}: {}", path.display(), e),
    })?;

    let mut rdr = csv::Reader::from_reader(content.as_bytes());
    let mut accounts = Vec::new();

    for result in rdr.records() {
        let record = result.map_err(|e| ReconwatchError::Data {
            reason: format!("CSV parse error: {}", e),
        })?;

        let account_id: u64 = record
            .get(0)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing account_id column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid account_id value: {}", e),
            })?;

        let balance: f64 = record
            .get(1)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing balance column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid balance value: {}", e),
            })?;

        let margin_requirement: f64 = record
            .get(2)
            .ok_or_else(|| ReconwatchError::Data {
                reason: "missing margin_requirement column".into(),
            })?
            .parse()
            .map_err(|e| ReconwatchError::Data {
                reason: format!("invalid margin_requirement value: {}", e),
            })?;

        accounts.push(AccountRecord {
            account_id,
            balance,
            margin_requirement,
        });
    }

    Ok(accounts)
}
