#![allow(dead_code)]

use chrono::NaiveDate;
pub use reconwatch::domain::account::AccountRecord;
use reconwatch::domain::error::ReconwatchError;
pub use reconwatch::domain::trade::TradeRecord;
use reconwatch::ports::data_port::DataPort;

pub struct MockDataPort {
    pub expected: Vec<TradeRecord>,
    pub actual: Vec<TradeRecord>,
    pub accounts: Vec<AccountRecord>,
    pub error: Option<String>,
}

impl MockDataPort {
    pub fn new() -> Self {
        Self {
            expected: Vec::new(),
            actual: Vec::new(),
            accounts: Vec::new(),
            error: None,
        }
    }

    pub fn with_expected(mut self, trades: Vec<TradeRecord>) -> Self {
        self.expected = trades;
        self
    }

    pub fn with_actual(mut self, trades: Vec<TradeRecord>) -> Self {
        self.actual = trades;
        self
    }

    pub fn with_accounts(mut self, accounts: Vec<AccountRecord>) -> Self {
        self.accounts = accounts;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }

    fn check_error(&self) -> Result<(), ReconwatchError> {
        match &self.error {
            Some(reason) => Err(ReconwatchError::Data {
                reason: reason.clone(),
            }),
            None => Ok(()),
        }
    }
}

impl DataPort for MockDataPort {
    fn fetch_expected_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError> {
        self.check_error()?;
        Ok(self.expected.clone())
    }

    fn fetch_actual_trades(&self) -> Result<Vec<TradeRecord>, ReconwatchError> {
        self.check_error()?;
        Ok(self.actual.clone())
    }

    fn fetch_accounts(&self) -> Result<Vec<AccountRecord>, ReconwatchError> {
        self.check_error()?;
        Ok(self.accounts.clone())
    }
}

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn make_trade(trade_id: u64, symbol: &str, quantity: i64, price: f64) -> TradeRecord {
    TradeRecord {
        trade_id,
        symbol: symbol.to_string(),
        quantity,
        price,
        settlement_date: date(2023, 1, trade_id as u32),
    }
}

pub fn make_account(account_id: u64, balance: f64, margin_requirement: f64) -> AccountRecord {
    AccountRecord {
        account_id,
        balance,
        margin_requirement,
    }
}

/// The five booked trades of the reference scenario.
pub fn sample_trades() -> Vec<TradeRecord> {
    vec![
        make_trade(1, "AAPL", 50, 150.0),
        make_trade(2, "GOOGL", 100, 2800.0),
        make_trade(3, "MSFT", 75, 300.0),
        make_trade(4, "TSLA", 40, 750.0),
        make_trade(5, "AMZN", 90, 3500.0),
    ]
}

/// The five accounts of the reference scenario; the last two are short.
pub fn sample_accounts() -> Vec<AccountRecord> {
    vec![
        make_account(101, 50_000.0, 20_000.0),
        make_account(102, 30_000.0, 25_000.0),
        make_account(103, 20_000.0, 18_000.0),
        make_account(104, 15_000.0, 16_000.0),
        make_account(105, 10_000.0, 12_000.0),
    ]
}
