//! Margin shortfall analysis and summary statistics.

use super::account::{AccountRecord, ShortfallEntry};
use super::stats::{self, SummaryStatistics};

/// Statistics were requested over an empty account set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("insufficient data: statistics require at least one account")]
pub struct InsufficientDataError;

/// Accounts whose balance falls short of their margin requirement, in
/// input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShortfallReport {
    pub entries: Vec<ShortfallEntry>,
}

impl ShortfallReport {
    pub fn is_clean(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn total_shortfall(&self) -> f64 {
        self.entries.iter().map(|e| e.shortfall).sum()
    }
}

/// Flag every account in shortfall and compute descriptive statistics over
/// the full account set.
///
/// Fails on an empty input; a single account is accepted, with the sample
/// standard deviation defined as 0.0. The input is never mutated.
pub fn analyze(
    accounts: &[AccountRecord],
) -> Result<(ShortfallReport, SummaryStatistics), InsufficientDataError> {
    if accounts.is_empty() {
        return Err(InsufficientDataError);
    }

    let entries: Vec<ShortfallEntry> = accounts
        .iter()
        .filter(|a| a.in_shortfall())
        .map(ShortfallEntry::from_account)
        .collect();
    let report = ShortfallReport { entries };

    let balances: Vec<f64> = accounts.iter().map(|a| a.balance).collect();
    let statistics = SummaryStatistics {
        total_accounts: accounts.len(),
        shortfall_accounts: report.len(),
        total_shortfall: report.total_shortfall(),
        mean_balance: stats::mean(&balances),
        median_balance: stats::median(&balances),
        std_dev_balance: stats::sample_std_dev(&balances),
    };

    Ok((report, statistics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn account(account_id: u64, balance: f64, margin_requirement: f64) -> AccountRecord {
        AccountRecord {
            account_id,
            balance,
            margin_requirement,
        }
    }

    fn sample_accounts() -> Vec<AccountRecord> {
        vec![
            account(101, 50_000.0, 20_000.0),
            account(102, 30_000.0, 25_000.0),
            account(103, 20_000.0, 18_000.0),
            account(104, 15_000.0, 16_000.0),
            account(105, 10_000.0, 12_000.0),
        ]
    }

    #[test]
    fn flags_exactly_the_shortfall_accounts() {
        let (report, _) = analyze(&sample_accounts()).unwrap();

        assert_eq!(report.len(), 2);
        assert_eq!(report.entries[0].account_id, 104);
        assert_relative_eq!(report.entries[0].shortfall, 1000.0);
        assert_eq!(report.entries[1].account_id, 105);
        assert_relative_eq!(report.entries[1].shortfall, 2000.0);
    }

    #[test]
    fn statistics_over_full_account_set() {
        let (_, stats) = analyze(&sample_accounts()).unwrap();

        assert_eq!(stats.total_accounts, 5);
        assert_eq!(stats.shortfall_accounts, 2);
        assert_relative_eq!(stats.total_shortfall, 3000.0);
        assert_relative_eq!(stats.mean_balance, 25_000.0);
        assert_relative_eq!(stats.median_balance, 20_000.0);
        assert_relative_eq!(
            stats.std_dev_balance,
            15_811.388300841896,
            max_relative = 1e-12
        );
    }

    #[test]
    fn all_accounts_healthy_yields_clean_report() {
        let accounts = vec![
            account(101, 50_000.0, 20_000.0),
            account(102, 30_000.0, 25_000.0),
        ];

        let (report, stats) = analyze(&accounts).unwrap();
        assert!(report.is_clean());
        assert_eq!(stats.shortfall_accounts, 0);
        assert_relative_eq!(stats.total_shortfall, 0.0);
    }

    #[test]
    fn balance_at_exact_margin_is_not_flagged() {
        let accounts = vec![account(101, 16_000.0, 16_000.0)];

        let (report, _) = analyze(&accounts).unwrap();
        assert!(report.is_clean());
    }

    #[test]
    fn preserves_input_order() {
        let accounts = vec![
            account(105, 10_000.0, 12_000.0),
            account(101, 50_000.0, 60_000.0),
            account(103, 20_000.0, 18_000.0),
        ];

        let (report, _) = analyze(&accounts).unwrap();
        let ids: Vec<u64> = report.entries.iter().map(|e| e.account_id).collect();
        assert_eq!(ids, vec![105, 101]);
    }

    #[test]
    fn empty_input_fails() {
        assert_eq!(analyze(&[]).unwrap_err(), InsufficientDataError);
    }

    #[test]
    fn single_account_is_accepted() {
        let accounts = vec![account(101, 10_000.0, 12_000.0)];

        let (report, stats) = analyze(&accounts).unwrap();
        assert_eq!(report.len(), 1);
        assert_eq!(stats.total_accounts, 1);
        assert_relative_eq!(stats.mean_balance, 10_000.0);
        assert_relative_eq!(stats.median_balance, 10_000.0);
        assert_relative_eq!(stats.std_dev_balance, 0.0);
    }

    #[test]
    fn input_is_not_mutated() {
        let accounts = sample_accounts();
        let before = accounts.clone();
        let _ = analyze(&accounts).unwrap();
        assert_eq!(accounts, before);
    }
}
