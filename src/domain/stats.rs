//! Descriptive statistics over account balances.

/// Arithmetic mean. Returns 0.0 for an empty slice; the analyzer rejects
/// empty input before statistics are computed.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Middle value of the sorted slice; average of the two middle values when
/// the count is even. Returns 0.0 for an empty slice.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (N-1 divisor). Defined as 0.0 for fewer than
/// two values.
pub fn sample_std_dev(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (sum_sq / (values.len() - 1) as f64).sqrt()
}

/// Round to the fixed 2-decimal presentation precision.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate view over a full account set. Values are unrounded; use
/// [`SummaryStatistics::rounded`] for presentation.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub total_accounts: usize,
    pub shortfall_accounts: usize,
    pub total_shortfall: f64,
    pub mean_balance: f64,
    pub median_balance: f64,
    pub std_dev_balance: f64,
}

impl SummaryStatistics {
    /// Copy with all monetary/statistical fields rounded to 2 decimals.
    pub fn rounded(&self) -> Self {
        SummaryStatistics {
            total_accounts: self.total_accounts,
            shortfall_accounts: self.shortfall_accounts,
            total_shortfall: round2(self.total_shortfall),
            mean_balance: round2(self.mean_balance),
            median_balance: round2(self.median_balance),
            std_dev_balance: round2(self.std_dev_balance),
        }
    }
}
