//! CLI definition and dispatch.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::csv_adapter::CsvAdapter;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::adapters::text_report::TextReportAdapter;
use crate::domain::config_validation::{validate_data_config, validate_report_config};
use crate::domain::error::ReconwatchError;
use crate::domain::reconcile::{reconcile, DiscrepancyReport};
use crate::domain::shortfall::{analyze, ShortfallReport};
use crate::domain::stats::SummaryStatistics;
use crate::ports::config_port::ConfigPort;
use crate::ports::data_port::DataPort;
use crate::ports::report_port::ReportPort;

#[derive(Parser, Debug)]
#[command(
    name = "reconwatch",
    about = "Trade reconciliation and margin shortfall monitor"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Reconcile trades and monitor margins in one run
    Check {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Reconcile expected trades against actual executions
    Reconcile {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        expected: Option<PathBuf>,
        #[arg(long)]
        actual: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Monitor account balances against margin requirements
    Monitor {
        #[arg(short, long)]
        config: PathBuf,
        #[arg(long)]
        accounts: Option<PathBuf>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Validate a configuration file
    Validate {
        #[arg(short, long)]
        config: PathBuf,
    },
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Check { config, output } => run_check(&config, output.as_ref()),
        Command::Reconcile {
            config,
            expected,
            actual,
            output,
        } => run_reconcile(&config, expected.as_ref(), actual.as_ref(), output.as_ref()),
        Command::Monitor {
            config,
            accounts,
            output,
        } => run_monitor(&config, accounts.as_ref(), output.as_ref()),
        Command::Validate { config } => run_validate(&config),
    }
}

pub fn load_config(path: &PathBuf) -> Result<FileConfigAdapter, ExitCode> {
    FileConfigAdapter::from_file(path).map_err(|e| {
        let err = ReconwatchError::ConfigParse {
            file: path.display().to_string(),
            reason: e.to_string(),
        };
        eprintln!("error: {err}");
        ExitCode::from(&err)
    })
}

/// Flag wins over the `[data]` config key; both absent is a config error.
pub fn resolve_data_path(
    flag: Option<&PathBuf>,
    config: &dyn ConfigPort,
    key: &str,
) -> Result<PathBuf, ReconwatchError> {
    if let Some(path) = flag {
        return Ok(path.clone());
    }
    config
        .get_string("data", key)
        .map(PathBuf::from)
        .ok_or_else(|| ReconwatchError::ConfigMissing {
            section: "data".into(),
            key: key.into(),
        })
}

/// Flag wins over `[report] output`; falls back to report.txt.
pub fn resolve_output_path(flag: Option<&PathBuf>, config: &dyn ConfigPort) -> PathBuf {
    flag.cloned()
        .or_else(|| config.get_string("report", "output").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("report.txt"))
}

fn run_check(config_path: &PathBuf, output_flag: Option<&PathBuf>) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_report_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    let data_port = match CsvAdapter::from_config(&config) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    let output = resolve_output_path(output_flag, &config);
    run_check_pipeline(&data_port, &TextReportAdapter::new(), &output)
}

pub fn run_check_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    output_path: &Path,
) -> ExitCode {
    let expected = match data_port.fetch_expected_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let actual = match data_port.fetch_actual_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Reconciling {} trades...", expected.len());

    let discrepancies = match reconcile(&expected, &actual) {
        Ok(r) => r,
        Err(e) => {
            let err = ReconwatchError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    print_reconciliation_summary(expected.len(), &discrepancies);

    let accounts = match data_port.fetch_accounts() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("\nMonitoring {} accounts...", accounts.len());

    let (shortfalls, stats) = match analyze(&accounts) {
        Ok(r) => r,
        Err(e) => {
            let err = ReconwatchError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    print_monitor_summary(&shortfalls, &stats);

    write_report(output_path, |path| {
        report_port.write_combined(&discrepancies, &shortfalls, &stats, path)
    })
}

fn run_reconcile(
    config_path: &PathBuf,
    expected_flag: Option<&PathBuf>,
    actual_flag: Option<&PathBuf>,
    output_flag: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let expected_path = match resolve_data_path(expected_flag, &config, "expected_trades") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let actual_path = match resolve_data_path(actual_flag, &config, "actual_trades") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // The accounts path is unused by this pipeline.
    let accounts_path = config
        .get_string("data", "accounts")
        .map(PathBuf::from)
        .unwrap_or_default();
    let data_port = CsvAdapter::new(expected_path, actual_path, accounts_path);

    let output = resolve_output_path(output_flag, &config);
    run_reconcile_pipeline(&data_port, &TextReportAdapter::new(), &output)
}

pub fn run_reconcile_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    output_path: &Path,
) -> ExitCode {
    let expected = match data_port.fetch_expected_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    let actual = match data_port.fetch_actual_trades() {
        Ok(t) => t,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Reconciling {} trades...", expected.len());

    let discrepancies = match reconcile(&expected, &actual) {
        Ok(r) => r,
        Err(e) => {
            let err = ReconwatchError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    print_reconciliation_summary(expected.len(), &discrepancies);

    write_report(output_path, |path| {
        report_port.write_reconciliation(&discrepancies, path)
    })
}

fn run_monitor(
    config_path: &PathBuf,
    accounts_flag: Option<&PathBuf>,
    output_flag: Option<&PathBuf>,
) -> ExitCode {
    eprintln!("Loading config from {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    let accounts_path = match resolve_data_path(accounts_flag, &config, "accounts") {
        Ok(p) => p,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    // The trade paths are unused by this pipeline.
    let data_port = CsvAdapter::new(PathBuf::new(), PathBuf::new(), accounts_path);

    let output = resolve_output_path(output_flag, &config);
    run_monitor_pipeline(&data_port, &TextReportAdapter::new(), &output)
}

pub fn run_monitor_pipeline(
    data_port: &dyn DataPort,
    report_port: &dyn ReportPort,
    output_path: &Path,
) -> ExitCode {
    let accounts = match data_port.fetch_accounts() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {e}");
            return (&e).into();
        }
    };
    eprintln!("Monitoring {} accounts...", accounts.len());

    let (shortfalls, stats) = match analyze(&accounts) {
        Ok(r) => r,
        Err(e) => {
            let err = ReconwatchError::from(e);
            eprintln!("error: {err}");
            return (&err).into();
        }
    };
    print_monitor_summary(&shortfalls, &stats);

    write_report(output_path, |path| {
        report_port.write_monitor(&shortfalls, &stats, path)
    })
}

fn run_validate(config_path: &PathBuf) -> ExitCode {
    eprintln!("Validating config: {}", config_path.display());
    let config = match load_config(config_path) {
        Ok(c) => c,
        Err(code) => return code,
    };

    if let Err(e) = validate_data_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }
    if let Err(e) = validate_report_config(&config) {
        eprintln!("error: {e}");
        return (&e).into();
    }

    eprintln!("\nData sources:");
    for key in ["expected_trades", "actual_trades", "accounts"] {
        // validate_data_config guarantees the key is present
        if let Some(value) = config.get_string("data", key) {
            eprintln!("  {}: {}", key, value);
        }
    }
    eprintln!(
        "\nReport output: {}",
        resolve_output_path(None, &config).display()
    );

    eprintln!("\nConfiguration is valid.");
    ExitCode::SUCCESS
}

fn write_report<F>(output_path: &Path, write: F) -> ExitCode
where
    F: FnOnce(&str) -> Result<(), ReconwatchError>,
{
    let path = output_path.display().to_string();
    match write(&path) {
        Ok(()) => {
            eprintln!("\nReport written to: {}", path);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: failed to write report: {e}");
            (&e).into()
        }
    }
}

fn print_reconciliation_summary(compared: usize, report: &DiscrepancyReport) {
    eprintln!("\n=== Trade Reconciliation ===");
    eprintln!("Trades compared:   {}", compared);
    if report.is_clean() {
        eprintln!("No trade discrepancies found.");
    } else {
        eprintln!("Discrepancies:     {}", report.len());
        for entry in &report.entries {
            eprintln!(
                "  trade {}: {} expected {}, actual {}",
                entry.trade_id,
                entry.diff.field_name(),
                entry.diff.expected_value(),
                entry.diff.actual_value(),
            );
        }
    }
}

fn print_monitor_summary(report: &ShortfallReport, stats: &SummaryStatistics) {
    let rounded = stats.rounded();

    eprintln!("\n=== Margin Monitor ===");
    eprintln!("Total Accounts:    {}", rounded.total_accounts);
    if report.is_clean() {
        eprintln!("No margin shortfalls detected.");
    } else {
        eprintln!("In shortfall:      {}", rounded.shortfall_accounts);
        for entry in &report.entries {
            eprintln!(
                "  account {}: balance {:.2}, requires {:.2}, short {:.2}",
                entry.account_id, entry.balance, entry.margin_requirement, entry.shortfall,
            );
        }
        eprintln!("Total shortfall:   {:.2}", rounded.total_shortfall);
    }
    eprintln!("Average balance:   {:.2}", rounded.mean_balance);
    eprintln!("Median balance:    {:.2}", rounded.median_balance);
    eprintln!("Balance std dev:   {:.2}", rounded.std_dev_balance);
}
