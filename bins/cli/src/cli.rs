//! Command-line arguments.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use washledger_core::filter::RecordFilter;
use washledger_shared::LedgerVariant;

#[derive(Debug, Parser)]
#[command(name = "washledger", version, about = "Car-wash revenue ledger")]
pub struct Cli {
    /// Record set to work on; overrides the configured variant.
    #[arg(long, global = true, value_enum)]
    pub variant: Option<VariantArg>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Baseline,
    Advanced,
}

impl From<VariantArg> for LedgerVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Baseline => Self::Baseline,
            VariantArg::Advanced => Self::Advanced,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Record a finished job.
    Add {
        #[arg(long = "type")]
        vehicle_type: String,
        #[arg(long)]
        color: String,
        #[arg(long)]
        phone: Option<String>,
        /// Workers credited for the job.
        #[arg(long)]
        employees: Option<String>,
        /// Amount charged; unparseable input counts as 0.00.
        #[arg(long)]
        cost: String,
        /// Supplies used; unparseable input counts as 0.00.
        #[arg(long)]
        supplies: Option<String>,
        /// Photo reference (data URL or path), stored as given.
        #[arg(long)]
        photo: Option<String>,
    },
    /// Change a record; omitted fields keep their current values.
    Edit {
        index: usize,
        #[arg(long)]
        color: Option<String>,
        /// New phone; pass an empty string to clear it.
        #[arg(long)]
        phone: Option<String>,
        #[arg(long)]
        employees: Option<String>,
        #[arg(long)]
        cost: Option<String>,
        #[arg(long)]
        supplies: Option<String>,
    },
    /// Remove a record.
    Delete { index: usize },
    /// List records.
    List(FilterArgs),
    /// Show the revenue split.
    Summary(FilterArgs),
    /// Show or set the number of employees sharing the pool.
    Employees { count: Option<String> },
    /// Export the printable report.
    Report {
        #[command(flatten)]
        filter: FilterArgs,
        /// Print to stdout instead of saving under `reports/`.
        #[arg(long)]
        stdout: bool,
    },
}

#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// First service date, `YYYY-MM-DD`.
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last service date, `YYYY-MM-DD`.
    #[arg(long)]
    pub to: Option<NaiveDate>,
    #[arg(long)]
    pub vehicle_type: Option<String>,
    /// Case-insensitive match on color or phone.
    #[arg(long)]
    pub search: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> RecordFilter {
        let mut filter = RecordFilter::new();
        if let Some(from) = self.from {
            filter = filter.from_date(from);
        }
        if let Some(to) = self.to {
            filter = filter.to_date(to);
        }
        if let Some(vehicle_type) = &self.vehicle_type {
            filter = filter.with_vehicle_type(vehicle_type.as_str());
        }
        if let Some(text) = &self.search {
            filter = filter.with_text(text.as_str());
        }
        filter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_add() {
        let cli = Cli::try_parse_from([
            "washledger", "add", "--type", "SUV", "--color", "Azul", "--cost", "50",
        ])
        .expect("valid args");

        match cli.command {
            Command::Add {
                vehicle_type,
                color,
                cost,
                supplies,
                ..
            } => {
                assert_eq!(vehicle_type, "SUV");
                assert_eq!(color, "Azul");
                assert_eq!(cost, "50");
                assert!(supplies.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_filter_flags() {
        let cli = Cli::try_parse_from([
            "washledger",
            "--variant",
            "baseline",
            "summary",
            "--from",
            "2026-10-01",
            "--to",
            "2026-10-17",
            "--search",
            "rojo",
        ])
        .expect("valid args");

        assert_eq!(cli.variant, Some(VariantArg::Baseline));
        let Command::Summary(args) = cli.command else {
            panic!("expected summary");
        };
        assert_eq!(args.from, NaiveDate::from_ymd_opt(2026, 10, 1));
        assert!(!args.to_filter().is_empty());
    }

    #[test]
    fn test_bad_date_is_rejected() {
        let result = Cli::try_parse_from(["washledger", "list", "--from", "17/10/2026"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_filter_args() {
        assert!(FilterArgs::default().to_filter().is_empty());
    }
}
