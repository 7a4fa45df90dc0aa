//! CLI argument structures

use crate::report::FormatType;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Answer aggregate questions about flight records
#[derive(Parser)]
#[command(name = "flightmr")]
#[command(about = "flightmr - Answer aggregate questions about flight records with map/shuffle/reduce", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace, -vvv for all)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to configuration file (default: ./flightmr.toml when present)
    #[arg(short = 'c', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatType>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct DatasetArgs {
    /// Flight records file (default: `dataset` from configuration)
    #[arg(short = 'f', long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Count flights whose occupancy rate is at most the threshold
    #[command(name = "empty")]
    Empty {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Highest occupancy rate (passengers / seats) counted as almost empty
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Rank destination airports by number of flights
    #[command(name = "airports")]
    Airports {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Number of airports to report
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Rank destination cities by number of flights
    #[command(name = "cities")]
    Cities {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Number of cities to report
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Busiest city pairs for every month
    #[command(name = "connections")]
    Connections {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Number of city pairs to report per month
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },

    /// Answer every question
    #[command(name = "all")]
    All {
        #[command(flatten)]
        dataset: DatasetArgs,

        /// Highest occupancy rate counted as almost empty
        #[arg(long)]
        threshold: Option<f64>,

        /// Number of entries reported by ranking questions
        #[arg(short = 'n', long)]
        top: Option<usize>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "flightmr",
            "airports",
            "--file",
            "flights.csv",
            "-n",
            "3",
            "--format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.format, Some(FormatType::Json));
        match cli.command {
            Commands::Airports { dataset, top } => {
                assert_eq!(dataset.file, Some(PathBuf::from("flights.csv")));
                assert_eq!(top, Some(3));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_subcommand_is_required() {
        assert!(Cli::try_parse_from(["flightmr"]).is_err());
    }
}
