use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "fuel-price-processor")]
#[command(about = "Representative per-state 100LL fuel prices from airport observations")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long, global = true, help = "Enable verbose logging")]
    pub verbose: bool,

    #[arg(short, long, global = true, help = "Only print results and errors")]
    pub quiet: bool,

    #[arg(long, global = true, help = "Log file path")]
    pub log_file: Option<PathBuf>,

    #[arg(long, global = true, help = "Settings file [default: fuel-prices.toml if present]")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute median 100LL price per state from an observation snapshot
    Aggregate {
        #[arg(short, long, help = "Observation snapshot (.json or .csv)")]
        input: PathBuf,

        #[arg(
            short,
            long,
            help = "Report file path [default: {output.directory}/state-fuel-{YYMMDD}.{ext}]"
        )]
        output_file: Option<PathBuf>,

        #[arg(short, long, help = "Report format: json, csv or table")]
        format: Option<String>,

        #[arg(long, help = "Print the report to stdout instead of writing a file")]
        print: bool,

        #[arg(long, help = "Log which airports were picked for each state")]
        explain: bool,
    },

    /// Show the representative price for one state
    State {
        #[arg(short, long, help = "Observation snapshot (.json or .csv)")]
        input: PathBuf,

        #[arg(short, long, help = "State code or name, e.g. CO or Colorado")]
        code: String,
    },

    /// Find the cheapest 100LL near an airport
    Nearest {
        #[arg(short, long, help = "Observation snapshot (.json or .csv)")]
        input: PathBuf,

        #[arg(short, long, help = "Center airport identifier")]
        airport: String,

        #[arg(short, long, help = "Search radius in nm (1-500)")]
        radius: Option<u32>,

        #[arg(short, long, help = "Maximum number of results")]
        limit: Option<usize>,
    },

    /// Show which state an airport identifier is attributed to
    Resolve {
        #[arg(required = true)]
        identifiers: Vec<String>,
    },

    /// List the state reference table
    States,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_aggregate() {
        let cli = Cli::try_parse_from([
            "fuel-price-processor",
            "aggregate",
            "--input",
            "prices.json",
            "--format",
            "csv",
            "--print",
        ])
        .unwrap();

        match cli.command {
            Commands::Aggregate {
                input,
                format,
                print,
                explain,
                ..
            } => {
                assert_eq!(input, PathBuf::from("prices.json"));
                assert_eq!(format.as_deref(), Some("csv"));
                assert!(print);
                assert!(!explain);
            }
            _ => panic!("expected aggregate"),
        }
    }

    #[test]
    fn test_parse_state_takes_code_flag() {
        let cli = Cli::try_parse_from([
            "fuel-price-processor",
            "state",
            "--input",
            "prices.csv",
            "--code",
            "Colorado",
        ])
        .unwrap();

        match cli.command {
            Commands::State { input, code } => {
                assert_eq!(input, PathBuf::from("prices.csv"));
                assert_eq!(code, "Colorado");
            }
            _ => panic!("expected state"),
        }

        assert!(Cli::try_parse_from(["fuel-price-processor", "state", "-i", "p.csv", "CO"]).is_err());
    }

    #[test]
    fn test_parse_resolve_requires_identifier() {
        assert!(Cli::try_parse_from(["fuel-price-processor", "resolve"]).is_err());
        assert!(Cli::try_parse_from(["fuel-price-processor", "-v", "resolve", "KJFK", "PHNL"]).is_ok());
    }
}
