use crate::analyzers::{NearestFuelFinder, PriceSummary};
use crate::cli::args::{Cli, Commands};
use crate::cli::logging::{init_logging, level_for};
use crate::error::{ProcessingError, Result};
use crate::models::FuelSnapshot;
use crate::processors::StateFuelAggregator;
use crate::readers::ObservationReader;
use crate::settings::Settings;
use crate::utils::filename::generate_default_report_filename;
use crate::utils::identifiers::infer_jurisdiction;
use crate::utils::progress::ProgressReporter;
use crate::utils::us_states::{self, JURISDICTIONS};
use crate::writers::{ReportFormat, ReportWriter};
use std::path::Path;
use tracing::{debug, info};

pub async fn run(cli: Cli) -> Result<()> {
    init_logging(level_for(cli.verbose, cli.quiet), cli.log_file.as_deref())?;
    let settings = Settings::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Aggregate {
            input,
            output_file,
            format,
            print,
            explain,
        } => {
            let snapshot = load_snapshot(&input, cli.quiet).await?;
            let aggregator = StateFuelAggregator::new();

            if explain {
                for breakdown in aggregator.aggregate_detailed(&snapshot) {
                    for (slot, candidate) in breakdown.selection.slots() {
                        info!(
                            state = %breakdown.average.jurisdiction_code,
                            slot = %slot,
                            airport = candidate.identifier,
                            price = ?candidate.observation.price_100ll,
                            "representative airport"
                        );
                    }
                }
            }

            let averages = aggregator.aggregate(&snapshot);
            info!(
                observations = snapshot.len(),
                states = averages.len(),
                "aggregation complete"
            );

            let report_format = match format {
                Some(f) => ReportFormat::parse(&f)?,
                None => settings.output.format,
            };
            let writer = ReportWriter::new().with_report_format(report_format);

            if print {
                println!("{}", writer.render(&averages)?);
                return Ok(());
            }

            let output_file = output_file.unwrap_or_else(|| {
                generate_default_report_filename(
                    &settings.output.directory,
                    report_format.extension(),
                )
            });
            writer.write_report(&averages, &output_file)?;

            if !cli.quiet {
                println!("{}", PriceSummary::from_averages(&averages).detailed_summary());
                println!("Report written to {}", output_file.display());
            }
        }

        Commands::State { input, code } => {
            let bounds = us_states::resolve(&code)
                .ok_or_else(|| ProcessingError::UnknownJurisdiction(code.clone()))?;

            let snapshot = load_snapshot(&input, cli.quiet).await?;
            let averages = StateFuelAggregator::new().aggregate(&snapshot);

            match StateFuelAggregator::state_price(bounds.code, &averages) {
                Some(average) => println!("{}", average.summary()),
                None => println!("{} ({}): no data", bounds.name, bounds.code),
            }
        }

        Commands::Nearest {
            input,
            airport,
            radius,
            limit,
        } => {
            let snapshot = load_snapshot(&input, cli.quiet).await?;
            let finder = NearestFuelFinder::new()
                .with_radius(radius.unwrap_or(settings.nearest.radius_nm))?
                .with_max_results(limit.unwrap_or(settings.nearest.max_results));

            let results = finder.find(&airport, &snapshot)?;
            if results.is_empty() {
                println!("No priced 100LL found near {}", airport.to_ascii_uppercase());
            }
            for (i, result) in results.iter().enumerate() {
                println!("{:>2}. {}", i + 1, result.summary());
            }
        }

        Commands::Resolve { identifiers } => {
            for identifier in identifiers {
                let resolved = infer_jurisdiction(&identifier)
                    .map(|code| format!("{} ({})", code, us_states::jurisdiction_name(code)))
                    .unwrap_or_else(|| "no match".to_string());
                println!("{:<6} {}", identifier.to_ascii_uppercase(), resolved);
            }
        }

        Commands::States => {
            println!(
                "{:<4} {:<16} {:>9} {:>9} {:>9} {:>9}",
                "Code", "Name", "Min lat", "Max lat", "Min lon", "Max lon"
            );
            for j in JURISDICTIONS.iter() {
                println!(
                    "{:<4} {:<16} {:>9.3} {:>9.3} {:>9.3} {:>9.3}",
                    j.code, j.name, j.min_lat, j.max_lat, j.min_lon, j.max_lon
                );
            }
        }
    }

    Ok(())
}

async fn load_snapshot(input: &Path, quiet: bool) -> Result<FuelSnapshot> {
    let progress = ProgressReporter::new_spinner(
        &format!("Reading observations from {}...", input.display()),
        quiet,
    );

    let snapshot = ObservationReader::new().read_snapshot_async(input).await?;
    debug!(path = %input.display(), observations = snapshot.len(), "loaded snapshot");

    progress.finish_with_message(&format!("Loaded {} observations", snapshot.len()));
    Ok(snapshot)
}
