use clap::{Parser, Subcommand};
use miette::{IntoDiagnostic, Result};
use rentcar::application::pricing::PricingEngine;
use rentcar::application::service::RentalService;
use rentcar::config::{DEFAULT_CARS_PATH, RentalConfig};
use rentcar::domain::currency::CurrencyFormatter;
use rentcar::error::RentalError;
use rentcar::infrastructure::clock::SystemClock;
use rentcar::infrastructure::json_file::JsonFileVehicleStore;
use rentcar::infrastructure::selection::UniformRandomSelector;
use rentcar::interfaces::json::request_reader::RequestReader;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON file with the vehicle records
    #[arg(long, env = "RENTCAR_CARS", default_value = DEFAULT_CARS_PATH)]
    cars: PathBuf,

    /// JSON file with the age brackets used for the surcharge
    #[arg(long)]
    tax_table: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pick an available vehicle from a category
    CarInCategory {
        /// Category JSON file, or `-` for stdin
        request: PathBuf,
    },
    /// Rent a vehicle and print the transaction
    Rent {
        /// Rental request JSON file, or `-` for stdin
        request: PathBuf,
    },
    /// Quote the final price of a rental
    Price {
        /// Rental request JSON file, or `-` for stdin
        request: PathBuf,
    },
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// The request is caller input, so failing to open it is a client error.
fn open_request(path: &Path) -> rentcar::error::Result<Box<dyn Read>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(io::stdin()));
    }
    let file = File::open(path).map_err(|e| {
        RentalError::InvalidInput(format!("cannot read request {}: {e}", path.display()))
    })?;
    Ok(Box::new(file))
}

async fn handle(service: &RentalService, command: Command) -> rentcar::error::Result<String> {
    match command {
        Command::CarInCategory { request } => {
            let category = RequestReader::new(open_request(&request)?).category()?;
            let vehicle = service.get_available_vehicle(&category).await?;
            Ok(serde_json::to_string(&vehicle)?)
        }
        Command::Rent { request } => {
            let request = RequestReader::new(open_request(&request)?).rental()?;
            let transaction = service
                .rent(&request.customer, &request.category, request.number_of_days)
                .await?;
            Ok(serde_json::to_string(&transaction)?)
        }
        Command::Price { request } => {
            let request = RequestReader::new(open_request(&request)?).rental()?;
            let price = service.calculate_final_price(
                &request.customer,
                &request.category,
                request.number_of_days,
            )?;
            Ok(serde_json::json!({ "price": price }).to_string())
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = RentalConfig::new(cli.cars);
    if let Some(path) = cli.tax_table {
        config = config.with_tax_table_file(path).into_diagnostic()?;
    }

    let store = JsonFileVehicleStore::open(&config.cars_path)
        .await
        .into_diagnostic()?;
    let service = RentalService::new(
        Box::new(store),
        Box::new(UniformRandomSelector::new()),
        PricingEngine::new(config.tax_table, CurrencyFormatter::new()),
        Box::new(SystemClock),
    );

    match handle(&service, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            eprintln!("Error: {e}");
            Ok(exit_code_for(&e))
        }
    }
}

/// Client errors exit with 2, everything else with 1.
fn exit_code_for(error: &RentalError) -> ExitCode {
    if error.is_client_error() {
        ExitCode::from(2)
    } else {
        ExitCode::FAILURE
    }
}
