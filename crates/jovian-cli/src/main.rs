//! Jovian dataset generator CLI
//!
//! Selects one of the ten Jovian data types (by flag or interactive prompt),
//! generates the 1610-2025 annual dataset, writes it to CSV, and prints a
//! short preview with summary statistics.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaChaRng;

use jovian::{Configuration, DataType, DatasetMetadata};
use jovian_generator::generate_dataset_with_metadata;

mod export;
mod report;

use export::export_dataset_csv;

/// Simulated Jovian observation dataset generator (1610-2025).
#[derive(Parser)]
#[command(name = "jovian")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Data-type key (e.g. wind_speeds); prompts interactively when omitted.
    ///
    /// Unrecognized keys still generate a dataset, using the default
    /// configuration.
    #[arg(short, long)]
    data_type: Option<String>,

    /// Explicit RNG seed; overrides the metadata-derived seed.
    #[arg(long)]
    seed: Option<u64>,

    /// Derive the run identity (and seed) from a name, for reproducible runs.
    #[arg(long)]
    seed_name: Option<String>,

    /// Output directory for the CSV file.
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// List the available data types and exit.
    #[arg(long)]
    list: bool,

    /// Number of preview rows printed after generation.
    #[arg(long, default_value = "5")]
    preview: usize,
}

fn main() {
    let cli = Cli::parse();

    if cli.list {
        print_menu();
        return;
    }

    let data_type = match cli.data_type {
        Some(key) => key,
        None => prompt_selection().key().to_string(),
    };

    let metadata = match &cli.seed_name {
        Some(name) => DatasetMetadata::from_seed_name(name),
        None => DatasetMetadata::new_random(),
    };
    let seed = cli.seed.unwrap_or_else(|| metadata.seed());

    let mut rng = ChaChaRng::seed_from_u64(seed);
    let dataset = generate_dataset_with_metadata(&mut rng, &data_type, metadata);

    println!(
        "Generating {} ({})",
        dataset.config.description, dataset.data_type
    );

    match export_dataset_csv(&dataset, &cli.output) {
        Ok(path) => println!("Saved {}", path.display()),
        Err(e) => {
            eprintln!("Error writing CSV: {}", e);
            std::process::exit(1);
        }
    }

    report::print_preview(&dataset, cli.preview);
    report::print_summary(&dataset);
}

fn print_menu() {
    for (i, data_type) in DataType::all().into_iter().enumerate() {
        let config = Configuration::for_data_type(data_type);
        println!("{:2}. {} ({})", i + 1, config.description, data_type.key());
    }
}

/// Interactive ordinal selection
///
/// Any invalid, out-of-range, or non-numeric input falls back to wind speeds
/// rather than erroring out.
fn prompt_selection() -> DataType {
    println!("Available Jovian data types:");
    print_menu();
    print!("\nSelect a data type by number: ");
    let _ = io::stdout().flush();

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line).is_err() {
        eprintln!("Invalid selection, defaulting to wind speeds.");
        return DataType::WindSpeeds;
    }

    match line
        .trim()
        .parse::<usize>()
        .ok()
        .and_then(DataType::from_ordinal)
    {
        Some(data_type) => data_type,
        None => {
            eprintln!("Invalid selection, defaulting to wind speeds.");
            DataType::WindSpeeds
        }
    }
}
