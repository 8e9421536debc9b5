use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use log::info;

use fake_products::faker::FrenchFaker;
use fake_products::generator::{generate, GeneratorConfig, DEFAULT_OUTPUT, DEFAULT_RECORDS};

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The CSV file to write, overwritten if it exists
    #[clap(parse(from_os_str), default_value = DEFAULT_OUTPUT)]
    pub(crate) output: PathBuf,
    /// Number of products to generate
    #[clap(short = 'n', long, default_value_t = DEFAULT_RECORDS)]
    pub(crate) records: u64,
    /// Seed for reproducible output
    #[clap(long)]
    pub(crate) seed: Option<u64>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneratorConfig {
        records: cli.records,
        output: cli.output,
        ..GeneratorConfig::default()
    };
    let mut faker = match cli.seed {
        Some(seed) => {
            info!("Using seed {}", seed);
            FrenchFaker::seeded(seed)
        }
        None => FrenchFaker::from_entropy(),
    };
    generate(&config, &mut faker)?;

    println!("CSV generation complete!");
    Ok(())
}
