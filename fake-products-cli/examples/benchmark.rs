use std::error::Error;
use std::io;
use std::time::Instant;

use log::warn;

use fake_products::faker::FrenchFaker;
use fake_products::generator::{write_products, DEFAULT_RECORDS};

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut faker = FrenchFaker::seeded(0);
    let start = Instant::now();
    let written = write_products(io::sink(), DEFAULT_RECORDS, &mut faker)?;
    warn!("Generating {} products took: {:.2?}", written, start.elapsed());

    Ok(())
}
