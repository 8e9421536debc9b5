use std::io::Read;
use std::path::Path;

use csv::{Reader, ReaderBuilder, Trim};
use log::{info, warn};

use crate::error::GenError;
use crate::product::{Product, ProductRecord};

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.trim(Trim::All).flexible(true);
    builder
}

fn parse_records<R: Read>(reader: Reader<R>) -> impl Iterator<Item = Result<Product, GenError>> {
    reader
        .into_deserialize::<ProductRecord>()
        .map(|record| record.map_err(GenError::from).and_then(Product::try_from))
}

/// Parses a product file, header row first. Columns are matched by name.
#[must_use]
pub fn read_products<R: Read>(reader: R) -> impl Iterator<Item = Result<Product, GenError>> {
    parse_records(builder().from_reader(reader))
}

/// Loads every valid product in the file at `path`. Malformed rows are logged and skipped.
///
/// # Errors
/// Errors when the file can't be opened
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<Product>, GenError> {
    let path = path.as_ref();
    let reader = builder().from_path(path)?;

    let mut rejected = 0_u64;
    let products: Vec<Product> = parse_records(reader)
        .enumerate()
        .filter_map(|(index, product)| {
            product
                .map_err(|e| {
                    rejected += 1;
                    warn!("Skipping product on row {}: {}", index + 2, e);
                })
                .ok()
        })
        .collect();

    info!(
        "Loaded {} products from {} ({} rejected)",
        products.len(),
        path.display(),
        rejected
    );
    Ok(products)
}
