use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Instant;

use csv::{Terminator, WriterBuilder};
use log::{debug, info};

use crate::error::GenError;
use crate::faker::FakeProvider;
use crate::product::{Product, HEADERS};

pub const DEFAULT_RECORDS: u64 = 200_000;
pub const DEFAULT_OUTPUT: &str = "Fake_Product_data_200k.csv";

const PROGRESS_INTERVAL: u64 = 50_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub records: u64,
    pub headers: Vec<String>,
    pub output: PathBuf,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            records: DEFAULT_RECORDS,
            headers: HEADERS.iter().map(ToString::to_string).collect(),
            output: PathBuf::from(DEFAULT_OUTPUT),
        }
    }
}

impl GeneratorConfig {
    /// # Errors
    /// Errors when `headers` is not exactly the product columns, in order
    pub fn validate_headers(&self) -> Result<(), GenError> {
        if self.headers.iter().map(String::as_str).eq(HEADERS) {
            Ok(())
        } else {
            Err(GenError::HeaderMismatch {
                expected: HEADERS.iter().map(ToString::to_string).collect(),
                found: self.headers.clone(),
            })
        }
    }
}

/// Creates (or truncates) `config.output` and fills it with `config.records` fake products.
/// Returns the number of rows written, header excluded.
///
/// # Errors
/// Errors when the headers don't match the product columns, or the file can't be created or
/// written to. A failure part way through leaves a truncated file behind.
pub fn generate<P: FakeProvider>(
    config: &GeneratorConfig,
    provider: &mut P,
) -> Result<u64, GenError> {
    config.validate_headers()?;
    info!(
        "Generating {} products into {}",
        config.records,
        config.output.display()
    );

    let start = Instant::now();
    let file = File::create(&config.output)?;
    let written = write_products(file, config.records, provider)?;
    info!(
        "Wrote {} products to {} in {:.2?}",
        written,
        config.output.display(),
        start.elapsed()
    );
    Ok(written)
}

/// Writes the header row then `records` fake products to `writer` as CSV.
///
/// # Errors
/// Errors when a row can't be written or the writer can't be flushed
pub fn write_products<W: Write, P: FakeProvider>(
    writer: W,
    records: u64,
    provider: &mut P,
) -> Result<u64, GenError> {
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(writer);

    writer.write_record(HEADERS)?;
    for row in 1..=records {
        writer.serialize(Product::fake(provider))?;
        if row % PROGRESS_INTERVAL == 0 {
            debug!("{}/{} products written", row, records);
        }
    }
    writer.flush()?;

    Ok(records)
}

#[cfg(test)]
mod tests {
    use std::ops::RangeInclusive;

    use csv::ReaderBuilder;

    use super::*;
    use crate::faker::FrenchFaker;

    /// Always picks the first element and returns awkward text for the free-form fields.
    struct FixedProvider;

    impl FakeProvider for FixedProvider {
        fn random_int(&mut self, range: RangeInclusive<u32>) -> u32 {
            *range.start()
        }

        fn random_element<'a, T>(&mut self, elements: &'a [T]) -> &'a T {
            &elements[0]
        }

        fn bothify(&mut self, pattern: &str) -> String {
            pattern.replace('?', "A").replace('#', "0")
        }

        fn word(&mut self) -> String {
            "\"vif\",".to_string()
        }

        fn file_path(&mut self, depth: usize, extension: &str) -> String {
            format!("{}/photo.{}", "/dir".repeat(depth), extension)
        }

        fn image_url(&mut self) -> String {
            "https://dummyimage.com/1x1".to_string()
        }
    }

    #[test]
    fn test_default_config() {
        let config = GeneratorConfig::default();
        assert_eq!(config.records, 200_000);
        assert_eq!(config.output, PathBuf::from("Fake_Product_data_200k.csv"));
        assert_eq!(
            config.headers,
            vec!["id", "title", "gender_id", "composition", "sleeve", "photo", "url"]
        );
        assert!(config.validate_headers().is_ok());
    }

    #[test]
    fn test_validate_headers_mismatch() {
        let mut config = GeneratorConfig::default();
        config.headers.swap(0, 1);
        assert!(matches!(
            config.validate_headers(),
            Err(GenError::HeaderMismatch { .. })
        ));

        config.headers = vec!["id".to_string()];
        assert!(config.validate_headers().is_err());
    }

    #[test]
    fn test_write_products_quotes_fields() {
        let mut buffer = Vec::new();
        let written = write_products(&mut buffer, 1, &mut FixedProvider).unwrap();
        assert_eq!(written, 1);

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(
            output,
            "id,title,gender_id,composition,sleeve,photo,url\n\
             AA000-00-A0A,\"Polo \"\"vif\"\", \"\"vif\"\",\",MAN,1% Coton,Manches courtes,\
             /dir/dir/dir/photo.jpg,https://dummyimage.com/1x1\n"
        );

        let mut reader = ReaderBuilder::new().from_reader(output.as_bytes());
        let row = reader.records().next().unwrap().unwrap();
        assert_eq!(row.len(), 7);
        assert_eq!(&row[1], "Polo \"vif\", \"vif\",");
    }

    #[test]
    fn test_write_products_row_count() {
        let mut faker = FrenchFaker::seeded(9);
        for records in [0, 1, 3, 250] {
            let mut buffer = Vec::new();
            write_products(&mut buffer, records, &mut faker).unwrap();

            let mut reader = ReaderBuilder::new()
                .has_headers(false)
                .from_reader(buffer.as_slice());
            let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
            assert_eq!(rows.len() as u64, records + 1);
            assert_eq!(rows[0], csv::StringRecord::from(HEADERS.to_vec()));
            assert!(rows.iter().all(|row| row.len() == 7));
        }
    }

    #[test]
    fn test_generate_rejects_headers_before_creating_file() {
        let output = std::env::temp_dir().join("fake-products-bad-headers.csv");
        let _ = std::fs::remove_file(&output);
        let config = GeneratorConfig {
            records: 1,
            headers: vec!["name".to_string()],
            output: output.clone(),
        };
        assert!(generate(&config, &mut FrenchFaker::seeded(1)).is_err());
        assert!(!output.exists());
    }
}
