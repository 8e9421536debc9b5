use std::io;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenError {
    #[error("CSV Error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("I/O Error: {0}")]
    IoError(#[from] io::Error),
    #[error("Headers {found:?} do not match the product schema {expected:?}")]
    HeaderMismatch {
        expected: Vec<String>,
        found: Vec<String>,
    },
    #[error("Missing value for field '{0}'")]
    MissingField(&'static str),
    #[error("Malformed product id '{0}'")]
    InvalidId(String),
    #[error("Unknown gender id '{0}'")]
    InvalidGender(String),
    #[error("Malformed composition '{0}'")]
    InvalidComposition(String),
    #[error("Unknown sleeve '{0}'")]
    InvalidSleeve(String),
}
