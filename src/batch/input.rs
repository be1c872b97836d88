//! Batch input parsing.
//!
//! A batch file is CSV with (at least) the columns `Istituzione`, `Dominio`
//! and `Ente`. Headers are matched after trimming whitespace; extra columns
//! are ignored. Cell values are kept verbatim, domain normalization happens
//! in the classifier.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::debug;

use crate::config::{COLUMN_DOMAIN, COLUMN_ENTITY, COLUMN_INSTITUTION, REQUIRED_COLUMNS};
use crate::error_handling::BatchInputError;

/// One input row: a domain plus the metadata carried through to the report.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BatchRow {
    pub institution: String,
    pub domain: String,
    pub entity: String,
}

impl BatchRow {
    pub fn new(
        institution: impl Into<String>,
        domain: impl Into<String>,
        entity: impl Into<String>,
    ) -> Self {
        Self {
            institution: institution.into(),
            domain: domain.into(),
            entity: entity.into(),
        }
    }
}

/// Reads batch rows from CSV.
///
/// # Errors
///
/// - `BatchInputError::MissingColumns` if any required column is absent
///   (every missing column is listed)
/// - `BatchInputError::Csv` if the input is not well-formed CSV
pub fn read_batch<R: Read>(reader: R) -> Result<Vec<BatchRow>, BatchInputError> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let [institution, domain, entity] = column_indices(&headers)?;

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let cell = |index: usize| record.get(index).unwrap_or_default().to_string();
        rows.push(BatchRow {
            institution: cell(institution),
            domain: cell(domain),
            entity: cell(entity),
        });
    }
    debug!("Read {} batch rows", rows.len());
    Ok(rows)
}

/// Reads batch rows from a CSV file.
///
/// # Errors
///
/// Returns `BatchInputError::Io` if the file cannot be opened, otherwise the
/// errors of [`read_batch`].
pub fn read_batch_file(path: &Path) -> Result<Vec<BatchRow>, BatchInputError> {
    let file = std::fs::File::open(path).map_err(|source| BatchInputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    read_batch(std::io::BufReader::new(file))
}

/// Positions of the institution, domain and entity columns.
fn column_indices(headers: &StringRecord) -> Result<[usize; 3], BatchInputError> {
    let position = |name: &str| headers.iter().position(|h| h == name);

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|&&name| position(name).is_none())
        .map(|name| name.to_string())
        .collect();

    match (
        position(COLUMN_INSTITUTION),
        position(COLUMN_DOMAIN),
        position(COLUMN_ENTITY),
    ) {
        (Some(i), Some(d), Some(e)) => Ok([i, d, e]),
        _ => Err(BatchInputError::MissingColumns {
            required: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            missing,
        }),
    }
}
