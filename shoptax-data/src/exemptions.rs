use std::io::Read;

use serde::Deserialize;
use shoptax_core::TaxSettings;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur when importing exempt customer data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExemptionImportError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("Empty customer_id on row {row}")]
    EmptyCustomerId { row: usize },
}

impl From<csv::Error> for ExemptionImportError {
    fn from(err: csv::Error) -> Self {
        ExemptionImportError::CsvParse(err.to_string())
    }
}

/// A single record from the exempt customers CSV file.
///
/// The CSV format:
/// - `customer_id`: The tenant-scoped customer identifier (required)
/// - `customer_name`: A display name for the operator's benefit (optional,
///   never used for matching)
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ExemptCustomerRecord {
    pub customer_id: String,
    #[serde(default)]
    pub customer_name: Option<String>,
}

/// Importer for exempt customer lists from CSV files.
///
/// Exemption matching is by `customer_id` only; the name column exists so
/// exported lists stay readable. Merging preserves the order ids appear in
/// the file and never duplicates an id already on the settings.
pub struct ExemptCustomerImport;

impl ExemptCustomerImport {
    /// Parse exempt customer records from a CSV reader.
    ///
    /// Rows are numbered as they appear in the file, counting the header
    /// line, so the first data row is row 2.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<ExemptCustomerRecord>, ExemptionImportError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut records = Vec::new();

        for (index, result) in csv_reader.deserialize().enumerate() {
            let record: ExemptCustomerRecord = result?;
            if record.customer_id.trim().is_empty() {
                return Err(ExemptionImportError::EmptyCustomerId { row: index + 2 });
            }
            records.push(record);
        }

        Ok(records)
    }

    /// Merge parsed records into a tenant's exempt customer list.
    ///
    /// Appends each id not already present, in record order, and returns
    /// how many were appended. Ids already on the settings (or repeated
    /// within the batch) are skipped, so running the same import twice
    /// appends nothing the second time.
    pub fn merge_into(settings: &mut TaxSettings, records: &[ExemptCustomerRecord]) -> usize {
        let mut appended = 0;

        for record in records {
            if settings.is_customer_exempt(&record.customer_id) {
                debug!(
                    customer_id = %record.customer_id,
                    "customer already exempt; skipping"
                );
                continue;
            }
            settings.tax_exempt_customers.push(record.customer_id.clone());
            appended += 1;
        }

        debug!(
            appended,
            skipped = records.len() - appended,
            "merged exempt customer records"
        );
        appended
    }
}
