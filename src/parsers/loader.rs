// ABOUTME: CSV plan file loader built on the csv crate
// ABOUTME: Parses and validates every row, keeping going past invalid rows and reporting them
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use csv::{Position, ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use stride_core::models::WorkoutDescriptor;
use stride_core::{PlanError, PlanResult};
use thiserror::Error;
use tracing::{info, warn};

use super::csv_row::parse_row;
use crate::config::CsvConfig;

/// A row that could not be turned into a valid descriptor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvalidRow {
    /// 1-based line number in the input
    pub line: u64,
    /// Why the row was rejected
    #[serde(serialize_with = "serialize_error")]
    pub error: PlanError,
}

fn serialize_error<S: serde::Serializer>(error: &PlanError, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_str(error)
}

/// Outcome of loading a plan file
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LoadReport {
    /// Rows that parsed and validated, in file order
    pub descriptors: Vec<WorkoutDescriptor>,
    /// Rows that were skipped
    pub invalid_rows: Vec<InvalidRow>,
}

impl LoadReport {
    /// Number of valid rows
    #[must_use]
    pub fn valid_count(&self) -> usize {
        self.descriptors.len()
    }

    /// Number of skipped rows
    #[must_use]
    pub fn invalid_count(&self) -> usize {
        self.invalid_rows.len()
    }

    /// Whether every row was valid
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.invalid_rows.is_empty()
    }
}

/// Failure to open a plan file
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened
    #[error("Failed to open plan file {path}: {source}")]
    Io {
        /// File path
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },
}

/// Reads workout descriptors from CSV input
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanLoader {
    config: CsvConfig,
}

impl PlanLoader {
    /// Create a loader with the given CSV settings
    #[must_use]
    pub const fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Load descriptors from any reader
    ///
    /// Rows that fail to parse or validate are logged and collected in the
    /// report; they never abort the load.
    pub fn load_descriptors<R: Read>(&self, reader: R) -> LoadReport {
        let mut csv_reader = ReaderBuilder::new()
            .delimiter(self.config.delimiter)
            .has_headers(self.config.has_headers)
            .flexible(true)
            .trim(Trim::All)
            .comment(Some(b'#'))
            .from_reader(reader);

        let mut report = LoadReport::default();
        for (index, record) in csv_reader.records().enumerate() {
            let fallback_line = index as u64 + 1;
            let (line, result) = match record {
                Ok(record) => (
                    record.position().map_or(fallback_line, Position::line),
                    descriptor_from_record(&record),
                ),
                Err(e) => (
                    e.position().map_or(fallback_line, Position::line),
                    Err(PlanError::format(e.to_string())),
                ),
            };
            match result {
                Ok(descriptor) => report.descriptors.push(descriptor),
                Err(error) => {
                    warn!(line, error = %error, "Skipping invalid plan row");
                    report.invalid_rows.push(InvalidRow { line, error });
                }
            }
        }

        info!(
            valid = report.valid_count(),
            invalid = report.invalid_count(),
            "Loaded workouts from plan"
        );
        if !report.is_clean() {
            warn!(
                invalid = report.invalid_count(),
                "Plan contains invalid workouts"
            );
        }
        report
    }

    /// Load descriptors from a file
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Io` if the file cannot be opened
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<LoadReport, LoadError> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading plan from CSV");
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.load_descriptors(file))
    }
}

fn descriptor_from_record(record: &StringRecord) -> PlanResult<WorkoutDescriptor> {
    let fields: Vec<&str> = record.iter().collect();
    let descriptor = parse_row(&fields)?;
    descriptor.validate()?;
    Ok(descriptor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quoted_detail_and_invalid_rows() {
        let input = "\
1,Easy,2700,,Footing
1,Intervals,3600,\"6 * (400, MasPace, 90)\",VMA
0,Easy,2700,,Week zero
1,Tempo,3600,\"3 * (400, Unknown, 90)\",Bad zone
";
        let report = PlanLoader::default().load_descriptors(input.as_bytes());
        assert_eq!(report.valid_count(), 2);
        assert_eq!(report.invalid_count(), 2);
        assert_eq!(report.invalid_rows[0].line, 3);
        assert!(matches!(
            report.invalid_rows[0].error,
            PlanError::InvalidArgument(_)
        ));
        assert!(matches!(report.invalid_rows[1].error, PlanError::Format(_)));
    }

    #[test]
    fn test_headers_and_delimiter() {
        let input = "week;type;total;detail;description\n2;LongRun;5400;;Sortie longue\n";
        let loader = PlanLoader::new(CsvConfig {
            delimiter: b';',
            has_headers: true,
        });
        let report = loader.load_descriptors(input.as_bytes());
        assert!(report.is_clean());
        assert_eq!(report.descriptors[0].week, 2);
    }
}
