//! @ai:module:intent CSV reader with prefix-based model column discovery
//! @ai:module:layer infrastructure
//! @ai:module:public_api CsvDatasetReader, find_latest_csv
//! @ai:module:stateless true

use crate::config::InputConfig;
use crate::dataset::row::{CandidateOutput, TranslationRow, TranslationSet};
use crate::dataset::DatasetError;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// @ai:intent Trait for reading translation result datasets
pub trait DatasetReaderTrait: Send + Sync {
    /// @ai:intent Read all rows of a results file
    fn read(&self, path: &Path) -> Result<TranslationSet, DatasetError>;
}

/// @ai:intent Reads translation results from CSV files
///
/// Candidate columns share a configured prefix; the remainder of the header
/// is the model name. The reference model's own column supplies the
/// reference text and is excluded from scoring.
pub struct CsvDatasetReader {
    input: InputConfig,
}

impl CsvDatasetReader {
    /// @ai:intent Create a reader with the given column conventions
    /// @ai:effects pure
    pub fn new(input: InputConfig) -> Self {
        Self { input }
    }

    /// @ai:intent Discover model names from header columns, reference excluded
    /// @ai:effects pure
    pub fn discover_models(&self, headers: &csv::StringRecord) -> Vec<String> {
        headers
            .iter()
            .filter_map(|h| h.strip_prefix(&self.input.candidate_prefix))
            .filter(|m| *m != self.input.reference_model)
            .map(str::to_string)
            .collect()
    }

    /// @ai:intent Position of a column in the header, if present
    /// @ai:effects pure
    fn column_index(headers: &csv::StringRecord, name: &str) -> Option<usize> {
        headers.iter().position(|h| h == name)
    }

    /// @ai:intent Parse a latency cell, substituting 0 on failure
    /// @ai:post non-finite or missing values yield 0.0
    /// @ai:effects pure
    fn parse_latency(cell: Option<&str>) -> f64 {
        cell.and_then(|v| v.trim().parse::<f64>().ok())
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

impl DatasetReaderTrait for CsvDatasetReader {
    /// @ai:intent Read all rows of a results file
    /// @ai:effects fs:read
    fn read(&self, path: &Path) -> Result<TranslationSet, DatasetError> {
        let mut reader = csv::Reader::from_path(path)?;
        let headers = reader.headers()?.clone();

        let reference_column = self.input.candidate_column(&self.input.reference_model);
        let reference_idx = Self::column_index(&headers, &reference_column)
            .ok_or_else(|| DatasetError::MissingReferenceColumn(reference_column.clone()))?;

        let mut columns: Vec<(String, usize, Option<usize>)> = Vec::new();

        for (idx, header) in headers.iter().enumerate() {
            let Some(model) = header.strip_prefix(&self.input.candidate_prefix) else {
                continue;
            };

            if model == self.input.reference_model {
                continue;
            }

            let latency_idx = Self::column_index(&headers, &self.input.latency_column(model));

            if latency_idx.is_none() {
                tracing::warn!(
                    "No latency column for model {model}; its rows will count as failures"
                );
            }

            columns.push((model.to_string(), idx, latency_idx));
        }

        if columns.is_empty() {
            return Err(DatasetError::NoCandidateColumns(
                self.input.candidate_prefix.clone(),
            ));
        }

        let models: Vec<String> = columns.iter().map(|(model, _, _)| model.clone()).collect();

        let mut rows = Vec::new();

        for record in reader.records() {
            let record = record?;
            let reference = record.get(reference_idx).unwrap_or("").to_string();

            let candidates = columns
                .iter()
                .map(|(model, candidate_idx, latency_idx)| CandidateOutput {
                    model: model.clone(),
                    text: record.get(*candidate_idx).unwrap_or("").to_string(),
                    latency_ms: Self::parse_latency(
                        latency_idx.and_then(|idx| record.get(idx)),
                    ),
                })
                .collect();

            rows.push(TranslationRow {
                reference,
                candidates,
            });
        }

        Ok(TranslationSet {
            reference_model: self.input.reference_model.clone(),
            models,
            rows,
        })
    }
}

/// @ai:intent Pick the lexicographically latest CSV file under a directory
/// @ai:effects fs:read
pub fn find_latest_csv(dir: &Path) -> Option<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .map(|ext| ext == "csv")
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .max_by(|a, b| a.file_name().cmp(&b.file_name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const HEADER: &str =
        "English,Spanish-GPT-4.1,Spanish-Claude,Latency-Claude (ms),Spanish-Gemini,Latency-Gemini (ms)";

    fn write_csv(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    fn reader() -> CsvDatasetReader {
        CsvDatasetReader::new(InputConfig::default())
    }

    #[test]
    fn test_read_discovers_models_and_rows() {
        let temp = TempDir::new().unwrap();
        let content = format!(
            "{HEADER}\nhello,hola,hola,850,ola,1200\nthe cat,el gato,el gato,900,un gato,1100\n"
        );
        let path = write_csv(temp.path(), "results.csv", &content);

        let set = reader().read(&path).unwrap();
        assert_eq!(set.reference_model, "GPT-4.1");
        assert_eq!(set.models, vec!["Claude", "Gemini"]);
        assert_eq!(set.rows.len(), 2);

        let row = &set.rows[0];
        assert_eq!(row.reference, "hola");
        assert_eq!(row.candidates[0].model, "Claude");
        assert_eq!(row.candidates[0].text, "hola");
        assert_eq!(row.candidates[0].latency_ms, 850.0);
        assert_eq!(row.candidates[1].latency_ms, 1200.0);
    }

    #[test]
    fn test_unparseable_latency_becomes_zero() {
        let temp = TempDir::new().unwrap();
        let content = format!("{HEADER}\nhi,hola,hola,not-a-number,ola,\n");
        let path = write_csv(temp.path(), "results.csv", &content);

        let set = reader().read(&path).unwrap();
        assert_eq!(set.rows[0].candidates[0].latency_ms, 0.0);
        assert_eq!(set.rows[0].candidates[1].latency_ms, 0.0);
    }

    #[test]
    fn test_missing_reference_column_is_an_error() {
        let temp = TempDir::new().unwrap();
        let content = "English,Spanish-Claude,Latency-Claude (ms)\nhi,hola,850\n";
        let path = write_csv(temp.path(), "results.csv", content);

        let err = reader().read(&path).unwrap_err();
        assert!(matches!(err, DatasetError::MissingReferenceColumn(_)));
    }

    #[test]
    fn test_no_candidate_columns_is_an_error() {
        let temp = TempDir::new().unwrap();
        let content = "English,Spanish-GPT-4.1\nhi,hola\n";
        let path = write_csv(temp.path(), "results.csv", content);

        let err = reader().read(&path).unwrap_err();
        assert!(matches!(err, DatasetError::NoCandidateColumns(_)));
    }

    #[test]
    fn test_find_latest_csv_by_name() {
        let temp = TempDir::new().unwrap();
        write_csv(temp.path(), "results (2).csv", "a\n1\n");
        write_csv(temp.path(), "results (11).csv", "a\n1\n");
        write_csv(temp.path(), "notes.txt", "ignored");

        // Lexicographic, so "(2)" sorts after "(11)".
        let latest = find_latest_csv(temp.path()).unwrap();
        assert_eq!(latest.file_name().unwrap(), "results (2).csv");
    }

    #[test]
    fn test_find_latest_csv_empty_dir() {
        let temp = TempDir::new().unwrap();
        assert!(find_latest_csv(temp.path()).is_none());
    }
}
