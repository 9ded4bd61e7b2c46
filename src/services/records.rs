use std::path::Path;

use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::AppResult;
use crate::models::ExpenseRecord;
use crate::services::csv_parser::parse_csv;

#[derive(Debug, Default)]
pub struct ParseResult {
    pub records: Vec<ExpenseRecord>,
    pub errors: Vec<String>,
}

/// Decode a JSON export. Only invalid JSON is an error.
pub fn records_from_json(content: &[u8]) -> AppResult<ParseResult> {
    let value: Value = serde_json::from_slice(content)?;
    Ok(records_from_value(value))
}

/// Extract expense records from an already decoded JSON document.
///
/// Anything other than a top-level array yields no records. Elements that
/// do not decode as an [`ExpenseRecord`] are reported and skipped.
pub fn records_from_value(value: Value) -> ParseResult {
    let Value::Array(items) = value else {
        warn!("Expense data is not a JSON array, treating as empty");
        return ParseResult {
            records: Vec::new(),
            errors: vec!["Expected a JSON array of expense records".into()],
        };
    };

    let mut records = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (idx, item) in items.into_iter().enumerate() {
        match serde_json::from_value::<ExpenseRecord>(item) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(format!("Record {}: {}", idx, e)),
        }
    }

    if !errors.is_empty() {
        warn!(error_count = errors.len(), "JSON records skipped");
    }
    debug!(record_count = records.len(), "JSON records decoded");

    ParseResult { records, errors }
}

/// Load records from disk, choosing the decoder by file extension.
pub fn load_records(path: &Path) -> AppResult<ParseResult> {
    let content = std::fs::read(path)?;
    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let result = if is_csv {
        parse_csv(&content)?
    } else {
        records_from_json(&content)?
    };

    info!(
        path = %path.display(),
        records = result.records.len(),
        errors = result.errors.len(),
        "Loaded expense records"
    );
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;

    #[test]
    fn test_records_from_array() {
        let result = records_from_value(json!([
            {"id": 1, "date": "2024-01-10", "category": "Fixa", "value": 100},
            {"id": 2, "date": "2024-01-20", "category": "Variavel", "value": 50}
        ]));
        assert_eq!(result.records.len(), 2);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_non_array_yields_empty() {
        for value in [json!(null), json!({"date": "2024-01-10"}), json!("expenses"), json!(3)] {
            let result = records_from_value(value);
            assert!(result.records.is_empty());
            assert_eq!(result.errors.len(), 1);
        }
    }

    #[test]
    fn test_bad_elements_are_skipped() {
        let result = records_from_value(json!([
            {"date": "2024-01-10", "value": 100},
            {"date": "2024-01-11"},
            "not a record",
            {"date": "2024-01-12", "value": 1, "status": "cancelado"}
        ]));
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.errors.len(), 3);
        assert!(result.errors[0].starts_with("Record 1"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(records_from_json(b"[{").is_err());
    }

    #[test]
    fn test_load_records_by_extension() {
        let dir = tempfile::tempdir().unwrap();

        let json_path = dir.path().join("expenses.json");
        std::fs::write(&json_path, r#"[{"date": "2024-01-10", "value": 100}]"#).unwrap();
        assert_eq!(load_records(&json_path).unwrap().records.len(), 1);

        let csv_path = dir.path().join("expenses.CSV");
        let mut file = std::fs::File::create(&csv_path).unwrap();
        writeln!(file, "date,value\n2024-01-10,1\n2024-01-11,2").unwrap();
        assert_eq!(load_records(&csv_path).unwrap().records.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_records(&dir.path().join("missing.json")).is_err());
    }
}
