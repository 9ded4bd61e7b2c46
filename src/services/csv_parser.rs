use crate::error::AppError;
use crate::models::{ExpenseRecord, ExpenseStatus};
use crate::money::parse_amount_cents;
use crate::services::records::ParseResult;
use tracing::{debug, trace, warn};

/// Parse an expense export with columns `date`, `value` (or `amount`) and
/// optionally `id`, `description`, `category`, `status`.
///
/// Broken rows are reported in [`ParseResult::errors`] and skipped.
pub fn parse_csv(content: &[u8]) -> Result<ParseResult, AppError> {
    trace!(content_size = content.len(), "Starting CSV parsing");

    let content_str =
        std::str::from_utf8(content).map_err(|e| AppError::CsvParse(e.to_string()))?;

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content_str.as_bytes());

    let headers = reader
        .headers()
        .map_err(|e| AppError::CsvParse(e.to_string()))?
        .clone();

    debug!(column_count = headers.len(), "CSV headers parsed");

    let date_col = find_column(&headers, "date")
        .ok_or_else(|| AppError::CsvParse("No date column found in CSV".into()))?;
    let value_col = find_column(&headers, "value")
        .or_else(|| find_column(&headers, "amount"))
        .ok_or_else(|| AppError::CsvParse("No value column found in CSV".into()))?;

    let id_col = find_column(&headers, "id");
    let desc_col = find_column(&headers, "description");
    let category_col = find_column(&headers, "category");
    let status_col = find_column(&headers, "status");

    let mut records = Vec::new();
    let mut errors = Vec::new();

    for (row_idx, result) in reader.records().enumerate() {
        let row_number = row_idx + 2;

        let row = match result {
            Ok(r) => r,
            Err(e) => {
                errors.push(format!("Row {}: {}", row_number, e));
                continue;
            }
        };

        let date = row.get(date_col).unwrap_or("").trim().to_string();
        let value = row.get(value_col).unwrap_or("").trim();

        if date.is_empty() || value.is_empty() {
            errors.push(format!("Row {}: Missing date or value", row_number));
            continue;
        }

        let Some(value_cents) = parse_amount_cents(value) else {
            errors.push(format!("Row {}: Invalid value '{}'", row_number, value));
            continue;
        };

        let status = match get_optional_field(&row, status_col) {
            Some(s) => match s.parse::<ExpenseStatus>() {
                Ok(status) => status,
                Err(e) => {
                    errors.push(format!("Row {}: {}", row_number, e));
                    continue;
                }
            },
            None => ExpenseStatus::default(),
        };

        records.push(ExpenseRecord {
            id: get_optional_field(&row, id_col).unwrap_or_else(|| row_number.to_string()),
            date,
            description: get_optional_field(&row, desc_col).unwrap_or_default(),
            category: get_optional_field(&row, category_col).unwrap_or_default(),
            value_cents,
            status,
        });
    }

    if !errors.is_empty() {
        warn!(error_count = errors.len(), "CSV rows skipped");
    }
    debug!(record_count = records.len(), "CSV parsing finished");

    Ok(ParseResult { records, errors })
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.trim().eq_ignore_ascii_case(name))
}

fn get_optional_field(record: &csv::StringRecord, col: Option<usize>) -> Option<String> {
    col.and_then(|c| record.get(c))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
