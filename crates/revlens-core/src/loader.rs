//! CSV loading and dataset normalization.
//!
//! The normalizer is the single structural gate of the pipeline: it
//! lowercases and trims headers, moves the canonical columns to the
//! front, parses dates leniently, and fails fast when the required
//! `text` column is absent. Downstream stages never re-check shape.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::DatasetError;
use crate::schema::{Dataset, ReviewRecord};

/// Canonical columns, in the order they are moved to the front.
const CANONICAL_COLUMNS: [&str; 3] = ["date", "text", "brand"];

/// Date/datetime formats accepted for the optional `date` column.
const DATE_FORMATS: [&str; 5] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y", "%b %d, %Y"];
const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%m/%d/%Y %H:%M"];

/// Load a delimited review file and normalize it into a [`Dataset`].
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be opened,
/// [`DatasetError::Csv`] on malformed CSV, and
/// [`DatasetError::MissingTextColumn`] if no `text` column survives
/// header normalization.
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| DatasetError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(ToString::to_string)
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in reader.records() {
        let record = result?;
        rows.push(record.iter().map(ToString::to_string).collect());
    }

    tracing::debug!(path = %path.display(), rows = rows.len(), "loaded raw dataset");
    normalize(&headers, &rows)
}

/// Normalize a raw header/row table into a [`Dataset`].
///
/// - Headers are lowercased and trimmed.
/// - Canonical columns present among {date, text, brand} come first in
///   that fixed order; all other columns keep their original relative
///   order after them.
/// - `date` values are parsed leniently; unparsable values become null
///   rather than failing.
/// - Non-canonical columns pass through untouched.
///
/// Normalization is idempotent: applying it to an already-normalized
/// table returns the same dataset.
///
/// # Errors
///
/// Returns [`DatasetError::MissingTextColumn`] if no `text` column is
/// present after header normalization. This is checked here, once,
/// before any downstream stage runs.
pub fn normalize(headers: &[String], rows: &[Vec<String>]) -> Result<Dataset, DatasetError> {
    let normalized_headers: Vec<String> = headers
        .iter()
        .map(|h| h.trim().to_lowercase())
        .collect();

    if !normalized_headers.iter().any(|h| h == "text") {
        return Err(DatasetError::MissingTextColumn);
    }

    // Canonical columns first, then the rest in original relative order.
    let mut columns: Vec<String> = CANONICAL_COLUMNS
        .iter()
        .filter(|c| normalized_headers.iter().any(|h| h == *c))
        .map(ToString::to_string)
        .collect();
    for header in &normalized_headers {
        if !CANONICAL_COLUMNS.contains(&header.as_str()) {
            columns.push(header.clone());
        }
    }

    let index_of = |name: &str| normalized_headers.iter().position(|h| h == name);
    let text_idx = index_of("text").ok_or(DatasetError::MissingTextColumn)?;
    let date_idx = index_of("date");
    let brand_idx = index_of("brand");

    let cell = |row: &[String], idx: usize| -> String {
        row.get(idx).map(String::as_str).unwrap_or("").to_string()
    };

    let mut unparsable_dates: usize = 0;
    let mut records = Vec::with_capacity(rows.len());
    for row in rows {
        let text = cell(row, text_idx);

        let date = date_idx.and_then(|idx| {
            let raw = cell(row, idx);
            let parsed = parse_date(&raw);
            if parsed.is_none() && !raw.trim().is_empty() {
                unparsable_dates += 1;
            }
            parsed
        });

        let brand = brand_idx.and_then(|idx| {
            let raw = cell(row, idx);
            if raw.trim().is_empty() {
                None
            } else {
                Some(raw)
            }
        });

        let mut extra = BTreeMap::new();
        for (idx, header) in normalized_headers.iter().enumerate() {
            if !CANONICAL_COLUMNS.contains(&header.as_str()) {
                extra.insert(header.clone(), cell(row, idx));
            }
        }

        records.push(ReviewRecord {
            text,
            date,
            brand,
            extra,
        });
    }

    if unparsable_dates > 0 {
        tracing::warn!(
            count = unparsable_dates,
            "some date values could not be parsed and were set to null"
        );
    }

    Ok(Dataset {
        records,
        columns,
        has_date: date_idx.is_some(),
        has_brand: brand_idx.is_some(),
    })
}

/// Parse a date cell against the accepted formats.
///
/// Datetime formats are tried first so a trailing time component does
/// not make an otherwise valid date unparsable. Returns `None` for
/// empty or unrecognized values.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt.date());
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    None
}
