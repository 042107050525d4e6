// 📉 Gas Price Extractor - CSV export → wei samples
// Reads Etherscan-style daily exports and keeps the rows a filter accepts

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

// ============================================================================
// CORE TYPES
// ============================================================================

/// PriceSample - One row of an export CSV
///
/// Etherscan exports carry three columns: a quote-wrapped date
/// (`"7/12/2024"`), a secondary id (unix timestamp or block number), and a
/// quote-wrapped value. The value is kept as an integer in the smallest
/// on-chain unit (wei for gas exports, whole USD for the Ether price export).
#[derive(Debug, Clone, Serialize)]
pub struct PriceSample {
    pub date: String,
    pub secondary_id: String,
    pub value: u64,
}

impl PriceSample {
    /// Third slash-delimited component of the date field (`7/12/2024` → `2024`)
    pub fn year(&self) -> Option<&str> {
        self.date.split('/').nth(2)
    }

    /// Parse the date field as `%m/%d/%Y`, if it is well formed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%m/%d/%Y").ok()
    }
}

/// SampleFilter - Row predicate applied during extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SampleFilter {
    /// Keep every row
    All,
    /// Keep rows whose date's year component matches one of the targets
    Years(Vec<String>),
}

impl SampleFilter {
    /// Convenience constructor for the usual observation window
    pub fn years(targets: &[&str]) -> Self {
        SampleFilter::Years(targets.iter().map(|y| y.to_string()).collect())
    }

    pub fn matches(&self, sample: &PriceSample) -> bool {
        match self {
            SampleFilter::All => true,
            SampleFilter::Years(targets) => match sample.year() {
                Some(year) => targets.iter().any(|t| t == year),
                None => false,
            },
        }
    }
}

// ============================================================================
// FIELD PARSING
// ============================================================================

/// Parse a value field into integer base units.
///
/// Strips leading/trailing quote characters, then takes only the integer
/// portion when a decimal point is present:
/// - `"1234"` → 1234
/// - `"12.5"` → 12
/// - `"\"98.76\""` → 98
pub fn parse_base_units(field: &str) -> Result<u64> {
    let trimmed = field.trim().trim_matches(|c| c == '"' || c == '\'');

    let integer_part = match trimmed.split_once('.') {
        Some((whole, _fraction)) => whole,
        None => trimmed,
    };

    integer_part
        .parse::<u64>()
        .with_context(|| format!("Non-numeric value field: '{}'", field))
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Load the value column of an export CSV, keeping rows the filter accepts.
///
/// The header line is skipped unconditionally and file order is preserved.
pub fn load_samples(csv_path: &Path, filter: &SampleFilter) -> Result<Vec<u64>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open export CSV: {}", csv_path.display()))?;

    extract_samples(file, filter)
        .with_context(|| format!("Failed to extract samples from {}", csv_path.display()))
}

/// Reader-based extraction - used by `load_samples` and by in-memory tests.
///
/// Malformed rows (wrong column count, bad date, non-numeric value) are
/// errors naming the offending line, and an empty result is an error as
/// well - a median over zero samples is meaningless downstream.
pub fn extract_samples<R: Read>(reader: R, filter: &SampleFilter) -> Result<Vec<u64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut samples = Vec::new();

    for (idx, result) in rdr.records().enumerate() {
        // Header is line 1; data starts on line 2
        let line_number = idx + 2;
        let record = result.with_context(|| format!("Failed to read line {}", line_number))?;

        if record.len() < 3 {
            bail!(
                "Line {}: expected 3 columns (date, id, value), got {}",
                line_number,
                record.len()
            );
        }

        let sample = PriceSample {
            date: record[0].trim_matches('"').to_string(),
            secondary_id: record[1].trim_matches('"').to_string(),
            value: parse_base_units(&record[2])
                .with_context(|| format!("Line {}: bad value field", line_number))?,
        };

        if sample.parsed_date().is_none() {
            bail!(
                "Line {}: bad date field '{}' (expected m/d/Y)",
                line_number,
                sample.date
            );
        }

        if filter.matches(&sample) {
            samples.push(sample.value);
        }
    }

    if samples.is_empty() {
        bail!("No rows matched the filter {:?}", filter);
    }

    Ok(samples)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const EXPORT: &str = "\
Date(UTC),UnixTimeStamp,Value (Wei)
\"12/30/2023\",\"1703894400\",\"31415926535\"
\"1/15/2024\",\"1705276800\",\"10909095097.5\"
\"7/12/2024\",\"1720742400\",\"8000000000\"
\"2/1/2025\",\"1738368000\",\"1200000000\"
";

    #[test]
    fn test_parse_base_units_plain_integer() {
        assert_eq!(parse_base_units("1234").unwrap(), 1234);
    }

    #[test]
    fn test_parse_base_units_truncates_decimal() {
        assert_eq!(parse_base_units("12.5").unwrap(), 12);
        assert_eq!(parse_base_units("10909095097.000000333").unwrap(), 10909095097);
    }

    #[test]
    fn test_parse_base_units_strips_quotes() {
        assert_eq!(parse_base_units("\"1234\"").unwrap(), 1234);
        assert_eq!(parse_base_units("\"98.76\"").unwrap(), 98);
    }

    #[test]
    fn test_parse_base_units_rejects_garbage() {
        assert!(parse_base_units("n/a").is_err());
        assert!(parse_base_units("").is_err());
    }

    #[test]
    fn test_extract_all_returns_every_data_row_in_order() {
        let samples = extract_samples(EXPORT.as_bytes(), &SampleFilter::All).unwrap();
        assert_eq!(
            samples,
            vec![31415926535, 10909095097, 8000000000, 1200000000]
        );
    }

    #[test]
    fn test_year_filter_partitions_rows() {
        let only_2024 =
            extract_samples(EXPORT.as_bytes(), &SampleFilter::years(&["2024"])).unwrap();
        assert_eq!(only_2024, vec![10909095097, 8000000000]);

        let window =
            extract_samples(EXPORT.as_bytes(), &SampleFilter::years(&["2024", "2025"])).unwrap();
        assert_eq!(window, vec![10909095097, 8000000000, 1200000000]);
    }

    #[test]
    fn test_empty_filter_result_is_an_error() {
        let err =
            extract_samples(EXPORT.as_bytes(), &SampleFilter::years(&["1999"])).unwrap_err();
        assert!(err.to_string().contains("No rows matched"));
    }

    #[test]
    fn test_empty_export_is_an_error() {
        let header_only = "Date(UTC),UnixTimeStamp,Value (Wei)\n";
        assert!(extract_samples(header_only.as_bytes(), &SampleFilter::All).is_err());
    }

    #[test]
    fn test_bad_date_field_is_an_error() {
        let bad = "Date,Id,Value\n\"2024-01-15\",\"123\",\"456\"\n";
        let err = extract_samples(bad.as_bytes(), &SampleFilter::All).unwrap_err();
        assert!(err.to_string().contains("bad date field"));
    }

    #[test]
    fn test_wrong_column_count_is_an_error() {
        let bad = "Date,Id,Value\n\"1/1/2024\",\"123\"\n";
        let err = extract_samples(bad.as_bytes(), &SampleFilter::All).unwrap_err();
        assert!(err.to_string().contains("Line 2"));
    }

    #[test]
    fn test_sample_year_accessor() {
        let sample = PriceSample {
            date: "7/12/2024".to_string(),
            secondary_id: "1720742400".to_string(),
            value: 1,
        };
        assert_eq!(sample.year(), Some("2024"));
        assert!(sample.parsed_date().is_some());
    }
}
