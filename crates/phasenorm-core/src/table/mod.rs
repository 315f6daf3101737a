mod reader;

use crate::chem::AtomicWeights;
use crate::domain::{NormError, NormResult};
use std::collections::BTreeMap;

/// An untyped tabular import: a header row and string records, as
/// pasted from a spreadsheet or read from a delimited file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawTable {
    pub columns: Vec<String>,
    pub records: Vec<Vec<String>>,
}

/// One sample: identifier plus element-symbol to mass-fraction map.
///
/// Only recognized element symbols appear as keys; fractions outside
/// [0,1] are sample-data anomalies, not import errors.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisRow {
    sample: String,
    fractions: BTreeMap<String, f64>,
}

impl AnalysisRow {
    pub fn new(sample: impl Into<String>, fractions: BTreeMap<String, f64>) -> Self {
        Self {
            sample: sample.into(),
            fractions,
        }
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    pub fn fractions(&self) -> &BTreeMap<String, f64> {
        &self.fractions
    }

    pub fn fraction_of(&self, symbol: &str) -> f64 {
        self.fractions.get(symbol).copied().unwrap_or(0.0)
    }
}

/// Validated elemental analysis table, immutable after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementalAnalysisTable {
    rows: Vec<AnalysisRow>,
}

impl ElementalAnalysisTable {
    /// Builds the table from a raw import.
    ///
    /// Columns whose names are not element symbols in `weights` are
    /// dropped. Blank cells coerce to 0.0; any other cell that fails
    /// numeric parsing raises `MalformedValue` naming the sample,
    /// column, and offending text. The `sample_column` is kept aside
    /// as the row key and never enters the numeric mapping.
    pub fn from_tabular(
        raw: &RawTable,
        sample_column: &str,
        weights: &AtomicWeights,
    ) -> NormResult<Self> {
        let sample_index = raw
            .columns
            .iter()
            .position(|column| column == sample_column)
            .ok_or_else(|| NormError::MissingColumn {
                column: sample_column.to_string(),
            })?;

        let element_columns: Vec<(usize, &str)> = raw
            .columns
            .iter()
            .enumerate()
            .filter(|(index, column)| *index != sample_index && weights.is_element(column))
            .map(|(index, column)| (index, column.as_str()))
            .collect();

        let mut rows = Vec::with_capacity(raw.records.len());
        for record in &raw.records {
            let sample = record
                .get(sample_index)
                .map(|cell| cell.trim().to_string())
                .unwrap_or_default();

            let mut fractions = BTreeMap::new();
            for (index, column) in &element_columns {
                let cell = record.get(*index).map(String::as_str).unwrap_or("");
                let value = coerce_cell(cell, &sample, column)?;
                fractions.insert(column.to_string(), value);
            }

            rows.push(AnalysisRow::new(sample, fractions));
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[AnalysisRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Element symbols present in any row, in lexicographic order.
    pub fn element_columns(&self) -> Vec<&str> {
        let mut symbols: Vec<&str> = Vec::new();
        for row in &self.rows {
            for symbol in row.fractions().keys() {
                if !symbols.contains(&symbol.as_str()) {
                    symbols.push(symbol.as_str());
                }
            }
        }
        symbols.sort_unstable();
        symbols
    }
}

fn coerce_cell(cell: &str, sample: &str, column: &str) -> NormResult<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    trimmed
        .parse::<f64>()
        .map_err(|_| NormError::MalformedValue {
            sample: sample.to_string(),
            column: column.to_string(),
            value: trimmed.to_string(),
        })
}
