use serde::Serialize;
use std::fs;
use std::path::Path;

/// One sample's phased output: allocations parallel to the
/// specification's compound order, plus the unassigned residual mass.
/// Never mutated after creation; regenerated on every allocation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasedRow {
    sample: String,
    allocations: Vec<f64>,
    residual: f64,
}

impl PhasedRow {
    pub(crate) fn new(sample: impl Into<String>, allocations: Vec<f64>, residual: f64) -> Self {
        Self {
            sample: sample.into(),
            allocations,
            residual,
        }
    }

    pub fn sample(&self) -> &str {
        &self.sample
    }

    pub fn allocations(&self) -> &[f64] {
        &self.allocations
    }

    pub fn residual(&self) -> f64 {
        self.residual
    }
}

/// The phased table: one row per sample, one column per compound in
/// specification order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PhasedResult {
    compounds: Vec<String>,
    rows: Vec<PhasedRow>,
}

impl PhasedResult {
    pub(crate) fn new(compounds: Vec<String>, rows: Vec<PhasedRow>) -> Self {
        Self { compounds, rows }
    }

    /// Compound formula strings in specification order.
    pub fn compounds(&self) -> &[String] {
        &self.compounds
    }

    pub fn rows(&self) -> &[PhasedRow] {
        &self.rows
    }

    /// Row keyed by the original sample identifier.
    pub fn by_sample(&self, sample: &str) -> Option<&PhasedRow> {
        self.rows.iter().find(|row| row.sample() == sample)
    }

    /// Row keyed by dense zero-based position, for positional grids.
    pub fn row_at(&self, index: usize) -> Option<&PhasedRow> {
        self.rows.get(index)
    }

    /// Reporting-only view: each row's allocations rescaled to their
    /// own sum ("of the matched phases, what share is each"). Rows
    /// with no matched phase mass stay all-zero. The base allocation
    /// is untouched; the residual column is cleared in the view.
    pub fn renormalized(&self) -> PhasedResult {
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let total: f64 = row.allocations.iter().sum();
                let allocations = if total > 0.0 {
                    row.allocations.iter().map(|mass| mass / total).collect()
                } else {
                    row.allocations.clone()
                };
                PhasedRow::new(row.sample.clone(), allocations, 0.0)
            })
            .collect();

        PhasedResult::new(self.compounds.clone(), rows)
    }

    /// Renders the table as delimited text: `Id`, one column per
    /// compound, trailing `Unassigned` residual column.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let mut out = String::new();

        out.push_str("Id");
        for compound in &self.compounds {
            out.push(delimiter);
            out.push_str(compound);
        }
        out.push(delimiter);
        out.push_str("Unassigned");
        out.push('\n');

        for row in &self.rows {
            out.push_str(row.sample());
            for mass in row.allocations() {
                out.push(delimiter);
                out.push_str(&format_cell(*mass));
            }
            out.push(delimiter);
            out.push_str(&format_cell(row.residual()));
            out.push('\n');
        }

        out
    }

    /// Writes the delimited rendering with canonical line endings.
    pub fn write_delimited(&self, path: &Path, delimiter: char) -> std::io::Result<()> {
        fs::write(path, self.to_delimited(delimiter))
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

fn format_cell(value: f64) -> String {
    format!("{value:.6}")
}

#[cfg(test)]
mod tests {
    use super::{PhasedResult, PhasedRow};
    use std::fs;
    use tempfile::TempDir;

    fn sample_result() -> PhasedResult {
        PhasedResult::new(
            vec!["CaO".to_string(), "SiO2".to_string()],
            vec![
                PhasedRow::new("A", vec![0.5608, 0.0], 0.1),
                PhasedRow::new("B", vec![0.25, 0.25], 0.0),
            ],
        )
    }

    #[test]
    fn rows_are_addressable_by_sample_and_by_position() {
        let result = sample_result();
        assert_eq!(result.by_sample("B").unwrap().allocations(), &[0.25, 0.25]);
        assert_eq!(result.row_at(0).unwrap().sample(), "A");
        assert!(result.by_sample("C").is_none());
        assert!(result.row_at(2).is_none());
    }

    #[test]
    fn renormalized_view_expresses_shares_of_matched_phases() {
        let result = sample_result();
        let view = result.renormalized();

        let shares = view.row_at(1).unwrap();
        assert_eq!(shares.allocations(), &[0.5, 0.5]);
        assert_eq!(shares.residual(), 0.0);

        let lone = view.row_at(0).unwrap();
        assert_eq!(lone.allocations(), &[1.0, 0.0]);

        // The base result is a value, not a cache: untouched.
        assert_eq!(result.row_at(1).unwrap().allocations(), &[0.25, 0.25]);
    }

    #[test]
    fn renormalized_view_leaves_all_zero_rows_alone() {
        let result = PhasedResult::new(
            vec!["CaO".to_string()],
            vec![PhasedRow::new("A", vec![0.0], 0.3)],
        );
        let view = result.renormalized();
        assert_eq!(view.row_at(0).unwrap().allocations(), &[0.0]);
    }

    #[test]
    fn delimited_rendering_keeps_compound_order_and_residual_column() {
        let result = sample_result();
        let text = result.to_delimited('\t');
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Id\tCaO\tSiO2\tUnassigned"));
        assert_eq!(lines.next(), Some("A\t0.560800\t0.000000\t0.100000"));
        assert_eq!(lines.next(), Some("B\t0.250000\t0.250000\t0.000000"));
        assert_eq!(lines.next(), None);
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn written_file_matches_the_in_memory_rendering() {
        let temp = TempDir::new().expect("tempdir should be created");
        let path = temp.path().join("phased.csv");
        let result = sample_result();

        result
            .write_delimited(&path, ',')
            .expect("write should succeed");
        let written = fs::read_to_string(&path).expect("output should be readable");
        assert_eq!(written, result.to_delimited(','));
    }

    #[test]
    fn json_rendering_exposes_samples_and_allocations() {
        let result = sample_result();
        let json = result.to_json().expect("serialization should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["compounds"][0], "CaO");
        assert_eq!(value["rows"][0]["sample"], "A");
        assert_eq!(value["rows"][0]["residual"], 0.1);
    }
}
