use super::RawTable;

impl RawTable {
    /// Splits delimited text (tab for clipboard/TSV pastes, comma for
    /// CSV files) into a header row and string records.
    ///
    /// Line endings are normalized, fully blank trailing lines are
    /// ignored, and records shorter than the header keep their missing
    /// cells absent (the typed import coerces them to zero).
    pub fn from_delimited(text: &str, delimiter: char) -> Self {
        let mut lines = text
            .replace("\r\n", "\n")
            .replace('\r', "\n")
            .split('\n')
            .map(str::to_string)
            .collect::<Vec<_>>();

        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }

        let mut rows = lines.into_iter();
        let columns = match rows.next() {
            Some(header) => split_record(&header, delimiter),
            None => return Self::default(),
        };

        let records = rows
            .filter(|line| !line.trim().is_empty())
            .map(|line| split_record(&line, delimiter))
            .collect();

        Self { columns, records }
    }
}

fn split_record(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}
