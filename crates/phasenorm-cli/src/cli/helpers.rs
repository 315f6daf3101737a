use super::CliError;
use anyhow::Context;
use phasenorm_core::RawTable;
use std::fs;
use std::io::Write;
use std::path::Path;

/// Tab for .tsv/.txt (spreadsheet copy-paste exports), comma otherwise.
pub(super) fn infer_delimiter(path: &Path) -> char {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("tsv") || ext.eq_ignore_ascii_case("txt") => '\t',
        _ => ',',
    }
}

pub(super) fn read_raw_table(path: &Path, delimiter: char) -> Result<RawTable, CliError> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read input table '{}'", path.display()))?;
    Ok(RawTable::from_delimited(&text, delimiter))
}

pub(super) fn write_output(path: Option<&Path>, rendered: &str) -> Result<(), CliError> {
    match path {
        Some(path) => {
            if let Some(parent) = path.parent()
                && !parent.as_os_str().is_empty()
            {
                fs::create_dir_all(parent)
                    .with_context(|| format!("failed to create '{}'", parent.display()))?;
            }
            fs::write(path, rendered)
                .with_context(|| format!("failed to write output '{}'", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .context("failed to write to stdout")?;
        }
    }

    Ok(())
}
