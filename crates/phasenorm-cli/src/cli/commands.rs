use super::CliError;
use super::helpers::{infer_delimiter, read_raw_table, write_output};
use phasenorm_core::{
    AtomicWeights, Compound, ElementalAnalysisTable, PhaseSpecification, allocate_table,
};
use std::path::PathBuf;
use tracing::{debug, info};

#[derive(clap::Args)]
pub(super) struct PhaseArgs {
    /// Analysis table (CSV, or TSV for .tsv/.txt)
    #[arg(long)]
    pub(super) input: PathBuf,

    /// Ordered compound formulas; earlier entries claim shared
    /// elements first
    #[arg(long, value_delimiter = ',', required = true)]
    pub(super) phases: Vec<String>,

    /// Element symbols excluded from limiting and depletion
    #[arg(long, value_delimiter = ',')]
    pub(super) ignore: Vec<String>,

    /// Sample-identifier column (default: first column)
    #[arg(long)]
    pub(super) sample_column: Option<String>,

    /// Input delimiter override (single character)
    #[arg(long)]
    pub(super) delimiter: Option<char>,

    /// Rescale each row to shares of its matched phases
    #[arg(long)]
    pub(super) renormalize: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Csv)]
    pub(super) format: OutputFormat,

    /// Output path (default: stdout)
    #[arg(long)]
    pub(super) output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub(super) struct MassArgs {
    /// Compound formulas, e.g. CaO Al2O3 KCl
    #[arg(required = true)]
    pub(super) formulas: Vec<String>,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(super) enum OutputFormat {
    Csv,
    Tsv,
    Json,
}

pub(super) fn run_phase_command(args: PhaseArgs) -> Result<i32, CliError> {
    let weights = AtomicWeights::reference();

    let delimiter = args
        .delimiter
        .unwrap_or_else(|| infer_delimiter(&args.input));
    let raw = read_raw_table(&args.input, delimiter)?;

    let sample_column = match &args.sample_column {
        Some(column) => column.clone(),
        None => raw
            .columns
            .first()
            .cloned()
            .ok_or_else(|| CliError::Usage(format!("'{}' has no header row", args.input.display())))?,
    };
    debug!(sample_column = %sample_column, delimiter = %delimiter, "importing analysis table");

    let table = ElementalAnalysisTable::from_tabular(&raw, &sample_column, &weights)?;
    let phases: Vec<&str> = args.phases.iter().map(String::as_str).collect();
    let ignore: Vec<&str> = args.ignore.iter().map(String::as_str).collect();
    let spec = PhaseSpecification::from_formulas(&phases, &ignore, &weights)?;
    info!(
        rows = table.len(),
        compounds = spec.compounds().len(),
        ignored = spec.ignored().len(),
        "allocating phases"
    );

    let mut result = allocate_table(&table, &spec, &weights)?;
    if args.renormalize {
        result = result.renormalized();
    }

    let rendered = match args.format {
        OutputFormat::Csv => result.to_delimited(','),
        OutputFormat::Tsv => result.to_delimited('\t'),
        OutputFormat::Json => result
            .to_json()
            .map_err(|error| CliError::Internal(error.into()))?,
    };

    write_output(args.output.as_deref(), &rendered)?;
    Ok(0)
}

pub(super) fn run_mass_command(args: MassArgs) -> Result<i32, CliError> {
    let weights = AtomicWeights::reference();

    for formula in &args.formulas {
        let compound = Compound::parse(formula, &weights)?;
        println!("{}\t{:.4}", compound.formula(), compound.molar_mass());
    }

    Ok(0)
}

pub(super) fn run_elements_command() -> Result<i32, CliError> {
    let weights = AtomicWeights::reference();

    for (symbol, weight) in weights.symbols() {
        println!("{symbol}\t{weight:.4}");
    }

    Ok(0)
}
