mod commands;
mod helpers;

use clap::Parser;
use phasenorm_core::NormError;

/// Entry point for the installed binary: parses the process arguments
/// and maps the outcome to an exit code.
pub fn run_from_env() -> i32 {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match run(args) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("error: {error}");
            error.exit_code()
        }
    }
}

/// Runs the CLI against explicit arguments (without the program name).
/// Kept public so integration tests drive the full command path
/// in-process.
pub fn run<I, S>(args: I) -> Result<i32, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let full_args = std::iter::once("phasenorm".to_string())
        .chain(args.into_iter().map(Into::into))
        .collect::<Vec<_>>();

    match Cli::try_parse_from(&full_args) {
        Ok(cli) => dispatch(cli.command),
        Err(err) => match err.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                print!("{err}");
                Ok(0)
            }
            _ => Err(CliError::Usage(err.to_string())),
        },
    }
}

#[derive(Parser)]
#[command(
    name = "phasenorm",
    about = "Normative phase calculator for elemental mass-fraction analyses"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(clap::Subcommand)]
enum CliCommand {
    /// Allocate a sample table across an ordered compound list
    Phase(commands::PhaseArgs),
    /// Print molar masses for the given formulas
    Mass(commands::MassArgs),
    /// List recognized element symbols and atomic weights
    Elements,
}

fn dispatch(command: CliCommand) -> Result<i32, CliError> {
    match command {
        CliCommand::Phase(args) => commands::run_phase_command(args),
        CliCommand::Mass(args) => commands::run_mass_command(args),
        CliCommand::Elements => commands::run_elements_command(),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),
    #[error(transparent)]
    Norm(#[from] NormError),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(_) | Self::Norm(_) => 2,
            Self::Internal(_) => 1,
        }
    }
}
