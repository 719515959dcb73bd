use clap::{Parser, Subcommand, ValueEnum};
use color_eyre::eyre::Result;
use felice::interpreter::{context::StdioContext, read_source, Interpreter};
use felice::value::error::SourceError;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[clap(name = "felice", version)]
pub struct CLArgs {
    #[clap(subcommand)]
    pub routine: FeliceCommand,
}

#[derive(Debug, Subcommand)]
pub enum FeliceCommand {
    /// Execute a script.
    Run {
        path: PathBuf,
        #[clap(long = "format", value_enum, default_value = "pretty")]
        format: ErrorFormat,
    },
    /// Show the lines a script is executed from, with their indentation.
    Lines { path: PathBuf },
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ErrorFormat {
    Debug,
    Basic,
    Pretty,
}

fn main() -> ExitCode {
    felice_main().expect("Encountered an error!")
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    // Only install a subscriber when logging was asked for.
    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .init();
    }
}

fn felice_main() -> Result<ExitCode> {
    color_eyre::install()?;
    init_tracing();
    let args = CLArgs::parse();
    match args.routine {
        FeliceCommand::Run { path, format } => {
            let Some(src) = load(&path)? else {
                return Ok(ExitCode::SUCCESS);
            };
            if !run(&src, &path, &format) {
                return Ok(ExitCode::from(70));
            }
        }
        FeliceCommand::Lines { path } => {
            let Some(src) = load(&path)? else {
                return Ok(ExitCode::SUCCESS);
            };
            for line in felice::source::normalize(&src) {
                println!("({}) [{}] {}", line.number, line.indent(), line.content());
            }
        }
    }
    Ok(ExitCode::SUCCESS)
}

/// A missing script is reported and otherwise ignored.
fn load(path: &Path) -> Result<Option<String>> {
    match read_source(path) {
        Ok(src) => Ok(Some(src)),
        Err(error @ SourceError::NotFound(_)) => {
            eprintln!("{error}");
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

fn run(src: &str, path: &Path, format: &ErrorFormat) -> bool {
    use felice::value::formatter::{
        BasicFormatter, DebugFormatter, PrettyFormatter, ValueFormatter,
    };

    let mut interpreter = Interpreter::new(StdioContext);
    match interpreter.run(src) {
        Ok(()) => true,
        Err(error) => {
            let formatter: Box<dyn ValueFormatter + '_> = match format {
                ErrorFormat::Debug => Box::new(DebugFormatter),
                ErrorFormat::Basic => Box::new(BasicFormatter),
                ErrorFormat::Pretty => Box::new(PrettyFormatter::new(src, path)),
            };
            eprintln!("{}", formatter.format_error(&error));
            false
        }
    }
}
