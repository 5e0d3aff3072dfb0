//! Command-line interface for the spinner-variants binary.
//!
//! The CLI fetches the spinner catalogue (or reads it from a local file),
//! renders the Gren module and prints it to standard output so a build step
//! can redirect it into the source tree.

use std::{
    fs::File,
    io::{self, BufWriter},
    path::{Path, PathBuf},
    process,
};

use clap::{ArgAction, Parser};
use spinner_variants::{
    EscapeMode, Error, GeneratorConfig, SpinnerCollection, fetch_spinners, io_error, load_config,
    load_spinners, write_module,
};
use tracing_subscriber::EnvFilter;

/// Log filter applied when `RUST_LOG` is unset or invalid.
const DEFAULT_LOG_FILTER: &str = "warn";

/// Command line interface for generating the spinner variants module.
#[derive(Debug, Parser,)]
#[command(
    name = "spinner-variants",
    version,
    about = "Generate the UI.Spinner.Variant Gren module from cli-spinners"
)]
struct Cli
{
    /// Optional YAML file overriding the generator defaults.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// URL of the spinner document to download.
    #[arg(long = "url", value_name = "URL", conflicts_with = "input")]
    url: Option<String,>,

    /// Read spinner definitions from a local JSON file instead of the network.
    #[arg(long = "input", value_name = "PATH")]
    input: Option<PathBuf,>,

    /// Write the generated module to a file instead of standard output.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,

    /// Add the aggregate `all` table to the export list.
    #[arg(long = "expose-all", action = ArgAction::SetTrue)]
    expose_all: bool,

    /// Omit every doc comment from the generated module.
    #[arg(long = "no-docs", action = ArgAction::SetTrue)]
    no_docs: bool,

    /// Double every backslash in frames instead of only the first one.
    #[arg(long = "escape-all", action = ArgAction::SetTrue)]
    escape_all: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    init_tracing();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

fn init_tracing()
{
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER,),),
        )
        .with_writer(io::stderr,)
        .try_init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration, loading and emission errors.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    let config = resolve_config(&cli,)?;
    let collection = load_collection(cli.input.as_deref(), &config,).await?;

    match cli.output.as_deref() {
        Some(path,) => write_to_file(path, &collection, &config,),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_module(&mut handle, &collection, &config,)
        }
    }
}

/// Layers CLI flags over the optional configuration file and the defaults.
fn resolve_config(cli: &Cli,) -> Result<GeneratorConfig, Error,>
{
    let mut config = match cli.config.as_deref() {
        Some(path,) => load_config(path,)?,
        None => GeneratorConfig::default(),
    };

    if let Some(url,) = cli.url.as_deref() {
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("--url cannot be empty",),);
        }
        config.source_url = trimmed.to_owned();
    }
    if cli.expose_all {
        config.header.expose_table = true;
    }
    if cli.no_docs {
        config.header.doc_comments = false;
    }
    if cli.escape_all {
        config.escape = EscapeMode::All;
    }

    Ok(config,)
}

async fn load_collection(
    input: Option<&Path,>,
    config: &GeneratorConfig,
) -> Result<SpinnerCollection, Error,>
{
    match input {
        Some(path,) => load_spinners(path,),
        None => fetch_spinners(&config.source_url,).await,
    }
}

fn write_to_file(
    path: &Path,
    collection: &SpinnerCollection,
    config: &GeneratorConfig,
) -> Result<(), Error,>
{
    let file = File::create(path,).map_err(|source| io_error(path, source,),)?;
    let mut writer = BufWriter::new(file,);
    write_module(&mut writer, collection, config,)
}
