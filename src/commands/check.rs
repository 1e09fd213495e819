use std::fs::File;
use std::io::{BufReader, Write};
use std::path::Path;

use tracing::{debug, info, warn};

use crate::cli::Cli;
use crate::comparator::{Classification, compare};
use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::{CheckerError, Result, StreamRole};
use crate::output::{ErrorOutput, OutputFormat};
use crate::stream::ByteStream;
use crate::logging;

/// Where and how the result line is written, after CLI overrides.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub status_line: bool,
}

impl OutputSettings {
    #[must_use]
    pub fn resolve(config: &Config, cli: &Cli) -> Self {
        Self {
            format: cli.format.unwrap_or(config.output.format),
            status_line: config.output.status_line && !cli.quiet,
        }
    }
}

/// Reference and candidate opened for reading; the test input is only probed.
#[derive(Debug)]
pub struct OpenedInputs {
    pub reference: BufReader<File>,
    pub candidate: BufReader<File>,
}

#[must_use]
pub fn run_check(cli: &Cli) -> i32 {
    match run_check_impl(cli) {
        Ok(classification) => classification.exit_code(),
        Err(e) => {
            ErrorOutput::new(cli.color.into()).print(&e);
            Classification::InputError.exit_code()
        }
    }
}

/// Runs one comparison end to end.
///
/// # Errors
/// Returns an error on any precondition failure (configuration, unopenable
/// file) or if a stream cannot be read. The comparator is not entered when a
/// precondition fails.
pub fn run_check_impl(cli: &Cli) -> Result<Classification> {
    let config = load_config(cli.config.as_deref(), cli.no_config)?;
    logging::init(cli.verbose, &config.logging.level);

    let settings = OutputSettings::resolve(&config, cli);
    let inputs = open_inputs(&cli.input, &cli.reference, &cli.candidate)?;

    let classification = compare(
        ByteStream::new(inputs.reference),
        ByteStream::new(inputs.candidate),
    )?;
    info!(
        reference = %cli.reference.display(),
        candidate = %cli.candidate.display(),
        result = %classification,
        verdict = %classification.verdict(),
        "comparison complete"
    );

    // The verdict is the exit code; a lost status line must not change it.
    if let Some(output) = render_result(classification, settings)?
        && let Err(e) = write_result(&mut std::io::stdout().lock(), &output)
    {
        warn!(error = %e, "failed to write result line");
    }

    Ok(classification)
}

/// Load configuration honoring `--config` and `--no-config`.
///
/// # Errors
/// Returns an error if the configuration cannot be read, parsed or validated.
pub fn load_config(config_path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    let loader = FileConfigLoader::new();
    config_path.map_or_else(|| loader.load(), |path| loader.load_from_path(path))
}

/// Open all three checker files. Fails on the first one that cannot be opened.
///
/// # Errors
/// Returns [`CheckerError::FileOpen`] naming the file that failed.
pub fn open_inputs(input: &Path, reference: &Path, candidate: &Path) -> Result<OpenedInputs> {
    // Contents of the test input are never consulted.
    drop(open_file(input, StreamRole::Input)?);
    let reference = open_file(reference, StreamRole::Reference)?;
    let candidate = open_file(candidate, StreamRole::Candidate)?;

    Ok(OpenedInputs {
        reference: BufReader::new(reference),
        candidate: BufReader::new(candidate),
    })
}

fn open_file(path: &Path, role: StreamRole) -> Result<File> {
    debug!(role = %role, path = %path.display(), "opening");
    File::open(path).map_err(|source| CheckerError::FileOpen {
        role,
        path: path.to_path_buf(),
        source,
    })
}

/// Compare a reference file against a candidate file.
///
/// # Errors
/// Returns an error if either file cannot be opened or read.
pub fn check_files(reference: &Path, candidate: &Path) -> Result<Classification> {
    let reference = BufReader::new(open_file(reference, StreamRole::Reference)?);
    let candidate = BufReader::new(open_file(candidate, StreamRole::Candidate)?);
    compare(ByteStream::new(reference), ByteStream::new(candidate))
}

/// Write the rendered result and flush it.
///
/// # Errors
/// Returns the underlying I/O error if the writer rejects the output.
pub fn write_result<W: Write>(w: &mut W, output: &str) -> std::io::Result<()> {
    w.write_all(output.as_bytes())?;
    w.flush()
}

/// Render the result for stdout, or `None` when the status line is disabled.
///
/// # Errors
/// Returns an error if the formatter fails.
pub fn render_result(
    classification: Classification,
    settings: OutputSettings,
) -> Result<Option<String>> {
    if !settings.status_line {
        return Ok(None);
    }
    settings.format.formatter().format(classification).map(Some)
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
