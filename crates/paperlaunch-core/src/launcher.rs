//! The interactive launch flow: collect inputs, invoke the generator, report.

use anyhow::{Context, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::Path;

use crate::config::LaunchConfig;
use crate::filename;
use crate::generator::{Generator, GeneratorStatus};
use crate::opener::Opener;
use crate::prompt;

/// Errors raised before the generator produced a verdict. Generator failures
/// are not errors at this level; they come back as a [`LaunchOutcome`].
#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    /// Pre-invocation failure: output directory, generator pre-check.
    #[error("setup failed: {0:#}")]
    Setup(anyhow::Error),
    /// The generator process could not be spawned or waited on.
    #[error("could not run generator: {0:#}")]
    Spawn(anyhow::Error),
    /// Prompt I/O failed (terminal gone away).
    #[error("prompt failed: {0:#}")]
    Prompt(anyhow::Error),
}

/// Final verdict of one run. Binary: the generator succeeded or it did not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchOutcome {
    Success,
    GeneratorFailed(i32),
}

impl LaunchOutcome {
    /// Process exit code for this outcome: 0 on success, otherwise the
    /// generator's own exit code.
    pub fn exit_code(self) -> i32 {
        match self {
            LaunchOutcome::Success => 0,
            LaunchOutcome::GeneratorFailed(code) => code,
        }
    }
}

/// Exit code for pre-invocation failures, distinct from generator exit codes.
pub const SETUP_EXIT_CODE: i32 = 2;

/// Answers supplied on the command line; any `Some` skips the matching prompt.
#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub url: Option<String>,
    pub output: Option<String>,
    pub no_open: bool,
}

/// Create the output directory if absent; a no-op when it already exists.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create output directory: {}", dir.display()))
}

/// Run the whole launch flow over injected streams, generator, and opener.
///
/// Prompts are written to `output` and answers read from `input`; the
/// generator's own stdout/stderr are inherited and bypass both.
pub fn run<R: BufRead, W: Write>(
    cfg: &LaunchConfig,
    opts: &LaunchOptions,
    input: &mut R,
    output: &mut W,
    generator: &dyn Generator,
    opener: &dyn Opener,
) -> Result<LaunchOutcome, LaunchError> {
    let out_dir = Path::new(&cfg.output_dir);
    ensure_output_dir(out_dir).map_err(LaunchError::Setup)?;

    let url = match &opts.url {
        Some(url) => filename::apply_default(url, &cfg.default_url),
        None => prompt::ask(input, output, "Tool URL", &cfg.default_url)
            .map_err(LaunchError::Prompt)?,
    };

    let raw_name = match &opts.output {
        Some(name) => filename::apply_default(name, &cfg.default_filename),
        None => prompt::ask(input, output, "Output Filename", &cfg.default_filename)
            .map_err(LaunchError::Prompt)?,
    };
    let name = filename::ensure_pdf_suffix(&raw_name);
    let out_path = filename::output_path(out_dir, &name);

    let status = generator
        .run(&url, &out_path)
        .map_err(LaunchError::Spawn)?;

    match status {
        GeneratorStatus::Success => {
            writeln!(output, "Whitepaper generated: {}", out_path.display())
                .map_err(|e| LaunchError::Prompt(e.into()))?;
            if !opts.no_open {
                // Best-effort; never changes the outcome.
                if let Err(err) = opener.open(&out_path) {
                    tracing::debug!("could not open generated file: {:#}", err);
                }
            }
            Ok(LaunchOutcome::Success)
        }
        GeneratorStatus::Failure(code) => {
            writeln!(
                output,
                "Generation failed (exit code {}). Review the generator output above.",
                code
            )
            .map_err(|e| LaunchError::Prompt(e.into()))?;
            Ok(LaunchOutcome::GeneratorFailed(code))
        }
    }
}
