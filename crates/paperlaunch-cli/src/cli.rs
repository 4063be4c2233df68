use anyhow::Result;
use clap::Parser;
use std::io;

use paperlaunch_core::config;
use paperlaunch_core::generator::GeneratorCommand;
use paperlaunch_core::launcher::{self, LaunchOptions, SETUP_EXIT_CODE};
use paperlaunch_core::opener::{Platform, PlatformOpener};

/// Interactive launcher for the whitepaper generator.
///
/// With no arguments it prompts for a tool URL and output filename; pass
/// `--url`/`--output` to answer up front.
#[derive(Debug, Parser)]
#[command(name = "paperlaunch")]
#[command(about = "Generate a whitepaper PDF via the external generator", long_about = None)]
pub struct Cli {
    /// Tool URL embedded in the whitepaper (skips the URL prompt).
    #[arg(long)]
    pub url: Option<String>,

    /// Output filename; `.pdf` is appended if missing (skips the filename prompt).
    #[arg(long)]
    pub output: Option<String>,

    /// Do not open the generated PDF after a successful run.
    #[arg(long)]
    pub no_open: bool,
}

impl Cli {
    fn options(self) -> LaunchOptions {
        LaunchOptions {
            url: self.url,
            output: self.output,
            no_open: self.no_open,
        }
    }
}

/// Parse arguments, run the launch flow, and return the process exit code:
/// 0 on success, the generator's exit code on generation failure, and
/// [`SETUP_EXIT_CODE`] when setup fails before the generator runs.
pub fn run_from_args() -> i32 {
    let cli = Cli::parse();
    match run(cli.options()) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("paperlaunch error: {:#}", err);
            SETUP_EXIT_CODE
        }
    }
}

fn run(opts: LaunchOptions) -> Result<i32> {
    let cfg = config::load_or_init()?;
    tracing::debug!("loaded config: {:?}", cfg);

    let generator = GeneratorCommand::resolve(&cfg);
    generator.precheck()?;

    let opener = PlatformOpener::new(Platform::current());

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();

    let outcome = launcher::run(&cfg, &opts, &mut input, &mut output, &generator, &opener)?;
    Ok(outcome.exit_code())
}
