use paperlaunch_core::logging;

mod cli;

fn main() {
    // Initialize logging as early as possible; fall back to stderr if the
    // state directory is unwritable.
    if logging::init_logging().is_err() {
        logging::init_logging_stderr();
    }

    std::process::exit(cli::run_from_args());
}
