use getty_scraper::cli::Cli;
use getty_scraper::logging;

fn main() {
    // Initialize logging as early as possible.
    logging::init_logging();

    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("getty-scraper error: {:#}", err);
        std::process::exit(1);
    }
}
