mod adapters;
mod commands;
mod configs;
mod container;
mod core;
mod errors;
mod logging;
mod usecases;

fn main() {
    logging::init();

    if let Err(e) = commands::Cli::execute() {
        tracing::debug!(error = ?e, "command failed");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
