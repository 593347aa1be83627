use clap::Parser;
use oox::cli::{Cli, Commands};
use oox::cli_handlers;
use std::process;

fn main() {
    // Log to stderr so stdout stays clean for JSON output
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Calculate { file, pretty } => {
            cli_handlers::handle_calculate(file.as_deref(), pretty)
        }
        Commands::Order { file, json } => cli_handlers::handle_order(file.as_deref(), json),
        Commands::Tiers { file, set } => cli_handlers::handle_tiers(file.as_deref(), &set),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
