//! compliance-flow CLI - Inspect stage progression of compliance review sessions

use clap::Parser;
use compliance_flow::cli::{Cli, Commands};
use compliance_flow::errors::to_exit_code;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; RUST_LOG wins over the verbosity flags
    let default_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = run(cli);

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(to_exit_code(&e));
        }
    }
}

fn run(cli: Cli) -> compliance_flow::Result<()> {
    match cli.command {
        Some(Commands::Stages { json }) => {
            compliance_flow::cli::commands::stages::run(cli.cwd.as_deref(), json)
        }
        Some(Commands::Inspect { session, json }) => {
            compliance_flow::cli::commands::inspect::run(cli.cwd.as_deref(), &session, json)
        }
        Some(Commands::Check {
            session,
            stage,
            json,
        }) => {
            compliance_flow::cli::commands::check::run(cli.cwd.as_deref(), &session, stage, json)
        }
        None => {
            // Default to showing help - clap handles this
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
