mod cli;
mod error;
mod output;
mod shell;

use clap::Parser;
use cli::{Cli, Commands};
use error::{exit_with_error, CliError, CliResult};
use regio_core::{build_tree, find_by_code, search_by_name, DivisionTree, SearchOptions};
use std::path::Path;

fn init_tracing(cli: &Cli) {
    // CLI tracing policy:
    //   --quiet  → always "off" (no logs, no matter what)
    //   --verbose → "info" level for regio crates (useful diagnostics)
    //   default  → "off" (clean terminal output)
    //   RUST_LOG → honoured only with --verbose, for fine-grained control.
    let filter = if cli.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if cli.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "regio_core=debug,regio_ingest=debug,regio=info".into())
    } else {
        tracing_subscriber::EnvFilter::new("off")
    };

    let ansi = !(cli.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.no_color || std::env::var_os("NO_COLOR").is_some() {
        colored::control::set_override(false);
    }

    init_tracing(&cli);

    if let Err(e) = run(cli) {
        exit_with_error(e);
    }
}

/// Load the dataset and build the tree once; every subcommand queries the
/// same read-only structure.
fn load_tree(data: Option<&Path>) -> CliResult<DivisionTree> {
    let path = data.ok_or_else(|| {
        CliError::Usage("no dataset given; pass --data <CSV>".to_string())
    })?;
    let records = regio_ingest::load_regions(path)?;
    Ok(build_tree(records)?)
}

fn run(cli: Cli) -> CliResult<()> {
    let tree = load_tree(cli.data.as_deref())?;

    match cli.command {
        Commands::Code { code } => {
            let code = code.trim();
            if code.is_empty() {
                return Err(CliError::Usage("code must not be empty".to_string()));
            }
            let id = find_by_code(&tree, code)
                .ok_or_else(|| CliError::NotFound(format!("no division with code '{code}'")))?;
            output::print_division(&tree, id);
            Ok(())
        }

        Commands::Name { pattern, limit } => {
            let pattern = pattern.trim();
            if pattern.is_empty() {
                return Err(CliError::Usage("pattern must not be empty".to_string()));
            }
            let matches = search_by_name(&tree, pattern, &SearchOptions { limit });
            output::print_matches(&tree, &matches, pattern);
            Ok(())
        }

        Commands::Stats => {
            output::print_stats(&tree);
            Ok(())
        }

        Commands::Shell => shell::run(&tree, &SearchOptions::default()),
    }
}
