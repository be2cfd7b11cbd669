use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "regio", about = "Administrative-division query CLI", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the division dataset (CSV: code,name,level,parent_code,type[,price,employment])
    #[arg(long, short = 'd', global = true)]
    pub data: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output (also respects NO_COLOR env var)
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Look up one division by its exact code
    Code {
        /// Division code, e.g. 110101000000
        code: String,
    },

    /// Search divisions whose name contains a pattern (case-sensitive)
    Name {
        /// Substring to search for, e.g. 京
        pattern: String,

        /// Stop after this many matches
        #[arg(long, default_value_t = 5)]
        limit: usize,
    },

    /// Show dataset diagnostics (record, reachable and orphan counts)
    Stats,

    /// Interactive query loop (code/name lookups until quit)
    Shell,
}
