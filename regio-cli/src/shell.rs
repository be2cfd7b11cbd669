//! Interactive query loop.
//!
//! Reads commands from stdin until `quit` or EOF. Lookups here are the same
//! read-only queries the one-shot subcommands run; a miss prints a message
//! and re-prompts instead of exiting.

use crate::error::CliResult;
use crate::output;
use colored::Colorize;
use regio_core::{find_by_code, search_by_name, DivisionTree, SearchOptions};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
commands:
  code <CODE>      exact lookup by division code
  name <PATTERN>   substring search over division names
  stats            dataset diagnostics
  help             this message
  quit             leave the shell";

pub fn run(tree: &DivisionTree, opts: &SearchOptions) -> CliResult<()> {
    println!(
        "{} interactive shell — {} divisions loaded, 'help' for commands",
        "regio".bold(),
        tree.stats().records
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("{} ", "regio>".cyan().bold());
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            // EOF (piped input exhausted or Ctrl-D).
            println!();
            return Ok(());
        };
        let line = line?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let (cmd, arg) = match input.split_once(char::is_whitespace) {
            Some((c, a)) => (c, a.trim()),
            None => (input, ""),
        };

        match cmd {
            "code" => {
                if arg.is_empty() {
                    println!("usage: code <CODE>");
                    continue;
                }
                match find_by_code(tree, arg) {
                    Some(id) => output::print_division(tree, id),
                    None => println!("no division with code '{arg}'"),
                }
            }
            "name" => {
                if arg.is_empty() {
                    println!("usage: name <PATTERN>");
                    continue;
                }
                let matches = search_by_name(tree, arg, opts);
                output::print_matches(tree, &matches, arg);
            }
            "stats" => output::print_stats(tree),
            "help" => println!("{HELP}"),
            "quit" | "exit" => return Ok(()),
            other => println!("unknown command '{other}', 'help' for commands"),
        }
    }
}
