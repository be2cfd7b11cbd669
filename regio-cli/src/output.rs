//! Result rendering: division cards, lineage chains, search summaries.

use colored::Colorize;
use regio_core::{lineage, DivisionTree, NameMatches, NodeId};

/// Print one division as an aligned card, followed by its lineage chain.
pub fn print_division(tree: &DivisionTree, id: NodeId) {
    let region = tree.region(id);

    println!("{} {}", "Name: ".bold(), region.name);
    println!("{} {}", "Code: ".bold(), region.code);
    println!("{} {}", "Level:".bold(), region.level);
    println!("{} {}", "Type: ".bold(), region.division_type);
    match region.avg_house_price {
        Some(price) => println!("{} {:.2}", "Avg. house price:".bold(), price),
        None => println!("{} {}", "Avg. house price:".bold(), "no data".dimmed()),
    }
    match &region.employment_rate {
        Some(rate) => println!("{} {}", "Employment rate: ".bold(), rate),
        None => println!("{} {}", "Employment rate: ".bold(), "no data".dimmed()),
    }

    println!("{}", "Lineage:".bold());
    println!("└─ {}", region.name);
    for (depth, entry) in lineage(tree, id).iter().enumerate() {
        let indent = "   ".repeat(depth + 1);
        println!("{indent}└─ part of {}: {}", entry.level, entry.name);
    }
}

/// Print a name-search result set with separators and a summary line.
pub fn print_matches(tree: &DivisionTree, matches: &NameMatches, pattern: &str) {
    if matches.is_empty() {
        println!("no divisions matching '{pattern}'");
        return;
    }

    for (i, &id) in matches.hits.iter().enumerate() {
        if i > 0 {
            println!("{}", "----------------------------------------".dimmed());
        }
        print_division(tree, id);
    }

    println!();
    if matches.truncated {
        println!(
            "{} match(es) shown; more may exist, raise --limit to see them",
            matches.len()
        );
    } else {
        println!("{} match(es) found", matches.len());
    }
}

/// Print build diagnostics.
pub fn print_stats(tree: &DivisionTree) {
    let stats = tree.stats();
    println!("Records:   {}", stats.records);
    println!("Reachable: {}", stats.reachable);
    println!("Orphans:   {}", stats.orphans);
    if stats.orphans > 0 {
        println!(
            "{} {} record(s) reference a parent code that does not exist",
            "note:".yellow().bold(),
            stats.orphans
        );
    }
}
