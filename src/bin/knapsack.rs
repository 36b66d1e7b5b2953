//! Greedy knapsack selection over an item file
//!
//! Reads `index size value` triples, one per line, and fills a knapsack of
//! the given capacity best-ratio-first.

use anyhow::{Context, Result};
use clap::Parser;
use rucksack::knapsack::{self, Item};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Greedily fill a knapsack from an item file", long_about = None)]
struct Cli {
    /// Item file with one `index size value` triple per line
    file: PathBuf,

    /// Total size the knapsack can hold
    capacity: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let contents = fs::read_to_string(&cli.file)
        .with_context(|| format!("reading item file {}", cli.file.display()))?;

    let mut items = Vec::new();
    for (number, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let item: Item = line
            .parse()
            .with_context(|| format!("{}:{}: bad item line", cli.file.display(), number + 1))?;
        items.push(item);
    }

    let selection = knapsack::solve(&items, cli.capacity);
    println!("Chosen: {:?}, value: {}", selection.chosen, selection.value);
    Ok(())
}
