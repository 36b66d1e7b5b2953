//! Count the ways to make change for an amount in US coins

use clap::Parser;
use rucksack::change::count_ways;

/// US coin denominations, in cents
const DENOMINATIONS: [usize; 5] = [1, 5, 10, 25, 50];

#[derive(Parser)]
#[command(name = "making-change")]
#[command(about = "Count coin combinations summing to an amount", long_about = None)]
struct Cli {
    /// Amount in cents
    amount: usize,
}

fn main() {
    let cli = Cli::parse();

    let ways = count_ways(cli.amount, &DENOMINATIONS);
    println!("There are {} ways to make {} cents.", ways, cli.amount);
}
