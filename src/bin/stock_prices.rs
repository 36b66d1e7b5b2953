//! Best single buy/sell profit over a series of stock prices

use clap::Parser;
use rucksack::prices::max_profit;

#[derive(Parser)]
#[command(name = "stock-prices")]
#[command(about = "Find the max single buy/sell profit from prices", long_about = None)]
struct Cli {
    /// Integer prices in trading order, oldest first
    #[arg(required = true, num_args = 2..)]
    prices: Vec<i64>,
}

fn main() {
    let cli = Cli::parse();

    println!(
        "A profit of ${} can be made from the stock prices {:?}.",
        max_profit(&cli.prices),
        cli.prices
    );
}
