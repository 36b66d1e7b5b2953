//! Whole-batch count for a fixed sample recipe and pantry
//!
//! Edit the constants below to try different inputs.

use clap::Parser;
use rucksack::recipes::batches;
use rustc_hash::FxHashMap;

#[derive(Parser)]
#[command(name = "recipe-batches")]
#[command(about = "How many whole batches the pantry supports", long_about = None)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();

    let recipe: FxHashMap<_, _> = [("milk", 100), ("butter", 50), ("flour", 5)]
        .into_iter()
        .collect();
    let pantry: FxHashMap<_, _> = [("milk", 132), ("butter", 48), ("flour", 51)]
        .into_iter()
        .collect();

    println!(
        "{} batches can be made from the available ingredients.",
        batches(&recipe, &pantry)
    );
}
