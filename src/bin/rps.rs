//! Enumerate every rock-paper-scissors play sequence
//!
//! Prints all 3^rounds sequences, one per line. The round count is capped
//! because the output grows exponentially.

use clap::Parser;
use rucksack::rps::play_sequences;

#[derive(Parser)]
#[command(name = "rps")]
#[command(about = "List all play sequences for a game of N rounds", long_about = None)]
struct Cli {
    /// Number of rounds to play
    #[arg(default_value_t = 4, value_parser = clap::value_parser!(u8).range(..=12))]
    rounds: u8,
}

fn main() {
    let cli = Cli::parse();

    for sequence in play_sequences(cli.rounds as usize) {
        println!("{}", sequence.join(" "));
    }
}
