use std::time::Instant;

use rs_occ_core::ranking::{rank, render_table};
use rs_occ_core::{Miner, MiningOptions, NameCorpus};

/// Minimum length of the reported substrings
const MIN_LENGTH: usize = 3;
/// Minimum number of names a substring must appear in
const MIN_OCCURRENCES: usize = 2;
/// Number of rows printed
const RESULT_COUNT: usize = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Load the names, one per line
    // A "names.bin" cache is written next to the file and reused automatically
    let corpus = NameCorpus::load("./data/names.txt")?;

    // Mining options: thresholds, branching strategy and worker threads
    let mut options = MiningOptions::default();
    options.set_min_length(MIN_LENGTH)?;
    options.min_occurrences = MIN_OCCURRENCES;

    // A zero minimum length is rejected
    match options.set_min_length(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Invalid option: {e}"),
    }

    let miner = Miner::new(options);
    let start = Instant::now();
    let findings = miner.mine(corpus.names())?;
    let elapsed = start.elapsed();

    // Most frequent substrings first, with their share of all names
    let ranked = rank(&findings, corpus.len(), RESULT_COUNT);
    print!("{}", render_table(&ranked));
    println!("And it only took {:.2} seconds to get here", elapsed.as_secs_f64());

    Ok(())
}
