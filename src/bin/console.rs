extern crate sarsim;

use std::io::{self, Write};

use rand::rngs::StdRng;
use rand::SeedableRng;

use sarsim::*;

struct StdinPrompter;

impl Prompter for StdinPrompter {
    fn next_choice(&mut self, round: u32) -> String {
        println!("\nSearch {round}");
        println!(
            "
        Choose next areas to search:

        0 - Quit
        1 - Search Area 1 twice
        2 - Search Area 2 twice
        3 - Search Area 3 twice
        4 - Search Areas 1 & 2
        5 - Search Areas 1 & 3
        6 - Search Areas 2 & 3
        7 - Start Over
        "
        );
        print!("Enter choice: ");
        io::stdout().flush().unwrap();

        let mut line = String::new();
        io::stdin().read_line(&mut line).unwrap();
        line
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let config = SimConfig::default();
    let mut rng = StdRng::from_entropy();

    let results = run_interactive(&config, &mut StdinPrompter, &mut NoopRenderer, &mut rng)?;

    if !results.is_empty() {
        let average = results.iter().map(|&r| r as f64).sum::<f64>() / results.len() as f64;
        println!(
            "\n{} target(s) found, average {:.4} rounds to find",
            results.len(),
            average
        );
    }

    Ok(())
}
