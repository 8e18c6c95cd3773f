extern crate sarsim;

use rand::rngs::StdRng;
use rand::SeedableRng;

use sarsim::*;

fn main() -> Result<()> {
    env_logger::init();

    let config = SimConfig::default();
    let mut rng = StdRng::from_entropy();

    println!(
        "Comparing strategies over {} episodes each (effectiveness {}..{}):",
        config.episodes, config.effectiveness_min, config.effectiveness_max
    );

    for strategy in [Strategy::SearchOneTwice, Strategy::SearchTwoOnce] {
        let report = run_batch(&config, strategy, &mut rng)?;
        println!(
            "{:?}: average {:.4} rounds to find",
            report.strategy,
            report.average_rounds()
        );
    }

    Ok(())
}
