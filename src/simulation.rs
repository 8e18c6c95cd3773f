use log::{debug, info, warn};
use rand::Rng;

use super::area::SearchArea;
use super::bayes::revise_probs;
use super::config::{SimConfig, NUM_REGIONS};
use super::error::Result;
use super::renderer::Renderer;
use super::sampler::EffectivenessSampler;
use super::search::{conduct_search, union_coverage, SearchOutcome, Sweep};
use super::strategy::{Action, Strategy};
use super::target::{Target, TargetPlacer};

/// What one round produced. On `Found` the episode is over and the caller
/// must reset before executing another round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    Found { rounds: u32, position: (u32, u32) },
    NotFound,
}

/// Supplies one raw menu choice per round in interactive mode.
pub trait Prompter {
    fn next_choice(&mut self, round: u32) -> String;
}

/// Owns all per-episode state and recreates it wholesale at episode
/// boundaries. Nothing survives a reset except the configuration.
pub struct Simulation {
    config: SimConfig,
    sampler: EffectivenessSampler,
    placer: TargetPlacer,
    areas: [SearchArea; NUM_REGIONS],
    probs: [f64; NUM_REGIONS],
    effectiveness: [f64; NUM_REGIONS],
    target: Target,
    round: u32,
}

impl Simulation {
    pub fn new<R: Rng>(config: SimConfig, rng: &mut R) -> Result<Self> {
        let sampler = EffectivenessSampler::from_config(&config)?;
        let placer = TargetPlacer::new(NUM_REGIONS);
        let areas = [
            SearchArea::from_rect(&config.region_rects[0]),
            SearchArea::from_rect(&config.region_rects[1]),
            SearchArea::from_rect(&config.region_rects[2]),
        ];
        let target = placer.place(&areas[0], rng);
        let probs = config.priors;

        Ok(Simulation {
            config,
            sampler,
            placer,
            areas,
            probs,
            effectiveness: [0.0; NUM_REGIONS],
            target,
            round: 1,
        })
    }

    pub fn probs(&self) -> &[f64; NUM_REGIONS] {
        &self.probs
    }

    pub fn effectiveness(&self) -> &[f64; NUM_REGIONS] {
        &self.effectiveness
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn target(&self) -> &Target {
        &self.target
    }

    /// Starts a fresh episode: new target, empty searched sets, priors and
    /// effectiveness back to their initial values.
    pub fn reset_episode<R: Rng>(&mut self, rng: &mut R) {
        for area in &mut self.areas {
            area.reset();
        }
        self.probs = self.config.priors;
        self.effectiveness = [0.0; NUM_REGIONS];
        self.target = self.placer.place(&self.areas[0], rng);
        self.round = 1;
    }

    /// Executes one round: sample effectiveness, run the chosen search(es),
    /// then either report the find or revise the probabilities and advance.
    ///
    /// Regions not searched this round keep the effectiveness they last
    /// achieved, so the Bayes update still discounts them for the coverage
    /// they already have.
    pub fn execute_round<R: Rng>(&mut self, action: Action, rng: &mut R) -> RoundOutcome {
        let sampled = self.sampler.sample(rng);
        let mut found = false;

        match action {
            Action::SearchTwice(region) => {
                let idx = region - 1;
                let e = sampled[idx];

                let (first_outcome, first) =
                    conduct_search(region, &self.areas[idx], e, &self.target, rng);
                if let Sweep::Cells(cells) = &first {
                    self.areas[idx].record_swept(cells);
                }

                let (second_outcome, second) =
                    conduct_search(region, &self.areas[idx], e, &self.target, rng);
                if let Sweep::Cells(cells) = &second {
                    self.areas[idx].record_swept(cells);
                }

                self.effectiveness[idx] = union_coverage(&self.areas[idx], &first, &second);
                found = first_outcome == SearchOutcome::Found
                    || second_outcome == SearchOutcome::Found;
            }
            Action::SearchPair(a, b) => {
                for region in [a, b] {
                    let idx = region - 1;
                    let (outcome, sweep) =
                        conduct_search(region, &self.areas[idx], sampled[idx], &self.target, rng);
                    match sweep {
                        Sweep::Cells(cells) => {
                            self.areas[idx].record_swept(&cells);
                            self.effectiveness[idx] = sampled[idx];
                        }
                        Sweep::Exhausted => self.effectiveness[idx] = 1.0,
                    }
                    found |= outcome == SearchOutcome::Found;
                }
            }
            // Session transitions are handled by the run loops.
            Action::Quit | Action::Restart => unreachable!(),
        }

        if found {
            RoundOutcome::Found {
                rounds: self.round,
                position: self.target.global_position(&self.config.region_rects),
            }
        } else {
            revise_probs(&mut self.probs, &self.effectiveness);
            self.round += 1;
            RoundOutcome::NotFound
        }
    }
}

pub struct BatchReport {
    pub strategy: Strategy,
    pub results: Vec<u32>,
}

impl BatchReport {
    pub fn average_rounds(&self) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        self.results.iter().map(|&r| r as f64).sum::<f64>() / self.results.len() as f64
    }
}

/// Runs the configured number of episodes with the strategy standing in for
/// user input and returns all rounds-to-find results.
pub fn run_batch<R: Rng>(
    config: &SimConfig,
    strategy: Strategy,
    rng: &mut R,
) -> Result<BatchReport> {
    let mut sim = Simulation::new(config.clone(), rng)?;
    let mut results = Vec::with_capacity(config.episodes);

    while results.len() < config.episodes {
        let action = strategy.choose(sim.probs(), rng);
        match sim.execute_round(action, rng) {
            RoundOutcome::Found { rounds, .. } => {
                debug!("episode {} found in {} rounds", results.len() + 1, rounds);
                results.push(rounds);
                sim.reset_episode(rng);
            }
            RoundOutcome::NotFound => {}
        }
    }

    Ok(BatchReport { strategy, results })
}

/// Interactive session loop. Invalid input is reported and re-prompted
/// without touching any state; `Restart` begins a fresh episode in place;
/// `Quit` discards the episode in progress and returns the results so far.
pub fn run_interactive<R: Rng>(
    config: &SimConfig,
    prompter: &mut dyn Prompter,
    renderer: &mut dyn Renderer,
    rng: &mut R,
) -> Result<Vec<u32>> {
    let mut sim = Simulation::new(config.clone(), rng)?;
    renderer.draw_base(config);
    info!("initial probabilities: {:?}", sim.probs());

    let mut results = Vec::new();

    loop {
        let input = prompter.next_choice(sim.round());
        let code = match input.trim().parse::<u8>() {
            Ok(code) => code,
            Err(_) => {
                warn!("invalid menu choice: {:?}", input.trim());
                continue;
            }
        };
        let action = match Action::from_code(code) {
            Ok(action) => action,
            Err(e) => {
                warn!("{e}");
                continue;
            }
        };

        match action {
            Action::Quit => break,
            Action::Restart => {
                sim.reset_episode(rng);
                renderer.draw_base(config);
                info!("restarted, probabilities back to {:?}", sim.probs());
            }
            _ => match sim.execute_round(action, rng) {
                RoundOutcome::Found { rounds, position } => {
                    renderer.mark_found(position);
                    info!("found the target at {:?} after {} rounds", position, rounds);
                    results.push(rounds);
                    sim.reset_episode(rng);
                    renderer.draw_base(config);
                }
                RoundOutcome::NotFound => {
                    info!(
                        "not found; effectiveness {:?}, probabilities {:?}",
                        sim.effectiveness(),
                        sim.probs()
                    );
                }
            },
        }
    }

    Ok(results)
}
