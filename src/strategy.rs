use rand::seq::SliceRandom;
use rand::Rng;

use super::config::NUM_REGIONS;
use super::error::{Result, SimError};

const PAIRS: [(usize, usize); 3] = [(1, 2), (1, 3), (2, 3)];

/// One menu action per round. Region ids are 1-based; pairs are stored with
/// the lower region first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SearchTwice(usize),
    SearchPair(usize, usize),
    Restart,
}

impl Action {
    pub fn from_code(code: u8) -> Result<Action> {
        match code {
            0 => Ok(Action::Quit),
            1..=3 => Ok(Action::SearchTwice(code as usize)),
            4 => Ok(Action::SearchPair(1, 2)),
            5 => Ok(Action::SearchPair(1, 3)),
            6 => Ok(Action::SearchPair(2, 3)),
            7 => Ok(Action::Restart),
            other => Err(SimError::InvalidChoice(other.to_string())),
        }
    }

    pub fn code(&self) -> u8 {
        match *self {
            Action::Quit => 0,
            Action::SearchTwice(region) => region as u8,
            Action::SearchPair(1, 2) => 4,
            Action::SearchPair(1, 3) => 5,
            Action::SearchPair(2, 3) => 6,
            Action::SearchPair(_, _) => unreachable!(),
            Action::Restart => 7,
        }
    }
}

/// The two decision policies compared by the batch driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Search the single most probable region twice.
    SearchOneTwice,
    /// Search the two most probable regions once each.
    SearchTwoOnce,
}

impl Strategy {
    pub fn choose<R: Rng>(&self, probs: &[f64; NUM_REGIONS], rng: &mut R) -> Action {
        match self {
            Strategy::SearchOneTwice => Action::SearchTwice(pick_single(probs, rng)),
            Strategy::SearchTwoOnce => {
                let (a, b) = pick_pair(probs, rng);
                Action::SearchPair(a, b)
            }
        }
    }
}

/// Region with the highest probability, chosen uniformly among exact ties.
pub fn pick_single<R: Rng>(probs: &[f64; NUM_REGIONS], rng: &mut R) -> usize {
    let best = probs.iter().copied().fold(f64::MIN, f64::max);
    let tied: Vec<usize> = probs
        .iter()
        .enumerate()
        .filter(|(_, p)| **p == best)
        .map(|(i, _)| i + 1)
        .collect();
    *tied.choose(rng).unwrap()
}

/// Pair of regions with the highest combined probability mass, chosen
/// uniformly among tied pairs.
pub fn pick_pair<R: Rng>(probs: &[f64; NUM_REGIONS], rng: &mut R) -> (usize, usize) {
    let mass = |&(a, b): &(usize, usize)| probs[a - 1] + probs[b - 1];
    let best = PAIRS.iter().map(mass).fold(f64::MIN, f64::max);
    let tied: Vec<(usize, usize)> = PAIRS
        .iter()
        .filter(|pair| mass(pair) == best)
        .copied()
        .collect();
    *tied.choose(rng).unwrap()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(17)
    }

    #[test]
    fn single_picks_unique_maximum() {
        assert_eq!(pick_single(&[0.1, 0.3, 0.6], &mut rng()), 3);
        assert_eq!(pick_single(&[0.4, 0.3, 0.3], &mut rng()), 1);
        assert_eq!(pick_single(&[0.1, 0.7, 0.2], &mut rng()), 2);
    }

    #[test]
    fn single_breaks_ties_within_tied_set() {
        let mut rng = rng();
        for _ in 0..50 {
            assert!([2, 3].contains(&pick_single(&[0.2, 0.4, 0.4], &mut rng)));
            assert!([1, 2].contains(&pick_single(&[0.4, 0.4, 0.2], &mut rng)));
            assert!([1, 3].contains(&pick_single(&[0.4, 0.2, 0.4], &mut rng)));
            assert!([1, 2, 3].contains(&pick_single(&[0.3, 0.3, 0.3], &mut rng)));
        }
    }

    #[test]
    fn pair_picks_two_highest() {
        assert_eq!(pick_pair(&[0.1, 0.3, 0.6], &mut rng()), (2, 3));
        assert_eq!(pick_pair(&[0.4, 0.3, 0.4], &mut rng()), (1, 3));
        assert_eq!(pick_pair(&[0.4, 0.4, 0.2], &mut rng()), (1, 2));
        assert_eq!(pick_pair(&[0.2, 0.4, 0.4], &mut rng()), (2, 3));
    }

    #[test]
    fn pair_breaks_ties_among_equal_masses() {
        let mut rng = rng();
        for _ in 0..50 {
            // Two tied at the bottom: both pairs containing the maximum.
            assert!([(1, 3), (2, 3)].contains(&pick_pair(&[0.2, 0.2, 0.6], &mut rng)));
            assert!([(1, 2), (2, 3)].contains(&pick_pair(&[0.2, 0.6, 0.2], &mut rng)));
            assert!([(1, 2), (1, 3)].contains(&pick_pair(&[0.6, 0.2, 0.2], &mut rng)));
            // Three-way tie: any pair.
            let pair = pick_pair(&[0.33, 0.33, 0.33], &mut rng);
            assert!(PAIRS.contains(&pair));
        }
    }

    #[test]
    fn action_codes_round_trip() {
        for code in 0..=7 {
            let action = Action::from_code(code).unwrap();
            assert_eq!(action.code(), code);
        }
        assert!(Action::from_code(8).is_err());
        assert!(Action::from_code(42).is_err());
    }

    #[test]
    fn strategy_wraps_policies() {
        assert_eq!(
            Strategy::SearchOneTwice.choose(&[0.1, 0.7, 0.2], &mut rng()),
            Action::SearchTwice(2)
        );
        assert_eq!(
            Strategy::SearchTwoOnce.choose(&[0.1, 0.3, 0.6], &mut rng()),
            Action::SearchPair(2, 3)
        );
    }
}
