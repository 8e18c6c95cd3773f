use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;

use super::area::{Cell, SearchArea};
use super::target::Target;

/// Result of one search pass over a region: either the set of newly covered
/// cells, or nothing left to cover. The explicit variant replaces any
/// sentinel value so callers cannot do set arithmetic on "exhausted".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sweep {
    Cells(HashSet<Cell>),
    Exhausted,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found,
    NotFound,
}

/// Runs one search pass over `area` with the given effectiveness.
///
/// The pass covers `⌊cell_count × effectiveness⌋` cells drawn uniformly from
/// the cells not yet searched this episode. The remaining cells are shuffled
/// before truncation so no part of the grid is systematically favored.
/// The caller is responsible for recording the swept cells on the area.
pub fn conduct_search<R: Rng>(
    region: usize,
    area: &SearchArea,
    effectiveness: f64,
    target: &Target,
    rng: &mut R,
) -> (SearchOutcome, Sweep) {
    let mut remaining = area.remaining();
    if remaining.is_empty() {
        return (SearchOutcome::NotFound, Sweep::Exhausted);
    }

    remaining.shuffle(rng);
    let quota = (area.cell_count() as f64 * effectiveness) as usize;
    let swept: HashSet<Cell> = remaining.into_iter().take(quota).collect();

    let outcome = if region == target.region && swept.contains(&target.local) {
        SearchOutcome::Found
    } else {
        SearchOutcome::NotFound
    };

    (outcome, Sweep::Cells(swept))
}

/// Fraction of the grid covered by two consecutive passes in one round,
/// capped at 1.0 when the region ran out of cells.
pub fn union_coverage(area: &SearchArea, first: &Sweep, second: &Sweep) -> f64 {
    match (first, second) {
        (Sweep::Cells(a), Sweep::Cells(b)) => {
            a.union(b).count() as f64 / area.cell_count() as f64
        }
        _ => 1.0,
    }
}
