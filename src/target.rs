use rand::Rng;
use rand_distr::{Distribution, Triangular};

use super::area::{Cell, SearchArea};
use super::config::{Rect, NUM_REGIONS};

/// True location of the missing target: a 1-based region id and a local
/// cell within that region's grid. Set once per episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Target {
    pub region: usize,
    pub local: Cell,
}

impl Target {
    /// Pixel position on the basemap, for the renderer's found marker.
    pub fn global_position(&self, rects: &[Rect; NUM_REGIONS]) -> (u32, u32) {
        let rect = &rects[self.region - 1];
        (rect.left + self.local.0, rect.top + self.local.1)
    }
}

/// Places the target in a random region, biased toward the middle one.
pub struct TargetPlacer {
    num_regions: usize,
    region_dist: Triangular<f64>,
}

impl TargetPlacer {
    pub fn new(num_regions: usize) -> Self {
        let max = (num_regions + 1) as f64;
        // Peak at the midpoint, truncation below favors the middle region.
        let region_dist = Triangular::new(1.0, max, (1.0 + max) / 2.0).unwrap();
        TargetPlacer {
            num_regions,
            region_dist,
        }
    }

    /// All regions share the same grid dimensions, so any one area suffices
    /// to draw the local coordinate from.
    pub fn place<R: Rng>(&self, area: &SearchArea, rng: &mut R) -> Target {
        let local = (
            rng.gen_range(0..area.width()),
            rng.gen_range(0..area.height()),
        );
        let region = (self.region_dist.sample(rng) as usize).min(self.num_regions);
        Target { region, local }
    }
}
