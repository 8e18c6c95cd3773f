pub const NUM_REGIONS: usize = 3;

/// Pixel-space rectangle, upper-left corner inclusive, lower-right exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Rect {
    pub const fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Rect {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Initial belief that the target is in each region.
    pub priors: [f64; NUM_REGIONS],
    /// Band the per-round search effectiveness is drawn from.
    pub effectiveness_min: f64,
    pub effectiveness_max: f64,
    /// Region boundaries on the basemap. Only the renderer cares about the
    /// absolute positions; the grids all share the same dimensions.
    pub region_rects: [Rect; NUM_REGIONS],
    /// Last known position marker on the basemap.
    pub last_known: (u32, u32),
    /// Episode budget for batch runs.
    pub episodes: usize,
}

impl Default for SimConfig {
    fn default() -> Self {
        SimConfig {
            priors: [0.2, 0.5, 0.3],
            effectiveness_min: 0.2,
            effectiveness_max: 0.9,
            region_rects: [
                Rect::new(130, 265, 180, 315),
                Rect::new(80, 255, 130, 305),
                Rect::new(105, 205, 155, 255),
            ],
            last_known: (160, 290),
            episodes: 10_000,
        }
    }
}

impl SimConfig {
    /// Small grids and a short episode budget, for tests.
    #[cfg(test)]
    pub fn small() -> Self {
        SimConfig {
            region_rects: [
                Rect::new(0, 0, 5, 5),
                Rect::new(10, 0, 15, 5),
                Rect::new(20, 0, 25, 5),
            ],
            episodes: 25,
            ..Default::default()
        }
    }
}
