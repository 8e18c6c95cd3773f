use std::collections::HashSet;

use super::config::Rect;

/// Local grid coordinate within one search area.
pub type Cell = (u32, u32);

/// One search region, discretized into a grid of cells. Tracks which cells
/// have already been covered during the current episode.
#[derive(Debug, Clone)]
pub struct SearchArea {
    width: u32,
    height: u32,
    searched: HashSet<Cell>,
}

impl SearchArea {
    pub fn new(width: u32, height: u32) -> Self {
        SearchArea {
            width,
            height,
            searched: HashSet::new(),
        }
    }

    pub fn from_rect(rect: &Rect) -> Self {
        SearchArea::new(rect.width(), rect.height())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        (self.width * self.height) as usize
    }

    /// Full ordered cell space of the grid, x-major.
    pub fn cell_space(&self) -> Vec<Cell> {
        let mut cells = Vec::with_capacity(self.cell_count());
        for x in 0..self.width {
            for y in 0..self.height {
                cells.push((x, y));
            }
        }
        cells
    }

    /// Cells not yet covered this episode, in cell-space order.
    pub fn remaining(&self) -> Vec<Cell> {
        self.cell_space()
            .into_iter()
            .filter(|cell| !self.searched.contains(cell))
            .collect()
    }

    pub fn searched(&self) -> &HashSet<Cell> {
        &self.searched
    }

    /// Adds newly covered cells. The searched set only ever grows within an
    /// episode.
    pub fn record_swept(&mut self, cells: &HashSet<Cell>) {
        debug_assert!(cells
            .iter()
            .all(|&(x, y)| x < self.width && y < self.height));
        self.searched.extend(cells.iter().copied());
    }

    pub fn reset(&mut self) {
        self.searched.clear();
    }
}
