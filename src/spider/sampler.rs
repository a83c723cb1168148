//! Candidate foothold sampling around the body.
//!
//! Grid points are never stored persistently: every tick the sampler scans
//! only the lattice cells overlapping the square of side `2 * reach` around
//! the body and keeps the points inside the reach annulus.

use glam::Vec2;

use crate::constants::SAMPLER_INITIAL_CAPACITY;

/// Integer lattice coordinates of a grid point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub col: i32,
    pub row: i32,
}

impl GridCell {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    pub fn position(self, spacing: f32) -> Vec2 {
        Vec2::new(self.col as f32 * spacing, self.row as f32 * spacing)
    }
}

/// Inclusive column/row range of lattice cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min_col: i32,
    pub max_col: i32,
    pub min_row: i32,
    pub max_row: i32,
}

impl CellRange {
    /// Cells overlapping the square of half-size `radius` around `center`,
    /// clipped to the lattice covering a `bounds`-sized surface.
    pub fn around(center: Vec2, radius: f32, spacing: f32, bounds: Vec2) -> Self {
        Self {
            min_col: ((center.x - radius) / spacing).floor().max(0.0) as i32,
            max_col: ((center.x + radius) / spacing)
                .ceil()
                .min((bounds.x / spacing).floor()) as i32,
            min_row: ((center.y - radius) / spacing).floor().max(0.0) as i32,
            max_row: ((center.y + radius) / spacing)
                .ceil()
                .min((bounds.y / spacing).floor()) as i32,
        }
    }

    pub fn cells(self) -> impl Iterator<Item = GridCell> {
        (self.min_col..=self.max_col)
            .flat_map(move |col| (self.min_row..=self.max_row).map(move |row| GridCell::new(col, row)))
    }
}

/// Candidate grid points for the current tick.
///
/// Stored as parallel buffers that are cleared but never shrunk, so a
/// steady-state tick allocates nothing. Indices are only meaningful until
/// the next call to [`GridSampler::collect`].
#[derive(Debug, Clone)]
pub struct GridSampler {
    xs: Vec<f32>,
    ys: Vec<f32>,
    cells: Vec<GridCell>,
    spacing: f32,
}

impl GridSampler {
    pub fn new() -> Self {
        Self {
            xs: Vec::with_capacity(SAMPLER_INITIAL_CAPACITY),
            ys: Vec::with_capacity(SAMPLER_INITIAL_CAPACITY),
            cells: Vec::with_capacity(SAMPLER_INITIAL_CAPACITY),
            spacing: 0.0,
        }
    }

    /// Gather lattice points whose squared distance from `body` lies in
    /// `(inner_sq, reach * reach]`.
    pub fn collect(&mut self, body: Vec2, reach: f32, inner_sq: f32, spacing: f32, bounds: Vec2) {
        self.xs.clear();
        self.ys.clear();
        self.cells.clear();
        self.spacing = spacing;

        if spacing <= 0.0 {
            return;
        }

        let reach_sq = reach * reach;
        for cell in CellRange::around(body, reach, spacing, bounds).cells() {
            let point = cell.position(spacing);
            let d_sq = point.distance_squared(body);
            if d_sq <= reach_sq && d_sq > inner_sq {
                // Vec growth doubles capacity when a denser lattice needs more room
                self.xs.push(point.x);
                self.ys.push(point.y);
                self.cells.push(cell);
            }
        }
    }

    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn point(&self, index: usize) -> Vec2 {
        Vec2::new(self.xs[index], self.ys[index])
    }

    pub fn cell(&self, index: usize) -> GridCell {
        self.cells[index]
    }

    /// Spacing used by the last collection
    pub fn spacing(&self) -> f32 {
        self.spacing
    }

    pub fn capacity(&self) -> usize {
        self.xs.capacity()
    }

    pub fn points(&self) -> impl Iterator<Item = Vec2> + '_ {
        self.xs.iter().zip(&self.ys).map(|(&x, &y)| Vec2::new(x, y))
    }

    /// Index of the candidate at the lattice point `cell` of a grid with
    /// `spacing`. A point from another spacing matches when it coincides
    /// exactly with a point of the current lattice.
    pub fn index_of(&self, cell: GridCell, spacing: f32) -> Option<usize> {
        let cell = if spacing == self.spacing {
            cell
        } else {
            self.cell_at(cell.position(spacing))?
        };
        self.cells.iter().position(|&c| c == cell)
    }

    /// Cell of the current lattice lying exactly at `position`, if any.
    fn cell_at(&self, position: Vec2) -> Option<GridCell> {
        if self.spacing <= 0.0 {
            return None;
        }
        let cell = GridCell::new(
            (position.x / self.spacing).round() as i32,
            (position.y / self.spacing).round() as i32,
        );
        (cell.position(self.spacing) == position).then_some(cell)
    }
}

impl Default for GridSampler {
    fn default() -> Self {
        Self::new()
    }
}
