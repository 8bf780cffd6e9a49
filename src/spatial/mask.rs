//! Dungeon silhouettes stamped onto the grid before any placement

use clap::ValueEnum;
use std::fmt;

use crate::spatial::attributes::CellAttribute;
use crate::spatial::grid::CellGrid;

/// Overall dungeon outline
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum)]
pub enum Silhouette {
    /// Square ring with a blocked centre
    Box,
    /// Plus-shaped outline with blocked corners
    Cross,
    /// Circular vignette
    Round,
}

const BOX_PATTERN: [[u8; 3]; 3] = [[1, 1, 1], [1, 0, 1], [1, 1, 1]];
const CROSS_PATTERN: [[u8; 3]; 3] = [[0, 1, 0], [1, 1, 1], [0, 1, 0]];

impl Silhouette {
    /// Fixed 0/1 template for pattern silhouettes; `None` for computed ones
    pub const fn pattern(self) -> Option<&'static [[u8; 3]; 3]> {
        match self {
            Self::Box => Some(&BOX_PATTERN),
            Self::Cross => Some(&CROSS_PATTERN),
            Self::Round => None,
        }
    }
}

impl fmt::Display for Silhouette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Box => "box",
            Self::Cross => "cross",
            Self::Round => "round",
        };
        f.write_str(name)
    }
}

/// Mark every cell outside the silhouette as blocked
///
/// `None` leaves the grid fully open.
pub fn apply_silhouette(grid: &mut CellGrid, silhouette: Option<Silhouette>) {
    let Some(silhouette) = silhouette else {
        return;
    };

    match silhouette.pattern() {
        Some(pattern) => mask_cells(grid, pattern),
        None => round_mask(grid),
    }
}

/// Nearest-neighbour upscale of a template; template value 0 blocks the cell
fn mask_cells<const R: usize, const C: usize>(grid: &mut CellGrid, pattern: &[[u8; C]; R]) {
    let row_scale = R as f64 / (grid.n_rows() + 1) as f64;
    let col_scale = C as f64 / (grid.n_cols() + 1) as f64;

    for r in 0..=grid.n_rows() {
        for c in 0..=grid.n_cols() {
            let template_r = (r as f64 * row_scale).floor() as usize;
            let template_c = (c as f64 * col_scale).floor() as usize;
            let value = pattern
                .get(template_r)
                .and_then(|row| row.get(template_c))
                .copied();
            if value == Some(0) {
                grid.insert(r, c, CellAttribute::Blocked);
            }
        }
    }
}

/// Block every cell further than `n_cols / 2` from the grid centre
fn round_mask(grid: &mut CellGrid) {
    let center_r = grid.n_rows() as f64 / 2.0;
    let center_c = grid.n_cols() as f64 / 2.0;

    for r in 0..=grid.n_rows() {
        for c in 0..=grid.n_cols() {
            let d_r = r as f64 - center_r;
            let d_c = c as f64 - center_c;
            if d_r.hypot(d_c) > center_c {
                grid.insert(r, c, CellAttribute::Blocked);
            }
        }
    }
}
