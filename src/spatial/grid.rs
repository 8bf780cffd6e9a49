//! Cell grid for a single generation run
//!
//! The grid is sized `(n_rows + 1) x (n_cols + 1)` with even `n_rows`/`n_cols`,
//! so rooms and corridors can live on the odd-indexed sub-lattice: lattice node
//! `(i, j)` sits at grid cell `(2i + 1, 2j + 1)`. Dimensions are fixed at
//! construction; only cell contents change.

use ndarray::Array2;

use crate::spatial::attributes::{CellAttribute, CellAttributes};
use crate::spatial::direction::{TunnelCheck, offset_position};

/// Contents of one grid cell
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    /// Attribute tags carried by the cell
    pub attributes: CellAttributes,
    /// Owning room id (0 = none)
    pub room_id: usize,
    /// Optional single-character label
    pub label: Option<char>,
}

impl Cell {
    /// Write a label character and tag the cell as labelled
    pub fn set_label(&mut self, label: char) {
        self.label = Some(label);
        self.attributes.insert(CellAttribute::Label);
    }

    /// Test whether the cell is a room or corridor
    pub fn is_open(&self) -> bool {
        self.attributes.contains_any(CellAttributes::open_space())
    }
}

/// Map a lattice index to its grid coordinate
pub const fn lattice_to_grid(index: usize) -> usize {
    index * 2 + 1
}

/// Rectangular grid of cells addressed by `(row, col)`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellGrid {
    cells: Array2<Cell>,
    n_rows: usize,
    n_cols: usize,
}

impl CellGrid {
    /// Allocate an empty grid spanning `[0, n_rows] x [0, n_cols]`
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            cells: Array2::from_elem((n_rows + 1, n_cols + 1), Cell::default()),
            n_rows,
            n_cols,
        }
    }

    /// Allocate a grid for requested dimensions, rounding each down to even
    pub fn for_requested(rows: usize, cols: usize) -> Self {
        Self::new((rows / 2) * 2, (cols / 2) * 2)
    }

    /// Largest valid row index
    pub const fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Largest valid column index
    pub const fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Number of lattice rows (`n_rows / 2`)
    pub const fn lattice_rows(&self) -> usize {
        self.n_rows / 2
    }

    /// Number of lattice columns (`n_cols / 2`)
    pub const fn lattice_cols(&self) -> usize {
        self.n_cols / 2
    }

    /// Borrow a cell
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.cells.get((row, col))
    }

    /// Mutably borrow a cell
    pub fn get_mut(&mut self, row: usize, col: usize) -> Option<&mut Cell> {
        self.cells.get_mut((row, col))
    }

    /// Attributes of a cell, or `None` when out of bounds
    pub fn attributes(&self, row: usize, col: usize) -> Option<CellAttributes> {
        self.get(row, col).map(|cell| cell.attributes)
    }

    /// Test an attribute; out-of-bounds cells carry nothing
    pub fn has(&self, row: usize, col: usize, attribute: CellAttribute) -> bool {
        self.attributes(row, col)
            .is_some_and(|attributes| attributes.contains(attribute))
    }

    /// Add an attribute to an in-bounds cell
    pub fn insert(&mut self, row: usize, col: usize, attribute: CellAttribute) {
        if let Some(cell) = self.get_mut(row, col) {
            cell.attributes.insert(attribute);
        }
    }

    /// Replace a cell with a fresh empty one
    pub fn reset(&mut self, row: usize, col: usize) {
        if let Some(cell) = self.get_mut(row, col) {
            *cell = Cell::default();
        }
    }

    /// Replace every cell still tagged blocked with a fresh empty one
    ///
    /// Blocked cells are scratch state for placement and must not leak into
    /// the finished map.
    pub fn reset_blocked(&mut self) {
        for cell in &mut self.cells {
            if cell.attributes.contains(CellAttribute::Blocked) {
                *cell = Cell::default();
            }
        }
    }

    /// Test a corridor shape template anchored at `(row, col)`
    ///
    /// Every `corridor` offset must name an in-bounds cell whose attributes are
    /// exactly `{Corridor}`. Every `walled` offset must be out of bounds or hold
    /// no open space.
    pub fn check_tunnel(&self, row: usize, col: usize, check: &TunnelCheck) -> bool {
        let lone_corridor = CellAttributes::from(CellAttribute::Corridor);
        let open_space = CellAttributes::open_space();

        let corridor_ok = check.corridor.iter().all(|&offset| {
            offset_position(row, col, offset)
                .and_then(|(r, c)| self.attributes(r, c))
                .is_some_and(|attributes| attributes == lone_corridor)
        });

        corridor_ok
            && check.walled.iter().all(|&offset| {
                offset_position(row, col, offset)
                    .and_then(|(r, c)| self.attributes(r, c))
                    .is_none_or(|attributes| !attributes.contains_any(open_space))
            })
    }

    /// Iterate every lattice node as `(row, col)` grid coordinates, row-major
    pub fn lattice_nodes(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let cols = self.lattice_cols();
        (0..self.lattice_rows()).flat_map(move |i| {
            (0..cols).map(move |j| (lattice_to_grid(i), lattice_to_grid(j)))
        })
    }

    /// Iterate all cells with their coordinates
    pub fn indexed_cells(&self) -> impl Iterator<Item = ((usize, usize), &Cell)> {
        self.cells.indexed_iter()
    }

    /// Count cells whose attributes intersect `attributes`
    pub fn count_with_any(&self, attributes: CellAttributes) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.attributes.contains_any(attributes))
            .count()
    }
}
