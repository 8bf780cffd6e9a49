//! Spatial data structures for the dungeon grid
//!
//! This module contains the foundation every builder works on:
//! - Cell attribute sets
//! - The fixed-size cell grid
//! - Direction tables and corridor shape templates
//! - Silhouette masks

/// Fixed-size attribute sets carried by every cell
pub mod attributes;
/// Compass directions and corridor shape templates
pub mod direction;
/// Cell grid allocation, lookup and cleanup
pub mod grid;
/// Silhouette masks applied before placement
pub mod mask;

pub use attributes::{CellAttribute, CellAttributes};
pub use direction::Direction;
pub use grid::{Cell, CellGrid};
pub use mask::Silhouette;
