//! Plain-text dump of a finished dungeon, one character per cell

use std::fmt::Write;

use crate::layout::dungeon::Dungeon;
use crate::spatial::attributes::CellAttribute;
use crate::spatial::grid::Cell;

/// Glyph for an empty cell
pub const EMPTY_GLYPH: char = ' ';
/// Glyph for room and corridor floor
pub const FLOOR_GLYPH: char = '.';
/// Glyph for room walls
pub const PERIMETER_GLYPH: char = '#';

/// Door glyphs keyed by the attribute stamped on the door cell
const DOOR_GLYPHS: [(CellAttribute, char); 6] = [
    (CellAttribute::Arch, '\''),
    (CellAttribute::Door, '+'),
    (CellAttribute::Locked, 'x'),
    (CellAttribute::Trapped, 't'),
    (CellAttribute::Secret, 's'),
    (CellAttribute::Portc, '%'),
];

/// Character used for a single cell
///
/// Labels win over everything else, then doors that are still open, then
/// floor and walls.
pub fn cell_glyph(cell: &Cell) -> char {
    if let Some(label) = cell.label {
        return label;
    }
    if cell.is_open() {
        return DOOR_GLYPHS
            .iter()
            .find(|(attribute, _)| cell.attributes.contains(*attribute))
            .map_or(FLOOR_GLYPH, |&(_, glyph)| glyph);
    }
    if cell.attributes.contains(CellAttribute::Perimeter) {
        PERIMETER_GLYPH
    } else {
        EMPTY_GLYPH
    }
}

/// Render the whole grid, rows separated by newlines
pub fn render_text(dungeon: &Dungeon) -> String {
    let width = dungeon.n_cols() + 2;
    let mut text = String::with_capacity(width * (dungeon.n_rows() + 1));

    for r in 0..=dungeon.n_rows() {
        for c in 0..=dungeon.n_cols() {
            text.push(dungeon.cell(r, c).map_or(EMPTY_GLYPH, cell_glyph));
        }
        text.push('\n');
    }
    text
}

/// One-line-per-item listing of rooms, doors and stairs
pub fn render_summary(dungeon: &Dungeon) -> String {
    let mut text = String::new();
    let _ = writeln!(
        text,
        "seed {} ({}x{})",
        dungeon.seed(),
        dungeon.n_rows(),
        dungeon.n_cols()
    );

    for room in dungeon.rooms() {
        let _ = writeln!(
            text,
            "room {}: rows {}-{}, cols {}-{}, {}x{} ft, {} doors",
            room.id,
            room.north,
            room.south,
            room.west,
            room.east,
            room.height,
            room.width,
            room.door_count()
        );
    }
    for door in dungeon.doors() {
        let target = door
            .out_id
            .map_or_else(|| "corridor".to_string(), |id| format!("room {id}"));
        let _ = writeln!(
            text,
            "door ({}, {}): {} to {target}",
            door.row, door.col, door.door_type
        );
    }
    for stair in dungeon.stairs() {
        let _ = writeln!(
            text,
            "stair ({}, {}): {} to ({}, {})",
            stair.row, stair.col, stair.key, stair.next_row, stair.next_col
        );
    }
    text
}
