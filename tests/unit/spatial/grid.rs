//! Tests for the cell grid: sizing, access and the tunnel shape check

#[cfg(test)]
mod tests {
    use donjon::spatial::attributes::{CellAttribute, CellAttributes};
    use donjon::spatial::direction::Direction;
    use donjon::spatial::grid::{Cell, CellGrid, lattice_to_grid};

    fn corridor_row(grid: &mut CellGrid, row: usize, cols: std::ops::RangeInclusive<usize>) {
        for c in cols {
            grid.insert(row, c, CellAttribute::Corridor);
        }
    }

    // Tests requested dimensions are floored to even
    #[test]
    fn test_for_requested_floors_to_even() {
        let grid = CellGrid::for_requested(11, 8);
        assert_eq!(grid.n_rows(), 10);
        assert_eq!(grid.n_cols(), 8);
        assert_eq!(grid.lattice_rows(), 5);
        assert_eq!(grid.lattice_cols(), 4);
        assert!(grid.get(10, 8).is_some());
        assert!(grid.get(11, 8).is_none());
    }

    // Tests lattice nodes are odd and row-major
    #[test]
    fn test_lattice_nodes() {
        let grid = CellGrid::new(6, 4);
        let nodes: Vec<_> = grid.lattice_nodes().collect();
        assert_eq!(nodes, vec![(1, 1), (1, 3), (3, 1), (3, 3), (5, 1), (5, 3)]);
        assert_eq!(lattice_to_grid(4), 9);
    }

    // Tests label writes set the label attribute
    #[test]
    fn test_set_label() {
        let mut cell = Cell::default();
        cell.set_label('7');
        assert_eq!(cell.label, Some('7'));
        assert!(cell.attributes.contains(CellAttribute::Label));
        assert!(!cell.is_open());
    }

    // Tests out-of-range access is absent rather than a panic
    #[test]
    fn test_out_of_bounds_is_absent() {
        let mut grid = CellGrid::new(4, 4);
        grid.insert(9, 9, CellAttribute::Room);
        assert!(!grid.has(9, 9, CellAttribute::Room));
        assert_eq!(grid.attributes(5, 0), None);
        grid.reset(7, 7);
    }

    // Tests blocked scratch cells are wiped at the end
    #[test]
    fn test_reset_blocked() {
        let mut grid = CellGrid::new(4, 4);
        grid.insert(0, 0, CellAttribute::Blocked);
        grid.insert(0, 0, CellAttribute::Perimeter);
        grid.insert(1, 1, CellAttribute::Room);

        grid.reset_blocked();

        assert_eq!(grid.attributes(0, 0), Some(CellAttributes::empty()));
        assert!(grid.has(1, 1, CellAttribute::Room));
    }

    // Tests a straight corridor end matches its stair template and a bend does not
    #[test]
    fn test_check_tunnel_stair_end() {
        let mut grid = CellGrid::new(10, 10);
        corridor_row(&mut grid, 5, 1..=9);

        assert!(grid.check_tunnel(5, 1, &Direction::West.stair_end().check));
        assert!(grid.check_tunnel(5, 9, &Direction::East.stair_end().check));
        assert!(!grid.check_tunnel(5, 5, &Direction::West.stair_end().check));

        grid.insert(4, 1, CellAttribute::Corridor);
        assert!(!grid.check_tunnel(5, 1, &Direction::West.stair_end().check));
    }

    // Tests a corridor cell that is also a room is not a lone corridor
    #[test]
    fn test_check_tunnel_requires_lone_corridor() {
        let mut grid = CellGrid::new(10, 10);
        corridor_row(&mut grid, 5, 1..=9);
        grid.insert(5, 1, CellAttribute::Room);

        assert!(!grid.check_tunnel(5, 1, &Direction::West.stair_end().check));
    }

    // Tests walled offsets off the grid count as walled
    #[test]
    fn test_check_tunnel_edge_is_walled() {
        let mut grid = CellGrid::new(4, 4);
        corridor_row(&mut grid, 0, 0..=2);

        assert!(grid.check_tunnel(0, 0, &Direction::East.close_end().check));
        assert!(!grid.check_tunnel(0, 1, &Direction::East.close_end().check));
    }

    // Tests counting by attribute group
    #[test]
    fn test_count_with_any() {
        let mut grid = CellGrid::new(4, 4);
        corridor_row(&mut grid, 1, 1..=3);
        grid.insert(3, 3, CellAttribute::Room);

        assert_eq!(grid.count_with_any(CellAttributes::open_space()), 4);
        assert_eq!(grid.indexed_cells().count(), 25);
    }
}
