//! Tests for silhouettes stamped before placement

#[cfg(test)]
mod tests {
    use donjon::spatial::attributes::CellAttribute;
    use donjon::spatial::grid::CellGrid;
    use donjon::spatial::mask::{Silhouette, apply_silhouette};

    fn masked(silhouette: Option<Silhouette>) -> CellGrid {
        let mut grid = CellGrid::for_requested(21, 21);
        apply_silhouette(&mut grid, silhouette);
        grid
    }

    // Tests no silhouette leaves every cell open
    #[test]
    fn test_no_silhouette() {
        let grid = masked(None);
        assert!(
            grid.indexed_cells()
                .all(|(_, cell)| !cell.attributes.contains(CellAttribute::Blocked))
        );
    }

    // Tests the box blocks the centre and keeps the border ring
    #[test]
    fn test_box() {
        let grid = masked(Some(Silhouette::Box));
        assert!(grid.has(10, 10, CellAttribute::Blocked));
        assert!(!grid.has(0, 0, CellAttribute::Blocked));
        assert!(!grid.has(20, 10, CellAttribute::Blocked));
    }

    // Tests the cross blocks the corners and keeps the centre
    #[test]
    fn test_cross() {
        let grid = masked(Some(Silhouette::Cross));
        assert!(grid.has(0, 0, CellAttribute::Blocked));
        assert!(grid.has(20, 20, CellAttribute::Blocked));
        assert!(!grid.has(10, 10, CellAttribute::Blocked));
        assert!(!grid.has(0, 10, CellAttribute::Blocked));
    }

    // Tests the round mask blocks exactly the cells beyond half the width from the centre
    #[test]
    fn test_round() {
        let grid = masked(Some(Silhouette::Round));
        let center_r = grid.n_rows() as f64 / 2.0;
        let radius = grid.n_cols() as f64 / 2.0;

        for ((r, c), cell) in grid.indexed_cells() {
            let distance = (r as f64 - center_r).hypot(c as f64 - radius);
            assert_eq!(
                cell.attributes.contains(CellAttribute::Blocked),
                distance > radius,
                "cell ({r}, {c}) at distance {distance}"
            );
        }
        assert!(grid.has(0, 0, CellAttribute::Blocked));
        assert!(!grid.has(10, 10, CellAttribute::Blocked));
    }

    // Tests templates and names
    #[test]
    fn test_pattern_and_display() {
        assert!(Silhouette::Round.pattern().is_none());
        assert_eq!(
            Silhouette::Box
                .pattern()
                .and_then(|pattern| pattern.get(1))
                .and_then(|row| row.get(1))
                .copied(),
            Some(0)
        );
        assert_eq!(Silhouette::Cross.to_string(), "cross");
    }
}
