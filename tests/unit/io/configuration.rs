//! Tests for generation constants and defaults

#[cfg(test)]
mod tests {
    use donjon::io::configuration::{
        DEFAULT_COLS, DEFAULT_DEAD_END_REMOVAL, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_ROWS,
        DEFAULT_STAIRS, DEFAULT_STRAIGHTNESS, DOOR_ARCH_BELOW, DOOR_DRAW_UNITS, DOOR_LOCK_BELOW,
        DOOR_OPEN_BELOW, DOOR_SECRET_BELOW, DOOR_TRAP_BELOW, FEET_PER_CELL, MAX_GRID_DIMENSION,
        MAX_INDIVIDUAL_PROGRESS_BARS, MAX_ROOMS, MIN_GRID_DIMENSION, OUTPUT_EXTENSION,
        OUTPUT_PREFIX,
    };

    // Tests default dimensions and room sizes
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_ROWS, 49);
        assert_eq!(DEFAULT_COLS, 49);
        assert_eq!(DEFAULT_ROOM_MIN, 5);
        assert_eq!(DEFAULT_ROOM_MAX, 12);
        assert_eq!(DEFAULT_STRAIGHTNESS, 50);
        assert_eq!(DEFAULT_DEAD_END_REMOVAL, 50);
        assert_eq!(DEFAULT_STAIRS, 2);
    }

    // Tests door thresholds climb strictly toward the draw range
    #[test]
    fn test_door_thresholds_ordered() {
        let thresholds = [
            DOOR_ARCH_BELOW,
            DOOR_OPEN_BELOW,
            DOOR_LOCK_BELOW,
            DOOR_TRAP_BELOW,
            DOOR_SECRET_BELOW,
            DOOR_DRAW_UNITS,
        ];
        assert!(thresholds.is_sorted());
        assert_eq!(thresholds, [15, 60, 75, 90, 100, 110]);
    }

    // Tests limits and scale
    #[test]
    fn test_limits() {
        assert_eq!(MIN_GRID_DIMENSION, 3);
        assert_eq!(MAX_GRID_DIMENSION, 10_000);
        assert_eq!(MAX_ROOMS, 999);
        assert_eq!(FEET_PER_CELL, 10);
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
    }

    // Tests dump filename parts
    #[test]
    fn test_output_naming() {
        assert_eq!(OUTPUT_PREFIX, "dungeon_");
        assert_eq!(OUTPUT_EXTENSION, "txt");
    }
}
