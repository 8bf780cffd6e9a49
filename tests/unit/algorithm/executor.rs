//! Tests for generation parameters and the staged builder

#[cfg(test)]
mod tests {
    use donjon::algorithm::corridors::CorridorLayout;
    use donjon::algorithm::executor::{DungeonBuilder, DungeonConfig, generate};
    use donjon::algorithm::rooms::RoomLayout;
    use donjon::io::configuration::{DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_SEED};
    use donjon::io::error::GenerationError;
    use donjon::spatial::attributes::{CellAttribute, CellAttributes};
    use donjon::spatial::mask::Silhouette;

    fn small_config(seed: u64) -> DungeonConfig {
        DungeonConfig {
            rows: 31,
            cols: 31,
            room_min: 2,
            room_max: 4,
            seed,
            ..DungeonConfig::default()
        }
    }

    fn rejected_parameter(config: &DungeonConfig) -> Option<&'static str> {
        match config.validate() {
            Err(GenerationError::InvalidParameter { parameter, .. }) => Some(parameter),
            _ => None,
        }
    }

    // Tests defaults pass validation
    #[test]
    fn test_default_config() {
        let config = DungeonConfig::default();
        assert_eq!(config.room_min, DEFAULT_ROOM_MIN);
        assert_eq!(config.room_max, DEFAULT_ROOM_MAX);
        assert_eq!(config.seed, DEFAULT_SEED);
        assert_eq!(config.room_layout, RoomLayout::Packed);
        assert!(config.silhouette.is_none());
        assert!(config.validate().is_ok());
    }

    // Tests presets overwrite the straightness only
    #[test]
    fn test_with_corridor_layout() {
        let config = DungeonConfig::default().with_corridor_layout(CorridorLayout::Straight);
        assert_eq!(config.straightness, 100);
        assert_eq!(config.rows, DungeonConfig::default().rows);
    }

    // Tests each validation rule names the offending parameter
    #[test]
    fn test_validate_rejections() {
        let base = DungeonConfig::default();

        let cases = [
            (DungeonConfig { rows: 2, ..base }, "rows"),
            (DungeonConfig { rows: 10_001, ..base }, "rows"),
            (DungeonConfig { cols: 0, ..base }, "cols"),
            (DungeonConfig { room_min: 0, ..base }, "room_min"),
            (
                DungeonConfig {
                    room_min: 6,
                    room_max: 5,
                    ..base
                },
                "room_max",
            ),
            (
                DungeonConfig {
                    straightness: 101,
                    ..base
                },
                "straightness",
            ),
            (
                DungeonConfig {
                    dead_end_removal: 200,
                    ..base
                },
                "dead_end_removal",
            ),
        ];

        for (config, parameter) in cases {
            assert_eq!(rejected_parameter(&config), Some(parameter));
        }
    }

    // Tests boundary values are accepted
    #[test]
    fn test_validate_boundaries() {
        let config = DungeonConfig {
            rows: 3,
            cols: 10_000,
            room_min: 4,
            room_max: 4,
            straightness: 100,
            dead_end_removal: 100,
            ..DungeonConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    // Tests identical parameters give identical dungeons
    #[test]
    fn test_generate_deterministic() {
        let first = generate(&small_config(77)).expect("Failed to generate dungeon");
        let second = generate(&small_config(77)).expect("Failed to generate dungeon");
        assert_eq!(first, second);
        assert_eq!(first.rng().draws(), second.rng().draws());
    }

    // Tests the staged builder matches one-shot generation
    #[test]
    fn test_builder_matches_generate() {
        let mut builder = DungeonBuilder::new(small_config(12));
        builder.run();
        let staged = builder.build().expect("Failed to build dungeon");

        let direct = generate(&small_config(12)).expect("Failed to generate dungeon");
        assert_eq!(staged, direct);
    }

    // Tests stages leave the expected marks on the grid
    #[test]
    fn test_builder_stages() {
        let mut builder = DungeonBuilder::new(small_config(12));
        builder.place_rooms();
        assert!(!builder.rooms().rooms().is_empty());
        assert_eq!(
            builder.grid().count_with_any(CellAttribute::Corridor.into()),
            0
        );

        builder.open_rooms();
        assert!(
            builder
                .rooms()
                .rooms()
                .iter()
                .any(|room| room.doors.values().any(|doors| !doors.is_empty()))
        );

        builder.label_rooms();
        builder.carve_corridors();
        assert!(builder.grid().count_with_any(CellAttribute::Corridor.into()) > 0);

        builder.place_stairs();
        builder.clean();
        assert!(
            builder
                .grid()
                .indexed_cells()
                .all(|(_, cell)| !cell.attributes.contains(CellAttribute::Blocked))
        );
    }

    // Tests a silhouette blocks cells only until cleanup
    #[test]
    fn test_builder_silhouette() {
        let config = DungeonConfig {
            silhouette: Some(Silhouette::Cross),
            ..small_config(5)
        };
        let builder = DungeonBuilder::new(config);
        assert!(
            builder
                .grid()
                .count_with_any(CellAttributes::from(CellAttribute::Blocked))
                > 0
        );

        let dungeon = generate(&config).expect("Failed to generate dungeon");
        assert_eq!(
            dungeon
                .cells()
                .count_with_any(CellAttributes::from(CellAttribute::Blocked)),
            0
        );
    }
}
