//! Tests for command-line parsing and batch output

#[cfg(test)]
mod tests {
    use clap::Parser;
    use donjon::algorithm::corridors::CorridorLayout;
    use donjon::algorithm::rooms::RoomLayout;
    use donjon::io::cli::{BatchGenerator, Cli};
    use donjon::io::configuration::{DEFAULT_COLS, DEFAULT_ROWS, DEFAULT_SEED, DEFAULT_STAIRS};
    use donjon::io::error::GenerationError;
    use donjon::spatial::mask::Silhouette;
    use log::LevelFilter;
    use std::path::{Path, PathBuf};

    // Tests parsing with no arguments uses the defaults
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["donjon"]);

        assert_eq!(cli.rows, DEFAULT_ROWS);
        assert_eq!(cli.cols, DEFAULT_COLS);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.stairs, DEFAULT_STAIRS);
        assert_eq!(cli.count, 1);
        assert_eq!(cli.layout, RoomLayout::Packed);
        assert_eq!(cli.corridors, CorridorLayout::Bent);
        assert!(cli.silhouette.is_none());
        assert!(cli.straightness.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.quiet);
        assert!(!cli.verbose);
    }

    // Tests parsing with every argument supplied
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "donjon",
            "--rows",
            "21",
            "--cols",
            "33",
            "--silhouette",
            "round",
            "--room-min",
            "2",
            "--room-max",
            "4",
            "--layout",
            "scattered",
            "--straightness",
            "80",
            "--dead-ends",
            "100",
            "--stairs",
            "3",
            "-s",
            "7",
            "-n",
            "4",
            "-o",
            "maps",
            "-v",
        ]);

        assert_eq!((cli.rows, cli.cols), (21, 33));
        assert_eq!(cli.silhouette, Some(Silhouette::Round));
        assert_eq!((cli.room_min, cli.room_max), (2, 4));
        assert_eq!(cli.layout, RoomLayout::Scattered);
        assert_eq!(cli.straightness, Some(80));
        assert_eq!(cli.dead_ends, 100);
        assert_eq!(cli.stairs, 3);
        assert_eq!(cli.seed, 7);
        assert_eq!(cli.count, 4);
        assert_eq!(cli.output, Some(PathBuf::from("maps")));
        assert!(cli.verbose);
    }

    // Tests conflicting flags are refused
    #[test]
    fn test_cli_conflicts() {
        assert!(Cli::try_parse_from(["donjon", "-q", "-v"]).is_err());
        assert!(
            Cli::try_parse_from(["donjon", "--corridors", "straight", "--straightness", "10"])
                .is_err()
        );
        assert!(Cli::try_parse_from(["donjon", "--silhouette", "hexagon"]).is_err());
    }

    // Tests presets and explicit straightness map into the config
    #[test]
    fn test_cli_config() {
        let preset = Cli::parse_from(["donjon", "--corridors", "labyrinth", "--rows", "21"]);
        let config = preset.config(99);
        assert_eq!(config.straightness, 0);
        assert_eq!(config.rows, 21);
        assert_eq!(config.seed, 99);

        let explicit = Cli::parse_from(["donjon", "--straightness", "73"]);
        assert_eq!(explicit.config(1).straightness, 73);
    }

    // Tests consecutive seeds wrap at the top of the range
    #[test]
    fn test_cli_seeds() {
        let cli = Cli::parse_from(["donjon", "-s", "10", "-n", "3"]);
        assert_eq!(cli.seeds().collect::<Vec<_>>(), vec![10, 11, 12]);

        let max = u64::MAX.to_string();
        let wrapping = Cli::parse_from(["donjon", "-s", max.as_str(), "-n", "2"]);
        assert_eq!(wrapping.seeds().collect::<Vec<_>>(), vec![u64::MAX, 0]);
    }

    // Tests verbosity flags map onto log levels and progress display
    #[test]
    fn test_cli_verbosity() {
        let quiet = Cli::parse_from(["donjon", "-q", "-o", "out"]);
        assert_eq!(quiet.log_level(), LevelFilter::Off);
        assert!(!quiet.should_show_progress());

        let verbose = Cli::parse_from(["donjon", "-v"]);
        assert_eq!(verbose.log_level(), LevelFilter::Info);
        assert!(!verbose.should_show_progress());

        let normal = Cli::parse_from(["donjon", "-o", "out"]);
        assert_eq!(normal.log_level(), LevelFilter::Warn);
        assert!(normal.should_show_progress());
    }

    // Tests output paths are named after the seed
    #[test]
    fn test_get_output_path() {
        let path = BatchGenerator::get_output_path(Path::new("maps"), 17);
        assert_eq!(path, PathBuf::from("maps/dungeon_17.txt"));
    }

    // Tests a batch writes one dump per seed
    #[test]
    fn test_batch_writes_files() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maps");
        let output_arg = output.to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "donjon",
            "--rows",
            "21",
            "--cols",
            "21",
            "--room-min",
            "1",
            "--room-max",
            "3",
            "-s",
            "5",
            "-n",
            "2",
            "-q",
            "-o",
            output_arg.as_str(),
        ]);
        let written = BatchGenerator::new(cli)
            .run()
            .expect("Failed to generate batch");

        assert_eq!(
            written,
            vec![output.join("dungeon_5.txt"), output.join("dungeon_6.txt")]
        );
        for path in &written {
            let text = std::fs::read_to_string(path).expect("Failed to read dump");
            assert_eq!(text.lines().next().map(str::len), Some(21));
            assert!(text.contains("seed "));
        }
    }

    // Tests invalid parameters fail before anything is written
    #[test]
    fn test_batch_rejects_invalid() {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = temp_dir.path().join("maps");
        let output_arg = output.to_string_lossy().into_owned();

        let cli = Cli::parse_from([
            "donjon",
            "--room-min",
            "6",
            "--room-max",
            "2",
            "-q",
            "-o",
            output_arg.as_str(),
        ]);
        let result = BatchGenerator::new(cli).run();

        assert!(matches!(
            result,
            Err(GenerationError::InvalidParameter {
                parameter: "room_max",
                ..
            })
        ));
        assert!(!output.exists());
    }
}
