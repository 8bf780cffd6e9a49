//! Command-line interface for generating batches of dungeons

use crate::algorithm::corridors::CorridorLayout;
use crate::algorithm::executor::{DungeonBuilder, DungeonConfig};
use crate::algorithm::rooms::RoomLayout;
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_DEAD_END_REMOVAL, DEFAULT_ROOM_MAX, DEFAULT_ROOM_MIN, DEFAULT_ROWS,
    DEFAULT_SEED, DEFAULT_STAIRS, OUTPUT_EXTENSION, OUTPUT_PREFIX,
};
use crate::io::error::{Result, file_system_error};
use crate::io::progress::ProgressManager;
use crate::io::text::{render_summary, render_text};
use crate::layout::dungeon::Dungeon;
use crate::spatial::mask::Silhouette;
use clap::Parser;
use log::{LevelFilter, info};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Pipeline stages reported to the progress display
const STAGES: [&str; 7] = [
    "rooms",
    "doors",
    "labels",
    "corridors",
    "stairs",
    "cleanup",
    "output",
];

#[derive(Parser, Debug)]
#[command(name = "donjon")]
#[command(
    author,
    version,
    about = "Generate seeded dungeon maps with rooms, corridors, doors and stairs"
)]
/// Command-line arguments for the dungeon generator
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Requested grid rows (rounded down to even)
    #[arg(long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Requested grid columns (rounded down to even)
    #[arg(long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Outline mask applied before placement
    #[arg(long, value_enum)]
    pub silhouette: Option<Silhouette>,

    /// Smallest room side in lattice nodes
    #[arg(long, default_value_t = DEFAULT_ROOM_MIN)]
    pub room_min: usize,

    /// Largest room side in lattice nodes
    #[arg(long, default_value_t = DEFAULT_ROOM_MAX)]
    pub room_max: usize,

    /// Room anchoring strategy
    #[arg(long, value_enum, default_value_t = RoomLayout::Packed)]
    pub layout: RoomLayout,

    /// Named corridor straightness preset
    #[arg(long, value_enum, default_value_t = CorridorLayout::Bent)]
    pub corridors: CorridorLayout,

    /// Explicit corridor straightness percentage (overrides --corridors)
    #[arg(long, conflicts_with = "corridors")]
    pub straightness: Option<u8>,

    /// Percentage of dead ends to retract
    #[arg(long, default_value_t = DEFAULT_DEAD_END_REMOVAL)]
    pub dead_ends: u8,

    /// Number of staircases
    #[arg(long, default_value_t = DEFAULT_STAIRS)]
    pub stairs: usize,

    /// Seed of the first dungeon
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Number of dungeons, using consecutive seeds
    #[arg(short = 'n', long, default_value_t = 1)]
    pub count: usize,

    /// Directory for text dumps; stdout when omitted
    #[arg(short, long, value_name = "DIR")]
    pub output: Option<PathBuf>,

    /// Suppress progress and log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log a summary line per dungeon
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Generation parameters for the dungeon at `seed`
    pub const fn config(&self, seed: u64) -> DungeonConfig {
        let straightness = match self.straightness {
            Some(straightness) => straightness,
            None => self.corridors.straightness(),
        };

        DungeonConfig {
            rows: self.rows,
            cols: self.cols,
            silhouette: self.silhouette,
            room_min: self.room_min,
            room_max: self.room_max,
            room_layout: self.layout,
            straightness,
            dead_end_removal: self.dead_ends,
            stairs: self.stairs,
            seed,
        }
    }

    /// Seeds covered by this run
    pub fn seeds(&self) -> impl Iterator<Item = u64> + use<> {
        let first = self.seed;
        (0..self.count as u64).map(move |offset| first.wrapping_add(offset))
    }

    /// Log level implied by `--quiet` and `--verbose`
    pub const fn log_level(&self) -> LevelFilter {
        if self.quiet {
            LevelFilter::Off
        } else if self.verbose {
            LevelFilter::Info
        } else {
            LevelFilter::Warn
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet && self.output.is_some()
    }
}

/// Generates every requested seed and writes the text dumps
pub struct BatchGenerator {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl BatchGenerator {
    /// Create a new batch generator with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Generate all seeds; returns the files written, if any
    ///
    /// # Errors
    ///
    /// Returns an error if the parameters are invalid, the output directory
    /// cannot be created, a dump cannot be written, or generation fails.
    pub fn run(&mut self) -> Result<Vec<PathBuf>> {
        self.cli.config(self.cli.seed).validate()?;

        if let Some(dir) = &self.cli.output {
            std::fs::create_dir_all(dir)
                .map_err(|source| file_system_error(dir, "create output directory", source))?;
        }

        let seeds: Vec<u64> = self.cli.seeds().collect();
        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(seeds.len());
        }

        let mut written = Vec::new();
        for (index, seed) in seeds.into_iter().enumerate() {
            let start_time = Instant::now();
            let dungeon = self.generate_seed(index, seed)?;
            self.report_stage(index, STAGES.len());

            if let Some(path) = self.write_dungeon(&dungeon)? {
                written.push(path);
            }

            if let Some(ref mut pm) = self.progress_manager {
                pm.complete_seed(index, start_time.elapsed());
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }
        Ok(written)
    }

    /// Run the pipeline stage by stage so progress can follow along
    fn generate_seed(&mut self, index: usize, seed: u64) -> Result<Dungeon> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_seed(index, seed, STAGES.len());
        }

        let mut builder = DungeonBuilder::new(self.cli.config(seed));
        builder.place_rooms();
        self.report_stage(index, 1);
        builder.open_rooms();
        self.report_stage(index, 2);
        builder.label_rooms();
        self.report_stage(index, 3);
        builder.carve_corridors();
        self.report_stage(index, 4);
        builder.place_stairs();
        self.report_stage(index, 5);
        builder.clean();
        self.report_stage(index, 6);

        let dungeon = builder.build()?;
        info!(
            "seed {seed}: {} rooms, {} doors, {} stairs",
            dungeon.rooms().len(),
            dungeon.doors().len(),
            dungeon.stairs().len()
        );
        Ok(dungeon)
    }

    fn report_stage(&mut self, index: usize, stage: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            let name = stage
                .checked_sub(1)
                .and_then(|i| STAGES.get(i))
                .copied()
                .unwrap_or("");
            pm.update_stage(index, stage, name);
        }
    }

    fn write_dungeon(&self, dungeon: &Dungeon) -> Result<Option<PathBuf>> {
        let text = format!("{}\n{}", render_text(dungeon), render_summary(dungeon));

        if let Some(dir) = &self.cli.output {
            let path = Self::get_output_path(dir, dungeon.seed());
            std::fs::write(&path, text)
                .map_err(|source| file_system_error(&path, "write dungeon", source))?;
            Ok(Some(path))
        } else {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .map_err(|source| file_system_error("<stdout>", "write dungeon", source))?;
            Ok(None)
        }
    }

    /// Dump path for one seed inside `dir`
    pub fn get_output_path(dir: &Path, seed: u64) -> PathBuf {
        dir.join(format!("{OUTPUT_PREFIX}{seed}.{OUTPUT_EXTENSION}"))
    }
}
