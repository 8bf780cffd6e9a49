//! Per-seed progress tracking with automatic batching for long runs

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

/// Display state of one seed: (`name`, `stages_done`, `stage_count`, `stage_name`)
type SeedState = (String, usize, usize, &'static str);

/// Coordinates progress display while generating a run of seeds
///
/// Small runs get one bar per seed that steps through the pipeline stages;
/// larger runs add a single batch bar and keep a rolling window of the most
/// recent seeds.
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    seed_bars: Vec<ProgressBar>,
    seed_states: Vec<SeedState>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{prefix} [{bar:30.cyan/blue}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Dungeons: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            seed_bars: Vec::new(),
            seed_states: Vec::new(),
        }
    }

    /// Create bars for a run of `seed_count` dungeons
    pub fn initialize(&mut self, seed_count: usize) {
        if seed_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(seed_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        for _ in 0..seed_count.min(MAX_INDIVIDUAL_PROGRESS_BARS) {
            let bar = ProgressBar::new(0);
            bar.set_style(STAGE_STYLE.clone());
            self.seed_bars.push(self.multi_progress.add(bar));
        }
    }

    /// Number of seeds seen so far
    pub fn seed_count(&self) -> usize {
        self.seed_states.len()
    }

    /// Register a seed about to go through `stage_count` stages
    pub fn start_seed(&mut self, index: usize, seed: u64, stage_count: usize) {
        if index >= self.seed_states.len() {
            self.seed_states
                .resize(index + 1, (String::new(), 0, 0, ""));
        }
        if let Some(state) = self.seed_states.get_mut(index) {
            *state = (format!("seed {seed}"), 0, stage_count, "starting");
        }
        self.update_bars();
    }

    /// Record that `stage` (1-based) has been reached
    pub fn update_stage(&mut self, index: usize, stage: usize, stage_name: &'static str) {
        if let Some(state) = self.seed_states.get_mut(index) {
            state.1 = stage;
            state.3 = stage_name;
        }
        self.update_bars();
    }

    /// Mark a seed as finished
    pub fn complete_seed(&mut self, index: usize, _elapsed: Duration) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.seed_states.get_mut(index) {
            state.0 = format!("✓ {}", state.0);
            state.1 = state.2;
            state.3 = "done";
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All dungeons generated");
        }
        let _ = self.multi_progress.clear();
    }

    /// Show the most recent seeds on the available bars
    fn update_bars(&self) {
        let active: Vec<&SeedState> = self
            .seed_states
            .iter()
            .filter(|(name, ..)| !name.is_empty())
            .collect();

        let start = active.len().saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible = active.get(start..).unwrap_or(&[]);

        for (bar_index, (name, done, total, stage_name)) in visible.iter().enumerate() {
            if let Some(bar) = self.seed_bars.get(bar_index) {
                bar.set_length(*total as u64);
                bar.set_position(*done as u64);
                bar.set_message(format!("{done}/{total} {stage_name}"));
                bar.set_prefix(name.clone());
            }
        }

        for bar in self.seed_bars.iter().skip(visible.len()) {
            bar.set_length(0);
            bar.set_position(0);
            bar.set_message(String::new());
            bar.set_prefix(String::new());
        }
    }
}
