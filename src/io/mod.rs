/// Command-line interface and batch generation
pub mod cli;
/// Default parameters and generation constants
pub mod configuration;
/// Error types and result aliases
pub mod error;
/// Progress display for batch runs
pub mod progress;
/// Plain-text dungeon dumps
pub mod text;
