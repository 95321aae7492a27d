/// Command-line front ends for both programs
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error types
pub mod error;
/// Progress display
pub mod progress;
