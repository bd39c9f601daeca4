mod belief;
pub mod config;
pub mod progress;
pub mod walker;
