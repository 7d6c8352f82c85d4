//! Configuration for a directory scrape run.
//!
//! Provides the `ScrapeConfig` struct and its builder with validation and
//! defaults matching the directory's observed behavior.

pub mod builder;
pub mod getters;
pub mod types;

pub use builder::ScrapeConfigBuilder;
pub use types::ScrapeConfig;
