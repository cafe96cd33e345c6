//! Configuration management for ssmenv
//!
//! Startup settings (file locations, AWS region, output header) are resolved
//! once into an immutable [`Config`] and passed to the orchestrator. Nothing
//! downstream reads the process environment.

pub mod config;
pub mod loader;


pub use config::{AwsSettings, Config, HeaderMode};
pub use loader::ConfigLoader;
