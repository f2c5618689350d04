//! Configuration module for the expense tracker
//!
//! This module provides configuration management including:
//! - Base directory and file path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::TrackerPaths;
pub use settings::{Settings, SettingsUpdate};
