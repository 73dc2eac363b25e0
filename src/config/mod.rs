//! Configuration module for Spendex
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::SpendexPaths;
pub use settings::Settings;
