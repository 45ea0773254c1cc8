//! Configuration module for monthbook
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::MonthbookPaths;
pub use settings::Settings;
