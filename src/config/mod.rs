//! Configuration module
//!
//! This module provides configuration management including:
//! - Platform path resolution with an environment override
//! - User settings persistence (active period, display preferences)
//! - Diagnostic logging setup

pub mod logging;
pub mod paths;
pub mod settings;

pub use logging::init_logging;
pub use paths::CyclePaths;
pub use settings::Settings;
