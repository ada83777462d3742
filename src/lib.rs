//! aiofarm-config - Configuration schema and persistence for a serial/Arduino sorting machine.
//!
//! The machine keeps one JSON configuration file in the operator's home
//! directory. This crate provides:
//!
//! - Typed, validated configuration records for the server and vision roles
//! - Loading that always yields a usable configuration, with an optional
//!   self-healing mode that rewrites a broken file with defaults
//! - Timestamped backup and rollback of the configuration and project manifests
//! - An operator CLI over all of the above
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use aiofarm_config::{config::ConfigPaths, config_store::ConfigStore};
//!
//! let paths = ConfigPaths::from_env()?;
//! let store = ConfigStore::from_paths(&paths);
//!
//! // Never fails: falls back to the default server configuration
//! let config = store.load();
//! println!("Running as {}", config.config_type());
//! # Ok::<(), std::io::Error>(())
//! ```

/// Configuration schema definitions and validation.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Loading and saving of the configuration file.
pub mod config_store;

/// Timestamped backup and rollback.
pub mod backup;

/// Sorting result payloads.
pub mod sort_result;

/// Command-line interface for configuration management.
pub mod cli;

/// Logging setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use core::{AiofarmError, Result};
