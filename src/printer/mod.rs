//! # Printer Module
//!
//! Label stock configuration.
//!
//! ## Modules
//!
//! - [`config`]: Canvas presets and interpreter defaults

pub mod config;

pub use config::LabelConfig;
