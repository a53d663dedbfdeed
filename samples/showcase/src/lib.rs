//! Showcase sample for the multiorder container.
//!
//! Builds containers from configured data and renders every traversal order.

pub mod config;
pub mod report;

pub use config::{ConfigError, ShowcaseConfig};
