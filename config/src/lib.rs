//! # Config Crate
//!
//! Centralized configuration for the solid mesh export pipeline.
//! Unit conversion factors, normalization targets and output precision are
//! defined here so the pipeline crates never carry their own literals.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{FEET_TO_MILLIMETERS, NORMALIZED_EXTENT};
//! use config::settings::ExportConfig;
//!
//! // One foot of model space is 304.8 mm.
//! assert_eq!(1.0 * FEET_TO_MILLIMETERS, 304.8);
//!
//! // The largest bounding-box axis is scaled to span [-1, 1].
//! assert_eq!(NORMALIZED_EXTENT, 2.0);
//!
//! let config = ExportConfig::default();
//! assert!(config.retain_curved_surface_facets);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Immutable Settings**: `ExportConfig` is passed by value into the pipeline
//! - **Locale-Free**: Output formatting never depends on the host locale

pub mod constants;
pub mod settings;
