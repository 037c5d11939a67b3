//! wcsgrid - Loaders and chart helpers for the World Color Survey dataset
//!
//! This library provides functionality to:
//! - Parse the fixed-format WCS data files (naming, foci, speaker, chip and
//!   chromaticity records) into nested lookup structures
//! - Reorder flat per-chip value arrays into the canonical chart layout
//! - Render the chart to a PNG image

pub mod coord;
pub mod layout;
pub mod models;
pub mod output;
pub mod parser;
pub mod registry;
pub mod renderer;
pub mod values;
