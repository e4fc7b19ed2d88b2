//! Parameter explorer core.
//!
//! This crate provides a pure filter engine (`filter::compute_view`) that
//! narrows a categorized parameter collection by search text, editability,
//! category and tag bucket, switching to a tag-count summary when too many
//! parameters match. `explorer::Explorer` wraps it in a view-state holder
//! driven by user actions.
//!
//! The binary `paramscope` replays actions against the seed dataset and
//! prints the resulting view as JSON.

pub mod cli;
pub mod config;
pub mod explorer;
pub mod filter;
pub mod logging;
pub mod model;
pub mod navigation;
pub mod seed;

// The interactive egui front end lives behind the `egui` feature flag and is
// launched by demos/egui_explorer.rs.
