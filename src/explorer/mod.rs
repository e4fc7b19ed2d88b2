//! Explorer state and (with the `egui` feature) its interactive front end.
//!
//! [`Explorer`] holds the view state and turns user actions (typing, the
//! editable checkbox, tree clicks, intent badges, bucket picks, reset) into
//! criteria changes followed by a recompute through the filter engine.

mod intent;
mod state;
#[cfg(feature = "egui")]
mod ui;

pub use intent::Intent;
pub use state::{Explorer, ROOT_CRUMB};
#[cfg(feature = "egui")]
pub use ui::ExplorerApp;
