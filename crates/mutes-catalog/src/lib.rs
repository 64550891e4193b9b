//! Built-in catalog data for the Performer editor
//!
//! This crate holds the verbatim device definitions (MIDI machine
//! templates) and color themes that ship with the editor, and assembles
//! them into a [`Catalog`]. Hosts that want a different device set build
//! their own `Catalog` and inject it instead.

mod machines;
mod themes;

pub use mutes_core::machine_ids;

use mutes_core::Catalog;

/// Build the catalog of built-in machine templates and color themes.
///
/// Construct once at startup and share read-only.
pub fn builtin() -> Catalog {
    let catalog = Catalog::new(machines::all(), themes::all())
        .expect("built-in catalog ids are unique");
    log::debug!(
        "builtin: {} machine template(s), {} color theme(s)",
        catalog.machines().len(),
        catalog.themes().len()
    );
    catalog
}
