//! Mute-configuration data model for the Performer controller
//!
//! This crate provides:
//! - The bank/scene/module/mute-channel state owned by an editing session
//! - A read-only catalog registry of MIDI machine templates and color themes
//! - Mutation operations (instantiate machines, toggle mutes, apply themes)
//! - YAML persistence with a schema-version check
//! - A transport seam for device load/save (sysex protocol lives elsewhere)
//!
//! # Architecture
//!
//! ```text
//! Catalog (templates, read-only) ──instantiate──► MutesConfig (session state)
//!                                                      │
//!                                    editor calls ─────┤ toggle_mute / set_color_theme / ...
//!                                                      │
//!                                 MuteTransport ◄──────┘ (device sync, out of scope)
//! ```
//!
//! The catalog is constructed once and shared read-only; every machine a
//! config owns is an independent deep copy, so session edits can never leak
//! back into the templates.

mod catalog;
mod config;
mod machine;
mod persist;
mod theme;
mod transport;

pub use catalog::Catalog;
pub use config::{
    Bank, ChannelMutes, LinkMode, MuteModule, MutesConfig, Scene, MUTES_PER_MODULE, NUM_BANKS,
    NUM_MODULES, SCENES_PER_BANK, SCHEMA_VERSION,
};
pub use machine::{
    machine_ids, Destination, DestinationKind, MachineId, MidiMachine, Setting, SettingId, Source,
    SourceType,
};
pub use persist::{default_config_path, load_config, parse_config, save_config};
pub use theme::{
    dim, mid, ColorTheme, FunctionColors, LinkColors, MidiColors, Rgb, RuntimeColors,
    ThemePalettes,
};
pub use transport::{MuteTransport, StubTransport};

/// Error type for mute-configuration operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MutesError {
    #[error("unknown machine id {0:#06x}")]
    MachineNotFound(MachineId),

    #[error("unknown color theme id {0:#06x}")]
    ThemeNotFound(u16),

    #[error("{what} index {index} out of range (limit {limit})")]
    IndexOutOfRange {
        what: &'static str,
        index: usize,
        limit: usize,
    },

    #[error("validation failed: {0}")]
    Validation(String),

    #[error("unsupported schema version {found} (expected {expected})")]
    SchemaVersion { found: u32, expected: u32 },
}

impl MutesError {
    /// Bounds-check helper used by the mutation API.
    ///
    /// Returns `IndexOutOfRange` naming the offending dimension so the UI
    /// can show something better than a bare number.
    pub(crate) fn check_index(
        what: &'static str,
        index: usize,
        limit: usize,
    ) -> Result<(), MutesError> {
        if index < limit {
            Ok(())
        } else {
            Err(MutesError::IndexOutOfRange { what, index, limit })
        }
    }
}
