//! MIDI machine templates and instances
//!
//! A `MidiMachine` describes one external MIDI device: its machine-level
//! settings plus a list of sources (buttons, CC values, program-change
//! events), each wired to a destination on the controller. The same type
//! serves as catalog template and config-owned instance; the boundary
//! between the two is [`MidiMachine::instantiate`], which is the only path
//! from catalog storage into a session.

use crate::config::MuteModule;
use crate::MutesError;
use serde::{Deserialize, Serialize};

/// Stable numeric machine identifier, unique within a catalog
pub type MachineId = u16;

/// Well-known machine ids used by the built-in catalog and the
/// default-population policy of an empty config.
pub mod machine_ids {
    use super::MachineId;

    pub const PROGRAM_CHANGE: MachineId = 0xac01;
    pub const BANK_SELECT: MachineId = 0xab01;
    pub const GM_MIDI_MUTE: MachineId = 0xaa51;
    pub const ROLAND_TR6S: MachineId = 0x0105;
    pub const ROLAND_TR8S: MachineId = 0x0106;
    pub const MIDI_CC_CHANGE: MachineId = 0x0044;
}

/// Semantic kind of a machine or source setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettingId {
    MidiChannel,
    ProgramNumber,
    ToggleOnLevel,
    ToggleOffLevel,
    CcChange,
    CcValue,
    CcNumber,
}

impl SettingId {
    /// Byte code used when settings are framed for the device
    pub const fn code(self) -> u8 {
        match self {
            SettingId::MidiChannel => 0x1a,
            SettingId::ProgramNumber => 0xda,
            SettingId::ToggleOnLevel => 0x3a,
            SettingId::ToggleOffLevel => 0x35,
            SettingId::CcChange => 0x44,
            SettingId::CcValue => 0x65,
            SettingId::CcNumber => 0x66,
        }
    }
}

/// Kind of MIDI event a source emits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceType {
    CcValue,
    CcToggleValue,
    ProgramChange,
}

/// What a destination addresses on the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DestinationKind {
    MuteChannels,
    Scenes,
    Banks,
}

/// One editable (or fixed) numeric setting
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setting {
    pub id: SettingId,
    pub display_name: String,
    pub value: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i32>,
    /// Advisory flag: the UI must not offer editing. The model does not
    /// enforce it; writes through `set_clamped` still land.
    #[serde(default)]
    pub cannot_edit: bool,
}

impl Setting {
    /// Unbounded setting
    pub fn new(id: SettingId, display_name: &str, value: i32) -> Self {
        Self {
            id,
            display_name: display_name.to_string(),
            value,
            min: None,
            max: None,
            cannot_edit: false,
        }
    }

    /// Setting bounded to `[min, max]`
    pub fn ranged(id: SettingId, display_name: &str, value: i32, min: i32, max: i32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
            ..Self::new(id, display_name, value)
        }
    }

    /// Fixed setting the UI must render read-only
    pub fn fixed(id: SettingId, display_name: &str, value: i32) -> Self {
        Self {
            cannot_edit: true,
            ..Self::new(id, display_name, value)
        }
    }

    /// Write a value, clamped to the bounds when present.
    ///
    /// Out-of-range writes are never rejected, only clamped.
    pub fn set_clamped(&mut self, value: i32) {
        let lo = self.min.unwrap_or(i32::MIN);
        let hi = self.max.unwrap_or(i32::MAX);
        self.value = value.clamp(lo, hi);
    }
}

/// Where a source's events land: one cell of the mute/scene/bank state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub module: MuteModule,
    pub index: usize,
    pub dest: DestinationKind,
    pub active: bool,
}

/// A single controllable input belonging to a machine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub display_name: String,
    /// User-assigned alias, template-provided initially
    pub user_name: String,
    pub kind: SourceType,
    pub default_dest: DestinationKind,
    pub destination: Destination,
    pub settings: Vec<Setting>,
}

/// A MIDI device definition: catalog template or instantiated config entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidiMachine {
    pub id: MachineId,
    pub display_name: String,
    pub user_name: String,
    pub group: String,
    /// Machine-level source kind, when all sources share one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SourceType>,
    pub settings: Vec<Setting>,
    pub sources: Vec<Source>,
}

impl MidiMachine {
    /// Deep-copy this template into an independent instance.
    ///
    /// This is the template-to-instance boundary: every machine owned by a
    /// config comes through here, so mutating an instance can never touch
    /// catalog storage or a sibling instance.
    pub fn instantiate(&self) -> MidiMachine {
        self.clone()
    }

    /// Write a value to the setting `setting_id` of the source at
    /// `source_index`, clamped to the setting's bounds.
    ///
    /// Fails with `IndexOutOfRange` for a bad source index. A source that
    /// has no setting with that id is left untouched (permissive no-op,
    /// logged at debug).
    pub fn set_source_setting(
        &mut self,
        source_index: usize,
        setting_id: SettingId,
        value: i32,
    ) -> Result<(), MutesError> {
        MutesError::check_index("source", source_index, self.sources.len())?;
        let source = &mut self.sources[source_index];
        match source.settings.iter_mut().find(|s| s.id == setting_id) {
            Some(setting) => setting.set_clamped(value),
            None => log::debug!(
                "set_source_setting: {} source {} has no {:?} setting, ignoring",
                self.display_name,
                source_index,
                setting_id
            ),
        }
        Ok(())
    }

    /// Mark every source's destination as wired.
    ///
    /// Used when a machine is added as a default instance so its wiring is
    /// immediately live.
    pub fn activate_all_destinations(&mut self) {
        for source in &mut self.sources {
            source.destination.active = true;
        }
    }
}
