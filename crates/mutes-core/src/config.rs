//! The mute-state hierarchy and its mutation operations
//!
//! State shape: 8 banks, 4 scenes per bank, 9 modules per scene (Performer
//! plus 8 Expanders), 8 mute channels per module. The sizes are structural,
//! carried in array types; only `num_expanders` narrows how many expander
//! modules the UI treats as present, without changing the arrays.
//!
//! All operations are synchronous and take the config by exclusive mutable
//! access; a failed operation leaves the config untouched.

use crate::catalog::Catalog;
use crate::machine::{machine_ids, Destination, DestinationKind, MachineId, MidiMachine};
use crate::theme::ColorTheme;
use crate::MutesError;
use serde::{Deserialize, Serialize};

/// Current model version, written to every config and checked on load
pub const SCHEMA_VERSION: u32 = 101;

pub const NUM_BANKS: usize = 8;
pub const SCENES_PER_BANK: usize = 4;
pub const NUM_MODULES: usize = 9;
pub const MUTES_PER_MODULE: usize = 8;

/// One of the 9 physical hardware units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MuteModule {
    Performer,
    Expander1,
    Expander2,
    Expander3,
    Expander4,
    Expander5,
    Expander6,
    Expander7,
    Expander8,
}

impl MuteModule {
    pub const ALL: [MuteModule; NUM_MODULES] = [
        MuteModule::Performer,
        MuteModule::Expander1,
        MuteModule::Expander2,
        MuteModule::Expander3,
        MuteModule::Expander4,
        MuteModule::Expander5,
        MuteModule::Expander6,
        MuteModule::Expander7,
        MuteModule::Expander8,
    ];

    /// Position of this module within a scene's module array
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<MuteModule> {
        MuteModule::ALL.get(index).copied()
    }

    pub const fn is_expander(self) -> bool {
        !matches!(self, MuteModule::Performer)
    }
}

/// Pairing behavior between adjacent mute channels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkMode {
    #[default]
    None,
    Stereo,
    Toggle,
}

/// Mute bits and link modes for one module's 8 channels
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMutes {
    pub mutes: [bool; MUTES_PER_MODULE],
    pub modes: [LinkMode; MUTES_PER_MODULE],
}

/// One scene: per-module mute state for all 9 modules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    pub modules: [ChannelMutes; NUM_MODULES],
}

/// One bank: 4 scenes plus which of them loads by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bank {
    pub selected_scene: usize,
    pub scenes: [Scene; SCENES_PER_BANK],
}

impl Bank {
    /// Select the scene that loads for this bank
    pub fn select_scene(&mut self, scene: usize) -> Result<(), MutesError> {
        MutesError::check_index("scene", scene, SCENES_PER_BANK)?;
        self.selected_scene = scene;
        Ok(())
    }
}

/// The root aggregate owned by an editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutesConfig {
    pub schema_version: u32,
    pub selected_bank: usize,
    pub num_expanders: u8,
    pub banks: [Bank; NUM_BANKS],
    pub color_theme: ColorTheme,
    pub machines: Vec<MidiMachine>,
}

impl MutesConfig {
    /// Build an empty config with the default policy: the catalog's first
    /// theme applied and the three General MIDI default machines (Bank
    /// Select, Program Change, GM MIDI Mute) instantiated with all of their
    /// destinations active.
    pub fn empty(catalog: &Catalog) -> Result<MutesConfig, MutesError> {
        Self::empty_with(catalog, None, true)
    }

    /// Build an empty config, picking the theme and gating the
    /// default-machine population.
    ///
    /// With no explicit theme the catalog's first theme is used; a catalog
    /// without themes is a validation error.
    pub fn empty_with(
        catalog: &Catalog,
        theme: Option<&ColorTheme>,
        with_default_machines: bool,
    ) -> Result<MutesConfig, MutesError> {
        let color_theme = match theme {
            Some(theme) => theme.clone(),
            None => catalog.default_theme()?,
        };

        let mut config = MutesConfig {
            schema_version: SCHEMA_VERSION,
            selected_bank: 0,
            num_expanders: NUM_MODULES as u8 - 1,
            banks: Default::default(),
            color_theme,
            machines: Vec::new(),
        };

        if with_default_machines {
            for id in [
                machine_ids::BANK_SELECT,
                machine_ids::PROGRAM_CHANGE,
                machine_ids::GM_MIDI_MUTE,
            ] {
                config.add_machine(catalog, id)?.activate_all_destinations();
            }
        }

        Ok(config)
    }

    /// Instantiate the catalog template `id` and append it.
    ///
    /// No deduplication: adding the same id twice yields two independent
    /// instances. Returns the freshly added machine.
    pub fn add_machine(
        &mut self,
        catalog: &Catalog,
        id: MachineId,
    ) -> Result<&mut MidiMachine, MutesError> {
        let machine = catalog.machine_by_id(id)?;
        log::debug!("add_machine: instantiated {:#06x} ({})", id, machine.display_name);
        self.machines.push(machine);
        let last = self.machines.len() - 1;
        Ok(&mut self.machines[last])
    }

    /// Remove the first instance whose id equals `id`.
    ///
    /// Permissive: an absent id is a no-op, not an error. Returns whether
    /// anything was removed.
    pub fn remove_machine(&mut self, id: MachineId) -> bool {
        match self.machines.iter().position(|m| m.id == id) {
            Some(pos) => {
                self.machines.remove(pos);
                true
            }
            None => {
                log::debug!("remove_machine: no instance with id {:#06x}", id);
                false
            }
        }
    }

    /// Flip one mute bit.
    pub fn toggle_mute(
        &mut self,
        module: MuteModule,
        bank: usize,
        scene: usize,
        channel: usize,
    ) -> Result<(), MutesError> {
        MutesError::check_index("bank", bank, NUM_BANKS)?;
        MutesError::check_index("scene", scene, SCENES_PER_BANK)?;
        MutesError::check_index("channel", channel, MUTES_PER_MODULE)?;
        let mutes = &mut self.banks[bank].scenes[scene].modules[module.index()].mutes;
        mutes[channel] = !mutes[channel];
        Ok(())
    }

    /// Read one mute bit.
    pub fn is_muted(
        &self,
        module: MuteModule,
        bank: usize,
        scene: usize,
        channel: usize,
    ) -> Result<bool, MutesError> {
        MutesError::check_index("bank", bank, NUM_BANKS)?;
        MutesError::check_index("scene", scene, SCENES_PER_BANK)?;
        MutesError::check_index("channel", channel, MUTES_PER_MODULE)?;
        Ok(self.banks[bank].scenes[scene].modules[module.index()].mutes[channel])
    }

    /// Set the link mode of one channel.
    pub fn set_link_mode(
        &mut self,
        module: MuteModule,
        bank: usize,
        scene: usize,
        channel: usize,
        mode: LinkMode,
    ) -> Result<(), MutesError> {
        MutesError::check_index("bank", bank, NUM_BANKS)?;
        MutesError::check_index("scene", scene, SCENES_PER_BANK)?;
        MutesError::check_index("channel", channel, MUTES_PER_MODULE)?;
        self.banks[bank].scenes[scene].modules[module.index()].modes[channel] = mode;
        Ok(())
    }

    /// Replace the color theme wholesale, by value.
    pub fn set_color_theme(&mut self, theme: &ColorTheme) {
        self.color_theme = theme.clone();
    }

    /// Select the active bank.
    pub fn select_bank(&mut self, bank: usize) -> Result<(), MutesError> {
        MutesError::check_index("bank", bank, NUM_BANKS)?;
        self.selected_bank = bank;
        Ok(())
    }

    /// Set how many expander modules the UI treats as present (0-8).
    pub fn set_num_expanders(&mut self, count: u8) -> Result<(), MutesError> {
        MutesError::check_index("expander", count as usize, NUM_MODULES)?;
        self.num_expanders = count;
        Ok(())
    }

    /// Route a source destination to its concrete storage cell.
    ///
    /// `Banks` selects a bank, `Scenes` selects a scene within the current
    /// bank, `MuteChannels` toggles a mute in the current bank and scene on
    /// the destination's module. Inactive destinations are skipped.
    pub fn apply_destination(&mut self, dest: &Destination) -> Result<(), MutesError> {
        if !dest.active {
            return Ok(());
        }
        match dest.dest {
            DestinationKind::Banks => self.select_bank(dest.index),
            DestinationKind::Scenes => {
                let bank = self.selected_bank;
                self.banks[bank].select_scene(dest.index)
            }
            DestinationKind::MuteChannels => {
                let bank = self.selected_bank;
                let scene = self.banks[bank].selected_scene;
                self.toggle_mute(dest.module, bank, scene, dest.index)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::machine::{SettingId, Setting, Source, SourceType};
    use crate::theme::ThemePalettes;

    /// Minimal catalog standing in for the built-in data
    fn fake_catalog() -> Catalog {
        let theme = ColorTheme {
            id: 0x0042,
            display_name: "Fake".to_string(),
            colors: ThemePalettes::default(),
        };
        let machine = MidiMachine {
            id: 0x0001,
            display_name: "Fake Box".to_string(),
            user_name: String::new(),
            group: "Test".to_string(),
            kind: None,
            settings: vec![],
            sources: vec![Source {
                display_name: "Button".to_string(),
                user_name: String::new(),
                kind: SourceType::CcValue,
                default_dest: DestinationKind::MuteChannels,
                destination: Destination {
                    module: MuteModule::Performer,
                    index: 0,
                    dest: DestinationKind::MuteChannels,
                    active: false,
                },
                settings: vec![Setting::ranged(SettingId::CcValue, "CC Value", 0, 0, 127)],
            }],
        };
        Catalog::new(vec![machine], vec![theme]).unwrap()
    }

    fn bare_config() -> MutesConfig {
        MutesConfig::empty_with(&fake_catalog(), None, false).unwrap()
    }

    #[test]
    fn test_empty_structure() {
        let config = bare_config();
        assert_eq!(config.schema_version, SCHEMA_VERSION);
        assert_eq!(config.selected_bank, 0);
        assert_eq!(config.num_expanders, 8);
        assert_eq!(config.banks.len(), 8);
        for bank in &config.banks {
            assert_eq!(bank.selected_scene, 0);
            assert_eq!(bank.scenes.len(), 4);
            for scene in &bank.scenes {
                assert_eq!(scene.modules.len(), 9);
                for module in &scene.modules {
                    assert!(module.mutes.iter().all(|&m| !m));
                    assert!(module.modes.iter().all(|&m| m == LinkMode::None));
                }
            }
        }
        assert!(config.machines.is_empty());
        // First catalog theme applied
        assert_eq!(config.color_theme.id, 0x0042);
    }

    #[test]
    fn test_toggle_mute_is_own_inverse() {
        let mut config = bare_config();
        for module in MuteModule::ALL {
            let before = config.clone();
            config.toggle_mute(module, 3, 2, 5).unwrap();
            assert!(config.is_muted(module, 3, 2, 5).unwrap());
            config.toggle_mute(module, 3, 2, 5).unwrap();
            assert_eq!(config, before);
        }
    }

    #[test]
    fn test_toggle_mute_only_touches_one_cell() {
        let mut config = bare_config();
        config.toggle_mute(MuteModule::Expander3, 1, 0, 7).unwrap();
        let mut set = 0;
        for bank in &config.banks {
            for scene in &bank.scenes {
                for module in &scene.modules {
                    set += module.mutes.iter().filter(|&&m| m).count();
                }
            }
        }
        assert_eq!(set, 1);
    }

    #[test]
    fn test_toggle_mute_out_of_range() {
        let mut config = bare_config();
        let before = config.clone();

        for (bank, scene, channel) in [(8, 0, 0), (0, 4, 0), (0, 0, 8)] {
            let err = config
                .toggle_mute(MuteModule::Performer, bank, scene, channel)
                .unwrap_err();
            assert!(matches!(err, MutesError::IndexOutOfRange { .. }));
        }
        assert_eq!(config, before);
    }

    #[test]
    fn test_add_and_remove_machine() {
        let catalog = fake_catalog();
        let mut config = bare_config();

        config.add_machine(&catalog, 0x0001).unwrap();
        config.add_machine(&catalog, 0x0001).unwrap();
        assert_eq!(config.machines.len(), 2);

        // Instances are independent of each other
        config.machines[0].sources[0].settings[0].value = 99;
        assert_eq!(config.machines[1].sources[0].settings[0].value, 0);

        assert!(config.remove_machine(0x0001));
        assert_eq!(config.machines.len(), 1);

        // Permissive no-op on an absent id
        assert!(!config.remove_machine(0xbeef));
        assert_eq!(config.machines.len(), 1);
    }

    #[test]
    fn test_add_machine_unknown_id() {
        let catalog = fake_catalog();
        let mut config = bare_config();
        let err = config.add_machine(&catalog, 0xffff).unwrap_err();
        assert_eq!(err, MutesError::MachineNotFound(0xffff));
        assert!(config.machines.is_empty());
    }

    #[test]
    fn test_set_color_theme_copies() {
        let mut config = bare_config();
        let mut theme = ColorTheme {
            id: 0x0099,
            display_name: "Other".to_string(),
            colors: ThemePalettes::default(),
        };
        config.set_color_theme(&theme);
        assert_eq!(config.color_theme, theme);

        // Mutating the caller's theme afterwards must not bleed in
        theme.colors.runtime.mute_selected = [0xff, 0x00, 0x00];
        assert_eq!(config.color_theme.colors.runtime.mute_selected, [0, 0, 0]);
    }

    #[test]
    fn test_select_bank_and_expanders() {
        let mut config = bare_config();
        config.select_bank(7).unwrap();
        assert_eq!(config.selected_bank, 7);
        assert!(config.select_bank(8).is_err());

        config.set_num_expanders(0).unwrap();
        config.set_num_expanders(8).unwrap();
        assert!(config.set_num_expanders(9).is_err());
    }

    #[test]
    fn test_select_scene() {
        let mut config = bare_config();
        config.banks[2].select_scene(3).unwrap();
        assert_eq!(config.banks[2].selected_scene, 3);
        assert!(config.banks[2].select_scene(4).is_err());
    }

    #[test]
    fn test_apply_destination() {
        let mut config = bare_config();

        let mut dest = Destination {
            module: MuteModule::Performer,
            index: 5,
            dest: DestinationKind::Banks,
            active: false,
        };

        // Inactive destinations do nothing
        config.apply_destination(&dest).unwrap();
        assert_eq!(config.selected_bank, 0);

        dest.active = true;
        config.apply_destination(&dest).unwrap();
        assert_eq!(config.selected_bank, 5);

        dest.dest = DestinationKind::Scenes;
        dest.index = 2;
        config.apply_destination(&dest).unwrap();
        assert_eq!(config.banks[5].selected_scene, 2);

        dest.dest = DestinationKind::MuteChannels;
        dest.index = 1;
        config.apply_destination(&dest).unwrap();
        assert!(config.is_muted(MuteModule::Performer, 5, 2, 1).unwrap());
    }

    #[test]
    fn test_module_index_roundtrip() {
        for module in MuteModule::ALL {
            assert_eq!(MuteModule::from_index(module.index()), Some(module));
        }
        assert_eq!(MuteModule::from_index(9), None);
        assert!(!MuteModule::Performer.is_expander());
        assert!(MuteModule::Expander8.is_expander());
    }

    #[test]
    fn test_link_mode() {
        let mut config = bare_config();
        config
            .set_link_mode(MuteModule::Performer, 0, 0, 2, LinkMode::Stereo)
            .unwrap();
        assert_eq!(
            config.banks[0].scenes[0].modules[0].modes[2],
            LinkMode::Stereo
        );
        assert!(config
            .set_link_mode(MuteModule::Performer, 0, 0, 8, LinkMode::Toggle)
            .is_err());
    }

    #[test]
    fn test_config_serde_roundtrip() {
        let config = bare_config();
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed: MutesConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }
}
