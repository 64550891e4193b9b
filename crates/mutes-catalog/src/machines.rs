//! Built-in MIDI machine templates
//!
//! The definitions mirror the shipped device set: one drum machine plus the
//! General MIDI utility machines. Destinations start inactive; activation
//! happens when a machine is instantiated into a config.

use mutes_core::machine_ids;
use mutes_core::{
    Destination, DestinationKind, MidiMachine, MuteModule, Setting, SettingId, Source, SourceType,
};

/// All built-in templates, in catalog order.
pub fn all() -> Vec<MidiMachine> {
    vec![
        roland_tr6s(),
        program_change(),
        bank_select(),
        midi_cc_change(),
        gm_midi_mute(),
    ]
}

fn midi_channel(value: i32) -> Setting {
    Setting::ranged(SettingId::MidiChannel, "MIDI Channel", value, 1, 16)
}

fn fixed_cc_number(value: i32) -> Setting {
    Setting::fixed(SettingId::CcNumber, "CC Number", value)
}

fn toggle_on_level() -> Setting {
    Setting::ranged(SettingId::ToggleOnLevel, "Un-muted Volume Level", 127, 0, 127)
}

fn toggle_off_level() -> Setting {
    Setting::ranged(SettingId::ToggleOffLevel, "Muted Volume Level", 0, 0, 127)
}

fn inactive(module: MuteModule, index: usize, dest: DestinationKind) -> Destination {
    Destination {
        module,
        index,
        dest,
        active: false,
    }
}

/// Roland TR-6S: per-voice level CCs used as toggle mutes.
fn roland_tr6s() -> MidiMachine {
    // (label, CC number), in channel order
    let levels = [
        ("BD Level", 24),
        ("SD Level", 29),
        ("LT Level", 48),
        ("HC Level", 60),
        ("CH Level", 63),
        ("OH Level", 82),
        ("Reverb Level", 91),
    ];

    let sources = levels
        .iter()
        .enumerate()
        .map(|(index, &(label, cc))| Source {
            display_name: label.to_string(),
            user_name: String::new(),
            kind: SourceType::CcToggleValue,
            default_dest: DestinationKind::MuteChannels,
            destination: inactive(MuteModule::Performer, index, DestinationKind::MuteChannels),
            settings: vec![
                midi_channel(10),
                fixed_cc_number(cc),
                toggle_on_level(),
                toggle_off_level(),
            ],
        })
        .collect();

    MidiMachine {
        id: machine_ids::ROLAND_TR6S,
        display_name: "Roland TR6s".to_string(),
        user_name: String::new(),
        group: "Drum Machines".to_string(),
        kind: None,
        settings: vec![midi_channel(10)],
        sources,
    }
}

/// Program-change events routed to scene selection.
fn program_change() -> MidiMachine {
    let sources = (0..4)
        .map(|index| Source {
            display_name: "Program Change".to_string(),
            user_name: format!("Program {}", index + 1),
            kind: SourceType::ProgramChange,
            default_dest: DestinationKind::Scenes,
            destination: inactive(MuteModule::Performer, index, DestinationKind::Scenes),
            settings: vec![
                midi_channel(1),
                Setting::ranged(SettingId::ProgramNumber, "Program Number", index as i32, 0, 127),
            ],
        })
        .collect();

    MidiMachine {
        id: machine_ids::PROGRAM_CHANGE,
        display_name: "Program Change".to_string(),
        user_name: String::new(),
        group: "General MIDI".to_string(),
        kind: None,
        settings: vec![midi_channel(1)],
        sources,
    }
}

/// Bank Select (CC #0) values routed to bank selection.
fn bank_select() -> MidiMachine {
    let sources = (0..8)
        .map(|index| Source {
            display_name: "Bank Select".to_string(),
            user_name: format!("Bank {}", index + 1),
            kind: SourceType::CcValue,
            default_dest: DestinationKind::Banks,
            destination: inactive(MuteModule::Performer, index, DestinationKind::Banks),
            settings: vec![
                midi_channel(1),
                Setting::ranged(SettingId::CcValue, "Bank Number", index as i32, 0, 127),
            ],
        })
        .collect();

    MidiMachine {
        id: machine_ids::BANK_SELECT,
        display_name: "Bank Select (CC #0)".to_string(),
        user_name: String::new(),
        group: "General MIDI".to_string(),
        kind: Some(SourceType::CcValue),
        settings: vec![midi_channel(1), fixed_cc_number(0)],
        sources,
    }
}

/// Free CC changes on a handful of common controllers.
fn midi_cc_change() -> MidiMachine {
    // (alias, CC number, destination slot)
    let controllers = [
        ("Modulation (CC #1)", 1, 0),
        ("Breath Controller (CC #2)", 2, 1),
        ("Balance (CC #8)", 8, 1),
        ("Expression (CC #11)", 11, 2),
        ("General Purpose (CC #16)", 16, 3),
    ];

    let sources = controllers
        .iter()
        .map(|&(alias, cc, index)| Source {
            display_name: "MIDI CC Change".to_string(),
            user_name: alias.to_string(),
            kind: SourceType::CcValue,
            default_dest: DestinationKind::Banks,
            destination: inactive(MuteModule::Performer, index, DestinationKind::MuteChannels),
            settings: vec![
                midi_channel(1),
                Setting::ranged(SettingId::CcNumber, "CC Number", cc, 0, 127),
                Setting::ranged(SettingId::CcValue, "CC Value", 0, 0, 127),
            ],
        })
        .collect();

    MidiMachine {
        id: machine_ids::MIDI_CC_CHANGE,
        display_name: "MIDI CC Change".to_string(),
        user_name: String::new(),
        group: "General MIDI".to_string(),
        kind: Some(SourceType::CcValue),
        settings: vec![midi_channel(1)],
        sources,
    }
}

/// Volume-CC mutes for all 16 General MIDI channels.
///
/// Channels 1-8 land on the Performer, 9-16 on the first Expander.
fn gm_midi_mute() -> MidiMachine {
    let sources = (0..16)
        .map(|channel| {
            let (module, index) = if channel < 8 {
                (MuteModule::Performer, channel)
            } else {
                (MuteModule::Expander1, channel - 8)
            };
            Source {
                display_name: "Volume CC Mute".to_string(),
                user_name: format!("Channel {}", channel + 1),
                kind: SourceType::CcToggleValue,
                default_dest: DestinationKind::MuteChannels,
                destination: inactive(module, index, DestinationKind::MuteChannels),
                settings: vec![
                    midi_channel(channel as i32 + 1),
                    toggle_on_level(),
                    toggle_off_level(),
                ],
            }
        })
        .collect();

    MidiMachine {
        id: machine_ids::GM_MIDI_MUTE,
        display_name: "MIDI Mute (MIDI CC 7 - Volume)".to_string(),
        user_name: String::new(),
        group: "General MIDI".to_string(),
        kind: Some(SourceType::CcToggleValue),
        settings: vec![fixed_cc_number(7)],
        sources,
    }
}
