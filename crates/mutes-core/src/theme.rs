//! Color themes for the controller's LED surfaces
//!
//! A theme is four fixed palettes (runtime, function buttons, link-mode
//! indicators, MIDI-config screen), each mapping a named role to an RGB
//! triple. Themes are replaced wholesale; there is no partial update.

use serde::{Deserialize, Serialize};

/// One LED color, 8 bits per channel
pub type Rgb = [u8; 3];

fn scale(color: Rgb, factor: u16) -> Rgb {
    // Rounded integer division, matching round(channel / factor)
    color.map(|ch| ((ch as u16 + factor / 2) / factor) as u8)
}

/// Dimmed variant of a color (1/6 brightness)
pub fn dim(color: Rgb) -> Rgb {
    scale(color, 6)
}

/// Mid-brightness variant of a color (1/3 brightness)
pub fn mid(color: Rgb) -> Rgb {
    scale(color, 3)
}

/// Colors shown during normal performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeColors {
    pub mute_selected: Rgb,
    pub mute_queued: Rgb,
    pub mute_unselected: Rgb,
    pub mute_unselected_queued: Rgb,
    pub scene_selected: Rgb,
    pub scene_unselected: Rgb,
    pub scene_queued: Rgb,
    pub bank_selected: Rgb,
    pub bank_unselected: Rgb,
    pub bank_queued: Rgb,
}

/// Colors for the function-button row
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionColors {
    pub mute_selected: Rgb,
    pub mute_unselected: Rgb,
    pub load_selected: Rgb,
    pub load_unselected: Rgb,
    pub clear_selected: Rgb,
    pub clear_unselected: Rgb,
    pub save_selected: Rgb,
    pub save_unselected: Rgb,
    pub hold_selected: Rgb,
    pub hold_unselected: Rgb,
    pub bank_selected: Rgb,
    pub bank_unselected: Rgb,
    pub cancel_selected: Rgb,
    pub cancel_unselected: Rgb,
    pub reset: Rgb,
    pub copy: Rgb,
    pub copy_source: Rgb,
    pub copy_dest: Rgb,
    pub off: Rgb,
}

/// Colors for the per-channel link-mode indicators
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkColors {
    pub mono_l: Rgb,
    pub mono_r: Rgb,
    pub stereo_l: Rgb,
    pub stereo_r: Rgb,
    pub toggle_l: Rgb,
    pub toggle_r: Rgb,
}

/// Colors for the MIDI-config screen
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MidiColors {
    pub config_selected: Rgb,
    pub config_unselected: Rgb,
    pub config_sel1: Rgb,
    pub config_sel2: Rgb,
    pub config_sel3: Rgb,
    pub exit_selected: Rgb,
    pub exit_unselected: Rgb,
    pub invert_selected: Rgb,
    pub invert_unselected: Rgb,
    pub unlink_selected: Rgb,
    pub unlink_unselected: Rgb,
}

/// The four palettes making up a complete theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemePalettes {
    pub runtime: RuntimeColors,
    pub functions: FunctionColors,
    pub links: LinkColors,
    pub midi: MidiColors,
}

/// A complete, named color theme
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorTheme {
    pub id: u16,
    pub display_name: String,
    pub colors: ThemePalettes,
}
