//! Built-in color themes
//!
//! Three themes ship today. Their palettes are still identical pending
//! final color picks from hardware testing; only id and name differ.
//! TODO: replace the High Contrast and Funky palettes once the LED
//! brightness pass on real hardware settles the values.

use mutes_core::{
    dim, mid, ColorTheme, FunctionColors, LinkColors, MidiColors, Rgb, RuntimeColors,
    ThemePalettes,
};

const RED: Rgb = [0xff, 0x00, 0x00];
const GREEN: Rgb = [0x00, 0xff, 0x00];
const BLUE: Rgb = [0x00, 0x00, 0xff];
const YELLOW: Rgb = [0xff, 0xff, 0x00];
const ORANGE: Rgb = [0xff, 0x55, 0x05];
const PURPLE: Rgb = [0xff, 0x00, 0xff];
const WHITE: Rgb = [0xff, 0xff, 0xff];
const CYAN: Rgb = [0x00, 0xdd, 0xff];
const OFF: Rgb = [0x00, 0x00, 0x00];

/// All built-in themes, in catalog order.
pub fn all() -> Vec<ColorTheme> {
    vec![
        ColorTheme {
            id: 0xbad0,
            display_name: "Standard".to_string(),
            colors: standard_palettes(),
        },
        ColorTheme {
            id: 0xb33f,
            display_name: "High Contrast".to_string(),
            colors: standard_palettes(),
        },
        ColorTheme {
            id: 0xdead,
            display_name: "Some Funky Colors".to_string(),
            colors: standard_palettes(),
        },
    ]
}

fn standard_palettes() -> ThemePalettes {
    ThemePalettes {
        runtime: RuntimeColors {
            mute_selected: RED,
            mute_queued: ORANGE,
            mute_unselected: dim(WHITE),
            mute_unselected_queued: mid(GREEN),
            scene_selected: CYAN,
            scene_unselected: dim(CYAN),
            scene_queued: WHITE,
            bank_selected: YELLOW,
            bank_unselected: dim(YELLOW),
            bank_queued: WHITE,
        },
        functions: FunctionColors {
            mute_selected: GREEN,
            mute_unselected: dim(GREEN),
            load_selected: ORANGE,
            load_unselected: dim(ORANGE),
            clear_selected: RED,
            clear_unselected: dim(RED),
            save_selected: PURPLE,
            save_unselected: dim(PURPLE),
            hold_selected: BLUE,
            hold_unselected: dim(BLUE),
            bank_selected: YELLOW,
            bank_unselected: dim(YELLOW),
            cancel_selected: WHITE,
            cancel_unselected: dim(WHITE),
            reset: WHITE,
            copy: ORANGE,
            copy_source: ORANGE,
            copy_dest: PURPLE,
            off: OFF,
        },
        links: LinkColors {
            mono_l: dim(WHITE),
            mono_r: dim(WHITE),
            stereo_l: dim(WHITE),
            stereo_r: dim(RED),
            toggle_l: dim(GREEN),
            toggle_r: dim(GREEN),
        },
        midi: MidiColors {
            config_selected: BLUE,
            config_unselected: dim(BLUE),
            config_sel1: BLUE,
            config_sel2: RED,
            config_sel3: GREEN,
            exit_selected: WHITE,
            exit_unselected: dim(WHITE),
            invert_selected: ORANGE,
            invert_unselected: dim(ORANGE),
            unlink_selected: GREEN,
            unlink_unselected: dim(GREEN),
        },
    }
}
