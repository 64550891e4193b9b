//! Device transport seam
//!
//! Syncing a config to or from the physical controller happens over sysex
//! on a pair of MIDI ports. The framing and handshake are not defined here;
//! the model only needs the two operations as an opaque boundary it can
//! invoke, so they live behind a trait the hosting application implements.
//! Ports are identified by name, resolved by the implementation.

use crate::config::MutesConfig;

/// Loads and saves configurations over a device connection
pub trait MuteTransport {
    /// Read the device's state and return the updated configuration.
    fn load_from_midi(
        &self,
        config: &MutesConfig,
        input_port: &str,
        output_port: &str,
    ) -> anyhow::Result<MutesConfig>;

    /// Write the configuration out to the device.
    fn save_to_midi(
        &self,
        config: &MutesConfig,
        input_port: &str,
        output_port: &str,
    ) -> anyhow::Result<()>;
}

/// Placeholder transport for hosts without device sync.
///
/// Every operation logs a warning and fails.
pub struct StubTransport;

impl MuteTransport for StubTransport {
    fn load_from_midi(
        &self,
        _config: &MutesConfig,
        input_port: &str,
        _output_port: &str,
    ) -> anyhow::Result<MutesConfig> {
        log::warn!("load_from_midi: not implemented (port '{}')", input_port);
        anyhow::bail!("device load is not implemented")
    }

    fn save_to_midi(
        &self,
        _config: &MutesConfig,
        _input_port: &str,
        output_port: &str,
    ) -> anyhow::Result<()> {
        log::warn!("save_to_midi: not implemented (port '{}')", output_port);
        anyhow::bail!("device save is not implemented")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::theme::{ColorTheme, ThemePalettes};

    #[test]
    fn test_stub_transport_fails() {
        let theme = ColorTheme {
            id: 1,
            display_name: "T".to_string(),
            colors: ThemePalettes::default(),
        };
        let catalog = Catalog::new(vec![], vec![theme]).unwrap();
        let config = MutesConfig::empty_with(&catalog, None, false).unwrap();

        let transport = StubTransport;
        assert!(transport.load_from_midi(&config, "in", "out").is_err());
        assert!(transport.save_to_midi(&config, "in", "out").is_err());
    }
}
