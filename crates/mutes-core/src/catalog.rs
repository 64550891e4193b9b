//! Read-only registry of machine templates and color themes
//!
//! The catalog is constructed once at startup and injected into whatever
//! needs it, so tests can run against a small fake instead of the built-in
//! data. Lookups hand out owned deep copies; nothing a caller receives can
//! alias into catalog storage, which is what keeps one session's edits from
//! leaking into the templates or a sibling session.

use crate::machine::{MachineId, MidiMachine};
use crate::theme::ColorTheme;
use crate::MutesError;
use std::collections::HashSet;

/// Immutable template registry, safe to share across readers
#[derive(Debug, Clone)]
pub struct Catalog {
    machines: Vec<MidiMachine>,
    themes: Vec<ColorTheme>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate machine ids.
    pub fn new(
        machines: Vec<MidiMachine>,
        themes: Vec<ColorTheme>,
    ) -> Result<Catalog, MutesError> {
        let mut seen = HashSet::new();
        for machine in &machines {
            if !seen.insert(machine.id) {
                return Err(MutesError::Validation(format!(
                    "duplicate machine id {:#06x} ({})",
                    machine.id, machine.display_name
                )));
            }
        }
        Ok(Catalog { machines, themes })
    }

    /// All machine templates, in registration order.
    ///
    /// Shared references only; use [`Catalog::machine_by_id`] to obtain a
    /// mutable instance.
    pub fn machines(&self) -> &[MidiMachine] {
        &self.machines
    }

    /// Look up a template by id and return an independent instance of it.
    pub fn machine_by_id(&self, id: MachineId) -> Result<MidiMachine, MutesError> {
        self.machines
            .iter()
            .find(|m| m.id == id)
            .map(MidiMachine::instantiate)
            .ok_or(MutesError::MachineNotFound(id))
    }

    /// All color themes, in registration order.
    pub fn themes(&self) -> &[ColorTheme] {
        &self.themes
    }

    /// Look up a theme by id, returning an owned copy.
    pub fn theme_by_id(&self, id: u16) -> Result<ColorTheme, MutesError> {
        self.themes
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(MutesError::ThemeNotFound(id))
    }

    /// The theme applied when a config is created without an explicit one:
    /// the first registered theme.
    pub fn default_theme(&self) -> Result<ColorTheme, MutesError> {
        self.themes
            .first()
            .cloned()
            .ok_or_else(|| MutesError::Validation("catalog has no color themes".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemePalettes;

    fn machine(id: MachineId, name: &str) -> MidiMachine {
        MidiMachine {
            id,
            display_name: name.to_string(),
            user_name: String::new(),
            group: "Test".to_string(),
            kind: None,
            settings: vec![],
            sources: vec![],
        }
    }

    fn theme(id: u16, name: &str) -> ColorTheme {
        ColorTheme {
            id,
            display_name: name.to_string(),
            colors: ThemePalettes::default(),
        }
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = Catalog::new(vec![machine(1, "a"), machine(1, "b")], vec![]).unwrap_err();
        assert!(matches!(err, MutesError::Validation(_)));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::new(vec![machine(1, "a"), machine(2, "b")], vec![]).unwrap();
        assert_eq!(catalog.machines().len(), 2);
        assert_eq!(catalog.machine_by_id(2).unwrap().display_name, "b");
        assert_eq!(
            catalog.machine_by_id(0xffff).unwrap_err(),
            MutesError::MachineNotFound(0xffff)
        );
    }

    #[test]
    fn test_lookup_returns_independent_copies() {
        let catalog = Catalog::new(vec![machine(1, "a")], vec![]).unwrap();
        let mut first = catalog.machine_by_id(1).unwrap();
        let second = catalog.machine_by_id(1).unwrap();
        assert_eq!(first, second);

        first.user_name = "edited".to_string();
        assert_eq!(second.user_name, "");
        assert_eq!(catalog.machine_by_id(1).unwrap().user_name, "");
    }

    #[test]
    fn test_themes() {
        let catalog =
            Catalog::new(vec![], vec![theme(0x10, "First"), theme(0x20, "Second")]).unwrap();
        assert_eq!(catalog.default_theme().unwrap().id, 0x10);
        assert_eq!(catalog.theme_by_id(0x20).unwrap().display_name, "Second");
        assert_eq!(
            catalog.theme_by_id(0x30).unwrap_err(),
            MutesError::ThemeNotFound(0x30)
        );

        let empty = Catalog::new(vec![], vec![]).unwrap();
        assert!(matches!(
            empty.default_theme().unwrap_err(),
            MutesError::Validation(_)
        ));
    }
}
