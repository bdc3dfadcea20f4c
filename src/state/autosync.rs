//! Autosync preference.

use serde::{Deserialize, Serialize};

/// When edits are uploaded automatically.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Autosync {
    /// Upload right away
    #[default]
    On,
    /// Upload only while on Wi-Fi
    Wifi,
    /// Upload only on request
    Off,
}

impl Autosync {
    pub fn label(&self) -> &'static str {
        match self {
            Autosync::On => "ON",
            Autosync::Wifi => "WIFI",
            Autosync::Off => "OFF",
        }
    }

    pub fn all() -> &'static [Autosync] {
        &[Autosync::On, Autosync::Wifi, Autosync::Off]
    }

    /// Parses a stored preference value. Unknown values mean the default.
    pub fn from_pref(value: Option<&str>) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|a| Some(a.label()) == value)
            .unwrap_or_default()
    }
}
