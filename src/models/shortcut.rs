//! Keyboard shortcut parsing and matching.
//!
//! Shortcuts are written as `Modifier+Modifier+key` (e.g. `Control+e`,
//! `Meta+Shift+p`). Modifiers must match exactly; the key is compared
//! case-insensitively.

use crate::core::platform::Platform;

/// Modifier keys held alongside the main key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub alt: bool,
    pub shift: bool,
}

/// A single key combination.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyCombo {
    pub modifiers: Modifiers,
    /// Lowercased key name (`e`, `enter`, `f2`).
    pub key: String,
}

impl KeyCombo {
    /// Parse a combination string. Returns `None` for unknown modifiers or
    /// a missing key.
    pub fn parse(spec: &str) -> Option<Self> {
        let mut parts: Vec<&str> = spec.split('+').map(str::trim).collect();
        let key = parts.pop().filter(|k| !k.is_empty())?;

        let mut modifiers = Modifiers::default();
        for part in parts {
            match part {
                "Control" | "Ctrl" => modifiers.ctrl = true,
                "Meta" | "Cmd" => modifiers.meta = true,
                "Alt" => modifiers.alt = true,
                "Shift" => modifiers.shift = true,
                _ => return None,
            }
        }

        Some(Self {
            modifiers,
            key: key.to_lowercase(),
        })
    }

    /// Check a pressed key against this combination.
    pub fn matches(&self, key: &str, modifiers: Modifiers) -> bool {
        self.modifiers == modifiers && self.key == key.to_lowercase()
    }
}

/// A shortcut with an optional mac-specific variant.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Shortcut {
    pub default: KeyCombo,
    pub mac: Option<KeyCombo>,
    /// Suppress the browser's own handling of the key.
    pub prevent_default: bool,
}

impl Shortcut {
    pub fn new(default: &str, mac: Option<&str>, prevent_default: bool) -> Option<Self> {
        Some(Self {
            default: KeyCombo::parse(default)?,
            mac: match mac {
                Some(m) => Some(KeyCombo::parse(m)?),
                None => None,
            },
            prevent_default,
        })
    }

    /// The combination that applies on `platform`.
    pub fn for_platform(&self, platform: Platform) -> &KeyCombo {
        match (&self.mac, platform) {
            (Some(mac), Platform::Mac) => mac,
            _ => &self.default,
        }
    }

    /// Label shown to the user, e.g. `Control+E`.
    pub fn display(&self, platform: Platform) -> String {
        let combo = self.for_platform(platform);
        let m = combo.modifiers;
        let mut parts: Vec<String> = [
            (m.ctrl, "Control"),
            (m.meta, if platform.is_mac() { "⌘" } else { "Meta" }),
            (m.alt, "Alt"),
            (m.shift, "Shift"),
        ]
        .into_iter()
        .filter(|(held, _)| *held)
        .map(|(_, name)| name.to_string())
        .collect();
        parts.push(combo.key.to_uppercase());
        parts.join("+")
    }
}
