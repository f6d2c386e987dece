use serde::{Deserialize, Serialize};

/// Serialized editor configuration text, swapped out while presenting
/// and restored on exit.
pub type Settings = String;

/// The one persisted record per workspace.
///
/// Stored as `{ "settings": string|null, "isActive": boolean }`. Both
/// fields are required on read; anything else fails shape validation and
/// is replaced by the default.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct State {
    pub settings: Option<Settings>,
    pub is_active: bool,
}

impl Default for State {
    fn default() -> Self {
        Self {
            settings: None,
            is_active: false,
        }
    }
}

impl State {
    /// Merge a partial update into this state. Fields the patch does not
    /// mention are retained.
    pub fn apply(&mut self, patch: StatePatch) {
        if let Some(settings) = patch.settings {
            self.settings = settings;
        }
        if let Some(is_active) = patch.is_active {
            self.is_active = is_active;
        }
    }
}

/// Partial state update. The outer `Option` distinguishes "leave the
/// field alone" (`None`) from "write this value" (`Some`).
#[derive(Clone, Debug, Default)]
pub struct StatePatch {
    pub settings: Option<Option<Settings>>,
    pub is_active: Option<bool>,
}

impl StatePatch {
    pub fn settings(settings: Option<Settings>) -> Self {
        Self {
            settings: Some(settings),
            is_active: None,
        }
    }

    pub fn active(is_active: bool) -> Self {
        Self {
            settings: None,
            is_active: Some(is_active),
        }
    }
}
