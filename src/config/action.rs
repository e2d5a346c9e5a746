//! Action configuration: permission rules and per-action effect graphs.

use regex::Regex;
use serde::{Deserialize, Deserializer};

use super::effect::Effect;
use crate::core::{EffectId, RoleId};

/// The built-in action vocabulary.
///
/// Each action type is configured independently; a configuration may omit
/// types it never uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Flip,
    Move,
    Shuffle,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ActionKind::Flip => "flip",
            ActionKind::Move => "move",
            ActionKind::Shuffle => "shuffle",
        })
    }
}

/// A compiled condition pattern for permission overrides.
///
/// Configuration documents write patterns as plain regex strings
/// (e.g. `"true"`, `"deck.*"`); invalid patterns are rejected at
/// deserialization time.
#[derive(Clone, Debug)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    /// Compile a pattern.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Whether the pattern matches a field value.
    #[must_use]
    pub fn matches(&self, value: &str) -> bool {
        self.regex.is_match(value)
    }

    /// The original pattern text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}

impl<'de> Deserialize<'de> for Pattern {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Pattern::new(&raw).map_err(serde::de::Error::custom)
    }
}

/// A conditional rule that supersedes the base allow/deny decision.
///
/// All condition fields must pattern-match the current field snapshot for
/// the override to apply. Overrides are evaluated in declaration order;
/// the last matching one wins.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionOverride {
    /// Field name to pattern, e.g. `{"isFaceUp": "true"}`.
    pub condition: std::collections::BTreeMap<String, Pattern>,

    #[serde(default)]
    pub allowed: Vec<RoleId>,

    #[serde(default)]
    pub denied: Vec<RoleId>,
}

/// An action's permission block: base allow/deny role lists plus ordered
/// overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PermissionRule {
    #[serde(default)]
    pub allowed: Vec<RoleId>,

    #[serde(default)]
    pub denied: Vec<RoleId>,

    #[serde(default)]
    pub overrides: Vec<PermissionOverride>,
}

/// One action type's full configuration: who may run it and what it does.
///
/// `effects` is the action's main graph in declaration order; the first
/// declared effect is the traversal entry. `before` and `after` name
/// additional entry points in the same graph, each run as a standalone
/// traversal around the main one.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionConfig {
    #[serde(default)]
    pub permissions: PermissionRule,

    #[serde(default)]
    pub effects: Vec<Effect>,

    #[serde(default)]
    pub before: Option<EffectId>,

    #[serde(default)]
    pub after: Option<EffectId>,
}
