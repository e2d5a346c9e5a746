//! Game configuration: the immutable root aggregate.
//!
//! A [`GameConfig`] describes a whole game as data — card pool,
//! containers, players, per-action permission rules and effect graphs,
//! turn order, end conditions, and result ordering. It deserializes from a
//! structured document (typically JSON) and never changes after loading;
//! the [`crate::state::StateStore`] is its only mutable derivative.
//!
//! Cross-reference validation lives in [`validate`]; a validated
//! configuration can never surprise the interpreter with a dangling edge.

mod action;
mod effect;
mod validate;

pub use action::{ActionConfig, ActionKind, Pattern, PermissionOverride, PermissionRule};
pub use effect::{Effect, FunctionEffect, SwitchEffect};
pub use validate::ConfigError;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::core::{CardTypeId, ContainerId, FunctionId, PlayerId, RoleId};

/// Container type tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Deck,
    Trash,
    Hand,
    Field,
}

impl std::fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ContainerKind::Deck => "deck",
            ContainerKind::Trash => "trash",
            ContainerKind::Hand => "hand",
            ContainerKind::Field => "field",
        })
    }
}

/// A card type in the configured pool.
///
/// May attach per-type overrides of an action, consulted before the
/// global action table when a submitted action targets a card of this
/// type.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardType {
    pub id: CardTypeId,

    #[serde(default)]
    pub actions: BTreeMap<ActionKind, ActionConfig>,
}

/// A container's configured identity, capacity, and initial population.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerConfig {
    pub id: ContainerId,

    pub kind: ContainerKind,

    #[serde(default)]
    pub max_cards: Option<usize>,

    /// Card-type to count, materialized into card instances at game start.
    /// Ordered so population is deterministic.
    #[serde(default)]
    pub initial_cards: BTreeMap<CardTypeId, usize>,

    /// Per-container overrides of an action, consulted after card-type
    /// overrides and before the global action table.
    #[serde(default)]
    pub actions: BTreeMap<ActionKind, ActionConfig>,
}

/// A player's configured identity and starting roles.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerConfig {
    pub id: PlayerId,

    #[serde(default)]
    pub initial_roles: Vec<RoleId>,
}

fn zero() -> Value {
    Value::from(0)
}

/// A game-over test, evaluated after every completed action.
///
/// The named function is invoked directly (outside any effect graph) with
/// the fixed `additionalParams` literal. The condition is satisfied when
/// every occurrence of `referenceKey` in the output — each element if the
/// output is an array, the whole output otherwise — equals `equals`
/// (default `0`).
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EndCondition {
    pub function: FunctionId,

    #[serde(default)]
    pub additional_params: Value,

    pub reference_key: String,

    #[serde(default = "zero")]
    pub equals: Value,
}

/// Ranking sort direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// How the final ranking is computed once the game ends.
///
/// The named function must return an array of objects each carrying a
/// `"playerId"` field plus the `referenceKey` field; participants are
/// sorted stably by that key in the configured direction, ties resolved
/// by turn order.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultOrder {
    pub function: FunctionId,

    #[serde(default)]
    pub additional_params: Value,

    pub reference_key: String,

    pub by: SortOrder,
}

/// The root configuration aggregate.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameConfig {
    #[serde(default)]
    pub card_pool: Vec<CardType>,

    #[serde(default)]
    pub containers: Vec<ContainerConfig>,

    #[serde(default)]
    pub players: Vec<PlayerConfig>,

    /// Global per-action-type rule table.
    #[serde(default)]
    pub actions: BTreeMap<ActionKind, ActionConfig>,

    #[serde(default)]
    pub roles: Vec<RoleId>,

    #[serde(default)]
    pub turn_order: Vec<PlayerId>,

    #[serde(default)]
    pub end_conditions: Vec<EndCondition>,

    #[serde(default)]
    pub result_order: Option<ResultOrder>,

    /// Initialization graph. Traversal entries are the effects no other
    /// initial effect references, run in declaration order.
    #[serde(default)]
    pub initial_effects: Vec<Effect>,
}

impl GameConfig {
    /// Parse a configuration document from JSON text.
    ///
    /// Parsing does not validate cross-references; call
    /// [`GameConfig::validate`] (or let [`crate::engine::Engine::new`] do
    /// it) before interpreting.
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Look up a card type in the pool.
    #[must_use]
    pub fn card_type(&self, id: &CardTypeId) -> Option<&CardType> {
        self.card_pool.iter().find(|t| &t.id == id)
    }

    /// Look up a container's configuration.
    #[must_use]
    pub fn container(&self, id: &ContainerId) -> Option<&ContainerConfig> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// Look up a player's configuration.
    #[must_use]
    pub fn player(&self, id: &PlayerId) -> Option<&PlayerConfig> {
        self.players.iter().find(|p| &p.id == id)
    }

    /// Resolve the action configuration governing a submission.
    ///
    /// Per-instance overrides take precedence: a card-type-level action
    /// first, then a container-level one, then the global table.
    #[must_use]
    pub fn action_config(
        &self,
        kind: ActionKind,
        card_type: Option<&CardTypeId>,
        container: Option<&ContainerId>,
    ) -> Option<&ActionConfig> {
        if let Some(config) = card_type
            .and_then(|id| self.card_type(id))
            .and_then(|t| t.actions.get(&kind))
        {
            return Some(config);
        }
        if let Some(config) = container
            .and_then(|id| self.container(id))
            .and_then(|c| c.actions.get(&kind))
        {
            return Some(config);
        }
        self.actions.get(&kind)
    }

    /// Every effect graph in the configuration, labeled for diagnostics,
    /// with its `before`/`after` hooks where present.
    pub(crate) fn graphs(
        &self,
    ) -> Vec<(String, &[Effect], Option<&crate::core::EffectId>, Option<&crate::core::EffectId>)>
    {
        let mut graphs = Vec::new();
        for (kind, action) in &self.actions {
            graphs.push((
                format!("actions.{kind}"),
                action.effects.as_slice(),
                action.before.as_ref(),
                action.after.as_ref(),
            ));
        }
        for card_type in &self.card_pool {
            for (kind, action) in &card_type.actions {
                graphs.push((
                    format!("cardPool.{}.{kind}", card_type.id),
                    action.effects.as_slice(),
                    action.before.as_ref(),
                    action.after.as_ref(),
                ));
            }
        }
        for container in &self.containers {
            for (kind, action) in &container.actions {
                graphs.push((
                    format!("containers.{}.{kind}", container.id),
                    action.effects.as_slice(),
                    action.before.as_ref(),
                    action.after.as_ref(),
                ));
            }
        }
        graphs.push((
            "initialEffects".to_owned(),
            self.initial_effects.as_slice(),
            None,
            None,
        ));
        graphs
    }

    /// Every function identifier the configuration references, for
    /// cross-checking against a registry.
    pub fn referenced_functions(&self) -> Vec<&FunctionId> {
        let mut functions = Vec::new();
        for (_, effects, _, _) in self.graphs() {
            for effect in effects {
                if let Effect::Function(f) = effect {
                    functions.push(&f.function);
                }
            }
        }
        for condition in &self.end_conditions {
            functions.push(&condition.function);
        }
        if let Some(order) = &self.result_order {
            functions.push(&order.function);
        }
        functions
    }
}
