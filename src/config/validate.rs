//! Load-time cross-reference validation.
//!
//! Dangling effect edges are a configuration error, never a runtime
//! surprise: every `next`/`error`/case/`default` edge and every
//! `before`/`after` hook must name an effect in its own graph before the
//! engine will interpret anything.

use std::collections::BTreeSet;

use thiserror::Error;

use super::{Effect, GameConfig};
use crate::core::{CardTypeId, ContainerId, EffectId, FunctionId, PlayerId};

/// Problems detected while validating a configuration document.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("duplicate effect id {effect} in {graph}")]
    DuplicateEffect { graph: String, effect: EffectId },

    #[error("{graph}: effect {from} references missing effect {target}")]
    DanglingEdge {
        graph: String,
        from: EffectId,
        target: EffectId,
    },

    #[error("{graph}: {hook} hook references missing effect {target}")]
    UnknownHook {
        graph: String,
        hook: &'static str,
        target: EffectId,
    },

    #[error("container {container} initialCards references unknown card type {card_type}")]
    UnknownCardType {
        container: ContainerId,
        card_type: CardTypeId,
    },

    #[error("turn order references unknown player {0}")]
    UnknownPlayer(PlayerId),

    #[error("turn order is empty")]
    EmptyTurnOrder,

    #[error("configuration references unregistered function {0}")]
    UnknownFunction(FunctionId),
}

impl GameConfig {
    /// Validate all intra-configuration cross-references.
    ///
    /// Function identifiers are not checked here — the registry is
    /// supplied separately; [`crate::engine::Engine::new`] cross-checks
    /// them via [`GameConfig::referenced_functions`].
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (graph, effects, before, after) in self.graphs() {
            let mut ids: BTreeSet<&EffectId> = BTreeSet::new();
            for effect in effects {
                if !ids.insert(effect.id()) {
                    return Err(ConfigError::DuplicateEffect {
                        graph,
                        effect: effect.id().clone(),
                    });
                }
            }

            for effect in effects {
                for target in effect.edge_targets() {
                    if !ids.contains(target) {
                        return Err(ConfigError::DanglingEdge {
                            graph,
                            from: effect.id().clone(),
                            target: target.clone(),
                        });
                    }
                }
            }

            for (hook, target) in [("before", before), ("after", after)] {
                if let Some(target) = target {
                    if !ids.contains(target) {
                        return Err(ConfigError::UnknownHook {
                            graph,
                            hook,
                            target: target.clone(),
                        });
                    }
                }
            }
        }

        for container in &self.containers {
            for card_type in container.initial_cards.keys() {
                if self.card_type(card_type).is_none() {
                    return Err(ConfigError::UnknownCardType {
                        container: container.id.clone(),
                        card_type: card_type.clone(),
                    });
                }
            }
        }

        if self.turn_order.is_empty() && !self.players.is_empty() {
            return Err(ConfigError::EmptyTurnOrder);
        }
        for player in &self.turn_order {
            if self.player(player).is_none() {
                return Err(ConfigError::UnknownPlayer(player.clone()));
            }
        }

        Ok(())
    }

    /// The initialization graph's traversal entries: effects no other
    /// initial effect references, in declaration order.
    pub fn initial_entries(&self) -> Vec<&EffectId> {
        let referenced: BTreeSet<&EffectId> = self
            .initial_effects
            .iter()
            .flat_map(Effect::edge_targets)
            .collect();
        self.initial_effects
            .iter()
            .map(Effect::id)
            .filter(|id| !referenced.contains(id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(value: serde_json::Value) -> GameConfig {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_valid_config_passes() {
        let config = config(json!({
            "actions": {
                "flip": {
                    "effects": [
                        {"id": "a", "function": "f", "next": "b"},
                        {"id": "b", "referenceKey": "count", "cases": {"2": "a"}}
                    ],
                    "after": "b"
                }
            }
        }));
        config.validate().unwrap();
    }

    #[test]
    fn test_dangling_next_edge() {
        let config = config(json!({
            "actions": {
                "flip": {"effects": [{"id": "a", "function": "f", "next": "ghost"}]}
            }
        }));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::DanglingEdge { .. }));
        assert!(err.to_string().contains("ghost"));
    }

    #[test]
    fn test_dangling_case_edge() {
        let config = config(json!({
            "initialEffects": [
                {"id": "s", "referenceKey": "result", "cases": {"matched": "ghost"}}
            ]
        }));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::DanglingEdge { .. }
        ));
    }

    #[test]
    fn test_duplicate_effect_id() {
        let config = config(json!({
            "actions": {
                "move": {
                    "effects": [
                        {"id": "a", "function": "f"},
                        {"id": "a", "function": "g"}
                    ]
                }
            }
        }));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::DuplicateEffect { .. }
        ));
    }

    #[test]
    fn test_unknown_hook() {
        let config = config(json!({
            "actions": {
                "flip": {
                    "effects": [{"id": "a", "function": "f"}],
                    "before": "ghost"
                }
            }
        }));
        let err = config.validate().unwrap_err();
        assert!(matches!(err, ConfigError::UnknownHook { hook: "before", .. }));
    }

    #[test]
    fn test_unknown_card_type_in_initial_cards() {
        let config = config(json!({
            "cardPool": [{"id": "cardTypeA"}],
            "containers": [
                {"id": "mainDeck", "kind": "deck", "initialCards": {"cardTypeZ": 4}}
            ]
        }));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::UnknownCardType { .. }
        ));
    }

    #[test]
    fn test_turn_order_checks() {
        let config = config(json!({
            "players": [{"id": "player1"}]
        }));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::EmptyTurnOrder
        ));

        let config = self::config(json!({
            "players": [{"id": "player1"}],
            "turnOrder": ["player1", "ghost"]
        }));
        assert!(matches!(
            config.validate().unwrap_err(),
            ConfigError::UnknownPlayer(_)
        ));
    }

    #[test]
    fn test_initial_entries_are_unreferenced_effects() {
        let config = config(json!({
            "initialEffects": [
                {"id": "shuffleEffect", "function": "shuffle", "next": "distributeEffect"},
                {"id": "distributeEffect", "function": "moveCards"},
                {"id": "flipAllEffect", "function": "flipCard"}
            ]
        }));

        let entries: Vec<_> = config.initial_entries().iter().map(|e| e.as_str()).collect();
        assert_eq!(entries, vec!["shuffleEffect", "flipAllEffect"]);
    }
}
