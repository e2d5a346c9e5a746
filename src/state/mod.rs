//! The State Store: the live, mutable projection of a game configuration.
//!
//! Holds containers (with their cards), players (with their current
//! roles), the turn pointer, and a free-form named-value area that effects
//! read and write. Host callables mutate it directly; the mapper reads it
//! through the dotted-path projection in [`StateStore::path_value`].
//!
//! Queries are always live: each effect observes the mutations made by the
//! immediately preceding effect. No history or undo is retained.

mod container;

pub use container::{Card, Container};

use rustc_hash::FxHashMap;
use serde::Serialize;
use serde_json::{Map, Value};
use smallvec::SmallVec;

use crate::config::GameConfig;
use crate::core::{CardId, ContainerId, EngineError, EntityKind, PlayerId, RoleId};
use crate::values::{insert_path, lookup_path};

/// A player's live state: identity plus a mutable role set.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub id: PlayerId,
    pub roles: SmallVec<[RoleId; 4]>,
}

impl PlayerState {
    #[must_use]
    pub fn has_role(&self, role: &RoleId) -> bool {
        self.roles.contains(role)
    }
}

/// Mutable game state, owned by the lifecycle controller and mutated by
/// host callables during effect traversals.
#[derive(Clone, Debug)]
pub struct StateStore {
    containers: FxHashMap<ContainerId, Container>,
    container_order: Vec<ContainerId>,
    players: FxHashMap<PlayerId, PlayerState>,
    player_order: Vec<PlayerId>,
    turn_order: Vec<PlayerId>,
    turn_index: usize,
    vars: Map<String, Value>,
}

impl StateStore {
    /// Populate a fresh store from a configuration.
    ///
    /// Containers are created in declaration order and filled from their
    /// `initialCards` counts; generated card identifiers are
    /// `"<card-type>#<n>"` with `n` counting from 1 per type, so population
    /// is fully deterministic. Players receive their initial roles.
    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        let mut containers = FxHashMap::default();
        let mut container_order = Vec::with_capacity(config.containers.len());

        for spec in &config.containers {
            let mut container = Container::new(spec.id.clone(), spec.kind, spec.max_cards);
            for (card_type, count) in &spec.initial_cards {
                for n in 1..=*count {
                    let card_id = CardId::new(format!("{card_type}#{n}"));
                    container.push_card(Card::new(card_id, card_type.clone()));
                }
            }
            container_order.push(spec.id.clone());
            containers.insert(spec.id.clone(), container);
        }

        let mut players = FxHashMap::default();
        let mut player_order = Vec::with_capacity(config.players.len());
        for spec in &config.players {
            player_order.push(spec.id.clone());
            players.insert(
                spec.id.clone(),
                PlayerState {
                    id: spec.id.clone(),
                    roles: spec.initial_roles.iter().cloned().collect(),
                },
            );
        }

        Self {
            containers,
            container_order,
            players,
            player_order,
            turn_order: config.turn_order.clone(),
            turn_index: 0,
            vars: Map::new(),
        }
    }

    // === Containers ===

    /// Read a container by identifier.
    pub fn container(&self, id: &ContainerId) -> Result<&Container, EngineError> {
        self.containers.get(id).ok_or_else(|| EngineError::NotFound {
            kind: EntityKind::Container,
            id: id.to_string(),
        })
    }

    /// Read a container by identifier, mutably.
    pub fn container_mut(&mut self, id: &ContainerId) -> Result<&mut Container, EngineError> {
        self.containers
            .get_mut(id)
            .ok_or_else(|| EngineError::NotFound {
                kind: EntityKind::Container,
                id: id.to_string(),
            })
    }

    /// Iterate containers in configuration declaration order.
    pub fn containers(&self) -> impl Iterator<Item = &Container> {
        self.container_order
            .iter()
            .filter_map(|id| self.containers.get(id))
    }

    /// Container identifiers in declaration order.
    #[must_use]
    pub fn container_ids(&self) -> &[ContainerId] {
        &self.container_order
    }

    /// Move one card between containers.
    ///
    /// Convenience for host callables; capacity is deliberately not
    /// checked here (see [`Container::is_full`]).
    pub fn move_card(
        &mut self,
        from: &ContainerId,
        to: &ContainerId,
        card: &CardId,
    ) -> Result<(), EngineError> {
        // Order matters: verify the destination before removing the card.
        self.container(to)?;
        let taken =
            self.container_mut(from)?
                .take_card(card)
                .ok_or_else(|| EngineError::NotFound {
                    kind: EntityKind::Card,
                    id: card.to_string(),
                })?;
        self.container_mut(to)?.push_card(taken);
        Ok(())
    }

    /// Locate the container currently holding a card.
    #[must_use]
    pub fn find_card(&self, card: &CardId) -> Option<(&ContainerId, &Card)> {
        self.containers().find_map(|container| {
            container.card(card).map(|c| (&container.id, c))
        })
    }

    /// Live query: all cards satisfying a predicate, with their containers,
    /// in declaration order.
    pub fn cards_where<'a, F>(&'a self, mut predicate: F) -> Vec<(&'a ContainerId, &'a Card)>
    where
        F: FnMut(&Container, &Card) -> bool,
    {
        let mut hits = Vec::new();
        for container in self.containers() {
            for card in &container.cards {
                if predicate(container, card) {
                    hits.push((&container.id, card));
                }
            }
        }
        hits
    }

    // === Players ===

    /// Read a player by identifier.
    pub fn player(&self, id: &PlayerId) -> Result<&PlayerState, EngineError> {
        self.players.get(id).ok_or_else(|| EngineError::NotFound {
            kind: EntityKind::Player,
            id: id.to_string(),
        })
    }

    /// Iterate players in configuration declaration order.
    pub fn players(&self) -> impl Iterator<Item = &PlayerState> {
        self.player_order.iter().filter_map(|id| self.players.get(id))
    }

    /// Grant a role to a player. Granting an already-held role is a no-op.
    pub fn grant_role(&mut self, player: &PlayerId, role: RoleId) -> Result<(), EngineError> {
        let state = self.players.get_mut(player).ok_or_else(|| EngineError::NotFound {
            kind: EntityKind::Player,
            id: player.to_string(),
        })?;
        if !state.roles.contains(&role) {
            state.roles.push(role);
        }
        Ok(())
    }

    /// Revoke a role from a player. Revoking an absent role is a no-op.
    pub fn revoke_role(&mut self, player: &PlayerId, role: &RoleId) -> Result<(), EngineError> {
        let state = self.players.get_mut(player).ok_or_else(|| EngineError::NotFound {
            kind: EntityKind::Player,
            id: player.to_string(),
        })?;
        state.roles.retain(|r| r != role);
        Ok(())
    }

    // === Turn order ===

    #[must_use]
    pub fn turn_order(&self) -> &[PlayerId] {
        &self.turn_order
    }

    #[must_use]
    pub fn turn_index(&self) -> usize {
        self.turn_index
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.turn_order.get(self.turn_index)
    }

    /// Advance the turn pointer, wrapping around the turn order.
    pub fn advance_turn(&mut self) {
        if !self.turn_order.is_empty() {
            self.turn_index = (self.turn_index + 1) % self.turn_order.len();
        }
    }

    /// Set the turn pointer directly (e.g. from a `nextTurnOrder` value).
    pub fn set_turn_index(&mut self, index: usize) {
        if !self.turn_order.is_empty() {
            self.turn_index = index % self.turn_order.len();
        }
    }

    // === Named values ===

    /// Read a named value by dotted path.
    #[must_use]
    pub fn var(&self, path: &str) -> Option<&Value> {
        let (head, rest) = match path.split_once('.') {
            Some((head, rest)) => (head, rest),
            None => (path, ""),
        };
        lookup_path(self.vars.get(head)?, rest)
    }

    /// Write a named value by dotted path, creating intermediate objects.
    pub fn set_var(&mut self, path: &str, value: Value) {
        insert_path(&mut self.vars, path, value);
    }

    /// Remove a top-level named value.
    pub fn remove_var(&mut self, key: &str) -> Option<Value> {
        self.vars.remove(key)
    }

    // === Path projection ===

    /// Read-only dotted-path projection over the whole store, used by the
    /// mapper's `state` source.
    ///
    /// Root segments: `containers`, `players`, `currentPlayer`,
    /// `turnOrder`, `turnIndex`, `vars`.
    #[must_use]
    pub fn path_value(&self, path: &str) -> Option<Value> {
        let (root, rest) = match path.split_once('.') {
            Some((root, rest)) => (root, rest),
            None => (path, ""),
        };

        match root {
            "containers" => {
                let (id, tail) = match rest.split_once('.') {
                    Some((id, tail)) => (id, tail),
                    None => (rest, ""),
                };
                if id.is_empty() {
                    return None;
                }
                let container = self.containers.get(id)?;
                let value = serde_json::to_value(container).ok()?;
                lookup_path(&value, tail).cloned()
            }
            "players" => {
                let (id, tail) = match rest.split_once('.') {
                    Some((id, tail)) => (id, tail),
                    None => (rest, ""),
                };
                if id.is_empty() {
                    return None;
                }
                let player = self.players.get(id)?;
                let value = serde_json::to_value(player).ok()?;
                lookup_path(&value, tail).cloned()
            }
            "currentPlayer" if rest.is_empty() => {
                self.current_player().map(|p| Value::String(p.to_string()))
            }
            "turnOrder" => {
                let value = serde_json::to_value(&self.turn_order).ok()?;
                lookup_path(&value, rest).cloned()
            }
            "turnIndex" if rest.is_empty() => Some(Value::from(self.turn_index)),
            "vars" => self.var(rest).cloned(),
            _ => None,
        }
    }
}
