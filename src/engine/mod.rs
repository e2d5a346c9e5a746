//! The Lifecycle Controller.
//!
//! An [`Engine`] owns one game: the immutable [`GameConfig`], the host's
//! [`FunctionRegistry`], and the live [`StateStore`]. It drives the
//! phases — initialization, the action loop, end-of-game evaluation — and
//! is the only place actions enter the system.
//!
//! A submitted action is resolved to its governing configuration
//! (card-type override, then container override, then the global table),
//! checked against that configuration's permission rule, and only then
//! interpreted: the `before` hook, the main effect graph, and the `after`
//! hook each run as a standalone traversal, in that order. After every
//! completed action the end conditions are evaluated; the first satisfied
//! condition finishes the game and, when a result order is configured,
//! produces the final ranking.
//!
//! Permission denial is an outcome, not an error: callers always learn
//! which rule denied them. Traversal failures are errors, and there is no
//! rollback — whatever the traversal mutated before failing stays.

use std::cmp::Ordering;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::config::{
    ActionConfig, ActionKind, ConfigError, Effect, EndCondition, GameConfig, ResultOrder,
    SortOrder,
};
use crate::core::{CardId, ContainerId, EngineError, EntityKind, PlayerId, RoleId};
use crate::graph::EffectGraph;
use crate::permissions::{self, Decision, FieldSnapshot, RuleSource};
use crate::registry::FunctionRegistry;
use crate::state::StateStore;
use crate::values::lookup_path;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GamePhase {
    /// Constructed but not started.
    Uninitialized,
    /// Running the initialization graph.
    Initializing,
    /// Ready to accept player actions.
    AwaitingAction,
    /// Checking end conditions after a completed action.
    Evaluating,
    /// An end condition was satisfied; no further actions are accepted.
    Finished,
}

impl std::fmt::Display for GamePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            GamePhase::Uninitialized => "uninitialized",
            GamePhase::Initializing => "initializing",
            GamePhase::AwaitingAction => "awaitingAction",
            GamePhase::Evaluating => "evaluating",
            GamePhase::Finished => "finished",
        })
    }
}

/// One player's attempt to act.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub player: PlayerId,
    pub action: ActionKind,

    /// The targeted card, for card-directed actions such as `flip`.
    #[serde(default)]
    pub card: Option<CardId>,

    /// The targeted container, for container-directed actions such as
    /// `shuffle`. Ignored for card targets — the card's holding container
    /// governs.
    #[serde(default)]
    pub container: Option<ContainerId>,

    /// The destination container of a `move`.
    #[serde(default)]
    pub to_container: Option<ContainerId>,
}

impl ActionRequest {
    /// A `flip` targeting one card.
    #[must_use]
    pub fn flip(player: impl Into<PlayerId>, card: impl Into<CardId>) -> Self {
        Self {
            player: player.into(),
            action: ActionKind::Flip,
            card: Some(card.into()),
            container: None,
            to_container: None,
        }
    }

    /// A `move` of one card to a destination container.
    #[must_use]
    pub fn move_card(
        player: impl Into<PlayerId>,
        card: impl Into<CardId>,
        to: impl Into<ContainerId>,
    ) -> Self {
        Self {
            player: player.into(),
            action: ActionKind::Move,
            card: Some(card.into()),
            container: None,
            to_container: Some(to.into()),
        }
    }

    /// A `shuffle` of one container.
    #[must_use]
    pub fn shuffle(player: impl Into<PlayerId>, container: impl Into<ContainerId>) -> Self {
        Self {
            player: player.into(),
            action: ActionKind::Shuffle,
            card: None,
            container: Some(container.into()),
            to_container: None,
        }
    }
}

/// Why a submission was turned away without interpreting anything.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// The engine has not been started.
    NotStarted,
    /// The game is already finished.
    GameOver,
    /// No action configuration governs this submission.
    NoSuchAction { action: ActionKind },
    /// The permission rule denied the actor.
    PermissionDenied { source: RuleSource },
}

/// What a completed action did.
#[derive(Debug)]
pub struct ActionReport {
    /// Every effect node stepped into, across the `before`, main, and
    /// `after` traversals, in execution order.
    pub traversed: Vec<crate::core::EffectId>,
    /// The phase the engine was left in.
    pub phase: GamePhase,
}

/// The result of submitting an action.
#[derive(Debug)]
pub enum ActionOutcome {
    Completed(ActionReport),
    Rejected(Rejection),
}

impl ActionOutcome {
    #[must_use]
    pub fn is_completed(&self) -> bool {
        matches!(self, ActionOutcome::Completed(_))
    }
}

/// One player's place in the final ranking.
#[derive(Clone, Debug, PartialEq)]
pub struct Standing {
    pub player: PlayerId,
    /// The ranking key value, `Null` for players absent from the result
    /// function's output.
    pub value: Value,
}

/// One running game.
#[derive(Debug)]
pub struct Engine {
    config: GameConfig,
    registry: FunctionRegistry,
    state: StateStore,
    phase: GamePhase,
    ranking: Option<Vec<Standing>>,
}

impl Engine {
    /// Build an engine from a validated configuration and a registry that
    /// covers every function the configuration references.
    pub fn new(config: GameConfig, registry: FunctionRegistry) -> Result<Self, ConfigError> {
        config.validate()?;
        for function in config.referenced_functions() {
            if !registry.contains(function) {
                return Err(ConfigError::UnknownFunction(function.clone()));
            }
        }
        let state = StateStore::from_config(&config);
        Ok(Self {
            config,
            registry,
            state,
            phase: GamePhase::Uninitialized,
            ranking: None,
        })
    }

    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    #[must_use]
    pub fn state(&self) -> &StateStore {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The final ranking, present once the game is finished and a result
    /// order is configured.
    #[must_use]
    pub fn ranking(&self) -> Option<&[Standing]> {
        self.ranking.as_deref()
    }

    /// Start (or restart) the game: rebuild the store from the
    /// configuration and run the initialization graph.
    ///
    /// Each unreferenced initial effect is a traversal entry, run in
    /// declaration order.
    pub fn start(&mut self) -> Result<(), EngineError> {
        self.set_phase(GamePhase::Initializing);
        self.state = StateStore::from_config(&self.config);
        self.ranking = None;

        let graph = EffectGraph::new(&self.config.initial_effects);
        for entry in self.config.initial_entries() {
            graph.run(entry, &mut self.state, &mut self.registry)?;
        }

        self.set_phase(GamePhase::AwaitingAction);
        Ok(())
    }

    /// Submit one action.
    ///
    /// Returns `Ok(Rejected(..))` for submissions turned away before any
    /// effect runs; errors only for faults inside a traversal or a
    /// lifecycle function.
    pub fn submit(&mut self, request: ActionRequest) -> Result<ActionOutcome, EngineError> {
        match self.phase {
            GamePhase::AwaitingAction => {}
            GamePhase::Finished => return Ok(ActionOutcome::Rejected(Rejection::GameOver)),
            _ => return Ok(ActionOutcome::Rejected(Rejection::NotStarted)),
        }

        let roles: Vec<RoleId> = self.state.player(&request.player)?.roles.to_vec();

        // Resolve the target before anything else: a card target pins the
        // governing container to wherever the card currently sits.
        let mut snapshot = FieldSnapshot::new();
        let mut card_type = None;
        let mut governing_container = request.container.clone();

        if let Some(card_id) = &request.card {
            let (holder, card) =
                self.state
                    .find_card(card_id)
                    .ok_or_else(|| EngineError::NotFound {
                        kind: EntityKind::Card,
                        id: card_id.to_string(),
                    })?;
            snapshot.insert("cardId".into(), card.id.to_string());
            snapshot.insert("cardTypeId".into(), card.card_type.to_string());
            snapshot.insert("containerId".into(), holder.to_string());
            snapshot.insert("isFaceUp".into(), card.face_up.to_string());
            snapshot.insert("isFaceDown".into(), (!card.face_up).to_string());
            card_type = Some(card.card_type.clone());
            governing_container = Some(holder.clone());
        } else if let Some(container) = &request.container {
            self.state.container(container)?;
            snapshot.insert("containerId".into(), container.to_string());
        }
        if let Some(to) = &request.to_container {
            self.state.container(to)?;
            snapshot.insert("targetContainerId".into(), to.to_string());
        }

        let Some(action) = self.config.action_config(
            request.action,
            card_type.as_ref(),
            governing_container.as_ref(),
        ) else {
            return Ok(ActionOutcome::Rejected(Rejection::NoSuchAction {
                action: request.action,
            }));
        };

        match permissions::resolve(&action.permissions, &roles, &snapshot) {
            Decision::Allowed => {}
            Decision::Denied { source } => {
                tracing::info!(player = %request.player, action = %request.action, "action denied");
                return Ok(ActionOutcome::Rejected(Rejection::PermissionDenied { source }));
            }
        }

        // The request is visible to mappers as `vars.action.*` for the
        // duration of the traversals.
        self.state.set_var("action", Self::action_value(&request));
        tracing::info!(player = %request.player, action = %request.action, "action accepted");

        let traversed = Self::run_action(action, &mut self.state, &mut self.registry);
        self.state.remove_var("action");
        let traversed = traversed?;

        self.set_phase(GamePhase::Evaluating);
        if self.evaluate_end_conditions()? {
            if let Some(order) = &self.config.result_order {
                self.ranking = Some(Self::compute_ranking(
                    order,
                    &mut self.state,
                    &mut self.registry,
                )?);
            }
            self.set_phase(GamePhase::Finished);
        } else {
            self.set_phase(GamePhase::AwaitingAction);
        }

        Ok(ActionOutcome::Completed(ActionReport {
            traversed,
            phase: self.phase,
        }))
    }

    /// Run an action's `before` hook, main graph, and `after` hook as
    /// standalone traversals over the same node set.
    fn run_action(
        action: &ActionConfig,
        state: &mut StateStore,
        registry: &mut FunctionRegistry,
    ) -> Result<Vec<crate::core::EffectId>, EngineError> {
        let graph = EffectGraph::new(&action.effects);
        let mut traversed = Vec::new();

        let main = action.effects.first().map(Effect::id);
        let entries = action
            .before
            .iter()
            .chain(main)
            .chain(action.after.iter());
        for entry in entries {
            let traversal = graph.run(entry, state, registry)?;
            traversed.extend(traversal.visited);
        }
        Ok(traversed)
    }

    fn action_value(request: &ActionRequest) -> Value {
        let mut fields = Map::new();
        fields.insert("playerId".into(), json!(request.player));
        fields.insert("action".into(), json!(request.action.to_string()));
        if let Some(card) = &request.card {
            fields.insert("cardId".into(), json!(card));
        }
        if let Some(container) = &request.container {
            fields.insert("containerId".into(), json!(container));
        }
        if let Some(to) = &request.to_container {
            fields.insert("toContainerId".into(), json!(to));
        }
        Value::Object(fields)
    }

    /// Whether any configured end condition is satisfied.
    fn evaluate_end_conditions(&mut self) -> Result<bool, EngineError> {
        for condition in &self.config.end_conditions {
            let output = self.registry.invoke(
                &mut self.state,
                &condition.function,
                condition.additional_params.clone(),
            )?;
            if Self::condition_satisfied(condition, &output) {
                tracing::info!(function = %condition.function, "end condition satisfied");
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// An end condition holds when every occurrence of its reference key
    /// in the output equals the configured value: each element when the
    /// output is an array, the whole output otherwise.
    fn condition_satisfied(condition: &EndCondition, output: &Value) -> bool {
        let holds = |value: &Value| lookup_path(value, &condition.reference_key) == Some(&condition.equals);
        match output {
            Value::Array(items) => items.iter().all(holds),
            other => holds(other),
        }
    }

    /// Invoke the result-order function and rank the turn order's players
    /// by its output.
    ///
    /// The sort is stable with the turn order as the incoming order, so
    /// ties keep turn-order precedence; players absent from the output
    /// rank last with a `Null` key.
    fn compute_ranking(
        order: &ResultOrder,
        state: &mut StateStore,
        registry: &mut FunctionRegistry,
    ) -> Result<Vec<Standing>, EngineError> {
        let output = registry.invoke(state, &order.function, order.additional_params.clone())?;
        let Value::Array(entries) = &output else {
            return Err(EngineError::SchemaViolation {
                function: order.function.clone(),
                direction: crate::core::ShapeDirection::Response,
                message: "result order output must be an array of standings".into(),
            });
        };

        let mut standings: Vec<Standing> = state
            .turn_order()
            .iter()
            .map(|player| {
                let value = entries
                    .iter()
                    .find(|entry| {
                        entry.get("playerId").and_then(Value::as_str) == Some(player.as_str())
                    })
                    .and_then(|entry| lookup_path(entry, &order.reference_key))
                    .cloned()
                    .unwrap_or(Value::Null);
                Standing {
                    player: player.clone(),
                    value,
                }
            })
            .collect();

        standings.sort_by(|a, b| Self::compare_standings(&a.value, &b.value, order.by));
        Ok(standings)
    }

    fn compare_standings(a: &Value, b: &Value, by: SortOrder) -> Ordering {
        match (a.is_null(), b.is_null()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
        let ordering = compare_values(a, b);
        match by {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            tracing::info!(from = %self.phase, to = %phase, "phase transition");
            self.phase = phase;
        }
    }
}

/// Total order over scalar ranking keys; mixed or composite values
/// compare equal and fall back to the stable incoming order.
fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registry_with(names: &[&str]) -> FunctionRegistry {
        let mut registry = FunctionRegistry::new();
        for name in names {
            registry
                .register_fn(*name, |_, _| Ok(Value::Null))
                .unwrap();
        }
        registry
    }

    fn config(value: serde_json::Value) -> GameConfig {
        serde_json::from_value(value).unwrap()
    }

    fn minimal_config() -> GameConfig {
        config(json!({
            "cardPool": [{"id": "cardTypeA"}],
            "containers": [
                {"id": "mainDeck", "kind": "deck", "initialCards": {"cardTypeA": 2}},
                {"id": "trash", "kind": "trash"}
            ],
            "players": [
                {"id": "player1", "initialRoles": ["currentPlayer"]},
                {"id": "player2"}
            ],
            "turnOrder": ["player1", "player2"],
            "actions": {
                "flip": {
                    "permissions": {"allowed": ["currentPlayer"]},
                    "effects": [{"id": "flipEffect", "function": "flipCard"}]
                }
            }
        }))
    }

    #[test]
    fn test_new_rejects_unregistered_function() {
        let err = Engine::new(minimal_config(), FunctionRegistry::new()).unwrap_err();
        let ConfigError::UnknownFunction(function) = err else {
            panic!("expected unknown function, got {err}");
        };
        assert_eq!(function.as_str(), "flipCard");
    }

    #[test]
    fn test_start_runs_initialization_graph() {
        let mut cfg = minimal_config();
        let with_init = config(json!({
            "initialEffects": [
                {"id": "setupEffect", "function": "setup"}
            ]
        }));
        cfg.initial_effects = with_init.initial_effects;

        let mut registry = registry_with(&["flipCard"]);
        registry
            .register_fn("setup", |state, _| {
                state.set_var("initialized", json!(true));
                Ok(Value::Null)
            })
            .unwrap();

        let mut engine = Engine::new(cfg, registry).unwrap();
        assert_eq!(engine.phase(), GamePhase::Uninitialized);

        engine.start().unwrap();
        assert_eq!(engine.phase(), GamePhase::AwaitingAction);
        assert_eq!(engine.state().var("initialized"), Some(&json!(true)));
    }

    #[test]
    fn test_submit_before_start_is_rejected() {
        let mut engine = Engine::new(minimal_config(), registry_with(&["flipCard"])).unwrap();
        let outcome = engine
            .submit(ActionRequest::flip("player1", "cardTypeA#1"))
            .unwrap();
        let ActionOutcome::Rejected(rejection) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(rejection, Rejection::NotStarted);
    }

    #[test]
    fn test_unconfigured_action_is_rejected() {
        let mut engine = Engine::new(minimal_config(), registry_with(&["flipCard"])).unwrap();
        engine.start().unwrap();

        let outcome = engine
            .submit(ActionRequest::shuffle("player1", "mainDeck"))
            .unwrap();
        let ActionOutcome::Rejected(rejection) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(rejection, Rejection::NoSuchAction { action: ActionKind::Shuffle });
    }

    #[test]
    fn test_denied_action_reports_rule_and_runs_nothing() {
        let mut registry = registry_with(&[]);
        registry
            .register_fn("flipCard", |_, _| panic!("denied action must not reach effects"))
            .unwrap();

        let mut engine = Engine::new(minimal_config(), registry).unwrap();
        engine.start().unwrap();

        // player2 holds no currentPlayer role.
        let outcome = engine
            .submit(ActionRequest::flip("player2", "cardTypeA#1"))
            .unwrap();
        let ActionOutcome::Rejected(Rejection::PermissionDenied { source }) = outcome else {
            panic!("expected permission denial");
        };
        assert_eq!(source, RuleSource::Base);
        assert_eq!(engine.phase(), GamePhase::AwaitingAction);
    }

    #[test]
    fn test_completed_action_runs_hooks_in_order() {
        let cfg = config(json!({
            "cardPool": [{"id": "cardTypeA"}],
            "containers": [
                {"id": "mainDeck", "kind": "deck", "initialCards": {"cardTypeA": 1}}
            ],
            "players": [{"id": "player1", "initialRoles": ["currentPlayer"]}],
            "turnOrder": ["player1"],
            "actions": {
                "flip": {
                    "permissions": {"allowed": ["currentPlayer"]},
                    "effects": [
                        {"id": "mainEffect", "function": "trace"},
                        {"id": "beforeEffect", "function": "trace"},
                        {"id": "afterEffect", "function": "trace"}
                    ],
                    "before": "beforeEffect",
                    "after": "afterEffect"
                }
            }
        }));

        let mut registry = FunctionRegistry::new();
        registry.register_fn("trace", |_, _| Ok(Value::Null)).unwrap();

        let mut engine = Engine::new(cfg, registry).unwrap();
        engine.start().unwrap();

        let outcome = engine
            .submit(ActionRequest::flip("player1", "cardTypeA#1"))
            .unwrap();
        let ActionOutcome::Completed(report) = outcome else {
            panic!("expected completion");
        };
        let traversed: Vec<_> = report.traversed.iter().map(|e| e.as_str()).collect();
        assert_eq!(traversed, vec!["beforeEffect", "mainEffect", "afterEffect"]);
        assert_eq!(report.phase, GamePhase::AwaitingAction);
    }

    #[test]
    fn test_action_request_is_visible_to_mappers() {
        let cfg = config(json!({
            "cardPool": [{"id": "cardTypeA"}],
            "containers": [
                {"id": "mainDeck", "kind": "deck", "initialCards": {"cardTypeA": 1}}
            ],
            "players": [{"id": "player1", "initialRoles": ["currentPlayer"]}],
            "turnOrder": ["player1"],
            "actions": {
                "flip": {
                    "permissions": {"allowed": ["currentPlayer"]},
                    "effects": [
                        {
                            "id": "flipEffect",
                            "function": "flipCard",
                            "requestMapper": {
                                "cardId": {"source": "state", "path": "vars.action.cardId"}
                            }
                        }
                    ]
                }
            }
        }));

        let mut registry = FunctionRegistry::new();
        registry
            .register_fn("flipCard", |state, request| {
                state.set_var("seenCardId", request["cardId"].clone());
                Ok(Value::Null)
            })
            .unwrap();

        let mut engine = Engine::new(cfg, registry).unwrap();
        engine.start().unwrap();
        engine
            .submit(ActionRequest::flip("player1", "cardTypeA#1"))
            .unwrap();

        assert_eq!(engine.state().var("seenCardId"), Some(&json!("cardTypeA#1")));
        // The request scratch area is gone once the action completes.
        assert_eq!(engine.state().var("action"), None);
    }

    #[test]
    fn test_end_condition_finishes_game_and_ranks() {
        let cfg = config(json!({
            "cardPool": [{"id": "cardTypeA"}],
            "containers": [
                {"id": "mainDeck", "kind": "deck", "initialCards": {"cardTypeA": 1}}
            ],
            "players": [
                {"id": "player1", "initialRoles": ["currentPlayer"]},
                {"id": "player2"},
                {"id": "player3"}
            ],
            "turnOrder": ["player1", "player2", "player3"],
            "actions": {
                "flip": {
                    "permissions": {"allowed": ["currentPlayer"]},
                    "effects": [{"id": "flipEffect", "function": "flipCard"}]
                }
            },
            "endConditions": [
                {"function": "remainingCards", "referenceKey": "count"}
            ],
            "resultOrder": {
                "function": "scores",
                "referenceKey": "score",
                "by": "desc"
            }
        }));

        let mut registry = FunctionRegistry::new();
        registry.register_fn("flipCard", |_, _| Ok(Value::Null)).unwrap();
        registry
            .register_fn("remainingCards", |_, _| Ok(json!([{"count": 0}, {"count": 0}])))
            .unwrap();
        // player3 is absent from the scores; player2 ties nobody.
        registry
            .register_fn("scores", |_, _| {
                Ok(json!([
                    {"playerId": "player2", "score": 4},
                    {"playerId": "player1", "score": 2}
                ]))
            })
            .unwrap();

        let mut engine = Engine::new(cfg, registry).unwrap();
        engine.start().unwrap();

        let outcome = engine
            .submit(ActionRequest::flip("player1", "cardTypeA#1"))
            .unwrap();
        assert!(outcome.is_completed());
        assert_eq!(engine.phase(), GamePhase::Finished);

        let ranking = engine.ranking().unwrap();
        let order: Vec<_> = ranking.iter().map(|s| s.player.as_str()).collect();
        assert_eq!(order, vec!["player2", "player1", "player3"]);
        assert_eq!(ranking[2].value, Value::Null);

        // Nothing further is accepted.
        let outcome = engine
            .submit(ActionRequest::flip("player1", "cardTypeA#1"))
            .unwrap();
        let ActionOutcome::Rejected(rejection) = outcome else {
            panic!("expected rejection");
        };
        assert_eq!(rejection, Rejection::GameOver);
    }

    #[test]
    fn test_unsatisfied_end_condition_keeps_playing() {
        let condition: EndCondition = serde_json::from_value(json!({
            "function": "remainingCards",
            "referenceKey": "count"
        }))
        .unwrap();

        assert!(Engine::condition_satisfied(&condition, &json!([{"count": 0}])));
        assert!(Engine::condition_satisfied(&condition, &json!({"count": 0})));
        assert!(!Engine::condition_satisfied(&condition, &json!([{"count": 0}, {"count": 3}])));
        assert!(!Engine::condition_satisfied(&condition, &json!({"count": 1})));
        assert!(!Engine::condition_satisfied(&condition, &json!({"other": 0})));
    }

    #[test]
    fn test_ranking_ties_keep_turn_order() {
        assert_eq!(
            Engine::compare_standings(&json!(3), &json!(3), SortOrder::Desc),
            Ordering::Equal
        );
        assert_eq!(
            Engine::compare_standings(&json!(1), &json!(3), SortOrder::Asc),
            Ordering::Less
        );
        assert_eq!(
            Engine::compare_standings(&json!(1), &json!(3), SortOrder::Desc),
            Ordering::Greater
        );
        // Null ranks last in either direction.
        assert_eq!(
            Engine::compare_standings(&Value::Null, &json!(0), SortOrder::Desc),
            Ordering::Greater
        );
    }
}
