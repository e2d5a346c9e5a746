//! Runtime error taxonomy.
//!
//! Load-time configuration problems live in [`crate::config::ConfigError`];
//! everything that can go wrong while the engine is running is an
//! [`EngineError`]. Permission denial is deliberately absent: a denied
//! action is a reported outcome, not a failure (see
//! [`crate::engine::ActionOutcome`]).

use thiserror::Error;

use super::ids::{EffectId, FunctionId};

/// The identifier namespace a failed lookup belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Container,
    Card,
    Function,
    Effect,
    Action,
    Player,
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntityKind::Container => "container",
            EntityKind::Card => "card",
            EntityKind::Function => "function",
            EntityKind::Effect => "effect",
            EntityKind::Action => "action",
            EntityKind::Player => "player",
        };
        f.write_str(name)
    }
}

/// Which side of a function invocation violated its declared shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeDirection {
    Request,
    Response,
}

impl std::fmt::Display for ShapeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ShapeDirection::Request => "request",
            ShapeDirection::Response => "response",
        })
    }
}

/// The source a mapper leaf failed to resolve against.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MappingSource {
    State,
    PreviousOutput,
}

impl std::fmt::Display for MappingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            MappingSource::State => "state",
            MappingSource::PreviousOutput => "previousOutput",
        })
    }
}

impl std::error::Error for MappingSource {}

/// Boxed error returned by a host callable.
pub type HostError = Box<dyn std::error::Error + Send + Sync>;

/// Errors produced while interpreting a game.
#[derive(Debug, Error)]
pub enum EngineError {
    /// A referenced entity does not exist.
    #[error("{kind} not found: {id}")]
    NotFound { kind: EntityKind, id: String },

    /// A function identifier was registered twice.
    #[error("function already registered: {0}")]
    DuplicateFunction(FunctionId),

    /// A function's input or output did not conform to its declared shape.
    #[error("{direction} shape violation for {function}: {message}")]
    SchemaViolation {
        function: FunctionId,
        direction: ShapeDirection,
        message: String,
    },

    /// A mapper path or switch reference key was absent from its source.
    #[error("unresolvable {source} path: {path}")]
    UnresolvableMapping { source: MappingSource, path: String },

    /// An effect graph traversal exceeded its transition bound.
    #[error("cyclic effect graph detected at {effect}")]
    CyclicEffectGraph { effect: EffectId },

    /// A host callable failed; the original cause is preserved.
    #[error("function {function} failed")]
    FunctionExecution {
        function: FunctionId,
        #[source]
        source: HostError,
    },

    /// Traversal context wrapper: the effect node at which a failure
    /// surfaced with no `error` edge to absorb it.
    #[error("effect {effect} failed")]
    Effect {
        effect: EffectId,
        #[source]
        source: Box<EngineError>,
    },
}

impl EngineError {
    /// Wrap an error with the effect node it surfaced at.
    pub(crate) fn at_effect(self, effect: EffectId) -> Self {
        EngineError::Effect {
            effect,
            source: Box::new(self),
        }
    }
}
