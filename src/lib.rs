//! # rulecard
//!
//! A declarative rule engine for turn-based card games.
//!
//! ## Design Principles
//!
//! 1. **Game-Agnostic**: No hardcoded card types, containers, or win
//!    conditions. Games describe themselves in a [`config::GameConfig`]
//!    document.
//!
//! 2. **Configuration Over Convention**: Behavior lives in data — effect
//!    graphs, parameter mappers, permission rules — interpreted at
//!    runtime, not compiled into the engine.
//!
//! 3. **Opaque Functions**: The engine never implements game logic
//!    itself. Hosts register named callables; the configuration wires
//!    them together.
//!
//! ## Modules
//!
//! - `core`: Branded identifiers, error taxonomy, deterministic RNG
//! - `values`: Dotted-path access over JSON values
//! - `config`: The immutable configuration aggregate and its validation
//! - `state`: The live State Store (containers, cards, players, vars)
//! - `registry`: Host-supplied function registration and invocation
//! - `mapper`: Declarative resolution of function arguments
//! - `permissions`: Role- and field-based permission resolution
//! - `graph`: The effect graph interpreter
//! - `engine`: The lifecycle controller — start, actions, end of game

pub mod config;
pub mod core;
pub mod engine;
pub mod graph;
pub mod mapper;
pub mod permissions;
pub mod registry;
pub mod state;
pub mod values;

pub use config::{ActionKind, ConfigError, GameConfig};
pub use core::{EngineError, GameRng};
pub use engine::{ActionOutcome, ActionRequest, Engine, GamePhase, Rejection};
pub use registry::FunctionRegistry;
pub use state::StateStore;
