//! The Function Registry: host-supplied callables keyed by identifier.
//!
//! The configuration document only ever names functions; their bodies are
//! opaque callables the host registers out of band. A callable receives
//! the mutable [`StateStore`] and a resolved request value, and returns a
//! response value or its own boxed error (surfaced as
//! [`EngineError::FunctionExecution`]).
//!
//! Request/response shapes are optional host-supplied predicates, not a
//! grammar this crate interprets: when declared, they run on every
//! invocation and reject non-conforming values as
//! [`EngineError::SchemaViolation`].

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::core::{EngineError, EntityKind, FunctionId, HostError, ShapeDirection};
use crate::state::StateStore;

/// A host-supplied function body.
///
/// Invocation is synchronous and side-effecting: callables may freely
/// mutate the store.
pub type Callable = Box<dyn FnMut(&mut StateStore, Value) -> Result<Value, HostError>>;

/// A host-supplied structural check for one side of an invocation.
///
/// Returns a human-readable description of the mismatch on failure.
pub type ShapeCheck = Box<dyn Fn(&Value) -> Result<(), String>>;

struct GameFunction {
    request_shape: Option<ShapeCheck>,
    response_shape: Option<ShapeCheck>,
    callable: Callable,
}

/// Registry of game functions.
#[derive(Default)]
pub struct FunctionRegistry {
    functions: FxHashMap<FunctionId, GameFunction>,
}

impl FunctionRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callable with optional request/response shapes.
    pub fn register(
        &mut self,
        id: FunctionId,
        callable: Callable,
        request_shape: Option<ShapeCheck>,
        response_shape: Option<ShapeCheck>,
    ) -> Result<(), EngineError> {
        if self.functions.contains_key(&id) {
            return Err(EngineError::DuplicateFunction(id));
        }
        self.functions.insert(
            id,
            GameFunction {
                request_shape,
                response_shape,
                callable,
            },
        );
        Ok(())
    }

    /// Register a shapeless callable from a plain closure.
    pub fn register_fn<F>(&mut self, id: impl Into<FunctionId>, f: F) -> Result<(), EngineError>
    where
        F: FnMut(&mut StateStore, Value) -> Result<Value, HostError> + 'static,
    {
        self.register(id.into(), Box::new(f), None, None)
    }

    /// Whether a function is registered.
    #[must_use]
    pub fn contains(&self, id: &FunctionId) -> bool {
        self.functions.contains_key(id)
    }

    /// Invoke a function with a resolved request value.
    ///
    /// Checks the declared request shape, runs the callable against the
    /// store, then checks the declared response shape.
    pub fn invoke(
        &mut self,
        state: &mut StateStore,
        id: &FunctionId,
        request: Value,
    ) -> Result<Value, EngineError> {
        let function = self.functions.get_mut(id).ok_or_else(|| EngineError::NotFound {
            kind: EntityKind::Function,
            id: id.to_string(),
        })?;

        if let Some(shape) = &function.request_shape {
            shape(&request).map_err(|message| EngineError::SchemaViolation {
                function: id.clone(),
                direction: ShapeDirection::Request,
                message,
            })?;
        }

        let response =
            (function.callable)(state, request).map_err(|source| EngineError::FunctionExecution {
                function: id.clone(),
                source,
            })?;

        if let Some(shape) = &function.response_shape {
            shape(&response).map_err(|message| EngineError::SchemaViolation {
                function: id.clone(),
                direction: ShapeDirection::Response,
                message,
            })?;
        }

        Ok(response)
    }
}

impl std::fmt::Debug for FunctionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut ids: Vec<_> = self.functions.keys().collect();
        ids.sort_unstable();
        f.debug_struct("FunctionRegistry").field("functions", &ids).finish()
    }
}
