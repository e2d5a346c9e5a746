//! The Effect Graph Interpreter.
//!
//! A traversal starts at an entry node and follows one edge at a time:
//! function nodes resolve a request, invoke their registered function
//! against the live store, and reshape the response; switch nodes branch
//! on a value extracted from the previous node's output. There is no
//! rollback — every completed function invocation's mutations persist
//! even if a later node fails.
//!
//! Failures inside a node (mapping, invocation, shape checks, switch key
//! resolution) are absorbed by that node's `error` edge when one is
//! declared; otherwise they halt the traversal and propagate, wrapped
//! with the node they surfaced at.
//!
//! Graphs are not required to be acyclic — a switch may legitimately jump
//! backwards — but a traversal whose transition count exceeds the node
//! count is treated as a runaway cycle and aborted.

use rustc_hash::FxHashMap;
use serde_json::Value;

use crate::config::{Effect, FunctionEffect, SwitchEffect};
use crate::core::{EffectId, EngineError, EntityKind, MappingSource};
use crate::mapper::MapContext;
use crate::registry::FunctionRegistry;
use crate::state::StateStore;
use crate::values::{case_key, lookup_path};

/// An executable view over one graph's effect nodes.
///
/// Borrows the configured nodes; build one per traversal entry or reuse
/// it across entries of the same graph.
pub struct EffectGraph<'a> {
    nodes: FxHashMap<&'a EffectId, &'a Effect>,
}

/// What a completed traversal did.
#[derive(Debug)]
pub struct Traversal {
    /// Every node stepped into, in execution order.
    pub visited: Vec<EffectId>,
    /// The final node's output, if any node produced one.
    pub output: Option<Value>,
}

impl<'a> EffectGraph<'a> {
    #[must_use]
    pub fn new(effects: &'a [Effect]) -> Self {
        let nodes = effects.iter().map(|e| (e.id(), e)).collect();
        Self { nodes }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Run one traversal from `entry`.
    pub fn run(
        &self,
        entry: &EffectId,
        state: &mut StateStore,
        registry: &mut FunctionRegistry,
    ) -> Result<Traversal, EngineError> {
        let mut visited = Vec::new();
        let mut previous: Option<Value> = None;
        let mut current = Some(entry.clone());

        while let Some(id) = current {
            if visited.len() > self.nodes.len() {
                return Err(EngineError::CyclicEffectGraph { effect: id });
            }

            let node = *self
                .nodes
                .get(&id)
                .ok_or_else(|| EngineError::NotFound {
                    kind: EntityKind::Effect,
                    id: id.to_string(),
                })?;
            visited.push(id.clone());
            tracing::debug!(effect = %id, "stepping into effect");

            let step = match node {
                Effect::Function(f) => self.run_function(f, state, registry, previous.as_ref()),
                Effect::Switch(s) => self.run_switch(s, previous.as_ref()),
            };

            match step {
                Ok(Step { next, output }) => {
                    if let Some(output) = output {
                        previous = Some(output);
                    }
                    current = next;
                }
                Err(err) => match node.error_edge() {
                    Some(target) => {
                        tracing::warn!(effect = %id, error = %err, "effect failed, following error edge");
                        current = Some(target.clone());
                    }
                    None => return Err(err.at_effect(id)),
                },
            }
        }

        Ok(Traversal {
            visited,
            output: previous,
        })
    }

    fn run_function(
        &self,
        node: &FunctionEffect,
        state: &mut StateStore,
        registry: &mut FunctionRegistry,
        previous: Option<&Value>,
    ) -> Result<Step, EngineError> {
        let request = match &node.request_mapper {
            Some(mapper) => mapper.resolve(MapContext::new(state, previous))?,
            None => Value::Null,
        };

        let response = registry.invoke(state, &node.function, request)?;

        let output = match &node.response_mapper {
            Some(mapper) => mapper.resolve(MapContext::new(state, Some(&response)))?,
            None => response,
        };

        Ok(Step {
            next: node.next.clone(),
            output: Some(output),
        })
    }

    fn run_switch(&self, node: &SwitchEffect, previous: Option<&Value>) -> Result<Step, EngineError> {
        let key = previous
            .and_then(|prev| lookup_path(prev, &node.reference_key))
            .and_then(case_key)
            .ok_or_else(|| EngineError::UnresolvableMapping {
                source: MappingSource::PreviousOutput,
                path: node.reference_key.clone(),
            })?;

        // No matching case and no default is a successful terminal no-op.
        let next = node.cases.get(&key).or(node.default.as_ref()).cloned();
        tracing::debug!(effect = %node.id, case = %key, "switch resolved");

        // Switches pass the previous output through untouched.
        Ok(Step { next, output: None })
    }
}

struct Step {
    next: Option<EffectId>,
    /// `None` leaves the running previous-output untouched.
    output: Option<Value>,
}
