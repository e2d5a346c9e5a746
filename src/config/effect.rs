//! Effect graph node types.
//!
//! An effect graph is a set of identifier-addressed nodes; each node is
//! either a function call or a pure branch on the previous node's output.
//! The interpreter ([`crate::graph`]) walks these; this module only
//! defines their configured shape.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::core::{EffectId, FunctionId};
use crate::mapper::Mapper;

/// A node that invokes a registered function.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEffect {
    pub id: EffectId,

    /// The registered function to invoke.
    pub function: FunctionId,

    /// Resolves the function's request value. Absent for functions that
    /// take no input (they receive `null`).
    #[serde(default)]
    pub request_mapper: Option<Mapper>,

    /// Reshapes the raw function output before it becomes the next node's
    /// "previous output". Absent means the raw output passes through.
    #[serde(default)]
    pub response_mapper: Option<Mapper>,

    /// Followed after a successful invocation. Absent means this node is
    /// terminal on success.
    #[serde(default)]
    pub next: Option<EffectId>,

    /// Followed when the invocation (or its mapping) fails. Absent means
    /// the failure propagates and halts the traversal.
    #[serde(default)]
    pub error: Option<EffectId>,
}

/// A node that branches on a value extracted from the previous output.
///
/// The extracted value is stringified (see [`crate::values::case_key`])
/// and looked up in `cases`. No matching case and no `default` is a
/// successful, terminal no-op.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchEffect {
    pub id: EffectId,

    /// Dotted path into the previous effect's output.
    pub reference_key: String,

    /// String-encoded case values to target effects.
    #[serde(default)]
    pub cases: BTreeMap<String, EffectId>,

    #[serde(default)]
    pub default: Option<EffectId>,

    /// Followed when `reference_key` cannot be resolved.
    #[serde(default)]
    pub error: Option<EffectId>,
}

/// One node of an effect graph.
///
/// Deserialization is untagged: a function effect always carries a
/// `function` field, a switch effect always a `referenceKey` field.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Effect {
    Function(FunctionEffect),
    Switch(SwitchEffect),
}

impl Effect {
    /// The node's identifier.
    #[must_use]
    pub fn id(&self) -> &EffectId {
        match self {
            Effect::Function(e) => &e.id,
            Effect::Switch(e) => &e.id,
        }
    }

    /// The node's `error` edge, if declared.
    #[must_use]
    pub fn error_edge(&self) -> Option<&EffectId> {
        match self {
            Effect::Function(e) => e.error.as_ref(),
            Effect::Switch(e) => e.error.as_ref(),
        }
    }

    /// All outgoing edge targets, for load-time validation.
    pub fn edge_targets(&self) -> Vec<&EffectId> {
        match self {
            Effect::Function(e) => e.next.iter().chain(e.error.iter()).collect(),
            Effect::Switch(e) => e
                .cases
                .values()
                .chain(e.default.iter())
                .chain(e.error.iter())
                .collect(),
        }
    }
}
