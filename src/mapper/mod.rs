//! The Parameter Mapper: declarative resolution of function arguments.
//!
//! A mapper tree mirrors the shape of the value it produces. Leaves
//! declare where their value comes from — the State Store, the previous
//! effect's output, or a literal — and object/array nodes recurse
//! structurally. Resolution is purely functional: it never mutates the
//! store, and it fails with `UnresolvableMapping` the moment a referenced
//! path is absent from its source.
//!
//! In a configuration document a leaf is an object tagged by `source`:
//!
//! ```json
//! { "source": "state", "path": "containers.mainDeck.cards" }
//! { "source": "previousOutput", "path": "matchResult.fromContainerIds" }
//! { "source": "literal", "value": "mainDeck" }
//! ```
//!
//! and any JSON object without a `source` tag recurses as an object
//! mapper, any JSON array as an array mapper.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::{EngineError, MappingSource};
use crate::state::StateStore;
use crate::values::lookup_path;

/// A leaf node: one concrete value from one source.
#[derive(Clone, Debug, Deserialize)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum MapperLeaf {
    /// A dotted path into the State Store projection
    /// (see [`StateStore::path_value`]).
    State { path: String },
    /// A dotted path into the immediately preceding effect's output.
    PreviousOutput { path: String },
    /// A fixed value, produced verbatim regardless of any state.
    Literal { value: Value },
}

/// A mapper tree.
///
/// Leaves must be tried before objects during deserialization: a leaf is
/// itself a JSON object, distinguished only by its `source` tag.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
pub enum Mapper {
    Leaf(MapperLeaf),
    Object(BTreeMap<String, Mapper>),
    Array(Vec<Mapper>),
}

/// Everything a resolution may read from.
#[derive(Clone, Copy)]
pub struct MapContext<'a> {
    pub state: &'a StateStore,
    /// Output of the immediately preceding effect, if any.
    pub previous: Option<&'a Value>,
}

impl<'a> MapContext<'a> {
    #[must_use]
    pub fn new(state: &'a StateStore, previous: Option<&'a Value>) -> Self {
        Self { state, previous }
    }
}

impl Mapper {
    /// Shorthand for a literal leaf.
    #[must_use]
    pub fn literal(value: Value) -> Self {
        Mapper::Leaf(MapperLeaf::Literal { value })
    }

    /// Shorthand for a state-path leaf.
    #[must_use]
    pub fn state(path: impl Into<String>) -> Self {
        Mapper::Leaf(MapperLeaf::State { path: path.into() })
    }

    /// Shorthand for a previous-output-path leaf.
    #[must_use]
    pub fn previous_output(path: impl Into<String>) -> Self {
        Mapper::Leaf(MapperLeaf::PreviousOutput { path: path.into() })
    }

    /// Resolve this tree into a concrete value.
    pub fn resolve(&self, ctx: MapContext<'_>) -> Result<Value, EngineError> {
        match self {
            Mapper::Leaf(MapperLeaf::Literal { value }) => Ok(value.clone()),
            Mapper::Leaf(MapperLeaf::State { path }) => {
                ctx.state
                    .path_value(path)
                    .ok_or_else(|| EngineError::UnresolvableMapping {
                        source: MappingSource::State,
                        path: path.clone(),
                    })
            }
            Mapper::Leaf(MapperLeaf::PreviousOutput { path }) => ctx
                .previous
                .and_then(|prev| lookup_path(prev, path))
                .cloned()
                .ok_or_else(|| EngineError::UnresolvableMapping {
                    source: MappingSource::PreviousOutput,
                    path: path.clone(),
                }),
            Mapper::Object(fields) => {
                let mut map = Map::new();
                for (key, mapper) in fields {
                    map.insert(key.clone(), mapper.resolve(ctx)?);
                }
                Ok(Value::Object(map))
            }
            Mapper::Array(items) => {
                let mut values = Vec::with_capacity(items.len());
                for mapper in items {
                    values.push(mapper.resolve(ctx)?);
                }
                Ok(Value::Array(values))
            }
        }
    }
}
