//! Core building blocks: branded identifiers, the error taxonomy, and
//! deterministic RNG for host callables.

pub mod error;
pub mod ids;
pub mod rng;

pub use error::{EngineError, EntityKind, HostError, MappingSource, ShapeDirection};
pub use ids::{CardId, CardTypeId, ContainerId, EffectId, FunctionId, PlayerId, RoleId};
pub use rng::GameRng;
