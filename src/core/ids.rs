//! Branded string identifiers.
//!
//! Every identifier namespace in a game configuration (functions, effects,
//! card types, cards, containers, players, roles) gets its own nominal
//! wrapper around a `String`. The engine never interprets identifier text;
//! the distinct types exist so a `ContainerId` can never be passed where a
//! `FunctionId` is expected, at zero runtime cost.
//!
//! All identifier types serialize transparently as plain JSON strings, so a
//! configuration document just writes `"mainDeck"` where the schema expects
//! a container identifier.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from any string-like value.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

string_id! {
    /// Identifies a host-registered game function.
    FunctionId
}

string_id! {
    /// Identifies a node in an effect graph.
    EffectId
}

string_id! {
    /// Identifies a card type in the configured card pool.
    CardTypeId
}

string_id! {
    /// Identifies a single card instance.
    ///
    /// Instance identifiers are generated at game start when containers are
    /// populated from `initialCards` counts: `"<card-type>#<n>"`.
    CardId
}

string_id! {
    /// Identifies a container (deck, trash, hand, field slot).
    ContainerId
}

string_id! {
    /// Identifies a player.
    PlayerId
}

string_id! {
    /// Identifies a role a player may hold (e.g. `currentPlayer`).
    RoleId
}
