//! Containers and the cards inside them.

use serde::Serialize;

use crate::config::ContainerKind;
use crate::core::{CardId, CardTypeId, ContainerId};

/// A live card instance.
///
/// Cards are created once, when containers are populated from the
/// configuration's `initialCards` counts, and are only ever moved between
/// containers afterwards — never destroyed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Instance identifier, unique across the whole game.
    pub id: CardId,

    /// The card type this instance was stamped from.
    pub card_type: CardTypeId,

    /// Face orientation. Cards start face-down.
    pub face_up: bool,
}

impl Card {
    /// Create a face-down card instance.
    #[must_use]
    pub fn new(id: CardId, card_type: CardTypeId) -> Self {
        Self {
            id,
            card_type,
            face_up: false,
        }
    }
}

/// A live container holding an ordered sequence of cards.
///
/// The optional `max_cards` capacity is exposed but not enforced here:
/// capacity enforcement belongs to the host functions that move cards,
/// which read [`Container::is_full`] / [`Container::remaining_capacity`].
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Container {
    pub id: ContainerId,
    pub kind: ContainerKind,
    pub max_cards: Option<usize>,
    pub cards: Vec<Card>,
}

impl Container {
    /// Create an empty container.
    #[must_use]
    pub fn new(id: ContainerId, kind: ContainerKind, max_cards: Option<usize>) -> Self {
        Self {
            id,
            kind,
            max_cards,
            cards: Vec::new(),
        }
    }

    /// Number of cards currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Whether the container holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Whether the container is at its configured capacity.
    ///
    /// Always `false` for unbounded containers.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.max_cards.is_some_and(|max| self.cards.len() >= max)
    }

    /// Slots left before the capacity is reached, `None` if unbounded.
    #[must_use]
    pub fn remaining_capacity(&self) -> Option<usize> {
        self.max_cards.map(|max| max.saturating_sub(self.cards.len()))
    }

    /// Find a card by identifier.
    #[must_use]
    pub fn card(&self, id: &CardId) -> Option<&Card> {
        self.cards.iter().find(|c| &c.id == id)
    }

    /// Find a card by identifier, mutably.
    pub fn card_mut(&mut self, id: &CardId) -> Option<&mut Card> {
        self.cards.iter_mut().find(|c| &c.id == id)
    }

    /// Remove and return a card by identifier.
    pub fn take_card(&mut self, id: &CardId) -> Option<Card> {
        let index = self.cards.iter().position(|c| &c.id == id)?;
        Some(self.cards.remove(index))
    }

    /// Remove and return all cards, leaving the container empty.
    pub fn take_all(&mut self) -> Vec<Card> {
        std::mem::take(&mut self.cards)
    }

    /// Append a card at the end of the sequence.
    pub fn push_card(&mut self, card: Card) {
        self.cards.push(card);
    }
}
