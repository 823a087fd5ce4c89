use crate::{Card, MalformedCard, PlayerId, WireCard};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete snapshot of the table as pushed by the server.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub message: String,
    pub played_cards: Vec<WireCard>,
    pub player_hands: HashMap<PlayerId, Vec<WireCard>>,
}

impl GameState {
    /// Cards held by `player`; a player without an entry holds nothing.
    pub fn hand(&self, player: &PlayerId) -> &[WireCard] {
        self.player_hands
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

pub fn resolve_all(cards: &[WireCard]) -> Result<Vec<Card>, MalformedCard> {
    cards.iter().map(WireCard::resolve).collect()
}
