use crate::{Card, GameState, PlayerId};
use serde::{Deserialize, Serialize};

/// Events pushed by the server.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    AssignPlayerId { player_id: PlayerId },
    UpdateState(GameState),
    GameFull { message: String },
}

/// Events sent to the server.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    PlayCards { played_cards: Vec<Card> },
}
