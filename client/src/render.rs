use log::{info, warn};
use serde::Serialize;
use tichu_api::{Card, PlayerId};

/// What the view needs to redraw the table; never the cache itself.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Snapshot {
    pub message: String,
    pub player_id: Option<PlayerId>,
    pub played_cards: Vec<Card>,
    pub my_hand: Vec<Card>,
}

pub trait Renderer {
    fn render(&mut self, snapshot: &Snapshot);

    /// Surfaces a message to the player, e.g. a rejected card or a full game.
    fn report(&mut self, message: &str);
}

/// Writes every snapshot to the log.
pub struct LogRenderer {
    pub verbose: bool,
}

impl Renderer for LogRenderer {
    fn render(&mut self, snapshot: &Snapshot) {
        if self.verbose {
            match serde_json::to_string(snapshot) {
                Ok(json) => info!("render: {}", json),
                Err(e) => warn!("render: unable to encode snapshot: {}", e),
            }
        } else {
            info!(
                "render: message={:?}, played={:?}, hand={:?}",
                snapshot.message, snapshot.played_cards, snapshot.my_hand
            );
        }
    }

    fn report(&mut self, message: &str) {
        warn!("report: {}", message);
    }
}
