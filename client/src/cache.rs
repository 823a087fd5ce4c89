use log::debug;
use tichu_api::{GameState, PlayerId, WireCard};

/// The last snapshot pushed by the server.
///
/// Every push replaces the cached state wholesale; nothing is merged and
/// stale or repeated snapshots are not detected.
#[derive(Clone, Debug, Default)]
pub struct StateCache {
    state: Option<GameState>,
}

impl StateCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn replace(&mut self, state: GameState) {
        debug!(
            "replace: played={}, hands={}",
            state.played_cards.len(),
            state.player_hands.len()
        );
        self.state = Some(state);
    }

    /// `false` until the first snapshot arrives; an unknown state is never
    /// treated as an empty one.
    pub fn is_known(&self) -> bool {
        self.state.is_some()
    }

    #[cfg(test)]
    pub fn state(&self) -> Option<&GameState> {
        self.state.as_ref()
    }

    /// Play area as of the last snapshot, i.e. what was already on the table
    /// when the current turn started.
    pub fn previous_played_cards(&self) -> Option<&[WireCard]> {
        self.state.as_ref().map(|state| state.played_cards.as_slice())
    }

    pub fn message(&self) -> Option<&str> {
        self.state.as_ref().map(|state| state.message.as_str())
    }

    pub fn hand(&self, player: &PlayerId) -> &[WireCard] {
        match &self.state {
            Some(state) => state.hand(player),
            None => &[],
        }
    }
}
