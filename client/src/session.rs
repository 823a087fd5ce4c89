use crate::{
    cache::StateCache,
    diff::compute_delta,
    error::ClientError,
    render::{Renderer, Snapshot},
    transport::Transport,
    zones::{Zone, Zones},
};
use log::{debug, error, info, warn};
use tichu_api::{
    resolve_all, Cards, ClientEvent, GameState, PlayerId, ServerEvent, WireCard,
};
use tokio::sync::mpsc::UnboundedReceiver;

/// Everything the session reacts to, in arrival order.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Server(ServerEvent),
    /// `card` is resolved when the drag is handled, so a malformed card is
    /// reported like any other local failure.
    Drag {
        card: WireCard,
        from: Zone,
        to: Zone,
    },
    Commit,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Commit {
    /// The play area held nothing new; nothing was sent.
    Empty,
    Sent(usize),
}

pub struct Session<T, R> {
    player_id: Option<PlayerId>,
    cache: StateCache,
    zones: Zones,
    transport: T,
    renderer: R,
    closed: bool,
}

impl<T: Transport, R: Renderer> Session<T, R> {
    pub fn new(transport: T, renderer: R) -> Self {
        Self {
            player_id: None,
            cache: StateCache::new(),
            zones: Zones::new(),
            transport,
            renderer,
            closed: false,
        }
    }

    pub fn player_id(&self) -> Option<&PlayerId> {
        self.player_id.as_ref()
    }

    pub fn cache(&self) -> &StateCache {
        &self.cache
    }

    #[cfg(test)]
    pub fn zones(&self) -> &Zones {
        &self.zones
    }

    #[cfg(test)]
    pub fn transport(&self) -> &T {
        &self.transport
    }

    #[cfg(test)]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    pub async fn run(mut self, mut rx: UnboundedReceiver<Input>) -> Result<Self, ClientError> {
        while let Some(input) = rx.recv().await {
            self.handle(input)?;
            if self.closed {
                break;
            }
        }
        Ok(self)
    }

    /// Handles one input to completion. Local failures are reported to the
    /// renderer and swallowed so later snapshots still render; only
    /// transport failures are returned.
    pub fn handle(&mut self, input: Input) -> Result<(), ClientError> {
        if self.closed {
            debug!("handle: session closed, ignoring {:?}", input);
            return Ok(());
        }
        debug!("handle: player_id={:?}, input={:?}", self.player_id, input);
        let result = match input {
            Input::Server(event) => self.on_server_event(event),
            Input::Drag { card, from, to } => self.drag(&card, from, to),
            Input::Commit => self.commit().map(|_| ()),
        };
        match result {
            Ok(()) => Ok(()),
            Err(ClientError::GameFull(message)) => {
                info!("game full: {}", message);
                self.closed = true;
                self.renderer.report(&message);
                Ok(())
            }
            Err(e) if e.is_local() => {
                warn!("handle: {}", e);
                self.renderer.report(&e.to_string());
                Ok(())
            }
            Err(e) => {
                error!("handle: {}", e);
                Err(e)
            }
        }
    }

    pub fn on_server_event(&mut self, event: ServerEvent) -> Result<(), ClientError> {
        match event {
            ServerEvent::AssignPlayerId { player_id } => {
                if let Some(previous) = &self.player_id {
                    warn!("player id reassigned from {} to {}", previous, player_id);
                }
                info!("assigned player id {}", player_id);
                self.player_id = Some(player_id);
                if self.cache.is_known() {
                    self.reseed();
                    self.render()?;
                }
                Ok(())
            }
            ServerEvent::UpdateState(state) => self.update_state(state),
            ServerEvent::GameFull { message } => Err(ClientError::GameFull(message)),
        }
    }

    fn update_state(&mut self, state: GameState) -> Result<(), ClientError> {
        self.cache.replace(state);
        self.reseed();
        self.render()
    }

    fn reseed(&mut self) {
        let hand: &[WireCard] = match &self.player_id {
            Some(player_id) => self.cache.hand(player_id),
            None => &[],
        };
        let played = self.cache.previous_played_cards().unwrap_or(&[]);
        self.zones.seed(played, hand);
    }

    pub fn drag(&mut self, card: &WireCard, from: Zone, to: Zone) -> Result<(), ClientError> {
        let drag = self.zones.begin_drag(&card.id()?, from)?;
        debug!("drag: id={}, from={}", drag.id(), drag.source());
        self.zones.drop_card(drag, to)?;
        self.render()
    }

    pub fn commit(&mut self) -> Result<Commit, ClientError> {
        let delta = compute_delta(&self.zones, &self.cache)?;
        if delta.is_empty() {
            info!("commit: nothing new in the play area");
            return Ok(Commit::Empty);
        }
        let count = delta.len();
        let points = delta.iter().collect::<Cards>().points();
        info!(
            "commit: player_id={:?}, cards={:?}, points={}",
            self.player_id, delta, points
        );
        self.transport.send(&ClientEvent::PlayCards {
            played_cards: delta,
        })?;
        Ok(Commit::Sent(count))
    }

    pub fn snapshot(&self) -> Result<Snapshot, ClientError> {
        Ok(Snapshot {
            message: self.cache.message().unwrap_or_default().to_string(),
            player_id: self.player_id.clone(),
            played_cards: resolve_all(self.zones.cards(Zone::PlayArea))?,
            my_hand: resolve_all(self.zones.cards(Zone::Hand))?,
        })
    }

    fn render(&mut self) -> Result<(), ClientError> {
        let snapshot = self.snapshot()?;
        self.renderer.render(&snapshot);
        Ok(())
    }
}
