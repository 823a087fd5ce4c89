use crate::error::ClientError;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{fmt, fmt::Display};
use tichu_api::{CanonicalId, WireCard};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Hand,
    PlayArea,
}

impl Zone {
    /// Only the player's own hand can start a drag.
    pub fn is_drag_source(self) -> bool {
        self == Zone::Hand
    }
}

impl Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Zone::Hand => f.write_str("hand"),
            Zone::PlayArea => f.write_str("play area"),
        }
    }
}

/// A drag in progress, valid until the zones are reseeded.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Drag {
    id: CanonicalId,
    from: Zone,
    generation: u64,
}

impl Drag {
    pub fn id(&self) -> &CanonicalId {
        &self.id
    }

    pub fn source(&self) -> Zone {
        self.from
    }
}

/// Live contents of the hand and the play area.
///
/// Seeded from every snapshot, then changed only by local drags until the
/// next snapshot overwrites both zones.
#[derive(Clone, Debug, Default)]
pub struct Zones {
    hand: Vec<WireCard>,
    play_area: Vec<WireCard>,
    generation: u64,
}

impl Zones {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&mut self, played: &[WireCard], hand: &[WireCard]) {
        self.play_area = played.to_vec();
        self.hand = hand.to_vec();
        self.generation += 1;
    }

    pub fn cards(&self, zone: Zone) -> &[WireCard] {
        match zone {
            Zone::Hand => &self.hand,
            Zone::PlayArea => &self.play_area,
        }
    }

    fn cards_mut(&mut self, zone: Zone) -> &mut Vec<WireCard> {
        match zone {
            Zone::Hand => &mut self.hand,
            Zone::PlayArea => &mut self.play_area,
        }
    }

    fn position(&self, zone: Zone, id: &CanonicalId) -> Option<usize> {
        self.cards(zone)
            .iter()
            .position(|card| card.id().map_or(false, |card_id| card_id == *id))
    }

    pub fn begin_drag(&self, id: &CanonicalId, from: Zone) -> Result<Drag, ClientError> {
        if !from.is_drag_source() {
            return Err(ClientError::NotDraggable(from));
        }
        if self.position(from, id).is_none() {
            return Err(ClientError::UnknownCard(id.clone(), from));
        }
        Ok(Drag {
            id: id.clone(),
            from,
            generation: self.generation,
        })
    }

    /// Moves the dragged card to the end of `to`.
    pub fn drop_card(&mut self, drag: Drag, to: Zone) -> Result<(), ClientError> {
        if drag.generation != self.generation {
            return Err(ClientError::StaleDrag(drag.id));
        }
        let idx = self
            .position(drag.from, &drag.id)
            .ok_or_else(|| ClientError::UnknownCard(drag.id.clone(), drag.from))?;
        let card = self.cards_mut(drag.from).remove(idx);
        self.cards_mut(to).push(card);
        debug!("drop_card: id={}, from={}, to={}", drag.id, drag.from, to);
        Ok(())
    }

    pub fn move_card(
        &mut self,
        id: &CanonicalId,
        from: Zone,
        to: Zone,
    ) -> Result<(), ClientError> {
        let drag = self.begin_drag(id, from)?;
        self.drop_card(drag, to)
    }
}
