use crate::{
    cache::StateCache,
    error::ClientError,
    zones::{Zone, Zones},
};
use tichu_api::{resolve_all, Card, Cards, MalformedCard, WireCard};

/// Cards in the live play area that were not on the table in the cached
/// snapshot, in play-area order.
pub fn compute_delta(zones: &Zones, cache: &StateCache) -> Result<Vec<Card>, ClientError> {
    let previous = cache
        .previous_played_cards()
        .ok_or(ClientError::StateUnknown)?;
    Ok(delta(zones.cards(Zone::PlayArea), previous)?)
}

/// Membership in `previous` decides inclusion only; repeated cards in
/// `current` are kept per position. Any card that fails to resolve, on
/// either side, fails the whole delta.
pub fn delta(current: &[WireCard], previous: &[WireCard]) -> Result<Vec<Card>, MalformedCard> {
    let previous = previous
        .iter()
        .map(WireCard::resolve)
        .collect::<Result<Cards, _>>()?;
    let current = resolve_all(current)?;
    Ok(current
        .into_iter()
        .filter(|&card| !previous.contains(card))
        .collect())
}
