use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MalformedCard {
    #[error("{0:?} is not a known rank")]
    Rank(String),
    #[error("{0:?} is not a known color or suit")]
    Color(String),
    #[error("{0:?} is not a known card type")]
    Special(String),
    #[error("{0} has neither a special flag nor both rank and color")]
    Incomplete(String),
    #[error("{0} is not a card")]
    Unrecognized(String),
}
