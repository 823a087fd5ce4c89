use crate::zones::Zone;
use thiserror::Error;
use tichu_api::{CanonicalId, MalformedCard};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{0}")]
    GameFull(String),
    #[error("malformed card: {source}")]
    MalformedCard {
        #[from]
        source: MalformedCard,
    },
    #[error("cards in the {0} cannot be dragged")]
    NotDraggable(Zone),
    #[error("no state received from the server yet")]
    StateUnknown,
    #[error("the table was redrawn while {0} was being dragged")]
    StaleDrag(CanonicalId),
    #[error("{0} is not in the {1}")]
    UnknownCard(CanonicalId, Zone),
    #[error("unexpected io error")]
    Io {
        #[from]
        source: std::io::Error,
    },
    #[error("unexpected serde error")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
}

impl ClientError {
    /// Local errors abort the current step only; the session keeps running.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            ClientError::MalformedCard { .. }
                | ClientError::NotDraggable(_)
                | ClientError::StateUnknown
                | ClientError::StaleDrag(_)
                | ClientError::UnknownCard(..)
        )
    }
}
