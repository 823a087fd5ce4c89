mod card;
mod cards;
mod color;
mod error;
mod game_api;
mod game_state;
mod rank;
mod special;
mod types;
mod wire;

pub use card::*;
pub use cards::*;
pub use color::*;
pub use error::*;
pub use game_api::*;
pub use game_state::*;
pub use rank::*;
pub use special::*;
pub use types::*;
pub use wire::{identify, CanonicalId, CardObject, ParsedId, WireCard};
