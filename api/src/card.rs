use crate::{CanonicalId, CardObject, Color, MalformedCard, Rank, Special, WireCard};
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display},
    str::FromStr,
};

/// One of the 56 cards of a Tichu deck.
///
/// Equality is canonical identity: two values are equal exactly when their
/// [`CanonicalId`]s are, whichever wire form they were decoded from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "WireCard")]
#[serde(into = "CardObject")]
pub enum Card {
    Plain { rank: Rank, color: Color },
    Special(Special),
}

impl Card {
    pub const COUNT: usize = 56;

    pub const MAHJONG: Card = Card::Special(Special::One);
    pub const DOG: Card = Card::Special(Special::Dog);
    pub const PHOENIX: Card = Card::Special(Special::Phoenix);
    pub const DRAGON: Card = Card::Special(Special::Dragon);

    pub fn new(rank: Rank, color: Color) -> Self {
        Card::Plain { rank, color }
    }

    pub fn special_kind(self) -> Option<Special> {
        match self {
            Card::Special(special) => Some(special),
            Card::Plain { .. } => None,
        }
    }

    pub fn rank(self) -> Option<Rank> {
        match self {
            Card::Plain { rank, .. } => Some(rank),
            Card::Special(_) => None,
        }
    }

    pub fn color(self) -> Option<Color> {
        match self {
            Card::Plain { color, .. } => Some(color),
            Card::Special(_) => None,
        }
    }

    pub fn points(self) -> i32 {
        match self {
            Card::Plain { rank, .. } => rank.points(),
            Card::Special(special) => special.points(),
        }
    }

    /// Bit position in [`Cards`](crate::Cards); plain cards first, grouped by color.
    pub fn idx(self) -> usize {
        match self {
            Card::Plain { rank, color } => 13 * color.idx() + rank.idx(),
            Card::Special(special) => 52 + special.idx(),
        }
    }

    pub fn id(self) -> CanonicalId {
        CanonicalId::from(self)
    }
}

impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!((n as usize) < Card::COUNT, "n={}", n);
        if n < 52 {
            Card::new(Rank::VALUES[(n % 13) as usize], Color::VALUES[(n / 13) as usize])
        } else {
            Card::Special(Special::VALUES[(n - 52) as usize])
        }
    }
}

impl Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Card::Plain { rank, color } => write!(f, "{}{}{}", rank, CanonicalId::SEPARATOR, color),
            Card::Special(special) => Display::fmt(special, f),
        }
    }
}

impl Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}

impl FromStr for Card {
    type Err = MalformedCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::wire::parse_raw(s)
    }
}

impl TryFrom<WireCard> for Card {
    type Error = MalformedCard;

    fn try_from(wire: WireCard) -> Result<Self, Self::Error> {
        wire.resolve()
    }
}
