use crate::MalformedCard;
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display},
    str::FromStr,
};

const LETTERS: [char; 13] = [
    '2', '3', '4', '5', '6', '7', '8', '9', 'T', 'J', 'Q', 'K', 'A',
];

const NAMES: [&str; 13] = [
    "2", "3", "4", "5", "6", "7", "8", "9", "10", "J", "Q", "K", "A",
];

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Rank {
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Rank {
    pub const VALUES: [Rank; 13] = [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Single letter code used by the parsed `{type, letter}` wire form.
    pub fn letter(self) -> char {
        LETTERS[self.idx()]
    }

    /// Display string, also the rank half of a canonical id.
    pub fn name(self) -> &'static str {
        NAMES[self.idx()]
    }

    pub fn points(self) -> i32 {
        match self {
            Rank::Five => 5,
            Rank::Ten | Rank::King => 10,
            _ => 0,
        }
    }
}

impl TryFrom<char> for Rank {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let upper = c.to_ascii_uppercase();
        LETTERS
            .iter()
            .position(|&r| r == upper)
            .map(|n| Rank::VALUES[n])
            .ok_or(c)
    }
}

impl FromStr for Rank {
    type Err = MalformedCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(n) = NAMES.iter().position(|name| name.eq_ignore_ascii_case(s)) {
            return Ok(Rank::VALUES[n]);
        }
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Rank::try_from(c).map_err(|_| MalformedCard::Rank(s.to_string())),
            _ => Err(MalformedCard::Rank(s.to_string())),
        }
    }
}

impl Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Debug for Rank {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
