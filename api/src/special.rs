use crate::MalformedCard;
use std::{
    fmt,
    fmt::{Debug, Display},
    str::FromStr,
};

const NAMES: [&str; 4] = ["mahjong", "dog", "phoenix", "dragon"];

#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Special {
    One,
    Dog,
    Phoenix,
    Dragon,
}

impl Special {
    pub const VALUES: [Special; 4] = [Special::One, Special::Dog, Special::Phoenix, Special::Dragon];

    pub fn idx(self) -> usize {
        self as usize
    }

    /// Canonical id of the card; specials identify by kind alone.
    pub fn name(self) -> &'static str {
        NAMES[self.idx()]
    }

    pub fn points(self) -> i32 {
        match self {
            Special::Dragon => 25,
            Special::Phoenix => -25,
            Special::One | Special::Dog => 0,
        }
    }
}

impl FromStr for Special {
    type Err = MalformedCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "1" || s.eq_ignore_ascii_case("one") || s.eq_ignore_ascii_case("mah jong") {
            return Ok(Special::One);
        }
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .map(|n| Special::VALUES[n])
            .ok_or_else(|| MalformedCard::Special(s.to_string()))
    }
}

impl Display for Special {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Debug for Special {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
