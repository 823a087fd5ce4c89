use crate::MalformedCard;
use std::{
    fmt,
    fmt::{Debug, Display},
    str::FromStr,
};

const NAMES: [&str; 4] = ["green", "black", "blue", "red"];

const SUITS: [&str; 4] = ["Jade", "Swords", "Pagodas", "Stars"];

/// French suit letters of compact ids like `"H7"`: clubs, spades, diamonds,
/// hearts.
const LETTERS: [char; 4] = ['C', 'S', 'D', 'H'];

/// The four Tichu suits, named on the wire by their color.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Color {
    Green,
    Black,
    Blue,
    Red,
}

impl Color {
    pub const VALUES: [Color; 4] = [Color::Green, Color::Black, Color::Blue, Color::Red];

    pub fn idx(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        NAMES[self.idx()]
    }

    pub fn letter(self) -> char {
        LETTERS[self.idx()]
    }

    pub fn from_letter(c: char) -> Option<Color> {
        let upper = c.to_ascii_uppercase();
        LETTERS
            .iter()
            .position(|&l| l == upper)
            .map(|n| Color::VALUES[n])
    }
}

impl FromStr for Color {
    type Err = MalformedCard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        NAMES
            .iter()
            .position(|name| name.eq_ignore_ascii_case(s))
            .or_else(|| SUITS.iter().position(|suit| suit.eq_ignore_ascii_case(s)))
            .map(|n| Color::VALUES[n])
            .or_else(|| {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Color::from_letter(c),
                    _ => None,
                }
            })
            .ok_or_else(|| MalformedCard::Color(s.to_string()))
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(self, f)
    }
}
