//! Wire encodings of a card and their normalization to [`Card`].
//!
//! Servers have sent cards as bare id strings, as parsed `{type, letter}`
//! pairs and as full card objects. [`WireCard`] accepts all three and
//! [`WireCard::resolve`] maps each onto the same [`Card`].

use crate::{Card, Color, MalformedCard, Rank, Special};
use serde::{Deserialize, Serialize};
use std::{
    convert::TryFrom,
    fmt,
    fmt::{Debug, Display},
    ops::Deref,
};

/// Encoding independent identity of a card, e.g. `"7:red"` or `"dragon"`.
#[derive(Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CanonicalId(String);

impl CanonicalId {
    /// Joins rank and color; appears in neither.
    pub const SEPARATOR: char = ':';

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Card> for CanonicalId {
    fn from(card: Card) -> Self {
        CanonicalId(card.to_string())
    }
}

impl Deref for CanonicalId {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Display for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Debug for CanonicalId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Debug::fmt(&self.0, f)
    }
}

/// A card exactly as it arrived from the server.
///
/// Decoding never fails on the card itself; a value that is not a card stays
/// [`WireCard::Unrecognized`] and fails at [`WireCard::resolve`], so one bad
/// card cannot reject a whole snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum WireCard {
    RawId(String),
    ParsedId(ParsedId),
    FullObject(CardObject),
    Unrecognized(serde_json::Value),
}

/// `kind` is a special name or a suit, by color, suit name or letter.
///
/// Unknown fields are rejected so that a full card object carrying a `type`
/// key still decodes as [`CardObject`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParsedId {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub letter: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CardObject {
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dog: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_phoenix: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_dragon: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub is_mahjong: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rank: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub points: Option<i32>,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl WireCard {
    pub fn resolve(&self) -> Result<Card, MalformedCard> {
        match self {
            WireCard::RawId(s) => parse_raw(s),
            WireCard::ParsedId(parsed) => parsed.resolve(),
            WireCard::FullObject(object) => object.resolve(),
            WireCard::Unrecognized(value) => Err(MalformedCard::Unrecognized(value.to_string())),
        }
    }

    pub fn id(&self) -> Result<CanonicalId, MalformedCard> {
        self.resolve().map(CanonicalId::from)
    }
}

/// Canonical identity of any wire form.
pub fn identify(card: &WireCard) -> Result<CanonicalId, MalformedCard> {
    card.id()
}

impl From<Card> for WireCard {
    fn from(card: Card) -> Self {
        WireCard::FullObject(CardObject::from(card))
    }
}

impl ParsedId {
    pub fn resolve(&self) -> Result<Card, MalformedCard> {
        if let Ok(special) = self.kind.parse::<Special>() {
            return Ok(Card::Special(special));
        }
        let color = self
            .kind
            .parse::<Color>()
            .map_err(|_| MalformedCard::Special(self.kind.clone()))?;
        let letter = self
            .letter
            .as_deref()
            .ok_or_else(|| MalformedCard::Incomplete(format!("{:?}", self)))?;
        Ok(Card::new(letter.parse()?, color))
    }
}

impl From<Card> for ParsedId {
    fn from(card: Card) -> Self {
        match card {
            Card::Plain { rank, color } => ParsedId {
                kind: color.name().to_string(),
                letter: Some(rank.letter().to_string()),
            },
            Card::Special(special) => ParsedId {
                kind: special.name().to_string(),
                letter: None,
            },
        }
    }
}

impl CardObject {
    pub fn resolve(&self) -> Result<Card, MalformedCard> {
        if self.is_dog {
            return Ok(Card::DOG);
        }
        if self.is_phoenix {
            return Ok(Card::PHOENIX);
        }
        if self.is_dragon {
            return Ok(Card::DRAGON);
        }
        if self.is_mahjong {
            return Ok(Card::MAHJONG);
        }
        match (self.rank.as_deref(), self.color.as_deref()) {
            (Some(rank), Some(color)) => Ok(Card::new(rank.parse()?, color.parse()?)),
            (Some(rank), None) if rank.trim() == "1" => Ok(Card::MAHJONG),
            _ => Err(MalformedCard::Incomplete(format!("{:?}", self))),
        }
    }
}

impl From<Card> for CardObject {
    fn from(card: Card) -> Self {
        let mut object = CardObject {
            points: Some(card.points()),
            ..CardObject::default()
        };
        match card {
            Card::Plain { rank, color } => {
                object.rank = Some(rank.name().to_string());
                object.color = Some(color.name().to_string());
            }
            Card::Special(Special::Dog) => object.is_dog = true,
            Card::Special(Special::Phoenix) => object.is_phoenix = true,
            Card::Special(Special::Dragon) => object.is_dragon = true,
            Card::Special(Special::One) => {
                object.is_mahjong = true;
                object.rank = Some("1".to_string());
            }
        }
        object
    }
}

/// Parses the bare string form: a canonical id (`"7:red"`, `"dragon"`), a
/// special name, `"<suit> <rank>"` (`"Jade 2"`, `"red 7"`) or a compact
/// suit and rank letter pair (`"H7"`, `"DT"`).
pub(crate) fn parse_raw(s: &str) -> Result<Card, MalformedCard> {
    let s = s.trim();
    if let Some((rank, color)) = s.split_once(CanonicalId::SEPARATOR) {
        return Ok(Card::new(rank.parse()?, color.parse()?));
    }
    let mut parts = s.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(name), None, None) => match parse_compact(name) {
            Some(card) => card,
            None => name.parse::<Special>().map(Card::Special),
        },
        (Some(suit), Some(rank), None) => match suit.parse::<Color>() {
            Ok(color) => Ok(Card::new(rank.parse()?, color)),
            Err(_) => s.parse::<Special>().map(Card::Special),
        },
        _ => Err(MalformedCard::Unrecognized(s.to_string())),
    }
}

/// `None` unless `s` is two characters starting with a suit letter.
fn parse_compact(s: &str) -> Option<Result<Card, MalformedCard>> {
    let mut chars = s.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(suit), Some(rank), None) => {
            let color = Color::from_letter(suit)?;
            Some(
                Rank::try_from(rank)
                    .map(|rank| Card::new(rank, color))
                    .map_err(|_| MalformedCard::Rank(rank.to_string())),
            )
        }
        _ => None,
    }
}
