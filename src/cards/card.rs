//! Card data: identity, face value, and partner reference.
//!
//! A card is immutable once a round is generated. Turn-dependent facts
//! (face-up, matched) live in the match engine, not here.

use std::borrow::Borrow;

use serde::{Deserialize, Serialize};

/// Identifier of a card, unique within a round.
///
/// Ids are human-readable (`upper-A`, `lower-a`, `num-3`, `count-3`) so the
/// presentation layer can use them directly as element keys.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for CardId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for CardId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for CardId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How a card's face is presented.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardVariant {
    /// Uppercase letter, e.g. `A`.
    Uppercase,
    /// Lowercase letter, e.g. `a`.
    Lowercase,
    /// A numeral, e.g. `3`.
    NumberSymbol,
    /// That many discrete marks (dots).
    NumberCount,
}

/// What is printed on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardValue {
    Letter(char),
    Number(u8),
}

impl std::fmt::Display for CardValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{}", c),
            Self::Number(n) => write!(f, "{}", n),
        }
    }
}

/// A single card in a round.
///
/// ## Example
///
/// ```
/// use memory_match::cards::Card;
///
/// let (upper, lower) = Card::letter_pair('C');
/// assert_eq!(upper.id.as_str(), "upper-C");
/// assert_eq!(lower.id.as_str(), "lower-c");
/// assert!(upper.matches(&lower));
/// assert!(lower.matches(&upper));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Unique identifier within the round.
    pub id: CardId,

    /// Face value.
    pub value: CardValue,

    /// Presentation variant.
    pub variant: CardVariant,

    /// Id of the partner card.
    pub match_id: CardId,
}

impl Card {
    /// Build the uppercase/lowercase pair for a letter.
    ///
    /// The letter may be given in either case.
    #[must_use]
    pub fn letter_pair(letter: char) -> (Card, Card) {
        let upper = letter.to_ascii_uppercase();
        let lower = letter.to_ascii_lowercase();
        let upper_id = CardId::new(format!("upper-{}", upper));
        let lower_id = CardId::new(format!("lower-{}", lower));

        (
            Card {
                id: upper_id.clone(),
                value: CardValue::Letter(upper),
                variant: CardVariant::Uppercase,
                match_id: lower_id.clone(),
            },
            Card {
                id: lower_id,
                value: CardValue::Letter(lower),
                variant: CardVariant::Lowercase,
                match_id: upper_id,
            },
        )
    }

    /// Build the numeral/count pair for a number.
    #[must_use]
    pub fn number_pair(number: u8) -> (Card, Card) {
        let symbol_id = CardId::new(format!("num-{}", number));
        let count_id = CardId::new(format!("count-{}", number));

        (
            Card {
                id: symbol_id.clone(),
                value: CardValue::Number(number),
                variant: CardVariant::NumberSymbol,
                match_id: count_id.clone(),
            },
            Card {
                id: count_id,
                value: CardValue::Number(number),
                variant: CardVariant::NumberCount,
                match_id: symbol_id,
            },
        )
    }

    /// Does `other` complete this card's pair?
    #[must_use]
    pub fn matches(&self, other: &Card) -> bool {
        self.match_id == other.id
    }

    /// Number of marks to draw, for count cards.
    #[must_use]
    pub fn marks(&self) -> Option<u8> {
        match (self.variant, self.value) {
            (CardVariant::NumberCount, CardValue::Number(n)) => Some(n),
            _ => None,
        }
    }

    /// Accessible description of the card face.
    #[must_use]
    pub fn label(&self) -> String {
        match self.variant {
            CardVariant::Uppercase => format!("Uppercase letter {}", self.value),
            CardVariant::Lowercase => format!("Lowercase letter {}", self.value),
            CardVariant::NumberSymbol => format!("Number {}", self.value),
            CardVariant::NumberCount => {
                format!("{} dots representing the number {}", self.value, self.value)
            }
        }
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}
