//! A generated round: the shuffled cards plus an id index.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::cards::{Card, CardId};
use crate::core::RoundMode;

/// One complete, shuffled card set.
///
/// Cards are stored in an `im::Vector` so cloning a round (for snapshots) is
/// O(1). The id index is rebuilt on construction and never serialized.
#[derive(Clone, Debug, Serialize)]
pub struct Round {
    mode: RoundMode,
    pair_count: usize,
    cards: Vector<Card>,
    #[serde(skip)]
    index: FxHashMap<CardId, usize>,
}

impl Round {
    /// Build a round from already-ordered cards.
    ///
    /// Callers are expected to hand over `2 × pair_count` cards with
    /// symmetric partners; the generator is the only producer in this crate.
    pub(crate) fn from_cards(mode: RoundMode, pair_count: usize, cards: Vec<Card>) -> Self {
        let index = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id.clone(), pos))
            .collect();

        Self {
            mode,
            pair_count,
            cards: cards.into_iter().collect(),
            index,
        }
    }

    /// Symbol set this round was built from.
    #[must_use]
    pub fn mode(&self) -> RoundMode {
        self.mode
    }

    /// Number of pairs on the board.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Number of cards (always twice the pair count).
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True for a round with no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards in board order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// Card at a board position.
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Card> {
        self.cards.get(position)
    }

    /// Look up a card by id.
    #[must_use]
    pub fn card(&self, id: &str) -> Option<&Card> {
        self.position(id).and_then(|pos| self.cards.get(pos))
    }

    /// Board position of a card.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Does this round contain the card?
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// The card a given card must be paired with.
    #[must_use]
    pub fn partner(&self, id: &str) -> Option<&Card> {
        self.card(id)
            .and_then(|card| self.card(card.match_id.as_str()))
    }

    /// Ids in board order.
    pub fn ids(&self) -> impl Iterator<Item = &CardId> {
        self.cards.iter().map(|card| &card.id)
    }
}

impl<'a> IntoIterator for &'a Round {
    type Item = &'a Card;
    type IntoIter = im::vector::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_pair_round() -> Round {
        let (upper_a, lower_a) = Card::letter_pair('A');
        let (upper_b, lower_b) = Card::letter_pair('B');
        Round::from_cards(
            RoundMode::Letters,
            2,
            vec![lower_b, upper_a, upper_b, lower_a],
        )
    }

    #[test]
    fn test_lookup_by_id() {
        let round = two_pair_round();

        assert_eq!(round.len(), 4);
        assert!(!round.is_empty());
        assert_eq!(round.position("upper-A"), Some(1));
        assert_eq!(round.card("lower-a").map(|c| c.id.as_str()), Some("lower-a"));
        assert!(round.contains("lower-b"));
        assert!(!round.contains("upper-C"));
        assert!(round.card("upper-C").is_none());
    }

    #[test]
    fn test_partner() {
        let round = two_pair_round();

        let partner = round.partner("upper-B").unwrap();
        assert_eq!(partner.id.as_str(), "lower-b");

        let back = round.partner(partner.id.as_str()).unwrap();
        assert_eq!(back.id.as_str(), "upper-B");
    }

    #[test]
    fn test_board_order_is_preserved() {
        let round = two_pair_round();
        let ids: Vec<&str> = round.ids().map(CardId::as_str).collect();

        assert_eq!(ids, vec!["lower-b", "upper-A", "upper-B", "lower-a"]);
        assert_eq!(round.get(0).map(|c| c.id.as_str()), Some("lower-b"));
        assert!(round.get(4).is_none());
    }

    #[test]
    fn test_serialize_skips_index() {
        let round = two_pair_round();
        let json = serde_json::to_value(&round).unwrap();

        assert_eq!(json["mode"], "letters");
        assert_eq!(json["pair_count"], 2);
        assert_eq!(json["cards"].as_array().map(Vec::len), Some(4));
        assert!(json.get("index").is_none());
    }
}
