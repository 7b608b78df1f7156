use crate::model::rank::Rank;
use crate::model::suit::Suit;
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Number of distinct cards in a Jass deck.
pub const DECK_SIZE: usize = 36;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub rank: Rank,
    pub suit: Suit,
}

impl Card {
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Dense identifier `suit * 9 + rank_index`, in `0..36`.
    pub const fn id(self) -> u8 {
        (self.suit.index() * Rank::ORDERED.len() + self.rank.index()) as u8
    }

    pub const fn from_id(id: u8) -> Option<Self> {
        let id = id as usize;
        if id >= DECK_SIZE {
            return None;
        }
        let suit = match Suit::from_index(id / Rank::ORDERED.len()) {
            Some(suit) => suit,
            None => return None,
        };
        let rank = match Rank::from_index(id % Rank::ORDERED.len()) {
            Some(rank) => rank,
            None => return None,
        };
        Some(Self::new(rank, suit))
    }

    /// The Jack of `trump`, the top trump under every trump ordering.
    pub const fn trump_top(trump: Suit) -> Self {
        Self::new(Rank::Jack, trump)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse card from {0:?}")]
pub struct CardParseError(pub String);

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses the display form, e.g. `"JH"` or `"10S"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CardParseError(s.to_string());
        let trimmed = s.trim();
        let split = trimmed.len().checked_sub(1).ok_or_else(err)?;
        if !trimmed.is_char_boundary(split) {
            return Err(err());
        }
        let (rank_text, suit_text) = trimmed.split_at(split);
        let suit = match suit_text {
            "C" => Suit::Clubs,
            "D" => Suit::Diamonds,
            "S" => Suit::Spades,
            "H" => Suit::Hearts,
            _ => return Err(err()),
        };
        let rank = Rank::ORDERED
            .iter()
            .copied()
            .find(|rank| rank.to_string() == rank_text)
            .ok_or_else(err)?;
        Ok(Card::new(rank, suit))
    }
}

#[cfg(test)]
mod tests {
    use super::{Card, DECK_SIZE, Rank, Suit};

    #[test]
    fn ids_cover_the_deck_once() {
        let mut seen = [false; DECK_SIZE];
        for id in 0..DECK_SIZE as u8 {
            let card = Card::from_id(id).expect("id in range");
            assert_eq!(card.id(), id);
            assert!(!seen[id as usize]);
            seen[id as usize] = true;
        }
        assert_eq!(Card::from_id(36), None);
    }

    #[test]
    fn id_is_suit_major() {
        assert_eq!(Card::new(Rank::Six, Suit::Clubs).id(), 0);
        assert_eq!(Card::new(Rank::Ace, Suit::Clubs).id(), 8);
        assert_eq!(Card::new(Rank::Six, Suit::Diamonds).id(), 9);
        assert_eq!(Card::new(Rank::Ace, Suit::Hearts).id(), 35);
    }

    #[test]
    fn parses_display_form() {
        let card: Card = "10S".parse().unwrap();
        assert_eq!(card, Card::new(Rank::Ten, Suit::Spades));
        assert_eq!(card.to_string(), "10S");
        assert_eq!("JH".parse::<Card>().unwrap(), Card::trump_top(Suit::Hearts));
        assert!("2C".parse::<Card>().is_err());
        assert!("".parse::<Card>().is_err());
        assert!("AX".parse::<Card>().is_err());
    }
}
