use crate::model::card::Card;
use crate::model::mode::{Mode, TrickRules};
use crate::model::player::PlayerPosition;
use crate::model::suit::Suit;
use crate::rules::{resolve_trick, trick_points};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    leader: PlayerPosition,
    plays: Vec<Play>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Play {
    pub position: PlayerPosition,
    pub card: Card,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TrickError {
    #[error("trick already complete")]
    TrickComplete,
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("{0} has already played this trick")]
    AlreadyPlayed(PlayerPosition),
}

impl Trick {
    pub fn new(leader: PlayerPosition) -> Self {
        Self {
            leader,
            plays: Vec::with_capacity(4),
        }
    }

    pub fn leader(&self) -> PlayerPosition {
        self.leader
    }

    pub fn plays(&self) -> &[Play] {
        &self.plays
    }

    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.plays.iter().map(|play| &play.card)
    }

    pub fn is_complete(&self) -> bool {
        self.plays.len() == 4
    }

    pub fn lead_suit(&self) -> Option<Suit> {
        self.plays.first().map(|play| play.card.suit)
    }

    pub fn play(&mut self, position: PlayerPosition, card: Card) -> Result<(), TrickError> {
        if self.is_complete() {
            return Err(TrickError::TrickComplete);
        }

        if self.plays.iter().any(|play| play.position == position) {
            return Err(TrickError::AlreadyPlayed(position));
        }

        let expected = self.expected_position();
        if expected != position {
            return Err(TrickError::OutOfTurn {
                expected,
                actual: position,
            });
        }

        self.plays.push(Play { position, card });
        Ok(())
    }

    /// Play currently holding the trick, over the plays made so far.
    pub fn current_best(&self, rules: TrickRules) -> Option<Play> {
        let lead_suit = self.lead_suit()?;
        let cards: Vec<Card> = self.cards().copied().collect();
        resolve_trick(&cards, lead_suit, rules).map(|index| self.plays[index])
    }

    pub fn winner(&self, rules: TrickRules) -> Option<PlayerPosition> {
        if !self.is_complete() {
            return None;
        }
        self.current_best(rules).map(|play| play.position)
    }

    pub fn points(&self, mode: Mode, active_trump: Option<Suit>) -> u32 {
        trick_points(self.cards(), mode, active_trump)
    }

    pub fn expected_position(&self) -> PlayerPosition {
        self.plays
            .last()
            .map(|play| play.position.next())
            .unwrap_or(self.leader)
    }
}
