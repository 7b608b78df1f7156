use crate::model::card::{Card, DECK_SIZE};
use crate::model::deck::Deck;
use crate::model::hand::Hand;
use crate::model::mode::{Mode, TrickRules};
use crate::model::player::PlayerPosition;
use crate::model::score::ScoreBoard;
use crate::model::suit::Suit;
use crate::model::tables::LAST_TRICK_BONUS;
use crate::model::trick::{Trick, TrickError};
use crate::rules::legal_plays;
use serde::{Deserialize, Serialize};
use std::array;
use thiserror::Error;

pub const HAND_SIZE: usize = 9;
pub const TRICKS_PER_ROUND: usize = 9;

/// One round of play: four hands, the trick in progress and the partnership totals.
///
/// North leads the first trick; every later trick is led by the previous winner.
#[derive(Debug, Clone)]
pub struct RoundState {
    mode: Mode,
    hands: [Hand; 4],
    current_trick: Trick,
    trick_history: Vec<CompletedTrick>,
    scores: ScoreBoard,
    active_trump: Option<Suit>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletedTrick {
    /// 1-based position within the round.
    pub number: usize,
    pub trick: Trick,
    pub winner: PlayerPosition,
    /// Card points credited to the winner, excluding the last-trick bonus.
    pub points: u32,
    /// Ranking the trick was resolved under.
    pub rules: TrickRules,
}

impl RoundState {
    pub fn new(hands: [Hand; 4], mode: Mode) -> Result<Self, DealError> {
        validate_hands(&hands)?;
        let active_trump = mode.trump_suit(None);
        Ok(Self {
            mode,
            hands,
            current_trick: Trick::new(PlayerPosition::North),
            trick_history: Vec::with_capacity(TRICKS_PER_ROUND),
            scores: ScoreBoard::new(),
            active_trump,
        })
    }

    /// Deals consecutive blocks of nine cards, North first.
    pub fn deal(deck: &Deck, mode: Mode) -> Result<Self, DealError> {
        let cards = deck.cards();
        if cards.len() != DECK_SIZE {
            return Err(DealError::DeckSize { found: cards.len() });
        }
        let hands = array::from_fn(|seat| {
            Hand::with_cards(cards[seat * HAND_SIZE..(seat + 1) * HAND_SIZE].to_vec())
        });
        Self::new(hands, mode)
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn hand(&self, seat: PlayerPosition) -> &Hand {
        &self.hands[seat.index()]
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    pub fn trick_history(&self) -> &[CompletedTrick] {
        &self.trick_history
    }

    pub fn tricks_completed(&self) -> usize {
        self.trick_history.len()
    }

    /// 1-based number of the trick in progress.
    pub fn trick_number(&self) -> usize {
        self.trick_history.len() + 1
    }

    pub fn scores(&self) -> &ScoreBoard {
        &self.scores
    }

    /// Trump suit fixed so far, either by the mode or during play.
    pub fn active_trump(&self) -> Option<Suit> {
        self.active_trump
    }

    /// Trump suit governing follow-suit in the trick in progress.
    pub fn trump_suit(&self) -> Option<Suit> {
        self.mode.trump_suit(self.active_trump)
    }

    pub fn trick_rules(&self) -> TrickRules {
        self.mode.trick_rules(self.trick_number(), self.active_trump)
    }

    pub fn is_complete(&self) -> bool {
        self.trick_history.len() == TRICKS_PER_ROUND
    }

    pub fn expected_to_play(&self) -> Option<PlayerPosition> {
        if self.is_complete() {
            None
        } else {
            Some(self.current_trick.expected_position())
        }
    }

    pub fn legal_plays(&self, seat: PlayerPosition) -> Vec<Card> {
        legal_plays(
            self.hands[seat.index()].cards(),
            self.current_trick.lead_suit(),
            self.mode,
            self.active_trump,
        )
    }

    /// North/South's final score, once all nine tricks are played.
    pub fn reported_score(&self) -> Option<u32> {
        self.is_complete()
            .then(|| self.scores.reported_score(self.mode))
    }

    pub fn play_card(
        &mut self,
        seat: PlayerPosition,
        card: Card,
    ) -> Result<PlayOutcome, PlayError> {
        if self.is_complete() {
            return Err(PlayError::RoundComplete);
        }

        if !self.hands[seat.index()].contains(card) {
            return Err(PlayError::CardNotInHand(card));
        }

        let expected = self.current_trick.expected_position();
        if expected != seat {
            return Err(PlayError::OutOfTurn {
                expected,
                actual: seat,
            });
        }

        let lead_suit = self.current_trick.lead_suit();
        if let Some(suit) = lead_suit {
            if !self.legal_plays(seat).contains(&card) {
                return Err(PlayError::MustFollowSuit(suit));
            }
        } else if self.active_trump.is_none() && self.mode.fixes_trump_on(self.trick_number()) {
            self.active_trump = Some(card.suit);
        }

        self.current_trick.play(seat, card)?;
        self.hands[seat.index()].remove(card);

        if !self.current_trick.is_complete() {
            return Ok(PlayOutcome::Played);
        }

        let rules = self.trick_rules();
        let winner = self
            .current_trick
            .winner(rules)
            .ok_or(PlayError::UnresolvedTrick)?;
        let points = self.current_trick.points(self.mode, self.active_trump);
        self.scores.add_points(winner.partnership(), points);
        self.complete_trick(winner, points, rules);

        if self.is_complete() {
            self.scores.add_points(winner.partnership(), LAST_TRICK_BONUS);
            Ok(PlayOutcome::RoundCompleted {
                winner,
                points,
                score: self.scores.reported_score(self.mode),
            })
        } else {
            Ok(PlayOutcome::TrickCompleted { winner, points })
        }
    }

    fn complete_trick(&mut self, winner: PlayerPosition, points: u32, rules: TrickRules) {
        let number = self.trick_number();
        let finished = std::mem::replace(&mut self.current_trick, Trick::new(winner));
        self.trick_history.push(CompletedTrick {
            number,
            trick: finished,
            winner,
            points,
            rules,
        });
    }
}

fn validate_hands(hands: &[Hand; 4]) -> Result<(), DealError> {
    let mut seen = [false; DECK_SIZE];
    for seat in PlayerPosition::LOOP {
        let hand = &hands[seat.index()];
        if hand.len() != HAND_SIZE {
            return Err(DealError::HandSize {
                seat,
                found: hand.len(),
            });
        }
        for card in hand.iter() {
            let slot = &mut seen[card.id() as usize];
            if *slot {
                return Err(DealError::DuplicateCard(*card));
            }
            *slot = true;
        }
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOutcome {
    Played,
    TrickCompleted {
        winner: PlayerPosition,
        points: u32,
    },
    RoundCompleted {
        winner: PlayerPosition,
        points: u32,
        score: u32,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DealError {
    #[error("{seat} holds {found} cards, expected {HAND_SIZE}")]
    HandSize { seat: PlayerPosition, found: usize },
    #[error("{0} is dealt more than once")]
    DuplicateCard(Card),
    #[error("deck holds {found} cards, expected {DECK_SIZE}")]
    DeckSize { found: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("all tricks have been played")]
    RoundComplete,
    #[error("{0} is not in hand")]
    CardNotInHand(Card),
    #[error("expected {expected} to play next but got {actual}")]
    OutOfTurn {
        expected: PlayerPosition,
        actual: PlayerPosition,
    },
    #[error("must follow {0}")]
    MustFollowSuit(Suit),
    #[error("completed trick has no winner")]
    UnresolvedTrick,
    #[error(transparent)]
    Trick(#[from] TrickError),
}

#[cfg(test)]
mod tests {
    use super::{DealError, HAND_SIZE, PlayError, PlayOutcome, RoundState};
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use crate::model::hand::Hand;
    use crate::model::mode::{Mode, Order, TrickRules};
    use crate::model::player::{Partnership, PlayerPosition};
    use crate::model::suit::Suit;
    use crate::model::tables::ROUND_POINT_MASS;

    fn hand(text: &[&str]) -> Hand {
        text.iter().map(|c| c.parse::<Card>().unwrap()).collect()
    }

    /// Each seat holds one full suit: North clubs, East diamonds, South spades, West hearts.
    fn suited_hands() -> [Hand; 4] {
        let deck = Deck::jass();
        std::array::from_fn(|seat| {
            Hand::with_cards(deck.cards()[seat * HAND_SIZE..(seat + 1) * HAND_SIZE].to_vec())
        })
    }

    fn play_out_first_legal(round: &mut RoundState) {
        while let Some(seat) = round.expected_to_play() {
            let card = round.legal_plays(seat)[0];
            round.play_card(seat, card).unwrap();
        }
    }

    #[test]
    fn dealing_distributes_nine_cards_per_player() {
        let deck = Deck::shuffled_with_seed(7);
        let round = RoundState::deal(&deck, Mode::NoTrumpHigh).unwrap();
        for seat in PlayerPosition::LOOP {
            assert_eq!(round.hand(seat).len(), 9, "{seat} should have 9 cards");
        }
        assert_eq!(round.current_trick().leader(), PlayerPosition::North);
        assert_eq!(round.trick_number(), 1);
    }

    #[test]
    fn rejects_short_hands_and_duplicates() {
        let mut hands = suited_hands();
        hands[2].remove("6S".parse().unwrap());
        assert!(matches!(
            RoundState::new(hands, Mode::Misere),
            Err(DealError::HandSize { seat: PlayerPosition::South, found: 8 })
        ));

        let mut hands = suited_hands();
        hands[2].remove("6S".parse().unwrap());
        hands[2].add("6C".parse().unwrap());
        assert_eq!(
            RoundState::new(hands, Mode::Misere).unwrap_err(),
            DealError::DuplicateCard("6C".parse().unwrap())
        );
    }

    #[test]
    fn enforces_turn_order_and_ownership() {
        let mut round = RoundState::new(suited_hands(), Mode::NoTrumpHigh).unwrap();
        assert!(matches!(
            round.play_card(PlayerPosition::East, "6D".parse().unwrap()),
            Err(PlayError::OutOfTurn { .. })
        ));
        assert_eq!(
            round.play_card(PlayerPosition::North, "6D".parse().unwrap()),
            Err(PlayError::CardNotInHand("6D".parse().unwrap()))
        );
        assert_eq!(
            round.play_card(PlayerPosition::North, "AC".parse().unwrap()),
            Ok(PlayOutcome::Played)
        );
    }

    #[test]
    fn follow_suit_is_required() {
        let hands = [
            hand(&["6C", "7C", "8C", "9C", "10C", "JC", "QC", "KC", "6D"]),
            hand(&["7D", "8D", "9D", "10D", "JD", "QD", "KD", "AD", "6S"]),
            hand(&["AC", "7S", "8S", "9S", "10S", "JS", "QS", "KS", "AS"]),
            hand(&["6H", "7H", "8H", "9H", "10H", "JH", "QH", "KH", "AH"]),
        ];
        let mut round = RoundState::new(hands, Mode::NoTrumpHigh).unwrap();
        round.play_card(PlayerPosition::North, "6C".parse().unwrap()).unwrap();
        round.play_card(PlayerPosition::East, "6S".parse().unwrap()).unwrap();
        assert_eq!(
            round.play_card(PlayerPosition::South, "7S".parse().unwrap()),
            Err(PlayError::MustFollowSuit(Suit::Clubs))
        );
        assert_eq!(round.legal_plays(PlayerPosition::South), vec!["AC".parse::<Card>().unwrap()]);
        assert_eq!(
            round.play_card(PlayerPosition::South, "AC".parse().unwrap()),
            Ok(PlayOutcome::Played)
        );
    }

    #[test]
    fn winner_leads_next_trick() {
        let mut round = RoundState::new(suited_hands(), Mode::NoTrumpLow).unwrap();
        round.play_card(PlayerPosition::North, "AC".parse().unwrap()).unwrap();
        round.play_card(PlayerPosition::East, "AD".parse().unwrap()).unwrap();
        round.play_card(PlayerPosition::South, "AS".parse().unwrap()).unwrap();
        let outcome = round
            .play_card(PlayerPosition::West, "AH".parse().unwrap())
            .unwrap();
        assert_eq!(
            outcome,
            PlayOutcome::TrickCompleted {
                winner: PlayerPosition::North,
                points: 44
            }
        );
        assert_eq!(round.current_trick().leader(), PlayerPosition::North);
        assert_eq!(round.scores().score(Partnership::NorthSouth), 44);
        assert_eq!(round.trick_history()[0].number, 1);
        assert_eq!(
            round.trick_history()[0].rules,
            TrickRules::NoTrump(Order::Low)
        );
    }

    #[test]
    fn history_records_the_ranking_of_each_trick() {
        let mut round = RoundState::new(suited_hands(), Mode::Alternating).unwrap();
        play_out_first_legal(&mut round);
        for completed in round.trick_history() {
            let expected = if completed.number % 2 == 1 {
                TrickRules::NoTrump(Order::High)
            } else {
                TrickRules::NoTrump(Order::Low)
            };
            assert_eq!(completed.rules, expected, "trick {}", completed.number);
        }
    }

    #[test]
    fn full_round_distributes_the_whole_mass() {
        let mut round = RoundState::new(suited_hands(), Mode::TrumpHigh(Suit::Hearts)).unwrap();
        play_out_first_legal(&mut round);
        assert!(round.is_complete());
        assert_eq!(round.scores().total(), ROUND_POINT_MASS);
        assert_eq!(
            round.play_card(PlayerPosition::North, "6C".parse().unwrap()),
            Err(PlayError::RoundComplete)
        );
    }

    #[test]
    fn progressive_fixes_trump_with_the_lead_of_trick_seven() {
        let mut round = RoundState::new(suited_hands(), Mode::Progressive).unwrap();
        while round.trick_number() < 7 {
            let seat = round.expected_to_play().unwrap();
            let card = round.legal_plays(seat)[0];
            round.play_card(seat, card).unwrap();
        }
        assert_eq!(round.active_trump(), None);
        assert!(round.trick_history().iter().all(|trick| trick.points == 0));

        let leader = round.expected_to_play().unwrap();
        let lead = round.legal_plays(leader)[0];
        round.play_card(leader, lead).unwrap();
        assert_eq!(round.active_trump(), Some(lead.suit));
        assert_eq!(round.trump_suit(), Some(lead.suit));

        play_out_first_legal(&mut round);
        let late: u32 = round.trick_history()[6..].iter().map(|t| t.points).sum();
        assert_eq!(round.scores().total(), late + 5);
        assert_eq!(round.active_trump(), Some(lead.suit));
    }
}
