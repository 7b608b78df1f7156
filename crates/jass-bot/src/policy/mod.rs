mod heuristic;

pub use heuristic::{HeuristicPolicy, lead_value};

use jass_core::model::card::Card;
use jass_core::model::hand::Hand;
use jass_core::model::mode::{Mode, TrickRules};
use jass_core::model::player::PlayerPosition;
use jass_core::model::round::RoundState;
use jass_core::model::suit::Suit;
use jass_core::model::trick::Trick;
use rand::RngCore;

/// Context provided to policies for decision-making
#[derive(Debug, Clone, Copy)]
pub struct PolicyContext<'a> {
    pub seat: PlayerPosition,
    pub hand: &'a Hand,
    pub mode: Mode,
    /// Ruleset of the trick being played.
    pub rules: TrickRules,
    pub active_trump: Option<Suit>,
    pub trick: &'a Trick,
}

impl<'a> PolicyContext<'a> {
    pub fn from_round(round: &'a RoundState, seat: PlayerPosition) -> Self {
        Self {
            seat,
            hand: round.hand(seat),
            mode: round.mode(),
            rules: round.trick_rules(),
            active_trump: round.active_trump(),
            trick: round.current_trick(),
        }
    }
}

/// Chooses the card a seat plays during simulated rounds.
pub trait Policy: Send {
    /// Returns `None` only when the hand holds no legal card.
    fn choose_play(&mut self, ctx: &PolicyContext<'_>, rng: &mut dyn RngCore) -> Option<Card>;
}
