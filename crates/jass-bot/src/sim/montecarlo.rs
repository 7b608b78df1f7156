use super::{SimulationError, simulate_round};
use crate::config::{EvaluationConfig, ValidationError};
use jass_core::model::card::DECK_SIZE;
use jass_core::model::deck::Deck;
use jass_core::model::hand::Hand;
use jass_core::model::mode::Mode;
use jass_core::model::player::PlayerPosition;
use jass_core::model::round::{DealError, HAND_SIZE};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::array;
use tracing::{Level, event};

/// Completes a deal around North's `fixed_hand`.
///
/// The 27 remaining cards are shuffled with `rng` and handed out in consecutive blocks
/// of nine to East, South and West.
pub fn deal_opponents<R: Rng + ?Sized>(
    fixed_hand: &Hand,
    rng: &mut R,
) -> Result<[Hand; 4], SimulationError> {
    validate_fixed_hand(fixed_hand)?;

    let mut rest = Deck::without(fixed_hand.cards());
    rest.shuffle_in_place(rng);
    let cards = rest.cards();

    Ok(array::from_fn(|seat| {
        if seat == PlayerPosition::North.index() {
            fixed_hand.clone()
        } else {
            let start = (seat - 1) * HAND_SIZE;
            Hand::with_cards(cards[start..start + HAND_SIZE].to_vec())
        }
    }))
}

fn validate_fixed_hand(hand: &Hand) -> Result<(), DealError> {
    if hand.len() != HAND_SIZE {
        return Err(DealError::HandSize {
            seat: PlayerPosition::North,
            found: hand.len(),
        });
    }
    let mut seen = [false; DECK_SIZE];
    for &card in hand.iter() {
        let slot = &mut seen[card.id() as usize];
        if *slot {
            return Err(DealError::DuplicateCard(card));
        }
        *slot = true;
    }
    Ok(())
}

fn run_trial<R: Rng>(hand: &Hand, mode: Mode, rng: &mut R) -> Result<u32, SimulationError> {
    let hands = deal_opponents(hand, rng)?;
    Ok(simulate_round(hands, mode, rng)?.reported_score)
}

fn mean(total: u64, trials: usize) -> f64 {
    total as f64 / trials as f64
}

/// Mean reported North/South score of `trials` random completions of `hand` under `mode`.
///
/// All trials draw from the single generator `rng`, one after the other.
pub fn estimate_expected_score<R: Rng>(
    hand: &Hand,
    mode: Mode,
    trials: usize,
    rng: &mut R,
) -> Result<f64, SimulationError> {
    if trials == 0 {
        return Err(SimulationError::NoTrials);
    }
    validate_fixed_hand(hand)?;

    let mut total = 0u64;
    for _ in 0..trials {
        total += u64::from(run_trial(hand, mode, rng)?);
    }
    let estimate = mean(total, trials);

    event!(
        target: "jass_bot::eval",
        Level::DEBUG,
        %mode,
        trials,
        estimate,
        "expected score estimated"
    );
    Ok(estimate)
}

/// Estimates driven by an [`EvaluationConfig`].
///
/// Trial `i` seeds its own `SmallRng` from `seed + i`, so every mode sees the same
/// opponent deals and parallel runs match sequential ones exactly.
#[derive(Debug, Clone)]
pub struct Evaluator {
    config: EvaluationConfig,
}

impl Evaluator {
    pub fn new(mut config: EvaluationConfig) -> Result<Self, ValidationError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvaluationConfig {
        &self.config
    }

    pub fn estimate(&self, hand: &Hand, mode: Mode) -> Result<f64, SimulationError> {
        validate_fixed_hand(hand)?;
        let trials = self.config.trials;
        let seed = self.config.seed;
        let trial = |i: usize| {
            let mut rng = SmallRng::seed_from_u64(seed.wrapping_add(i as u64));
            run_trial(hand, mode, &mut rng).map(u64::from)
        };

        let total: u64 = if self.config.parallel {
            (0..trials)
                .into_par_iter()
                .map(trial)
                .collect::<Result<Vec<u64>, _>>()?
                .into_iter()
                .sum()
        } else {
            (0..trials).map(trial).sum::<Result<u64, _>>()?
        };
        let estimate = mean(total, trials);

        event!(
            target: "jass_bot::eval",
            Level::DEBUG,
            %mode,
            trials,
            seed,
            parallel = self.config.parallel,
            estimate,
            "expected score estimated"
        );
        Ok(estimate)
    }

    /// Estimates every mode in [`Mode::ALL`] order.
    pub fn estimate_all_modes(&self, hand: &Hand) -> Result<ModeEstimates, SimulationError> {
        let mut scores = [0.0; Mode::COUNT];
        for mode in Mode::ALL {
            scores[mode.index()] = self.estimate(hand, mode)?;
        }
        let estimates = ModeEstimates { scores };
        if let Some((best, score)) = estimates.best_mode() {
            event!(
                target: "jass_bot::eval",
                Level::INFO,
                best = %best,
                score,
                "mode estimates complete"
            );
        }
        Ok(estimates)
    }
}

/// Expected score per mode, indexed like [`Mode::ALL`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModeEstimates {
    scores: [f64; Mode::COUNT],
}

impl ModeEstimates {
    pub fn get(&self, mode: Mode) -> f64 {
        self.scores[mode.index()]
    }

    pub fn as_array(&self) -> &[f64; Mode::COUNT] {
        &self.scores
    }

    pub fn iter(&self) -> impl Iterator<Item = (Mode, f64)> + '_ {
        Mode::ALL.into_iter().map(|mode| (mode, self.get(mode)))
    }

    /// Highest-scoring mode; the earlier mode wins ties.
    pub fn best_mode(&self) -> Option<(Mode, f64)> {
        self.iter()
            .fold(None, |best: Option<(Mode, f64)>, (mode, score)| match best {
                Some((_, top)) if top >= score => best,
                _ => Some((mode, score)),
            })
    }
}

impl Serialize for ModeEstimates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Mode::COUNT))?;
        for (mode, score) in self.iter() {
            map.serialize_entry(&mode.name(), &score)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::{Evaluator, ModeEstimates, deal_opponents};
    use crate::config::EvaluationConfig;
    use crate::sim::SimulationError;
    use jass_core::model::card::Card;
    use jass_core::model::hand::Hand;
    use jass_core::model::mode::Mode;
    use jass_core::model::round::DealError;
    use jass_core::model::suit::Suit;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn hand(text: &[&str]) -> Hand {
        text.iter().map(|c| c.parse::<Card>().unwrap()).collect()
    }

    fn sample_hand() -> Hand {
        hand(&["AC", "KC", "JH", "9H", "AH", "10D", "7D", "QS", "6S"])
    }

    #[test]
    fn opponents_receive_the_complement() {
        let fixed = sample_hand();
        let mut rng = StdRng::seed_from_u64(5);
        let hands = deal_opponents(&fixed, &mut rng).unwrap();
        assert_eq!(hands[0], fixed);
        let mut all: Vec<Card> = hands.iter().flat_map(|h| h.cards().to_vec()).collect();
        assert_eq!(all.len(), 36);
        all.sort_by_key(|card| card.id());
        all.dedup();
        assert_eq!(all.len(), 36);
        assert!(hands.iter().all(|h| h.len() == 9));
    }

    #[test]
    fn short_hand_is_rejected() {
        let fixed = hand(&["AC", "KC"]);
        let mut rng = StdRng::seed_from_u64(0);
        let err = deal_opponents(&fixed, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Deal(DealError::HandSize { found: 2, .. })
        ));
    }

    #[test]
    fn duplicate_card_is_rejected() {
        let fixed = hand(&["AC", "AC", "JH", "9H", "AH", "10D", "7D", "QS", "6S"]);
        let evaluator = Evaluator::new(EvaluationConfig::default()).unwrap();
        let err = evaluator
            .estimate(&fixed, Mode::TrumpHigh(Suit::Hearts))
            .unwrap_err();
        assert_eq!(
            err,
            SimulationError::Deal(DealError::DuplicateCard("AC".parse().unwrap()))
        );
    }

    #[test]
    fn evaluator_rejects_zero_trials() {
        let config = EvaluationConfig {
            trials: 0,
            ..EvaluationConfig::default()
        };
        assert!(Evaluator::new(config).is_err());
    }

    #[test]
    fn best_mode_prefers_earliest_on_ties() {
        let mut scores = [10.0; Mode::COUNT];
        scores[Mode::AllTrump.index()] = 90.0;
        scores[Mode::Misere.index()] = 90.0;
        let estimates = ModeEstimates { scores };
        assert_eq!(estimates.best_mode(), Some((Mode::Misere, 90.0)));
        assert_eq!(estimates.get(Mode::NoTrumpLow), 10.0);
    }

    #[test]
    fn estimates_serialize_by_mode_name() {
        let mut scores = [0.0; Mode::COUNT];
        scores[Mode::TrumpHigh(Suit::Hearts).index()] = 101.5;
        let json = serde_json::to_value(ModeEstimates { scores }).unwrap();
        let map = json.as_object().unwrap();
        assert_eq!(map.len(), Mode::COUNT);
        assert_eq!(map["trump_high_hearts"], 101.5);
        assert_eq!(map["progressive"], 0.0);
    }
}
