mod montecarlo;
mod round;

pub use montecarlo::{Evaluator, ModeEstimates, deal_opponents, estimate_expected_score};
pub use round::{RoundOutcome, TrickSummary, simulate_round, simulate_round_with};

use jass_core::model::player::PlayerPosition;
use jass_core::model::round::{DealError, PlayError};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimulationError {
    #[error("invalid deal: {0}")]
    Deal(#[from] DealError),
    #[error("illegal play: {0}")]
    Play(#[from] PlayError),
    #[error("policy for {seat} returned no card")]
    NoLegalPlay { seat: PlayerPosition },
    #[error("at least one trial is required")]
    NoTrials,
}
