use super::SimulationError;
use crate::policy::{HeuristicPolicy, Policy, PolicyContext};
use jass_core::model::hand::Hand;
use jass_core::model::mode::Mode;
use jass_core::model::player::{Partnership, PlayerPosition};
use jass_core::model::round::{PlayError, PlayOutcome, RoundState};
use rand::RngCore;
use serde::Serialize;
use tracing::{Level, event};

/// Result of one fully played round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundOutcome {
    pub mode: Mode,
    /// North/South's score as reported for the mode.
    pub reported_score: u32,
    /// Raw points per partnership, last-trick bonus included.
    pub partnership_points: [u32; 2],
    pub tricks: Vec<TrickSummary>,
}

impl RoundOutcome {
    pub fn raw_score(&self, partnership: Partnership) -> u32 {
        self.partnership_points[partnership.index()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TrickSummary {
    pub number: usize,
    pub leader: PlayerPosition,
    pub winner: PlayerPosition,
    pub points: u32,
}

/// Plays `hands` to completion with the greedy heuristic in every seat.
pub fn simulate_round<R: RngCore>(
    hands: [Hand; 4],
    mode: Mode,
    rng: &mut R,
) -> Result<RoundOutcome, SimulationError> {
    let mut policies = [HeuristicPolicy::new(); 4];
    simulate_round_with(hands, mode, &mut policies, rng)
}

/// Plays `hands` to completion, asking `policies[seat]` for every card.
pub fn simulate_round_with<P: Policy, R: RngCore>(
    hands: [Hand; 4],
    mode: Mode,
    policies: &mut [P; 4],
    rng: &mut R,
) -> Result<RoundOutcome, SimulationError> {
    let mut round = RoundState::new(hands, mode)?;

    while let Some(seat) = round.expected_to_play() {
        let ctx = PolicyContext::from_round(&round, seat);
        let card = policies[seat.index()]
            .choose_play(&ctx, rng)
            .ok_or(SimulationError::NoLegalPlay { seat })?;

        match round.play_card(seat, card)? {
            PlayOutcome::Played => {}
            PlayOutcome::TrickCompleted { winner, points } => {
                event!(
                    target: "jass_bot::round",
                    Level::DEBUG,
                    %mode,
                    trick = round.tricks_completed(),
                    %winner,
                    points,
                    "trick completed"
                );
            }
            PlayOutcome::RoundCompleted {
                winner,
                points,
                score,
            } => {
                event!(
                    target: "jass_bot::round",
                    Level::DEBUG,
                    %mode,
                    %winner,
                    points,
                    score,
                    "round completed"
                );
            }
        }
    }

    let reported_score = round
        .reported_score()
        .ok_or(SimulationError::Play(PlayError::UnresolvedTrick))?;
    let tricks = round
        .trick_history()
        .iter()
        .map(|completed| TrickSummary {
            number: completed.number,
            leader: completed.trick.leader(),
            winner: completed.winner,
            points: completed.points,
        })
        .collect();

    Ok(RoundOutcome {
        mode,
        reported_score,
        partnership_points: *round.scores().standings(),
        tricks,
    })
}
