use super::{Policy, PolicyContext};
use jass_core::model::card::Card;
use jass_core::model::mode::Mode;
use jass_core::model::suit::Suit;
use jass_core::model::tables::{STRENGTH_HIGH, STRENGTH_TRUMP_HIGH, STRENGTH_TRUMP_LOW};
use jass_core::rules::{Strength, legal_plays, point_value, strength};
use rand::RngCore;
use rand::seq::SliceRandom;
use std::cmp::Reverse;
use tracing::{Level, event};

/// Lifts trump cards above every plain card when ranking leads.
const TRUMP_LEAD_OFFSET: u16 = 200;

/// Greedy playout policy for simulations.
///
/// Leads one of the strongest third of its legal cards at random. Follows with the
/// cheapest card that takes the trick, or otherwise sheds the card worth the fewest points.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicPolicy;

impl HeuristicPolicy {
    pub const fn new() -> Self {
        Self
    }
}

impl Policy for HeuristicPolicy {
    fn choose_play(&mut self, ctx: &PolicyContext<'_>, rng: &mut dyn RngCore) -> Option<Card> {
        let lead_suit = ctx.trick.lead_suit();
        let legal = legal_plays(ctx.hand.cards(), lead_suit, ctx.mode, ctx.active_trump);

        let (chosen, reason) = match lead_suit {
            None => (choose_lead(&legal, ctx.mode, rng)?, "lead_top_third"),
            Some(led) => choose_follow(&legal, led, ctx)?,
        };

        log_play_decision(ctx, &legal, chosen, reason);
        Some(chosen)
    }
}

/// Ranking key used when leading a trick in `mode`.
///
/// Only the fixed trump of a trump mode is lifted above the rest; every other card,
/// whatever the trick's ranking, is ranked by its plain high value.
pub fn lead_value(card: Card, mode: Mode) -> u16 {
    let index = card.rank.index();
    match mode {
        Mode::TrumpHigh(trump) if card.suit == trump => {
            TRUMP_LEAD_OFFSET + u16::from(STRENGTH_TRUMP_HIGH[index])
        }
        Mode::TrumpLow(trump) if card.suit == trump => {
            TRUMP_LEAD_OFFSET + u16::from(STRENGTH_TRUMP_LOW[index])
        }
        _ => u16::from(STRENGTH_HIGH[index]),
    }
}

fn choose_lead(legal: &[Card], mode: Mode, rng: &mut dyn RngCore) -> Option<Card> {
    let mut ranked = legal.to_vec();
    ranked.sort_by_key(|&card| Reverse(lead_value(card, mode)));
    let top = (ranked.len() / 3).max(1).min(ranked.len());
    ranked[..top].choose(rng).copied()
}

fn choose_follow(
    legal: &[Card],
    led: Suit,
    ctx: &PolicyContext<'_>,
) -> Option<(Card, &'static str)> {
    let key = |card: Card| strength(card, led, ctx.rules);
    let to_beat = ctx
        .trick
        .current_best(ctx.rules)
        .map(|play| key(play.card))
        .unwrap_or(Strength::OFF_SUIT);

    let cheapest_winner = legal
        .iter()
        .copied()
        .filter(|&card| key(card) > to_beat)
        .min_by_key(|&card| key(card));
    if let Some(card) = cheapest_winner {
        return Some((card, "cheapest_winner"));
    }

    legal
        .iter()
        .copied()
        .min_by_key(|&card| point_value(card, ctx.mode, ctx.active_trump))
        .map(|card| (card, "lowest_points"))
}

fn log_play_decision(ctx: &PolicyContext<'_>, legal: &[Card], chosen: Card, reason: &str) {
    if !tracing::enabled!(target: "jass_bot::play", Level::TRACE) {
        return;
    }

    let legal_preview = legal
        .iter()
        .map(|card| card.to_string())
        .collect::<Vec<_>>()
        .join(",");

    event!(
        target: "jass_bot::play",
        Level::TRACE,
        seat = %ctx.seat,
        mode = %ctx.mode,
        rules = ?ctx.rules,
        legal_count = legal.len(),
        legal = %legal_preview,
        chosen = %chosen,
        reason
    );
}
