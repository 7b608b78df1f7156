use crate::model::card::Card;
use crate::model::mode::TrickRules;
use crate::model::suit::Suit;
use crate::model::trick::Play;

/// Comparable trick strength: tier first, then rank within the tier.
///
/// Tier 2 is trump, tier 1 the led suit, tier 0 anything else (never wins).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Strength {
    pub tier: u8,
    pub rank: u8,
}

impl Strength {
    pub const OFF_SUIT: Strength = Strength { tier: 0, rank: 0 };

    pub const fn is_trump(self) -> bool {
        self.tier == 2
    }
}

pub fn strength(card: Card, led_suit: Suit, rules: TrickRules) -> Strength {
    let index = card.rank.index();
    if let (Some(trump), Some(table)) = (rules.trump(), rules.trump_table()) {
        if card.suit == trump {
            return Strength {
                tier: 2,
                rank: table[index],
            };
        }
    }
    if card.suit == led_suit {
        return Strength {
            tier: 1,
            rank: rules.led_table()[index],
        };
    }
    Strength::OFF_SUIT
}

/// Index of the winning card among `cards` in play order.
///
/// Only a strictly stronger card replaces the running best, so the earlier play wins a tie.
pub fn resolve_trick(cards: &[Card], led_suit: Suit, rules: TrickRules) -> Option<usize> {
    cards
        .iter()
        .enumerate()
        .fold(None, |best: Option<(usize, Strength)>, (index, &card)| {
            let key = strength(card, led_suit, rules);
            match best {
                Some((_, best_key)) if best_key >= key => best,
                _ => Some((index, key)),
            }
        })
        .map(|(index, _)| index)
}

/// Winning play among seat-tagged plays; the physical order of `plays` is irrelevant.
pub fn winning_play(plays: &[Play], led_suit: Suit, rules: TrickRules) -> Option<Play> {
    plays
        .iter()
        .copied()
        .max_by_key(|play| strength(play.card, led_suit, rules))
}
