use crate::model::card::Card;
use crate::model::mode::Mode;
use crate::model::suit::Suit;

/// Point value of `card` under `mode`.
///
/// `active_trump` only matters for modes whose trump is chosen during play. A progressive
/// round scores every card as zero until its trump is fixed.
pub fn point_value(card: Card, mode: Mode, active_trump: Option<Suit>) -> u32 {
    let descriptor = mode.descriptor();
    let trump = descriptor.trump.resolve(active_trump);
    let tables = descriptor.points;
    if tables.void_without_trump && trump.is_none() {
        return 0;
    }
    let index = card.rank.index();
    if tables.all_suits_trump || trump == Some(card.suit) {
        tables.trump[index]
    } else {
        tables.side[index]
    }
}

pub fn trick_points<'a>(
    cards: impl IntoIterator<Item = &'a Card>,
    mode: Mode,
    active_trump: Option<Suit>,
) -> u32 {
    cards
        .into_iter()
        .map(|&card| point_value(card, mode, active_trump))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::{point_value, trick_points};
    use crate::model::card::Card;
    use crate::model::deck::Deck;
    use crate::model::mode::Mode;
    use crate::model::rank::Rank;
    use crate::model::suit::Suit;
    use crate::model::tables::CARD_POINT_MASS;

    #[test]
    fn deck_totals_152_in_every_mode_with_a_trump_known() {
        let deck = Deck::jass();
        for mode in Mode::ALL {
            let total = trick_points(deck.cards(), mode, Some(Suit::Hearts));
            assert_eq!(total, CARD_POINT_MASS, "{mode}");
        }
    }

    #[test]
    fn trump_high_values() {
        let mode = Mode::TrumpHigh(Suit::Spades);
        assert_eq!(point_value(Card::new(Rank::Jack, Suit::Spades), mode, None), 20);
        assert_eq!(point_value(Card::new(Rank::Nine, Suit::Spades), mode, None), 14);
        assert_eq!(point_value(Card::new(Rank::Jack, Suit::Hearts), mode, None), 2);
        assert_eq!(point_value(Card::new(Rank::Eight, Suit::Hearts), mode, None), 0);
    }

    #[test]
    fn trump_low_gives_six_the_eleven() {
        let mode = Mode::TrumpLow(Suit::Clubs);
        assert_eq!(point_value(Card::new(Rank::Six, Suit::Clubs), mode, None), 11);
        assert_eq!(point_value(Card::new(Rank::Ace, Suit::Clubs), mode, None), 0);
        assert_eq!(point_value(Card::new(Rank::Ace, Suit::Hearts), mode, None), 11);
    }

    #[test]
    fn no_trump_eight_counts() {
        for mode in [Mode::NoTrumpHigh, Mode::NoTrumpLow, Mode::Alternating, Mode::Misere] {
            assert_eq!(point_value(Card::new(Rank::Eight, Suit::Diamonds), mode, None), 8);
        }
    }

    #[test]
    fn all_trump_treats_every_suit_as_trump() {
        for suit in Suit::ALL {
            assert_eq!(point_value(Card::new(Rank::Jack, suit), Mode::AllTrump, None), 20);
            assert_eq!(point_value(Card::new(Rank::Ace, suit), Mode::AllTrump, None), 0);
        }
    }

    #[test]
    fn progressive_voids_points_before_trump() {
        let deck = Deck::jass();
        assert_eq!(trick_points(deck.cards(), Mode::Progressive, None), 0);
        let jack = Card::new(Rank::Jack, Suit::Diamonds);
        assert_eq!(point_value(jack, Mode::Progressive, Some(Suit::Diamonds)), 20);
        assert_eq!(point_value(jack, Mode::Progressive, Some(Suit::Clubs)), 2);
    }
}
