use crate::model::card::Card;
use crate::model::mode::Mode;
use crate::model::suit::Suit;

/// Cards from `hand` that may be played to a trick led with `led_suit`.
///
/// A leader may play anything. A follower must follow the led suit when able, otherwise
/// the whole hand is legal. The Jack of trump is exempt from following only when the led
/// suit is not trump; on a trump lead it is a trump like any other and must be played if
/// it is the only one held.
pub fn legal_plays(
    hand: &[Card],
    led_suit: Option<Suit>,
    mode: Mode,
    active_trump: Option<Suit>,
) -> Vec<Card> {
    let Some(led) = led_suit else {
        return hand.to_vec();
    };

    let exempt = mode
        .trump_suit(active_trump)
        .filter(|&trump| trump != led)
        .map(Card::trump_top);

    let following: Vec<Card> = hand
        .iter()
        .copied()
        .filter(|&card| card.suit == led && Some(card) != exempt)
        .collect();
    if following.is_empty() {
        return hand.to_vec();
    }

    following
}
