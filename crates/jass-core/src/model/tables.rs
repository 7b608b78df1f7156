//! Fixed point and strength tables, indexed by [`Rank::index`](crate::model::rank::Rank::index)
//! (6, 7, 8, 9, 10, J, Q, K, A).

/// Plain suit in a trump round.
pub const POINTS_SIDE: [u32; 9] = [0, 0, 0, 0, 10, 2, 3, 4, 11];
/// Trump suit, high ordering: Nine 14, Jack 20.
pub const POINTS_TRUMP_HIGH: [u32; 9] = [0, 0, 0, 14, 10, 20, 3, 4, 11];
/// Trump suit, low ordering: Six takes the Ace's 11.
pub const POINTS_TRUMP_LOW: [u32; 9] = [11, 0, 0, 14, 10, 20, 3, 4, 0];
/// Every suit without trump: Eight counts 8.
pub const POINTS_NO_TRUMP: [u32; 9] = [0, 0, 8, 0, 10, 2, 3, 4, 11];
/// Every suit when all suits are trump.
pub const POINTS_ALL_TRUMP: [u32; 9] = [0, 0, 0, 14, 0, 20, 0, 4, 0];

pub const STRENGTH_HIGH: [u8; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];
pub const STRENGTH_LOW: [u8; 9] = [8, 7, 6, 5, 4, 3, 2, 1, 0];
/// J > 9 > A > 10 > K > Q > 8 > 7 > 6
pub const STRENGTH_TRUMP_HIGH: [u8; 9] = [0, 1, 2, 7, 5, 8, 3, 4, 6];
/// J > 9 > 6 > 10 > K > Q > 8 > 7 > A
pub const STRENGTH_TRUMP_LOW: [u8; 9] = [6, 1, 2, 7, 5, 8, 3, 4, 0];

/// Card points in play per round, independent of mode.
pub const CARD_POINT_MASS: u32 = 152;
/// Awarded to the partnership taking the ninth trick.
pub const LAST_TRICK_BONUS: u32 = 5;
/// Card points plus the last-trick bonus.
pub const ROUND_POINT_MASS: u32 = CARD_POINT_MASS + LAST_TRICK_BONUS;
