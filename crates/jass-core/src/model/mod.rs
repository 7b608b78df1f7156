//! Cards, seats, modes and the round state machine.

pub mod card;
pub mod deck;
pub mod hand;
pub mod mode;
pub mod player;
pub mod rank;
pub mod round;
pub mod score;
pub mod suit;
pub mod tables;
pub mod trick;
