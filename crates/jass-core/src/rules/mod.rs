//! Card evaluation under a mode: points, trick strength and follow-suit legality.
//!
//! - `points`: card and trick point values, including voided phases.
//! - `strength`: comparable strength keys and trick resolution.
//! - `legality`: the follow-suit rule, with the trump Jack exempt on plain leads.

mod legality;
mod points;
mod strength;

pub use legality::legal_plays;
pub use points::{point_value, trick_points};
pub use strength::{Strength, resolve_trick, strength, winning_play};
