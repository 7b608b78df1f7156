use crate::model::mode::Mode;
use crate::model::player::Partnership;
use crate::model::tables::ROUND_POINT_MASS;
use serde::{Deserialize, Serialize};

/// Running point totals of the two partnerships within one round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    totals: [u32; 2],
}

impl ScoreBoard {
    pub const fn new() -> Self {
        Self { totals: [0; 2] }
    }

    pub fn add_points(&mut self, partnership: Partnership, points: u32) {
        self.totals[partnership.index()] += points;
    }

    pub fn score(&self, partnership: Partnership) -> u32 {
        self.totals[partnership.index()]
    }

    pub fn standings(&self) -> &[u32; 2] {
        &self.totals
    }

    pub fn total(&self) -> u32 {
        self.totals.iter().sum()
    }

    /// North/South's score as reported for `mode`.
    ///
    /// Misère rewards taking few points, so the raw total is mirrored against the full
    /// round mass.
    pub fn reported_score(&self, mode: Mode) -> u32 {
        let raw = self.score(Partnership::NorthSouth);
        if mode.is_inverted() {
            ROUND_POINT_MASS.saturating_sub(raw)
        } else {
            raw
        }
    }
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::ScoreBoard;
    use crate::model::mode::Mode;
    use crate::model::player::Partnership;
    use crate::model::suit::Suit;

    #[test]
    fn scoreboard_tracks_partnership_points() {
        let mut board = ScoreBoard::new();
        board.add_points(Partnership::EastWest, 31);
        board.add_points(Partnership::NorthSouth, 20);
        board.add_points(Partnership::EastWest, 4);
        assert_eq!(board.score(Partnership::EastWest), 35);
        assert_eq!(board.score(Partnership::NorthSouth), 20);
        assert_eq!(board.total(), 55);
    }

    #[test]
    fn misere_inverts_reported_score() {
        let mut board = ScoreBoard::new();
        board.add_points(Partnership::NorthSouth, 40);
        board.add_points(Partnership::EastWest, 117);
        assert_eq!(board.reported_score(Mode::Misere), 117);
        assert_eq!(board.reported_score(Mode::NoTrumpHigh), 40);
        assert_eq!(board.reported_score(Mode::TrumpLow(Suit::Hearts)), 40);
    }
}
