//! The fourteen rulesets and their static descriptors.
//!
//! Every mode maps to one [`ModeDescriptor`]: where its trump comes from, which point
//! tables score its cards, how the ranking changes from trick to trick, and whether the
//! final score is inverted. Scoring, ranking and legality look the descriptor up instead of
//! branching on the mode.

use crate::model::suit::Suit;
use crate::model::tables::{
    POINTS_ALL_TRUMP, POINTS_NO_TRUMP, POINTS_SIDE, POINTS_TRUMP_HIGH, POINTS_TRUMP_LOW,
    STRENGTH_HIGH, STRENGTH_LOW, STRENGTH_TRUMP_HIGH, STRENGTH_TRUMP_LOW,
};
use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Trick in which the first card led fixes the trump of a progressive round.
pub const PROGRESSIVE_TRUMP_TRICK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum Mode {
    /// Trump suit ranked J 9 A 10 K Q 8 7 6, plain suits high.
    TrumpHigh(Suit),
    /// Trump suit ranked J 9 6 10 K Q 8 7 A, plain suits low.
    TrumpLow(Suit),
    NoTrumpHigh,
    NoTrumpLow,
    /// No trump; odd tricks rank high, even tricks rank low.
    Alternating,
    /// No trump ranked high; partnership 0 is rewarded for taking few points.
    Misere,
    AllTrump,
    /// High for tricks 1-3, low for 4-6, then trump chosen by the lead of trick 7.
    /// Points from the first six tricks are void.
    Progressive,
}

impl Mode {
    pub const COUNT: usize = 14;

    pub const ALL: [Mode; Mode::COUNT] = [
        Mode::TrumpHigh(Suit::Clubs),
        Mode::TrumpHigh(Suit::Diamonds),
        Mode::TrumpHigh(Suit::Spades),
        Mode::TrumpHigh(Suit::Hearts),
        Mode::TrumpLow(Suit::Clubs),
        Mode::TrumpLow(Suit::Diamonds),
        Mode::TrumpLow(Suit::Spades),
        Mode::TrumpLow(Suit::Hearts),
        Mode::NoTrumpHigh,
        Mode::NoTrumpLow,
        Mode::Alternating,
        Mode::Misere,
        Mode::AllTrump,
        Mode::Progressive,
    ];

    pub const fn index(self) -> usize {
        match self {
            Mode::TrumpHigh(suit) => suit.index(),
            Mode::TrumpLow(suit) => 4 + suit.index(),
            Mode::NoTrumpHigh => 8,
            Mode::NoTrumpLow => 9,
            Mode::Alternating => 10,
            Mode::Misere => 11,
            Mode::AllTrump => 12,
            Mode::Progressive => 13,
        }
    }

    pub const fn from_index(index: usize) -> Option<Self> {
        if index < Self::COUNT {
            Some(Self::ALL[index])
        } else {
            None
        }
    }

    pub fn name(self) -> String {
        match self {
            Mode::TrumpHigh(suit) => format!("trump_high_{}", suit.name()),
            Mode::TrumpLow(suit) => format!("trump_low_{}", suit.name()),
            Mode::NoTrumpHigh => "no_trump_high".to_string(),
            Mode::NoTrumpLow => "no_trump_low".to_string(),
            Mode::Alternating => "alternating".to_string(),
            Mode::Misere => "misere".to_string(),
            Mode::AllTrump => "all_trump".to_string(),
            Mode::Progressive => "progressive".to_string(),
        }
    }

    pub const fn descriptor(self) -> ModeDescriptor {
        match self {
            Mode::TrumpHigh(suit) => ModeDescriptor {
                trump: TrumpSource::Fixed(suit),
                points: PointTables::trumped(&POINTS_TRUMP_HIGH),
                phases: PhasePlan::Constant(TrickRules::Trump {
                    suit,
                    order: Order::High,
                }),
                inverted: false,
            },
            Mode::TrumpLow(suit) => ModeDescriptor {
                trump: TrumpSource::Fixed(suit),
                points: PointTables::trumped(&POINTS_TRUMP_LOW),
                phases: PhasePlan::Constant(TrickRules::Trump {
                    suit,
                    order: Order::Low,
                }),
                inverted: false,
            },
            Mode::NoTrumpHigh => ModeDescriptor::no_trump(PhasePlan::Constant(
                TrickRules::NoTrump(Order::High),
            )),
            Mode::NoTrumpLow => {
                ModeDescriptor::no_trump(PhasePlan::Constant(TrickRules::NoTrump(Order::Low)))
            }
            Mode::Alternating => ModeDescriptor::no_trump(PhasePlan::Alternating {
                odd: Order::High,
                even: Order::Low,
            }),
            Mode::Misere => ModeDescriptor {
                inverted: true,
                ..ModeDescriptor::no_trump(PhasePlan::Constant(TrickRules::NoTrump(Order::High)))
            },
            Mode::AllTrump => ModeDescriptor {
                trump: TrumpSource::Absent,
                points: PointTables {
                    trump: &POINTS_ALL_TRUMP,
                    side: &POINTS_ALL_TRUMP,
                    all_suits_trump: true,
                    void_without_trump: false,
                },
                phases: PhasePlan::Constant(TrickRules::AllTrump),
                inverted: false,
            },
            Mode::Progressive => ModeDescriptor {
                trump: TrumpSource::Dynamic,
                points: PointTables {
                    void_without_trump: true,
                    ..PointTables::trumped(&POINTS_TRUMP_HIGH)
                },
                phases: PhasePlan::Progressive {
                    high_through: 3,
                    low_through: 6,
                    trump_from: PROGRESSIVE_TRUMP_TRICK,
                },
                inverted: false,
            },
        }
    }

    /// Trump suit governing follow-suit and scoring, given the dynamically fixed trump.
    pub const fn trump_suit(self, active_trump: Option<Suit>) -> Option<Suit> {
        self.descriptor().trump.resolve(active_trump)
    }

    /// Effective ruleset for the 1-based `trick_number`.
    pub const fn trick_rules(self, trick_number: usize, active_trump: Option<Suit>) -> TrickRules {
        self.descriptor()
            .phases
            .rules_for(trick_number, self.trump_suit(active_trump))
    }

    /// Whether the first card led in `trick_number` fixes the trump suit.
    pub const fn fixes_trump_on(self, trick_number: usize) -> bool {
        match self.descriptor().phases {
            PhasePlan::Progressive { trump_from, .. } => trick_number == trump_from,
            _ => false,
        }
    }

    pub const fn is_inverted(self) -> bool {
        self.descriptor().inverted
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModeError {
    #[error("mode index {0} is out of range (expected 0..14)")]
    IndexOutOfRange(usize),
    #[error("unknown mode identifier {0:?}")]
    UnknownName(String),
}

impl TryFrom<u8> for Mode {
    type Error = ModeError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Mode::from_index(value as usize).ok_or(ModeError::IndexOutOfRange(value as usize))
    }
}

impl FromStr for Mode {
    type Err = ModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Mode::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == normalized)
            .ok_or_else(|| ModeError::UnknownName(s.to_string()))
    }
}

impl From<Mode> for String {
    fn from(mode: Mode) -> Self {
        mode.name()
    }
}

impl TryFrom<String> for Mode {
    type Error = ModeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Static description of a mode's rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeDescriptor {
    pub trump: TrumpSource,
    pub points: PointTables,
    pub phases: PhasePlan,
    pub inverted: bool,
}

impl ModeDescriptor {
    const fn no_trump(phases: PhasePlan) -> Self {
        Self {
            trump: TrumpSource::Absent,
            points: PointTables {
                trump: &POINTS_NO_TRUMP,
                side: &POINTS_NO_TRUMP,
                all_suits_trump: false,
                void_without_trump: false,
            },
            phases,
            inverted: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrumpSource {
    Fixed(Suit),
    /// No single trump suit for the whole round.
    Absent,
    /// Chosen during play; see [`Mode::fixes_trump_on`].
    Dynamic,
}

impl TrumpSource {
    pub const fn resolve(self, active_trump: Option<Suit>) -> Option<Suit> {
        match self {
            TrumpSource::Fixed(suit) => Some(suit),
            TrumpSource::Absent => None,
            TrumpSource::Dynamic => active_trump,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointTables {
    pub trump: &'static [u32; 9],
    pub side: &'static [u32; 9],
    pub all_suits_trump: bool,
    /// Cards score nothing until a trump suit is established.
    pub void_without_trump: bool,
}

impl PointTables {
    const fn trumped(trump: &'static [u32; 9]) -> Self {
        Self {
            trump,
            side: &POINTS_SIDE,
            all_suits_trump: false,
            void_without_trump: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Order {
    High,
    Low,
}

/// The ranking system in force for a single trick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrickRules {
    Trump { suit: Suit, order: Order },
    NoTrump(Order),
    /// The led suit ranks with the trump ordering; nothing else can win.
    AllTrump,
}

impl TrickRules {
    pub const fn trump(self) -> Option<Suit> {
        match self {
            TrickRules::Trump { suit, .. } => Some(suit),
            TrickRules::NoTrump(_) | TrickRules::AllTrump => None,
        }
    }

    /// Strength table for trump cards, if this trick has a trump suit.
    pub const fn trump_table(self) -> Option<&'static [u8; 9]> {
        match self {
            TrickRules::Trump {
                order: Order::High, ..
            } => Some(&STRENGTH_TRUMP_HIGH),
            TrickRules::Trump {
                order: Order::Low, ..
            } => Some(&STRENGTH_TRUMP_LOW),
            TrickRules::NoTrump(_) | TrickRules::AllTrump => None,
        }
    }

    /// Strength table for cards of the led suit that are not trump.
    pub const fn led_table(self) -> &'static [u8; 9] {
        match self {
            TrickRules::Trump {
                order: Order::High, ..
            }
            | TrickRules::NoTrump(Order::High) => &STRENGTH_HIGH,
            TrickRules::Trump {
                order: Order::Low, ..
            }
            | TrickRules::NoTrump(Order::Low) => &STRENGTH_LOW,
            TrickRules::AllTrump => &STRENGTH_TRUMP_HIGH,
        }
    }
}

/// Selects the effective [`TrickRules`] for each trick of a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhasePlan {
    Constant(TrickRules),
    Alternating { odd: Order, even: Order },
    Progressive {
        high_through: usize,
        low_through: usize,
        trump_from: usize,
    },
}

impl PhasePlan {
    pub const fn rules_for(self, trick_number: usize, trump: Option<Suit>) -> TrickRules {
        match self {
            PhasePlan::Constant(rules) => rules,
            PhasePlan::Alternating { odd, even } => {
                if trick_number % 2 == 1 {
                    TrickRules::NoTrump(odd)
                } else {
                    TrickRules::NoTrump(even)
                }
            }
            PhasePlan::Progressive {
                high_through,
                low_through,
                trump_from,
            } => {
                if trick_number <= high_through {
                    TrickRules::NoTrump(Order::High)
                } else if trick_number <= low_through {
                    TrickRules::NoTrump(Order::Low)
                } else {
                    match trump {
                        Some(suit) if trick_number >= trump_from => TrickRules::Trump {
                            suit,
                            order: Order::High,
                        },
                        _ => TrickRules::NoTrump(Order::High),
                    }
                }
            }
        }
    }
}
