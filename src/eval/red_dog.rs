use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::outcome::OutcomeKind;

/// Уровень выплаты по спреду.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum SpreadTier {
    /// Спред 0, "последовательные" карты.
    Consecutive,
    One,
    Two,
    /// Спред 3 и больше.
    Wide,
}

impl SpreadTier {
    pub fn from_spread(spread: u8) -> Self {
        match spread {
            0 => SpreadTier::Consecutive,
            1 => SpreadTier::One,
            2 => SpreadTier::Two,
            _ => SpreadTier::Wide,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SpreadTier::Consecutive => "Consecutive",
            SpreadTier::One => "Spread 1",
            SpreadTier::Two => "Spread 2",
            SpreadTier::Wide => "Spread 3+",
        }
    }
}

/// `|v1 - v2| - 1` при тузе = 14. `None` для карт одного ранга.
pub fn spread(first: Card, second: Card) -> Option<u8> {
    first.high_value().abs_diff(second.high_value()).checked_sub(1)
}

/// Третья карта: строго между первыми двумя → выигрыш, совпала с одной из них → push.
pub fn judge_third(first: Card, second: Card, third: Card) -> OutcomeKind {
    let lo = first.high_value().min(second.high_value());
    let hi = first.high_value().max(second.high_value());
    let v = third.high_value();
    if v == lo || v == hi {
        OutcomeKind::Tie
    } else if lo < v && v < hi {
        OutcomeKind::Win
    } else {
        OutcomeKind::Lose
    }
}
