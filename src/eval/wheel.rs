//! Денежное колесо: 8 секторов с фиксированными весами.

use crate::domain::outcome::OutcomeKind;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WheelSection {
    pub label: &'static str,
    /// Вероятность сектора. Сумма по всем секторам ровно 1.0.
    pub weight: f64,
    pub kind: OutcomeKind,
    /// Множитель билетов к ставке.
    pub ticket_mult: f64,
    /// Множитель монет к ставке (0 для не-выигрышей).
    pub coin_mult: f64,
}

impl WheelSection {
    pub fn is_win(&self) -> bool {
        self.kind.is_win()
    }
}

pub const WHEEL_SECTIONS: [WheelSection; 8] = [
    WheelSection {
        label: "Jackpot",
        weight: 0.005,
        kind: OutcomeKind::Win,
        ticket_mult: 10.0,
        coin_mult: 5.0,
    },
    WheelSection {
        label: "Big win",
        weight: 0.015,
        kind: OutcomeKind::Win,
        ticket_mult: 5.0,
        coin_mult: 2.0,
    },
    WheelSection {
        label: "Win",
        weight: 0.03,
        kind: OutcomeKind::Win,
        ticket_mult: 2.0,
        coin_mult: 1.0,
    },
    WheelSection {
        label: "Push",
        weight: 0.15,
        kind: OutcomeKind::Tie,
        ticket_mult: 1.0,
        coin_mult: 0.0,
    },
    WheelSection {
        label: "Half back",
        weight: 0.2,
        kind: OutcomeKind::PartialLoss,
        ticket_mult: 0.5,
        coin_mult: 0.0,
    },
    WheelSection {
        label: "Quarter back",
        weight: 0.2,
        kind: OutcomeKind::PartialLoss,
        ticket_mult: 0.25,
        coin_mult: 0.0,
    },
    WheelSection {
        label: "Tenth back",
        weight: 0.2,
        kind: OutcomeKind::PartialLoss,
        ticket_mult: 0.1,
        coin_mult: 0.0,
    },
    WheelSection {
        label: "Bust",
        weight: 0.2,
        kind: OutcomeKind::Lose,
        ticket_mult: 0.0,
        coin_mult: 0.0,
    },
];

/// Веса всех секторов по порядку.
pub fn section_weights() -> [f64; 8] {
    WHEEL_SECTIONS.map(|s| s.weight)
}

/// Веса только выигрышных секторов (остальные = 0), нормированные к 1.
pub fn winning_weights() -> [f64; 8] {
    let total: f64 = WHEEL_SECTIONS.iter().filter(|s| s.is_win()).map(|s| s.weight).sum();
    WHEEL_SECTIONS.map(|s| if s.is_win() { s.weight / total } else { 0.0 })
}
