use serde::{Deserialize, Serialize};

use crate::domain::currency::{Coins, Reward};
use crate::domain::outcome::OutcomeKind;
use crate::domain::{GameKind, RoundId};
use crate::engine::actions::Decision;
use crate::engine::session::RoundPhase;

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Ставка принята и списана.
    BetPlaced {
        game: GameKind,
        round_id: RoundId,
        stake: Coins,
    },

    /// Раздача/бросок выполнены.
    Dealt { forced: bool },

    /// Игрок принял решение.
    DecisionApplied { decision: Decision },

    PhaseChanged { phase: RoundPhase },

    /// Итог раунда зафиксирован (единожды).
    OutcomeFinalized { kind: OutcomeKind, reward: Reward },

    /// Выплата проведена через леджер.
    Settled { reward: Reward },

    /// Леджер не принял выплату — итог сохранён, выплата будет повторена.
    SettlementFailed { reason: String },
}

/// Событие с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда (аудит/реплей).
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// Сколько раз в истории встречается событие, подходящее под предикат.
    pub fn count(&self, pred: impl Fn(&RoundEventKind) -> bool) -> usize {
        self.events.iter().filter(|e| pred(&e.kind)).count()
    }
}
