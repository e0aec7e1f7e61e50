use serde::{Deserialize, Serialize};

use crate::domain::outcome::RoundOutcome;
use crate::domain::{BetTier, RoundId};
use crate::engine::history::RoundHistory;

/// Фазы раунда. После Result снова Betting (новый раунд).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RoundPhase {
    Betting,
    Dealing,
    Playing,
    Resolving,
    Result,
}

/// Состояние одного раунда. Принадлежит только активному раунду;
/// на "играть снова" создаётся новый.
#[derive(Clone, Debug)]
pub struct RoundSession<S> {
    pub round_id: RoundId,
    pub tier: BetTier,
    pub phase: RoundPhase,
    pub state: S,
    pub forced: bool,
    /// Заполняется ровно один раз, дальше не меняется.
    pub outcome: Option<RoundOutcome>,
    /// Выплата по `outcome` проведена леджером (или не требовалась).
    pub settled: bool,
    pub history: RoundHistory,
}

impl<S> RoundSession<S> {
    pub fn new(round_id: RoundId, tier: BetTier, state: S, forced: bool, history: RoundHistory) -> Self {
        Self {
            round_id,
            tier,
            phase: RoundPhase::Dealing,
            state,
            forced,
            outcome: None,
            settled: false,
            history,
        }
    }

    /// Итог есть, а выплата не прошла.
    pub fn awaiting_settlement(&self) -> bool {
        self.outcome.is_some() && !self.settled
    }
}
