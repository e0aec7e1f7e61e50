use serde::{Deserialize, Serialize};

use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::{GameKind, RoundId};
use crate::engine::session::RoundPhase;

/// DTO итога раунда.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutcomeDto {
    pub round_id: RoundId,
    pub game: GameKind,
    pub kind: OutcomeKind,
    pub label: String,
    pub stake: u64,
    pub tickets: u64,
    pub coins: u64,
    pub stake_returned: bool,
    pub hands: HandReport,
}

/// Снапшот для отрисовки: итог + серия.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SnapshotDto {
    pub outcome: OutcomeDto,
    pub consecutive_wins: u32,
    pub bonus_eligible: bool,
}

impl SnapshotDto {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Состояние стола для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct TableViewDto {
    pub game: GameKind,
    pub phase: RoundPhase,
    pub tiers: Vec<u64>,
    pub consecutive_wins: u32,
    pub bonus_eligible: bool,
    /// Руки текущего раунда (закрытые карты дилера скрыты).
    pub hands: Option<HandReport>,
    pub last_outcome: Option<OutcomeDto>,
    /// Итог есть, но выплата ещё не прошла.
    pub settlement_pending: bool,
}

/// Ответ на команду.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum CommandResponse {
    /// Стол перешёл в фазу.
    Phase(RoundPhase),
    /// Раунд завершён, вот итог.
    Finished(SnapshotDto),
}
