use thiserror::Error;

use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::session::RoundPhase;
use crate::infra::ledger::LedgerError;

/// Ошибки движка раундов. Все локальны для раунда: ни одна не портит
/// уже зафиксированный итог или серию побед.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EngineError {
    #[error("Недостаточно монет для ставки {stake}")]
    InsufficientFunds { stake: u64 },

    #[error("Ставка {amount} не входит в уровни игры {game}")]
    InvalidBetTier { game: GameKind, amount: u64 },

    #[error("Недопустимая ставка: {0}")]
    InvalidWager(String),

    #[error("Леджер недоступен: {0}")]
    LedgerUnavailable(String),

    #[error("Раунд уже идёт")]
    RoundInProgress,

    #[error("Нет активного раунда")]
    NoActiveRound,

    #[error("Выплата за прошлый раунд ещё не проведена")]
    SettlementPending,

    #[error("Решение {decision:?} недопустимо в фазе {phase:?}")]
    IllegalDecision { decision: Decision, phase: RoundPhase },
}

impl EngineError {
    /// Можно ли повторить операцию без изменения состояния раунда.
    pub fn is_retryable(&self) -> bool {
        matches!(self, EngineError::LedgerUnavailable(_))
    }
}

impl From<LedgerError> for EngineError {
    fn from(err: LedgerError) -> Self {
        match err {
            LedgerError::InsufficientBalance { needed, .. } => {
                EngineError::InsufficientFunds { stake: needed }
            }
            LedgerError::Unavailable(reason) => EngineError::LedgerUnavailable(reason),
        }
    }
}
