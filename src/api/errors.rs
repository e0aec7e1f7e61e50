use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
    /// Можно повторить запрос без изменений (сбой леджера).
    pub retryable: bool,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Неправильные входные данные (например, нет вида ставки Sic Bo).
    BadRequest,
    InsufficientFunds,
    InvalidBetTier,
    LedgerUnavailable,
    /// Команда не подходит к текущей фазе раунда.
    InvalidCommand,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::BadRequest,
            message: message.into(),
            retryable: false,
        }
    }
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        let kind = match &err {
            EngineError::InsufficientFunds { .. } => ApiErrorKind::InsufficientFunds,
            EngineError::InvalidBetTier { .. } => ApiErrorKind::InvalidBetTier,
            EngineError::InvalidWager(_) => ApiErrorKind::BadRequest,
            EngineError::LedgerUnavailable(_) => ApiErrorKind::LedgerUnavailable,
            EngineError::RoundInProgress
            | EngineError::NoActiveRound
            | EngineError::SettlementPending
            | EngineError::IllegalDecision { .. } => ApiErrorKind::InvalidCommand,
        };
        Self {
            kind,
            message: err.to_string(),
            retryable: err.is_retryable(),
        }
    }
}
