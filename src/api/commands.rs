use serde::{Deserialize, Serialize};

use crate::domain::GameKind;

/// Команда от фронта к игровому столу.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Сделать ставку и начать раунд.
    PlaceBet(PlaceBetCommand),

    /// Решение игрока в текущем раунде.
    Advance(DecisionApi),

    /// Бросить раунд (ставка сгорает).
    Abandon,

    /// Повторить выплату после сбоя леджера.
    RetrySettlement,

    /// "Играть снова".
    NewRound,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct PlaceBetCommand {
    pub game: GameKind,
    /// Сумма ставки, должна совпадать с одним из уровней игры.
    pub amount: u64,
    /// Вид ставки Sic Bo; для остальных игр не указывается.
    #[serde(default)]
    pub sic_bo_bet: Option<SicBoBetApi>,
}

/// Внешнее представление решения игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DecisionApi {
    Hit,
    Stand,
    Fold,
    Call,
    Raise,
    CallNumber,
    Forfeit,
}

/// Внешнее представление ставки Sic Bo.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SicBoBetApi {
    Small,
    Big,
    Double,
    Triple { face: u8 },
    AnyTriple,
}
