use serde::{Deserialize, Serialize};

/// Решение игрока в фазе Playing.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Блэкджек: взять карту.
    Hit,
    /// Блэкджек: остановиться.
    Stand,
    /// Red Dog / Caribbean Stud: сбросить (ставка сгорает).
    Fold,
    /// Red Dog: открыть третью карту. Caribbean Stud: играть руку.
    Call,
    /// Caribbean Stud: играть руку (как Call).
    Raise,
    /// Бинго: вызвать следующее число.
    CallNumber,
    /// Бросить раунд. Всегда даёт проигрыш с потерей ставки.
    Forfeit,
}
