use serde::{Deserialize, Serialize};

use crate::domain::outcome::{OutcomeKind, StreakEffect};

/// Серия побед подряд. Иммутабельное значение: каждое разрешение раунда
/// принимает старое состояние и возвращает новое.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StreakState {
    pub consecutive_wins: u32,
}

impl StreakState {
    pub const fn new() -> Self {
        Self { consecutive_wins: 0 }
    }

    /// Win/War → +1, push → без изменений, любой проигрыш → 0.
    #[must_use]
    pub fn record(self, kind: OutcomeKind) -> StreakState {
        match kind.streak_effect() {
            StreakEffect::Increment => StreakState {
                consecutive_wins: self.consecutive_wins.saturating_add(1),
            },
            StreakEffect::Unchanged => self,
            StreakEffect::Reset => StreakState::new(),
        }
    }

    /// Сигнал фронту про "горячую серию".
    pub fn is_bonus_eligible(&self, threshold: u32) -> bool {
        threshold > 0 && self.consecutive_wins >= threshold
    }
}
