//! Движок раундов: случайность, политика смещения исходов, общий автомат раунда.
//!
//! Высокоуровневый объект: `GameTable`
//! Основные операции:
//!   - `place_bet` – проверить ставку, списать монеты, раздать
//!   - `advance` – применить решение игрока
//!   - `abandon` – бросить раунд (ставка сгорает)
//!   - `retry_settlement` – повторить выплату, не пересчитывая итог

pub mod actions;
pub mod bias;
pub mod draw;
pub mod errors;
pub mod history;
pub mod rules;
pub mod session;
pub mod table;

pub use actions::Decision;
pub use bias::{AlwaysForce, BiasContext, GateStage, NeverForce, OutcomeBiasPolicy, ProbabilityGate, ScriptedBias};
pub use draw::{draw_card, draw_card_from, draw_die, draw_unique_card, probability_gate, weighted_index};
pub use errors::EngineError;
pub use history::{RoundEvent, RoundEventKind, RoundHistory};
pub use rules::{GameRules, RoundCtx, Step, Verdict};
pub use session::{RoundPhase, RoundSession};
pub use table::{GameTable, RoundSnapshot};

/// RNG интерфейс для engine. Реализации лежат в infra.
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);

    /// Равномерное число в [0, 1).
    fn uniform(&mut self) -> f64;

    /// Равномерное целое в [0, n). Для `n == 0` возвращает 0.
    fn below(&mut self, n: u32) -> u32;
}
