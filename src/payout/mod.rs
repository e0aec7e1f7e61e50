//! Расчёт наград. Два стиля, намеренно не объединённые:
//!   - фиксированные таблицы (Blackjack, Red Dog, War, Caribbean Stud);
//!   - формула `floor(ставка × база × множитель)` (Sic Bo, колесо, бинго, слоты).

pub mod formula;
pub mod tables;

pub use formula::{FormulaRate, BINGO_RATE, SIC_BO_RATE, SLOTS_RATE, WHEEL_RATE};
pub use tables::{lookup, BlackjackLine, PayLine, PayoutEntry, PayoutRow, RedDogLine, StudLine, WarLine};

use crate::domain::currency::Reward;
use crate::domain::BetTier;

/// Как считается награда конкретного исхода.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RewardRule {
    Blackjack(BlackjackLine),
    RedDog(RedDogLine),
    War(WarLine),
    Stud(StudLine),
    Formula { rate: FormulaRate, multiplier: u32 },
}

/// Награда по уровню ставки и правилу.
pub fn compute_reward(tier: BetTier, rule: RewardRule) -> Reward {
    match rule {
        RewardRule::Blackjack(line) => lookup(line, tier).reward(),
        RewardRule::RedDog(line) => lookup(line, tier).reward(),
        RewardRule::War(line) => lookup(line, tier).reward(),
        RewardRule::Stud(line) => lookup(line, tier).reward(),
        RewardRule::Formula { rate, multiplier } => rate.reward(tier, multiplier),
    }
}
