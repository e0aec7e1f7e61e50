//! Формульные выплаты: `floor(ставка × база × множитель)`.

use crate::domain::currency::Reward;
use crate::domain::BetTier;

/// Базовые ставки формулы одной игры.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormulaRate {
    pub ticket_base: f64,
    pub coin_base: f64,
    /// Минимум билетов для ненулевого выигрыша билетами.
    pub min_tickets: u64,
}

pub const SIC_BO_RATE: FormulaRate = FormulaRate {
    ticket_base: 0.5,
    coin_base: 1.0,
    min_tickets: 0,
};

pub const WHEEL_RATE: FormulaRate = FormulaRate {
    ticket_base: 1.0,
    coin_base: 1.0,
    min_tickets: 0,
};

pub const BINGO_RATE: FormulaRate = FormulaRate {
    ticket_base: 0.5,
    coin_base: 1.0,
    min_tickets: 10,
};

pub const SLOTS_RATE: FormulaRate = FormulaRate {
    ticket_base: 0.5,
    coin_base: 1.0,
    min_tickets: 0,
};

impl FormulaRate {
    /// Награда при раздельных множителях билетов и монет.
    /// Отрицательные и NaN-множители дают ноль.
    pub fn reward_split(&self, tier: BetTier, ticket_mult: f64, coin_mult: f64) -> Reward {
        let bet = tier.amount() as f64;
        let mut tickets = floor_non_negative(bet * self.ticket_base * ticket_mult);
        if tickets > 0 {
            tickets = tickets.max(self.min_tickets);
        }
        let coins = floor_non_negative(bet * self.coin_base * coin_mult);
        Reward::new(tickets, coins)
    }

    /// Награда при одном общем множителе.
    pub fn reward(&self, tier: BetTier, multiplier: u32) -> Reward {
        let m = f64::from(multiplier);
        self.reward_split(tier, m, m)
    }
}

fn floor_non_negative(x: f64) -> u64 {
    if x.is_nan() || x <= 0.0 {
        0
    } else {
        x.floor() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::GameKind;

    #[test]
    fn bingo_minimum_ticket_floor() {
        let tier = BetTier::resolve(GameKind::Bingo, 20).unwrap();
        // 20 × 0.5 × 2 = 20 > 10, без подрезки
        assert_eq!(BINGO_RATE.reward(tier, 2).tickets.0, 20);
        // 20 × 0.5 × 0.5 = 5 → поднимаем до 10
        assert_eq!(BINGO_RATE.reward_split(tier, 0.5, 0.0).tickets.0, 10);
    }

    #[test]
    fn fractional_results_are_floored() {
        let tier = BetTier::resolve(GameKind::Wheel, 10).unwrap();
        let r = WHEEL_RATE.reward_split(tier, 0.25, 0.0);
        assert_eq!(r.tickets.0, 2);
        assert_eq!(r.coins.0, 0);
    }
}
