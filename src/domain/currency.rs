use core::ops::{Add, AddAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

/// Монеты (MC) — основная валюта ставок. Обёртка над u64, чтобы не путать с билетами.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coins(pub u64);

/// Билеты — вторичная валюта наград.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tickets(pub u64);

impl Coins {
    pub const ZERO: Coins = Coins(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Безопасное вычитание, не даёт уйти в минус.
    pub fn saturating_sub(self, other: Coins) -> Coins {
        Coins(self.0.saturating_sub(other.0))
    }
}

impl Tickets {
    pub const ZERO: Tickets = Tickets(0);

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Coins {
    type Output = Coins;

    fn add(self, rhs: Coins) -> Self::Output {
        Coins(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Coins {
    fn add_assign(&mut self, rhs: Coins) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

impl Sub for Coins {
    type Output = Coins;

    fn sub(self, rhs: Coins) -> Self::Output {
        Coins(self.0.saturating_sub(rhs.0))
    }
}

impl SubAssign for Coins {
    fn sub_assign(&mut self, rhs: Coins) {
        self.0 = self.0.saturating_sub(rhs.0);
    }
}

impl Add for Tickets {
    type Output = Tickets;

    fn add(self, rhs: Tickets) -> Self::Output {
        Tickets(self.0.saturating_add(rhs.0))
    }
}

impl AddAssign for Tickets {
    fn add_assign(&mut self, rhs: Tickets) {
        self.0 = self.0.saturating_add(rhs.0);
    }
}

/// Награда за раунд. Никогда не бывает отрицательной — проигрыш = ZERO.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reward {
    pub tickets: Tickets,
    pub coins: Coins,
}

impl Reward {
    pub const ZERO: Reward = Reward {
        tickets: Tickets::ZERO,
        coins: Coins::ZERO,
    };

    pub fn new(tickets: u64, coins: u64) -> Self {
        Self {
            tickets: Tickets(tickets),
            coins: Coins(coins),
        }
    }

    /// Возврат ставки без прибыли (push).
    pub fn stake_only(stake: Coins) -> Self {
        Self {
            tickets: Tickets::ZERO,
            coins: stake,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.tickets.is_zero() && self.coins.is_zero()
    }
}

impl Add for Reward {
    type Output = Reward;

    fn add(self, rhs: Reward) -> Self::Output {
        Reward {
            tickets: self.tickets + rhs.tickets,
            coins: self.coins + rhs.coins,
        }
    }
}

impl AddAssign for Reward {
    fn add_assign(&mut self, rhs: Reward) {
        self.tickets += rhs.tickets;
        self.coins += rhs.coins;
    }
}
