use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::currency::Coins;

/// Мини-игры, которые обслуживает движок.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum GameKind {
    Blackjack,
    RedDog,
    War,
    SicBo,
    Slots,
    CaribbeanStud,
    Bingo,
    Wheel,
}

/// Ставки карточных игр с фиксированными таблицами выплат.
pub const CARD_TABLE_TIERS: [u64; 4] = [50, 100, 250, 500];
pub const SIC_BO_TIERS: [u64; 4] = [10, 50, 100, 500];
pub const WHEEL_TIERS: [u64; 4] = [10, 50, 100, 500];
pub const BINGO_TIERS: [u64; 4] = [20, 50, 100, 200];
pub const SLOTS_TIERS: [u64; 4] = [10, 25, 50, 100];

impl GameKind {
    pub const ALL: [GameKind; 8] = [
        GameKind::Blackjack,
        GameKind::RedDog,
        GameKind::War,
        GameKind::SicBo,
        GameKind::Slots,
        GameKind::CaribbeanStud,
        GameKind::Bingo,
        GameKind::Wheel,
    ];

    /// Допустимые размеры ставки (по возрастанию). Таблицы выплат индексируются ровно ими.
    pub const fn tiers(self) -> &'static [u64; 4] {
        match self {
            GameKind::Blackjack | GameKind::RedDog | GameKind::War | GameKind::CaribbeanStud => {
                &CARD_TABLE_TIERS
            }
            GameKind::SicBo => &SIC_BO_TIERS,
            GameKind::Wheel => &WHEEL_TIERS,
            GameKind::Bingo => &BINGO_TIERS,
            GameKind::Slots => &SLOTS_TIERS,
        }
    }

    /// Короткое имя для логов/причин в леджере.
    pub const fn slug(self) -> &'static str {
        match self {
            GameKind::Blackjack => "blackjack",
            GameKind::RedDog => "red_dog",
            GameKind::War => "war",
            GameKind::SicBo => "sic_bo",
            GameKind::Slots => "slots",
            GameKind::CaribbeanStud => "caribbean_stud",
            GameKind::Bingo => "bingo",
            GameKind::Wheel => "wheel",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// Размер ставки из фиксированного набора конкретной игры.
///
/// Создаётся только через `BetTier::resolve`, поэтому `index` всегда валиден
/// для таблиц выплат этой игры.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
pub struct BetTier {
    index: usize,
    amount: u64,
}

impl BetTier {
    /// Найти уровень ставки по сумме. `None` — сумма не входит в набор игры.
    pub fn resolve(game: GameKind, amount: u64) -> Option<BetTier> {
        game.tiers()
            .iter()
            .position(|&t| t == amount)
            .map(|index| BetTier { index, amount })
    }

    /// Позиция в наборе уровней (0 = минимальная ставка).
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn stake(&self) -> Coins {
        Coins(self.amount)
    }
}
