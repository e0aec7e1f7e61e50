use serde::{Deserialize, Serialize};

use crate::domain::bet::GameKind;
use crate::domain::bingo::BingoCard;
use crate::domain::card::Card;
use crate::domain::currency::{Coins, Reward};
use crate::domain::dice::Die;
use crate::domain::slot::SlotGrid;
use crate::domain::RoundId;

/// Итог раунда с точки зрения игрока.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum OutcomeKind {
    Win,
    Lose,
    /// Push: ставка возвращается без прибыли.
    Tie,
    /// Перебор в блэкджеке.
    Bust,
    /// Равные карты в War — считается выигрышем с повышенным множителем.
    War,
    /// Дилер Caribbean Stud не квалифицировался — ставка возвращается.
    NoQualify,
    /// Бинго: карточка закрыта, но выигрыш не подтверждён.
    NearMiss,
    /// Колесо: вернулась часть ставки в билетах.
    PartialLoss,
    /// Раунд брошен игроком — ставка сгорает.
    Forfeit,
}

/// Как исход влияет на серию побед.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StreakEffect {
    Increment,
    Unchanged,
    Reset,
}

impl OutcomeKind {
    pub fn is_win(self) -> bool {
        matches!(self, OutcomeKind::Win | OutcomeKind::War)
    }

    /// Исходы, при которых ставка возвращается без прибыли.
    pub fn is_push(self) -> bool {
        matches!(self, OutcomeKind::Tie | OutcomeKind::NoQualify)
    }

    pub fn streak_effect(self) -> StreakEffect {
        if self.is_win() {
            StreakEffect::Increment
        } else if self.is_push() {
            StreakEffect::Unchanged
        } else {
            StreakEffect::Reset
        }
    }
}

/// Описание оценённых рук/бросков для фронта.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum HandReport {
    /// Blackjack / War / Caribbean Stud. Скрытые карты дилера сюда не попадают.
    Cards { player: Vec<Card>, dealer: Vec<Card> },

    RedDog {
        first: Card,
        second: Card,
        third: Option<Card>,
        spread: u8,
    },

    Dice { dice: [Die; 3], total: u8 },

    Bingo { card: BingoCard, called: Vec<u8> },

    Wheel { section: usize, label: String },

    Reels { grid: SlotGrid, winning_lines: Vec<usize> },
}

/// Единственный авторитетный итог раунда. Создаётся один раз и больше не меняется:
/// именно по нему леджер списывает/начисляет.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundOutcome {
    pub round_id: RoundId,
    pub game: GameKind,
    pub kind: OutcomeKind,
    pub stake: Coins,
    pub hands: HandReport,
    /// Название руки/линии выплаты ("Blackjack", "Spread 1", "Royal flush", ...).
    pub label: String,
    pub reward: Reward,
    pub stake_returned: bool,
    /// Раздача была синтезирована политикой смещения исходов.
    pub forced: bool,
}
