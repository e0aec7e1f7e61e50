//! Фиксированные таблицы выплат карточных игр.
//!
//! Кривые наград нелинейные и подобраны вручную, поэтому хранятся явно,
//! по строке на линию выплаты и по колонке на уровень ставки.
//! Монеты в таблицах уже включают возврат ставки.

use serde::{Deserialize, Serialize};

use crate::domain::currency::{Coins, Reward, Tickets};
use crate::domain::outcome::OutcomeKind;
use crate::domain::BetTier;
use crate::eval::hand_rank::{HandCategory, HandRank};
use crate::eval::red_dog::SpreadTier;

/// Награды одной линии по четырём уровням ставки.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PayoutRow {
    pub tickets: [u64; 4],
    pub coins: [u64; 4],
}

impl PayoutRow {
    pub const fn new(tickets: [u64; 4], coins: [u64; 4]) -> Self {
        Self { tickets, coins }
    }
}

/// Одна ячейка таблицы: уровень ставки, исход и награда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PayoutEntry {
    pub tier: BetTier,
    pub kind: OutcomeKind,
    pub tickets: Tickets,
    pub coins: Coins,
}

impl PayoutEntry {
    pub fn reward(&self) -> Reward {
        Reward {
            tickets: self.tickets,
            coins: self.coins,
        }
    }
}

/// Линия выплаты игры с фиксированной таблицей.
pub trait PayLine: Copy {
    /// Строка таблицы. `None` — линия возвращает только ставку.
    fn row(self) -> Option<&'static PayoutRow>;

    fn kind(self) -> OutcomeKind;

    fn label(self) -> &'static str;
}

/// Найти награду в таблице.
pub fn lookup<P: PayLine>(line: P, tier: BetTier) -> PayoutEntry {
    let (tickets, coins) = match line.row() {
        Some(row) => (
            Tickets(row.tickets[tier.index()]),
            Coins(row.coins[tier.index()]),
        ),
        None => (Tickets::ZERO, tier.stake()),
    };
    PayoutEntry {
        tier,
        kind: line.kind(),
        tickets,
        coins,
    }
}

// ---------------------------------------------------------------------------
// Blackjack
// ---------------------------------------------------------------------------

const BJ_WIN: PayoutRow = PayoutRow::new([40, 90, 240, 500], [100, 200, 500, 1000]);
const BJ_NATURAL: PayoutRow = PayoutRow::new([75, 160, 420, 900], [125, 250, 625, 1250]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlackjackLine {
    Win,
    /// Натуральный блэкджек.
    Blackjack,
    Push,
}

impl PayLine for BlackjackLine {
    fn row(self) -> Option<&'static PayoutRow> {
        match self {
            BlackjackLine::Win => Some(&BJ_WIN),
            BlackjackLine::Blackjack => Some(&BJ_NATURAL),
            BlackjackLine::Push => None,
        }
    }

    fn kind(self) -> OutcomeKind {
        match self {
            BlackjackLine::Push => OutcomeKind::Tie,
            _ => OutcomeKind::Win,
        }
    }

    fn label(self) -> &'static str {
        match self {
            BlackjackLine::Win => "Win",
            BlackjackLine::Blackjack => "Blackjack",
            BlackjackLine::Push => "Push",
        }
    }
}

// ---------------------------------------------------------------------------
// Red Dog
// ---------------------------------------------------------------------------

const RD_SPREAD_0: PayoutRow = PayoutRow::new([300, 650, 1700, 3600], [600, 1200, 3000, 6000]);
const RD_SPREAD_1: PayoutRow = PayoutRow::new([150, 320, 850, 1800], [300, 600, 1500, 3000]);
const RD_SPREAD_2: PayoutRow = PayoutRow::new([110, 240, 640, 1350], [250, 500, 1250, 2500]);
const RD_WIDE: PayoutRow = PayoutRow::new([30, 70, 190, 400], [100, 200, 500, 1000]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedDogLine {
    Spread(SpreadTier),
    Push,
}

impl PayLine for RedDogLine {
    fn row(self) -> Option<&'static PayoutRow> {
        match self {
            RedDogLine::Spread(SpreadTier::Consecutive) => Some(&RD_SPREAD_0),
            RedDogLine::Spread(SpreadTier::One) => Some(&RD_SPREAD_1),
            RedDogLine::Spread(SpreadTier::Two) => Some(&RD_SPREAD_2),
            RedDogLine::Spread(SpreadTier::Wide) => Some(&RD_WIDE),
            RedDogLine::Push => None,
        }
    }

    fn kind(self) -> OutcomeKind {
        match self {
            RedDogLine::Spread(_) => OutcomeKind::Win,
            RedDogLine::Push => OutcomeKind::Tie,
        }
    }

    fn label(self) -> &'static str {
        match self {
            RedDogLine::Spread(tier) => tier.label(),
            RedDogLine::Push => "Push",
        }
    }
}

// ---------------------------------------------------------------------------
// War
// ---------------------------------------------------------------------------

const WAR_WIN: PayoutRow = PayoutRow::new([35, 80, 210, 450], [100, 200, 500, 1000]);
const WAR_TIE: PayoutRow = PayoutRow::new([90, 190, 500, 1050], [150, 300, 750, 1500]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WarLine {
    Win,
    /// Равные карты.
    War,
}

impl PayLine for WarLine {
    fn row(self) -> Option<&'static PayoutRow> {
        match self {
            WarLine::Win => Some(&WAR_WIN),
            WarLine::War => Some(&WAR_TIE),
        }
    }

    fn kind(self) -> OutcomeKind {
        match self {
            WarLine::Win => OutcomeKind::Win,
            WarLine::War => OutcomeKind::War,
        }
    }

    fn label(self) -> &'static str {
        match self {
            WarLine::Win => "Win",
            WarLine::War => "War",
        }
    }
}

// ---------------------------------------------------------------------------
// Caribbean Stud
// ---------------------------------------------------------------------------

/// Выигрыш неоплачиваемой рукой: ни билетов, ни монет, ставка не возвращается.
const CS_HIGH_CARD: PayoutRow = PayoutRow::new([0; 4], [0; 4]);
const CS_PAIR: PayoutRow = PayoutRow::new([30, 65, 170, 360], [100, 200, 500, 1000]);
const CS_TWO_PAIR: PayoutRow = PayoutRow::new([55, 120, 310, 650], [150, 300, 750, 1500]);
const CS_TRIPS: PayoutRow = PayoutRow::new([80, 170, 440, 920], [200, 400, 1000, 2000]);
const CS_STRAIGHT: PayoutRow = PayoutRow::new([110, 230, 600, 1250], [250, 500, 1250, 2500]);
const CS_FLUSH: PayoutRow = PayoutRow::new([140, 290, 760, 1600], [300, 600, 1500, 3000]);
const CS_FULL_HOUSE: PayoutRow = PayoutRow::new([200, 420, 1100, 2300], [400, 800, 2000, 4000]);
const CS_QUADS: PayoutRow = PayoutRow::new([550, 1150, 3000, 6200], [1050, 2100, 5250, 10500]);
const CS_STRAIGHT_FLUSH: PayoutRow =
    PayoutRow::new([1400, 2900, 7500, 15500], [2550, 5100, 12750, 25500]);
const CS_ROYAL: PayoutRow = PayoutRow::new([2800, 5800, 15000, 31000], [5050, 10100, 25250, 50500]);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudLine {
    /// Выигрыш неоплачиваемой рукой (старшая карта, пара ниже валетов).
    HighCard,
    /// Дилер не квалифицировался.
    NoQualify,
    /// Равные руки.
    Push,
    Pair,
    TwoPair,
    Trips,
    Straight,
    Flush,
    FullHouse,
    Quads,
    StraightFlush,
    Royal,
}

impl StudLine {
    /// Линия выигрыша для руки игрока. Для неоплачиваемой руки — `HighCard`.
    pub fn for_winning_hand(rank: HandRank) -> StudLine {
        if !crate::eval::poker::is_paying(rank) {
            return StudLine::HighCard;
        }
        if rank.is_royal() {
            return StudLine::Royal;
        }
        match rank.category() {
            HandCategory::HighCard => StudLine::HighCard,
            HandCategory::OnePair => StudLine::Pair,
            HandCategory::TwoPair => StudLine::TwoPair,
            HandCategory::ThreeOfAKind => StudLine::Trips,
            HandCategory::Straight => StudLine::Straight,
            HandCategory::Flush => StudLine::Flush,
            HandCategory::FullHouse => StudLine::FullHouse,
            HandCategory::FourOfAKind => StudLine::Quads,
            HandCategory::StraightFlush => StudLine::StraightFlush,
        }
    }
}

impl PayLine for StudLine {
    fn row(self) -> Option<&'static PayoutRow> {
        match self {
            StudLine::NoQualify | StudLine::Push => None,
            StudLine::HighCard => Some(&CS_HIGH_CARD),
            StudLine::Pair => Some(&CS_PAIR),
            StudLine::TwoPair => Some(&CS_TWO_PAIR),
            StudLine::Trips => Some(&CS_TRIPS),
            StudLine::Straight => Some(&CS_STRAIGHT),
            StudLine::Flush => Some(&CS_FLUSH),
            StudLine::FullHouse => Some(&CS_FULL_HOUSE),
            StudLine::Quads => Some(&CS_QUADS),
            StudLine::StraightFlush => Some(&CS_STRAIGHT_FLUSH),
            StudLine::Royal => Some(&CS_ROYAL),
        }
    }

    fn kind(self) -> OutcomeKind {
        match self {
            StudLine::NoQualify => OutcomeKind::NoQualify,
            StudLine::Push => OutcomeKind::Tie,
            _ => OutcomeKind::Win,
        }
    }

    fn label(self) -> &'static str {
        match self {
            StudLine::HighCard => "High card",
            StudLine::NoQualify => "Dealer does not qualify",
            StudLine::Push => "Push",
            StudLine::Pair => "Pair",
            StudLine::TwoPair => "Two pair",
            StudLine::Trips => "Three of a kind",
            StudLine::Straight => "Straight",
            StudLine::Flush => "Flush",
            StudLine::FullHouse => "Full house",
            StudLine::Quads => "Four of a kind",
            StudLine::StraightFlush => "Straight flush",
            StudLine::Royal => "Royal flush",
        }
    }
}

/// Все строки таблиц — для проверки монотонности по уровню ставки.
pub fn all_rows() -> Vec<(&'static str, &'static PayoutRow)> {
    vec![
        ("blackjack/win", &BJ_WIN),
        ("blackjack/natural", &BJ_NATURAL),
        ("red_dog/spread0", &RD_SPREAD_0),
        ("red_dog/spread1", &RD_SPREAD_1),
        ("red_dog/spread2", &RD_SPREAD_2),
        ("red_dog/wide", &RD_WIDE),
        ("war/win", &WAR_WIN),
        ("war/war", &WAR_TIE),
        ("stud/pair", &CS_PAIR),
        ("stud/two_pair", &CS_TWO_PAIR),
        ("stud/trips", &CS_TRIPS),
        ("stud/straight", &CS_STRAIGHT),
        ("stud/flush", &CS_FLUSH),
        ("stud/full_house", &CS_FULL_HOUSE),
        ("stud/quads", &CS_QUADS),
        ("stud/straight_flush", &CS_STRAIGHT_FLUSH),
        ("stud/royal", &CS_ROYAL),
    ]
}
