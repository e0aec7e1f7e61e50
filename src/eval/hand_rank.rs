use serde::{Deserialize, Serialize};

use crate::domain::card::Rank;

/// Сила 5-карточной покерной руки. Больше = сильнее, сравнивается как число.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandRank(pub u32);

/// Категория покерной руки по силе.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandCategory {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl HandCategory {
    const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::OnePair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];
}

impl HandRank {
    /// Собрать HandRank из категории и пяти значений карт.
    ///
    /// Схема кодирования (u32):
    ///   [категория:4 бита][r0:4][r1:4][r2:4][r3:4][r4:4]
    /// Значения идут по убыванию (туз = 14, в том числе в колесе), так что
    /// внутри категории руки сравниваются поэлементно от старшей карты.
    pub fn from_parts(category: HandCategory, ranks: &[Rank]) -> Self {
        let mut value = (category as u32) << 20;
        for (i, rank) in ranks.iter().take(5).enumerate() {
            value |= u32::from(rank.high_value()) << (16 - 4 * i);
        }
        HandRank(value)
    }

    pub fn category(&self) -> HandCategory {
        let id = ((self.0 >> 20) & 0x0F) as usize;
        HandCategory::ALL
            .get(id)
            .copied()
            .unwrap_or(HandCategory::HighCard)
    }

    /// Значимые ранги (от старшего к младшему), без пустых позиций.
    pub fn ranks(&self) -> Vec<Rank> {
        (0..5)
            .filter_map(|i| Rank::from_high_value(((self.0 >> (16 - 4 * i)) & 0x0F) as u8))
            .collect()
    }

    /// Ранг первой пары (или тройки, каре): первое значение, встреченное дважды.
    pub fn pair_rank(&self) -> Option<Rank> {
        self.ranks().windows(2).find(|w| w[0] == w[1]).map(|w| w[0])
    }

    /// Роял-флеш: стрит-флеш T-J-Q-K-A. У стального колеса за тузом идёт пятёрка.
    pub fn is_royal(&self) -> bool {
        self.category() == HandCategory::StraightFlush && self.ranks().get(1) == Some(&Rank::King)
    }
}

/// Человеческое описание руки.
pub fn describe_hand(rank: HandRank) -> String {
    if rank.is_royal() {
        return "Royal flush".to_string();
    }
    match rank.category() {
        HandCategory::HighCard => "High card",
        HandCategory::OnePair => "One pair",
        HandCategory::TwoPair => "Two pair",
        HandCategory::ThreeOfAKind => "Three of a kind",
        HandCategory::Straight => "Straight",
        HandCategory::Flush => "Flush",
        HandCategory::FullHouse => "Full house",
        HandCategory::FourOfAKind => "Four of a kind",
        HandCategory::StraightFlush => "Straight flush",
    }
    .to_string()
}
