//! Примитивы случайности поверх `RandomSource`:
//! карты, кубики, взвешенный выбор и вероятностный гейт.

use std::collections::HashSet;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::dice::Die;
use crate::engine::RandomSource;

/// Случайная карта из полной колоды (с возвращением).
pub fn draw_card<R: RandomSource>(rng: &mut R) -> Card {
    let rank = Rank::ALL[rng.below(Rank::ALL.len() as u32) as usize];
    let suit = Suit::ALL[rng.below(Suit::ALL.len() as u32) as usize];
    Card::new(rank, suit)
}

/// Случайная карта из заданных рангов и мастей. `None` для пустого домена.
pub fn draw_card_from<R: RandomSource>(rng: &mut R, ranks: &[Rank], suits: &[Suit]) -> Option<Card> {
    if ranks.is_empty() || suits.is_empty() {
        return None;
    }
    let rank = ranks[rng.below(ranks.len() as u32) as usize];
    let suit = suits[rng.below(suits.len() as u32) as usize];
    Some(Card::new(rank, suit))
}

/// Тянем карту, пока она не попадёт вне `excluding`.
///
/// `None` только если исключена вся колода.
pub fn draw_unique_card<R: RandomSource>(rng: &mut R, excluding: &HashSet<Card>) -> Option<Card> {
    if excluding.len() >= Rank::ALL.len() * Suit::ALL.len() {
        return None;
    }
    loop {
        let card = draw_card(rng);
        if !excluding.contains(&card) {
            return Some(card);
        }
    }
}

/// Бросок одного кубика.
pub fn draw_die<R: RandomSource>(rng: &mut R) -> Die {
    Die::from_offset(rng.below(Die::FACES as u32))
}

/// Взвешенный выбор индекса.
///
/// Берём `uniform()`, идём по накопленной сумме весов и возвращаем первый
/// индекс, где сумма ≥ броска. Веса НЕ нормируются: если они не дают в сумме
/// 1.0, это смещение на совести вызывающего.
///
/// Отличие от голого "первый индекс с суммой ≥ броска": нулевые веса
/// пропускаются намеренно. Бросок ровно 0.0 при `weights[0] == 0` даёт первый
/// индекс с положительным весом, а не 0, так что сектор с нулевым весом не
/// выпадает никогда. Хвост округления тоже уходит в последний ненулевой индекс.
pub fn weighted_index<R: RandomSource>(rng: &mut R, weights: &[f64]) -> Option<usize> {
    if weights.is_empty() {
        return None;
    }
    let draw = rng.uniform();
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        if cumulative >= draw {
            return Some(i);
        }
    }
    let fallback = weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1);
    Some(fallback)
}

/// true с вероятностью `p`.
pub fn probability_gate<R: RandomSource>(rng: &mut R, p: f64) -> bool {
    rng.uniform() < p
}
