use crate::domain::card::Card;
use crate::domain::outcome::OutcomeKind;

pub const BLACKJACK: u32 = 21;

/// Дилер добирает, пока очков меньше.
pub const DEALER_STANDS_ON: u32 = 17;

/// Очки руки.
///
/// Сначала суммируются карты без тузов, затем тузы по одному: 11, если
/// текущая сумма + 11 не больше 21, иначе 1. Тузы неразличимы, поэтому
/// результат зависит только от набора карт. `[A, A, K]` даёт 22.
pub fn score(cards: &[Card]) -> u32 {
    let base: u32 = cards
        .iter()
        .filter(|c| !c.is_ace())
        .map(|c| u32::from(c.blackjack_points()))
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;

    (0..aces).fold(base, |total, _| {
        total + if total + 11 <= BLACKJACK { 11 } else { 1 }
    })
}

pub fn is_bust(cards: &[Card]) -> bool {
    score(cards) > BLACKJACK
}

/// Натуральный блэкджек: 21 с первых двух карт.
pub fn is_natural(cards: &[Card]) -> bool {
    cards.len() == 2 && score(cards) == BLACKJACK
}

pub fn dealer_should_draw(dealer: &[Card]) -> bool {
    score(dealer) < DEALER_STANDS_ON
}

/// Сравнение рук после игры дилера.
pub fn judge(player: &[Card], dealer: &[Card]) -> OutcomeKind {
    let p = score(player);
    let d = score(dealer);
    if p > BLACKJACK {
        OutcomeKind::Bust
    } else if d > BLACKJACK || p > d {
        OutcomeKind::Win
    } else if p < d {
        OutcomeKind::Lose
    } else {
        OutcomeKind::Tie
    }
}
