use crate::domain::card::Card;
use crate::domain::outcome::OutcomeKind;

/// Старшая карта выигрывает (туз = 14); равные карты дают War.
pub fn compare(player: Card, dealer: Card) -> OutcomeKind {
    match player.high_value().cmp(&dealer.high_value()) {
        core::cmp::Ordering::Greater => OutcomeKind::Win,
        core::cmp::Ordering::Equal => OutcomeKind::War,
        core::cmp::Ordering::Less => OutcomeKind::Lose,
    }
}
