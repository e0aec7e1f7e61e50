use core::ops::RangeInclusive;

use crate::domain::bingo::{BingoCard, BINGO_SIZE, FREE_CELL};
use crate::domain::outcome::OutcomeKind;

/// Наибольшее число барабана.
pub const MAX_NUMBER: u8 = 75;

/// Диапазон чисел столбца `col`: `[15c+1, 15c+15]`.
pub fn column_range(col: usize) -> RangeInclusive<u8> {
    let start = (col as u8) * 15 + 1;
    start..=start + 14
}

/// Карточка собрана по правилам: числа в диапазонах своих столбцов,
/// без повторов, центр свободен.
pub fn is_valid_card(card: &BingoCard) -> bool {
    let center = BINGO_SIZE / 2;
    let mut seen = [false; MAX_NUMBER as usize + 1];
    for row in 0..BINGO_SIZE {
        for col in 0..BINGO_SIZE {
            let n = card.numbers[row][col];
            if row == center && col == center {
                if n != FREE_CELL {
                    return false;
                }
                continue;
            }
            if !column_range(col).contains(&n) || seen[n as usize] {
                return false;
            }
            seen[n as usize] = true;
        }
    }
    true
}

/// Итог на момент проверки карточки.
///
/// Карточка не закрыта → `None` (игра продолжается). Закрыта → выигрыш
/// только если гейт прошёл, иначе near-miss: отметки уже ничего не изменят.
pub fn completion_outcome(card: &BingoCard, gate: bool) -> Option<OutcomeKind> {
    if !card.is_complete() {
        return None;
    }
    Some(if gate { OutcomeKind::Win } else { OutcomeKind::NearMiss })
}

/// Множитель выплаты по числу вызовов до закрытия карточки.
pub fn payout_multiplier(calls: usize) -> u32 {
    match calls {
        0..=26 => 5,
        27..=30 => 3,
        _ => 2,
    }
}
