use serde::{Deserialize, Serialize};

/// Размер стороны карточки.
pub const BINGO_SIZE: usize = 5;

/// Значение свободной центральной клетки.
pub const FREE_CELL: u8 = 0;

/// Карточка бинго 5×5: `numbers[row][col]`, столбец `c` содержит числа из
/// `[15c+1, 15c+15]`. Центр — свободная клетка, отмечена с самого начала.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct BingoCard {
    pub numbers: [[u8; BINGO_SIZE]; BINGO_SIZE],
    pub marked: [[bool; BINGO_SIZE]; BINGO_SIZE],
}

impl BingoCard {
    /// Собрать карточку из столбцов (`columns[col][row]`).
    /// Центр принудительно становится свободной клеткой.
    pub fn from_columns(columns: [[u8; BINGO_SIZE]; BINGO_SIZE]) -> Self {
        let mut numbers = [[FREE_CELL; BINGO_SIZE]; BINGO_SIZE];
        for (col, column) in columns.iter().enumerate() {
            for (row, &n) in column.iter().enumerate() {
                numbers[row][col] = n;
            }
        }
        let center = BINGO_SIZE / 2;
        numbers[center][center] = FREE_CELL;

        let mut marked = [[false; BINGO_SIZE]; BINGO_SIZE];
        marked[center][center] = true;

        Self { numbers, marked }
    }

    /// Отметить вызванное число. Возвращает true, если оно есть на карточке.
    pub fn mark(&mut self, number: u8) -> bool {
        if number == FREE_CELL {
            return false;
        }
        let mut hit = false;
        for row in 0..BINGO_SIZE {
            for col in 0..BINGO_SIZE {
                if self.numbers[row][col] == number {
                    self.marked[row][col] = true;
                    hit = true;
                }
            }
        }
        hit
    }

    pub fn contains(&self, number: u8) -> bool {
        number != FREE_CELL && self.numbers.iter().flatten().any(|&n| n == number)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.iter().flatten().filter(|&&m| m).count()
    }

    /// Все 25 клеток отмечены.
    pub fn is_complete(&self) -> bool {
        self.marked_count() == BINGO_SIZE * BINGO_SIZE
    }

    /// Числа карточки без свободной клетки (24 шт.).
    pub fn numbers_on_card(&self) -> Vec<u8> {
        self.numbers
            .iter()
            .flatten()
            .copied()
            .filter(|&n| n != FREE_CELL)
            .collect()
    }
}
