use crate::domain::slot::{SlotGrid, SlotSymbol};

/// Вес символа на барабане, в порядке `SlotSymbol::ALL`.
pub const REEL_WEIGHTS: [f64; 6] = [0.30, 0.25, 0.20, 0.12, 0.08, 0.05];

/// Множитель линии из трёх одинаковых символов.
pub fn multiplier(symbol: SlotSymbol) -> u32 {
    match symbol {
        SlotSymbol::Mouse => 2,
        SlotSymbol::Rabbit => 3,
        SlotSymbol::Fox => 5,
        SlotSymbol::Wolf => 10,
        SlotSymbol::Bear => 20,
        SlotSymbol::Lion => 50,
    }
}

/// Выигравшая линия: номер строки (0 = верх) и символ.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineWin {
    pub row: usize,
    pub symbol: SlotSymbol,
}

/// Три горизонтальные линии проверяются независимо; выигрыши складываются.
pub fn match_paylines(grid: &SlotGrid) -> Vec<LineWin> {
    grid.iter()
        .enumerate()
        .filter(|(_, row)| row[0] == row[1] && row[1] == row[2])
        .map(|(row, cells)| LineWin {
            row,
            symbol: cells[0],
        })
        .collect()
}

/// Суммарный множитель по всем выигравшим линиям.
pub fn total_multiplier(wins: &[LineWin]) -> u32 {
    wins.iter().map(|w| multiplier(w.symbol)).sum()
}
