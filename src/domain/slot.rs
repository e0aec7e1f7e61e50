use core::fmt;

use serde::{Deserialize, Serialize};

/// Символы барабанов (звериная тема).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SlotSymbol {
    Mouse,
    Rabbit,
    Fox,
    Wolf,
    Bear,
    Lion,
}

impl SlotSymbol {
    pub const ALL: [SlotSymbol; 6] = [
        SlotSymbol::Mouse,
        SlotSymbol::Rabbit,
        SlotSymbol::Fox,
        SlotSymbol::Wolf,
        SlotSymbol::Bear,
        SlotSymbol::Lion,
    ];
}

impl fmt::Display for SlotSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SlotSymbol::Mouse => "mouse",
            SlotSymbol::Rabbit => "rabbit",
            SlotSymbol::Fox => "fox",
            SlotSymbol::Wolf => "wolf",
            SlotSymbol::Bear => "bear",
            SlotSymbol::Lion => "lion",
        };
        f.write_str(name)
    }
}

/// Окно 3×3: `grid[row][reel]`.
pub type SlotGrid = [[SlotSymbol; 3]; 3];
