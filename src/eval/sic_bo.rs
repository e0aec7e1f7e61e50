use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::dice::Die;

/// Вид ставки Sic Bo. Каждая ставка проверяется независимо от остальных.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum SicBoBet {
    /// Сумма 4..=10.
    Small,
    /// Сумма 11..=17.
    Big,
    /// Хотя бы два одинаковых кубика.
    Double,
    /// Три одинаковых кубика с заданной гранью.
    Triple(u8),
    /// Любая тройка.
    AnyTriple,
}

impl SicBoBet {
    /// Множитель выплаты (к ставке).
    pub fn multiplier(self) -> u32 {
        match self {
            SicBoBet::Small | SicBoBet::Big => 2,
            SicBoBet::Double => 6,
            SicBoBet::AnyTriple => 25,
            SicBoBet::Triple(_) => 150,
        }
    }
}

impl fmt::Display for SicBoBet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SicBoBet::Small => f.write_str("Small"),
            SicBoBet::Big => f.write_str("Big"),
            SicBoBet::Double => f.write_str("Double"),
            SicBoBet::Triple(face) => write!(f, "Triple {face}"),
            SicBoBet::AnyTriple => f.write_str("Any triple"),
        }
    }
}

/// Классификация броска.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiceClass {
    pub total: u8,
    pub small: bool,
    pub big: bool,
    pub double: bool,
    /// Грань тройки, если все три кубика равны.
    pub triple: Option<u8>,
}

impl DiceClass {
    /// Все ставки, которые этот бросок выигрывает.
    pub fn winning_bets(&self) -> Vec<SicBoBet> {
        let mut bets = Vec::new();
        if self.small {
            bets.push(SicBoBet::Small);
        }
        if self.big {
            bets.push(SicBoBet::Big);
        }
        if self.double {
            bets.push(SicBoBet::Double);
        }
        if let Some(face) = self.triple {
            bets.push(SicBoBet::Triple(face));
            bets.push(SicBoBet::AnyTriple);
        }
        bets
    }
}

pub fn classify(dice: &[Die; 3]) -> DiceClass {
    let [a, b, c] = dice.map(Die::value);
    let total = a + b + c;
    DiceClass {
        total,
        small: (4..=10).contains(&total),
        big: (11..=17).contains(&total),
        double: a == b || b == c || a == c,
        triple: (a == b && b == c).then_some(a),
    }
}

/// Выигрывает ли ставка на этом броске.
pub fn wins(bet: SicBoBet, class: &DiceClass) -> bool {
    match bet {
        SicBoBet::Small => class.small,
        SicBoBet::Big => class.big,
        SicBoBet::Double => class.double,
        SicBoBet::Triple(face) => class.triple == Some(face),
        SicBoBet::AnyTriple => class.triple.is_some(),
    }
}
