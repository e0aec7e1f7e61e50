use core::fmt;

use serde::{Deserialize, Serialize};

/// Кубик: значение строго в 1..=6. После броска не меняется.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Die(u8);

impl Die {
    pub const FACES: u8 = 6;

    /// `None`, если значение вне 1..=6.
    pub fn new(value: u8) -> Option<Self> {
        (1..=Self::FACES).contains(&value).then_some(Die(value))
    }

    /// Грань по смещению 0..6 (остаток по модулю 6), удобно для RNG.
    pub(crate) fn from_offset(offset: u32) -> Self {
        Die((offset % Self::FACES as u32) as u8 + 1)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
