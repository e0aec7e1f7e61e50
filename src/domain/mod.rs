//! Доменная модель: карты, кубики, валюты, уровни ставок, итоги раундов, серии.

pub mod bet;
pub mod bingo;
pub mod card;
pub mod currency;
pub mod deck;
pub mod dice;
pub mod outcome;
pub mod slot;
pub mod streak;

/// Идентификатор раунда (монотонный в пределах игрового стола).
pub type RoundId = u64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use bet::*;
pub use bingo::*;
pub use card::*;
pub use currency::*;
pub use deck::*;
pub use dice::*;
pub use outcome::*;
pub use slot::*;
pub use streak::*;
