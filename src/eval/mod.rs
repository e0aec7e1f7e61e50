//! Оценщики исходов: по одному на игру плюс ранжирование 5-карточных рук.
//!
//! Все функции здесь чистые: на вход готовые карты/кубики/символы,
//! на выход классификация. Случайность и выплаты живут в других модулях.

pub mod bingo;
pub mod blackjack;
pub mod hand_rank;
pub mod lookup_tables;
pub mod poker;
pub mod red_dog;
pub mod sic_bo;
pub mod slots;
pub mod war;
pub mod wheel;

pub use hand_rank::{describe_hand, HandCategory, HandRank};
pub use poker::{dealer_qualifies, evaluate_five, is_paying};
pub use red_dog::SpreadTier;
pub use sic_bo::{classify, DiceClass, SicBoBet};
pub use wheel::{WheelSection, WHEEL_SECTIONS};
