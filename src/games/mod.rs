//! Правила восьми мини-игр поверх общего автомата `GameTable`.
//!
//! Каждая игра умеет честно раздать, принять решение игрока, доиграть за
//! дилера и, если политика смещения попросила, собрать выигрышную раздачу,
//! которую обычный оценщик сам признает выигрышем.

pub mod bingo;
pub mod blackjack;
pub mod caribbean_stud;
pub mod red_dog;
pub mod sic_bo;
pub mod slots;
pub mod war;
pub mod wheel;

pub use bingo::{Bingo, BingoState};
pub use blackjack::{Blackjack, BlackjackState};
pub use caribbean_stud::{CaribbeanStud, StudState};
pub use red_dog::{RedDog, RedDogState};
pub use sic_bo::{SicBo, SicBoState};
pub use slots::{Slots, SlotsState};
pub use war::{War, WarState};
pub use wheel::{MoneyWheel, WheelState};
