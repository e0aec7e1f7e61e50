//! Движок определения исходов и выплат для казино мини-игр.
//!
//! Восемь игр (Blackjack, Red Dog, War, Sic Bo, слоты, Caribbean Stud,
//! бинго, денежное колесо) делят одну экономику монет/билетов и один
//! автомат раунда `engine::GameTable`. Баланс хранит внешний леджер.

pub mod api;
pub mod domain;
pub mod engine;
pub mod eval;
pub mod games;
pub mod infra;
pub mod payout;
