//! Инфраструктурный слой вокруг движка раундов:
//! - генерация ID раундов;
//! - RNG-реализации для движка и seed'ы для реплея;
//! - внешний леджер (кошелёк игрока);
//! - конфигурация;
//! - маппинги между API и domain.

pub mod config;
pub mod ids;
pub mod ledger;
pub mod mapping;
pub mod rng;
pub mod rng_seed;

pub use config::{ConfigError, ConfigLoader, EngineConfig};
pub use ids::*;
pub use ledger::{InMemoryLedger, Ledger, LedgerEntry, LedgerError, SharedLedger};
pub use mapping::*;
pub use rng::*;
pub use rng_seed::RngSeed;
