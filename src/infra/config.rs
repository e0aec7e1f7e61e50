//! Конфигурация движка: значения по умолчанию, TOML-файл, переопределения из env.

use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Вероятность принудительного выигрыша по умолчанию.
pub const DEFAULT_WIN_PROBABILITY: f64 = 0.05;

/// Ошибки загрузки/валидации конфига.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Не удалось загрузить конфиг: {0}")]
    LoadFailed(String),

    #[error("Неверное значение {field}={value}: {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Настройки движка.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// p для вероятностного гейта (доля принудительных выигрышей).
    pub win_probability: f64,
    /// Сколько побед подряд нужно для сигнала бонуса.
    pub streak_bonus_threshold: u32,
    /// Максимум вызванных чисел в бинго.
    pub bingo_call_cap: u8,
    /// Максимум карт в руке блэкджека (дальше — автоматический stand).
    pub blackjack_max_cards: usize,
    /// Ёмкость broadcast-канала снапшотов для фронта.
    pub snapshot_buffer: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            win_probability: DEFAULT_WIN_PROBABILITY,
            streak_bonus_threshold: 3,
            bingo_call_cap: 35,
            blackjack_max_cards: 12,
            snapshot_buffer: 64,
        }
    }
}

/// Загрузчик конфига: файл (опционально) → env → валидация.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self { config_path: None }
    }

    pub fn with_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn load(&self) -> Result<EngineConfig, ConfigError> {
        let mut config = match &self.config_path {
            Some(path) => Self::load_from_file(path)?,
            None => EngineConfig::default(),
        };

        Self::apply_env_overrides(&mut config)?;
        validate(&config)?;

        Ok(config)
    }

    /// Разобрать TOML из строки (без env-переопределений).
    pub fn parse_toml(content: &str) -> Result<EngineConfig, ConfigError> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| ConfigError::LoadFailed(format!("Ошибка разбора TOML: {e}")))?;
        validate(&config)?;
        Ok(config)
    }

    fn load_from_file(path: &Path) -> Result<EngineConfig, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::LoadFailed(format!("{}: {e}", path.display())))?;
        toml::from_str(&content)
            .map_err(|e| ConfigError::LoadFailed(format!("Ошибка разбора TOML: {e}")))
    }

    fn apply_env_overrides(config: &mut EngineConfig) -> Result<(), ConfigError> {
        if let Ok(v) = env::var("CASINO_WIN_PROBABILITY") {
            config.win_probability = parse_env("CASINO_WIN_PROBABILITY", v)?;
        }
        if let Ok(v) = env::var("CASINO_STREAK_THRESHOLD") {
            config.streak_bonus_threshold = parse_env("CASINO_STREAK_THRESHOLD", v)?;
        }
        if let Ok(v) = env::var("CASINO_BINGO_CALL_CAP") {
            config.bingo_call_cap = parse_env("CASINO_BINGO_CALL_CAP", v)?;
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(field: &str, value: String) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidValue {
        field: field.to_string(),
        value,
        reason: "не удалось разобрать значение".to_string(),
    })
}

/// Проверка диапазонов.
pub fn validate(config: &EngineConfig) -> Result<(), ConfigError> {
    if !(0.0..=1.0).contains(&config.win_probability) {
        return Err(ConfigError::InvalidValue {
            field: "win_probability".into(),
            value: config.win_probability.to_string(),
            reason: "должно быть в [0, 1]".into(),
        });
    }
    // 24 числа на карточке — меньше карточку не закрыть; больше 75 чисел нет.
    if !(24..=75).contains(&config.bingo_call_cap) {
        return Err(ConfigError::InvalidValue {
            field: "bingo_call_cap".into(),
            value: config.bingo_call_cap.to_string(),
            reason: "должно быть в [24, 75]".into(),
        });
    }
    if config.blackjack_max_cards < 2 {
        return Err(ConfigError::InvalidValue {
            field: "blackjack_max_cards".into(),
            value: config.blackjack_max_cards.to_string(),
            reason: "в руке минимум 2 карты".into(),
        });
    }
    if config.snapshot_buffer == 0 {
        return Err(ConfigError::InvalidValue {
            field: "snapshot_buffer".into(),
            value: "0".into(),
            reason: "ёмкость канала не может быть нулевой".into(),
        });
    }
    Ok(())
}
