//! RngSeed — доменно-разделённый seed для RNG раундов.
//!
//! Позволяет:
//!   - хранить базовый seed ([u8;32] или u64 для тестов)
//!   - делать детерминированное hash-reseeding:
//!         new = H(domain || old || game || round_id)
//!   - создавать DeterministicRng из seed
//!
//! Так любой раунд можно переиграть (реплей/аудит), зная базовый seed и id раунда.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::{GameKind, RoundId};
use crate::infra::rng::DeterministicRng;

/// 32-байтовый seed для RNG.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RngSeed {
    pub bytes: [u8; 32],
}

impl RngSeed {
    /// Создать seed из 32 байт.
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self { bytes }
    }

    /// Создать seed из u64 (для удобства тестов и CLI).
    pub fn from_u64(x: u64) -> Self {
        let mut b = [0u8; 32];
        b[..8].copy_from_slice(&x.to_le_bytes());
        Self { bytes: b }
    }

    /// Seed конкретного раунда конкретной игры.
    pub fn derive(&self, game: GameKind, round_id: RoundId) -> Self {
        let mut hasher = Sha256::new();

        // Доменный префикс
        hasher.update(b"CASINO_ENGINE_RNG_V1");
        hasher.update(self.bytes);
        hasher.update(game.slug().as_bytes());
        hasher.update(round_id.to_le_bytes());

        let hash = hasher.finalize();

        let mut out = [0u8; 32];
        out.copy_from_slice(&hash[..32]);

        Self { bytes: out }
    }

    /// Создать DeterministicRng из seed.
    pub fn to_rng(&self) -> DeterministicRng {
        DeterministicRng::from_seed(self.bytes)
    }
}
