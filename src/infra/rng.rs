use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Системный RNG (thread_rng) для боевого режима.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }

    fn uniform(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        rand::thread_rng().gen_range(0..n)
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раунды при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: [u8; 32]) -> Self {
        Self {
            inner: StdRng::from_seed(seed),
        }
    }

    pub fn from_u64(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }

    fn uniform(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.inner.gen_range(0..n)
    }
}

/// RNG со "сценарием": сначала отдаёт заранее заложенные значения,
/// потом переключается на детерминированный генератор.
///
/// Нужен, чтобы в тестах и реплеях разложить конкретные карты/кубики:
/// `draw_card` делает `below(13)` (ранг) и `below(4)` (масть).
#[derive(Clone, Debug)]
pub struct ScriptedRng {
    below: VecDeque<u32>,
    uniforms: VecDeque<f64>,
    fallback: DeterministicRng,
}

impl ScriptedRng {
    pub fn new(seed: u64) -> Self {
        Self {
            below: VecDeque::new(),
            uniforms: VecDeque::new(),
            fallback: DeterministicRng::from_u64(seed),
        }
    }

    pub fn with_below(mut self, values: impl IntoIterator<Item = u32>) -> Self {
        self.below.extend(values);
        self
    }

    pub fn with_uniforms(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.uniforms.extend(values);
        self
    }

    /// Заложить карты в порядке вытягивания через `draw_card`.
    pub fn with_cards(mut self, cards: impl IntoIterator<Item = Card>) -> Self {
        for card in cards {
            self.push_card(card);
        }
        self
    }

    /// Заложить кубики (значения 1..=6) в порядке бросков.
    pub fn with_dice(mut self, faces: impl IntoIterator<Item = u8>) -> Self {
        self.below
            .extend(faces.into_iter().map(|f| u32::from(f.saturating_sub(1))));
        self
    }

    pub fn push_card(&mut self, card: Card) {
        let rank_idx = Rank::ALL.iter().position(|&r| r == card.rank).unwrap_or(0);
        let suit_idx = Suit::ALL.iter().position(|&s| s == card.suit).unwrap_or(0);
        self.below.push_back(rank_idx as u32);
        self.below.push_back(suit_idx as u32);
    }

    /// Сколько заложенных значений ещё не использовано.
    pub fn remaining_script(&self) -> usize {
        self.below.len() + self.uniforms.len()
    }
}

impl RandomSource for ScriptedRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        self.fallback.shuffle(slice);
    }

    fn uniform(&mut self) -> f64 {
        match self.uniforms.pop_front() {
            Some(u) => u.clamp(0.0, 1.0 - f64::EPSILON),
            None => self.fallback.uniform(),
        }
    }

    fn below(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        match self.below.pop_front() {
            Some(v) => v % n,
            None => self.fallback.below(n),
        }
    }
}
