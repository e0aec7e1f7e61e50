//! Политика смещения исходов ("house edge override").
//!
//! Каждая игра честно оценивает руки по своим правилам, но перед раздачей
//! движок спрашивает политику, не нужно ли синтезировать выигрышную раздачу.
//! Синтез делается так, чтобы обычный оценщик сам признал руку выигрышной.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::domain::{GameKind, RoundId};
use crate::infra::config::DEFAULT_WIN_PROBABILITY;

/// Момент, в который спрашивают политику.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum GateStage {
    /// Фаза Dealing: синтезировать ли выигрышную раздачу.
    Deal,
    /// Бинго: карточка закрыта, засчитывать ли выигрыш.
    Completion,
}

/// Контекст одного обращения к политике.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BiasContext {
    pub game: GameKind,
    pub round_id: RoundId,
    pub stage: GateStage,
    /// Свежий бросок `uniform()` в [0, 1), сделанный движком для этого обращения.
    pub roll: f64,
}

pub trait OutcomeBiasPolicy: Send {
    fn should_force_win(&mut self, ctx: &BiasContext) -> bool;
}

/// Боевая политика: true с вероятностью `p` (`roll < p`).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbabilityGate {
    pub p: f64,
}

impl ProbabilityGate {
    pub fn new(p: f64) -> Self {
        Self { p: p.clamp(0.0, 1.0) }
    }
}

impl Default for ProbabilityGate {
    fn default() -> Self {
        Self::new(DEFAULT_WIN_PROBABILITY)
    }
}

impl OutcomeBiasPolicy for ProbabilityGate {
    fn should_force_win(&mut self, ctx: &BiasContext) -> bool {
        ctx.roll < self.p
    }
}

/// Всегда форсировать выигрыш.
#[derive(Clone, Copy, Debug, Default)]
pub struct AlwaysForce;

impl OutcomeBiasPolicy for AlwaysForce {
    fn should_force_win(&mut self, _ctx: &BiasContext) -> bool {
        true
    }
}

/// Никогда не вмешиваться: исход определяют только правила игры.
#[derive(Clone, Copy, Debug, Default)]
pub struct NeverForce;

impl OutcomeBiasPolicy for NeverForce {
    fn should_force_win(&mut self, _ctx: &BiasContext) -> bool {
        false
    }
}

/// Заранее заданные ответы по порядку; когда закончились — false.
#[derive(Clone, Debug, Default)]
pub struct ScriptedBias {
    answers: VecDeque<bool>,
    pub seen: Vec<GateStage>,
}

impl ScriptedBias {
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            seen: Vec::new(),
        }
    }
}

impl OutcomeBiasPolicy for ScriptedBias {
    fn should_force_win(&mut self, ctx: &BiasContext) -> bool {
        self.seen.push(ctx.stage);
        self.answers.pop_front().unwrap_or(false)
    }
}
