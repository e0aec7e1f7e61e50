//! Хуки конкретной игры для общего автомата раунда.

use core::fmt;

use tracing::debug;

use crate::domain::currency::Reward;
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::{BetTier, GameKind, RoundId};
use crate::engine::actions::Decision;
use crate::engine::bias::{BiasContext, GateStage, OutcomeBiasPolicy};
use crate::engine::errors::EngineError;
use crate::engine::session::RoundPhase;
use crate::engine::RandomSource;
use crate::infra::config::EngineConfig;

/// Всё, что хук видит о текущем раунде.
pub struct RoundCtx<'a, R: RandomSource> {
    pub rng: &'a mut R,
    bias: &'a mut dyn OutcomeBiasPolicy,
    pub game: GameKind,
    pub round_id: RoundId,
    pub tier: BetTier,
    /// Политика на этапе Dealing решила синтезировать выигрыш.
    pub forced: bool,
    pub config: &'a EngineConfig,
}

impl<'a, R: RandomSource> RoundCtx<'a, R> {
    pub fn new(
        rng: &'a mut R,
        bias: &'a mut dyn OutcomeBiasPolicy,
        game: GameKind,
        round_id: RoundId,
        tier: BetTier,
        config: &'a EngineConfig,
    ) -> Self {
        Self {
            rng,
            bias,
            game,
            round_id,
            tier,
            forced: false,
            config,
        }
    }

    /// Спросить политику смещения. На каждое обращение тратится один `uniform()`.
    pub fn consult(&mut self, stage: GateStage) -> bool {
        let roll = self.rng.uniform();
        let ctx = BiasContext {
            game: self.game,
            round_id: self.round_id,
            stage,
            roll,
        };
        let force = self.bias.should_force_win(&ctx);
        debug!(game = %self.game, round_id = self.round_id, ?stage, roll, force, "гейт вероятности");
        force
    }
}

/// Оценка раунда, которую игра отдаёт движку.
#[derive(Clone, Debug, PartialEq)]
pub struct Verdict {
    pub kind: OutcomeKind,
    pub label: String,
    pub reward: Reward,
    pub stake_returned: bool,
}

impl Verdict {
    pub fn new(kind: OutcomeKind, label: impl Into<String>, reward: Reward) -> Self {
        Self {
            kind,
            label: label.into(),
            reward,
            stake_returned: false,
        }
    }

    /// Проигрыш: награда всегда нулевая.
    pub fn lose(kind: OutcomeKind, label: impl Into<String>) -> Self {
        Self::new(kind, label, Reward::ZERO)
    }

    /// Возврат ставки без прибыли.
    pub fn push(kind: OutcomeKind, label: impl Into<String>, reward: Reward) -> Self {
        Self {
            stake_returned: true,
            ..Self::new(kind, label, reward)
        }
    }

    /// Брошенный раунд.
    pub fn forfeit() -> Self {
        Self::lose(OutcomeKind::Forfeit, "Forfeit")
    }
}

/// Куда автомат двигается после хука.
#[derive(Clone, Debug, PartialEq)]
pub enum Step {
    /// Ждём решения игрока (Playing).
    Await,
    /// Идём в Resolving: авто-игра дилера и итог.
    Resolve,
    /// Итог известен сразу (перебор, натуральный блэкджек, фолд).
    Finished(Verdict),
}

/// Правила одной игры. Автомат `GameTable` сам ведёт фазы, леджер и серию;
/// игра отвечает только за раздачу, решения и оценку.
pub trait GameRules {
    /// Дополнительная информация о ставке (например, тип ставки Sic Bo).
    type Wager: Clone + fmt::Debug + Send;
    /// Состояние раздачи одного раунда.
    type State: Clone + fmt::Debug + Send;

    fn kind(&self) -> GameKind;

    /// Допустимые ставки игры.
    fn tiers(&self) -> &'static [u64; 4] {
        self.kind().tiers()
    }

    /// Проверка ставки до списания монет.
    fn validate_wager(&self, _wager: &Self::Wager) -> Result<(), EngineError> {
        Ok(())
    }

    /// Фаза Dealing. При `ctx.forced` раздача должна удовлетворять
    /// выигрышному условию обычного оценщика.
    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, wager: Self::Wager) -> (Self::State, Step);

    /// Фаза Playing.
    fn decide<R: RandomSource>(
        &self,
        ctx: &mut RoundCtx<'_, R>,
        state: &mut Self::State,
        decision: Decision,
    ) -> Result<Step, EngineError>;

    /// Фаза Resolving.
    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut Self::State) -> Verdict;

    /// Описание рук для фронта. `reveal == false` — скрытые карты дилера не показываем.
    fn report(&self, state: &Self::State, reveal: bool) -> HandReport;
}

/// Стандартная ошибка для решения, которое игра не поддерживает.
pub fn illegal(decision: Decision) -> EngineError {
    EngineError::IllegalDecision {
        decision,
        phase: RoundPhase::Playing,
    }
}
