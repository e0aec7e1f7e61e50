//! Игровой стол: общий автомат Betting → Dealing → Playing → Resolving → Result
//! поверх хуков конкретной игры.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

use crate::domain::outcome::{HandReport, RoundOutcome};
use crate::domain::streak::StreakState;
use crate::domain::{BetTier, GameKind};
use crate::engine::actions::Decision;
use crate::engine::bias::{GateStage, OutcomeBiasPolicy, ProbabilityGate};
use crate::engine::errors::EngineError;
use crate::engine::history::{RoundEventKind, RoundHistory};
use crate::engine::rules::{GameRules, RoundCtx, Step, Verdict};
use crate::engine::session::{RoundPhase, RoundSession};
use crate::engine::RandomSource;
use crate::infra::config::EngineConfig;
use crate::infra::ids::IdGenerator;
use crate::infra::ledger::Ledger;

/// Снапшот для фронта: итог раунда и серия после него.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub outcome: RoundOutcome,
    pub streak: StreakState,
    pub bonus_eligible: bool,
}

/// Стол одной игры. Одновременно активен максимум один раунд.
pub struct GameTable<G: GameRules, L: Ledger, R: RandomSource> {
    rules: G,
    ledger: L,
    rng: R,
    bias: Box<dyn OutcomeBiasPolicy>,
    config: EngineConfig,
    ids: IdGenerator,
    /// Единственное состояние, переживающее раунд.
    streak: StreakState,
    session: Option<RoundSession<G::State>>,
    feed: broadcast::Sender<RoundSnapshot>,
}

impl<G: GameRules, L: Ledger, R: RandomSource> GameTable<G, L, R> {
    /// Стол с вероятностным гейтом из конфига.
    pub fn new(rules: G, ledger: L, rng: R, config: EngineConfig) -> Self {
        let (feed, _) = broadcast::channel(config.snapshot_buffer.max(1));
        Self {
            rules,
            ledger,
            rng,
            bias: Box::new(ProbabilityGate::new(config.win_probability)),
            config,
            ids: IdGenerator::new(),
            streak: StreakState::new(),
            session: None,
            feed,
        }
    }

    pub fn with_bias(mut self, bias: impl OutcomeBiasPolicy + 'static) -> Self {
        self.bias = Box::new(bias);
        self
    }

    /// Восстановить серию из прошлой сессии игрока.
    pub fn with_streak(mut self, streak: StreakState) -> Self {
        self.streak = streak;
        self
    }

    pub fn with_ids(mut self, ids: IdGenerator) -> Self {
        self.ids = ids;
        self
    }

    pub fn game(&self) -> GameKind {
        self.rules.kind()
    }

    pub fn rules(&self) -> &G {
        &self.rules
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn ledger(&self) -> &L {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut L {
        &mut self.ledger
    }

    pub fn streak(&self) -> StreakState {
        self.streak
    }

    pub fn phase(&self) -> RoundPhase {
        self.session
            .as_ref()
            .map(|s| s.phase)
            .unwrap_or(RoundPhase::Betting)
    }

    pub fn session(&self) -> Option<&RoundSession<G::State>> {
        self.session.as_ref()
    }

    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.session.as_ref().and_then(|s| s.outcome.as_ref())
    }

    /// Руки текущего раунда. Пока идёт Playing, скрытые карты дилера не раскрываются.
    pub fn hands(&self) -> Option<HandReport> {
        self.session.as_ref().map(|s| {
            let reveal = !matches!(s.phase, RoundPhase::Dealing | RoundPhase::Playing);
            self.rules.report(&s.state, reveal)
        })
    }

    /// Поток снапшотов итогов для фронта.
    pub fn subscribe(&self) -> broadcast::Receiver<RoundSnapshot> {
        self.feed.subscribe()
    }

    /// "Играть снова": сбросить раунд, серия сохраняется.
    pub fn new_round(&mut self) -> Result<(), EngineError> {
        if let Some(session) = &self.session {
            if session.awaiting_settlement() {
                return Err(EngineError::SettlementPending);
            }
            if session.phase != RoundPhase::Result {
                return Err(EngineError::RoundInProgress);
            }
        }
        self.session = None;
        Ok(())
    }

    /// Принять ставку и раздать.
    ///
    /// Все проверки (уровень ставки, вид ставки, баланс) выполняются до списания
    /// и до любого обращения к RNG; при ошибке стол остаётся в Betting.
    pub async fn place_bet(&mut self, amount: u64, wager: G::Wager) -> Result<RoundPhase, EngineError> {
        self.new_round()?;

        let game = self.rules.kind();
        let tier = BetTier::resolve(game, amount).ok_or(EngineError::InvalidBetTier { game, amount })?;
        self.rules.validate_wager(&wager)?;

        let stake = tier.stake();
        if !self.ledger.can_afford(stake).await {
            debug!(game = %game, amount, "ставка отклонена: не хватает монет");
            return Err(EngineError::InsufficientFunds { stake: amount });
        }

        let round_id = self.ids.next_round_id();
        let reason = format!("{}:{}:bet", game.slug(), round_id);
        if let Err(err) = self.ledger.debit(stake, &reason).await {
            warn!(game = %game, round_id, error = %err, "списание ставки не прошло");
            return Err(err.into());
        }

        let mut history = RoundHistory::new();
        history.push(RoundEventKind::BetPlaced { game, round_id, stake });

        let mut ctx = RoundCtx::new(&mut self.rng, self.bias.as_mut(), game, round_id, tier, &self.config);
        let forced = ctx.consult(GateStage::Deal);
        ctx.forced = forced;
        let (state, step) = self.rules.deal(&mut ctx, wager);

        history.push(RoundEventKind::Dealt { forced });
        history.push(RoundEventKind::PhaseChanged {
            phase: RoundPhase::Dealing,
        });
        debug!(game = %game, round_id, tier = amount, forced, "раздача выполнена");

        self.session = Some(RoundSession::new(round_id, tier, state, forced, history));
        self.apply_step(step).await
    }

    /// Решение игрока в фазе Playing.
    pub async fn advance(&mut self, decision: Decision) -> Result<RoundPhase, EngineError> {
        let game = self.rules.kind();
        let session = self.session.as_mut().ok_or(EngineError::NoActiveRound)?;
        if session.awaiting_settlement() {
            return Err(EngineError::SettlementPending);
        }
        if session.phase != RoundPhase::Playing {
            return Err(EngineError::IllegalDecision {
                decision,
                phase: session.phase,
            });
        }
        if decision == Decision::Forfeit {
            return self.abandon().await;
        }

        let mut ctx = RoundCtx::new(
            &mut self.rng,
            self.bias.as_mut(),
            game,
            session.round_id,
            session.tier,
            &self.config,
        );
        ctx.forced = session.forced;
        let step = self.rules.decide(&mut ctx, &mut session.state, decision)?;
        session.history.push(RoundEventKind::DecisionApplied { decision });
        debug!(game = %game, round_id = session.round_id, ?decision, "решение применено");

        self.apply_step(step).await
    }

    /// Бросить раунд посреди Dealing/Playing: проигрыш, ставка сгорает.
    pub async fn abandon(&mut self) -> Result<RoundPhase, EngineError> {
        let session = self.session.as_mut().ok_or(EngineError::NoActiveRound)?;
        if session.awaiting_settlement() {
            return Err(EngineError::SettlementPending);
        }
        match session.phase {
            RoundPhase::Dealing | RoundPhase::Playing => {
                session.history.push(RoundEventKind::DecisionApplied {
                    decision: Decision::Forfeit,
                });
                self.finalize(Verdict::forfeit()).await
            }
            phase => Err(EngineError::IllegalDecision {
                decision: Decision::Forfeit,
                phase,
            }),
        }
    }

    /// Повторить выплату по уже зафиксированному итогу. Итог не пересчитывается.
    pub async fn retry_settlement(&mut self) -> Result<RoundPhase, EngineError> {
        let session = self.session.as_ref().ok_or(EngineError::NoActiveRound)?;
        if session.settled {
            return Ok(session.phase);
        }
        if session.outcome.is_none() {
            return Err(EngineError::NoActiveRound);
        }
        warn!(game = %self.rules.kind(), round_id = session.round_id, "повтор выплаты");
        self.settle().await
    }

    async fn apply_step(&mut self, step: Step) -> Result<RoundPhase, EngineError> {
        let game = self.rules.kind();
        let session = self.session.as_mut().ok_or(EngineError::NoActiveRound)?;
        match step {
            Step::Await => {
                if session.phase != RoundPhase::Playing {
                    session.phase = RoundPhase::Playing;
                    session.history.push(RoundEventKind::PhaseChanged {
                        phase: RoundPhase::Playing,
                    });
                }
                Ok(RoundPhase::Playing)
            }
            Step::Resolve => {
                session.phase = RoundPhase::Resolving;
                session.history.push(RoundEventKind::PhaseChanged {
                    phase: RoundPhase::Resolving,
                });
                let mut ctx = RoundCtx::new(
                    &mut self.rng,
                    self.bias.as_mut(),
                    game,
                    session.round_id,
                    session.tier,
                    &self.config,
                );
                ctx.forced = session.forced;
                let verdict = self.rules.resolve(&mut ctx, &mut session.state);
                self.finalize(verdict).await
            }
            Step::Finished(verdict) => self.finalize(verdict).await,
        }
    }

    /// Зафиксировать итог (ровно один раз), обновить серию, отдать снапшот
    /// и провести выплату.
    async fn finalize(&mut self, verdict: Verdict) -> Result<RoundPhase, EngineError> {
        let game = self.rules.kind();
        let session = self.session.as_mut().ok_or(EngineError::NoActiveRound)?;
        if session.outcome.is_some() {
            return Ok(session.phase);
        }

        let outcome = RoundOutcome {
            round_id: session.round_id,
            game,
            kind: verdict.kind,
            stake: session.tier.stake(),
            hands: self.rules.report(&session.state, true),
            label: verdict.label,
            reward: verdict.reward,
            stake_returned: verdict.stake_returned,
            forced: session.forced,
        };
        session.history.push(RoundEventKind::OutcomeFinalized {
            kind: outcome.kind,
            reward: outcome.reward,
        });
        session.outcome = Some(outcome.clone());

        self.streak = self.streak.record(outcome.kind);
        let bonus_eligible = self.streak.is_bonus_eligible(self.config.streak_bonus_threshold);
        info!(
            game = %game,
            round_id = outcome.round_id,
            kind = ?outcome.kind,
            label = %outcome.label,
            tickets = outcome.reward.tickets.0,
            coins = outcome.reward.coins.0,
            forced = outcome.forced,
            streak = self.streak.consecutive_wins,
            "итог раунда зафиксирован"
        );

        let zero_reward = outcome.reward.is_zero();
        // Получателей может не быть: это не ошибка.
        let _ = self.feed.send(RoundSnapshot {
            outcome,
            streak: self.streak,
            bonus_eligible,
        });

        if zero_reward {
            if let Some(session) = self.session.as_mut() {
                session.settled = true;
                session.phase = RoundPhase::Result;
                session.history.push(RoundEventKind::PhaseChanged {
                    phase: RoundPhase::Result,
                });
            }
            return Ok(RoundPhase::Result);
        }

        if let Some(session) = self.session.as_mut() {
            if session.phase != RoundPhase::Resolving {
                session.phase = RoundPhase::Resolving;
                session.history.push(RoundEventKind::PhaseChanged {
                    phase: RoundPhase::Resolving,
                });
            }
        }
        self.settle().await
    }

    /// Начислить награду по зафиксированному итогу.
    async fn settle(&mut self) -> Result<RoundPhase, EngineError> {
        let game = self.rules.kind();
        let session = self.session.as_mut().ok_or(EngineError::NoActiveRound)?;
        let outcome = session.outcome.as_ref().ok_or(EngineError::NoActiveRound)?;
        let reward = outcome.reward;
        let reason = format!("{}:{}:payout", game.slug(), session.round_id);

        match self.ledger.credit(reward.tickets, reward.coins, &reason).await {
            Ok(()) => {
                session.settled = true;
                session.history.push(RoundEventKind::Settled { reward });
                session.phase = RoundPhase::Result;
                session.history.push(RoundEventKind::PhaseChanged {
                    phase: RoundPhase::Result,
                });
                info!(
                    game = %game,
                    round_id = session.round_id,
                    tickets = reward.tickets.0,
                    coins = reward.coins.0,
                    "выплата проведена"
                );
                Ok(RoundPhase::Result)
            }
            Err(err) => {
                warn!(game = %game, round_id = session.round_id, error = %err, "выплата не прошла, итог сохранён");
                session.history.push(RoundEventKind::SettlementFailed {
                    reason: err.to_string(),
                });
                Err(err.into())
            }
        }
    }
}
