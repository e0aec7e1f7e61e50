use tracing::debug;

use crate::domain::bingo::{BingoCard, BINGO_SIZE};
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::bias::GateStage;
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::bingo::{column_range, completion_outcome, payout_multiplier, MAX_NUMBER};
use crate::payout::{compute_reward, RewardRule, BINGO_RATE};

#[derive(Clone, Copy, Debug, Default)]
pub struct Bingo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BingoState {
    pub card: BingoCard,
    /// Порядок вызова всех 75 чисел, определяется при раздаче.
    sequence: Vec<u8>,
    pub called: Vec<u8>,
}

impl BingoState {
    pub fn calls_left(&self, cap: u8) -> usize {
        usize::from(cap).saturating_sub(self.called.len())
    }
}

/// Карточка: по 5 разных чисел в столбце из его диапазона.
pub fn generate_card<R: RandomSource>(rng: &mut R) -> BingoCard {
    let mut columns = [[0u8; BINGO_SIZE]; BINGO_SIZE];
    for (col, column) in columns.iter_mut().enumerate() {
        let mut pool: Vec<u8> = column_range(col).collect();
        rng.shuffle(&mut pool);
        column.copy_from_slice(&pool[..BINGO_SIZE]);
    }
    BingoCard::from_columns(columns)
}

/// Все числа 1..=75 в случайном порядке.
pub fn call_sequence<R: RandomSource>(rng: &mut R) -> Vec<u8> {
    let mut seq: Vec<u8> = (1..=MAX_NUMBER).collect();
    rng.shuffle(&mut seq);
    seq
}

/// Порядок вызова, при котором все 24 числа карточки выходят в пределах `cap`.
pub fn forced_call_sequence<R: RandomSource>(rng: &mut R, card: &BingoCard, cap: u8) -> Vec<u8> {
    let on_card = card.numbers_on_card();
    let mut rest: Vec<u8> = (1..=MAX_NUMBER).filter(|n| !on_card.contains(n)).collect();
    rng.shuffle(&mut rest);

    let fillers = usize::from(cap).saturating_sub(on_card.len()).min(rest.len());
    let mut head: Vec<u8> = on_card;
    head.extend(rest.drain(..fillers));
    rng.shuffle(&mut head);
    head.extend(rest);
    head
}

impl GameRules for Bingo {
    type Wager = ();
    type State = BingoState;

    fn kind(&self) -> GameKind {
        GameKind::Bingo
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (BingoState, Step) {
        let card = generate_card(ctx.rng);
        let sequence = if ctx.forced {
            debug!(round_id = ctx.round_id, cap = ctx.config.bingo_call_cap, "бинго: карточка закроется до лимита");
            forced_call_sequence(ctx.rng, &card, ctx.config.bingo_call_cap)
        } else {
            call_sequence(ctx.rng)
        };
        let state = BingoState {
            card,
            sequence,
            called: Vec::new(),
        };
        (state, Step::Await)
    }

    fn decide<R: RandomSource>(
        &self,
        ctx: &mut RoundCtx<'_, R>,
        state: &mut BingoState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        if decision != Decision::CallNumber {
            return Err(illegal(decision));
        }
        let Some(&number) = state.sequence.get(state.called.len()) else {
            return Ok(Step::Finished(Verdict::lose(OutcomeKind::Lose, "Out of numbers")));
        };
        state.called.push(number);
        state.card.mark(number);

        if state.card.is_complete() {
            // Закрытая карточка ещё не выигрыш: решает второй гейт.
            let gate = ctx.consult(GateStage::Completion);
            let verdict = match completion_outcome(&state.card, gate) {
                Some(OutcomeKind::Win) => {
                    let multiplier = payout_multiplier(state.called.len());
                    let reward = compute_reward(
                        ctx.tier,
                        RewardRule::Formula {
                            rate: BINGO_RATE,
                            multiplier,
                        },
                    );
                    Verdict::new(OutcomeKind::Win, format!("Bingo x{multiplier}"), reward)
                }
                _ => Verdict::lose(OutcomeKind::NearMiss, "Near miss"),
            };
            return Ok(Step::Finished(verdict));
        }

        if state.calls_left(ctx.config.bingo_call_cap) == 0 {
            return Ok(Step::Finished(Verdict::lose(OutcomeKind::Lose, "Out of calls")));
        }
        Ok(Step::Await)
    }

    fn resolve<R: RandomSource>(&self, _ctx: &mut RoundCtx<'_, R>, _state: &mut BingoState) -> Verdict {
        // Бинго завершается прямо из Playing; сюда попадают только без выигрыша.
        Verdict::lose(OutcomeKind::Lose, "Out of calls")
    }

    fn report(&self, state: &BingoState, _reveal: bool) -> HandReport {
        HandReport::Bingo {
            card: state.card.clone(),
            called: state.called.clone(),
        }
    }
}
