use tracing::debug;

use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::draw::weighted_index;
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::wheel::{section_weights, winning_weights, WHEEL_SECTIONS};
use crate::payout::WHEEL_RATE;

#[derive(Clone, Copy, Debug, Default)]
pub struct MoneyWheel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WheelState {
    pub section: usize,
}

impl GameRules for MoneyWheel {
    type Wager = ();
    type State = WheelState;

    fn kind(&self) -> GameKind {
        GameKind::Wheel
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (WheelState, Step) {
        let weights = if ctx.forced {
            winning_weights()
        } else {
            section_weights()
        };
        let section = weighted_index(ctx.rng, &weights).unwrap_or(WHEEL_SECTIONS.len() - 1);
        debug!(round_id = ctx.round_id, section, forced = ctx.forced, "колесо остановилось");
        (WheelState { section }, Step::Resolve)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut WheelState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        Err(illegal(decision))
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut WheelState) -> Verdict {
        let Some(section) = WHEEL_SECTIONS.get(state.section) else {
            return Verdict::lose(OutcomeKind::Lose, "Bust");
        };
        let reward = WHEEL_RATE.reward_split(ctx.tier, section.ticket_mult, section.coin_mult);
        match section.kind {
            OutcomeKind::Tie => Verdict::push(section.kind, section.label, reward),
            _ => Verdict::new(section.kind, section.label, reward),
        }
    }

    fn report(&self, state: &WheelState, _reveal: bool) -> HandReport {
        let label = WHEEL_SECTIONS
            .get(state.section)
            .map(|s| s.label)
            .unwrap_or("Bust")
            .to_string();
        HandReport::Wheel {
            section: state.section,
            label,
        }
    }
}
