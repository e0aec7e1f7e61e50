use tracing::debug;

use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::slot::{SlotGrid, SlotSymbol};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::draw::weighted_index;
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::slots::{match_paylines, total_multiplier, REEL_WEIGHTS};
use crate::payout::{compute_reward, RewardRule, SLOTS_RATE};

/// Средняя линия.
const MIDDLE_ROW: usize = 1;

#[derive(Clone, Copy, Debug, Default)]
pub struct Slots;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlotsState {
    pub grid: SlotGrid,
}

fn symbol<R: RandomSource>(rng: &mut R) -> SlotSymbol {
    let idx = weighted_index(rng, &REEL_WEIGHTS).unwrap_or(0);
    SlotSymbol::ALL[idx]
}

/// Каждый барабан даёт три символа сверху вниз.
pub fn spin<R: RandomSource>(rng: &mut R) -> SlotGrid {
    let mut grid = [[SlotSymbol::Mouse; 3]; 3];
    for reel in 0..3 {
        for row in grid.iter_mut() {
            row[reel] = symbol(rng);
        }
    }
    grid
}

impl GameRules for Slots {
    type Wager = ();
    type State = SlotsState;

    fn kind(&self) -> GameKind {
        GameKind::Slots
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (SlotsState, Step) {
        let mut grid = spin(ctx.rng);
        if ctx.forced {
            let line = symbol(ctx.rng);
            grid[MIDDLE_ROW] = [line; 3];
            debug!(round_id = ctx.round_id, %line, "слоты: синтезирована линия");
        }
        (SlotsState { grid }, Step::Resolve)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut SlotsState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        Err(illegal(decision))
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut SlotsState) -> Verdict {
        let wins = match_paylines(&state.grid);
        if wins.is_empty() {
            return Verdict::lose(OutcomeKind::Lose, "No line");
        }
        let multiplier = total_multiplier(&wins);
        let reward = compute_reward(
            ctx.tier,
            RewardRule::Formula {
                rate: SLOTS_RATE,
                multiplier,
            },
        );
        let label = wins
            .iter()
            .map(|w| format!("3x {}", w.symbol))
            .collect::<Vec<_>>()
            .join(" + ");
        Verdict::new(OutcomeKind::Win, label, reward)
    }

    fn report(&self, state: &SlotsState, _reveal: bool) -> HandReport {
        HandReport::Reels {
            grid: state.grid,
            winning_lines: match_paylines(&state.grid).iter().map(|w| w.row).collect(),
        }
    }
}
