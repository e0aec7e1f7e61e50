use tracing::debug;

use crate::domain::dice::Die;
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::draw::draw_die;
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::sic_bo::{classify, wins, SicBoBet};
use crate::payout::{compute_reward, RewardRule, SIC_BO_RATE};

/// Сколько раз перебрасываем кубики при синтезе Small/Big.
const FORCED_REROLLS: usize = 64;

#[derive(Clone, Copy, Debug, Default)]
pub struct SicBo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SicBoState {
    pub bet: SicBoBet,
    pub dice: [Die; 3],
}

fn roll<R: RandomSource>(rng: &mut R) -> [Die; 3] {
    [draw_die(rng), draw_die(rng), draw_die(rng)]
}

fn die(face: u8) -> Die {
    Die::from_offset(u32::from(face.saturating_sub(1)))
}

/// Бросок, на котором ставка выигрывает.
fn forced_roll<R: RandomSource>(rng: &mut R, bet: SicBoBet) -> [Die; 3] {
    match bet {
        SicBoBet::Small | SicBoBet::Big => {
            for _ in 0..FORCED_REROLLS {
                let dice = roll(rng);
                if wins(bet, &classify(&dice)) {
                    return dice;
                }
            }
            if bet == SicBoBet::Small {
                [die(1), die(2), die(3)]
            } else {
                [die(4), die(5), die(6)]
            }
        }
        SicBoBet::Double => {
            let pair = draw_die(rng);
            let mut dice = [pair, pair, draw_die(rng)];
            rng.shuffle(&mut dice);
            dice
        }
        SicBoBet::Triple(face) => [die(face); 3],
        SicBoBet::AnyTriple => [draw_die(rng); 3],
    }
}

impl GameRules for SicBo {
    type Wager = SicBoBet;
    type State = SicBoState;

    fn kind(&self) -> GameKind {
        GameKind::SicBo
    }

    fn validate_wager(&self, wager: &SicBoBet) -> Result<(), EngineError> {
        match wager {
            SicBoBet::Triple(face) if Die::new(*face).is_none() => Err(EngineError::InvalidWager(format!(
                "грань тройки должна быть 1..=6, получено {face}"
            ))),
            _ => Ok(()),
        }
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, bet: SicBoBet) -> (SicBoState, Step) {
        let dice = if ctx.forced {
            let dice = forced_roll(ctx.rng, bet);
            debug!(round_id = ctx.round_id, %bet, ?dice, "sic bo: синтезирован выигрыш");
            dice
        } else {
            roll(ctx.rng)
        };
        (SicBoState { bet, dice }, Step::Resolve)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut SicBoState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        Err(illegal(decision))
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut SicBoState) -> Verdict {
        let class = classify(&state.dice);
        if !wins(state.bet, &class) {
            return Verdict::lose(OutcomeKind::Lose, format!("{} loses on {}", state.bet, class.total));
        }
        let reward = compute_reward(
            ctx.tier,
            RewardRule::Formula {
                rate: SIC_BO_RATE,
                multiplier: state.bet.multiplier(),
            },
        );
        Verdict::new(OutcomeKind::Win, state.bet.to_string(), reward)
    }

    fn report(&self, state: &SicBoState, _reveal: bool) -> HandReport {
        HandReport::Dice {
            dice: state.dice,
            total: classify(&state.dice).total,
        }
    }
}
