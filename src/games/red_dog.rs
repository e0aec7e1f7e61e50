use std::collections::HashSet;

use tracing::debug;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::draw::{draw_card, draw_card_from, draw_unique_card};
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::red_dog::{judge_third, spread, SpreadTier};
use crate::payout::{lookup, PayLine, RedDogLine};

#[derive(Clone, Copy, Debug, Default)]
pub struct RedDog;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RedDogState {
    pub first: Card,
    pub second: Card,
    pub third: Option<Card>,
    /// Третья карта, выбранная при синтезе выигрыша.
    planned_third: Option<Card>,
}

impl RedDogState {
    pub fn spread(&self) -> u8 {
        spread(self.first, self.second).unwrap_or(0)
    }
}

fn card_of_value<R: RandomSource>(rng: &mut R, value: u8) -> Option<Card> {
    let rank = Rank::from_high_value(value)?;
    draw_card_from(rng, &[rank], &Suit::ALL)
}

/// Спред ≥ 1 и третья карта строго между.
fn forced_deal<R: RandomSource>(rng: &mut R) -> Option<(Card, Card, Card)> {
    let lo = 2 + rng.below(11) as u8; // 2..=12
    let hi = lo + 2 + rng.below(u32::from(13 - lo)) as u8; // lo+2..=14
    let mid = lo + 1 + rng.below(u32::from(hi - lo - 1)) as u8;

    let mut low = card_of_value(rng, lo)?;
    let mut high = card_of_value(rng, hi)?;
    let third = card_of_value(rng, mid)?;
    if rng.below(2) == 1 {
        core::mem::swap(&mut low, &mut high);
    }
    Some((low, high, third))
}

impl GameRules for RedDog {
    type Wager = ();
    type State = RedDogState;

    fn kind(&self) -> GameKind {
        GameKind::RedDog
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (RedDogState, Step) {
        if ctx.forced {
            if let Some((first, second, third)) = forced_deal(ctx.rng) {
                debug!(round_id = ctx.round_id, %first, %second, %third, "red dog: синтезирован выигрыш");
                let state = RedDogState {
                    first,
                    second,
                    third: None,
                    planned_third: Some(third),
                };
                return (state, Step::Await);
            }
        }

        let first = draw_card(ctx.rng);
        // Второй ранг обязательно отличается от первого.
        let same_rank: HashSet<Card> = Suit::ALL.iter().map(|&s| Card::new(first.rank, s)).collect();
        let second = draw_unique_card(ctx.rng, &same_rank).unwrap_or(first);
        let state = RedDogState {
            first,
            second,
            third: None,
            planned_third: None,
        };
        (state, Step::Await)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut RedDogState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        match decision {
            Decision::Call => Ok(Step::Resolve),
            Decision::Fold => Ok(Step::Finished(Verdict::lose(OutcomeKind::Lose, "Fold"))),
            other => Err(illegal(other)),
        }
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut RedDogState) -> Verdict {
        let third = match state.planned_third.take() {
            Some(card) => card,
            None => {
                let shown: HashSet<Card> = [state.first, state.second].into_iter().collect();
                draw_unique_card(ctx.rng, &shown).unwrap_or_else(|| draw_card(ctx.rng))
            }
        };
        state.third = Some(third);

        match judge_third(state.first, state.second, third) {
            OutcomeKind::Win => {
                let line = RedDogLine::Spread(SpreadTier::from_spread(state.spread()));
                Verdict::new(line.kind(), line.label(), lookup(line, ctx.tier).reward())
            }
            OutcomeKind::Tie => {
                let line = RedDogLine::Push;
                Verdict::push(line.kind(), line.label(), lookup(line, ctx.tier).reward())
            }
            _ => Verdict::lose(OutcomeKind::Lose, "Outside spread"),
        }
    }

    fn report(&self, state: &RedDogState, _reveal: bool) -> HandReport {
        HandReport::RedDog {
            first: state.first,
            second: state.second,
            third: state.third,
            spread: state.spread(),
        }
    }
}
