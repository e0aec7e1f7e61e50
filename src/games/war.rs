use tracing::debug;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::draw::{draw_card, draw_card_from};
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::war::compare;
use crate::payout::{lookup, PayLine, WarLine};

/// Карта против карты. Решений нет: сразу автоматическое вскрытие.
#[derive(Clone, Copy, Debug, Default)]
pub struct War;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarState {
    pub player: Card,
    /// Карта дилера, закрыта до вскрытия.
    pub dealer: Card,
}

/// Игрок строго старше дилера.
fn forced_deal<R: RandomSource>(rng: &mut R) -> Option<(Card, Card)> {
    // Старший ранг 3..=14, младший 2..старший-1.
    let hi = 3 + rng.below(12) as u8;
    let lo = 2 + rng.below(u32::from(hi - 2)) as u8;
    let player = draw_card_from(rng, &[Rank::from_high_value(hi)?], &Suit::ALL)?;
    let dealer = draw_card_from(rng, &[Rank::from_high_value(lo)?], &Suit::ALL)?;
    Some((player, dealer))
}

impl GameRules for War {
    type Wager = ();
    type State = WarState;

    fn kind(&self) -> GameKind {
        GameKind::War
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (WarState, Step) {
        let (player, dealer) = match ctx.forced.then(|| forced_deal(ctx.rng)).flatten() {
            Some(pair) => {
                debug!(round_id = ctx.round_id, player = %pair.0, dealer = %pair.1, "war: синтезирован выигрыш");
                pair
            }
            None => (draw_card(ctx.rng), draw_card(ctx.rng)),
        };
        (WarState { player, dealer }, Step::Resolve)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut WarState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        Err(illegal(decision))
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut WarState) -> Verdict {
        let line = match compare(state.player, state.dealer) {
            OutcomeKind::Win => WarLine::Win,
            OutcomeKind::War => WarLine::War,
            _ => return Verdict::lose(OutcomeKind::Lose, "Dealer higher"),
        };
        Verdict::new(line.kind(), line.label(), lookup(line, ctx.tier).reward())
    }

    fn report(&self, state: &WarState, reveal: bool) -> HandReport {
        HandReport::Cards {
            player: vec![state.player],
            dealer: if reveal { vec![state.dealer] } else { Vec::new() },
        }
    }
}
