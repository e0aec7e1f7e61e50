use std::collections::HashSet;

use tracing::debug;

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::{BetTier, GameKind};
use crate::engine::actions::Decision;
use crate::engine::draw::{draw_card_from, draw_unique_card};
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::blackjack::{dealer_should_draw, is_bust, is_natural, judge, score, BLACKJACK};
use crate::payout::{lookup, BlackjackLine, PayLine};

const TEN_VALUES: [Rank; 4] = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King];

#[derive(Clone, Copy, Debug, Default)]
pub struct Blackjack;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BlackjackState {
    pub player: Vec<Card>,
    /// Вторая карта дилера закрыта до Resolving.
    pub dealer: Vec<Card>,
}

impl BlackjackState {
    fn dealt(&self) -> HashSet<Card> {
        self.player.iter().chain(&self.dealer).copied().collect()
    }
}

fn take_unique<R: RandomSource>(rng: &mut R, used: &mut HashSet<Card>) -> Option<Card> {
    let card = draw_unique_card(rng, used)?;
    used.insert(card);
    Some(card)
}

fn line_verdict(line: BlackjackLine, tier: BetTier) -> Verdict {
    let entry = lookup(line, tier);
    match line {
        BlackjackLine::Push => Verdict::push(line.kind(), line.label(), entry.reward()),
        _ => Verdict::new(line.kind(), line.label(), entry.reward()),
    }
}

impl GameRules for Blackjack {
    type Wager = ();
    type State = BlackjackState;

    fn kind(&self) -> GameKind {
        GameKind::Blackjack
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (BlackjackState, Step) {
        let mut used = HashSet::new();
        let mut player = Vec::with_capacity(ctx.config.blackjack_max_cards);
        let mut dealer = Vec::with_capacity(ctx.config.blackjack_max_cards);

        if ctx.forced {
            // Туз + десятка: натуральный блэкджек.
            let ace = draw_card_from(ctx.rng, &[Rank::Ace], &Suit::ALL);
            let ten = draw_card_from(ctx.rng, &TEN_VALUES, &Suit::ALL);
            for card in [ace, ten].into_iter().flatten() {
                used.insert(card);
                player.push(card);
            }
            debug!(round_id = ctx.round_id, "блэкджек: синтезирован натуральный");
        } else {
            player.extend(take_unique(ctx.rng, &mut used));
            player.extend(take_unique(ctx.rng, &mut used));
        }
        dealer.extend(take_unique(ctx.rng, &mut used));
        dealer.extend(take_unique(ctx.rng, &mut used));

        let state = BlackjackState { player, dealer };
        if is_natural(&state.player) {
            let verdict = line_verdict(BlackjackLine::Blackjack, ctx.tier);
            return (state, Step::Finished(verdict));
        }
        (state, Step::Await)
    }

    fn decide<R: RandomSource>(
        &self,
        ctx: &mut RoundCtx<'_, R>,
        state: &mut BlackjackState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        match decision {
            Decision::Hit => {
                let mut used = state.dealt();
                state.player.extend(take_unique(ctx.rng, &mut used));
                if is_bust(&state.player) {
                    return Ok(Step::Finished(Verdict::lose(OutcomeKind::Bust, "Bust")));
                }
                // 21 или лимит карт — автоматический stand.
                if score(&state.player) == BLACKJACK || state.player.len() >= ctx.config.blackjack_max_cards {
                    return Ok(Step::Resolve);
                }
                Ok(Step::Await)
            }
            Decision::Stand => Ok(Step::Resolve),
            other => Err(illegal(other)),
        }
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut BlackjackState) -> Verdict {
        let mut used = state.dealt();
        while dealer_should_draw(&state.dealer) && state.dealer.len() < ctx.config.blackjack_max_cards {
            match take_unique(ctx.rng, &mut used) {
                Some(card) => state.dealer.push(card),
                None => break,
            }
        }

        match judge(&state.player, &state.dealer) {
            OutcomeKind::Win => line_verdict(BlackjackLine::Win, ctx.tier),
            OutcomeKind::Tie => line_verdict(BlackjackLine::Push, ctx.tier),
            OutcomeKind::Bust => Verdict::lose(OutcomeKind::Bust, "Bust"),
            _ => Verdict::lose(OutcomeKind::Lose, "Dealer wins"),
        }
    }

    fn report(&self, state: &BlackjackState, reveal: bool) -> HandReport {
        let dealer = if reveal {
            state.dealer.clone()
        } else {
            state.dealer.iter().take(1).copied().collect()
        };
        HandReport::Cards {
            player: state.player.clone(),
            dealer,
        }
    }
}
