use tracing::{debug, warn};

use crate::domain::card::{Card, Rank, Suit};
use crate::domain::deck::Deck;
use crate::domain::outcome::{HandReport, OutcomeKind};
use crate::domain::GameKind;
use crate::engine::actions::Decision;
use crate::engine::errors::EngineError;
use crate::engine::rules::{illegal, GameRules, RoundCtx, Step, Verdict};
use crate::engine::RandomSource;
use crate::eval::poker::{dealer_qualifies, evaluate_five, is_paying};
use crate::payout::{lookup, PayLine, StudLine};

/// Сколько раз перетасовываем колоду при синтезе выигрыша.
const FORCED_SHUFFLES: usize = 2000;

#[derive(Clone, Copy, Debug, Default)]
pub struct CaribbeanStud;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudState {
    pub player: Vec<Card>,
    /// Открыта только первая карта, пока игрок решает.
    pub dealer: Vec<Card>,
}

fn deal_from_shuffled<R: RandomSource>(rng: &mut R) -> StudState {
    let mut deck = Deck::standard_52();
    rng.shuffle(&mut deck.cards);
    let player = deck.draw_n(5);
    let dealer = deck.draw_n(5);
    StudState { player, dealer }
}

/// Игрок с оплачиваемой рукой бьёт квалифицированного дилера.
fn is_paying_win(state: &StudState) -> bool {
    let (Some(p), Some(d)) = (evaluate_five(&state.player), evaluate_five(&state.dealer)) else {
        return false;
    };
    dealer_qualifies(&state.dealer) && is_paying(p) && p > d
}

/// Роял-флеш пик против пары двоек.
fn constructed_win() -> StudState {
    let royal = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
    StudState {
        player: royal.iter().map(|&r| Card::new(r, Suit::Spades)).collect(),
        dealer: vec![
            Card::new(Rank::Two, Suit::Clubs),
            Card::new(Rank::Two, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Seven, Suit::Clubs),
            Card::new(Rank::Nine, Suit::Diamonds),
        ],
    }
}

impl GameRules for CaribbeanStud {
    type Wager = ();
    type State = StudState;

    fn kind(&self) -> GameKind {
        GameKind::CaribbeanStud
    }

    fn deal<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, _wager: ()) -> (StudState, Step) {
        if !ctx.forced {
            return (deal_from_shuffled(ctx.rng), Step::Await);
        }

        for attempt in 1..=FORCED_SHUFFLES {
            let state = deal_from_shuffled(ctx.rng);
            if is_paying_win(&state) {
                debug!(round_id = ctx.round_id, attempt, "caribbean stud: синтезирован выигрыш");
                return (state, Step::Await);
            }
        }
        warn!(round_id = ctx.round_id, "caribbean stud: перетасовки не дали выигрыша, собранная раздача");
        (constructed_win(), Step::Await)
    }

    fn decide<R: RandomSource>(
        &self,
        _ctx: &mut RoundCtx<'_, R>,
        _state: &mut StudState,
        decision: Decision,
    ) -> Result<Step, EngineError> {
        match decision {
            Decision::Fold => Ok(Step::Finished(Verdict::lose(OutcomeKind::Lose, "Fold"))),
            Decision::Call | Decision::Raise => Ok(Step::Resolve),
            other => Err(illegal(other)),
        }
    }

    fn resolve<R: RandomSource>(&self, ctx: &mut RoundCtx<'_, R>, state: &mut StudState) -> Verdict {
        let (Some(player), Some(dealer)) = (evaluate_five(&state.player), evaluate_five(&state.dealer)) else {
            return Verdict::lose(OutcomeKind::Lose, "Misdeal");
        };

        let line = if !dealer_qualifies(&state.dealer) {
            StudLine::NoQualify
        } else if player > dealer {
            StudLine::for_winning_hand(player)
        } else if player == dealer {
            StudLine::Push
        } else {
            return Verdict::lose(OutcomeKind::Lose, "Dealer wins");
        };

        let reward = lookup(line, ctx.tier).reward();
        match line {
            StudLine::NoQualify | StudLine::Push => Verdict::push(line.kind(), line.label(), reward),
            // Неоплачиваемая рука: выигрыш для серии, но награда нулевая.
            _ => Verdict::new(line.kind(), line.label(), reward),
        }
    }

    fn report(&self, state: &StudState, reveal: bool) -> HandReport {
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
