//! Property-тесты оценщиков (proptest).
//!
//! - очки блэкджека не зависят от порядка карт и совпадают с закрытой формулой
//! - ранг покерной руки не зависит от порядка карт
//! - сравнение рук антисимметрично
//! - Red Dog: выигрыш только строго между, и только при спреде ≥ 1

use casino_engine::domain::card::{Card, Rank, Suit};
use casino_engine::domain::outcome::OutcomeKind;
use casino_engine::domain::Deck;
use casino_engine::eval::blackjack::{is_bust, score};
use casino_engine::eval::evaluate_five;
use casino_engine::eval::red_dog::{judge_third, spread};
use proptest::prelude::*;

fn any_card() -> impl Strategy<Value = Card> {
    (0usize..13, 0usize..4).prop_map(|(r, s)| Card::new(Rank::ALL[r], Suit::ALL[s]))
}

fn five_distinct() -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(Deck::standard_52().cards, 5).prop_shuffle()
}

/// Тотал в закрытой форме: тузов по 11 ровно столько, сколько влезает в 21
/// поверх суммы остальных карт, прочие тузы по 1.
fn expected_total(cards: &[Card]) -> u32 {
    let base: u32 = cards
        .iter()
        .filter(|c| !c.is_ace())
        .map(|c| u32::from(c.blackjack_points()))
        .sum();
    let aces = cards.iter().filter(|c| c.is_ace()).count() as u32;
    let elevens = aces.min(21u32.saturating_sub(base) / 11);
    base + 11 * elevens + (aces - elevens)
}

proptest! {
    #[test]
    fn blackjack_score_is_order_independent(
        (hand, shuffled) in prop::collection::vec(any_card(), 1..12)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(score(&hand), score(&shuffled));
        prop_assert_eq!(score(&hand), expected_total(&hand));
        prop_assert_eq!(is_bust(&hand), score(&hand) > 21);
    }

    #[test]
    fn poker_rank_is_order_independent(
        (hand, shuffled) in five_distinct().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(evaluate_five(&hand), evaluate_five(&shuffled));
    }

    #[test]
    fn poker_comparison_is_antisymmetric(a in five_distinct(), b in five_distinct()) {
        let ra = evaluate_five(&a).unwrap();
        let rb = evaluate_five(&b).unwrap();
        prop_assert_eq!(ra > rb, rb < ra);
        prop_assert_eq!(ra == rb, rb == ra);
    }

    #[test]
    fn red_dog_wins_only_strictly_between(a in any_card(), b in any_card(), third in any_card()) {
        let outcome = judge_third(a, b, third);
        let (lo, hi) = if a.high_value() <= b.high_value() {
            (a.high_value(), b.high_value())
        } else {
            (b.high_value(), a.high_value())
        };
        let v = third.high_value();
        match outcome {
            OutcomeKind::Win => {
                prop_assert!(lo < v && v < hi);
                prop_assert!(spread(a, b).unwrap_or(0) >= 1);
            }
            OutcomeKind::Tie => prop_assert!(v == lo || v == hi),
            OutcomeKind::Lose => prop_assert!(v < lo || v > hi),
            other => prop_assert!(false, "unexpected {:?}", other),
        }
    }
}
