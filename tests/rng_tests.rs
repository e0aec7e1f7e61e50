//! RNG tests for casino-engine
//!
//! Эти тесты проверяют:
//! - детерминированность DeterministicRng
//! - различие seed → различие перестановок
//! - стабильность hash-reseeding (RngSeed::derive)
//! - статистику weighted_index и probability_gate
//! - что ScriptedRng раскладывает ровно заложенные карты/кубики
//! - уникальность карт при draw_unique_card

use std::collections::HashSet;

use casino_engine::domain::card::{Card, Rank, Suit};
use casino_engine::domain::GameKind;
use casino_engine::engine::{draw_card, draw_die, draw_unique_card, probability_gate, weighted_index, RandomSource};
use casino_engine::infra::{DeterministicRng, RngSeed, ScriptedRng, SystemRng};

//
// TEST 1 — DeterministicRng reproducibility
//
#[test]
fn deterministic_rng_same_seed_same_shuffle() {
    let mut r1 = DeterministicRng::from_u64(123);
    let mut r2 = DeterministicRng::from_u64(123);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_eq!(a, b, "Same seed must produce identical shuffle");
    assert_eq!(r1.uniform(), r2.uniform());
}

//
// TEST 2 — different seeds produce different shuffle
//
#[test]
fn deterministic_rng_different_seeds_different_shuffle() {
    let mut r1 = DeterministicRng::from_u64(111);
    let mut r2 = DeterministicRng::from_u64(222);

    let mut a: Vec<u32> = (0..52).collect();
    let mut b: Vec<u32> = (0..52).collect();

    r1.shuffle(&mut a);
    r2.shuffle(&mut b);

    assert_ne!(a, b, "Different seeds should give different permutations");
}

//
// TEST 3 — RngSeed::derive стабилен и разводит игры/раунды
//
#[test]
fn rng_seed_derive_is_stable_and_domain_separated() {
    let base = RngSeed::from_u64(42);

    assert_eq!(base.derive(GameKind::War, 1), base.derive(GameKind::War, 1));
    assert_ne!(base.derive(GameKind::War, 1), base.derive(GameKind::War, 2));
    assert_ne!(base.derive(GameKind::War, 1), base.derive(GameKind::Bingo, 1));
    assert_ne!(base.derive(GameKind::War, 1), base);

    let mut a = base.derive(GameKind::Slots, 7).to_rng();
    let mut b = base.derive(GameKind::Slots, 7).to_rng();
    for _ in 0..16 {
        assert_eq!(a.below(1000), b.below(1000));
    }
}

//
// TEST 4 — weighted_index([0.5, 0.5]) ≈ 50/50 на 100k бросков
//
#[test]
fn weighted_index_even_split_statistics() {
    let mut rng = DeterministicRng::from_u64(2024);
    let n = 100_000;
    let zeros = (0..n)
        .filter(|_| weighted_index(&mut rng, &[0.5, 0.5]) == Some(0))
        .count();
    let share = zeros as f64 / n as f64;
    assert!((share - 0.5).abs() < 0.01, "share of index 0 = {share}");
}

//
// TEST 5 — weighted_index: нулевые веса никогда не выбираются
//
#[test]
fn weighted_index_never_picks_zero_weight() {
    let mut rng = DeterministicRng::from_u64(5);
    let weights = [0.0, 0.25, 0.0, 0.75];
    for _ in 0..10_000 {
        let idx = weighted_index(&mut rng, &weights).unwrap();
        assert!(idx == 1 || idx == 3);
    }

    // бросок ровно 0.0 проходит мимо нулевого веса в начале
    let mut rng = ScriptedRng::new(1).with_uniforms([0.0, 0.0]);
    assert_eq!(weighted_index(&mut rng, &weights), Some(1));
    assert_eq!(weighted_index(&mut rng, &[0.0, 0.0, 0.4]), Some(2));
}

//
// TEST 6 — probability_gate: частота около p, крайние значения точны
//
#[test]
fn probability_gate_rate_and_extremes() {
    let mut rng = DeterministicRng::from_u64(9);
    let n = 100_000;
    let hits = (0..n).filter(|_| probability_gate(&mut rng, 0.05)).count();
    let rate = hits as f64 / n as f64;
    assert!((rate - 0.05).abs() < 0.005, "rate = {rate}");

    assert!((0..1000).all(|_| !probability_gate(&mut rng, 0.0)));
    assert!((0..1000).all(|_| probability_gate(&mut rng, 1.0)));
}

//
// TEST 7 — ScriptedRng отдаёт заложенные карты и кубики по порядку
//
#[test]
fn scripted_rng_replays_cards_and_dice() {
    let ace = Card::new(Rank::Ace, Suit::Spades);
    let two = Card::new(Rank::Two, Suit::Hearts);
    let mut rng = ScriptedRng::new(1).with_cards([ace, two]).with_dice([6, 1]);

    assert_eq!(draw_card(&mut rng), ace);
    assert_eq!(draw_card(&mut rng), two);
    assert_eq!(draw_die(&mut rng).value(), 6);
    assert_eq!(draw_die(&mut rng).value(), 1);
    assert_eq!(rng.remaining_script(), 0);

    // Дальше — детерминированный запасной генератор.
    let mut again = ScriptedRng::new(1);
    assert_eq!(rng.below(100), again.below(100));
}

//
// TEST 8 — draw_unique_card не повторяет исключённые карты
//
#[test]
fn draw_unique_card_skips_excluded() {
    let mut rng = DeterministicRng::from_u64(3);
    let mut seen = HashSet::new();
    for _ in 0..52 {
        let card = draw_unique_card(&mut rng, &seen).unwrap();
        assert!(seen.insert(card), "card {card} drawn twice");
    }
    assert_eq!(seen.len(), 52);
    assert_eq!(draw_unique_card(&mut rng, &seen), None);
}

//
// TEST 9 — SystemRng: значения в заявленных диапазонах
//
#[test]
fn system_rng_ranges() {
    let mut rng = SystemRng;
    for _ in 0..1000 {
        let u = rng.uniform();
        assert!((0.0..1.0).contains(&u));
        assert!(rng.below(6) < 6);
    }
    assert_eq!(rng.below(0), 0);
}
