//! Тесты чистых оценщиков: блэкджек, Red Dog, War, Sic Bo, покер,
//! бинго, колесо, слоты.

use casino_engine::domain::bingo::BingoCard;
use casino_engine::domain::card::Card;
use casino_engine::domain::dice::Die;
use casino_engine::domain::outcome::OutcomeKind;
use casino_engine::domain::slot::SlotSymbol;
use casino_engine::eval::bingo::{column_range, completion_outcome, is_valid_card, payout_multiplier};
use casino_engine::eval::blackjack::{dealer_should_draw, is_bust, is_natural, judge, score};
use casino_engine::eval::poker::{dealer_qualifies, evaluate_five, is_paying};
use casino_engine::eval::red_dog::{judge_third, spread, SpreadTier};
use casino_engine::eval::sic_bo::{classify, wins, SicBoBet};
use casino_engine::eval::slots::{match_paylines, total_multiplier};
use casino_engine::eval::war::compare;
use casino_engine::eval::wheel::{section_weights, winning_weights, WHEEL_SECTIONS};
use casino_engine::eval::{describe_hand, HandCategory};

fn c(s: &str) -> Card {
    s.parse().expect("valid card")
}

fn hand(s: &str) -> Vec<Card> {
    s.split_whitespace().map(c).collect()
}

fn dice(a: u8, b: u8, d: u8) -> [Die; 3] {
    [Die::new(a).unwrap(), Die::new(b).unwrap(), Die::new(d).unwrap()]
}

/// Карточка, где в столбце c стоят числа 15c+1..=15c+5.
fn simple_card() -> BingoCard {
    let mut columns = [[0u8; 5]; 5];
    for (col, column) in columns.iter_mut().enumerate() {
        for (row, n) in column.iter_mut().enumerate() {
            *n = (col * 15 + row + 1) as u8;
        }
    }
    BingoCard::from_columns(columns)
}

//
// TEST 1 — блэкджек: [A, K] = натуральный 21
//
#[test]
fn blackjack_ace_king_is_natural_21() {
    let cards = hand("As Kh");
    assert_eq!(score(&cards), 21);
    assert!(is_natural(&cards));
    assert!(!is_bust(&cards));
}

//
// TEST 2 — блэкджек: тузы считаются по одному, 11 пока влезает в 21
//
#[test]
fn blackjack_aces_count_one_at_a_time() {
    assert_eq!(score(&hand("Ac Ad")), 12);
    assert_eq!(score(&hand("Ac 6d")), 17);
    assert_eq!(score(&hand("Ac 6d Kh")), 17);

    // 10 без тузов → первый туз 11 (21) → второй уже 1 (22)
    assert_eq!(score(&hand("Ac Ad Kh")), 22);
    assert!(is_bust(&hand("Ac Ad Kh")));
    // 9 → 20 → 21 → 22
    assert_eq!(score(&hand("9c Ad Ah As")), 22);
    assert!(is_bust(&hand("9c Ad Ah As")));
    // 5 → 16 → 17
    assert_eq!(score(&hand("5c Ad Ah")), 17);

    assert!(is_bust(&hand("Kc Qd 2h")));
    // 21 из трёх карт — не натуральный
    assert!(!is_natural(&hand("7c 7d 7h")));
}

//
// TEST 3 — блэкджек: дилер стоит на 17, сравнение рук
//
#[test]
fn blackjack_dealer_rule_and_judging() {
    assert!(dealer_should_draw(&hand("Tc 6d")));
    assert!(!dealer_should_draw(&hand("Tc 7d")));
    assert!(!dealer_should_draw(&hand("Ac 6d")), "мягкие 17 — стоп");

    assert_eq!(judge(&hand("Tc 9d"), &hand("Th 7s")), OutcomeKind::Win);
    assert_eq!(judge(&hand("Tc 7d"), &hand("Th 9s")), OutcomeKind::Lose);
    assert_eq!(judge(&hand("Tc 8d"), &hand("9h 9s")), OutcomeKind::Tie);
    assert_eq!(judge(&hand("Tc 2d"), &hand("Th 6s Ks")), OutcomeKind::Win);
    assert_eq!(judge(&hand("Tc 6d Kh"), &hand("Th 6s Ks")), OutcomeKind::Bust);
}

//
// TEST 4 — Red Dog: [7, 9] → спред 1; 8 выигрывает, 7/9 — push, остальное — проигрыш
//
#[test]
fn red_dog_seven_nine_scenario() {
    let (a, b) = (c("7c"), c("9d"));
    assert_eq!(spread(a, b), Some(1));
    assert_eq!(SpreadTier::from_spread(1), SpreadTier::One);

    assert_eq!(judge_third(a, b, c("8h")), OutcomeKind::Win);
    assert_eq!(judge_third(a, b, c("7s")), OutcomeKind::Tie);
    assert_eq!(judge_third(a, b, c("9h")), OutcomeKind::Tie);
    for other in ["2c", "6h", "Td", "As"] {
        assert_eq!(judge_third(a, b, c(other)), OutcomeKind::Lose, "{other}");
    }
}

//
// TEST 5 — Red Dog: спред 0 нельзя выиграть обычной третьей картой
//
#[test]
fn red_dog_consecutive_spread_is_unwinnable_nominally() {
    let (a, b) = (c("7c"), c("8d"));
    assert_eq!(spread(a, b), Some(0));
    assert_eq!(SpreadTier::from_spread(0), SpreadTier::Consecutive);
    for card in casino_engine::domain::Deck::standard_52().cards {
        assert_ne!(judge_third(a, b, card), OutcomeKind::Win);
    }
    assert_eq!(spread(c("7c"), c("7d")), None);
    assert_eq!(spread(c("2c"), c("As")), Some(11));
}

//
// TEST 6 — War: туз старший, равные карты = War
//
#[test]
fn war_comparison() {
    assert_eq!(compare(c("Ac"), c("Kd")), OutcomeKind::Win);
    assert_eq!(compare(c("2c"), c("3d")), OutcomeKind::Lose);
    assert_eq!(compare(c("9c"), c("9h")), OutcomeKind::War);
    assert!(OutcomeKind::War.is_win());
}

//
// TEST 7 — Sic Bo: [2,2,2] — Triple и AnyTriple, и ставка Small тоже выигрывает
//
#[test]
fn sic_bo_triple_twos_scenario() {
    let class = classify(&dice(2, 2, 2));
    assert_eq!(class.total, 6);
    assert_eq!(class.triple, Some(2));

    let winning = class.winning_bets();
    assert!(winning.contains(&SicBoBet::Triple(2)));
    assert!(winning.contains(&SicBoBet::AnyTriple));

    assert!(wins(SicBoBet::Small, &class), "сумма 6 выигрывает Small независимо от тройки");
    assert!(!wins(SicBoBet::Big, &class));
    assert!(!wins(SicBoBet::Triple(3), &class));
}

//
// TEST 8 — Sic Bo: полный перебор 216 бросков
//
#[test]
fn sic_bo_classification_over_all_rolls() {
    for a in 1..=6 {
        for b in 1..=6 {
            for d in 1..=6 {
                let class = classify(&dice(a, b, d));
                let total = a + b + d;
                let is_triple = a == b && b == d;
                if !is_triple && (4..=10).contains(&total) {
                    assert!(class.small && !class.big);
                }
                if !is_triple && (11..=17).contains(&total) {
                    assert!(class.big && !class.small);
                }
                if is_triple {
                    assert!(wins(SicBoBet::AnyTriple, &class));
                    assert!(wins(SicBoBet::Triple(a), &class));
                    assert!(wins(SicBoBet::Double, &class));
                }
                assert_eq!(class.double, a == b || b == d || a == d);
            }
        }
    }
}

//
// TEST 9 — покер: иерархия категорий
//
#[test]
fn poker_category_hierarchy() {
    let cases = [
        ("Ts Js Qs Ks As", HandCategory::StraightFlush),
        ("9c 9d 9h 9s 2c", HandCategory::FourOfAKind),
        ("9c 9d 9h 2s 2c", HandCategory::FullHouse),
        ("2h 7h 9h Jh Kh", HandCategory::Flush),
        ("5c 6d 7h 8s 9c", HandCategory::Straight),
        ("9c 9d 9h 2s 5c", HandCategory::ThreeOfAKind),
        ("9c 9d 5h 5s 2c", HandCategory::TwoPair),
        ("9c 9d 5h 7s 2c", HandCategory::OnePair),
        ("9c Jd 5h 7s 2c", HandCategory::HighCard),
    ];
    let mut prev = None;
    for (cards, category) in cases {
        let rank = evaluate_five(&hand(cards)).unwrap();
        assert_eq!(rank.category(), category, "{cards}");
        if let Some(p) = prev {
            assert!(rank < p, "{cards} должна быть слабее предыдущей");
        }
        prev = Some(rank);
    }
}

//
// TEST 10 — покер: колесо A-2-3-4-5 — стрит, роял распознаётся
//
#[test]
fn poker_wheel_straight_and_royal() {
    let wheel = evaluate_five(&hand("Ac 2d 3h 4s 5c")).unwrap();
    let six_high = evaluate_five(&hand("2c 3d 4h 5s 6c")).unwrap();
    assert_eq!(wheel.category(), HandCategory::Straight);
    assert_eq!(six_high.category(), HandCategory::Straight);
    // туз = 14 и в колесе: [14,5,4,3,2] > [6,5,4,3,2]
    assert!(wheel > six_high);

    let royal = evaluate_five(&hand("Ts Js Qs Ks As")).unwrap();
    let steel_wheel = evaluate_five(&hand("Ah 2h 3h 4h 5h")).unwrap();
    assert!(royal.is_royal());
    assert!(!steel_wheel.is_royal());
    assert!(royal > steel_wheel);
    assert_eq!(describe_hand(royal), "Royal flush");
    assert_eq!(describe_hand(steel_wheel), "Straight flush");
}

//
// TEST 11 — покер: тай-брейк внутри категории по пяти значениям по убыванию
//
#[test]
fn poker_tie_breaks_on_sorted_values() {
    // [14,13,12,12,11] против [13,13,4,3,2]: решает первое различие
    let queens = evaluate_five(&hand("Qc Qd Ah Ks Jc")).unwrap();
    let kings = evaluate_five(&hand("Kc Kd 2h 3s 4c")).unwrap();
    assert_eq!(queens.category(), HandCategory::OnePair);
    assert!(queens > kings);

    // [14,14,3,3,2] против [14,13,13,12,12]: тузы равны, решает второе значение
    let aces_up = evaluate_five(&hand("Ac Ad 3h 3s 2c")).unwrap();
    let kings_up = evaluate_five(&hand("Kc Kd Qh Qs Ac")).unwrap();
    assert_eq!(aces_up.category(), HandCategory::TwoPair);
    assert!(aces_up > kings_up);

    let a = evaluate_five(&hand("9c 9d 8h 5s 2c")).unwrap();
    let b = evaluate_five(&hand("9h 9s 8c 4d 3c")).unwrap();
    assert!(a > b, "решают значения по убыванию");

    let same = evaluate_five(&hand("9h 9s 8c 5d 2d")).unwrap();
    assert_eq!(a, same, "масти не влияют");
}

//
// TEST 12 — Caribbean Stud: оплачиваемые руки и квалификация дилера
//
#[test]
fn caribbean_paying_hand_and_dealer_qualification() {
    assert!(!is_paying(evaluate_five(&hand("Tc Td 2h 5c 9s")).unwrap()));
    assert!(is_paying(evaluate_five(&hand("Jc Jd 2h 5c 9s")).unwrap()));
    assert!(is_paying(evaluate_five(&hand("2c 2d 3h 3c 9s")).unwrap()));
    assert!(!is_paying(evaluate_five(&hand("Ac Kd 2h 5c 9s")).unwrap()));

    assert!(dealer_qualifies(&hand("2c 2d 5h 7c 9s")), "пара");
    assert!(dealer_qualifies(&hand("Qc 3d 5h 7c 9s")), "дама");
    assert!(!dealer_qualifies(&hand("Jc 3d 5h 7c 9s")));
    assert!(!dealer_qualifies(&hand("Jc 3d 5h 7c")), "не пять карт");
}

//
// TEST 13 — бинго: карточка, итог закрытия, множитель
//
#[test]
fn bingo_card_completion_rules() {
    let mut card = simple_card();
    assert!(is_valid_card(&card));
    assert_eq!(card.marked_count(), 1, "центр отмечен сразу");
    assert_eq!(column_range(0), 1..=15);
    assert_eq!(column_range(4), 61..=75);

    assert_eq!(completion_outcome(&card, true), None);
    for n in card.numbers_on_card() {
        card.mark(n);
    }
    assert!(card.is_complete());
    assert_eq!(completion_outcome(&card, true), Some(OutcomeKind::Win));
    assert_eq!(completion_outcome(&card, false), Some(OutcomeKind::NearMiss));

    assert_eq!(payout_multiplier(24), 5);
    assert_eq!(payout_multiplier(28), 3);
    assert_eq!(payout_multiplier(35), 2);
}

//
// TEST 14 — колесо: веса в сумме 1.0, выигрышные веса нормированы
//
#[test]
fn wheel_weights_sum_to_one() {
    let total: f64 = section_weights().iter().sum();
    assert!((total - 1.0).abs() < 1e-12, "сумма весов {total}");

    let forced: f64 = winning_weights().iter().sum();
    assert!((forced - 1.0).abs() < 1e-12);
    for (section, w) in WHEEL_SECTIONS.iter().zip(winning_weights()) {
        assert_eq!(w > 0.0, section.is_win(), "{}", section.label);
    }
    assert!(WHEEL_SECTIONS.iter().any(|s| s.kind == OutcomeKind::Tie));
    assert_eq!(WHEEL_SECTIONS.iter().filter(|s| s.kind == OutcomeKind::PartialLoss).count(), 3);
}

//
// TEST 15 — слоты: линии независимы, выигрыши складываются
//
#[test]
fn slots_paylines_are_additive() {
    use SlotSymbol::*;
    let grid = [[Lion, Lion, Lion], [Fox, Wolf, Fox], [Mouse, Mouse, Mouse]];
    let wins = match_paylines(&grid);
    assert_eq!(wins.len(), 2);
    assert_eq!(wins[0].row, 0);
    assert_eq!(wins[1].row, 2);
    assert_eq!(total_multiplier(&wins), 50 + 2);

    let none = [[Lion, Bear, Lion], [Fox, Wolf, Fox], [Mouse, Rabbit, Mouse]];
    assert!(match_paylines(&none).is_empty());
}
