//! Интеграционные тесты для доменной модели (crate::domain).

use casino_engine::domain::*;

/// Парсинг и отображение карт.
#[test]
fn card_parse_and_display_roundtrip() {
    let card: Card = "Td".parse().unwrap();
    assert_eq!(card, Card::new(Rank::Ten, Suit::Diamonds));
    assert_eq!(card.to_string(), "Td");

    assert!("T".parse::<Card>().is_err());
    assert!("1c".parse::<Card>().is_err());
    assert!("Ax".parse::<Card>().is_err());
}

/// Значения рангов: туз старший в War/Red Dog, 1/11 в блэкджеке.
#[test]
fn rank_values() {
    assert_eq!(Rank::Ace.high_value(), 14);
    assert_eq!(Rank::Two.high_value(), 2);
    assert_eq!(Rank::King.blackjack_points(), 10);
    assert_eq!(Rank::Ace.blackjack_points(), 1);
    assert_eq!(Rank::from_high_value(11), Some(Rank::Jack));
    assert_eq!(Rank::from_high_value(1), None);
    assert_eq!(Rank::from_high_value(15), None);
}

/// Колода: 52 разные карты.
#[test]
fn standard_deck_is_complete() {
    let mut deck = Deck::standard_52();
    assert_eq!(deck.len(), 52);
    let unique: std::collections::HashSet<_> = deck.cards.iter().copied().collect();
    assert_eq!(unique.len(), 52);

    let five = deck.draw_n(5);
    assert_eq!(five.len(), 5);
    assert_eq!(deck.len(), 47);
}

/// Кубик: только 1..=6.
#[test]
fn die_faces_are_validated() {
    assert!(Die::new(0).is_none());
    assert!(Die::new(7).is_none());
    assert_eq!(Die::new(6).map(Die::value), Some(6));
    assert_eq!(Die::new(3).unwrap().to_string(), "3");
}

/// Уровни ставок: только суммы из набора игры.
#[test]
fn bet_tier_resolution() {
    let tier = BetTier::resolve(GameKind::Blackjack, 250).unwrap();
    assert_eq!(tier.index(), 2);
    assert_eq!(tier.stake(), Coins(250));

    assert!(BetTier::resolve(GameKind::Blackjack, 75).is_none());
    assert!(BetTier::resolve(GameKind::Bingo, 10).is_none());
    assert_eq!(BetTier::resolve(GameKind::Bingo, 200).unwrap().index(), 3);

    for game in GameKind::ALL {
        for (i, &amount) in game.tiers().iter().enumerate() {
            assert_eq!(BetTier::resolve(game, amount).unwrap().index(), i, "{game}");
        }
    }
}

/// Награды: push возвращает только ставку, проигрыш — ноль.
#[test]
fn reward_helpers() {
    assert!(Reward::ZERO.is_zero());
    let push = Reward::stake_only(Coins(100));
    assert_eq!(push.tickets, Tickets::ZERO);
    assert_eq!(push.coins, Coins(100));
    assert!(!push.is_zero());
    assert_eq!(Coins(5) - Coins(10), Coins(0), "монеты не уходят в минус");
}

/// Серия: победа +1, push без изменений, проигрыш обнуляет.
#[test]
fn streak_transitions() {
    let s = StreakState::new()
        .record(OutcomeKind::Win)
        .record(OutcomeKind::War)
        .record(OutcomeKind::Tie)
        .record(OutcomeKind::NoQualify);
    assert_eq!(s.consecutive_wins, 2);
    assert!(!s.is_bonus_eligible(3));

    let s = s.record(OutcomeKind::Win);
    assert!(s.is_bonus_eligible(3));

    for loss in [
        OutcomeKind::Lose,
        OutcomeKind::Bust,
        OutcomeKind::NearMiss,
        OutcomeKind::PartialLoss,
        OutcomeKind::Forfeit,
    ] {
        assert_eq!(s.record(loss).consecutive_wins, 0, "{loss:?}");
    }
    assert!(!StreakState { consecutive_wins: 10 }.is_bonus_eligible(0));
}

/// Карточка бинго: центр свободен, отметки, закрытие.
#[test]
fn bingo_card_marking() {
    let mut columns = [[0u8; 5]; 5];
    for (col, column) in columns.iter_mut().enumerate() {
        for (row, n) in column.iter_mut().enumerate() {
            *n = (col * 15 + row + 1) as u8;
        }
    }
    let mut card = BingoCard::from_columns(columns);
    assert_eq!(card.numbers[2][2], FREE_CELL);
    assert_eq!(card.numbers_on_card().len(), 24);
    assert!(!card.contains(33), "центр вытеснил число");

    assert!(card.mark(1));
    assert!(!card.mark(75));
    assert!(!card.mark(FREE_CELL));
    assert_eq!(card.marked_count(), 2);
    assert!(!card.is_complete());
}
