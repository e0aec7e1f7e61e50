//! Оценка 5-карточных рук (Caribbean Stud).

use crate::domain::card::{Card, Rank};

use super::hand_rank::{HandCategory, HandRank};
use super::lookup_tables::{detect_straight, rank_to_bit, RankMask};

/// Оценить ровно пять карт. `None`, если карт не пять.
///
/// Результат не зависит от порядка карт.
pub fn evaluate_five(cards: &[Card]) -> Option<HandRank> {
    if cards.len() != 5 {
        return None;
    }

    let mut rank_counts = [0u8; 15];
    let mut mask: RankMask = 0;
    for card in cards {
        rank_counts[card.high_value() as usize] += 1;
        mask |= rank_to_bit(card.rank);
    }
    let is_flush = cards.iter().all(|c| c.suit == cards[0].suit);
    let is_straight = detect_straight(mask).is_some();

    let mut pattern: Vec<u8> = rank_counts.iter().copied().filter(|&n| n > 0).collect();
    pattern.sort_unstable_by(|a, b| b.cmp(a));

    // Тай-брейк внутри категории: пять значений по убыванию, туз = 14.
    let mut values: Vec<Rank> = cards.iter().map(|c| c.rank).collect();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let category = match (is_flush, is_straight) {
        (true, true) => HandCategory::StraightFlush,
        _ if pattern == [4, 1] => HandCategory::FourOfAKind,
        _ if pattern == [3, 2] => HandCategory::FullHouse,
        (true, false) => HandCategory::Flush,
        (false, true) => HandCategory::Straight,
        _ if pattern == [3, 1, 1] => HandCategory::ThreeOfAKind,
        _ if pattern == [2, 2, 1] => HandCategory::TwoPair,
        _ if pattern == [2, 1, 1, 1] => HandCategory::OnePair,
        _ => HandCategory::HighCard,
    };
    let rank = HandRank::from_parts(category, &values);
    Some(rank)
}

/// Рука, за которую платят: пара валетов и выше. Мелкая пара = старшая карта.
pub fn is_paying(rank: HandRank) -> bool {
    match rank.category() {
        HandCategory::HighCard => false,
        HandCategory::OnePair => rank.pair_rank().map_or(false, |r| r >= Rank::Jack),
        _ => true,
    }
}

/// Дилер квалифицируется с парой и выше ИЛИ с тузом/королём/дамой на руках.
pub fn dealer_qualifies(cards: &[Card]) -> bool {
    let Some(rank) = evaluate_five(cards) else {
        return false;
    };
    rank.category() >= HandCategory::OnePair
        || cards
            .iter()
            .any(|c| matches!(c.rank, Rank::Ace | Rank::King | Rank::Queen))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand(s: &str) -> Vec<Card> {
        s.split_whitespace().filter_map(|c| c.parse().ok()).collect()
    }

    #[test]
    fn wrong_card_count_is_none() {
        assert_eq!(evaluate_five(&hand("As Ks Qs Js")), None);
    }

    #[test]
    fn full_house_compares_sorted_values() {
        // [14,14,2,2,2] против [13,13,3,3,3]: первым решает старшее значение.
        let aces_full = evaluate_five(&hand("2c 2d 2h Ac As")).unwrap();
        let kings_full = evaluate_five(&hand("3c 3d 3h Kc Ks")).unwrap();
        assert_eq!(aces_full.category(), HandCategory::FullHouse);
        assert!(aces_full > kings_full);
    }

    #[test]
    fn small_pair_with_high_kicker_still_not_paying() {
        let twos = evaluate_five(&hand("2c 2d Ah Kc Qs")).unwrap();
        assert_eq!(twos.pair_rank(), Some(Rank::Two));
        assert!(!is_paying(twos));
    }

    #[test]
    fn small_pair_is_not_paying() {
        let tens = evaluate_five(&hand("Tc Td 2h 5c 9s")).unwrap();
        let jacks = evaluate_five(&hand("Jc Jd 2h 5c 9s")).unwrap();
        assert!(!is_paying(tens));
        assert!(is_paying(jacks));
    }
}
