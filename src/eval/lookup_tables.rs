use crate::domain::card::Rank;

/// Битовая маска рангов: бит 0 = двойка, бит 12 = туз.
pub type RankMask = u16;

const WHEEL: RankMask = 0b1_0000_0000_1111;

/// Маски всех стритов, индекс = старшая карта стрита минус 5.
///
///   0: A2345 (wheel, старшая карта — пятёрка)
///   1: 23456
///   ...
///   9: TJQKA (broadway)
pub const STRAIGHT_MASKS: [RankMask; 10] = build_straight_masks();

const fn build_straight_masks() -> [RankMask; 10] {
    let mut masks = [0u16; 10];
    masks[0] = WHEEL;
    let mut i = 1;
    while i < 10 {
        // Пять подряд идущих бит, начиная с (i - 1).
        masks[i] = 0b1_1111 << (i - 1);
        i += 1;
    }
    masks
}

pub fn rank_to_bit(rank: Rank) -> RankMask {
    1 << (rank.high_value() - 2)
}

/// Старшая карта стрита, если маска его содержит.
/// Колесо A-2-3-4-5 считается стритом до пятёрки.
pub fn detect_straight(mask: RankMask) -> Option<Rank> {
    STRAIGHT_MASKS
        .iter()
        .rposition(|&sm| mask & sm == sm)
        .and_then(|i| Rank::from_high_value(i as u8 + 5))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(ranks: &[Rank]) -> RankMask {
        ranks.iter().fold(0, |m, &r| m | rank_to_bit(r))
    }

    #[test]
    fn wheel_is_five_high() {
        let m = mask(&[Rank::Ace, Rank::Two, Rank::Three, Rank::Four, Rank::Five]);
        assert_eq!(detect_straight(m), Some(Rank::Five));
    }

    #[test]
    fn broadway_is_ace_high() {
        let m = mask(&[Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace]);
        assert_eq!(detect_straight(m), Some(Rank::Ace));
    }

    #[test]
    fn no_wraparound_straight() {
        let m = mask(&[Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three]);
        assert_eq!(detect_straight(m), None);
    }
}
