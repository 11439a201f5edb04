use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hashv;

use crate::errors::HighStackersError;

/// Winner's share of the pot, in percent.
pub const WINNER_SHARE_PCT: u64 = 90;
/// Loser rebate share of the pot, in percent.
pub const LOSER_SHARE_PCT: u64 = 8;

/// Pot distribution for a resolved lobby.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PotSplit {
    pub winner_payout: u64,
    pub loser_payout: u64,
    pub platform_fee: u64,
}

/// Splits `pot` 90/8/2 with truncating integer math. The platform fee is
/// whatever remains after the two payouts, so the three parts always sum
/// to `pot` exactly.
pub fn split_pot(pot: u64) -> std::result::Result<PotSplit, HighStackersError> {
    let winner_payout = pot
        .checked_mul(WINNER_SHARE_PCT)
        .ok_or(HighStackersError::MathOverflow)?
        .checked_div(100)
        .ok_or(HighStackersError::MathOverflow)?;

    let loser_payout = pot
        .checked_mul(LOSER_SHARE_PCT)
        .ok_or(HighStackersError::MathOverflow)?
        .checked_div(100)
        .ok_or(HighStackersError::MathOverflow)?;

    let platform_fee = pot
        .checked_sub(winner_payout)
        .ok_or(HighStackersError::MathOverflow)?
        .checked_sub(loser_payout)
        .ok_or(HighStackersError::MathOverflow)?;

    Ok(PotSplit {
        winner_payout,
        loser_payout,
        platform_fee,
    })
}

/// Picks maker or taker from a hash over the two parties, the lobby id,
/// and the execution slot. Only information available at the moment the
/// join transaction runs goes in; the scheme is a stated placeholder
/// pending a VRF upgrade.
pub fn pick_winner(maker: Pubkey, taker: Pubkey, lobby_id: u64, slot: u64) -> Pubkey {
    let digest = hashv(&[
        maker.as_ref(),
        taker.as_ref(),
        &lobby_id.to_le_bytes(),
        &slot.to_le_bytes(),
    ]);
    if digest.to_bytes()[0] & 1 == 0 {
        maker
    } else {
        taker
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_matches_ninety_eight_two() {
        // 10-unit stake per side: 20 total, 18 / 1.6 / 0.4.
        let split = split_pot(20_000_000).unwrap();
        assert_eq!(split.winner_payout, 18_000_000);
        assert_eq!(split.loser_payout, 1_600_000);
        assert_eq!(split.platform_fee, 400_000);
    }

    #[test]
    fn split_conserves_pot_exactly() {
        for pot in [2, 66, 100, 1_999_998, 2_000_000, 123_456_789, u64::MAX / 100] {
            let split = split_pot(pot).unwrap();
            assert_eq!(
                split.winner_payout + split.loser_payout + split.platform_fee,
                pot,
                "pot {pot} not conserved"
            );
        }
    }

    #[test]
    fn fee_absorbs_rounding_remainder() {
        // pot 66: 90% -> 59, 8% -> 5, fee takes the remaining 2 even though
        // floor(66 * 2 / 100) would be 1.
        let split = split_pot(66).unwrap();
        assert_eq!(split.winner_payout, 59);
        assert_eq!(split.loser_payout, 5);
        assert_eq!(split.platform_fee, 2);
    }

    #[test]
    fn split_overflow_is_reported() {
        assert!(matches!(
            split_pot(u64::MAX),
            Err(HighStackersError::MathOverflow)
        ));
    }

    #[test]
    fn three_games_accumulate_two_percent() {
        let fees: u64 = [10_000_000u64, 6_000_000, 2_000_000]
            .iter()
            .map(|pot| split_pot(*pot).unwrap().platform_fee)
            .sum();
        assert_eq!(fees, 360_000);
    }

    #[test]
    fn winner_is_deterministic_and_a_party() {
        let maker = Pubkey::new_unique();
        let taker = Pubkey::new_unique();
        let first = pick_winner(maker, taker, 1, 42);
        assert_eq!(first, pick_winner(maker, taker, 1, 42));
        assert!(first == maker || first == taker);
    }

    #[test]
    fn winner_varies_with_slot() {
        let maker = Pubkey::new_unique();
        let taker = Pubkey::new_unique();
        let outcomes: std::collections::HashSet<Pubkey> = (0..64)
            .map(|slot| pick_winner(maker, taker, 1, slot))
            .collect();
        assert_eq!(outcomes.len(), 2);
    }
}
