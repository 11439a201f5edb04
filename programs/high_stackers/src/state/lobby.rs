use anchor_lang::prelude::*;

use crate::errors::HighStackersError;

/// Smallest stake accepted, in minimal units (1 full unit).
pub const MIN_BET: u64 = 1_000_000;
/// Inclusive bounds for the display multiplier.
pub const MIN_MULTIPLIER: u8 = 2;
pub const MAX_MULTIPLIER: u8 = 10;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, InitSpace)]
pub enum LobbyStatus {
    /// Waiting for a taker.
    Open,
    /// Reserved for a two-phase join/resolve flow; never stored today.
    InProgress,
    /// Resolved and paid out. Terminal; the lobby is immutable from here.
    Closed,
}

#[account]
#[derive(InitSpace)]
pub struct Lobby {
    /// Sequential lobby identifier.
    pub id: u64,
    /// Creator's wallet; their stake is escrowed at creation.
    pub maker: Pubkey,
    /// Second party (None until someone joins).
    pub taker: Option<Pubkey>,
    /// Stake per party in minimal units.
    pub amount: u64,
    /// Requested multiplier (2-10); recorded for display, no payout effect.
    pub target_multiplier: u8,
    /// Current lifecycle status.
    pub status: LobbyStatus,
    /// Winner (None until resolved).
    pub winner: Option<Pubkey>,
    /// Slot at creation.
    pub created_at: u64,
    /// PDA bump seed.
    pub bump: u8,
}

impl Lobby {
    pub const SEED: &'static [u8] = b"lobby";

    /// Creation-parameter checks, run before any state is touched.
    pub fn validate_params(
        amount: u64,
        target_multiplier: u8,
    ) -> std::result::Result<(), HighStackersError> {
        if amount < MIN_BET {
            return Err(HighStackersError::InsufficientAmount);
        }
        if !(MIN_MULTIPLIER..=MAX_MULTIPLIER).contains(&target_multiplier) {
            return Err(HighStackersError::InvalidMultiplier);
        }
        Ok(())
    }

    /// Join preconditions: open status first, then the self-join rule.
    pub fn ensure_joinable(&self, taker: &Pubkey) -> std::result::Result<(), HighStackersError> {
        if self.status != LobbyStatus::Open {
            return Err(HighStackersError::LobbyFull);
        }
        if self.maker == *taker {
            return Err(HighStackersError::CannotJoinOwnLobby);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_lobby(maker: Pubkey) -> Lobby {
        Lobby {
            id: 1,
            maker,
            taker: None,
            amount: MIN_BET,
            target_multiplier: 2,
            status: LobbyStatus::Open,
            winner: None,
            created_at: 0,
            bump: 255,
        }
    }

    #[test]
    fn min_bet_is_inclusive() {
        assert!(Lobby::validate_params(MIN_BET, 2).is_ok());
        assert!(matches!(
            Lobby::validate_params(MIN_BET - 1, 2),
            Err(HighStackersError::InsufficientAmount)
        ));
    }

    #[test]
    fn multiplier_bounds_are_inclusive() {
        for m in MIN_MULTIPLIER..=MAX_MULTIPLIER {
            assert!(Lobby::validate_params(MIN_BET, m).is_ok());
        }
        for m in [0, 1, 11, u8::MAX] {
            assert!(matches!(
                Lobby::validate_params(MIN_BET, m),
                Err(HighStackersError::InvalidMultiplier)
            ));
        }
    }

    #[test]
    fn open_lobby_accepts_a_stranger() {
        let lobby = open_lobby(Pubkey::new_unique());
        assert!(lobby.ensure_joinable(&Pubkey::new_unique()).is_ok());
    }

    #[test]
    fn maker_cannot_join_own_lobby() {
        let maker = Pubkey::new_unique();
        let lobby = open_lobby(maker);
        assert!(matches!(
            lobby.ensure_joinable(&maker),
            Err(HighStackersError::CannotJoinOwnLobby)
        ));
    }

    #[test]
    fn closed_lobby_rejects_all_takers() {
        let maker = Pubkey::new_unique();
        let mut lobby = open_lobby(maker);
        lobby.status = LobbyStatus::Closed;
        assert!(matches!(
            lobby.ensure_joinable(&Pubkey::new_unique()),
            Err(HighStackersError::LobbyFull)
        ));
        // Status outranks the self-join rule.
        assert!(matches!(
            lobby.ensure_joinable(&maker),
            Err(HighStackersError::LobbyFull)
        ));
    }
}
