use anchor_lang::prelude::*;

#[error_code]
pub enum HighStackersError {
    #[msg("Only the platform owner can perform this action.")]
    OwnerOnly,
    #[msg("Lobby does not exist.")]
    LobbyNotFound,
    #[msg("Stake amount is below the minimum bet.")]
    InsufficientAmount,
    #[msg("Lobby already has a taker or is closed.")]
    LobbyFull,
    #[msg("Target multiplier must be between 2 and 10.")]
    InvalidMultiplier,
    #[msg("Maker cannot join their own lobby.")]
    CannotJoinOwnLobby,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
}
