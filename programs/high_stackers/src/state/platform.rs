use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Platform {
    /// Owner who can withdraw fees and rotate the platform wallet.
    pub owner: Pubkey,
    /// Wallet that receives withdrawn platform fees.
    pub platform_wallet: Pubkey,
    /// Running count of lobbies created; the next lobby takes counter + 1.
    pub lobby_counter: u64,
    /// Undistributed 2% cut, in minimal units, backed by the vault.
    pub fee_balance: u64,
    /// PDA bump seed.
    pub bump: u8,
    /// Bump seed of the lamport vault PDA.
    pub vault_bump: u8,
}

impl Platform {
    pub const SEED: &'static [u8] = b"platform";
    pub const VAULT_SEED: &'static [u8] = b"vault";
}
