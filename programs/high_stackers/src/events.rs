use anchor_lang::prelude::*;

#[event]
pub struct LobbyCreated {
    pub lobby_id: u64,
    pub maker: Pubkey,
    pub amount: u64,
    pub target_multiplier: u8,
    pub created_at: u64,
}

#[event]
pub struct LobbyResolved {
    pub lobby_id: u64,
    pub winner: Pubkey,
    pub loser: Pubkey,
    pub winner_payout: u64,
    pub loser_payout: u64,
    pub platform_fee: u64,
}

#[event]
pub struct PlatformFeesWithdrawn {
    pub platform_wallet: Pubkey,
    pub amount: u64,
}

#[event]
pub struct PlatformWalletUpdated {
    pub previous_wallet: Pubkey,
    pub new_wallet: Pubkey,
}
