use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod settlement;
pub mod state;

use instructions::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod high_stackers {
    use super::*;

    /// One-time platform initialization. The deployer becomes the owner
    /// and the initial platform wallet.
    pub fn initialize_platform(ctx: Context<InitializePlatform>) -> Result<()> {
        instructions::initialize_platform::handler(ctx)
    }

    /// Open a lobby, escrowing the maker's stake. Returns the new lobby id.
    pub fn create_lobby(
        ctx: Context<CreateLobby>,
        amount: u64,
        target_multiplier: u8,
    ) -> Result<u64> {
        instructions::create_lobby::handler(ctx, amount, target_multiplier)
    }

    /// Join an open lobby as the taker: escrows the matching stake, picks
    /// a winner, and settles the 90/8/2 split in one transaction.
    pub fn join_lobby(ctx: Context<JoinLobby>, lobby_id: u64) -> Result<bool> {
        instructions::join_lobby::handler(ctx, lobby_id)
    }

    /// Owner withdraws the accumulated platform fees to the platform
    /// wallet. Returns the amount withdrawn.
    pub fn withdraw_platform_fees(ctx: Context<WithdrawPlatformFees>) -> Result<u64> {
        instructions::withdraw_platform_fees::handler(ctx)
    }

    /// Owner rotates the fee destination wallet.
    pub fn set_platform_wallet(ctx: Context<SetPlatformWallet>, new_wallet: Pubkey) -> Result<bool> {
        instructions::set_platform_wallet::handler(ctx, new_wallet)
    }
}
