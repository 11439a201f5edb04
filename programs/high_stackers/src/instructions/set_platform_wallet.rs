use anchor_lang::prelude::*;

use crate::errors::HighStackersError;
use crate::events::PlatformWalletUpdated;
use crate::state::Platform;

#[derive(Accounts)]
pub struct SetPlatformWallet<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = owner @ HighStackersError::OwnerOnly,
    )]
    pub platform: Account<'info, Platform>,

    pub owner: Signer<'info>,
}

pub fn handler(ctx: Context<SetPlatformWallet>, new_wallet: Pubkey) -> Result<bool> {
    let platform = &mut ctx.accounts.platform;
    let previous_wallet = platform.platform_wallet;
    platform.platform_wallet = new_wallet;

    emit!(PlatformWalletUpdated {
        previous_wallet,
        new_wallet,
    });

    Ok(true)
}
