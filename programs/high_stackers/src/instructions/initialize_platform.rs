use anchor_lang::prelude::*;

use crate::state::Platform;

#[derive(Accounts)]
pub struct InitializePlatform<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + Platform::INIT_SPACE,
        seeds = [Platform::SEED],
        bump,
    )]
    pub platform: Account<'info, Platform>,

    /// Lamport vault holding escrowed stakes and undistributed fees.
    #[account(
        seeds = [Platform::VAULT_SEED],
        bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializePlatform>) -> Result<()> {
    let platform = &mut ctx.accounts.platform;
    platform.owner = ctx.accounts.owner.key();
    // The deployer doubles as the initial fee destination until rotated.
    platform.platform_wallet = ctx.accounts.owner.key();
    platform.lobby_counter = 0;
    platform.fee_balance = 0;
    platform.bump = ctx.bumps.platform;
    platform.vault_bump = ctx.bumps.vault;

    Ok(())
}
