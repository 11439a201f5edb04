use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::HighStackersError;
use crate::events::PlatformFeesWithdrawn;
use crate::state::Platform;

#[derive(Accounts)]
pub struct WithdrawPlatformFees<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
        has_one = owner @ HighStackersError::OwnerOnly,
        has_one = platform_wallet,
    )]
    pub platform: Account<'info, Platform>,

    /// Vault holding all escrowed stakes and undistributed fees.
    #[account(
        mut,
        seeds = [Platform::VAULT_SEED],
        bump = platform.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    /// CHECK: Fee destination stored on the platform account.
    #[account(mut)]
    pub platform_wallet: UncheckedAccount<'info>,

    pub owner: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawPlatformFees>) -> Result<u64> {
    let amount = ctx.accounts.platform.fee_balance;

    let bump_bytes = [ctx.accounts.platform.vault_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Platform::VAULT_SEED, &bump_bytes]];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: ctx.accounts.platform_wallet.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
    )?;

    ctx.accounts.platform.fee_balance = 0;

    emit!(PlatformFeesWithdrawn {
        platform_wallet: ctx.accounts.platform_wallet.key(),
        amount,
    });

    Ok(amount)
}
