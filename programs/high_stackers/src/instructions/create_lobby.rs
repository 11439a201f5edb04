use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::events::LobbyCreated;
use crate::state::{Lobby, LobbyStatus, Platform};

#[derive(Accounts)]
pub struct CreateLobby<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        init,
        payer = maker,
        space = 8 + Lobby::INIT_SPACE,
        seeds = [Lobby::SEED, (platform.lobby_counter + 1).to_le_bytes().as_ref()],
        bump,
    )]
    pub lobby: Account<'info, Lobby>,

    /// Vault holding all escrowed stakes.
    #[account(
        mut,
        seeds = [Platform::VAULT_SEED],
        bump = platform.vault_bump,
    )]
    pub vault: SystemAccount<'info>,

    #[account(mut)]
    pub maker: Signer<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateLobby>, amount: u64, target_multiplier: u8) -> Result<u64> {
    Lobby::validate_params(amount, target_multiplier)?;

    // The maker's stake moves into escrow before the lobby opens;
    // insufficient funds abort the whole instruction.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.maker.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let platform = &mut ctx.accounts.platform;
    let lobby_id = platform.lobby_counter + 1;
    platform.lobby_counter = lobby_id;

    let clock = Clock::get()?;
    let lobby = &mut ctx.accounts.lobby;
    lobby.id = lobby_id;
    lobby.maker = ctx.accounts.maker.key();
    lobby.taker = None;
    lobby.amount = amount;
    lobby.target_multiplier = target_multiplier;
    lobby.status = LobbyStatus::Open;
    lobby.winner = None;
    lobby.created_at = clock.slot;
    lobby.bump = ctx.bumps.lobby;

    emit!(LobbyCreated {
        lobby_id,
        maker: lobby.maker,
        amount,
        target_multiplier,
        created_at: lobby.created_at,
    });

    Ok(lobby_id)
}
