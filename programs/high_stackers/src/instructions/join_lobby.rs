use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::HighStackersError;
use crate::events::LobbyResolved;
use crate::settlement::{pick_winner, split_pot};
use crate::state::{Lobby, LobbyStatus, Platform};

#[derive(Accounts)]
#[instruction(lobby_id: u64)]
pub struct JoinLobby<'info> {
    #[account(
        mut,
        seeds = [Platform::SEED],
        bump = platform.bump,
    )]
    pub platform: Account<'info, Platform>,

    #[account(
        mut,
        seeds = [Lobby::SEED, lobby_id.to_le_bytes().as_ref()],
        bump = lobby.bump,
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
    pub taker: Signer<'info>,

    /// CHECK: The lobby maker's wallet; receives a payout at resolution.
    #[account(mut, constraint = maker.key() == lobby.maker)]
    pub maker: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinLobby>, lobby_id: u64) -> Result<bool> {
    let taker_key = ctx.accounts.taker.key();

    // All preconditions run before any transfer or write.
    {
        let lobby = &ctx.accounts.lobby;
        require!(lobby.id == lobby_id, HighStackersError::LobbyNotFound);
        lobby.ensure_joinable(&taker_key)?;
    }

    let amount = ctx.accounts.lobby.amount;
    let maker_key = ctx.accounts.lobby.maker;

    let pot = amount
        .checked_mul(2)
        .ok_or(HighStackersError::MathOverflow)?;
    let split = split_pot(pot)?;

    // The taker's stake joins the maker's in escrow. The stake equals the
    // lobby amount; it is never caller-supplied.
    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.taker.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
            },
        ),
        amount,
    )?;

    let clock = Clock::get()?;
    let winner_key = pick_winner(maker_key, taker_key, lobby_id, clock.slot);

    let (winner_info, loser_info, loser_key) = if winner_key == maker_key {
        (
            ctx.accounts.maker.to_account_info(),
            ctx.accounts.taker.to_account_info(),
            taker_key,
        )
    } else {
        (
            ctx.accounts.taker.to_account_info(),
            ctx.accounts.maker.to_account_info(),
            maker_key,
        )
    };

    // Vault signs both payouts; the fee stays behind for the platform.
    let bump_bytes = [ctx.accounts.platform.vault_bump];
    let signer_seeds: &[&[&[u8]]] = &[&[Platform::VAULT_SEED, &bump_bytes]];

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: winner_info,
            },
            signer_seeds,
        ),
        split.winner_payout,
    )?;

    system_program::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.system_program.to_account_info(),
            Transfer {
                from: ctx.accounts.vault.to_account_info(),
                to: loser_info,
            },
            signer_seeds,
        ),
        split.loser_payout,
    )?;

    let platform = &mut ctx.accounts.platform;
    platform.fee_balance = platform
        .fee_balance
        .checked_add(split.platform_fee)
        .ok_or(HighStackersError::MathOverflow)?;

    let lobby = &mut ctx.accounts.lobby;
    lobby.taker = Some(taker_key);
    lobby.winner = Some(winner_key);
    lobby.status = LobbyStatus::Closed;

    emit!(LobbyResolved {
        lobby_id,
        winner: winner_key,
        loser: loser_key,
        winner_payout: split.winner_payout,
        loser_payout: split.loser_payout,
        platform_fee: split.platform_fee,
    });

    Ok(true)
}
