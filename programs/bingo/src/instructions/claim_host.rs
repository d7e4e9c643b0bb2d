use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::HostChanged;
use crate::state::{Game, Ticket};

/// Accounts required to take over the host seat.
#[derive(Accounts)]
pub struct ClaimHost<'info> {
    /// The player claiming the seat.
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// The claimant's ticket. Callers without one are rejected in the handler.
    #[account(
        seeds = [TICKET_SEED, game.key().as_ref(), player.key().as_ref()],
        bump,
    )]
    pub ticket: Option<Account<'info, Ticket>>,

    /// Ticket of the host being replaced; invalidated on success. Omitted
    /// when the seat is vacant.
    #[account(
        mut,
        seeds = [TICKET_SEED, game.key().as_ref(), game.host.as_ref()],
        bump,
    )]
    pub previous_host_ticket: Option<Account<'info, Ticket>>,
}

pub fn process_claim_host(ctx: Context<ClaimHost>) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();
    let game_key = ctx.accounts.game.key();

    let previous = take_host_seat(
        &mut ctx.accounts.game,
        player,
        ctx.accounts.ticket.as_deref(),
        ctx.accounts.previous_host_ticket.as_deref_mut(),
        clock.unix_timestamp,
    )?;

    msg!("Host changed from {} to {}", previous, player);

    emit!(HostChanged {
        game: game_key,
        new_host: player,
    });
    Ok(())
}

/// Hands the seat to `player`. A missing claimant ticket counts as no ticket.
pub fn take_host_seat(
    game: &mut Game,
    player: Pubkey,
    ticket: Option<&Ticket>,
    previous_host_ticket: Option<&mut Ticket>,
    now: i64,
) -> Result<Pubkey> {
    let no_ticket = Ticket::default();
    game.claim_host(player, ticket.unwrap_or(&no_ticket), previous_host_ticket, now)
}
