use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{HostChanged, PlayerLeft};
use crate::payout::move_lamports;
use crate::state::{Game, Ticket};

#[derive(Accounts)]
pub struct LeaveGame<'info> {
    /// The leaving player; receives the refund.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    #[account(
        mut,
        seeds = [TICKET_SEED, game.key().as_ref(), player.key().as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

pub fn process_leave_game(ctx: Context<LeaveGame>) -> Result<()> {
    let player = ctx.accounts.player.key();
    let game_key = ctx.accounts.game.key();
    let game_info = ctx.accounts.game.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();
    let game = &mut ctx.accounts.game;

    let (refund, vacated_host) = refund_seat(game, &game_info, &player_info, &mut ctx.accounts.ticket)?;

    msg!("{} left, refunded {} lamports", player, refund);

    emit!(PlayerLeft {
        game: game_key,
        player,
    });
    if vacated_host {
        emit!(HostChanged {
            game: game_key,
            new_host: game.host,
        });
    }
    Ok(())
}

/// Releases the seat of `player_info`'s ticket and moves the refund out of
/// the room account. Returns the refund and whether the host seat was vacated.
pub fn refund_seat<'info>(
    game: &mut Game,
    game_info: &AccountInfo<'info>,
    player_info: &AccountInfo<'info>,
    ticket: &mut Ticket,
) -> Result<(u64, bool)> {
    let player = *player_info.key;
    let was_host = game.host == player;

    let refund = game.leave_game(ticket, player)?;
    move_lamports(game_info, player_info, refund)?;
    Ok((refund, was_host))
}
