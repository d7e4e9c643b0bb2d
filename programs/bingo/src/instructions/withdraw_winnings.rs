use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::WinningsWithdrawn;
use crate::payout::move_lamports;
use crate::state::{Game, Ticket};

/// Accounts required for a winner to collect their share.
#[derive(Accounts)]
pub struct WithdrawWinnings<'info> {
    /// The winner; receives the share.
    #[account(mut)]
    pub player: Signer<'info>,

    /// The room holding the prize pool.
    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// The winner's ticket, which carries the paid flag.
    #[account(
        mut,
        seeds = [TICKET_SEED, game.key().as_ref(), player.key().as_ref()],
        bump = ticket.bump,
    )]
    pub ticket: Account<'info, Ticket>,
}

/// Pays the caller's share of the pool. The ledger is settled before any
/// lamports move.
pub fn process_withdraw_winnings(ctx: Context<WithdrawWinnings>) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();
    let game_key = ctx.accounts.game.key();
    let game = &mut ctx.accounts.game;

    let game_info = game.to_account_info();
    let player_info = ctx.accounts.player.to_account_info();

    let amount = pay_winner(game, &game_info, &player_info, &mut ctx.accounts.ticket, clock.unix_timestamp)?;

    msg!(
        "Paid {} lamports to {} ({}/{} winners)",
        amount,
        player,
        game.payouts_made,
        game.winner_count()
    );

    emit!(WinningsWithdrawn {
        game: game_key,
        player,
        amount,
    });
    Ok(())
}

/// Settles the share owed to `player_info` and moves it out of the room
/// account.
pub fn pay_winner<'info>(
    game: &mut Game,
    game_info: &AccountInfo<'info>,
    player_info: &AccountInfo<'info>,
    ticket: &mut Ticket,
    now: i64,
) -> Result<u64> {
    let amount = game.withdraw_winnings(*player_info.key, ticket, now)?;
    move_lamports(game_info, player_info, amount)?;
    Ok(amount)
}
