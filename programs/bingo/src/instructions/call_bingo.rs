use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::{BingoCalled, BingoFound};
use crate::state::{Game, Ticket};
use crate::win::winning_lines;

#[derive(Accounts)]
pub struct CallBingo<'info> {
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// The caller's ticket. Callers without one are rejected in the handler.
    #[account(
        seeds = [TICKET_SEED, game.key().as_ref(), player.key().as_ref()],
        bump,
    )]
    pub ticket: Option<Account<'info, Ticket>>,
}

pub fn process_call_bingo(ctx: Context<CallBingo>) -> Result<()> {
    let clock = Clock::get()?;
    let player = ctx.accounts.player.key();
    let game_key = ctx.accounts.game.key();

    let no_ticket = Ticket::default();
    let ticket = ctx.accounts.ticket.as_deref().unwrap_or(&no_ticket);
    let game = &mut ctx.accounts.game;

    let first = game.call_bingo(player, ticket, clock.unix_timestamp)?;
    msg!(
        "Bingo by {} on lines {:?}",
        player,
        winning_lines(&ticket.card, game.drawn_mask)
    );

    if first {
        emit!(BingoFound {
            game: game_key,
            player,
        });
    }
    emit!(BingoCalled {
        game: game_key,
        player,
        winner_count: game.winner_count(),
    });
    Ok(())
}
