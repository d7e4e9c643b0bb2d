use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::GameStarted;
use crate::state::Game;

#[derive(Accounts)]
pub struct StartGame<'info> {
    pub host: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,
}

pub fn process_start_game(ctx: Context<StartGame>) -> Result<()> {
    let clock = Clock::get()?;
    let game_key = ctx.accounts.game.key();
    let game = &mut ctx.accounts.game;

    game.start_game(ctx.accounts.host.key(), clock.unix_timestamp)?;
    msg!("Game started with {} players", game.joined_players.len());

    emit!(GameStarted {
        game: game_key,
        started_at: clock.unix_timestamp,
    });
    Ok(())
}
