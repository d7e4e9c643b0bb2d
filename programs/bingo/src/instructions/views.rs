use anchor_lang::prelude::*;

use crate::card::Card;
use crate::constants::*;
use crate::error::BingoError;
use crate::state::{Game, Ticket};

/// Read-only access to a room for the return-data views.
#[derive(Accounts)]
pub struct GameView<'info> {
    #[account(
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,
}

pub fn process_check_bingo(ctx: Context<GameView>, card: Card) -> Result<bool> {
    Ok(ctx.accounts.game.check_bingo(&card))
}

pub fn process_can_draw_number(ctx: Context<GameView>) -> Result<bool> {
    Ok(ctx.accounts.game.can_draw_number())
}

/// One page of current players' cards in joining order. Ticket accounts of
/// the page are passed as remaining accounts. At most `CARDS_PER_PAGE` cards
/// fit in the return data, so callers walk `offset` until a page comes back
/// empty.
pub fn process_get_bingo_cards(ctx: Context<GameView>, offset: u32, limit: u8) -> Result<Vec<Card>> {
    let game_key = ctx.accounts.game.key();
    let mut tickets = Vec::with_capacity(ctx.remaining_accounts.len());

    for info in ctx.remaining_accounts.iter() {
        require_keys_eq!(*info.owner, crate::ID, BingoError::NoValidTicket);
        let data = info.try_borrow_data()?;
        let ticket = Ticket::try_deserialize(&mut &data[..])?;
        require_keys_eq!(ticket.game, game_key, BingoError::NoValidTicket);
        tickets.push(ticket);
    }

    Ok(ctx
        .accounts
        .game
        .bingo_cards(&tickets, offset as usize, limit as usize))
}
