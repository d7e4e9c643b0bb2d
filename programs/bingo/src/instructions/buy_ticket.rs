use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_lang::system_program;

use crate::constants::*;
use crate::draw::{latest_slot_hash, ticket_seed};
use crate::events::TicketBought;
use crate::state::{Game, Ticket};

/// Accounts required to buy a ticket for `to`.
///
/// The ticket PDA is reused when `to` left the room earlier, so a returning
/// player gets a fresh card in the same account.
#[derive(Accounts)]
#[instruction(to: Pubkey)]
pub struct BuyTicket<'info> {
    /// The account paying for the ticket.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The room being joined.
    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// Ticket of `to` in this room.
    #[account(
        init_if_needed,
        payer = payer,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, game.key().as_ref(), to.as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: SlotHashes sysvar, read for the card seed.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    /// System program for lamport transfers.
    pub system_program: Program<'info, System>,
}

/// Buys a ticket for `to`.
///
/// # Arguments
/// * `to` - Holder of the new ticket
/// * `amount` - Lamports offered; must equal the room's ticket cost
pub fn process_buy_ticket(ctx: Context<BuyTicket>, to: Pubkey, amount: u64) -> Result<()> {
    let game_key = ctx.accounts.game.key();
    let slot_hash = {
        let data = ctx.accounts.slot_hashes.try_borrow_data()?;
        latest_slot_hash(&data)?
    };

    let game = &mut ctx.accounts.game;
    let seed = ticket_seed(&slot_hash, &game_key, &to, game.tickets_issued);
    let ticket = &mut ctx.accounts.ticket;
    ticket.game = game_key;
    ticket.bump = ctx.bumps.ticket;
    game.buy_ticket(ticket, to, amount, &seed)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: game.to_account_info(),
            },
        ),
        game.ticket_cost,
    )?;

    msg!(
        "Ticket {} issued to {} ({}/{})",
        game.tickets_issued,
        to,
        game.joined_players.len(),
        game.max_players
    );

    emit!(TicketBought {
        game: game_key,
        player: to,
    });
    Ok(())
}
