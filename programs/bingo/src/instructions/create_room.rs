use anchor_lang::prelude::*;
use anchor_lang::solana_program::sysvar::slot_hashes;
use anchor_lang::system_program;

use crate::constants::*;
use crate::draw::{latest_slot_hash, ticket_seed};
use crate::events::{RoomCreated, TicketBought};
use crate::state::{Game, Registry, RoomParams, Ticket};

/// Accounts required to open a new room. The creator becomes its host and
/// holds the first ticket.
#[derive(Accounts)]
pub struct CreateRoom<'info> {
    /// Pays the protocol fee, the first ticket and rent.
    #[account(mut)]
    pub creator: Signer<'info>,

    /// The registry, which receives the protocol fee.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,

    /// The new room, at the registry's next index.
    #[account(
        init,
        payer = creator,
        space = 8 + Game::INIT_SPACE,
        seeds = [GAME_SEED, registry.key().as_ref(), registry.room_count.to_le_bytes().as_ref()],
        bump
    )]
    pub game: Box<Account<'info, Game>>,

    /// The creator's ticket.
    #[account(
        init,
        payer = creator,
        space = 8 + Ticket::INIT_SPACE,
        seeds = [TICKET_SEED, game.key().as_ref(), creator.key().as_ref()],
        bump
    )]
    pub ticket: Account<'info, Ticket>,

    /// CHECK: SlotHashes sysvar, read for the card seed.
    #[account(address = slot_hashes::ID)]
    pub slot_hashes: UncheckedAccount<'info>,

    /// System program for lamport transfers.
    pub system_program: Program<'info, System>,
}

/// Validates the room parameters, collects the protocol fee and books the
/// creator's ticket.
pub fn process_create_room(
    ctx: Context<CreateRoom>,
    ticket_cost: u64,
    min_players: u8,
    max_players: u8,
) -> Result<()> {
    let params = RoomParams {
        ticket_cost,
        min_players,
        max_players,
    };
    let creator = ctx.accounts.creator.key();
    let registry_key = ctx.accounts.registry.key();
    let game_key = ctx.accounts.game.key();

    let registry = &mut ctx.accounts.registry;
    registry.validate_room(&params)?;
    let room_index = registry.register_room()?;
    let protocol_fee = registry.protocol_fee;

    if protocol_fee > 0 {
        system_program::transfer(
            CpiContext::new(
                ctx.accounts.system_program.to_account_info(),
                system_program::Transfer {
                    from: ctx.accounts.creator.to_account_info(),
                    to: registry.to_account_info(),
                },
            ),
            protocol_fee,
        )?;
    }

    let slot_hash = {
        let data = ctx.accounts.slot_hashes.try_borrow_data()?;
        latest_slot_hash(&data)?
    };

    let game = &mut ctx.accounts.game;
    game.open(registry_key, registry, room_index, creator, params, ctx.bumps.game);

    let seed = ticket_seed(&slot_hash, &game_key, &creator, game.tickets_issued);
    let ticket = &mut ctx.accounts.ticket;
    ticket.game = game_key;
    ticket.bump = ctx.bumps.ticket;
    game.buy_ticket(ticket, creator, ticket_cost, &seed)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.creator.to_account_info(),
                to: game.to_account_info(),
            },
        ),
        ticket_cost,
    )?;

    msg!("Room {} created at {}", room_index, game_key);

    emit!(RoomCreated {
        creator,
        room: game_key,
        room_index,
        ticket_cost,
        min_players,
        max_players,
    });
    emit!(TicketBought {
        game: game_key,
        player: creator,
    });
    Ok(())
}
