use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::error::BingoError;
use crate::events::RandomnessRequested;
use crate::state::Game;

/// Accounts required to request the next number.
///
/// Ensures:
/// 1. Only the host can request a draw.
/// 2. The randomness account belongs to the coordinator and was committed in
///    the previous slot, so its value is not known yet.
/// 3. The commit slot is recorded; `fulfill_draw` only accepts that commitment.
#[derive(Accounts)]
pub struct DrawNumber<'info> {
    pub host: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// Randomness account from Switchboard.
    /// CHECK: The account's owner and data are validated within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_draw_number(ctx: Context<DrawNumber>) -> Result<()> {
    let clock = Clock::get()?;
    let game_key = ctx.accounts.game.key();
    let randomness = &ctx.accounts.randomness_account_data;
    let game = &mut ctx.accounts.game;

    let randomness_data = RandomnessAccountData::parse(randomness.data.borrow())
        .map_err(|_| BingoError::InvalidRandomnessAccount)?;
    let seed_slot = randomness_data.seed_slot;

    let request_id = game.request_draw(
        ctx.accounts.host.key(),
        randomness.key(),
        seed_slot,
        clock.unix_timestamp,
    )?;
    game.verify_coordinator(randomness.owner)?;

    if seed_slot != clock.slot.saturating_sub(1) {
        msg!("Seed slot: {}", seed_slot);
        msg!("Current slot: {}", clock.slot);
        return err!(BingoError::RandomnessAlreadyRevealed);
    }

    msg!("Draw {} requested, {} numbers left", request_id, game.numbers_left());

    emit!(RandomnessRequested {
        game: game_key,
        request_id,
        randomness_account: randomness.key(),
    });
    Ok(())
}
