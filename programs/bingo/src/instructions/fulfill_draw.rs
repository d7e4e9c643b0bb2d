use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::*;
use crate::draw::word_from_randomness;
use crate::error::BingoError;
use crate::events::{NumberDrawn, RandomnessFulfilled};
use crate::state::Game;

/// Accounts required to settle a pending draw once its randomness is revealed.
/// Anyone may crank it.
#[derive(Accounts)]
pub struct FulfillDraw<'info> {
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [GAME_SEED, game.registry.as_ref(), game.room_index.to_le_bytes().as_ref()],
        bump = game.bump,
    )]
    pub game: Box<Account<'info, Game>>,

    /// The randomness account committed by `draw_number`.
    /// CHECK: The account's owner and data are validated within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_fulfill_draw(ctx: Context<FulfillDraw>, request_id: u64) -> Result<()> {
    let clock = Clock::get()?;
    let game_key = ctx.accounts.game.key();
    let randomness = &ctx.accounts.randomness_account_data;
    let game = &mut ctx.accounts.game;

    game.verify_coordinator(randomness.owner)?;

    let (seed_slot, revealed_random_value) = {
        let randomness_data = RandomnessAccountData::parse(randomness.data.borrow())
            .map_err(|_| BingoError::InvalidRandomnessAccount)?;
        game.require_pending(request_id, randomness.key(), randomness_data.seed_slot)?;
        let value = randomness_data
            .get_value(&clock)
            .map_err(|_| BingoError::RandomnessNotResolved)?;
        (randomness_data.seed_slot, value)
    };

    let number = game.fulfill_draw(
        request_id,
        randomness.key(),
        seed_slot,
        word_from_randomness(&revealed_random_value),
    )?;

    msg!(
        "Number drawn: {} ({} of {})",
        number,
        game.total_numbers_drawn(),
        MAX_NUMBER
    );

    emit!(RandomnessFulfilled {
        game: game_key,
        request_id,
    });
    emit!(NumberDrawn {
        game: game_key,
        number,
    });
    Ok(())
}
