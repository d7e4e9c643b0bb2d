use anchor_lang::prelude::*;

use crate::error::BingoError;

/// Lamports owed to the next winner to withdraw.
///
/// Every winner gets `pool / winner_count`. The division remainder goes to the
/// last of them to withdraw, so the pool is drained exactly.
pub fn prize_share(pool: u64, winner_count: u8, payouts_made: u8) -> Result<u64> {
    require!(winner_count > 0, BingoError::NotAWinner);
    require!(payouts_made < winner_count, BingoError::AlreadyWithdrawn);

    let winners = winner_count as u64;
    let share = pool / winners;
    if payouts_made + 1 == winner_count {
        share
            .checked_add(pool % winners)
            .ok_or_else(|| BingoError::MathOverflow.into())
    } else {
        Ok(share)
    }
}

/// Debits `from` and credits `to` directly. `from` must be owned by this
/// program.
pub fn move_lamports<'info>(from: &AccountInfo<'info>, to: &AccountInfo<'info>, amount: u64) -> Result<()> {
    let debited = from
        .lamports()
        .checked_sub(amount)
        .ok_or(BingoError::MathOverflow)?;
    let credited = to
        .lamports()
        .checked_add(amount)
        .ok_or(BingoError::MathOverflow)?;
    **from.try_borrow_mut_lamports()? = debited;
    **to.try_borrow_mut_lamports()? = credited;
    Ok(())
}
