use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::BingoError;
use crate::events::{FeesWithdrawn, OwnerChanged, ProtocolFeeUpdated};
use crate::payout::move_lamports;
use crate::state::Registry;

/// Accounts shared by the owner-only registry instructions.
#[derive(Accounts)]
pub struct RegistryAdmin<'info> {
    /// Must be the registry owner; receives withdrawn fees.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The registry state account.
    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump,
    )]
    pub registry: Account<'info, Registry>,
}

/// Sends every lamport above the registry's rent-exempt minimum to the owner.
pub fn process_withdraw_fees(ctx: Context<RegistryAdmin>) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let registry = &mut ctx.accounts.registry;
    registry.require_owner(&owner)?;

    let registry_info = registry.to_account_info();
    let rent = Rent::get()?.minimum_balance(registry_info.data_len());
    let amount = registry_info.lamports().saturating_sub(rent);
    require!(amount > 0, BingoError::NothingToWithdraw);

    move_lamports(&registry_info, &ctx.accounts.owner.to_account_info(), amount)?;
    registry.fees_collected = 0;

    msg!("Withdrew {} lamports of fees", amount);
    emit!(FeesWithdrawn { owner, amount });
    Ok(())
}

pub fn process_change_owner(ctx: Context<RegistryAdmin>, new_owner: Pubkey) -> Result<()> {
    let old_owner = ctx.accounts.owner.key();
    let registry = &mut ctx.accounts.registry;
    registry.require_owner(&old_owner)?;

    registry.owner = new_owner;
    emit!(OwnerChanged { old_owner, new_owner });
    Ok(())
}

/// Applies to rooms created after this call.
pub fn process_set_protocol_fee(ctx: Context<RegistryAdmin>, protocol_fee: u64) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.require_owner(&ctx.accounts.owner.key())?;

    registry.protocol_fee = protocol_fee;
    emit!(ProtocolFeeUpdated { protocol_fee });
    Ok(())
}
