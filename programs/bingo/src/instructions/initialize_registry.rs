use anchor_lang::prelude::*;

use crate::constants::*;
use crate::state::Registry;

/// Accounts required to create the room registry.
#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    /// Pays for the registry and becomes its owner.
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The registry PDA.
    #[account(
        init,
        payer = owner,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the registry. Missing periods fall back to the defaults.
///
/// # Arguments
/// * `protocol_fee` - Lamports charged per room creation
/// * `coordinator` - Program that owns valid randomness accounts
/// * `host_action_deadline` - Seconds before an idle host can be replaced
/// * `bingo_call_period` - Seconds late winners have to call bingo
pub fn process_initialize_registry(
    ctx: Context<InitializeRegistry>,
    protocol_fee: u64,
    coordinator: Pubkey,
    host_action_deadline: Option<i64>,
    bingo_call_period: Option<i64>,
) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let registry = &mut ctx.accounts.registry;
    registry.configure(
        owner,
        coordinator,
        protocol_fee,
        host_action_deadline.unwrap_or(DEFAULT_HOST_ACTION_DEADLINE),
        bingo_call_period.unwrap_or(DEFAULT_BINGO_CALL_PERIOD),
        ctx.bumps.registry,
    )?;

    msg!(
        "Registry ready: fee {} deadline {}s call period {}s",
        registry.protocol_fee,
        registry.host_action_deadline,
        registry.bingo_call_period
    );
    Ok(())
}
