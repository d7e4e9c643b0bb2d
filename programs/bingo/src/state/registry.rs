use anchor_lang::prelude::*;

use crate::constants::*;
use crate::error::BingoError;

/// Parameters a creator picks for a new room.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoomParams {
    pub ticket_cost: u64,
    pub min_players: u8,
    pub max_players: u8,
}

/// Factory state shared by every room.
/// Seeds: [b"registry"]
#[account]
#[derive(InitSpace, Default)]
pub struct Registry {
    /// May withdraw fees, change the fee and hand over ownership.
    pub owner: Pubkey,

    /// Program that must own every randomness account used by a room.
    pub coordinator: Pubkey,

    /// Lamports charged to the creator of each room.
    pub protocol_fee: u64,

    /// Copied into each new room.
    pub host_action_deadline: i64,

    /// Copied into each new room.
    pub bingo_call_period: i64,

    /// Number of rooms created. Room `i` lives at `room_address(.., i)`.
    pub room_count: u64,

    /// Fees received since the last withdrawal.
    pub fees_collected: u64,

    pub bump: u8,
}

impl Registry {
    pub fn configure(
        &mut self,
        owner: Pubkey,
        coordinator: Pubkey,
        protocol_fee: u64,
        host_action_deadline: i64,
        bingo_call_period: i64,
        bump: u8,
    ) -> Result<()> {
        require!(
            host_action_deadline > 0 && bingo_call_period > 0,
            BingoError::InvalidPeriod
        );
        self.owner = owner;
        self.coordinator = coordinator;
        self.protocol_fee = protocol_fee;
        self.host_action_deadline = host_action_deadline;
        self.bingo_call_period = bingo_call_period;
        self.room_count = 0;
        self.fees_collected = 0;
        self.bump = bump;
        Ok(())
    }

    pub fn validate_room(&self, params: &RoomParams) -> Result<()> {
        require!(
            params.min_players >= 1
                && params.min_players <= params.max_players
                && params.max_players <= MAX_PLAYERS,
            BingoError::InvalidPlayerBounds
        );
        let min_pool = params.min_players as u128 * params.ticket_cost as u128;
        require!(
            min_pool > self.protocol_fee as u128,
            BingoError::FeeExceedsPool
        );
        Ok(())
    }

    /// Books the creation fee and hands out the next room index.
    pub fn register_room(&mut self) -> Result<u64> {
        let index = self.room_count;
        self.room_count = self
            .room_count
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        self.fees_collected = self
            .fees_collected
            .checked_add(self.protocol_fee)
            .ok_or(BingoError::MathOverflow)?;
        Ok(index)
    }

    pub fn room_address(program_id: &Pubkey, registry: &Pubkey, index: u64) -> Pubkey {
        Pubkey::find_program_address(
            &[GAME_SEED, registry.as_ref(), &index.to_le_bytes()],
            program_id,
        )
        .0
    }

    /// Every room created so far, oldest first.
    pub fn rooms(&self, program_id: &Pubkey, registry: &Pubkey) -> Vec<Pubkey> {
        (0..self.room_count)
            .map(|index| Self::room_address(program_id, registry, index))
            .collect()
    }

    pub fn require_owner(&self, caller: &Pubkey) -> Result<()> {
        require_keys_eq!(*caller, self.owner, BingoError::NotRegistryOwner);
        Ok(())
    }
}
