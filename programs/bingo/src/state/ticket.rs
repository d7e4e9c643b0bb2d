use anchor_lang::prelude::*;

use crate::constants::CARD_SIZE;

/// A player's seat in one room.
/// Seeds: [b"ticket", game.key(), player.key()]
#[account]
#[derive(InitSpace, Default)]
pub struct Ticket {
    /// The room this ticket belongs to.
    pub game: Pubkey,

    /// The holder. Only this key can leave, call bingo or withdraw with it.
    pub player: Pubkey,

    /// Row-major 5x5 grid, fixed when the ticket is bought.
    pub card: [u8; CARD_SIZE],

    /// `true` from purchase until the holder leaves or is evicted as host.
    pub valid: bool,

    /// Set once, when the holder withdraws winnings.
    pub paid_out: bool,

    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,
}

impl Ticket {
    pub fn is_held_by(&self, player: &Pubkey) -> bool {
        self.valid && self.player == *player
    }
}
