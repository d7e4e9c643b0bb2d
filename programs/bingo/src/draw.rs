use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::card::number_bit;
use crate::constants::MAX_NUMBER;
use crate::error::BingoError;

/// Maps a random word onto the numbers not yet in `drawn_mask`.
///
/// The `word mod remaining`-th undrawn number (ascending) is picked, so every
/// remaining number is reachable and no retry loop is needed. Returns `None`
/// once all 75 numbers are out.
pub fn pick_undrawn(drawn_mask: u128, word: u128) -> Option<u8> {
    let drawn = (1..=MAX_NUMBER).filter(|&n| drawn_mask & number_bit(n) != 0).count();
    let remaining = MAX_NUMBER as usize - drawn;
    if remaining == 0 {
        return None;
    }
    let target = (word % remaining as u128) as usize;
    (1..=MAX_NUMBER)
        .filter(|&n| drawn_mask & number_bit(n) == 0)
        .nth(target)
}

/// First 16 bytes of an oracle value as a little-endian word.
pub fn word_from_randomness(value: &[u8; 32]) -> u128 {
    let mut word = [0u8; 16];
    word.copy_from_slice(&value[..16]);
    u128::from_le_bytes(word)
}

/// Most recent hash in the SlotHashes sysvar data.
///
/// Layout: `u64` entry count, then `(slot: u64, hash: [u8; 32])` entries,
/// newest first.
pub fn latest_slot_hash(data: &[u8]) -> Result<[u8; 32]> {
    if data.len() < 48 {
        return err!(BingoError::SlotHashNotFound);
    }
    let count = u64::from_le_bytes(
        data[0..8]
            .try_into()
            .map_err(|_| BingoError::SlotHashNotFound)?,
    );
    require!(count > 0, BingoError::SlotHashNotFound);

    let mut hash = [0u8; 32];
    hash.copy_from_slice(&data[16..48]);
    Ok(hash)
}

/// Card seed for a ticket: slot hash, room, holder and the room's ticket
/// nonce, so re-buying after leaving yields a fresh card.
pub fn ticket_seed(slot_hash: &[u8; 32], game: &Pubkey, player: &Pubkey, nonce: u64) -> [u8; 32] {
    hashv(&[
        slot_hash.as_ref(),
        game.as_ref(),
        player.as_ref(),
        &nonce.to_le_bytes(),
    ])
    .to_bytes()
}
