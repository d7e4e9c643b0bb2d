//! Card generation.
//!
//! A card is a row-major 5x5 grid. The centre cell is free and stores
//! [`FREE_CELL`]; the other 24 cells hold distinct numbers in `1..=75`.
//! Cards are derived deterministically from a 32-byte seed so that anyone can
//! recompute a ticket's card from the seed that produced it.

use anchor_lang::prelude::*;
use solana_program::hash::hashv;

use crate::constants::*;
use crate::error::BingoError;

pub type Card = [u8; CARD_SIZE];

/// Largest multiple of 75 that fits in a byte. Bytes at or above it are
/// rejected so every number is equally likely.
const ACCEPT_BELOW: u8 = MAX_NUMBER * 3;

/// Bit for `number` in a drawn-number mask, or 0 when `number` is not drawable.
pub fn number_bit(number: u8) -> u128 {
    if (1..=MAX_NUMBER).contains(&number) {
        1u128 << number
    } else {
        0
    }
}

pub fn generate_card(seed: &[u8; 32]) -> Result<Card> {
    generate_card_within(seed, MAX_CARD_ROUNDS)
}

/// Expands `seed` into at most `max_rounds` hash blocks and fills the card
/// from the accepted bytes. Fails instead of returning a partial card.
pub fn generate_card_within(seed: &[u8; 32], max_rounds: u32) -> Result<Card> {
    let mut card = [FREE_CELL; CARD_SIZE];
    let mut seen = 0u128;
    let mut filled = 0usize;

    for round in 0..max_rounds {
        let block = hashv(&[seed.as_ref(), &round.to_le_bytes()]).to_bytes();
        for byte in block {
            if byte >= ACCEPT_BELOW {
                continue;
            }
            let number = byte % MAX_NUMBER + 1;
            let bit = number_bit(number);
            if seen & bit != 0 {
                continue;
            }
            seen |= bit;

            // skip over the free centre
            let index = if filled < FREE_CELL_INDEX { filled } else { filled + 1 };
            card[index] = number;
            filled += 1;

            if filled == CARD_NUMBERS {
                return Ok(card);
            }
        }
    }

    msg!("Card generation exhausted {} rounds with {} numbers", max_rounds, filled);
    err!(BingoError::CardGenerationFailed)
}

/// True when `card` has a free centre and 24 distinct numbers in range.
pub fn validate_card(card: &Card) -> bool {
    let mut seen = 0u128;
    for (index, &number) in card.iter().enumerate() {
        if index == FREE_CELL_INDEX {
            if number != FREE_CELL {
                return false;
            }
            continue;
        }
        let bit = number_bit(number);
        if bit == 0 || seen & bit != 0 {
            return false;
        }
        seen |= bit;
    }
    seen.count_ones() as usize == CARD_NUMBERS
}
