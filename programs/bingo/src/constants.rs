/// PDA seed of the single room registry.
pub const REGISTRY_SEED: &[u8] = b"registry";

/// PDA seed prefix of a room, followed by the registry key and the room index.
pub const GAME_SEED: &[u8] = b"game";

/// PDA seed prefix of a ticket, followed by the game key and the holder key.
pub const TICKET_SEED: &[u8] = b"ticket";

/// Highest number that can be drawn. Numbers run from 1 to 75 inclusive.
pub const MAX_NUMBER: u8 = 75;

/// Side of the square card.
pub const CARD_WIDTH: usize = 5;

/// Cells on a card, the free cell included.
pub const CARD_SIZE: usize = CARD_WIDTH * CARD_WIDTH;

/// Numbers printed on a card (every cell except the free centre).
pub const CARD_NUMBERS: usize = CARD_SIZE - 1;

/// Index of the free (wild) cell in the row-major card layout.
pub const FREE_CELL_INDEX: usize = 12;

/// Value stored in the free cell. Never a drawable number.
pub const FREE_CELL: u8 = 0;

/// Hash rounds the card generator may consume before giving up.
pub const MAX_CARD_ROUNDS: u32 = 8;

/// Hard cap on `max_players`, bounded by the game account size.
pub const MAX_PLAYERS: u8 = 100;

/// Cards returned by one `get_bingo_cards` call. A page of 40 encodes to
/// 1004 bytes, within the 1024-byte return data limit.
pub const CARDS_PER_PAGE: usize = 40;

/// Seconds a running game's host may stay idle before anyone can take over.
pub const DEFAULT_HOST_ACTION_DEADLINE: i64 = 180;

/// Seconds other winners have to call bingo after the first call.
pub const DEFAULT_BINGO_CALL_PERIOD: i64 = 60;
