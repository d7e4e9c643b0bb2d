use anchor_lang::prelude::*;

#[event] pub struct RoomCreated         { pub creator: Pubkey, pub room: Pubkey, pub room_index: u64, pub ticket_cost: u64, pub min_players: u8, pub max_players: u8 }
#[event] pub struct TicketBought        { pub game: Pubkey, pub player: Pubkey }
#[event] pub struct PlayerLeft          { pub game: Pubkey, pub player: Pubkey }
#[event] pub struct GameStarted         { pub game: Pubkey, pub started_at: i64 }
#[event] pub struct RandomnessRequested { pub game: Pubkey, pub request_id: u64, pub randomness_account: Pubkey }
#[event] pub struct RandomnessFulfilled { pub game: Pubkey, pub request_id: u64 }
#[event] pub struct NumberDrawn         { pub game: Pubkey, pub number: u8 }
#[event] pub struct HostChanged         { pub game: Pubkey, pub new_host: Pubkey }
#[event] pub struct BingoFound          { pub game: Pubkey, pub player: Pubkey }
#[event] pub struct BingoCalled         { pub game: Pubkey, pub player: Pubkey, pub winner_count: u8 }
#[event] pub struct WinningsWithdrawn   { pub game: Pubkey, pub player: Pubkey, pub amount: u64 }
#[event] pub struct FeesWithdrawn       { pub owner: Pubkey, pub amount: u64 }
#[event] pub struct OwnerChanged        { pub old_owner: Pubkey, pub new_owner: Pubkey }
#[event] pub struct ProtocolFeeUpdated  { pub protocol_fee: u64 }
