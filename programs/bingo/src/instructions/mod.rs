pub mod admin;
pub mod buy_ticket;
pub mod call_bingo;
pub mod claim_host;
pub mod create_room;
pub mod draw_number;
pub mod fulfill_draw;
pub mod initialize_registry;
pub mod leave_game;
pub mod start_game;
pub mod views;
pub mod withdraw_winnings;

pub use admin::*;
pub use buy_ticket::*;
pub use call_bingo::*;
pub use claim_host::*;
pub use create_room::*;
pub use draw_number::*;
pub use fulfill_draw::*;
pub use initialize_registry::*;
pub use leave_game::*;
pub use start_game::*;
pub use views::*;
pub use withdraw_winnings::*;
