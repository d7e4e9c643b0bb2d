use anchor_lang::prelude::*;

pub mod card;
pub mod constants;
pub mod draw;
pub mod error;
pub mod events;
pub mod instructions;
pub mod payout;
pub mod state;
pub mod win;

pub use card::Card;
pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("2eZmdZq8MrqBknQy5cvECRK5X2p53orerK4pQ6ySt8ZT");

#[program]
pub mod bingo {
    use super::*;

    // ── Registry ─────────────────────────────────────────────────

    pub fn initialize_registry(
        ctx: Context<InitializeRegistry>,
        protocol_fee: u64,
        coordinator: Pubkey,
        host_action_deadline: Option<i64>,
        bingo_call_period: Option<i64>,
    ) -> Result<()> {
        process_initialize_registry(
            ctx,
            protocol_fee,
            coordinator,
            host_action_deadline,
            bingo_call_period,
        )
    }

    pub fn create_room(
        ctx: Context<CreateRoom>,
        ticket_cost: u64,
        min_players: u8,
        max_players: u8,
    ) -> Result<()> {
        process_create_room(ctx, ticket_cost, min_players, max_players)
    }

    pub fn withdraw_fees(ctx: Context<RegistryAdmin>) -> Result<()> {
        process_withdraw_fees(ctx)
    }

    pub fn change_owner(ctx: Context<RegistryAdmin>, new_owner: Pubkey) -> Result<()> {
        process_change_owner(ctx, new_owner)
    }

    pub fn set_protocol_fee(ctx: Context<RegistryAdmin>, protocol_fee: u64) -> Result<()> {
        process_set_protocol_fee(ctx, protocol_fee)
    }

    // ── Game ─────────────────────────────────────────────────────

    pub fn buy_ticket(ctx: Context<BuyTicket>, to: Pubkey, amount: u64) -> Result<()> {
        process_buy_ticket(ctx, to, amount)
    }

    pub fn leave_game(ctx: Context<LeaveGame>) -> Result<()> {
        process_leave_game(ctx)
    }

    pub fn start_game(ctx: Context<StartGame>) -> Result<()> {
        process_start_game(ctx)
    }

    pub fn claim_host(ctx: Context<ClaimHost>) -> Result<()> {
        process_claim_host(ctx)
    }

    pub fn draw_number(ctx: Context<DrawNumber>) -> Result<()> {
        process_draw_number(ctx)
    }

    pub fn fulfill_draw(ctx: Context<FulfillDraw>, request_id: u64) -> Result<()> {
        process_fulfill_draw(ctx, request_id)
    }

    pub fn call_bingo(ctx: Context<CallBingo>) -> Result<()> {
        process_call_bingo(ctx)
    }

    pub fn withdraw_winnings(ctx: Context<WithdrawWinnings>) -> Result<()> {
        process_withdraw_winnings(ctx)
    }

    // ── Views ────────────────────────────────────────────────────

    pub fn check_bingo(ctx: Context<GameView>, card: Card) -> Result<bool> {
        process_check_bingo(ctx, card)
    }

    pub fn can_draw_number(ctx: Context<GameView>) -> Result<bool> {
        process_can_draw_number(ctx)
    }

    pub fn get_bingo_cards(ctx: Context<GameView>, offset: u32, limit: u8) -> Result<Vec<Card>> {
        process_get_bingo_cards(ctx, offset, limit)
    }
}
