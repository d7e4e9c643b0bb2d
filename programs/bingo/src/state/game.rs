use anchor_lang::prelude::*;

use crate::card::{generate_card, number_bit, Card};
use crate::constants::*;
use crate::draw::pick_undrawn;
use crate::error::BingoError;
use crate::payout::prize_share;
use crate::state::{Registry, RoomParams, Ticket};
use crate::win::check_bingo;

#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GamePhase {
    #[default]
    Setup,
    Running,
    BingoFound,
}

/// The randomness request in flight, if any.
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DrawRequest {
    #[default]
    Idle,
    Pending {
        request_id: u64,
        randomness_account: Pubkey,
        /// Slot the randomness was committed at. A re-commit changes it.
        seed_slot: u64,
    },
}

impl DrawRequest {
    pub fn is_pending(&self) -> bool {
        matches!(self, DrawRequest::Pending { .. })
    }
}

/// One bingo room. Holds the ticket pool in its own lamports.
/// Seeds: [b"game", registry.key(), room_index.to_le_bytes()]
#[account]
#[derive(InitSpace, Default)]
pub struct Game {
    /// Registry that created this room.
    pub registry: Pubkey,

    /// Position of this room in the registry.
    pub room_index: u64,

    /// Current host. `Pubkey::default()` once the host has left.
    pub host: Pubkey,

    /// Program expected to own randomness accounts.
    pub coordinator: Pubkey,

    /// Lamports per ticket.
    pub ticket_cost: u64,

    pub min_players: u8,
    pub max_players: u8,

    pub phase: GamePhase,

    /// Holders of a valid ticket, in joining order.
    #[max_len(100)]
    pub joined_players: Vec<Pubkey>,

    /// Numbers in the order they were drawn.
    #[max_len(75)]
    pub drawn_numbers: Vec<u8>,

    /// Bit `n` is set once number `n` has been drawn.
    pub drawn_mask: u128,

    pub draw_request: DrawRequest,

    /// Id of the last randomness request. Ids start at 1.
    pub request_count: u64,

    pub started_at: i64,
    pub host_last_action_time: i64,
    pub host_action_deadline: i64,

    pub bingo_found_time: i64,
    pub bingo_call_period: i64,

    /// Players who called bingo successfully, in calling order.
    #[max_len(100)]
    pub winners: Vec<Pubkey>,

    /// Lamports paid in for currently held tickets.
    pub prize_pool: u64,
    pub paid_out_total: u64,
    pub payouts_made: u8,

    /// Tickets ever issued; feeds the card seed.
    pub tickets_issued: u64,

    pub bump: u8,
}

impl Game {
    pub fn open(
        &mut self,
        registry_key: Pubkey,
        registry: &Registry,
        room_index: u64,
        host: Pubkey,
        params: RoomParams,
        bump: u8,
    ) {
        self.registry = registry_key;
        self.room_index = room_index;
        self.host = host;
        self.coordinator = registry.coordinator;
        self.ticket_cost = params.ticket_cost;
        self.min_players = params.min_players;
        self.max_players = params.max_players;
        self.phase = GamePhase::Setup;
        self.host_action_deadline = registry.host_action_deadline;
        self.bingo_call_period = registry.bingo_call_period;
        self.bump = bump;
    }

    // ── Read surface ─────────────────────────────────────────────

    pub fn total_numbers_drawn(&self) -> u8 {
        self.drawn_numbers.len() as u8
    }

    pub fn numbers_left(&self) -> u8 {
        MAX_NUMBER - self.total_numbers_drawn()
    }

    pub fn is_drawn(&self, number: u8) -> bool {
        self.drawn_mask & number_bit(number) != 0
    }

    pub fn winner_count(&self) -> u8 {
        self.winners.len() as u8
    }

    pub fn is_winner(&self, player: &Pubkey) -> bool {
        self.winners.contains(player)
    }

    pub fn has_host(&self) -> bool {
        self.host != Pubkey::default()
    }

    pub fn check_bingo(&self, card: &Card) -> bool {
        check_bingo(card, self.drawn_mask)
    }

    pub fn can_draw_number(&self) -> bool {
        self.phase == GamePhase::Running
            && !self.draw_request.is_pending()
            && self.total_numbers_drawn() < MAX_NUMBER
    }

    /// `now` is at or past the end of the bingo call period.
    pub fn call_period_elapsed(&self, now: i64) -> bool {
        now >= self.bingo_found_time.saturating_add(self.bingo_call_period)
    }

    pub fn host_timed_out(&self, now: i64) -> bool {
        self.phase == GamePhase::Running
            && now > self.host_last_action_time.saturating_add(self.host_action_deadline)
    }

    /// Cards of current players in joining order, starting at the
    /// `offset`-th player and capped at `CARDS_PER_PAGE`. Tickets that are
    /// not held by a player in the page are ignored.
    pub fn bingo_cards<'a>(
        &self,
        tickets: impl IntoIterator<Item = &'a Ticket>,
        offset: usize,
        limit: usize,
    ) -> Vec<Card> {
        let tickets: Vec<&Ticket> = tickets.into_iter().collect();
        self.joined_players
            .iter()
            .skip(offset)
            .take(limit.min(CARDS_PER_PAGE))
            .filter_map(|player| {
                tickets
                    .iter()
                    .find(|ticket| ticket.is_held_by(player))
                    .map(|ticket| ticket.card)
            })
            .collect()
    }

    // ── Membership ───────────────────────────────────────────────

    /// Issues a ticket to `to` with a card derived from `seed`.
    pub fn buy_ticket(&mut self, ticket: &mut Ticket, to: Pubkey, amount: u64, seed: &[u8; 32]) -> Result<()> {
        require!(self.phase == GamePhase::Setup, BingoError::GameAlreadyStarted);
        require!(!ticket.valid, BingoError::AlreadyHasTicket);
        require!(
            self.joined_players.len() < self.max_players as usize,
            BingoError::GameFull
        );
        require!(amount == self.ticket_cost, BingoError::IncorrectPayment);

        let card = generate_card(seed)?;

        self.prize_pool = self
            .prize_pool
            .checked_add(self.ticket_cost)
            .ok_or(BingoError::MathOverflow)?;
        self.tickets_issued = self
            .tickets_issued
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        self.joined_players.push(to);

        ticket.player = to;
        ticket.card = card;
        ticket.valid = true;
        ticket.paid_out = false;
        Ok(())
    }

    /// Gives up `player`'s seat and returns the refund owed. A leaving host
    /// vacates the host seat.
    pub fn leave_game(&mut self, ticket: &mut Ticket, player: Pubkey) -> Result<u64> {
        require!(self.phase == GamePhase::Setup, BingoError::GameAlreadyStarted);
        require!(ticket.is_held_by(&player), BingoError::NotAPlayer);

        ticket.valid = false;
        self.joined_players.retain(|p| *p != player);
        self.prize_pool = self
            .prize_pool
            .checked_sub(self.ticket_cost)
            .ok_or(BingoError::MathOverflow)?;
        if self.host == player {
            self.host = Pubkey::default();
        }
        Ok(self.ticket_cost)
    }

    // ── Host ─────────────────────────────────────────────────────

    pub fn start_game(&mut self, caller: Pubkey, now: i64) -> Result<()> {
        require_keys_eq!(caller, self.host, BingoError::NotHost);
        require!(self.phase == GamePhase::Setup, BingoError::GameAlreadyStarted);
        require!(
            self.joined_players.len() >= self.min_players as usize,
            BingoError::NotEnoughPlayers
        );

        self.phase = GamePhase::Running;
        self.started_at = now;
        self.host_last_action_time = now;
        Ok(())
    }

    /// Makes `caller` the host when the seat is vacant or the running host
    /// has been idle past the deadline. The previous host's ticket is
    /// invalidated. Returns the previous host.
    pub fn claim_host(
        &mut self,
        caller: Pubkey,
        caller_ticket: &Ticket,
        previous_host_ticket: Option<&mut Ticket>,
        now: i64,
    ) -> Result<Pubkey> {
        require!(caller_ticket.is_held_by(&caller), BingoError::NoValidTicket);
        // one code for every ineligible state
        require!(
            caller != self.host && (!self.has_host() || self.host_timed_out(now)),
            BingoError::HostClaimRejected
        );

        let previous = self.host;
        if previous != Pubkey::default() {
            let stale = previous_host_ticket.ok_or(BingoError::MissingHostTicket)?;
            require_keys_eq!(stale.player, previous, BingoError::MissingHostTicket);
            stale.valid = false;
        }

        self.host = caller;
        self.host_last_action_time = now;
        Ok(previous)
    }

    // ── Drawing ──────────────────────────────────────────────────

    pub fn verify_coordinator(&self, owner: &Pubkey) -> Result<()> {
        if *owner != self.coordinator {
            msg!("OnlyCoordinatorCanFulfill have: {} want: {}", owner, self.coordinator);
            return err!(BingoError::CoordinatorMismatch);
        }
        Ok(())
    }

    /// Records a randomness request committed at `seed_slot` and returns its id.
    pub fn request_draw(
        &mut self,
        caller: Pubkey,
        randomness_account: Pubkey,
        seed_slot: u64,
        now: i64,
    ) -> Result<u64> {
        require_keys_eq!(caller, self.host, BingoError::NotHost);
        require!(self.phase == GamePhase::Running, BingoError::GameNotRunning);
        require!(!self.draw_request.is_pending(), BingoError::DrawAlreadyPending);
        require!(
            self.total_numbers_drawn() < MAX_NUMBER,
            BingoError::AllNumbersDrawn
        );

        let request_id = self
            .request_count
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        self.request_count = request_id;
        self.draw_request = DrawRequest::Pending {
            request_id,
            randomness_account,
            seed_slot,
        };
        self.host_last_action_time = now;
        Ok(request_id)
    }

    /// Fails unless `request_id` on `randomness_account` is the pending draw
    /// of a running game and the account still carries the commitment made
    /// at request time.
    pub fn require_pending(&self, request_id: u64, randomness_account: Pubkey, seed_slot: u64) -> Result<()> {
        require!(self.phase == GamePhase::Running, BingoError::GameNotRunning);
        match self.draw_request {
            DrawRequest::Pending {
                request_id: pending_id,
                randomness_account: pending_account,
                seed_slot: pending_slot,
            } if pending_id == request_id && pending_account == randomness_account => {
                if pending_slot != seed_slot {
                    msg!("Seed slot have: {} want: {}", seed_slot, pending_slot);
                    return err!(BingoError::RandomnessExpired);
                }
                Ok(())
            }
            _ => err!(BingoError::UnknownDrawRequest),
        }
    }

    /// Resolves the pending request with `word` and returns the drawn number.
    pub fn fulfill_draw(
        &mut self,
        request_id: u64,
        randomness_account: Pubkey,
        seed_slot: u64,
        word: u128,
    ) -> Result<u8> {
        self.require_pending(request_id, randomness_account, seed_slot)?;

        let number = pick_undrawn(self.drawn_mask, word).ok_or(BingoError::AllNumbersDrawn)?;
        self.mark_drawn(number)?;
        self.draw_request = DrawRequest::Idle;
        Ok(number)
    }

    pub fn mark_drawn(&mut self, number: u8) -> Result<()> {
        let bit = number_bit(number);
        require!(bit != 0, BingoError::NumberOutOfRange);
        require!(self.drawn_mask & bit == 0, BingoError::NumberAlreadyDrawn);

        self.drawn_mask |= bit;
        self.drawn_numbers.push(number);
        Ok(())
    }

    // ── Winning ──────────────────────────────────────────────────

    /// Registers `caller` as a winner. Returns `true` for the call that
    /// found the first bingo.
    pub fn call_bingo(&mut self, caller: Pubkey, ticket: &Ticket, now: i64) -> Result<bool> {
        require!(self.phase != GamePhase::Setup, BingoError::GameNotStarted);
        require!(ticket.is_held_by(&caller), BingoError::NoValidTicket);
        require!(!self.is_winner(&caller), BingoError::AlreadyWon);
        if self.phase == GamePhase::BingoFound {
            require!(!self.call_period_elapsed(now), BingoError::CallPeriodEnded);
        }
        require!(self.check_bingo(&ticket.card), BingoError::NoBingo);

        let first = self.phase == GamePhase::Running;
        if first {
            self.phase = GamePhase::BingoFound;
            self.bingo_found_time = now;
        }
        self.winners.push(caller);
        Ok(first)
    }

    /// Settles `caller`'s share and returns the lamports to send. Ledger
    /// fields are final before the caller moves any lamports.
    pub fn withdraw_winnings(&mut self, caller: Pubkey, ticket: &mut Ticket, now: i64) -> Result<u64> {
        require!(self.phase == GamePhase::BingoFound, BingoError::GameNotFinished);
        require!(self.is_winner(&caller), BingoError::NotAWinner);
        require_keys_eq!(ticket.player, caller, BingoError::NotAWinner);
        require!(self.call_period_elapsed(now), BingoError::WithdrawNotOpen);
        require!(!ticket.paid_out, BingoError::AlreadyWithdrawn);

        let amount = prize_share(self.prize_pool, self.winner_count(), self.payouts_made)?;

        ticket.paid_out = true;
        self.payouts_made = self
            .payouts_made
            .checked_add(1)
            .ok_or(BingoError::MathOverflow)?;
        self.paid_out_total = self
            .paid_out_total
            .checked_add(amount)
            .ok_or(BingoError::MathOverflow)?;
        require!(
            self.paid_out_total <= self.prize_pool,
            BingoError::MathOverflow
        );
        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COST: u64 = 200;
    const T0: i64 = 1_700_000_000;
    const SLOT: u64 = 250_000_000;

    struct Room {
        game: Game,
        host: Pubkey,
        host_ticket: Ticket,
    }

    fn registry() -> Registry {
        let mut registry = Registry::default();
        registry
            .configure(
                Pubkey::new_unique(),
                Pubkey::new_unique(),
                0,
                DEFAULT_HOST_ACTION_DEADLINE,
                DEFAULT_BINGO_CALL_PERIOD,
                255,
            )
            .unwrap();
        registry
    }

    fn seed(n: u8) -> [u8; 32] {
        [n; 32]
    }

    /// Room created by a host who holds the first ticket, as create_room does.
    fn room(ticket_cost: u64, min_players: u8, max_players: u8) -> Room {
        let host = Pubkey::new_unique();
        let mut game = Game::default();
        game.open(
            Pubkey::new_unique(),
            &registry(),
            0,
            host,
            RoomParams { ticket_cost, min_players, max_players },
            254,
        );
        let mut host_ticket = Ticket::default();
        game.buy_ticket(&mut host_ticket, host, ticket_cost, &seed(0)).unwrap();
        Room { game, host, host_ticket }
    }

    fn join(game: &mut Game, n: u8) -> (Pubkey, Ticket) {
        let player = Pubkey::new_unique();
        let mut ticket = Ticket::default();
        game.buy_ticket(&mut ticket, player, game.ticket_cost, &seed(n)).unwrap();
        (player, ticket)
    }

    fn draw_all(game: &mut Game) {
        for n in 1..=MAX_NUMBER {
            game.mark_drawn(n).unwrap();
        }
    }

    #[test]
    fn test_open_room_has_host_ticket() {
        let r = room(COST, 1, 3);
        assert_eq!(r.game.phase, GamePhase::Setup);
        assert_eq!(r.game.joined_players, vec![r.host]);
        assert_eq!(r.game.prize_pool, COST);
        assert!(r.host_ticket.is_held_by(&r.host));
        assert!(crate::card::validate_card(&r.host_ticket.card));
    }

    #[test]
    fn test_buy_ticket_guards() {
        let mut r = room(COST, 1, 3);

        let mut again = r.host_ticket.clone();
        assert_eq!(
            r.game.buy_ticket(&mut again, r.host, COST, &seed(1)).unwrap_err(),
            BingoError::AlreadyHasTicket.into()
        );

        let mut ticket = Ticket::default();
        for wrong in [0, COST - 1, COST + 1] {
            assert_eq!(
                r.game
                    .buy_ticket(&mut ticket, Pubkey::new_unique(), wrong, &seed(1))
                    .unwrap_err(),
                BingoError::IncorrectPayment.into()
            );
        }
        assert!(!ticket.valid);

        join(&mut r.game, 1);
        join(&mut r.game, 2);
        assert_eq!(
            r.game
                .buy_ticket(&mut Ticket::default(), Pubkey::new_unique(), COST, &seed(3))
                .unwrap_err(),
            BingoError::GameFull.into()
        );
        assert_eq!(r.game.joined_players.len(), 3);
        assert_eq!(r.game.prize_pool, 3 * COST);
    }

    #[test]
    fn test_membership_never_exceeds_max() {
        let mut r = room(COST, 1, 4);
        let mut seats: Vec<(Pubkey, Ticket)> = Vec::new();
        for step in 0u8..40 {
            if step % 3 == 2 && !seats.is_empty() {
                let (player, mut ticket) = seats.remove(0);
                assert_eq!(r.game.leave_game(&mut ticket, player).unwrap(), COST);
            } else {
                let player = Pubkey::new_unique();
                let mut ticket = Ticket::default();
                if r.game.buy_ticket(&mut ticket, player, COST, &seed(step)).is_ok() {
                    seats.push((player, ticket));
                }
            }
            assert!(r.game.joined_players.len() <= 4);
            assert_eq!(r.game.prize_pool, COST * r.game.joined_players.len() as u64);
        }
    }

    #[test]
    fn test_leave_game_refunds_ticket_cost() {
        let mut r = room(COST, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);

        let refund = r.game.leave_game(&mut b_ticket, b).unwrap();
        assert_eq!(refund, COST);
        assert!(!b_ticket.valid);
        assert!(!r.game.joined_players.contains(&b));
        assert_eq!(r.game.prize_pool, COST);

        assert_eq!(
            r.game.leave_game(&mut b_ticket, b).unwrap_err(),
            BingoError::NotAPlayer.into()
        );

        // a fresh purchase after leaving is allowed
        r.game.buy_ticket(&mut b_ticket, b, COST, &seed(9)).unwrap();
        assert!(b_ticket.is_held_by(&b));
    }

    #[test]
    fn test_leave_only_in_setup() {
        let mut r = room(COST, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);
        r.game.start_game(r.host, T0).unwrap();
        assert_eq!(
            r.game.leave_game(&mut b_ticket, b).unwrap_err(),
            BingoError::GameAlreadyStarted.into()
        );
        assert_eq!(
            r.game
                .buy_ticket(&mut Ticket::default(), Pubkey::new_unique(), COST, &seed(2))
                .unwrap_err(),
            BingoError::GameAlreadyStarted.into()
        );
    }

    #[test]
    fn test_start_game() {
        let mut r = room(COST, 2, 3);
        assert_eq!(
            r.game.start_game(r.host, T0).unwrap_err(),
            BingoError::NotEnoughPlayers.into()
        );
        let (b, _) = join(&mut r.game, 1);
        assert_eq!(
            r.game.start_game(b, T0).unwrap_err(),
            BingoError::NotHost.into()
        );

        r.game.start_game(r.host, T0).unwrap();
        assert_eq!(r.game.phase, GamePhase::Running);
        assert_eq!(r.game.started_at, T0);
        assert_eq!(r.game.host_last_action_time, T0);

        assert_eq!(
            r.game.start_game(r.host, T0 + 1).unwrap_err(),
            BingoError::GameAlreadyStarted.into()
        );
    }

    #[test]
    fn test_vacated_host_can_be_claimed_by_player() {
        let mut r = room(COST, 1, 3);
        let (b, b_ticket) = join(&mut r.game, 1);

        r.game.leave_game(&mut r.host_ticket, r.host).unwrap();
        assert!(!r.game.has_host());

        let bystander = Pubkey::new_unique();
        assert_eq!(
            r.game
                .claim_host(bystander, &Ticket::default(), None, T0)
                .unwrap_err(),
            BingoError::NoValidTicket.into()
        );

        let previous = r.game.claim_host(b, &b_ticket, None, T0).unwrap();
        assert_eq!(previous, Pubkey::default());
        assert_eq!(r.game.host, b);
        r.game.start_game(b, T0).unwrap();
    }

    #[test]
    fn test_active_host_cannot_be_claimed() {
        let mut r = room(COST, 1, 3);
        let (b, b_ticket) = join(&mut r.game, 1);

        // setup phase, host present
        assert_eq!(
            r.game
                .claim_host(b, &b_ticket, Some(&mut r.host_ticket), T0)
                .unwrap_err(),
            BingoError::HostClaimRejected.into()
        );

        r.game.start_game(r.host, T0).unwrap();
        let deadline = T0 + DEFAULT_HOST_ACTION_DEADLINE;
        assert_eq!(
            r.game
                .claim_host(b, &b_ticket, Some(&mut r.host_ticket), deadline)
                .unwrap_err(),
            BingoError::HostClaimRejected.into()
        );
        assert_eq!(
            r.game
                .claim_host(r.host, &r.host_ticket.clone(), None, deadline + 100)
                .unwrap_err(),
            BingoError::HostClaimRejected.into()
        );
        assert!(r.host_ticket.valid);
    }

    #[test]
    fn test_idle_host_is_replaced_and_evicted() {
        let mut r = room(COST, 1, 3);
        let (b, b_ticket) = join(&mut r.game, 1);
        r.game.start_game(r.host, T0).unwrap();

        let later = T0 + DEFAULT_HOST_ACTION_DEADLINE + 1;
        assert_eq!(
            r.game.claim_host(b, &b_ticket, None, later).unwrap_err(),
            BingoError::MissingHostTicket.into()
        );

        let previous = r
            .game
            .claim_host(b, &b_ticket, Some(&mut r.host_ticket), later)
            .unwrap();
        assert_eq!(previous, r.host);
        assert_eq!(r.game.host, b);
        assert_eq!(r.game.host_last_action_time, later);
        assert!(!r.host_ticket.valid);

        // the evicted host can no longer win
        draw_all(&mut r.game);
        assert_eq!(
            r.game.call_bingo(r.host, &r.host_ticket, later).unwrap_err(),
            BingoError::NoValidTicket.into()
        );
    }

    #[test]
    fn test_draw_request_is_exclusive() {
        let mut r = room(COST, 1, 3);
        let (b, _) = join(&mut r.game, 1);
        let account = Pubkey::new_unique();

        assert_eq!(
            r.game.request_draw(r.host, account, SLOT, T0).unwrap_err(),
            BingoError::GameNotRunning.into()
        );
        r.game.start_game(r.host, T0).unwrap();
        assert!(r.game.can_draw_number());

        assert_eq!(
            r.game.request_draw(b, account, SLOT, T0).unwrap_err(),
            BingoError::NotHost.into()
        );

        let id = r.game.request_draw(r.host, account, SLOT, T0 + 5).unwrap();
        assert_eq!(id, 1);
        assert_eq!(r.game.host_last_action_time, T0 + 5);
        assert!(!r.game.can_draw_number());
        assert_eq!(
            r.game.request_draw(r.host, account, SLOT, T0 + 6).unwrap_err(),
            BingoError::DrawAlreadyPending.into()
        );

        assert_eq!(
            r.game.fulfill_draw(id + 1, account, SLOT, 0).unwrap_err(),
            BingoError::UnknownDrawRequest.into()
        );
        assert_eq!(
            r.game.fulfill_draw(id, Pubkey::new_unique(), SLOT, 0).unwrap_err(),
            BingoError::UnknownDrawRequest.into()
        );

        let number = r.game.fulfill_draw(id, account, SLOT, 0).unwrap();
        assert_eq!(number, 1);
        assert_eq!(r.game.drawn_numbers, vec![1]);
        assert_eq!(r.game.draw_request, DrawRequest::Idle);
        assert_eq!(
            r.game.fulfill_draw(id, account, SLOT, 0).unwrap_err(),
            BingoError::UnknownDrawRequest.into()
        );

        assert_eq!(r.game.request_draw(r.host, account, SLOT, T0 + 7).unwrap(), 2);
    }

    #[test]
    fn test_recommitted_randomness_is_rejected() {
        let mut r = room(COST, 1, 1);
        r.game.start_game(r.host, T0).unwrap();
        let account = Pubkey::new_unique();
        let id = r.game.request_draw(r.host, account, SLOT, T0).unwrap();

        // same account committed again later
        for seed_slot in [SLOT + 1, SLOT - 1] {
            assert_eq!(
                r.game.require_pending(id, account, seed_slot).unwrap_err(),
                BingoError::RandomnessExpired.into()
            );
            assert_eq!(
                r.game.fulfill_draw(id, account, seed_slot, 7).unwrap_err(),
                BingoError::RandomnessExpired.into()
            );
        }
        assert!(r.game.drawn_numbers.is_empty());
        assert!(r.game.draw_request.is_pending());

        assert!(r.game.require_pending(id, account, SLOT).is_ok());
        assert_eq!(r.game.fulfill_draw(id, account, SLOT, 7).unwrap(), 8);
    }

    #[test]
    fn test_coordinator_check() {
        let r = room(COST, 1, 1);
        assert!(r.game.verify_coordinator(&r.game.coordinator).is_ok());
        assert_eq!(
            r.game.verify_coordinator(&Pubkey::new_unique()).unwrap_err(),
            BingoError::CoordinatorMismatch.into()
        );
    }

    #[test]
    fn test_seventy_five_draws_then_exhausted() {
        let mut r = room(COST, 1, 1);
        r.game.start_game(r.host, T0).unwrap();
        let account = Pubkey::new_unique();

        for i in 0..MAX_NUMBER as i64 {
            let id = r.game.request_draw(r.host, account, SLOT, T0 + i).unwrap();
            let word = (i as u128).wrapping_mul(0x2545_f491_4f6c_dd1d);
            r.game.fulfill_draw(id, account, SLOT, word).unwrap();
        }

        let mut sorted = r.game.drawn_numbers.clone();
        sorted.sort();
        assert_eq!(sorted, (1..=MAX_NUMBER).collect::<Vec<u8>>());
        assert_eq!(r.game.drawn_mask.count_ones(), MAX_NUMBER as u32);
        assert_eq!(r.game.numbers_left(), 0);
        assert!(!r.game.can_draw_number());
        assert_eq!(
            r.game.request_draw(r.host, account, SLOT, T0 + 100).unwrap_err(),
            BingoError::AllNumbersDrawn.into()
        );
    }

    #[test]
    fn test_mark_drawn_guards() {
        let mut r = room(COST, 1, 1);
        r.game.mark_drawn(10).unwrap();
        assert!(r.game.is_drawn(10));
        assert_eq!(
            r.game.mark_drawn(10).unwrap_err(),
            BingoError::NumberAlreadyDrawn.into()
        );
        for bad in [0, MAX_NUMBER + 1] {
            assert_eq!(
                r.game.mark_drawn(bad).unwrap_err(),
                BingoError::NumberOutOfRange.into()
            );
        }
        assert_eq!(r.game.total_numbers_drawn(), 1);
    }

    #[test]
    fn test_call_bingo_guards() {
        let mut r = room(COST, 1, 3);
        let (b, b_ticket) = join(&mut r.game, 1);

        assert_eq!(
            r.game.call_bingo(b, &b_ticket, T0).unwrap_err(),
            BingoError::GameNotStarted.into()
        );
        r.game.start_game(r.host, T0).unwrap();

        assert_eq!(
            r.game.call_bingo(b, &b_ticket, T0).unwrap_err(),
            BingoError::NoBingo.into()
        );
        let stranger = Pubkey::new_unique();
        assert_eq!(
            r.game.call_bingo(stranger, &b_ticket, T0).unwrap_err(),
            BingoError::NoValidTicket.into()
        );
        assert_eq!(r.game.phase, GamePhase::Running);
        assert!(r.game.winners.is_empty());
    }

    #[test]
    fn test_single_line_bingo() {
        let mut r = room(COST, 1, 3);
        let (b, b_ticket) = join(&mut r.game, 1);
        r.game.start_game(r.host, T0).unwrap();

        for &i in &[0usize, 6, 18, 24] {
            r.game.mark_drawn(b_ticket.card[i]).unwrap();
        }
        assert!(r.game.check_bingo(&b_ticket.card));
        assert!(r.game.call_bingo(b, &b_ticket, T0 + 30).unwrap());
        assert_eq!(r.game.phase, GamePhase::BingoFound);
        assert_eq!(r.game.bingo_found_time, T0 + 30);
        assert!(!r.game.can_draw_number());
    }

    #[test]
    fn test_three_winners_split_the_pool() {
        let mut r = room(COST, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);
        let (c, mut c_ticket) = join(&mut r.game, 2);
        r.game.start_game(r.host, T0).unwrap();
        draw_all(&mut r.game);

        let found = T0 + 10;
        assert!(r.game.call_bingo(r.host, &r.host_ticket, found).unwrap());
        assert!(!r.game.call_bingo(b, &b_ticket, found + 1).unwrap());
        assert!(!r.game.call_bingo(c, &c_ticket, found + 2).unwrap());
        assert_eq!(r.game.winner_count(), 3);
        assert_eq!(r.game.phase, GamePhase::BingoFound);
        assert_eq!(r.game.bingo_found_time, found);

        assert_eq!(
            r.game.call_bingo(b, &b_ticket, found + 3).unwrap_err(),
            BingoError::AlreadyWon.into()
        );
        assert_eq!(
            r.game.withdraw_winnings(b, &mut b_ticket, found + 3).unwrap_err(),
            BingoError::WithdrawNotOpen.into()
        );

        let open = found + DEFAULT_BINGO_CALL_PERIOD;
        let host = r.host;
        assert_eq!(r.game.withdraw_winnings(host, &mut r.host_ticket, open).unwrap(), 200);
        assert_eq!(r.game.withdraw_winnings(b, &mut b_ticket, open).unwrap(), 200);
        assert_eq!(r.game.withdraw_winnings(c, &mut c_ticket, open).unwrap(), 200);
        assert_eq!(r.game.paid_out_total, 600);

        for (player, ticket) in [(host, &mut r.host_ticket), (b, &mut b_ticket), (c, &mut c_ticket)] {
            assert!(ticket.paid_out);
            assert_eq!(
                r.game.withdraw_winnings(player, ticket, open + 1).unwrap_err(),
                BingoError::AlreadyWithdrawn.into()
            );
        }
        assert_eq!(r.game.paid_out_total, 600);
    }

    #[test]
    fn test_two_winners_of_three_players() {
        let mut r = room(COST, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);
        let (c, mut c_ticket) = join(&mut r.game, 2);
        r.game.start_game(r.host, T0).unwrap();
        draw_all(&mut r.game);

        r.game.call_bingo(b, &b_ticket, T0).unwrap();
        r.game.call_bingo(c, &c_ticket, T0).unwrap();

        let open = T0 + DEFAULT_BINGO_CALL_PERIOD;
        assert_eq!(
            r.game.withdraw_winnings(r.host, &mut r.host_ticket, open).unwrap_err(),
            BingoError::NotAWinner.into()
        );
        let total = r.game.withdraw_winnings(b, &mut b_ticket, open).unwrap()
            + r.game.withdraw_winnings(c, &mut c_ticket, open).unwrap();
        assert_eq!(total, 600);
        assert!(total <= COST * r.game.joined_players.len() as u64);
    }

    #[test]
    fn test_remainder_goes_to_last_withdrawer() {
        let mut r = room(101, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);
        let (c, mut c_ticket) = join(&mut r.game, 2);
        r.game.start_game(r.host, T0).unwrap();
        draw_all(&mut r.game);

        r.game.call_bingo(c, &c_ticket, T0).unwrap();
        r.game.call_bingo(b, &b_ticket, T0).unwrap();

        let open = T0 + DEFAULT_BINGO_CALL_PERIOD;
        assert_eq!(r.game.withdraw_winnings(b, &mut b_ticket, open).unwrap(), 151);
        assert_eq!(r.game.withdraw_winnings(c, &mut c_ticket, open).unwrap(), 152);
        assert_eq!(r.game.paid_out_total, r.game.prize_pool);
    }

    #[test]
    fn test_call_period_closes_late_calls() {
        let mut r = room(COST, 1, 2);
        let (b, b_ticket) = join(&mut r.game, 1);
        r.game.start_game(r.host, T0).unwrap();
        draw_all(&mut r.game);

        r.game.call_bingo(r.host, &r.host_ticket, T0).unwrap();
        let closed = T0 + DEFAULT_BINGO_CALL_PERIOD;
        assert_eq!(
            r.game.call_bingo(b, &b_ticket, closed).unwrap_err(),
            BingoError::CallPeriodEnded.into()
        );
        assert_eq!(r.game.winner_count(), 1);
    }

    #[test]
    fn test_withdraw_requires_bingo_found() {
        let mut r = room(COST, 1, 1);
        r.game.start_game(r.host, T0).unwrap();
        let host = r.host;
        assert_eq!(
            r.game.withdraw_winnings(host, &mut r.host_ticket, T0).unwrap_err(),
            BingoError::GameNotFinished.into()
        );
    }

    #[test]
    fn test_fulfill_after_bingo_is_rejected() {
        let mut r = room(COST, 1, 1);
        r.game.start_game(r.host, T0).unwrap();
        let account = Pubkey::new_unique();
        let id = r.game.request_draw(r.host, account, SLOT, T0).unwrap();
        draw_all(&mut r.game);
        r.game.call_bingo(r.host, &r.host_ticket, T0).unwrap();

        assert_eq!(
            r.game.fulfill_draw(id, account, SLOT, 3).unwrap_err(),
            BingoError::GameNotRunning.into()
        );
        assert_eq!(r.game.total_numbers_drawn(), MAX_NUMBER);
    }

    #[test]
    fn test_bingo_cards_follow_join_order() {
        let mut r = room(COST, 1, 3);
        let (b, mut b_ticket) = join(&mut r.game, 1);
        let (_, c_ticket) = join(&mut r.game, 2);

        let cards = r.game.bingo_cards([&c_ticket, &b_ticket, &r.host_ticket], 0, CARDS_PER_PAGE);
        assert_eq!(cards, vec![r.host_ticket.card, b_ticket.card, c_ticket.card]);

        r.game.leave_game(&mut b_ticket, b).unwrap();
        let cards = r.game.bingo_cards([&c_ticket, &b_ticket, &r.host_ticket], 0, CARDS_PER_PAGE);
        assert_eq!(cards, vec![r.host_ticket.card, c_ticket.card]);
    }

    #[test]
    fn test_bingo_cards_are_paged_within_return_data() {
        let mut r = room(COST, 1, MAX_PLAYERS);
        let mut tickets = vec![r.host_ticket.clone()];
        for n in 1..MAX_PLAYERS {
            tickets.push(join(&mut r.game, n).1);
        }
        assert_eq!(r.game.joined_players.len(), MAX_PLAYERS as usize);

        let first = r.game.bingo_cards(&tickets, 0, usize::MAX);
        assert_eq!(first.len(), CARDS_PER_PAGE);
        assert_eq!(first[0], r.host_ticket.card);
        let bytes = first.try_to_vec().unwrap();
        assert!(bytes.len() <= solana_program::program::MAX_RETURN_DATA);

        let mut all = Vec::new();
        let mut offset = 0;
        loop {
            let page = r.game.bingo_cards(&tickets, offset, CARDS_PER_PAGE);
            if page.is_empty() {
                break;
            }
            offset += page.len();
            all.extend(page);
        }
        let expected: Vec<Card> = tickets.iter().map(|ticket| ticket.card).collect();
        assert_eq!(all, expected);
        assert!(r.game.bingo_cards(&tickets, MAX_PLAYERS as usize, CARDS_PER_PAGE).is_empty());
    }
}
