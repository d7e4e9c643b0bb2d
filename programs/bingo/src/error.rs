use anchor_lang::prelude::*;

#[error_code]
pub enum BingoError {
    // --- registry ---
    #[msg("Only contract owner can call this function")]
    NotRegistryOwner,
    #[msg("Player bounds must satisfy 1 <= min <= max <= 100")]
    InvalidPlayerBounds,
    #[msg("Minimum ticket pool must exceed the protocol fee")]
    FeeExceedsPool,
    #[msg("Host deadline and bingo call period must be positive")]
    InvalidPeriod,
    #[msg("Nothing to withdraw")]
    NothingToWithdraw,

    // --- membership ---
    #[msg("The game has already started")]
    GameAlreadyStarted,
    #[msg("This address already owns a ticket")]
    AlreadyHasTicket,
    #[msg("The game is full")]
    GameFull,
    #[msg("Insufficient amount sent")]
    IncorrectPayment,
    #[msg("You are not a player")]
    NotAPlayer,
    #[msg("Not enough players have joined")]
    NotEnoughPlayers,
    #[msg("Card generation ran out of entropy")]
    CardGenerationFailed,

    // --- host ---
    #[msg("Only game host can call this function")]
    NotHost,
    #[msg("Host cannot be claimed")]
    HostClaimRejected,
    #[msg("Previous host ticket account is missing")]
    MissingHostTicket,

    // --- drawing ---
    #[msg("The game is not running")]
    GameNotRunning,
    #[msg("A number draw is already pending")]
    DrawAlreadyPending,
    #[msg("All of the numbers have been drawn")]
    AllNumbersDrawn,
    #[msg("Randomness account is not owned by the coordinator")]
    CoordinatorMismatch,
    #[msg("No pending draw matches this request")]
    UnknownDrawRequest,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness was committed again after the draw was requested")]
    RandomnessExpired,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
    #[msg("Randomness account could not be parsed")]
    InvalidRandomnessAccount,
    #[msg("Slot hash not found")]
    SlotHashNotFound,
    #[msg("Number must be between 1 and 75")]
    NumberOutOfRange,
    #[msg("Number has already been drawn")]
    NumberAlreadyDrawn,

    // --- bingo ---
    #[msg("The game has not started yet")]
    GameNotStarted,
    #[msg("You don't have a valid ticket")]
    NoValidTicket,
    #[msg("You have already won")]
    AlreadyWon,
    #[msg("Bingo call period has ended")]
    CallPeriodEnded,
    #[msg("There was no bingo :(")]
    NoBingo,

    // --- payout ---
    #[msg("The game has not ended yet")]
    GameNotFinished,
    #[msg("You are not a winner")]
    NotAWinner,
    #[msg("Withdraw period has not started yet")]
    WithdrawNotOpen,
    #[msg("You have already withdrawn")]
    AlreadyWithdrawn,
    #[msg("Math overflow")]
    MathOverflow,
}
