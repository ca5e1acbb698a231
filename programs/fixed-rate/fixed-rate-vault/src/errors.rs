use anchor_lang::prelude::*;

#[error_code]
pub enum VaultError {
    // Phase violations
    #[msg("Cannot execute this function during current phase")]
    PhaseViolation,

    #[msg("Liquidity positions are still open")]
    PositionsStillOpen,

    // Authorization violations
    #[msg("Only the vault operator can perform this action")]
    OnlyOperator,

    #[msg("Only migrator")]
    OnlyMigrator,

    #[msg("Pool is not registered with this vault")]
    PoolNotRegistered,

    // Accounting violations
    #[msg("Deposit amount cannot be zero")]
    ZeroDepositAmount,

    #[msg("Max base cap has been hit")]
    MaxBaseExceeded,

    #[msg("No balance to withdraw")]
    NoBalanceToWithdraw,

    #[msg("Withdraw amount exceeds balance")]
    ExceedsEntitlement,

    #[msg("Base deployment exceeds total deposits")]
    DeploymentExceedsDeposits,

    #[msg("Pool position is not idle")]
    PositionNotIdle,

    #[msg("Pool position is not paired")]
    PositionNotPaired,

    #[msg("Liquidity already migrated")]
    AlreadyMigrated,

    #[msg("Successor does not accept migrations from this vault")]
    InvalidSuccessor,

    #[msg("Claim share supply does not match the ledger")]
    ClaimSupplyMismatch,

    #[msg("Pool already registered")]
    PoolAlreadyRegistered,

    #[msg("Pool has deposits and cannot be reconfigured")]
    PoolHasDeposits,

    #[msg("Pool registry is full")]
    RegistryFull,

    #[msg("Nothing to sweep")]
    NothingToSweep,

    #[msg("Rewards can only be swept to the fee recipient")]
    InvalidSweepDestination,

    // Slippage and venue violations
    #[msg("Venue returned less than the requested minimum")]
    SlippageExceeded,

    #[msg("Venue account does not match the expected layout")]
    InvalidVenueAccount,

    #[msg("Venue pool does not trade this pair")]
    VenuePairMismatch,

    #[msg("Reward sink accounts are missing or invalid")]
    InvalidRewardAccounts,

    // Configuration violations
    #[msg("Invalid fixed rate")]
    InvalidFixedRate,

    #[msg("Invalid fee amount")]
    InvalidFee,

    #[msg("Invalid base mint")]
    InvalidBaseMint,

    #[msg("invalid pid mapping")]
    InvalidPidMapping,

    // Arithmetic
    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,
}
