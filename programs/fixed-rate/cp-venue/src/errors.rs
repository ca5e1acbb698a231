use anchor_lang::prelude::*;

#[error_code]
pub enum VenueError {
    #[msg("Fee basis points cannot exceed maximum allowed (1000 = 10%)")]
    FeeTooHigh,

    #[msg("Token mints must be different")]
    IdenticalTokenMints,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Insufficient liquidity in pool")]
    InsufficientLiquidity,

    #[msg("Deposited amount exceeds maximum allowed")]
    ExcessiveDepositAmount,

    #[msg("Withdrawn amount below minimum required")]
    InsufficientWithdrawAmount,

    #[msg("Swap output is below minimum required")]
    SlippageExceeded,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Division by zero attempted")]
    DivisionByZero,

    #[msg("Pool is currently locked")]
    PoolLocked,

    #[msg("Only the pool authority can perform this action")]
    UnauthorizedAccess,

    #[msg("Transaction deadline has expired")]
    TransactionExpired,

    #[msg("Expiration timestamp is too far in the future")]
    ExpirationTooFar,
}
