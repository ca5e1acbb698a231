use anchor_lang::prelude::*;

#[error_code]
pub enum LedgerError {
    #[msg("ONLY GUARDIAN")]
    OnlyGuardian,

    #[msg("NO LIQUIDITY")]
    NoLiquidity,

    #[msg("Source is not listed on this ledger")]
    SourceNotListed,

    #[msg("Source has not migrated its liquidity to this ledger")]
    SourceNotMigrated,

    #[msg("Claim pool belongs to the other side")]
    WrongSourceKind,

    #[msg("Nothing to rescue")]
    NothingToRescue,

    #[msg("Escrow backs a claim pool: pass it to rescue")]
    ClaimPoolRequired,

    #[msg("Escrow holds less than the source migrated")]
    EscrowShortfall,

    #[msg("Too many pools")]
    TooManyPools,

    #[msg("Pool listed twice")]
    DuplicatePool,

    #[msg("Math overflow")]
    Overflow,

    #[msg("Math underflow")]
    Underflow,
}
