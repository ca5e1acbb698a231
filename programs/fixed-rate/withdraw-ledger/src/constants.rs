// Withdraw Ledger Constants

pub const LEDGER_SEED: &[u8] = b"ledger";
pub const LEDGER_AUTHORITY_SEED: &[u8] = b"ledger_authority";
pub const CLAIM_POOL_SEED: &[u8] = b"claim_pool";

pub const MAX_LEDGER_POOLS: usize = 8;
// One escrow for the vault plus one per listed pool
pub const MAX_LEDGER_ESCROWS: usize = MAX_LEDGER_POOLS + 1;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
