// Fixed-Rate Vault Constants

pub const VAULT_SEED: &[u8] = b"vault";
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const POOL_SEED: &[u8] = b"pool";
pub const CLAIM_MINT_SEED: &[u8] = b"claim_mint";

pub const MAX_POOLS: usize = 8;
pub const BASIS_POINTS: u64 = 10_000;
pub const MAX_FEE_BPS: u16 = 1_000; // 10% of gains
pub const MAX_FIXED_RATE_BPS: u16 = 1_000; // 10% per deployment window

// Venue calls expire this many seconds after the current block time
pub const VENUE_DEADLINE_SECONDS: i64 = 300;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
