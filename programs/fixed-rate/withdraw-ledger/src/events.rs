use anchor_lang::prelude::*;

#[event]
pub struct ClaimsOpened {
    pub ledger: Pubkey,
    pub claim_pool: Pubkey,
    pub source: Pubkey,
    pub snapshot_balance: u64,
    pub snapshot_shares: u64,
}

#[event]
pub struct Redemption {
    pub claim_pool: Pubkey,
    pub who: Pubkey,
    pub shares: u64,
    pub amount: u64,
}

#[event]
pub struct Rescue {
    pub ledger: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}
