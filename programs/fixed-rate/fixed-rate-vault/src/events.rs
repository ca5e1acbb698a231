use anchor_lang::prelude::*;

use crate::state::Phase;

#[event]
pub struct Deposit {
    pub vault: Pubkey,
    pub claim_mint: Pubkey,
    pub who: Pubkey,
    pub amount: u64,
}

#[event]
pub struct Withdraw {
    pub vault: Pubkey,
    pub claim_mint: Pubkey,
    pub who: Pubkey,
    pub amount: u64,
    pub shares_burned: u64,
    pub fee: u64,
}

#[event]
pub struct Migration {
    pub vault: Pubkey,
    pub source: Pubkey,
    pub destination: Pubkey,
    pub amount: u64,
}

#[event]
pub struct LiquidityDeployed {
    pub pool: Pubkey,
    pub base_amount: u64,
    pub token_amount: u64,
    pub lp_minted: u64,
}

#[event]
pub struct LiquidityReturned {
    pub pool: Pubkey,
    pub base_returned: u64,
    pub token_retained: u64,
}

#[event]
pub struct PhaseAdvanced {
    pub vault: Pubkey,
    pub phase: Phase,
    pub timestamp: i64,
}

#[event]
pub struct PoolRegistered {
    pub vault: Pubkey,
    pub pool: Pubkey,
    pub token_mint: Pubkey,
    pub fixed_rate_bps: u16,
}
