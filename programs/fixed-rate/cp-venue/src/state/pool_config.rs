// Pool Configuration State
//
// Layout is read by the vault's venue adapter; field order is fixed.

use anchor_lang::prelude::*;

use crate::errors::VenueError;

#[account]
#[derive(InitSpace)]
pub struct PoolConfig {
    pub authority: Pubkey,     // Can lock/unlock pool
    pub token_a_mint: Pubkey,
    pub token_b_mint: Pubkey,
    pub lp_token_mint: Pubkey,
    pub fee_basis_points: u16, // Swap fee (e.g., 30 = 0.30%)
    pub locked: bool,
    pub config_bump: u8,
    pub authority_bump: u8,
    pub lp_mint_bump: u8,
}

impl PoolConfig {
    pub fn assert_not_locked(&self) -> Result<()> {
        require!(!self.locked, VenueError::PoolLocked);
        Ok(())
    }

    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        require!(self.authority == *caller, VenueError::UnauthorizedAccess);
        Ok(())
    }
}
