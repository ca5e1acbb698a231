use anchor_lang::prelude::*;
use fixed_rate_vault::state::RoleBook;

use crate::{
    constants::{MAX_LEDGER_ESCROWS, MAX_LEDGER_POOLS},
    errors::LedgerError,
};

// Points at one vault and the pools whose settled liquidity it takes over
#[account]
#[derive(InitSpace, Default, Debug)]
pub struct Ledger {
    pub guardian: Pubkey,
    pub vault: Pubkey,
    pub pool_count: u8,
    pub pools: [Pubkey; MAX_LEDGER_POOLS],
    // Token accounts backing an opened claim pool
    pub escrow_count: u8,
    pub escrows: [Pubkey; MAX_LEDGER_ESCROWS],
    pub bump: u8,
    pub authority_bump: u8,
}

impl Ledger {
    pub fn roles(&self) -> RoleBook {
        RoleBook {
            operator: None,
            migrator: None,
            guardian: Some(self.guardian),
        }
    }

    pub fn assert_guardian(&self, caller: &Pubkey) -> Result<()> {
        require!(self.roles().can_rescue(caller), LedgerError::OnlyGuardian);
        Ok(())
    }

    pub fn set_pools(&mut self, pools: &[Pubkey]) -> Result<()> {
        require!(pools.len() <= MAX_LEDGER_POOLS, LedgerError::TooManyPools);

        for (i, pool) in pools.iter().enumerate() {
            require!(*pool != Pubkey::default(), LedgerError::SourceNotListed);
            require!(!pools[..i].contains(pool), LedgerError::DuplicatePool);
            self.pools[i] = *pool;
        }
        self.pool_count = pools.len() as u8;
        Ok(())
    }

    pub fn lists_pool(&self, pool: &Pubkey) -> bool {
        self.pools[..self.pool_count as usize].contains(pool)
    }

    pub fn register_escrow(&mut self, escrow: Pubkey) -> Result<()> {
        if self.is_escrow(&escrow) {
            return Ok(());
        }

        let slot = self.escrow_count as usize;
        require!(slot < MAX_LEDGER_ESCROWS, LedgerError::TooManyPools);

        self.escrows[slot] = escrow;
        self.escrow_count += 1;
        Ok(())
    }

    pub fn is_escrow(&self, account: &Pubkey) -> bool {
        self.escrows[..self.escrow_count as usize].contains(account)
    }

    // A claim pool's escrow only moves together with that claim pool
    pub fn check_rescue(&self, caller: &Pubkey, source: &Pubkey, claim_pool_escrow: Option<Pubkey>) -> Result<()> {
        self.assert_guardian(caller)?;

        match claim_pool_escrow {
            Some(escrow) => require_keys_eq!(escrow, *source, LedgerError::NothingToRescue),
            None => require!(!self.is_escrow(source), LedgerError::ClaimPoolRequired),
        }
        Ok(())
    }
}
