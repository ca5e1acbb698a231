// Lock / Unlock Pool Instructions

use anchor_lang::prelude::*;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct SetLock<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [
            AMM_CONFIG_SEED,
            pool_config.token_a_mint.as_ref(),
            pool_config.token_b_mint.as_ref(),
        ],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Account<'info, PoolConfig>,
}

impl<'info> SetLock<'info> {
    pub fn set_lock(&mut self, locked: bool) -> Result<()> {
        self.pool_config.assert_is_authority(&self.authority.key())?;
        self.pool_config.locked = locked;

        msg!("Pool {} locked: {}", self.pool_config.key(), locked);
        Ok(())
    }
}
