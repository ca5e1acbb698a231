// Configuration Updates
//
// update_max_base: operator, Deposit phase only
// update_fee: operator, any phase until the vault migrates
// update_migrator: the pool's current migrator

use anchor_lang::prelude::*;
use anchor_spl::token::TokenAccount;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct UpdateMaxBase<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,
}

impl<'info> UpdateMaxBase<'info> {
    pub fn update_max_base(&mut self, max_base: u64) -> Result<()> {
        self.vault.require_phase(Operation::UpdateCap)?;
        self.vault.assert_operator(&self.operator.key())?;

        self.vault.set_max_base(max_base)?;

        msg!("Max base set to {}", max_base);
        Ok(())
    }
}

#[derive(Accounts)]
pub struct UpdateFee<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(token::mint = vault.base_mint)]
    pub fee_recipient: Box<Account<'info, TokenAccount>>,
}

impl<'info> UpdateFee<'info> {
    pub fn update_fee(&mut self, fee_bps: u16) -> Result<()> {
        self.vault.assert_operator(&self.operator.key())?;
        self.vault.assert_not_migrated()?;

        self.vault.set_fee(fee_bps, self.fee_recipient.key())?;

        msg!("Fee set to {} bps, paid to {}", fee_bps, self.fee_recipient.key());
        Ok(())
    }
}

#[derive(Accounts)]
pub struct UpdateMigrator<'info> {
    pub migrator: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        has_one = vault,
        seeds = [POOL_SEED, vault.key().as_ref(), pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,
}

impl<'info> UpdateMigrator<'info> {
    pub fn update_migrator(&mut self, new_migrator: Pubkey) -> Result<()> {
        self.pool
            .set_migrator(&self.vault, &self.migrator.key(), new_migrator)?;

        msg!("Pool {} migrator is now {}", self.pool.key(), new_migrator);
        Ok(())
    }
}
