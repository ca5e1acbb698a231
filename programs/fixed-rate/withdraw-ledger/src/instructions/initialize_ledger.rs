// Initialize Ledger Instruction
//
// The signer becomes the guardian. The ledger authority PDA is the successor
// address the vault and its pools migrate their reserves to.

use anchor_lang::prelude::*;
use fixed_rate_vault::state::Vault;

use crate::{constants::*, state::*};

#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    #[account(mut)]
    pub guardian: Signer<'info>,

    pub vault: Box<Account<'info, Vault>>,

    #[account(
        init,
        payer = guardian,
        space = ANCHOR_DISCRIMINATOR + Ledger::INIT_SPACE,
        seeds = [LEDGER_SEED, guardian.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: PDA that receives migrated reserves
    #[account(
        seeds = [LEDGER_AUTHORITY_SEED, ledger.key().as_ref()],
        bump
    )]
    pub ledger_authority: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializeLedger<'info> {
    pub fn initialize_ledger(&mut self, pools: Vec<Pubkey>, bumps: &InitializeLedgerBumps) -> Result<()> {
        self.ledger.set_inner(Ledger {
            guardian: self.guardian.key(),
            vault: self.vault.key(),
            bump: bumps.ledger,
            authority_bump: bumps.ledger_authority,
            ..Ledger::default()
        });

        self.ledger.set_pools(&pools)?;

        msg!(
            "Ledger for vault {} with {} pools, migrate to {}",
            self.vault.key(),
            pools.len(),
            self.ledger_authority.key()
        );

        Ok(())
    }
}
