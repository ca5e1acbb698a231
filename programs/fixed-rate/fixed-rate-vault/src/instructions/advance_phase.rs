// Phase Transitions
//
// begin_deployment: Deposit -> Deployed
// begin_settlement: Deployed -> Settlement (every position unwound)

use anchor_lang::prelude::*;

use crate::{constants::*, events::PhaseAdvanced, state::*};

#[derive(Accounts)]
pub struct AdvancePhase<'info> {
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,
}

impl<'info> AdvancePhase<'info> {
    pub fn advance_phase(&mut self, operation: Operation) -> Result<()> {
        self.vault.assert_operator(&self.operator.key())?;

        let phase = self.vault.advance(operation)?;
        let timestamp = Clock::get()?.unix_timestamp;

        emit!(PhaseAdvanced {
            vault: self.vault.key(),
            phase,
            timestamp,
        });

        msg!("Vault {} entered {:?} phase", self.vault.key(), phase);

        Ok(())
    }
}
