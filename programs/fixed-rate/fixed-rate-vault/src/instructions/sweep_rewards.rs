// Sweep Rewards Instruction
//
// Farm rewards accrue to token accounts owned by the vault authority. Once
// settled, the operator sweeps them to the owner of the fee recipient.
// Reserves are never sweepable: the base mint, every registered pool token
// and every venue LP mint are rejected.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::VaultError, helpers::*, state::*};

#[derive(Accounts)]
pub struct SweepRewards<'info> {
    pub operator: Signer<'info>,

    #[account(
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, vault.key().as_ref()],
        bump = vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        token::authority = vault_authority,
    )]
    pub reward_account: Box<Account<'info, TokenAccount>>,

    #[account(address = vault.fee_recipient @ VaultError::InvalidFee)]
    pub fee_recipient: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = reward_account.mint,
        constraint = destination.owner == fee_recipient.owner @ VaultError::InvalidSweepDestination,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
}

impl<'info> SweepRewards<'info> {
    pub fn sweep_rewards(&mut self) -> Result<()> {
        self.vault.require_phase(Operation::SweepRewards)?;
        self.vault.assert_operator(&self.operator.key())?;

        let mint = self.reward_account.mint;
        let amount = self.reward_account.amount;
        self.vault.check_sweep(&mint, amount)?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        transfer_from_reserve(
            amount,
            &self.token_program.to_account_info(),
            &self.reward_account.to_account_info(),
            &self.destination.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        msg!("Swept {} of reward mint {}", amount, mint);
        Ok(())
    }
}
