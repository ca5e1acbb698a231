// Deposit Token Instruction
//
// Pulls the managed token into the pool reserve and mints pool claim
// shares 1:1. Deposit phase only.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::Deposit, helpers::*, state::*};

#[derive(Accounts)]
pub struct DepositToken<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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
        has_one = vault,
        seeds = [POOL_SEED, vault.key().as_ref(), pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(address = pool.token_mint)]
    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = pool.claim_mint,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = pool.token_reserve,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_mint,
        token::authority = depositor,
    )]
    pub depositor_token: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = claim_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_claim: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositToken<'info> {
    pub fn deposit_token(&mut self, amount: u64) -> Result<()> {
        self.vault.assert_registered(&self.pool.key())?;
        self.pool.record_deposit(&self.vault, amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.depositor_token.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.depositor.to_account_info(),
        )?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        mint_claim_shares(
            amount,
            &self.token_program.to_account_info(),
            &self.claim_mint.to_account_info(),
            &self.depositor_claim.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        emit!(Deposit {
            vault: self.vault.key(),
            claim_mint: self.claim_mint.key(),
            who: self.depositor.key(),
            amount,
        });

        msg!("Deposited {} tokens into pool {}", amount, self.pool.key());

        Ok(())
    }
}
