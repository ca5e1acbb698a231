// Deposit Base Instructions
//
// deposit_base: native SOL, wrapped into the reserve on the way in
// deposit_wrapped_base: already-wrapped base tokens
//
// Both mint vault claim shares 1:1 and are capped by max_base.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{spl_token::native_mint, Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::*, events::Deposit, helpers::*, state::*};

#[derive(Accounts)]
pub struct DepositBase<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
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
        address = vault.claim_mint,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = vault.base_reserve,
    )]
    pub base_reserve: Box<Account<'info, TokenAccount>>,

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

impl<'info> DepositBase<'info> {
    pub fn deposit_base(&mut self, amount: u64) -> Result<()> {
        require_keys_eq!(self.vault.base_mint, native_mint::ID, VaultError::InvalidBaseMint);

        self.vault.record_deposit(amount)?;

        wrap_native(
            amount,
            &self.system_program.to_account_info(),
            &self.token_program.to_account_info(),
            &self.depositor.to_account_info(),
            &self.base_reserve.to_account_info(),
        )?;

        self.mint_shares(amount)?;

        emit!(Deposit {
            vault: self.vault.key(),
            claim_mint: self.claim_mint.key(),
            who: self.depositor.key(),
            amount,
        });

        msg!("Deposited {} lamports (wrapped)", amount);

        Ok(())
    }

    fn mint_shares(&self, amount: u64) -> Result<()> {
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
        )
    }
}

#[derive(Accounts)]
pub struct DepositWrappedBase<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

    #[account(
        mut,
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

    #[account(address = vault.base_mint)]
    pub base_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = vault.claim_mint,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = vault.base_reserve,
    )]
    pub base_reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = base_mint,
        token::authority = depositor,
    )]
    pub depositor_base: Box<Account<'info, TokenAccount>>,

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

impl<'info> DepositWrappedBase<'info> {
    pub fn deposit_wrapped_base(&mut self, amount: u64) -> Result<()> {
        self.vault.record_deposit(amount)?;

        transfer_tokens(
            amount,
            &self.token_program.to_account_info(),
            &self.depositor_base.to_account_info(),
            &self.base_reserve.to_account_info(),
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

        msg!("Deposited {} base", amount);

        Ok(())
    }
}
