// Withdraw Instructions
//
// Settlement phase only. Holders redeem claim shares for their proportional
// slice of the reserve, computed on pre-burn totals. amount = 0 exits fully.
//
// withdraw_base: vault reserve, protocol fee charged on the gain only
// withdraw_token: pool reserve, no fee
//
// Base is paid out wrapped; holders unwrap by closing their wSOL account.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VaultError, events::Withdraw, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawBase<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

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
        token::mint = claim_mint,
        token::authority = holder,
    )]
    pub holder_claim: Box<Account<'info, TokenAccount>>,

    // wSOL ATA for a native-mint vault
    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = base_mint,
        associated_token::authority = holder,
    )]
    pub holder_base: Box<Account<'info, TokenAccount>>,

    // Required when the vault charges a fee
    #[account(
        mut,
        address = vault.fee_recipient @ VaultError::InvalidFee,
    )]
    pub fee_recipient: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawBase<'info> {
    pub fn withdraw_base(&mut self, amount: u64) -> Result<()> {
        require_eq!(
            self.claim_mint.supply,
            self.vault.total_claim_shares,
            VaultError::ClaimSupplyMismatch
        );

        let redemption = self.vault.plan_withdrawal(
            self.holder_claim.amount,
            self.base_reserve.amount,
            amount,
        )?;

        // Effects before the outbound transfers
        self.vault.record_withdrawal(&redemption)?;

        burn_claim_shares(
            redemption.shares_burned,
            &self.token_program.to_account_info(),
            &self.claim_mint.to_account_info(),
            &self.holder_claim.to_account_info(),
            &self.holder.to_account_info(),
        )?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        transfer_from_reserve(
            redemption.net(),
            &self.token_program.to_account_info(),
            &self.base_reserve.to_account_info(),
            &self.holder_base.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        if redemption.fee > 0 {
            let fee_recipient = self
                .fee_recipient
                .as_ref()
                .ok_or(VaultError::InvalidFee)?;

            transfer_from_reserve(
                redemption.fee,
                &self.token_program.to_account_info(),
                &self.base_reserve.to_account_info(),
                &fee_recipient.to_account_info(),
                &self.vault_authority.to_account_info(),
                authority_seeds,
            )?;
        }

        emit!(Withdraw {
            vault: self.vault.key(),
            claim_mint: self.claim_mint.key(),
            who: self.holder.key(),
            amount: redemption.net(),
            shares_burned: redemption.shares_burned,
            fee: redemption.fee,
        });

        msg!(
            "Withdrew {} base for {} shares (fee {})",
            redemption.net(),
            redemption.shares_burned,
            redemption.fee
        );

        Ok(())
    }
}

#[derive(Accounts)]
pub struct WithdrawToken<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

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
        token::mint = claim_mint,
        token::authority = holder,
    )]
    pub holder_claim: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = token_mint,
        associated_token::authority = holder,
    )]
    pub holder_token: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawToken<'info> {
    pub fn withdraw_token(&mut self, amount: u64) -> Result<()> {
        require_eq!(
            self.claim_mint.supply,
            self.pool.total_claim_shares,
            VaultError::ClaimSupplyMismatch
        );

        let redemption = self.pool.plan_withdrawal(
            &self.vault,
            self.holder_claim.amount,
            self.token_reserve.amount,
            amount,
        )?;

        self.pool.record_withdrawal(&redemption)?;

        burn_claim_shares(
            redemption.shares_burned,
            &self.token_program.to_account_info(),
            &self.claim_mint.to_account_info(),
            &self.holder_claim.to_account_info(),
            &self.holder.to_account_info(),
        )?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        transfer_from_reserve(
            redemption.amount,
            &self.token_program.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.holder_token.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        emit!(Withdraw {
            vault: self.vault.key(),
            claim_mint: self.claim_mint.key(),
            who: self.holder.key(),
            amount: redemption.amount,
            shares_burned: redemption.shares_burned,
            fee: 0,
        });

        msg!(
            "Withdrew {} tokens for {} shares from pool {}",
            redemption.amount,
            redemption.shares_burned,
            self.pool.key()
        );

        Ok(())
    }
}
