// Per-User Position Migration
//
// Same redemption as a withdrawal, but the payout moves reserve to reserve
// into a successor cycle whose predecessor is this vault, and the holder is
// minted claim shares there. The holder never touches the underlying asset.
//
// The successor must still be taking deposits; its cap applies.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VaultError, events::Migration, helpers::*, state::*};

#[derive(Accounts)]
pub struct MigrateBasePosition<'info> {
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

    #[account(
        mut,
        address = vault.fee_recipient @ VaultError::InvalidFee,
    )]
    pub fee_recipient: Option<Box<Account<'info, TokenAccount>>>,

    #[account(
        mut,
        seeds = [VAULT_SEED, successor_vault.operator.as_ref(), &successor_vault.vault_id.to_le_bytes()],
        bump = successor_vault.bump,
        constraint = successor_vault.key() != vault.key() @ VaultError::InvalidSuccessor,
        constraint = successor_vault.base_mint == vault.base_mint @ VaultError::InvalidSuccessor,
    )]
    pub successor_vault: Box<Account<'info, Vault>>,

    /// CHECK: successor's PDA signer
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, successor_vault.key().as_ref()],
        bump = successor_vault.authority_bump,
    )]
    pub successor_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = successor_vault.claim_mint,
    )]
    pub successor_claim_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = successor_vault.base_reserve,
    )]
    pub successor_reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = successor_claim_mint,
        associated_token::authority = holder,
    )]
    pub holder_successor_claim: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MigrateBasePosition<'info> {
    pub fn migrate_base_position(&mut self, amount: u64) -> Result<()> {
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
        let moved = redemption.net();

        self.vault.record_withdrawal(&redemption)?;
        self.successor_vault
            .accept_migrated_position(&self.vault.key(), moved)?;

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
            moved,
            &self.token_program.to_account_info(),
            &self.base_reserve.to_account_info(),
            &self.successor_reserve.to_account_info(),
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

        let successor_key = self.successor_vault.key();
        let successor_seeds = &[
            VAULT_AUTHORITY_SEED,
            successor_key.as_ref(),
            &[self.successor_vault.authority_bump],
        ];

        mint_claim_shares(
            moved,
            &self.token_program.to_account_info(),
            &self.successor_claim_mint.to_account_info(),
            &self.holder_successor_claim.to_account_info(),
            &self.successor_authority.to_account_info(),
            successor_seeds,
        )?;

        emit!(Migration {
            vault: self.vault.key(),
            source: self.holder.key(),
            destination: successor_key,
            amount: moved,
        });

        msg!("Migrated {} base into vault {}", moved, successor_key);

        Ok(())
    }
}

#[derive(Accounts)]
pub struct MigrateTokenPosition<'info> {
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
        seeds = [VAULT_SEED, successor_vault.operator.as_ref(), &successor_vault.vault_id.to_le_bytes()],
        bump = successor_vault.bump,
        constraint = successor_vault.key() != vault.key() @ VaultError::InvalidSuccessor,
    )]
    pub successor_vault: Box<Account<'info, Vault>>,

    /// CHECK: successor's PDA signer
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, successor_vault.key().as_ref()],
        bump = successor_vault.authority_bump,
    )]
    pub successor_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [POOL_SEED, successor_vault.key().as_ref(), pool.token_mint.as_ref()],
        bump = successor_pool.bump,
        constraint = successor_pool.vault == successor_vault.key() @ VaultError::InvalidSuccessor,
    )]
    pub successor_pool: Box<Account<'info, Pool>>,

    #[account(
        mut,
        address = successor_pool.claim_mint,
    )]
    pub successor_claim_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = successor_pool.token_reserve,
    )]
    pub successor_reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = holder,
        associated_token::mint = successor_claim_mint,
        associated_token::authority = holder,
    )]
    pub holder_successor_claim: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MigrateTokenPosition<'info> {
    pub fn migrate_token_position(&mut self, amount: u64) -> Result<()> {
        require_eq!(
            self.claim_mint.supply,
            self.pool.total_claim_shares,
            VaultError::ClaimSupplyMismatch
        );
        self.successor_vault
            .assert_registered(&self.successor_pool.key())?;

        let redemption = self.pool.plan_withdrawal(
            &self.vault,
            self.holder_claim.amount,
            self.token_reserve.amount,
            amount,
        )?;

        self.pool.record_withdrawal(&redemption)?;
        self.successor_pool.accept_migrated_position(
            &self.successor_vault,
            &self.vault.key(),
            redemption.amount,
        )?;

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
            &self.successor_reserve.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        let successor_key = self.successor_vault.key();
        let successor_seeds = &[
            VAULT_AUTHORITY_SEED,
            successor_key.as_ref(),
            &[self.successor_vault.authority_bump],
        ];

        mint_claim_shares(
            redemption.amount,
            &self.token_program.to_account_info(),
            &self.successor_claim_mint.to_account_info(),
            &self.holder_successor_claim.to_account_info(),
            &self.successor_authority.to_account_info(),
            successor_seeds,
        )?;

        emit!(Migration {
            vault: self.vault.key(),
            source: self.holder.key(),
            destination: self.successor_pool.key(),
            amount: redemption.amount,
        });

        msg!(
            "Migrated {} tokens into pool {}",
            redemption.amount,
            self.successor_pool.key()
        );

        Ok(())
    }
}
