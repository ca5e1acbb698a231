// Whole-Reserve Migration
//
// Settlement phase, once only. Sweeps the vault's (or one pool's) entire
// reserve to the successor's token account, typically the withdraw ledger's
// authority. Per-user withdrawals from the source fail afterwards.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VaultError, events::Migration, helpers::*, state::*};

#[derive(Accounts)]
pub struct MigrateVaultLiquidity<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

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
        address = vault.base_reserve,
    )]
    pub base_reserve: Box<Account<'info, TokenAccount>>,

    /// CHECK: any owner; receives the reserve through its ATA
    pub successor: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = operator,
        associated_token::mint = base_mint,
        associated_token::authority = successor,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MigrateVaultLiquidity<'info> {
    pub fn migrate_vault_liquidity(&mut self) -> Result<()> {
        self.vault.require_phase(Operation::Migrate)?;
        require!(
            self.vault.roles().can_migrate(&self.operator.key()),
            VaultError::OnlyMigrator
        );

        let successor = self.successor.key();
        let amount = self.base_reserve.amount;

        self.vault.record_migration(successor, amount)?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        transfer_from_reserve(
            amount,
            &self.token_program.to_account_info(),
            &self.base_reserve.to_account_info(),
            &self.destination.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        emit!(Migration {
            vault: vault_key,
            source: vault_key,
            destination: successor,
            amount,
        });

        msg!("Migrated vault reserve of {} base to {}", amount, successor);

        Ok(())
    }
}

#[derive(Accounts)]
pub struct MigratePoolLiquidity<'info> {
    #[account(mut)]
    pub migrator: Signer<'info>,

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
        address = pool.token_reserve,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    /// CHECK: any owner; receives the reserve through its ATA
    pub successor: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = migrator,
        associated_token::mint = token_mint,
        associated_token::authority = successor,
    )]
    pub destination: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> MigratePoolLiquidity<'info> {
    pub fn migrate_pool_liquidity(&mut self) -> Result<()> {
        self.vault.require_phase(Operation::Migrate)?;
        self.pool.assert_migrator(&self.vault, &self.migrator.key())?;

        let successor = self.successor.key();
        let amount = self.token_reserve.amount;

        self.pool.record_migration(&self.vault, successor, amount)?;

        let vault_key = self.vault.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            vault_key.as_ref(),
            &[self.vault.authority_bump],
        ];

        transfer_from_reserve(
            amount,
            &self.token_program.to_account_info(),
            &self.token_reserve.to_account_info(),
            &self.destination.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        emit!(Migration {
            vault: vault_key,
            source: self.pool.key(),
            destination: successor,
            amount,
        });

        msg!(
            "Migrated pool {} reserve of {} tokens to {}",
            self.pool.key(),
            amount,
            successor
        );

        Ok(())
    }
}
