// Open Claims Instructions
//
// Permissionless, once per source (the claim pool PDA can only be created
// once). The source must have migrated its reserve to the ledger authority.
// The snapshot is the balance and claim supply the source recorded at
// migration; tokens sent to the escrow afterwards do not change it. The escrow
// is registered on the ledger so a rescue has to zero its claim pool.

use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, TokenAccount};
use fixed_rate_vault::state::{Pool, Vault};

use crate::{constants::*, errors::LedgerError, events::ClaimsOpened, state::*};

#[derive(Accounts)]
pub struct OpenVaultClaims<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.guardian.as_ref(), ledger.vault.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: PDA owner of the escrows
    #[account(
        seeds = [LEDGER_AUTHORITY_SEED, ledger.key().as_ref()],
        bump = ledger.authority_bump,
    )]
    pub ledger_authority: UncheckedAccount<'info>,

    #[account(address = ledger.vault @ LedgerError::SourceNotListed)]
    pub vault: Box<Account<'info, Vault>>,

    #[account(address = vault.base_mint)]
    pub asset_mint: Box<Account<'info, Mint>>,

    #[account(address = vault.claim_mint)]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        associated_token::mint = asset_mint,
        associated_token::authority = ledger_authority,
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + ClaimPool::INIT_SPACE,
        seeds = [CLAIM_POOL_SEED, ledger.key().as_ref(), vault.key().as_ref()],
        bump
    )]
    pub claim_pool: Box<Account<'info, ClaimPool>>,

    pub system_program: Program<'info, System>,
}

impl<'info> OpenVaultClaims<'info> {
    pub fn open_vault_claims(&mut self, bumps: &OpenVaultClaimsBumps) -> Result<()> {
        require!(self.vault.migrated, LedgerError::SourceNotMigrated);
        require_keys_eq!(
            self.vault.migrated_to,
            self.ledger_authority.key(),
            LedgerError::SourceNotMigrated
        );

        self.claim_pool.set_inner(ClaimPool {
            ledger: self.ledger.key(),
            source: self.vault.key(),
            kind: SourceKind::Vault,
            claim_mint: self.claim_mint.key(),
            asset_mint: self.asset_mint.key(),
            escrow: self.escrow.key(),
            bump: bumps.claim_pool,
            ..ClaimPool::default()
        });
        let balance = self.vault.migrated_balance;
        let shares = self.vault.migrated_shares;
        require!(self.escrow.amount >= balance, LedgerError::EscrowShortfall);

        self.claim_pool.open(balance, shares);
        self.ledger.register_escrow(self.escrow.key())?;

        emit!(ClaimsOpened {
            ledger: self.ledger.key(),
            claim_pool: self.claim_pool.key(),
            source: self.vault.key(),
            snapshot_balance: balance,
            snapshot_shares: shares,
        });

        msg!("Vault claims open: {} base for {} shares", balance, shares);

        Ok(())
    }
}

#[derive(Accounts)]
pub struct OpenPoolClaims<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LEDGER_SEED, ledger.guardian.as_ref(), ledger.vault.as_ref()],
        bump = ledger.bump,
    )]
    pub ledger: Box<Account<'info, Ledger>>,

    /// CHECK: PDA owner of the escrows
    #[account(
        seeds = [LEDGER_AUTHORITY_SEED, ledger.key().as_ref()],
        bump = ledger.authority_bump,
    )]
    pub ledger_authority: UncheckedAccount<'info>,

    #[account(
        constraint = pool.vault == ledger.vault @ LedgerError::SourceNotListed,
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(address = pool.token_mint)]
    pub asset_mint: Box<Account<'info, Mint>>,

    #[account(address = pool.claim_mint)]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        associated_token::mint = asset_mint,
        associated_token::authority = ledger_authority,
    )]
    pub escrow: Box<Account<'info, TokenAccount>>,

    #[account(
        init,
        payer = payer,
        space = ANCHOR_DISCRIMINATOR + ClaimPool::INIT_SPACE,
        seeds = [CLAIM_POOL_SEED, ledger.key().as_ref(), pool.key().as_ref()],
        bump
    )]
    pub claim_pool: Box<Account<'info, ClaimPool>>,

    pub system_program: Program<'info, System>,
}

impl<'info> OpenPoolClaims<'info> {
    pub fn open_pool_claims(&mut self, bumps: &OpenPoolClaimsBumps) -> Result<()> {
        require!(self.ledger.lists_pool(&self.pool.key()), LedgerError::SourceNotListed);
        require!(self.pool.migrated, LedgerError::SourceNotMigrated);
        require_keys_eq!(
            self.pool.migrated_to,
            self.ledger_authority.key(),
            LedgerError::SourceNotMigrated
        );

        self.claim_pool.set_inner(ClaimPool {
            ledger: self.ledger.key(),
            source: self.pool.key(),
            kind: SourceKind::Pool,
            claim_mint: self.claim_mint.key(),
            asset_mint: self.asset_mint.key(),
            escrow: self.escrow.key(),
            bump: bumps.claim_pool,
            ..ClaimPool::default()
        });
        let balance = self.pool.migrated_balance;
        let shares = self.pool.migrated_shares;
        require!(self.escrow.amount >= balance, LedgerError::EscrowShortfall);

        self.claim_pool.open(balance, shares);
        self.ledger.register_escrow(self.escrow.key())?;

        emit!(ClaimsOpened {
            ledger: self.ledger.key(),
            claim_pool: self.claim_pool.key(),
            source: self.pool.key(),
            snapshot_balance: balance,
            snapshot_shares: shares,
        });

        msg!(
            "Pool {} claims open: {} tokens for {} shares",
            self.pool.key(),
            balance,
            shares
        );

        Ok(())
    }
}
