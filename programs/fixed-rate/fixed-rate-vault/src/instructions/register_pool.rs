// Register Pool Instruction
//
// Creates (or, with override, reconfigures) the pool for one token.
// A pool that already holds deposits cannot be reconfigured.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, events::PoolRegistered, state::*};

#[derive(Accounts)]
pub struct RegisterPool<'info> {
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

    pub token_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = operator,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
        seeds = [POOL_SEED, vault.key().as_ref(), token_mint.key().as_ref()],
        bump
    )]
    pub pool: Box<Account<'info, Pool>>,

    #[account(
        init_if_needed,
        payer = operator,
        seeds = [CLAIM_MINT_SEED, pool.key().as_ref()],
        bump,
        mint::decimals = token_mint.decimals,
        mint::authority = vault_authority,
    )]
    pub claim_mint: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = operator,
        associated_token::mint = token_mint,
        associated_token::authority = vault_authority,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> RegisterPool<'info> {
    #[allow(clippy::too_many_arguments)]
    pub fn register_pool(
        &mut self,
        fixed_rate_bps: u16,
        swap_tolerance: u64,
        reward_tier: RewardTier,
        reward_program: Pubkey,
        reward_pid: u64,
        override_existing: bool,
        bumps: &RegisterPoolBumps,
    ) -> Result<()> {
        self.vault.assert_operator(&self.operator.key())?;

        let existing = self.pool.is_configured();

        self.vault.register_pool(
            PoolEntry {
                token_mint: self.token_mint.key(),
                pool: self.pool.key(),
                ..PoolEntry::default()
            },
            override_existing,
        )?;

        self.pool.configure(
            fixed_rate_bps,
            swap_tolerance,
            reward_tier,
            reward_program,
            reward_pid,
        )?;

        if !existing {
            self.pool.vault = self.vault.key();
            self.pool.token_mint = self.token_mint.key();
            self.pool.claim_mint = self.claim_mint.key();
            self.pool.token_reserve = self.token_reserve.key();
            self.pool.migrator = self.vault.operator;
            self.pool.bump = bumps.pool;
            self.pool.claim_mint_bump = bumps.claim_mint;
        }

        emit!(PoolRegistered {
            vault: self.vault.key(),
            pool: self.pool.key(),
            token_mint: self.token_mint.key(),
            fixed_rate_bps,
        });

        msg!(
            "Pool {} for {}: fixed rate {} bps, reward tier {:?}",
            self.pool.key(),
            self.token_mint.key(),
            fixed_rate_bps,
            reward_tier
        );

        Ok(())
    }
}
