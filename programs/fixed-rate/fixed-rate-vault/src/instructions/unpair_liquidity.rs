// Unpair Liquidity Instruction
//
// Unstakes (if farmed) and removes the pool's LP, then runs the fixed-rate
// compensation swap: the pool keeps exactly its depositors' entitlement and
// every remaining base unit lands in the vault reserve.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    adapters::{AmmAccounts, AmmVenue, FarmSink},
    constants::*,
    errors::VaultError,
    events::LiquidityReturned,
    state::*,
    venue::{unwind_position, RewardSink},
};

#[derive(Accounts)]
pub struct UnpairLiquidity<'info> {
    #[account(mut)]
    pub operator: Signer<'info>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vault.operator.as_ref(), &vault.vault_id.to_le_bytes()],
        bump = vault.bump,
    )]
    pub vault: Box<Account<'info, Vault>>,

    #[account(
        mut,
        has_one = vault,
        seeds = [POOL_SEED, vault.key().as_ref(), pool.token_mint.as_ref()],
        bump = pool.bump,
    )]
    pub pool: Box<Account<'info, Pool>>,

    /// CHECK: PDA signer, owner of every reserve
    #[account(
        mut,
        seeds = [VAULT_AUTHORITY_SEED, vault.key().as_ref()],
        bump = vault.authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        address = vault.base_reserve,
    )]
    pub base_reserve: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = pool.token_reserve,
    )]
    pub token_reserve: Box<Account<'info, TokenAccount>>,

    /// CHECK: must be the vault's configured venue
    #[account(
        executable,
        address = vault.venue_program @ VaultError::InvalidVenueAccount,
    )]
    pub venue_program: UncheckedAccount<'info>,

    /// CHECK: must be the pool the position was opened in
    #[account(address = pool.venue_pool @ VaultError::InvalidVenueAccount)]
    pub venue_pool_config: UncheckedAccount<'info>,

    /// CHECK: venue PDA, verified by the venue itself
    pub venue_authority: UncheckedAccount<'info>,

    #[account(mut)]
    pub venue_lp_mint: Box<Account<'info, Mint>>,

    /// CHECK: verified against the venue pool config
    pub venue_mint_a: UncheckedAccount<'info>,

    /// CHECK: verified against the venue pool config
    pub venue_mint_b: UncheckedAccount<'info>,

    /// CHECK: venue reserve, verified by the venue itself
    #[account(mut)]
    pub venue_vault_a: UncheckedAccount<'info>,

    /// CHECK: venue reserve, verified by the venue itself
    #[account(mut)]
    pub venue_vault_b: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = venue_lp_mint,
        associated_token::authority = vault_authority,
    )]
    pub lp_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> UnpairLiquidity<'info> {
    pub fn unpair_liquidity(
        &mut self,
        min_base_out: u64,
        min_token_out: u64,
        remaining_accounts: &[AccountInfo<'info>],
    ) -> Result<()> {
        self.vault.require_phase(Operation::Unpair)?;
        require!(
            self.vault.roles().can_pair(&self.operator.key()),
            VaultError::OnlyOperator
        );
        self.vault.assert_registered(&self.pool.key())?;

        let params = self
            .pool
            .unwind_params(self.token_reserve.amount, min_base_out, min_token_out)?;

        let vault_key = self.vault.key();
        let bump = [self.vault.authority_bump];
        let authority_seeds: [&[u8]; 3] = [VAULT_AUTHORITY_SEED, vault_key.as_ref(), &bump];
        let signer_seeds: [&[&[u8]]; 1] = [&authority_seeds];

        let mut venue = AmmVenue::new(
            self.amm_accounts(),
            &self.vault.base_mint,
            &self.pool.token_mint,
            &signer_seeds,
        )?;

        let mut farm = FarmSink::from_remaining(
            self.pool.reward_tier,
            self.pool.reward_pid,
            &self.pool.reward_program,
            remaining_accounts,
            self.vault_authority.to_account_info(),
            self.lp_account.to_account_info(),
            self.token_program.to_account_info(),
            &signer_seeds,
        )?;

        let unwind = unwind_position(
            &mut venue,
            farm.as_mut().map(|f| f as &mut dyn RewardSink),
            &params,
        )?;

        let base_cost = self.pool.base_deployed;
        self.vault.record_unwind(base_cost, unwind.base_returned)?;
        self.pool.record_unwind(&unwind)?;

        emit!(LiquidityReturned {
            pool: self.pool.key(),
            base_returned: unwind.base_returned,
            token_retained: unwind.token_retained,
        });

        msg!(
            "Unpaired pool {}: removed {} base / {} token, swap {:?}, vault gets {} base, pool keeps {} token",
            self.pool.key(),
            unwind.base_removed,
            unwind.token_removed,
            unwind.swap,
            unwind.base_returned,
            unwind.token_retained
        );

        Ok(())
    }

    fn amm_accounts(&self) -> AmmAccounts<'info> {
        AmmAccounts {
            program: self.venue_program.to_account_info(),
            pool_config: self.venue_pool_config.to_account_info(),
            pool_authority: self.venue_authority.to_account_info(),
            lp_mint: self.venue_lp_mint.to_account_info(),
            mint_a: self.venue_mint_a.to_account_info(),
            mint_b: self.venue_mint_b.to_account_info(),
            vault_a: self.venue_vault_a.to_account_info(),
            vault_b: self.venue_vault_b.to_account_info(),
            owner: self.vault_authority.to_account_info(),
            owner_base: self.base_reserve.to_account_info(),
            owner_token: self.token_reserve.to_account_info(),
            owner_lp: self.lp_account.to_account_info(),
            token_program: self.token_program.to_account_info(),
            associated_token_program: self.associated_token_program.to_account_info(),
            system_program: self.system_program.to_account_info(),
        }
    }
}
