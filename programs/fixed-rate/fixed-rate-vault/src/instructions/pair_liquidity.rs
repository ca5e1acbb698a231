// Pair Liquidity Instruction
//
// Supplies base from the vault reserve and tokens from the pool reserve to
// the venue. The LP stays with the vault authority, staked in the pool's farm
// when a reward tier is configured. Unused base never leaves the reserve.
//
// Farm accounts (reward tier 1/2 only) follow as remaining accounts, see
// adapters::farm.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{
    adapters::{AmmAccounts, AmmVenue, FarmSink},
    constants::*,
    errors::VaultError,
    events::LiquidityDeployed,
    state::*,
    venue::{open_position, RewardSink},
};

#[derive(Accounts)]
pub struct PairLiquidity<'info> {
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

    #[account(address = vault.base_mint)]
    pub base_mint: Box<Account<'info, Mint>>,

    #[account(address = pool.token_mint)]
    pub token_mint: Box<Account<'info, Mint>>,

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

    /// CHECK: owner and layout verified by the venue adapter
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
        init_if_needed,
        payer = operator,
        associated_token::mint = venue_lp_mint,
        associated_token::authority = vault_authority,
    )]
    pub lp_account: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> PairLiquidity<'info> {
    pub fn pair_liquidity(
        &mut self,
        base_amount: u64,
        token_amount: u64,
        min_base: u64,
        min_token: u64,
        remaining_accounts: &[AccountInfo<'info>],
    ) -> Result<()> {
        self.vault.require_phase(Operation::Pair)?;
        require!(
            self.vault.roles().can_pair(&self.operator.key()),
            VaultError::OnlyOperator
        );
        self.vault.assert_registered(&self.pool.key())?;
        self.vault.check_allocation(base_amount)?;
        self.pool.assert_idle()?;

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

        let added = open_position(
            &mut venue,
            farm.as_mut().map(|f| f as &mut dyn RewardSink),
            base_amount,
            token_amount,
            min_base,
            min_token,
        )?;

        self.vault.record_pairing(added.base_used)?;
        self.vault
            .record_lp_mint(&self.pool.key(), self.venue_lp_mint.key())?;
        self.pool.record_pairing(venue.pool_config(), &added)?;

        emit!(LiquidityDeployed {
            pool: self.pool.key(),
            base_amount: added.base_used,
            token_amount: added.token_used,
            lp_minted: added.lp_minted,
        });

        msg!(
            "Paired pool {}: {} base, {} token, {} LP",
            self.pool.key(),
            added.base_used,
            added.token_used,
            added.lp_minted
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
