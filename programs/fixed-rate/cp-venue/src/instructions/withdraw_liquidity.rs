// Withdraw Liquidity Instruction
//
// Burns LP for the same share of each reserve.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VenueError, helpers::*, state::*};

#[derive(Accounts)]
pub struct WithdrawLiquidity<'info> {
    #[account(mut)]
    pub withdrawer: Signer<'info>,

    #[account(
        seeds = [
            AMM_CONFIG_SEED,
            pool_config.token_a_mint.as_ref(),
            pool_config.token_b_mint.as_ref(),
        ],
        bump = pool_config.config_bump,
    )]
    pub pool_config: Box<Account<'info, PoolConfig>>,

    /// CHECK: PDA signer
    #[account(
        seeds = [AMM_AUTHORITY_SEED, pool_config.key().as_ref()],
        bump = pool_config.authority_bump,
    )]
    pub pool_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [LP_MINT_SEED, pool_config.key().as_ref()],
        bump = pool_config.lp_mint_bump,
    )]
    pub lp_token_mint: Box<Account<'info, Mint>>,

    #[account(address = pool_config.token_a_mint)]
    pub token_a_mint: Box<Account<'info, Mint>>,

    #[account(address = pool_config.token_b_mint)]
    pub token_b_mint: Box<Account<'info, Mint>>,

    #[account(
        mut,
        token::mint = token_a_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_b_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = lp_token_mint,
        token::authority = withdrawer,
    )]
    pub withdrawer_lp_token: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_a_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_a_vault: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        associated_token::mint = token_b_mint,
        associated_token::authority = pool_authority,
    )]
    pub token_b_vault: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> WithdrawLiquidity<'info> {
    pub fn withdraw_liquidity(
        &mut self,
        lp_tokens_to_burn: u64,
        min_amount_a: u64,
        min_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        self.pool_config.assert_not_locked()?;
        validate_expiration(expiration)?;

        require!(lp_tokens_to_burn > 0, VenueError::ZeroAmount);
        require!(self.lp_token_mint.supply > 0, VenueError::InsufficientLiquidity);

        let (amount_a, amount_b) = withdrawal_amounts(
            lp_tokens_to_burn,
            self.token_a_vault.amount,
            self.token_b_vault.amount,
            self.lp_token_mint.supply,
        )?;

        require!(amount_a >= min_amount_a, VenueError::InsufficientWithdrawAmount);
        require!(amount_b >= min_amount_b, VenueError::InsufficientWithdrawAmount);
        require!(amount_a > 0 && amount_b > 0, VenueError::InsufficientLiquidity);

        let token_program = self.token_program.to_account_info();

        burn_lp_tokens(
            lp_tokens_to_burn,
            &token_program,
            &self.lp_token_mint.to_account_info(),
            &self.withdrawer_lp_token.to_account_info(),
            &self.withdrawer.to_account_info(),
        )?;

        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            AMM_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        transfer_from_vault(
            amount_a,
            &token_program,
            &self.token_a_vault.to_account_info(),
            &self.withdrawer_token_a.to_account_info(),
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;
        transfer_from_vault(
            amount_b,
            &token_program,
            &self.token_b_vault.to_account_info(),
            &self.withdrawer_token_b.to_account_info(),
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;

        msg!("Withdrawn: {} LP -> {} A, {} B", lp_tokens_to_burn, amount_a, amount_b);

        Ok(())
    }
}
