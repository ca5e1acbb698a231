// Deposit Liquidity Instruction
//
// First deposit: LP = sqrt(a * b) - MINIMUM_LIQUIDITY
// Later deposits: LP proportional to the smaller side's share of the pool

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, errors::VenueError, helpers::*, state::*};

#[derive(Accounts)]
pub struct DepositLiquidity<'info> {
    #[account(mut)]
    pub depositor: Signer<'info>,

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
        token::authority = depositor,
    )]
    pub depositor_token_a: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = token_b_mint,
        token::authority = depositor,
    )]
    pub depositor_token_b: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = depositor,
        associated_token::mint = lp_token_mint,
        associated_token::authority = depositor,
    )]
    pub depositor_lp_token: Box<Account<'info, TokenAccount>>,

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

impl<'info> DepositLiquidity<'info> {
    pub fn deposit_liquidity(
        &mut self,
        desired_amount_a: u64,
        desired_amount_b: u64,
        max_amount_a: u64,
        max_amount_b: u64,
        expiration: i64,
    ) -> Result<()> {
        self.pool_config.assert_not_locked()?;
        validate_expiration(expiration)?;

        require!(desired_amount_a > 0, VenueError::ZeroAmount);
        require!(desired_amount_b > 0, VenueError::ZeroAmount);

        let lp_supply = self.lp_token_mint.supply;
        let (amount_a, amount_b, lp_tokens) = if lp_supply == 0 {
            first_deposit(desired_amount_a, desired_amount_b)?
        } else {
            subsequent_deposit(
                desired_amount_a,
                desired_amount_b,
                self.token_a_vault.amount,
                self.token_b_vault.amount,
                lp_supply,
            )?
        };

        require!(amount_a <= max_amount_a, VenueError::ExcessiveDepositAmount);
        require!(amount_b <= max_amount_b, VenueError::ExcessiveDepositAmount);
        require!(lp_tokens > 0, VenueError::InsufficientLiquidity);

        let token_program = self.token_program.to_account_info();
        let depositor = self.depositor.to_account_info();

        transfer_tokens(
            amount_a,
            &token_program,
            &self.depositor_token_a.to_account_info(),
            &self.token_a_vault.to_account_info(),
            &depositor,
        )?;
        transfer_tokens(
            amount_b,
            &token_program,
            &self.depositor_token_b.to_account_info(),
            &self.token_b_vault.to_account_info(),
            &depositor,
        )?;

        let pool_config_key = self.pool_config.key();
        let authority_seeds = &[
            AMM_AUTHORITY_SEED,
            pool_config_key.as_ref(),
            &[self.pool_config.authority_bump],
        ];

        mint_lp_tokens(
            lp_tokens,
            &token_program,
            &self.lp_token_mint.to_account_info(),
            &self.depositor_lp_token.to_account_info(),
            &self.pool_authority.to_account_info(),
            authority_seeds,
        )?;

        msg!("Deposited: {} A, {} B -> {} LP", amount_a, amount_b, lp_tokens);

        Ok(())
    }
}
